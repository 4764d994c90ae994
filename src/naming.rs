//! Type-name derivation and Swift identifier rules.
//!
//! JSON keys are arbitrary strings; Swift identifiers are not. Type names are
//! derived by capitalizing each alphanumeric word of the key, property names
//! are the lower-camel form. The original key always survives verbatim in the
//! `CodingKeys` table, so renaming here never changes the wire mapping.
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern"));

const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Protocol", "Self", "Type", "as", "associatedtype", "break", "case", "catch", "class",
    "continue", "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough",
    "false", "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout",
    "internal", "is", "let", "nil", "open", "operator", "private", "protocol", "public", "repeat",
    "rethrows", "return", "self", "static", "struct", "subscript", "super", "switch", "throw",
    "throws", "true", "try", "typealias", "var", "where", "while",
];

fn words(key: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(key).map(|m| m.as_str())
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    // all-caps acronyms ("ID", "URL") lower entirely
    if word.chars().all(|c| !c.is_lowercase()) {
        return word.to_lowercase();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn guard_leading_digit(mut ident: String) -> String {
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Derived type name for a nested object found under `key`.
///
/// `user` → `User`, `user_profile` → `UserProfile`, `2fa` → `_2fa`.
pub fn derive_type_name(key: &str) -> String {
    let name: String = words(key).map(upper_first).collect();
    guard_leading_digit(name)
}

/// Swift property identifier for `key`, backtick-escaped when it collides
/// with a keyword.
pub fn property_name(key: &str) -> String {
    let mut ident = String::new();
    for (i, word) in words(key).enumerate() {
        if i == 0 {
            ident.push_str(&lower_first(word));
        } else {
            ident.push_str(&upper_first(word));
        }
    }
    let ident = guard_leading_digit(ident);
    if SWIFT_KEYWORDS.contains(&ident.as_str()) {
        format!("`{ident}`")
    } else {
        ident
    }
}

/// Property identifiers for every key of one type, made unique in order.
///
/// Keys such as `first_name` and `firstName` map to the same identifier; the
/// later one gets a numeric suffix.
pub fn property_names<'a, I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut taken = HashSet::<String>::new();
    let mut out = Vec::new();
    for key in keys {
        let base = property_name(key);
        let mut ident = base.clone();
        let mut n = 2;
        while !taken.insert(ident.clone()) {
            ident = format!("{}{n}", base.trim_end_matches('`'));
            if base.starts_with('`') {
                ident.push('`');
            }
            n += 1;
        }
        out.push(ident);
    }
    out
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_keys_capitalize() {
        assert_eq!(derive_type_name("user"), "User");
        assert_eq!(derive_type_name("data"), "Data");
        assert_eq!(derive_type_name("a"), "A");
    }

    #[test]
    fn separators_join_into_upper_camel() {
        assert_eq!(derive_type_name("user_profile"), "UserProfile");
        assert_eq!(derive_type_name("user-profile"), "UserProfile");
        assert_eq!(derive_type_name("userProfile"), "UserProfile");
        assert_eq!(derive_type_name("home address"), "HomeAddress");
    }

    #[test]
    fn degenerate_keys_stay_identifiers() {
        assert_eq!(derive_type_name("2fa"), "_2fa");
        assert_eq!(derive_type_name("--"), "_");
        assert_eq!(derive_type_name(""), "_");
    }

    #[test]
    fn property_names_are_lower_camel() {
        assert_eq!(property_name("id"), "id");
        assert_eq!(property_name("first_name"), "firstName");
        assert_eq!(property_name("Name"), "name");
        assert_eq!(property_name("ID"), "id");
        assert_eq!(property_name("userID"), "userID");
        assert_eq!(property_name("9lives"), "_9lives");
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(property_name("default"), "`default`");
        assert_eq!(property_name("class"), "`class`");
        assert_eq!(property_name("classes"), "classes");
    }

    #[test]
    fn colliding_identifiers_get_suffixes() {
        let names = property_names(["first_name", "firstName", "first-name"]);
        assert_eq!(names, ["firstName", "firstName2", "firstName3"]);

        let names = property_names(["default", "Default"]);
        assert_eq!(names, ["`default`", "`default2`"]);
    }
}
