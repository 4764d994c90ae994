//! Endpoint stub for the whole request.
//!
//! Three self-contained ways of calling the same endpoint, always emitted
//! together: a declarative route value, a verb-annotated service method, and
//! an async/await call. Each one names the method, the path and both root
//! types verbatim.
use super::Artifact;
use super::swift::{SwiftWriter, string_literal};
use super::{model, wire};
use crate::http::HttpMethod;

pub const SUFFIX: &str = "Route";

/// Path used when the caller gives none.
pub const DEFAULT_PATH: &str = "/";

pub fn emit(method: HttpMethod, path: &str, root: &str) -> Artifact {
    let path = if path.is_empty() { DEFAULT_PATH } else { path };
    let path = string_literal(path);
    let method = method.as_str();
    let response = format!("{root}{}", wire::SUFFIX);
    let model = format!("{root}{}", model::SUFFIX);
    let name = format!("{root}{SUFFIX}");

    let mut w = SwiftWriter::new();
    w.imports(&["Foundation", "RemoteRequest"]);

    w.line("// MARK: - Declarative route");
    w.blank();
    w.open(format!("struct {name}: Route"));
    w.line(format!("typealias Response = {response}"));
    w.line(format!("typealias Output = {model}"));
    w.blank();
    w.line(format!("let method = \"{method}\""));
    w.line(format!("let path = {path}"));
    w.close();
    w.blank();

    w.line("// MARK: - Verb annotation");
    w.blank();
    w.open(format!("protocol {root}Service"));
    w.line(format!("@{method}({path})"));
    w.line(format!("func request{root}() -> Request<{response}, {model}>"));
    w.close();
    w.blank();

    w.line("// MARK: - Async/await");
    w.blank();
    w.open(format!("func request{root}(client: RemoteRequestClient) async throws -> {model}"));
    w.line(format!("let response: {response} = try await client.request(method: \"{method}\", path: {path})"));
    w.open("guard let model = response.toDomainModel() else");
    w.line("throw RemoteRequestError.mappingFailed");
    w.close();
    w.line("return model");
    w.close();

    Artifact { name, source_text: w.into_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(src: &str) -> Vec<&str> {
        src.split("// MARK: - ").skip(1).collect()
    }

    #[test]
    fn empty_path_defaults_to_root() {
        let route = emit(HttpMethod::Get, "", "Api");
        assert_eq!(route.name, "ApiRoute");
        assert!(route.source_text.contains("let path = \"/\""));
        assert!(route.source_text.contains("@GET(\"/\")"));
    }

    #[test]
    fn every_block_names_method_and_both_types() {
        let route = emit(HttpMethod::Get, "", "Api");
        let blocks = blocks(&route.source_text);
        assert_eq!(blocks.len(), 3);
        for block in blocks {
            assert!(block.contains("ApiResponse"), "{block}");
            assert!(block.contains("ApiModel"), "{block}");
            assert!(block.contains("GET"), "{block}");
            assert!(block.contains("\"/\""), "{block}");
        }
    }

    #[test]
    fn method_and_path_are_embedded_verbatim() {
        let route = emit(HttpMethod::Delete, "/users/{id}", "User");
        let src = &route.source_text;
        assert!(src.contains("@DELETE(\"/users/{id}\")"));
        assert!(src.contains("method: \"DELETE\", path: \"/users/{id}\""));
        assert!(src.contains("func requestUser(client: RemoteRequestClient) async throws -> UserModel"));
    }
}
