//! Golden-file runner: `fixtures/<case>/{request.json, sample.json}` must
//! generate exactly `fixtures/<case>/expected.swift`.
//!
//! cargo run -p dev-test-runner [-- --bless] [fixtures-dir]
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use remote_request_gen::{GenerationResult, config, generate};

fn render(result: &GenerationResult) -> String {
    result
        .artifacts()
        .map(|a| format!("// ==== {} ====\n{}\n", a.name, a.source_text))
        .collect()
}

fn run_case(dir: &Path, bless: bool) -> Result<bool> {
    let mut request = config::load_request(&dir.join("request.json"))?;
    let sample_path = dir.join("sample.json");
    request.json_text = std::fs::read_to_string(&sample_path)
        .with_context(|| format!("failed to read {}", sample_path.display()))?;

    let actual = render(&generate(&request)?);
    let expected_path = dir.join("expected.swift");

    if bless {
        std::fs::write(&expected_path, &actual)
            .with_context(|| format!("failed to write {}", expected_path.display()))?;
        return Ok(true);
    }

    let expected = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("failed to read {}", expected_path.display()))?;
    if actual == expected {
        return Ok(true);
    }

    let mismatch = expected
        .lines()
        .zip(actual.lines())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.lines().count().min(actual.lines().count()));
    eprintln!("   first difference at line {}", mismatch + 1);
    eprintln!("   expected: {:?}", expected.lines().nth(mismatch).unwrap_or("<eof>"));
    eprintln!("   actual:   {:?}", actual.lines().nth(mismatch).unwrap_or("<eof>"));
    Ok(false)
}

fn main() -> Result<()> {
    let mut bless = false;
    let mut root = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures"));
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--bless" => bless = true,
            other => root = PathBuf::from(other),
        }
    }

    let pattern = root.join("*").join("request.json");
    let pattern = pattern.to_string_lossy();
    let mut failures = 0usize;
    let mut total = 0usize;
    for entry in glob::glob(&pattern)? {
        let request_path = entry?;
        let Some(case_dir) = request_path.parent() else { continue };
        let case = case_dir.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        total += 1;
        match run_case(case_dir, bless) {
            Ok(true) => eprintln!("✅ {case}"),
            Ok(false) => {
                failures += 1;
                eprintln!("{} {case}", "❌ mismatch".red());
            }
            Err(error) => {
                failures += 1;
                eprintln!("{} {case}: {error:#}", "❌ failed".red());
            }
        }
    }

    if total == 0 {
        bail!("no fixtures matched {pattern}");
    }
    if failures > 0 {
        bail!("{failures} of {total} fixture(s) failed");
    }
    eprintln!("{} {total} fixture(s)", "ok".green().bold());
    Ok(())
}
