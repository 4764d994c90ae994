//! Minimal CLI: sample → Swift (response | model | request | route)
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::codegen::Artifact;
use crate::config;
use crate::generate::{self, GenerateOptions, GenerationRequest, GenerationResult};
use crate::http::HttpMethod;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer types from one sample JSON response and emit Swift sources for the RemoteRequest client
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// more log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and print the selected Swift artifacts
    Generate(GenerateOut),
    /// print the built-in sample response
    Sample,
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// sample JSON file, or '-' for stdin
    input: Option<String>,

    /// JSON request file (root_type_name, json_text, url, http_method, options)
    #[arg(long)]
    config: Option<PathBuf>,

    /// jq filter selecting the sample object inside the input document (e.g. '.data')
    #[arg(long)]
    jq_expr: Option<String>,
}

#[derive(Args, Debug, Clone, Copy)]
struct Toggles {
    /// emit `<Name>Response` wire types
    #[arg(long)]
    response: bool,
    /// emit `<Name>Model` domain models
    #[arg(long)]
    model: bool,
    /// emit `<Name>Request` request bodies
    #[arg(long)]
    request: bool,
    /// emit the `<Root>Route` endpoint stub
    #[arg(long)]
    route: bool,
    /// emit everything
    #[arg(long)]
    all: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    toggles: Toggles,

    /// root type name [default: Api]
    #[arg(long)]
    root_type: Option<String>,

    /// endpoint path for the route stub [default: /]
    #[arg(long)]
    url: Option<String>,

    /// HTTP method for the route stub (GET, POST, PATCH, PUT, DELETE) [default: GET]
    #[arg(long)]
    method: Option<HttpMethod>,

    /// stdout format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// write one `<Name>.swift` per artifact into this directory instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Build the request: request file first, then the sample input on top.
    fn load_request(&self) -> Result<GenerationRequest> {
        let mut request = match &self.config {
            Some(path) => config::load_request(path)?,
            None if self.input.is_none() => {
                bail!("no sample given: pass a JSON file, '-' for stdin, or --config")
            }
            None => GenerationRequest::default(),
        };
        if let Some(input) = &self.input {
            request.json_text = read_source(input)?;
        }
        if let Some(jq_expr) = &self.jq_expr {
            let document = serde_json::from_str::<serde_json::Value>(&request.json_text)
                .context("--jq-expr needs the input to be valid JSON")?;
            let sample = crate::jq_exec::select_sample(jq_expr, &document)?;
            request.json_text = serde_json::to_string_pretty(&sample)?;
        }
        Ok(request)
    }
}

impl Toggles {
    fn options(&self) -> Option<GenerateOptions> {
        if self.all {
            return Some(GenerateOptions::all());
        }
        if !(self.response || self.model || self.request || self.route) {
            return None;
        }
        Some(GenerateOptions {
            emit_wire_type: self.response,
            emit_domain_model: self.model,
            emit_request_body: self.request,
            emit_route: self.route,
        })
    }
}

impl GenerateOut {
    fn request(&self) -> Result<GenerationRequest> {
        let mut request = self.input_settings.load_request()?;
        if let Some(root_type) = &self.root_type {
            request.root_type_name = root_type.clone();
        }
        if let Some(url) = &self.url {
            request.url = url.clone();
        }
        if let Some(method) = self.method {
            request.http_method = method;
        }
        if let Some(options) = self.toggles.options() {
            request.options = options;
        }
        Ok(request)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Install the stderr log subscriber.
    pub fn init_tracing(&self) {
        let default_level = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Sample => {
                println!("{}", generate::SAMPLE_JSON);
                Ok(())
            }
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let request = target.request()?;
                let result = generate::generate(&request)?;

                match (&target.out, target.format) {
                    (Some(dir), _) => write_artifacts(dir, &result),
                    (None, OutputFormat::Json) => {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                        Ok(())
                    }
                    (None, OutputFormat::Text) => {
                        print_text(&result);
                        Ok(())
                    }
                }
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn read_source(input: &str) -> Result<String> {
    if input == "-" {
        let mut src = String::new();
        std::io::stdin().read_to_string(&mut src).context("failed to read sample from stdin")?;
        return Ok(src);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read sample file {input}"))
}

/// Headings go to stderr so stdout stays pure Swift.
fn print_text(result: &GenerationResult) {
    let sections: [(&str, &[Artifact]); 3] = [
        ("Response", result.wire_types.as_slice()),
        ("Model", result.domain_models.as_slice()),
        ("Request body", result.request_bodies.as_slice()),
    ];
    for (title, artifacts) in sections {
        if artifacts.is_empty() {
            continue;
        }
        eprintln!("{}", format!("== {title} ==").bold().cyan());
        for artifact in artifacts {
            print_artifact(artifact);
        }
    }
    if let Some(route) = &result.route {
        eprintln!("{}", "== Route ==".bold().cyan());
        print_artifact(route);
    }
}

fn print_artifact(artifact: &Artifact) {
    eprintln!("{}", format!("// {}", artifact.name).dimmed());
    println!("{}", artifact.source_text);
}

fn write_artifacts(dir: &Path, result: &GenerationResult) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let mut written = 0usize;
    for artifact in result.artifacts() {
        let path = artifact_path(dir, &artifact.name)?;
        std::fs::write(&path, &artifact.source_text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote artifact");
        written += 1;
    }
    eprintln!("{} {written} file(s) to {}", "wrote".green().bold(), dir.display());
    Ok(())
}

/// `<dir>/<name>.swift`, refusing names that would leave `dir`.
fn artifact_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let file_name = format!("{name}.swift");
    let mut components = Path::new(&file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(dir.join(file_name)),
        _ => bail!("artifact name `{name}` is not a plain file name; check --root-type"),
    }
}
