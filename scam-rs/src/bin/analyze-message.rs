//! One-shot analyzer: reads `{"content": ...}` from stdin, prints the
//! analysis (or an error object) as JSON on stdout.

use clap::Parser;
use scam_rs::analysis::{AnalysisResponse, Analyzer, ErrorResponse};
use scam_rs::config::Config;
use scam_rs::error::ScamError;
use scam_rs::logging::{self, LogTarget};
use scam_rs::model::load_model;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "analyze-message")]
#[command(about = "Analyze a message read from stdin as JSON", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model artifact, overrides the configuration
    #[arg(short, long)]
    model: Option<String>,

    /// Label of the scam class, overrides the configuration
    #[arg(long)]
    spam_label: Option<String>,
}

fn emit(response: &AnalysisResponse) {
    match serde_json::to_string(response) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{{\"error\":\"Analysis failed: {}\"}}", e),
    }
}

fn fail(error: ScamError) -> ExitCode {
    error!("{}", error);
    emit(&AnalysisResponse::Error(ErrorResponse::new(error.to_string())));
    ExitCode::FAILURE
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return fail(e),
    };
    if let Some(model) = cli.model {
        config.model.path = model;
    }
    if let Some(label) = cli.spam_label {
        config.model.spam_label = label;
    }
    if let Err(e) = config.validate() {
        return fail(e);
    }

    if let Err(e) = logging::init(&config.logging, LogTarget::Stderr) {
        eprintln!("{}", e);
    }

    let model = match load_model(&config.model.path) {
        Ok(model) => model,
        Err(e) => return fail(e),
    };
    let analyzer = Analyzer::new(Arc::new(model), config.model.spam_label);

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        return fail(ScamError::Analysis(e.to_string()));
    }

    let request = match serde_json::from_str::<Value>(&input) {
        Ok(Value::Object(request)) => request,
        Ok(other) => {
            return fail(ScamError::Analysis(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
        Err(e) => return fail(ScamError::Analysis(e.to_string())),
    };

    debug!(
        "Analyzing {} message",
        request
            .get("messageType")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("general")
    );

    let content = request.get("content").and_then(Value::as_str);
    let response = analyzer.respond(content);
    emit(&response);

    match response {
        AnalysisResponse::Error(ref e) if e.error != ScamError::EmptyContent.to_string() => {
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    }
}
