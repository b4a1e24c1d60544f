#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use args::Args;
use clap::Parser;
use lexis_config::Config;
use lexis_translate::{GoogleTranslateProvider, TranslateError, TranslationProvider, TranslationRequest, TranslationResponse};
use url::Url;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version requests are not failures
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    if let Err(e) = lexis_telemetry::init(&args.log_filter) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let response = match run(&args).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("{}", e.diagnostic());
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", response.to_json_line()).and_then(|()| stdout.flush()) {
        eprintln!("failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Decode stdin, resolve configuration, then make the one provider call
///
/// Each step short-circuits, so neither bad input nor missing configuration
/// ever reaches the network.
async fn run(args: &Args) -> Result<TranslationResponse, TranslateError> {
    let request = TranslationRequest::from_reader(io::stdin().lock())?;

    let config = load_config(args).map_err(|e| TranslateError::Config(format!("{e:#}")))?;

    let provider = GoogleTranslateProvider::from_config(&config.provider)?;

    tracing::debug!(
        provider = provider.name(),
        endpoint = provider.endpoint(),
        "configuration resolved"
    );

    provider.translate(&request).await
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    let Some(ref base_url) = args.base_url else {
        return Ok(config);
    };

    let base_url = Url::parse(base_url).map_err(|e| anyhow::anyhow!("--base-url is not a valid URL: {e}"))?;
    let config = config.with_base_url(base_url);
    config.validate()?;

    Ok(config)
}
