use std::path::PathBuf;

use clap::Parser;

/// Lexis translation adapter
///
/// Reads one JSON translation request from standard input and writes the
/// translation as one line of JSON to standard output.
#[derive(Debug, Parser)]
#[command(name = "lexis", version, about = "Translate one JSON request from stdin with Google Cloud Translation")]
pub struct Args {
    /// Path to a TOML configuration file; the environment is used when omitted
    #[arg(short, long, env = "LEXIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the Translation API base URL, taking precedence over the
    /// configuration file and `GOOGLE_TRANSLATE_BASE_URL`
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log filter directive; logs go to standard error
    #[arg(long, default_value = "off", env = "LEXIS_LOG")]
    pub log_filter: String,
}
