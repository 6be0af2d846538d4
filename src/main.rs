use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::conversion::{self, convert_token};
pub use services::output::print_report;
pub use services::statistics::{self, parse_number};
pub use services::tokens::{output_path, read_tokens, write_report};
pub use services::word_count::{self, count_words};

fn init_tracing() {
    // stdout carries the report; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ejercicios=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    handle_exercise_commands(&cli)
}
