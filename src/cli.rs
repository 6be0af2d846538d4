use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Parser, Debug)]
#[command(
    name = "ejercicios",
    version,
    about = "Coursework exercises: statistics, number conversion, word count"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory where the results file is written"
    )]
    pub output_dir: PathBuf,
    #[arg(long, global = true, help = "Do not write the results file")]
    pub no_save: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mean, median, mode, variance and standard deviation of a number file.
    #[command(visible_alias = "compute-statistics", alias = "ejercicio1")]
    Stats { file: PathBuf },
    /// Convert every decimal integer in a file to binary and hexadecimal.
    #[command(visible_alias = "convert-numbers", alias = "ejercicio2")]
    Convert { file: PathBuf },
    /// Frequency of every distinct word in a file.
    #[command(visible_alias = "word-count", alias = "ejercicio3")]
    Wordcount { file: PathBuf },
}
