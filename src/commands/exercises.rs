use crate::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

pub fn handle_exercise_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Stats { file } => run_statistics(cli, file),
        Commands::Convert { file } => run_conversion(cli, file),
        Commands::Wordcount { file } => run_word_count(cli, file),
    }
}

fn load(file: &Path) -> anyhow::Result<Vec<String>> {
    debug!(input = %file.display(), "reading tokens");
    let tokens = read_tokens(file)?;
    debug!(tokens = tokens.len(), "tokens read");
    Ok(tokens)
}

fn save_results(
    cli: &Cli,
    prefix: &str,
    input: &Path,
    lines: &[String],
) -> anyhow::Result<Option<PathBuf>> {
    if cli.no_save {
        return Ok(None);
    }
    let path = output_path(&cli.output_dir, prefix, input);
    debug!(path = %path.display(), "writing results");
    write_report(&path, lines)?;
    Ok(Some(path))
}

fn path_string(p: Option<&PathBuf>) -> Option<String> {
    p.map(|p| p.display().to_string())
}

fn run_statistics(cli: &Cli, file: &Path) -> anyhow::Result<()> {
    let start = Instant::now();
    let input_file = file.display().to_string();
    let tokens = load(file)?;

    let mut values = Vec::with_capacity(tokens.len());
    let mut invalid_tokens = Vec::new();
    for t in tokens {
        match parse_number(&t) {
            Ok(v) => values.push(v),
            Err(e) => {
                warn!(token = %t, reason = %e, "invalid token skipped");
                invalid_tokens.push(t);
            }
        }
    }

    let elapsed_secs = start.elapsed().as_secs_f64();
    let summary = statistics::summarize(&values);
    let lines = statistics::report_lines(
        &input_file,
        values.len(),
        invalid_tokens.len(),
        summary.as_ref(),
        elapsed_secs,
    );
    let saved = save_results(cli, statistics::RESULTS_PREFIX, file, &lines)?;
    info!(
        count = values.len(),
        invalid = invalid_tokens.len(),
        elapsed_secs,
        "statistics complete"
    );

    let report = StatisticsReport {
        input_file,
        output_file: path_string(saved.as_ref()),
        count: values.len(),
        invalid: invalid_tokens.len(),
        invalid_tokens,
        summary,
        elapsed_secs,
    };
    print_report(
        cli.json,
        &report,
        &report.invalid_tokens,
        &lines,
        saved.as_deref(),
    )
}

fn run_conversion(cli: &Cli, file: &Path) -> anyhow::Result<()> {
    let start = Instant::now();
    let input_file = file.display().to_string();
    let tokens = load(file)?;

    let rows: Vec<ConversionRow> = tokens.iter().map(|t| convert_token(t)).collect();
    let mut skipped = Vec::new();
    for row in &rows {
        if let ConversionRow::Rejected { token, error } = row {
            warn!(token = %token, reason = %error, "invalid token skipped");
            skipped.push(token.clone());
        }
    }
    let invalid = skipped.len();
    let valid = rows.len() - invalid;

    let elapsed_secs = start.elapsed().as_secs_f64();
    let lines = conversion::report_lines(&input_file, &rows, valid, invalid, elapsed_secs);
    let saved = save_results(cli, conversion::RESULTS_PREFIX, file, &lines)?;
    info!(valid, invalid, elapsed_secs, "conversion complete");

    let report = ConversionReport {
        input_file,
        output_file: path_string(saved.as_ref()),
        rows,
        valid,
        invalid,
        elapsed_secs,
    };
    print_report(cli.json, &report, &skipped, &lines, saved.as_deref())
}

fn run_word_count(cli: &Cli, file: &Path) -> anyhow::Result<()> {
    let start = Instant::now();
    let input_file = file.display().to_string();
    let tokens = load(file)?;

    let counts = count_words(&tokens);
    for t in &counts.invalid_tokens {
        warn!(token = %t, reason = "no letters or digits", "invalid token skipped");
    }

    let elapsed_secs = start.elapsed().as_secs_f64();
    let lines = word_count::report_lines(&input_file, &counts, elapsed_secs);
    let saved = save_results(cli, word_count::RESULTS_PREFIX, file, &lines)?;
    info!(
        valid = counts.valid,
        invalid = counts.invalid(),
        distinct = counts.counts.len(),
        elapsed_secs,
        "word count complete"
    );

    let report = WordCountReport {
        input_file,
        output_file: path_string(saved.as_ref()),
        valid: counts.valid,
        invalid: counts.invalid(),
        words: counts.entries(),
        invalid_tokens: counts.invalid_tokens,
        elapsed_secs,
    };
    print_report(
        cli.json,
        &report,
        &report.invalid_tokens,
        &lines,
        saved.as_deref(),
    )
}
