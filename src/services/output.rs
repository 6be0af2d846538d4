use crate::domain::models::JsonOut;
use serde::Serialize;
use std::path::Path;

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Text mode: skipped tokens, then the report, then where it was saved.
pub fn print_report<T: Serialize>(
    json: bool,
    data: T,
    skipped: &[String],
    lines: &[String],
    saved_to: Option<&Path>,
) -> anyhow::Result<()> {
    if json {
        return print_json(data);
    }
    for t in skipped {
        println!("Invalid token skipped: {}", t);
    }
    println!("{}", lines.join("\n"));
    if let Some(p) = saved_to {
        println!("\nResults saved to: {}", p.display());
    }
    Ok(())
}
