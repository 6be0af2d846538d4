use crate::domain::models::Summary;
use crate::services::tokens::TokenError;
use std::collections::HashMap;

pub const RESULTS_PREFIX: &str = "StatisticsResults";

/// Accepts `[+-]? digits* ('.' digits*)?` with at least one digit.
/// Exponents, `inf`, `nan` and thousands separators are rejected, as are
/// digit runs too long to fit a finite `f64`.
pub fn parse_number(token: &str) -> Result<f64, TokenError> {
    let s = token.trim();
    if s.is_empty() {
        return Err(TokenError::Empty);
    }
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(TokenError::Invalid);
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(TokenError::Invalid);
    }
    let value = s.parse::<f64>().map_err(|_| TokenError::Invalid)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TokenError::Overflow)
    }
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Most frequent values in first-seen order; empty when nothing repeats.
pub fn mode(values: &[f64]) -> Vec<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();
    for &v in values {
        // Adding 0.0 folds -0.0 into 0.0 so both share a bucket.
        let slot = *index.entry((v + 0.0).to_bits()).or_insert_with(|| {
            counts.push((v, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    if max_count <= 1 {
        return Vec::new();
    }
    counts
        .into_iter()
        .filter(|(_, c)| *c == max_count)
        .map(|(k, _)| k)
        .collect()
}

/// Population variance.
pub fn variance(values: &[f64], avg: f64) -> f64 {
    values.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>() / values.len() as f64
}

pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let avg = mean(values);
    let var = variance(values, avg);
    Some(Summary {
        mean: avg,
        median: median(&sorted),
        modes: mode(values),
        variance: var,
        std_dev: var.sqrt(),
    })
}

pub fn report_lines(
    input_file: &str,
    count: usize,
    invalid: usize,
    summary: Option<&Summary>,
    elapsed_secs: f64,
) -> Vec<String> {
    let Some(s) = summary else {
        return vec![
            "Statistics Results".to_string(),
            format!("Input file: {}", input_file),
            String::new(),
            "ERROR: No valid numbers found.".to_string(),
            format!("Invalid: {}", invalid),
            format!("Elapsed time: {:.6} seconds", elapsed_secs),
        ];
    };
    let modes = if s.modes.is_empty() {
        "None".to_string()
    } else {
        format!("{:?}", s.modes)
    };
    vec![
        "Statistics Results".to_string(),
        format!("Input file: {}", input_file),
        format!("Count: {}", count),
        format!("Invalid: {}", invalid),
        String::new(),
        format!("Mean: {:.6}", s.mean),
        format!("Median: {:.6}", s.median),
        format!("Mode: {}", modes),
        format!("Variance: {:.6}", s.variance),
        format!("Std Dev: {:.6}", s.std_dev),
        String::new(),
        format!("Elapsed time: {:.6} seconds", elapsed_secs),
    ]
}
