use crate::domain::models::ConversionRow;
use crate::services::tokens::TokenError;

pub const RESULTS_PREFIX: &str = "ConversionResults";

/// Base-10 integer: `[+-]? digits+`, bounded by `i128`.
pub fn parse_int(token: &str) -> Result<i128, TokenError> {
    let s = token.trim();
    if s.is_empty() {
        return Err(TokenError::Empty);
    }
    let (negative, digits) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() {
        return Err(TokenError::SignWithoutDigits);
    }
    let mut magnitude: u128 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return Err(TokenError::Invalid);
        }
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u128::from(b - b'0')))
            .ok_or(TokenError::Overflow)?;
    }
    if negative {
        if magnitude > i128::MIN.unsigned_abs() {
            return Err(TokenError::Overflow);
        }
        Ok((magnitude as i128).wrapping_neg())
    } else {
        i128::try_from(magnitude).map_err(|_| TokenError::Overflow)
    }
}

fn signed(n: i128, digits: String) -> String {
    if n < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

pub fn to_binary(n: i128) -> String {
    signed(n, format!("{:b}", n.unsigned_abs()))
}

pub fn to_hex(n: i128) -> String {
    signed(n, format!("{:X}", n.unsigned_abs()))
}

pub fn convert_token(token: &str) -> ConversionRow {
    match parse_int(token) {
        Ok(n) => ConversionRow::Converted {
            token: token.to_string(),
            decimal: n.to_string(),
            binary: to_binary(n),
            hex: to_hex(n),
        },
        Err(e) => ConversionRow::Rejected {
            token: token.to_string(),
            error: e.to_string(),
        },
    }
}

pub fn report_lines(
    input_file: &str,
    rows: &[ConversionRow],
    valid: usize,
    invalid: usize,
    elapsed_secs: f64,
) -> Vec<String> {
    let mut lines = vec![
        "Conversion Results".to_string(),
        format!("Input file: {}", input_file),
        String::new(),
        format!("{:>12}  {:>32}  {:>12}", "DECIMAL", "BINARY", "HEXADECIMAL"),
        format!("{}  {}  {}", "-".repeat(12), "-".repeat(32), "-".repeat(12)),
    ];
    for row in rows {
        lines.push(match row {
            ConversionRow::Converted {
                decimal,
                binary,
                hex,
                ..
            } => format!("{:>12}  {:>32}  {:>12}", decimal, binary, hex),
            ConversionRow::Rejected { token, .. } => {
                format!("ERROR: Invalid token skipped: {}", token)
            }
        });
    }
    lines.push(String::new());
    lines.push(format!("Valid items: {}", valid));
    lines.push(format!("Invalid items: {}", invalid));
    lines.push(format!("Elapsed time: {:.6} seconds", elapsed_secs));
    lines
}
