//! Service layer containing exercise logic and side-effect helpers.
//!
//! ## Service map
//! - `statistics.rs` — number parsing + mean/median/mode/variance/std dev.
//! - `conversion.rs` — integer parsing + binary/hex rendering.
//! - `word_count.rs` — word normalization + frequency table.
//! - `tokens.rs` — input tokenizing, results file naming/writing, `TokenError`.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod conversion;
pub mod output;
pub mod statistics;
pub mod tokens;
pub mod word_count;
