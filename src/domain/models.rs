use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    /// Empty when no value repeats.
    pub modes: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

#[derive(Debug, Serialize)]
pub struct StatisticsReport {
    pub input_file: String,
    pub output_file: Option<String>,
    pub count: usize,
    pub invalid: usize,
    pub invalid_tokens: Vec<String>,
    pub summary: Option<Summary>,
    pub elapsed_secs: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ConversionRow {
    Converted {
        token: String,
        decimal: String,
        binary: String,
        hex: String,
    },
    Rejected {
        token: String,
        error: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub input_file: String,
    pub output_file: Option<String>,
    pub rows: Vec<ConversionRow>,
    pub valid: usize,
    pub invalid: usize,
    pub elapsed_secs: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct WordCountReport {
    pub input_file: String,
    pub output_file: Option<String>,
    pub valid: usize,
    pub invalid: usize,
    pub invalid_tokens: Vec<String>,
    pub words: Vec<WordEntry>,
    pub elapsed_secs: f64,
}
