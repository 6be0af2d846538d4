use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("empty token")]
    Empty,
    #[error("sign without digits")]
    SignWithoutDigits,
    #[error("invalid number")]
    Invalid,
    #[error("value out of range")]
    Overflow,
}

pub fn read_tokens(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read file '{}'", path.display()))?;
    Ok(raw.split_whitespace().map(str::to_string).collect())
}

/// `<prefix>_<stem>.txt`, where stem drops the directory and last extension.
pub fn output_filename(prefix: &str, input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{}_{}.txt", prefix, stem)
}

pub fn output_path(dir: &Path, prefix: &str, input: &Path) -> PathBuf {
    let name = output_filename(prefix, input);
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

pub fn write_report(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create '{}'", parent.display()))?;
        }
    }
    let mut body = lines.join("\n");
    body.push('\n');
    std::fs::write(path, body).with_context(|| format!("could not write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn output_filename_uses_stem_only() {
        assert_eq!(
            output_filename("StatisticsResults", Path::new("data/TC1.txt")),
            "StatisticsResults_TC1.txt"
        );
        assert_eq!(
            output_filename("WordCountResults", Path::new("a.b.txt")),
            "WordCountResults_a.b.txt"
        );
        assert_eq!(
            output_filename("ConversionResults", Path::new("/tmp/.hidden")),
            "ConversionResults_.hidden.txt"
        );
        assert_eq!(
            output_filename("ConversionResults", Path::new("noext")),
            "ConversionResults_noext.txt"
        );
    }

    #[test]
    fn output_path_in_current_dir_is_bare() {
        assert_eq!(
            output_path(Path::new("."), "WordCountResults", Path::new("in/words.txt")),
            PathBuf::from("WordCountResults_words.txt")
        );
        assert_eq!(
            output_path(Path::new("out"), "WordCountResults", Path::new("words.txt")),
            Path::new("out").join("WordCountResults_words.txt")
        );
    }

    #[test]
    fn read_tokens_splits_across_lines() {
        let tmp = TempDir::new().expect("temp dir");
        let p = tmp.path().join("in.txt");
        std::fs::write(&p, "1 2\t3\n\n  4\r\nfive  \n").expect("write input");
        let tokens = read_tokens(&p).expect("read tokens");
        assert_eq!(tokens, vec!["1", "2", "3", "4", "five"]);
    }

    #[test]
    fn read_tokens_missing_file_names_path() {
        let err = read_tokens(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn write_report_creates_parent_and_trailing_newline() {
        let tmp = TempDir::new().expect("temp dir");
        let p = tmp.path().join("nested/out.txt");
        write_report(&p, &["a".to_string(), String::new(), "b".to_string()])
            .expect("write report");
        let raw = std::fs::read_to_string(&p).expect("read back");
        assert_eq!(raw, "a\n\nb\n");
    }
}
