#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let out = root.join("out");
        Self {
            _tmp: tmp,
            root,
            out,
        }
    }

    /// Writes an input fixture and returns its absolute path.
    pub fn input(&self, name: &str, body: &str) -> PathBuf {
        let p = self.root.join("data").join(name);
        fs::create_dir_all(p.parent().expect("fixture parent")).expect("create data dir");
        fs::write(&p, body).expect("write fixture");
        p
    }

    /// Command running inside the temp root, saving into `out/`.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ejercicios");
        cmd.current_dir(&self.root)
            .env_remove("RUST_LOG")
            .arg("--output-dir")
            .arg(&self.out);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn results(&self, name: &str) -> String {
        fs::read_to_string(self.out.join(name)).expect("read results file")
    }
}

pub fn path_str(p: &Path) -> &str {
    p.to_str().expect("fixture path utf8")
}
