mod common;

use common::{path_str, TestEnv};
use predicates::str::contains;

#[test]
fn stats_prints_summary() {
    let env = TestEnv::new();
    let input = env.input("TC1.txt", "1 2 2 3\n4\n");
    env.cmd()
        .args(["stats", path_str(&input)])
        .assert()
        .success()
        .stdout(contains("Statistics Results"))
        .stdout(contains("Mean: 2.400000"))
        .stdout(contains("Mode: [2.0]"));
}

#[test]
fn convert_prints_table() {
    let env = TestEnv::new();
    let input = env.input("nums.txt", "255\n");
    env.cmd()
        .args(["convert", path_str(&input)])
        .assert()
        .success()
        .stdout(contains("Conversion Results"))
        .stdout(contains("11111111"))
        .stdout(contains("FF"));
}

#[test]
fn wordcount_prints_frequencies() {
    let env = TestEnv::new();
    let input = env.input("words.txt", "Hola hola, mundo\n");
    env.cmd()
        .args(["wordcount", path_str(&input)])
        .assert()
        .success()
        .stdout(contains("Distinct words: 2"))
        .stdout(contains("hola"));
}

#[test]
fn long_aliases_work() {
    let env = TestEnv::new();
    let input = env.input("a.txt", "1 1\n");
    for sub in ["compute-statistics", "convert-numbers", "word-count", "ejercicio1"] {
        env.cmd().args([sub, path_str(&input)]).assert().success();
    }
}
