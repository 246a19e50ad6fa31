use crate::common::command::{run_udiff_command, workdir, write_input};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_missing_input_file(workdir: TempDir) {
    write_input(workdir.path(), "1.txt", "a\n");

    run_udiff_command(workdir.path(), &["1.txt", "missing.txt"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("failed to read missing.txt"));
}

#[rstest]
fn report_missing_input_file_only_once(workdir: TempDir) {
    write_input(workdir.path(), "1.txt", "a\n");

    let output = run_udiff_command(workdir.path(), &["1.txt", "missing.txt"])
        .output()
        .expect("Failed to run udiff");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.matches("failed to read missing.txt").count(), 1);
}
