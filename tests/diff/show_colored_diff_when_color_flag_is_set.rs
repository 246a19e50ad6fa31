use crate::common::command::{run_udiff_command, workdir, write_input};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_colored_diff_when_color_flag_is_set(
    workdir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_input(workdir.path(), "1.txt", "a\nb\nc\nd\ne\n");
    write_input(workdir.path(), "2.txt", "a\nx\nc\nd\ne\n");

    let output = run_udiff_command(workdir.path(), &["--color", "-U", "1", "1.txt", "2.txt"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    let expected_output = concat!(
        "\x1b[1m--- 1.txt\x1b[0m\n",
        "\x1b[1m+++ 2.txt\x1b[0m\n",
        "\x1b[36m@@ -1,3 +1,3 @@\x1b[0m\n",
        " a\n",
        "\x1b[31m-b\x1b[0m\n",
        "\x1b[32m+x\x1b[0m\n",
        " c\n",
    );
    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_plain_diff_without_color_flag(workdir: TempDir) {
    write_input(workdir.path(), "1.txt", "a\n");
    write_input(workdir.path(), "2.txt", "b\n");

    run_udiff_command(workdir.path(), &["1.txt", "2.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[rstest]
fn color_flag_wins_over_no_color_environment(workdir: TempDir) {
    write_input(workdir.path(), "1.txt", "a\n");
    write_input(workdir.path(), "2.txt", "b\n");

    run_udiff_command(workdir.path(), &["--color", "1.txt", "2.txt"])
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[1m--- 1.txt\x1b[0m\n"))
        .stdout(predicate::str::contains("\x1b[31m-a\x1b[0m\n"));
}
