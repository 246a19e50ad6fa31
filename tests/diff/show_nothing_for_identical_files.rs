use crate::common::command::{run_udiff_command, workdir, write_input};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use rstest::rstest;

#[rstest]
fn show_nothing_for_identical_files(workdir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let content = Words(5..10).fake::<Vec<String>>().join("\n");
    write_input(workdir.path(), "1.txt", &content);
    write_input(workdir.path(), "2.txt", &content);

    run_udiff_command(workdir.path(), &["1.txt", "2.txt"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}

#[rstest]
fn show_nothing_when_only_the_final_newline_differs(
    workdir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_input(workdir.path(), "1.txt", "one\ntwo");
    write_input(workdir.path(), "2.txt", "one\ntwo\n");

    run_udiff_command(workdir.path(), &["1.txt", "2.txt"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}
