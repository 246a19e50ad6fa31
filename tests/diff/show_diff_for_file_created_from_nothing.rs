use crate::common::command::{run_udiff_command, workdir, write_input};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_for_file_created_from_nothing(
    workdir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_input(workdir.path(), "empty.txt", "");
    write_input(workdir.path(), "new.txt", "a\nb\n");

    let output = run_udiff_command(workdir.path(), &["empty.txt", "new.txt"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(
        actual_output,
        "--- empty.txt\n+++ new.txt\n@@ -0,0 +1,2 @@\n+a\n+b\n"
    );

    Ok(())
}
