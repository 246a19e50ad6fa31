use crate::common::command::{file_a, file_b, run_udiff_command, workdir, write_input};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("0", "@@ -4,3 +3,0 @@\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n@@ -16,1 +13,3 @@\n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n")]
#[case("1", "@@ -3,5 +3,2 @@\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n@@ -15,3 +12,5 @@\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n")]
fn show_diff_with_custom_context_size(
    workdir: TempDir,
    file_a: String,
    file_b: String,
    #[case] context: &str,
    #[case] hunks: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_input(workdir.path(), "1.txt", &file_a);
    write_input(workdir.path(), "2.txt", &file_b);

    let output = run_udiff_command(workdir.path(), &["-U", context, "1.txt", "2.txt"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(actual_output, format!("--- 1.txt\n+++ 2.txt\n{hunks}"));

    Ok(())
}
