use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn workdir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn diff_hunks_output() -> String {
    "@@ -1,9 +1,6 @@\n fn main() {\n     let s = String::new();\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n     println!(\"Done\");\n \n@@ -13,7 +10,9 @@\n         }\n     });\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n     println!(\"All threads completed\");\n }\n"
    .to_string()
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    write_file(FileSpec::new(path.clone(), content.to_string()));
    path
}

pub fn run_udiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("udiff").expect("Failed to find udiff binary");
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
