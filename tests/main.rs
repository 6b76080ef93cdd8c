use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_main(source: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_main"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(source.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_success() {
    let out = run_main("2\n2 4\n1 1\n3 10\n4 4 4\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"Case #1: 2\nCase #2: 2\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn test_zero_divisor() {
    let out = run_main("2\n1 4\n5\n1 0\n5\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stdout, b"Case #1: 1\n");
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("case #2"), "{stderr}");
    // stderr is a pipe here
    assert!(!stderr.contains('\u{1b}'), "{stderr}");
}

#[test]
fn test_empty_input() {
    let out = run_main("");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}
