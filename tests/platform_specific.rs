use crate::run::{run, size_line};
use assert_cmd::cargo::CommandCargoExt;
use assert_cmd::Command;
use ctype_report::platform::HOST;
use core::ffi::{c_int, c_long, c_longlong};
use core::mem::size_of;
use std::process::{self, Stdio};

mod run;

const BIN: &str = "platform-specific";

#[test]
fn test_output_matches_host() {
    let expected = format!(
        "{}\n{}\n{}\n{}\n",
        HOST.label(),
        size_line("int", size_of::<c_int>()),
        size_line("long", size_of::<c_long>()),
        size_line("long long", size_of::<c_longlong>()),
    );
    assert_eq!(run(BIN, &[]), expected);
}

#[test]
fn test_idempotent() {
    assert_eq!(run(BIN, &[]), run(BIN, &[]));
}

#[cfg(all(target_os = "linux", target_pointer_width = "64"))]
#[test]
fn test_linux_64() {
    assert_eq!(
        run(BIN, &[]),
        "Running on Linux
Size of int: 4 bytes
Size of long: 8 bytes
Size of long long: 8 bytes
"
    );
}

#[test]
fn test_json() {
    let out = run(BIN, &["-json"]);
    assert_eq!(out.lines().count(), 1);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(v["platform"].is_string());
    let types = v["types"].as_array().unwrap();
    assert_eq!(types.len(), 3);
    assert_eq!(types[0]["name"], "int");
    assert_eq!(types[0]["size"], size_of::<c_int>());
}

#[test]
fn test_verbose_stdout_unchanged() {
    let assert = Command::cargo_bin(BIN)
        .unwrap()
        .arg("-v")
        .assert()
        .success();
    let output = assert.get_output();
    assert_eq!(String::from_utf8_lossy(&output.stdout), run(BIN, &[]));
    assert!(String::from_utf8_lossy(&output.stderr).contains("platform indicator: "));
}

#[test]
fn test_help() {
    let out = run(BIN, &["--help"]);
    assert!(out.contains("Usage: "));
    assert!(out.contains("-json"));
}

#[test]
fn test_unrecognized_parameter() {
    let assert = Command::cargo_bin(BIN)
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure()
        .code(1);
    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "Unrecognized parameter: --bogus\n"
    );
}

fn run_into_closed_stdout(args: &[&str]) -> process::Output {
    let mut child = process::Command::cargo_bin(BIN)
        .unwrap()
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    child.wait_with_output().unwrap()
}

#[test]
fn test_closed_stdout() {
    let cases: [&[&str]; 4] = [&[], &["-json"], &["-v"], &["-h"]];
    for args in cases {
        let output = run_into_closed_stdout(args);
        assert!(output.status.success(), "{:?}: {:?}", args, output.status);
        assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
    }
}
