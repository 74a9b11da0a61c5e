use assert_cmd::Command;

pub fn run(bin: &str, args: &[&str]) -> String {
    let output = Command::cargo_bin(bin)
        .unwrap()
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

pub fn size_line(name: &str, size: usize) -> String {
    let unit = if size == 1 { "byte" } else { "bytes" };
    format!("Size of {}: {} {}", name, size, unit)
}
