// バイナリのエントリーポイントテスト
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_creator_patterns"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_default_demo_output() {
    let output = run(&[]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Inside Circle::draw() method.\n\
         Inside Rectangle::draw() method.\n\
         Inside Square::draw() method.\n\
         hello world\n"
    );
}

#[test]
fn test_factory_subcommand() {
    let output = run(&["factory", "RECTANGLE", "square"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Inside Rectangle::draw() method.\nInside Square::draw() method.\n"
    );
}

#[test]
fn test_factory_subcommand_with_unknown_shape_fails() {
    let output = run(&["factory", "circle", "hexagon"]);

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "Inside Circle::draw() method.\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("hexagon"));
}

#[test]
fn test_singleton_subcommand() {
    let output = run(&["singleton", "--threads", "4", "--strategy", "lazy-holder"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("生成回数: 1"));
    assert!(stdout.contains("同一インスタンス: true"));
    assert!(stdout.ends_with("hello world\n"));
}

#[test]
fn test_list_json() {
    let output = run(&["list", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(3));
}

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("creator_patterns"));
    assert!(stdout.contains("factory"));
    assert!(stdout.contains("singleton"));
    assert!(stdout.contains("list"));
}
