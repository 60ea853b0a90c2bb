use std::fs;
use std::process::Command;

fn rkgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rkgen"))
}

#[test]
fn stamps_listing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.rk");
    let output = dir.path().join("main.gen.rk");
    let symbols = dir.path().join("main.sym");
    fs::write(&input, "main:\n  nop\n").unwrap();

    let status = rkgen()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-s")
        .arg(&symbols)
        .args(["-n", "mildred", "-p", "boot", "--no-argv"])
        .status()
        .unwrap();
    assert!(status.success());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "; Code generated by mildred. DO NOT EDIT.\n\nmain:\n    nop\n"
    );
    assert_eq!(
        fs::read_to_string(&symbols).unwrap(),
        "# Code generated by mildred. DO NOT EDIT.\n\nboot.main code 0x0000\n"
    );
}

#[test]
fn records_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.rk");
    fs::write(&input, "ret\n").unwrap();

    let status = rkgen()
        .current_dir(dir.path())
        .args(["main.rk", "-o", "out.rk"])
        .status()
        .unwrap();
    assert!(status.success());

    let out = fs::read_to_string(dir.path().join("out.rk")).unwrap();
    assert_eq!(
        out.lines().next().unwrap(),
        "; Code generated by command: rkgen main.rk -o out.rk. DO NOT EDIT."
    );
}

#[test]
fn config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.rk"), "ret\n").unwrap();
    fs::write(dir.path().join("gen.yaml"), "name: mildred\n").unwrap();

    let status = rkgen()
        .current_dir(dir.path())
        .args(["-c", "gen.yaml", "--no-argv"])
        .status()
        .unwrap();
    assert!(status.success());

    let out = fs::read_to_string(dir.path().join("main.gen.rk")).unwrap();
    assert!(out.starts_with("; Code generated by mildred. DO NOT EDIT.\n"));
}

#[test]
fn parse_error_aborts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.rk"), "#0xZZ bad\n").unwrap();

    let status = rkgen().current_dir(dir.path()).status().unwrap();
    assert!(!status.success());
    assert!(!dir.path().join("main.gen.rk").exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let status = rkgen()
        .current_dir(dir.path())
        .arg("nowhere.rk")
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.rk"), "main:\nret\n").unwrap();
    fs::write(dir.path().join("gen.yaml"), "name: a\npkg: lib\nargv: [x]\n").unwrap();

    let status = rkgen()
        .current_dir(dir.path())
        .args(["-c", "gen.yaml", "-n", "b", "-p", "boot", "-s", "main.sym", "--no-argv"])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("main.sym")).unwrap(),
        "# Code generated by b. DO NOT EDIT.\n\nboot.main code 0x0000\n"
    );

    let status = rkgen()
        .current_dir(dir.path())
        .args(["-c", "gen.yaml", "-n", "b"])
        .status()
        .unwrap();
    assert!(status.success());
    let out = fs::read_to_string(dir.path().join("main.gen.rk")).unwrap();
    assert_eq!(
        out.lines().next().unwrap(),
        "; Code generated by command: rkgen -c gen.yaml -n b. DO NOT EDIT."
    );
}

#[test]
fn dump_listing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.rk"), "main:\n  nop ; idle\n").unwrap();

    let out = rkgen()
        .current_dir(dir.path())
        .args(["--dump", "--no-argv"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[main.rk]"), "{}", stdout);
    assert!(stdout.contains("[0000]"), "{}", stdout);
    assert!(stdout.contains("nop"), "{}", stdout);
}
