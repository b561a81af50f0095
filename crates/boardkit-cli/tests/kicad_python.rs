use assert_cmd::cargo::cargo_bin_cmd;

#[cfg(unix)]
use std::{fs, path::Path};

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    path
}

#[cfg(unix)]
#[test]
fn relays_child_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script = write_script(temp.path(), "fail.sh", "exit 3\n");

    cargo_bin_cmd!("kicad-python")
        .env("KICAD_PYTHON", "/bin/sh")
        .env("NO_COLOR", "1")
        .arg(&script)
        .assert()
        .code(3);
}

#[cfg(unix)]
#[test]
fn non_utf8_environment_does_not_break_relay() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let script = write_script(temp.path(), "fail.sh", "exit 4\n");

    cargo_bin_cmd!("kicad-python")
        .env("KICAD_PYTHON", "/bin/sh")
        .env("BOARDKIT_UNRELATED", OsString::from_vec(vec![0xff, 0xfe]))
        .arg(&script)
        .assert()
        .code(4);
}

#[cfg(unix)]
#[test]
fn nonzero_exit_is_reported_on_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script = write_script(temp.path(), "fail.sh", "exit 5\n");

    let assert = cargo_bin_cmd!("kicad-python")
        .env("KICAD_PYTHON", "/bin/sh")
        .env("NO_COLOR", "1")
        .arg(&script)
        .assert()
        .code(5);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8");
    assert!(
        stderr.contains("KiCad Python exited with status 5"),
        "stderr: {stderr}"
    );
}

#[cfg(unix)]
#[test]
fn passes_arguments_and_stdout_through() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script = write_script(temp.path(), "echo.sh", "printf '%s|' \"$@\"\n");

    let assert = cargo_bin_cmd!("kicad-python")
        .env("KICAD_PYTHON", "/bin/sh")
        .arg(&script)
        .args(["--layers", "F.Cu", "-v", "two words"])
        .assert()
        .success();
    assert_eq!(
        String::from_utf8(assert.get_output().stdout.clone()).expect("utf8"),
        "--layers|F.Cu|-v|two words|"
    );
}

#[test]
fn missing_explicit_interpreter_exits_one() {
    let temp = tempfile::tempdir().expect("tempdir");
    let interpreter = temp.path().join("no-such-python");

    let assert = cargo_bin_cmd!("kicad-python")
        .env("KICAD_PYTHON", &interpreter)
        .env("NO_COLOR", "1")
        .arg("script.py")
        .assert()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8");
    assert!(
        stderr.contains("KiCad Python executable not found at"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("Hint: KICAD_PYTHON"), "stderr: {stderr}");
}

#[test]
fn which_prints_explicit_interpreter() {
    let assert = cargo_bin_cmd!("kicad-python")
        .env("KICAD_PYTHON", "/opt/kicad/bin/python3")
        .arg("--which")
        .assert()
        .success();
    assert_eq!(
        String::from_utf8(assert.get_output().stdout.clone())
            .expect("utf8")
            .trim(),
        "/opt/kicad/bin/python3"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn unsupported_platform_prints_single_diagnostic() {
    let assert = cargo_bin_cmd!("kicad-python")
        .env_remove("KICAD_PYTHON")
        .env("NO_COLOR", "1")
        .arg("script.py")
        .assert()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8");
    assert_eq!(stderr.trim(), "✗ Unsupported operating system: linux");
}

#[test]
fn script_is_required() {
    cargo_bin_cmd!("kicad-python")
        .env_remove("KICAD_PYTHON")
        .assert()
        .failure();
}
