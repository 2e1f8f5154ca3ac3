// crates/quadcode-cli/tests/encode_pbm.rs

use std::fs;
use std::process::Command;

fn run_ok(cmd: &mut Command) -> std::process::Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn quadcode() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quadcode"))
}

#[test]
fn encode_pbm_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pbm = dir.path().join("odd_cell.pbm");
    // W W
    // B W
    fs::write(&pbm, "P1\n# one odd cell\n2 2\n0 0\n1 0\n").unwrap();

    let out = run_ok(quadcode().args(["encode", "--in", pbm.to_str().unwrap()]));
    let code = String::from_utf8_lossy(&out.stdout);
    assert_eq!(code.trim_end(), "XWWBW");
}

#[test]
fn encode_pbm_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pbm = dir.path().join("uniform.pbm");
    let out_path = dir.path().join("uniform.code");
    fs::write(&pbm, "P1\n4 4\n1 1 1 1\n1 1 1 1\n1 1 1 1\n1 1 1 1\n").unwrap();

    run_ok(quadcode().args([
        "encode",
        "--in",
        pbm.to_str().unwrap(),
        "--out",
        out_path.to_str().unwrap(),
    ]));

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written.trim_end(), "B");
}

#[test]
fn encode_rejects_malformed_pbm() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pbm = dir.path().join("bad.pbm");
    fs::write(&pbm, "P1\n2 2\n0 1 2 0\n").unwrap();

    let out = quadcode()
        .args(["encode", "--in", pbm.to_str().unwrap()])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("expected 0 or 1"), "stderr:\n{stderr}");
}

#[test]
fn manual_mode_reads_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = quadcode()
        .arg("manual")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn command");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"3 3\n0 0 1\n0 0 1\n1 1 0\n")
        .unwrap();

    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success());
    let code = String::from_utf8_lossy(&out.stdout);
    assert_eq!(code.trim_end(), "XWBBW");
}

#[test]
fn stats_reports_symbol_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pbm = dir.path().join("checker.pbm");
    fs::write(&pbm, "P1\n2 2\n0 1\n1 0\n").unwrap();

    let out = run_ok(quadcode().args([
        "stats",
        "--in",
        pbm.to_str().unwrap(),
        "--print-code",
    ]));

    let code = String::from_utf8_lossy(&out.stdout);
    assert_eq!(code.trim_end(), "XWBBW");

    let report = String::from_utf8_lossy(&out.stderr);
    assert!(report.contains("code_symbols    = 5"), "report:\n{report}");
    assert!(report.contains("splits          = 1"), "report:\n{report}");
    assert!(
        report.contains("leaves          = 4 (white=2, black=2)"),
        "report:\n{report}"
    );
}
