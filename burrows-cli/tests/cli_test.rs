//! End-to-end tests for the filter binaries.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_bin(bin: &str, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn filter");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for filter")
}

const BWT: &str = env!("CARGO_BIN_EXE_burrows-wheeler");
const MTF: &str = env!("CARGO_BIN_EXE_move-to-front");
const BWMTF: &str = env!("CARGO_BIN_EXE_bwmtf");

#[test]
fn test_burrows_wheeler_abra() {
    let out = run_bin(BWT, &["-"], b"ABRACADABRA!");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\x00\x00\x00\x03ARD!RCAAAABB");

    let back = run_bin(BWT, &["+"], &out.stdout);
    assert!(back.status.success());
    assert_eq!(back.stdout, b"ABRACADABRA!");
}

#[test]
fn test_move_to_front_abra() {
    let out = run_bin(MTF, &["-"], b"ABRACADABRA!");
    assert!(out.status.success());
    assert_eq!(out.stdout, vec![65, 66, 82, 2, 68, 1, 69, 1, 4, 4, 2, 38]);

    let back = run_bin(MTF, &["+"], &out.stdout);
    assert_eq!(back.stdout, b"ABRACADABRA!");
}

#[test]
fn test_bwmtf_matches_pipe() {
    let input = b"It was the best of times, it was the worst of times.".repeat(20);

    let bwt = run_bin(BWT, &["--sort", "comparison", "-"], &input);
    let piped = run_bin(MTF, &["-"], &bwt.stdout);
    let direct = run_bin(BWMTF, &["--sort", "doubling", "-"], &input);
    assert!(direct.status.success());
    assert_eq!(piped.stdout, direct.stdout);

    let back = run_bin(BWMTF, &["+"], &direct.stdout);
    assert_eq!(back.stdout, input);
}

#[test]
fn test_usage_error_exits_nonzero() {
    for args in [&[][..], &["x"][..], &["-", "+"][..]] {
        let out = run_bin(BWT, args, b"");
        assert!(!out.status.success(), "args {:?}", args);
        assert!(out.stdout.is_empty());
    }
}

#[test]
fn test_corrupt_stream_exits_nonzero() {
    let out = run_bin(BWT, &["+"], b"\x00\x00\x00\x0cARD!RCAAAABB");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Corrupt stream"), "stderr: {stderr}");
}
