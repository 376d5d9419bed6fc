#![allow(unexpected_cfgs)]

use std::{
  env, fs,
  io::{Read, Write},
  path::PathBuf,
  process::{Command, Stdio},
  thread::{self, JoinHandle},
};

use dyntest::{dyntest, DynTester};

#[cfg(not(rust_analyzer))]
dyntest!(tests);

fn tests(t: &mut DynTester) {
  env::set_current_dir("..").unwrap();

  t.group("factorial", |t| {
    test_factorial(t, "0", b"0\n");
    test_factorial(t, "1", b"1\n");
    test_factorial(t, "5", b"5\n");
    test_factorial(t, "10", b"10\n");
    test_factorial(t, "20", b"20\n");
    test_factorial(t, "25", b"25\n");
    test_factorial(t, "100", b"100\n");
    test_factorial(t, "1000", b"1000\n");
    test_factorial(t, "leading_blank_lines", b"\n\n   7\n");
    test_factorial(t, "negative_zero", b"-0\n");
  });

  t.group("stats", |t| {
    test_stats(t, "25");
    test_stats(t, "1000");
  });

  t.group("fail", |t| {
    test_fail(t, "empty", b"");
    test_fail(t, "extra_input", b"1 2\n");
    test_fail(t, "extra_line", b"5\n6\n");
    test_fail(t, "negative", b"-5\n");
    test_fail(t, "not_a_number", b"five\n");
    test_fail(t, "too_large", b"18446744073709551616\n");
  });
}

const BIGFACT: &[&str] = &["bigfact"];

fn test_factorial(t: &mut DynTester, name: &'static str, input: &'static [u8]) {
  t.test(name, move || {
    let (stdout, stderr) = exec(BIGFACT, &[], input, true);
    assert!(stderr.is_empty());
    test_snapshot(&["factorial", &format!("{name}.txt")], &stdout);
  });
}

fn test_stats(t: &mut DynTester, n: &'static str) {
  t.test(n, move || {
    let (stdout, stderr) = exec(BIGFACT, &["--stats", "--no-perf", n], b"", true);
    let (expected, _) = exec(BIGFACT, &[], n.as_bytes(), true);
    assert_eq!(stdout, expected);
    test_snapshot(&["stats", &format!("{n}.txt")], &stderr);
  });
}

fn test_fail(t: &mut DynTester, name: &'static str, input: &'static [u8]) {
  t.test(name, move || {
    let (stdout, stderr) = exec(BIGFACT, &[], input, false);
    assert!(stdout.is_empty());
    test_snapshot(&["fail", &format!("{name}.txt")], &stderr);
  });
}

fn exec(bin: &[&str], args: &[&str], input: &[u8], success: bool) -> (Vec<u8>, Vec<u8>) {
  let mut child = Command::new(env!("CARGO"))
    .args(["run", "--quiet", "--bin"])
    .args(bin)
    .arg("--")
    .args(args)
    .env_remove("BIGFACT_STATS")
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .unwrap();

  child.stdin.take().unwrap().write_all(input).unwrap();

  let stdout = parallel_read(child.stdout.take().unwrap());
  let stderr = parallel_read(child.stderr.take().unwrap());

  let status = child.wait().unwrap();
  if status.success() != success {
    let err = String::from_utf8(stderr.join().unwrap()).unwrap();
    eprintln!("{err}");
    panic!("{status}");
  }

  (stdout.join().unwrap(), stderr.join().unwrap())
}

fn test_snapshot(components: &[&str], contents: &[u8]) -> PathBuf {
  let path = get_snapshot_path(components);
  match fs::read(&path).ok() {
    Some(existing) if existing == contents => {}
    Some(_) if !should_update_snapshots() => panic!("invalid snapshot {:?}", path),
    _ => {
      println!("writing snapshot {:?}", path);
      fs::write(&path, contents).unwrap();
    }
  }
  path
}

fn get_snapshot_path(components: &[&str]) -> PathBuf {
  let mut path = PathBuf::from("tests/snaps");
  path.extend(components);
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  path
}

/// Existing snapshots are only overwritten when `SNAP_UPDATE` is set.
fn should_update_snapshots() -> bool {
  env::var_os("SNAP_UPDATE").is_some()
}

fn parallel_read(mut read: impl Read + Send + 'static) -> JoinHandle<Vec<u8>> {
  thread::spawn(move || {
    let mut buf = Vec::new();
    read.read_to_end(&mut buf).unwrap();
    buf
  })
}
