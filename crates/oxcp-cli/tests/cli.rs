//! End-to-end tests for the oxcp binary

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

fn oxcp() -> Command {
    Command::cargo_bin("oxcp").expect("binary builds")
}

fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

#[test]
fn copies_single_file_to_new_destination() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    write(&source, b"byte for byte");

    oxcp().arg(&source).arg(&destination).assert().success();

    assert_eq!(std::fs::read(&destination).unwrap(), b"byte for byte");
}

#[test]
fn refuses_existing_destination_without_force() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    write(&source, b"new");
    write(&destination, b"old");

    oxcp()
        .arg(&source)
        .arg(&destination)
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));

    // Destination is unchanged
    assert_eq!(std::fs::read(&destination).unwrap(), b"old");
}

#[test]
fn force_replaces_existing_destination() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    write(&source, b"new contents");
    write(&destination, b"old contents that were longer");

    oxcp()
        .arg("--force")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success();

    assert_eq!(std::fs::read(&destination).unwrap(), b"new contents");
}

#[test]
fn refuses_directory_without_recursive() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("srcdir");
    let destination = dir.path().join("destdir");
    write(&source.join("a.txt"), b"x");

    oxcp()
        .arg(&source)
        .arg(&destination)
        .assert()
        .failure()
        .stderr(predicates::str::contains("is a directory"));

    assert!(!destination.exists());
}

#[test]
fn recursive_copy_reproduces_subtree() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("srcdir");
    let destination = dir.path().join("destdir");
    write(&source.join("a.txt"), b"alpha");
    write(&source.join("sub/b.txt"), b"beta");

    oxcp()
        .arg("-r")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success();

    assert_eq!(std::fs::read(destination.join("a.txt")).unwrap(), b"alpha");
    assert_eq!(
        std::fs::read(destination.join("sub/b.txt")).unwrap(),
        b"beta"
    );
}

#[test]
fn refuses_copy_into_itself() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("srcdir");
    write(&source.join("a.txt"), b"x");

    oxcp()
        .arg("-r")
        .arg(&source)
        .arg(source.join("nested"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("into itself"));

    assert!(!source.join("nested").exists());
}

#[test]
fn multiple_sources_require_directory_destination() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    write(&a, b"x");
    write(&b, b"y");

    oxcp()
        .arg(&a)
        .arg(&b)
        .arg(dir.path().join("not-a-dir.txt"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid destination"));
}

#[test]
fn multiple_sources_land_under_directory() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    let out = dir.path().join("out");
    write(&a, b"x");
    write(&b, b"y");
    std::fs::create_dir(&out).unwrap();

    oxcp().arg(&a).arg(&b).arg(&out).assert().success();

    assert_eq!(std::fs::read(out.join("a.txt")).unwrap(), b"x");
    assert_eq!(std::fs::read(out.join("b.txt")).unwrap(), b"y");
}

#[test]
fn continues_past_missing_source() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    let out = dir.path().join("out");
    write(&good, b"fine");
    std::fs::create_dir(&out).unwrap();

    oxcp()
        .arg(dir.path().join("missing.txt"))
        .arg(&good)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicates::str::contains("source not found"));

    // The good source was still copied
    assert_eq!(std::fs::read(out.join("good.txt")).unwrap(), b"fine");
}

#[test]
fn verbose_prints_each_operation() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    write(&source, b"x");

    oxcp()
        .arg("--verbose")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success()
        .stdout(predicates::str::contains(format!(
            "{} -> {}",
            source.display(),
            destination.display()
        )));
}

#[test]
fn quiet_by_default() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    write(&source, b"x");

    oxcp()
        .arg(&source)
        .arg(&destination)
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn dry_run_copies_nothing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("srcdir");
    let destination = dir.path().join("destdir");
    write(&source.join("a.txt"), b"x");

    oxcp()
        .arg("-r")
        .arg("--dry-run")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success()
        .stdout(predicates::str::contains("a.txt"));

    assert!(!destination.exists());
}

#[test]
fn update_skips_destination_that_is_not_older() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("a.txt");
    let destination = dir.path().join("b.txt");
    write(&source, b"replacement");
    // Written after the source, so at least as new
    write(&destination, b"kept");

    oxcp()
        .arg("--update")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success();

    assert_eq!(std::fs::read(&destination).unwrap(), b"kept");
}

#[test]
fn sparse_copy_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("holey.dat");
    let destination = dir.path().join("holey_copy.dat");
    let mut data = vec![0u8; 32 * 1024];
    data[9000..9004].copy_from_slice(b"data");
    write(&source, &data);

    oxcp()
        .arg("--sparse")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success();

    assert_eq!(std::fs::read(&destination).unwrap(), data);
}

#[test]
fn rejects_invalid_buffer_size() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("a.txt");
    write(&source, b"x");

    oxcp()
        .arg("--buffer-size")
        .arg("12345")
        .arg(&source)
        .arg(dir.path().join("b.txt"))
        .assert()
        .failure();
}
