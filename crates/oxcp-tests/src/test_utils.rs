//! Unified test utilities for oxcp integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Create a test file with repeated content of the given size
pub fn create_test_file(path: &Path, size: usize) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = "A".repeat(size);
    fs::write(path, content)
}

/// Create a test file with deterministic pseudo-random content
pub fn create_random_test_file(path: &Path, size: usize) -> std::io::Result<()> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut content = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        content.push((hasher.finish() % 256) as u8);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Create a nested directory structure with files of different sizes
///
/// Returns the files created, relative to `base_path`.
pub fn create_test_directory_structure(base_path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let sub_dirs = ["subdir1", "subdir2", "subdir1/nested"];
    for dir in &sub_dirs {
        fs::create_dir_all(base_path.join(dir))?;
    }

    let files = [
        ("small.txt", 1024),
        ("medium.txt", 64 * 1024),
        ("subdir1/file1.txt", 2048),
        ("subdir2/file2.txt", 4096),
        ("subdir1/nested/file3.txt", 8192),
    ];

    let mut created_files = Vec::new();
    for (file_path, size) in &files {
        create_test_file(&base_path.join(file_path), *size)?;
        created_files.push(PathBuf::from(file_path));
    }

    Ok(created_files)
}

/// Assert two files have identical contents
pub fn assert_same_contents(a: &Path, b: &Path) {
    let contents_a = fs::read(a).unwrap_or_else(|e| panic!("cannot read {}: {}", a.display(), e));
    let contents_b = fs::read(b).unwrap_or_else(|e| panic!("cannot read {}: {}", b.display(), e));
    assert_eq!(
        contents_a,
        contents_b,
        "contents differ: {} vs {}",
        a.display(),
        b.display()
    );
}
