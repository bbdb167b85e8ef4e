use std::collections::HashSet;

use argbind::FileSystem;
use camino::Utf8Path;
use regex::Regex;

/// Filesystem that reports only the registered paths as existing.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: HashSet<String>,
    directories: HashSet<String>,
}

#[allow(dead_code)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_directory(mut self, path: impl Into<String>) -> Self {
        self.directories.insert(path.into());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn file_exists(&self, path: &Utf8Path) -> bool {
        self.files.contains(path.as_str())
    }

    fn directory_exists(&self, path: &Utf8Path) -> bool {
        self.directories.contains(path.as_str())
    }
}

/// Asserts that `text` contains exactly one indented line equal to `line`.
///
/// # Panics
/// Panics if the line is missing or appears more than once.
#[allow(dead_code)]
pub fn assert_single_line(text: &str, line: &str) {
    let pattern = format!(r"(?m)^\s+{}$", regex::escape(line));
    let re = Regex::new(&pattern).expect("line pattern should be valid");
    let count = re.find_iter(text).count();
    assert_eq!(count, 1, "expected exactly one line {:?} in:\n{}", line, text);
}

/// Asserts that no indented line starts with `prefix`.
#[allow(dead_code)]
pub fn assert_no_line_starting_with(text: &str, prefix: &str) {
    let pattern = format!(r"(?m)^\s+{}", regex::escape(prefix));
    let re = Regex::new(&pattern).expect("prefix pattern should be valid");
    assert!(!re.is_match(text), "unexpected line starting with {:?} in:\n{}", prefix, text);
}
