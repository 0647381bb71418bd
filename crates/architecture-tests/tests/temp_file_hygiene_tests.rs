//! Purpose: Enforce deterministic temp file cleanup patterns in tests.
//!
//! Report and targets tests write real files; they must go through the
//! tempfile crate's RAII types rather than shared system temp paths.
//!
//! Non-scope: This test does not verify runtime behavior; it only checks
//! source code patterns.

mod common;

use std::fs;
use std::path::Path;

use common::{find_workspace_root, is_test_path, workspace_rust_files};

fn test_sources() -> Vec<(String, String)> {
    workspace_rust_files(&find_workspace_root())
        .into_iter()
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            let has_tests = content.contains("#[test]") || content.contains("#[tokio::test]");
            has_tests.then(|| (path.display().to_string(), content))
        })
        .collect()
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations: Vec<String> = Vec::new();

    for (path, content) in test_sources() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{path}: uses std::env::temp_dir() - prefer tempfile::TempDir for RAII cleanup"
            ));
        }

        if content.contains("\"/tmp") {
            violations.push(format!(
                "{path}: contains hardcoded /tmp path - prefer tempfile crate"
            ));
        }

        if is_test_path(Path::new(&path))
            && content.contains("std::fs::remove_file")
            && !content.contains("tempfile")
        {
            violations.push(format!(
                "{path}: uses std::fs::remove_file without tempfile - prefer NamedTempFile"
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempfile_bindings_retained() {
    let mut violations: Vec<String> = Vec::new();

    for (path, content) in test_sources() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = NamedTempFile")
            {
                violations.push(format!(
                    "{}:{}: tempfile instance bound to `_` - use a named variable for RAII cleanup",
                    path,
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}
