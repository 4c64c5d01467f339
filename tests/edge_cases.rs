//! Edge case and error handling tests for arbor


use harness::{TestDir, body_lines, run_arbor};
use std::fs;

// ============================================================================
// Tree Shape Edge Cases
// ============================================================================

// Exact-body tests export a `proj` subdirectory so the output file created
// in the cwd does not show up in the walked tree.

#[test]
fn test_empty_directory_exports_header_only() {
    let dir = TestDir::new();
    dir.add_dir("proj");

    let (_stdout, _stderr, success) = run_arbor(dir.path(), &["proj"]);
    assert!(success);

    let output = dir.read_output("folder_structure.txt");
    assert!(body_lines(&output).is_empty(), "no body lines: {}", output);
    assert_eq!(output, "📁 proj/\n\n");
}

#[test]
fn test_single_chain_indents_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("proj/a/b/c/file.txt", "");

    let (_stdout, _stderr, success) = run_arbor(dir.path(), &["proj"]);
    assert!(success);

    let output = dir.read_output("folder_structure.txt");
    assert_eq!(
        body_lines(&output),
        vec![
            "└── 📂 a/",
            "    └── 📂 b/",
            "        └── 📂 c/",
            "            └── 📄 file.txt",
        ]
    );
}

#[test]
fn test_continuation_bars_under_non_last_directories() {
    let dir = TestDir::new();
    dir.add_file("proj/first/inner.txt", "");
    dir.add_file("proj/second/inner.txt", "");

    let (_stdout, _stderr, success) = run_arbor(dir.path(), &["proj"]);
    assert!(success);

    let output = dir.read_output("folder_structure.txt");
    assert_eq!(
        body_lines(&output),
        vec![
            "├── 📂 first/",
            "│   └── 📄 inner.txt",
            "└── 📂 second/",
            "    └── 📄 inner.txt",
        ]
    );
}

#[test]
fn test_names_with_spaces_and_unicode() {
    let dir = TestDir::new();
    dir.add_file("my notes.txt", "");
    dir.add_file("über/straße.txt", "");

    let (_stdout, _stderr, success) = run_arbor(dir.path(), &["."]);
    assert!(success);

    let output = dir.read_output("folder_structure.txt");
    assert!(output.contains("📄 my notes.txt"), "{}", output);
    assert!(output.contains("📂 über/"), "{}", output);
    assert!(output.contains("📄 straße.txt"), "{}", output);
}

#[test]
fn test_ignored_directory_nested_deep_is_pruned() {
    let dir = TestDir::new();
    dir.add_file("src/node_modules/pkg/index.js", "");
    dir.add_file("src/app.js", "");

    let (_stdout, _stderr, success) = run_arbor(dir.path(), &["."]);
    assert!(success);

    let output = dir.read_output("folder_structure.txt");
    assert!(!output.contains("node_modules"), "{}", output);
    assert!(!output.contains("index.js"), "descendants pruned too");
    assert!(output.contains("app.js"));
}

// ============================================================================
// Output File Handling
// ============================================================================

#[test]
fn test_existing_output_file_is_overwritten() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");
    dir.add_file(
        "folder_structure.txt",
        "stale content that is much longer than the fresh export will be\n".repeat(20).as_str(),
    );

    let (_stdout, _stderr, success) =
        run_arbor(dir.path(), &[".", "--ignore-file", "folder_structure.txt"]);
    assert!(success);

    let output = dir.read_output("folder_structure.txt");
    assert!(!output.contains("stale content"), "old bytes must be gone");
    assert!(output.contains("a.txt"));
}

#[test]
fn test_output_file_inside_walked_tree() {
    // The output file is created before the walk starts, so an export into
    // the walked directory lists its own (still empty) output file.
    let dir = TestDir::new();
    dir.add_file("a.txt", "");

    let (_stdout, _stderr, success) = run_arbor(dir.path(), &["."]);
    assert!(success);

    let output = dir.read_output("folder_structure.txt");
    assert!(output.contains("📄 folder_structure.txt"), "{}", output);
}

#[test]
fn test_unwritable_output_path_fails() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");

    let (_stdout, stderr, success) =
        run_arbor(dir.path(), &[".", "-o", "no-such-dir/out.txt"]);
    assert!(!success, "should fail when output path cannot be created");
    assert!(!stderr.is_empty(), "should report the failure");
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_subdirectory_gets_marker_line() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TestDir::new();
    let locked = dir.add_dir("locked");
    dir.add_file("locked/secret.txt", "");
    dir.add_file("visible.txt", "");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Running as root bypasses permission bits; nothing to assert then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["."]);
    let output = dir.read_output("folder_structure.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "run should still succeed overall");
    assert!(
        stdout.contains("exported to"),
        "still reports success: {}",
        stdout
    );
    assert!(
        output.contains("⚠️  [Permission Denied]"),
        "marker line expected: {}",
        output
    );
    assert!(!output.contains("secret.txt"), "contents stay hidden");
    assert!(output.contains("visible.txt"), "other branches still walked");
}
