//! Output contracts (OUT-001 through OUT-003)

use crate::common::*;

/// CONTRACT OUT-001: Finalization leaves no temporary files behind.
///
/// Only the header and its lock file may live in the output directory
/// after a run.
#[test]
fn contract_no_temp_files_after_embed() {
    let env = TestEnv::new();
    env.write_input("a.js", b"a");

    assert!(env.run(&["embed"]).success);
    env.write_input("a.js", b"b");
    assert!(env.run(&["embed"]).success);

    let mut names: Vec<String> = std::fs::read_dir(env.path("build/generated"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["embedded_files.h", "embedded_files.h.lock"]);
}

/// CONTRACT OUT-002: An unchanged header is not rewritten.
///
/// Build systems key rebuilds on mtime; an identical run must not
/// trigger a firmware recompile.
#[test]
fn contract_unchanged_header_keeps_mtime() {
    let env = TestEnv::new();
    env.write_input("index.html", b"<html></html>");

    assert!(env.run(&["embed"]).success);
    let before = std::fs::metadata(env.output_path()).unwrap().modified().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(20));
    assert!(env.run(&["embed"]).success);
    let after = std::fs::metadata(env.output_path()).unwrap().modified().unwrap();

    assert_eq!(before, after);
}

/// CONTRACT OUT-003: A failed run never creates or modifies the header.
#[test]
fn contract_failed_run_is_side_effect_free() {
    let env = TestEnv::new();
    env.write_input("x.js", b"1");
    assert!(env.run(&["embed"]).success);
    let before = std::fs::read(env.output_path()).unwrap();

    env.write_input("x_js", b"2");
    assert!(!env.run(&["embed"]).success);
    assert_eq!(std::fs::read(env.output_path()).unwrap(), before);

    assert!(!env.run(&["embed", "--row-width", "0"]).success);
    assert_eq!(std::fs::read(env.output_path()).unwrap(), before);
}
