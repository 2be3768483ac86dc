// tests/watch_scenarios.rs

mod common;
use crate::common::{lines_of, mock_core};

use dirwatcher_test_utils::builders::WatchConfigBuilder;
use dirwatcher_test_utils::{capture_logs, init_tracing};

use dirwatcher::fs::mock::MockFileSystem;

fn watched_dir() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_dir("/w");
    fs
}

#[test]
fn new_file_reports_every_magic_line() {
    init_tracing();
    let fs = watched_dir();
    let mut core = mock_core(&fs, WatchConfigBuilder::new().build());

    fs.add_file("/w/notes.txt", "foo\nMAGIC here\nbar\nMAGIC again\n");
    let report = core.poll_cycle().unwrap();

    assert_eq!(report.added, vec!["notes.txt"]);
    assert_eq!(
        lines_of(&report),
        vec![("notes.txt".to_string(), 2), ("notes.txt".to_string(), 4)]
    );
    assert_eq!(core.store().get_offset("notes.txt"), 4);
}

#[test]
fn unchanged_directory_cycle_is_quiet() {
    init_tracing();
    let fs = watched_dir();
    fs.add_file("/w/notes.txt", "MAGIC\nplain\n");
    let mut core = mock_core(&fs, WatchConfigBuilder::new().build());

    let first = core.poll_cycle().unwrap();
    assert_eq!(first.found.len(), 1);
    let store_after_first = core.store().clone();

    let second = core.poll_cycle().unwrap();
    assert!(second.is_quiet());
    assert_eq!(core.store(), &store_after_first);
}

#[test]
fn growing_file_never_rereports_old_lines() {
    init_tracing();
    let fs = watched_dir();
    fs.add_file("/w/log.txt", "MAGIC 1\n");
    let mut core = mock_core(&fs, WatchConfigBuilder::new().build());

    let mut reported = Vec::new();
    for round in 0..4 {
        let report = core.poll_cycle().unwrap();
        let before = reported.last().copied().unwrap_or(0);
        for (_, line) in lines_of(&report) {
            assert!(line > before, "line {line} re-reported in round {round}");
            reported.push(line);
        }
        fs.append("/w/log.txt", format!("noise\nMAGIC {}\n", round + 2));
    }

    assert_eq!(reported, vec![1, 3, 5, 7]);
    assert_eq!(core.store().get_offset("log.txt"), 7);
}

#[test]
fn readded_file_is_scanned_from_the_start() {
    init_tracing();
    let fs = watched_dir();
    fs.add_file("/w/notes.txt", "MAGIC\n");
    let mut core = mock_core(&fs, WatchConfigBuilder::new().build());
    assert_eq!(core.poll_cycle().unwrap().found.len(), 1);

    fs.remove("/w/notes.txt");
    let removed = core.poll_cycle().unwrap();
    assert_eq!(removed.removed, vec!["notes.txt"]);
    assert!(!core.store().contains("notes.txt"));

    fs.add_file("/w/notes.txt", "MAGIC\n");
    let readded = core.poll_cycle().unwrap();
    assert_eq!(readded.added, vec!["notes.txt"]);
    assert_eq!(lines_of(&readded), vec![("notes.txt".to_string(), 1)]);
}

#[test]
fn other_extensions_are_tracked_but_never_scanned() {
    init_tracing();
    let fs = watched_dir();
    let mut core = mock_core(&fs, WatchConfigBuilder::new().extension(".txt").build());

    fs.add_file("/w/a.log", "MAGIC\n");
    let report = core.poll_cycle().unwrap();
    assert_eq!(report.added, vec!["a.log"]);
    assert_eq!(report.scanned, 0);
    assert!(report.found.is_empty());

    fs.remove("/w/a.log");
    assert_eq!(core.poll_cycle().unwrap().removed, vec!["a.log"]);
}

#[test]
fn wildcard_extension_scans_everything() {
    init_tracing();
    let fs = watched_dir();
    fs.add_file("/w/a.log", "MAGIC\n");
    fs.add_file("/w/b.txt", "MAGIC\n");
    let mut core = mock_core(&fs, WatchConfigBuilder::new().extension("*").build());

    let report = core.poll_cycle().unwrap();
    assert_eq!(report.scanned, 2);
    assert_eq!(report.found.len(), 2);
}

#[test]
fn deleted_directory_recovers_when_recreated() {
    init_tracing();
    let fs = watched_dir();
    fs.add_file("/w/old.txt", "MAGIC\n");
    let mut core = mock_core(&fs, WatchConfigBuilder::new().build());
    core.poll_cycle().unwrap();

    fs.remove("/w");
    assert!(core.poll_cycle().is_err());
    assert!(core.store().contains("old.txt"));

    fs.add_file("/w/new.txt", "hello MAGIC\n");
    let report = core.poll_cycle().unwrap();
    assert_eq!(report.removed, vec!["old.txt"]);
    assert_eq!(report.added, vec!["new.txt"]);
    assert_eq!(core.store().names(), vec!["new.txt"]);
    assert_eq!(core.store().get_offset("new.txt"), 1);
}

#[test]
fn missing_directory_at_startup_starts_empty() {
    init_tracing();
    let fs = MockFileSystem::new();
    let mut core = mock_core(&fs, WatchConfigBuilder::new().build());
    assert!(core.store().is_empty());

    fs.add_file("/w/a.txt", "x\n");
    assert_eq!(core.poll_cycle().unwrap().added, vec!["a.txt"]);
}

#[test]
fn one_unreadable_file_does_not_hide_others() {
    init_tracing();
    let fs = watched_dir();
    fs.add_unreadable("/w/locked.txt");
    fs.add_file("/w/open.txt", "MAGIC\n");
    let mut core = mock_core(&fs, WatchConfigBuilder::new().build());

    let report = core.poll_cycle().unwrap();
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].file_name, "locked.txt");
    assert_eq!(lines_of(&report), vec![("open.txt".to_string(), 1)]);
    assert_eq!(core.store().get_offset("locked.txt"), 0);
}

#[test]
fn cycle_events_are_logged_with_their_exact_text() {
    let fs = watched_dir();
    fs.add_file("/w/stale.txt", "nothing\n");
    let mut core = mock_core(&fs, WatchConfigBuilder::new().build());

    fs.remove("/w/stale.txt");
    fs.add_file("/w/notes.txt", "foo\nMAGIC here\nbar\nMAGIC again\n");
    let (report, logs) = capture_logs(|| core.poll_cycle());
    report.unwrap();

    assert!(logs.contains("stale.txt was removed from the directory"), "{logs}");
    assert!(logs.contains("notes.txt was added to the directory"), "{logs}");
    assert!(logs.contains("MAGIC found on line 2 of notes.txt"), "{logs}");
    assert!(logs.contains("MAGIC found on line 4 of notes.txt"), "{logs}");
    assert!(logs.contains("INFO"), "{logs}");

    let removed_at = logs.find("was removed").unwrap();
    let added_at = logs.find("was added").unwrap();
    assert!(removed_at < added_at, "removal must be logged before addition");
}

#[test]
fn custom_pattern_is_matched_case_sensitively() {
    init_tracing();
    let fs = watched_dir();
    fs.add_file("/w/app.txt", "error: low\nERROR: high\nall fine\n");
    let mut core = mock_core(&fs, WatchConfigBuilder::new().pattern("ERROR").build());

    let report = core.poll_cycle().unwrap();
    assert_eq!(lines_of(&report), vec![("app.txt".to_string(), 2)]);
}
