use chrono::NaiveDateTime;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use teelog::{
    args, Channel, InspectOptions, LineState, MemoryTerminal, Stream, StreamError, StreamOptions,
    TerminalDepth,
};

fn plain() -> StreamOptions {
    StreamOptions::default()
        .with_colors(false, false)
        .with_console_stamp(false, false)
        .with_file_stamp(false, false)
}

fn open(options: StreamOptions) -> (Stream, MemoryTerminal) {
    let terminal = MemoryTerminal::new();
    let stream = Stream::with_parts(options, Arc::new(terminal.clone()), TerminalDepth::new());
    (stream, terminal)
}

fn log_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("test.txt")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn partial_writes_are_decorated_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = log_path(&dir);
    let (mut stream, terminal) = open(
        plain()
            .with_file(&path)
            .with_file_stamp(true, true)
            .with_label("L"),
    );

    stream.write(&args!["A"]).unwrap();
    assert_eq!(stream.file_state(), LineState::MidLine);
    assert_eq!(stream.console_state(), LineState::MidLine);
    stream.write(&args!["B\n"]).unwrap();
    assert_eq!(stream.file_state(), LineState::AtLineStart);

    let content = read(&path);
    assert_eq!(content.lines().count(), 1);
    assert!(content.ends_with("  [L] AB\n"), "{content:?}");
    NaiveDateTime::parse_from_str(&content[..17], "%y-%m-%d %H:%M:%S").unwrap();

    assert_eq!(terminal.all(), "[L] AB\n");
}

#[test]
fn write_sequence_builds_one_line() {
    let (mut stream, terminal) = open(plain().with_label("T"));
    stream.write(&args!["Test write on single line", "... "]).unwrap();
    for part in ["D", "O", "N", "E\n"] {
        stream.write(&args![part]).unwrap();
    }
    assert_eq!(terminal.all(), "[T] Test write on single line ... DONE\n");
}

#[test]
fn multi_line_log_in_nested_group() {
    let dir = tempfile::tempdir().unwrap();
    let path = log_path(&dir);
    let (mut stream, terminal) = open(plain().with_file(&path));

    stream.group(&args!["one"]).unwrap();
    stream.group(&args!["two"]).unwrap();
    stream.log(&args!["MULTI\nLINE\nLOG"]).unwrap();

    let expected = "+ one\n:  + two\n:  :  MULTI\n:  :  LINE\n:  :  LOG\n";
    assert_eq!(terminal.all(), expected);
    assert_eq!(read(&path), expected);
}

#[test]
fn blank_payload_lines_keep_their_prefixes() {
    let dir = tempfile::tempdir().unwrap();
    let path = log_path(&dir);
    let (mut stream, terminal) = open(plain().with_file(&path).with_label("x"));

    stream.group(&args!["g"]).unwrap();
    stream.log(&args!["a\n\nb"]).unwrap();

    let expected = "[x] + g\n[x] :  a\n    :  \n    :  b\n";
    assert_eq!(read(&path), expected);
    assert_eq!(terminal.all(), expected);
}

#[test]
fn lines_after_a_continuation_are_padded() {
    let dir = tempfile::tempdir().unwrap();
    let path = log_path(&dir);
    let (mut stream, _) = open(plain().with_file(&path).with_label("x"));

    stream.write(&args!["start "]).unwrap();
    stream.write(&args!["end\nnext\n"]).unwrap();

    assert_eq!(read(&path), "[x] start end\n    next\n");
}

#[test]
fn group_end_floors_at_zero() {
    let (mut stream, _) = open(plain());
    stream.group(&args!["a"]).unwrap();
    stream.group_collapsed(&args!["b"]).unwrap();
    assert_eq!(stream.depth(), 2);
    assert_eq!(stream.terminal_depth(), 2);

    for _ in 0..5 {
        stream.group_end();
    }
    assert_eq!(stream.depth(), 0);
    assert_eq!(stream.terminal_depth(), 0);
}

#[test]
fn console_depth_is_shared_but_file_depth_is_not() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.txt");
    let second_path = dir.path().join("second.txt");
    let terminal = MemoryTerminal::new();
    let shared = TerminalDepth::new();

    let mut first = Stream::with_parts(plain().with_file(&first_path), Arc::new(terminal.clone()), shared.clone());
    let mut second = Stream::with_parts(plain().with_file(&second_path), Arc::new(terminal.clone()), shared.clone());

    first.group(&args!["g"]).unwrap();
    second.log(&args!["hello"]).unwrap();

    assert_eq!(terminal.all(), "+ g\n:  hello\n");
    assert_eq!(read(&second_path), "hello\n");
    assert_eq!(shared.get(), 1);
}

#[test]
fn count_logs_one_through_n() {
    let (mut stream, terminal) = open(plain());
    for _ in 0..5 {
        stream.count("Counter").unwrap();
    }
    stream.count("Other").unwrap();
    assert_eq!(
        terminal.all(),
        "Counter: 1\nCounter: 2\nCounter: 3\nCounter: 4\nCounter: 5\nOther: 1\n"
    );
    assert_eq!(stream.counter("Counter"), 5);
}

#[test]
fn time_end_reports_and_forgets() {
    let (mut stream, terminal) = open(plain());
    stream.time("Timer #1");
    assert!(stream.has_timer("Timer #1"));
    stream.time_end("Timer #1").unwrap();
    assert!(!stream.has_timer("Timer #1"));
    stream.time_end("Timer #1").unwrap();

    assert_eq!(terminal.all(), "Timer #1: 0ms\nTimer #1: 0ms\n");
}

#[test]
fn assert_matches_error_output() {
    let (mut asserted, asserted_out) = open(plain());
    let (mut errored, errored_out) = open(plain());

    asserted.assert(true, &args!["oops"]).unwrap();
    assert!(asserted_out.all().is_empty());

    asserted.assert(false, &args!["oops"]).unwrap();
    errored.error(&args!["Assertion failed: oops"]).unwrap();
    assert_eq!(asserted_out.all(), errored_out.all());
    assert_eq!(asserted_out.all(), "[ERROR] Assertion failed: oops\n");
}

#[test]
fn assert_with_non_string_first_argument() {
    let (mut stream, terminal) = open(plain());
    stream.assert(false, &args![json!({"test": 1})]).unwrap();
    assert_eq!(terminal.all(), "[ERROR] Assertion failed: { test: 1 }\n");
}

#[test]
fn error_and_warn_follow_the_stderr_flag() {
    let (mut stream, terminal) = open(plain().with_stderr(true));
    stream.error(&args!["Error", json!({"test": 1})]).unwrap();
    stream.warn(&args!["careful"]).unwrap();
    stream.log(&args!["normal"]).unwrap();

    assert_eq!(
        terminal.contents(Channel::Stderr),
        "[ERROR] Error { test: 1 }\n[WARN] careful\n"
    );
    assert_eq!(terminal.contents(Channel::Stdout), "normal\n");

    let (mut stream, terminal) = open(plain());
    stream.warn(&args!["careful"]).unwrap();
    assert_eq!(terminal.contents(Channel::Stdout), "[WARN] careful\n");
}

#[test]
fn tagged_output_is_stamped_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = log_path(&dir);
    let (mut stream, _) = open(plain().with_file(&path).with_file_stamp(false, true));

    stream.error(&args!["two\nlines"]).unwrap();

    let content = read(&path);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("  [ERROR] two"), "{content:?}");
    assert_eq!(lines[1], "          lines");
}

#[test]
fn disabling_colors_makes_both_targets_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = log_path(&dir);
    let options = StreamOptions::default()
        .with_colors(false, true)
        .with_style(["blue", "bold"])
        .with_label("TEST")
        .with_file(&path)
        .with_console_stamp(true, false)
        .with_file_stamp(true, false);
    let (mut stream, terminal) = open(options);

    stream.assert(false, &args!["Test assert #1"]).unwrap();
    stream.log(&args!["MULTI\nLINE\n\n\nTEXT", 2, json!({"test": 1})]).unwrap();
    stream.group(&args!["Group tes\nt #1"]).unwrap();
    stream.write(&args!["partial "]).unwrap();
    stream.write(&args!["line\nand more\n"]).unwrap();
    stream.dir(&json!({"test": 2}), Some("Inspect"), None).unwrap();
    stream.warn(&args!["warned"]).unwrap();
    stream.group_end();
    stream.count("Counter").unwrap();

    assert_eq!(terminal.all(), read(&path));
    assert!(!terminal.all().contains('\x1b'));
}

#[test]
fn dir_and_table_render_titles_and_depth() {
    let (mut stream, terminal) = open(plain());
    let nested = json!({"a": {"b": {"c": {"d": 1}}}});

    stream.dir(&json!({"test": 2}), Some("Inspect"), None).unwrap();
    stream.table(&json!({"test": 1}), None, None).unwrap();
    stream
        .dir(&nested, None, Some(&InspectOptions::default().with_depth(Some(0))))
        .unwrap();
    stream.dir(&vec![1, 2, 3], Some(""), None).unwrap();

    assert_eq!(
        terminal.all(),
        "Inspect: { test: 2 }\n{ test: 1 }\n{ a: [Object] }\n[ 1, 2, 3 ]\n"
    );
}

#[test]
fn trace_logs_a_tagged_stack() {
    let (mut stream, terminal) = open(plain());
    stream.trace(&args!["here"]).unwrap();

    let out = terminal.all();
    assert!(out.starts_with("[TRACE] here"), "{out}");
    assert!(out.ends_with('\n'));
    assert!(!out.contains("Stream::trace"));
    assert_eq!(stream.console_state(), LineState::AtLineStart);
}

#[test]
fn clear_resets_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = log_path(&dir);
    let (mut stream, terminal) = open(plain().with_file(&path));

    stream.group(&args!["g"]).unwrap();
    stream.write(&args!["dangling"]).unwrap();
    stream.clear().unwrap();

    assert_eq!(read(&path), "");
    assert_eq!(stream.depth(), 0);
    assert_eq!(stream.terminal_depth(), 0);
    assert_eq!(stream.console_state(), LineState::AtLineStart);
    assert_eq!(stream.file_state(), LineState::AtLineStart);
    assert!(terminal.all().ends_with("\x1b[2J\x1b[1;1H"));

    stream.log(&args!["fresh"]).unwrap();
    assert_eq!(read(&path), "fresh\n");
}

#[test]
fn missing_file_target_skips_file_writes() {
    let (mut stream, terminal) = open(plain());
    assert!(stream.file().is_none());
    stream.log(&args!["only terminal"]).unwrap();
    stream.clear().unwrap();
    assert!(terminal.all().starts_with("only terminal\n"));
}

#[test]
fn file_errors_reach_the_caller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.log");
    let (mut stream, terminal) = open(plain().with_file(&path));

    let err = stream.log(&args!["lost"]).unwrap_err();
    assert!(matches!(err, StreamError::Io { .. }));
    assert_eq!(terminal.all(), "lost\n");
}

#[test]
fn failed_file_write_keeps_tagged_record_whole_on_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("err.log");
    let (mut stream, terminal) = open(plain().with_file(&path).with_label("L"));

    assert!(stream.error(&args!["boom"]).is_err());
    assert_eq!(stream.console_state(), LineState::AtLineStart);

    stream.set_file(None);
    stream.log(&args!["next"]).unwrap();
    assert_eq!(terminal.all(), "[L] [ERROR] boom\n[L] next\n");
}

#[test]
fn set_file_redirects_output() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");
    let (mut stream, _) = open(plain().with_file(&first));

    stream.log(&args!["one"]).unwrap();
    stream.set_file(Some(second.clone()));
    stream.log(&args!["two"]).unwrap();
    assert_eq!(stream.file(), Some(second.as_path()));

    assert_eq!(read(&first), "one\n");
    assert_eq!(read(&second), "two\n");
}
