mod common;
use common::*;
use tbc::lang::{ErrorCode, Listing};
use tbc::mach::Runtime;

#[test]
fn test_strip_removes_comments_and_spaces() {
    let listing = Listing::from_str("a b # note\n:l c d\n ^ \n", true);
    assert_eq!(listing.bytes(), b"ab:l c d^");
}

#[test]
fn test_strip_drops_blank_and_comment_lines() {
    let listing = Listing::from_str("# all comment\n\n   \nab\n", true);
    assert_eq!(listing.bytes(), b"ab");
}

#[test]
fn test_raw_mode_keeps_everything() {
    let listing = Listing::from_str("a b#c\n^", false);
    assert_eq!(listing.bytes(), b"a b#c\n^\n");
}

#[test]
fn test_raw_mode_comments_skip_at_runtime() {
    let mut runtime = Runtime::new();
    runtime
        .load(&Listing::from_str("a#b\n^", false), 0x1000)
        .unwrap();
    let mut script = Script::new(b"");
    run_to_halt(&mut runtime, &mut script).unwrap();
    assert_eq!(runtime.data_stack(), [0x00, 0x03]);
}

#[test]
fn test_load_address_override() {
    let mut runtime = Runtime::new();
    runtime
        .load(&Listing::from_str("$a^:a^", true), 0x2000)
        .unwrap();
    let mut script = Script::new(b"");
    run_to_halt(&mut runtime, &mut script).unwrap();
    assert_eq!(runtime.data_stack(), [0x05, 0x20]);
    assert_eq!(runtime.program_counter(), 0x2002);
}

#[test]
fn test_load_rejects_image_past_memory_end() {
    let mut runtime = Runtime::new();
    let error = runtime
        .load(&Listing::from_str("aaaaaaaaaa^", true), 29995)
        .unwrap_err();
    assert_eq!(error.code(), ErrorCode::OutOfMemory as u16);
}

#[test]
fn test_load_resets_machine() {
    let mut runtime = Runtime::new();
    let mut script = Script::new(b"");
    runtime
        .load(&Listing::from_str("a^", true), 0x1000)
        .unwrap();
    run_to_halt(&mut runtime, &mut script).unwrap();
    assert_eq!(runtime.data_stack(), [0x00, 0x03]);

    runtime
        .load(&Listing::from_str("^", true), 0x1000)
        .unwrap();
    run_to_halt(&mut runtime, &mut script).unwrap();
    assert!(runtime.data_stack().is_empty());
    assert_eq!(runtime.program_counter(), 0x1000);
}
