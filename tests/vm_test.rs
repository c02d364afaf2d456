mod common;
use common::*;
use tbc::lang::ErrorCode;
use tbc::mach::variable_address;

#[test]
fn test_subroutine_sums_label_constants() {
    // With no literals in the language, 2 and 3 are synthesized from
    // label distances: :a:b sit two bytes apart, :c_:d three.
    let (runtime, output) = exec("$s&^:s$b$a-$d$c-+;:a:b:c_:d", b"");
    assert_eq!(runtime.data_stack(), [5, 0]);
    assert!(runtime.return_stack().is_empty());
    assert_eq!(output, "");
}

#[test]
fn test_store_then_emit_letter() {
    // $x points at the trailing A, so @ fetches 65; the variable holds
    // it until . emits it.
    let (runtime, output) = exec("$x@a!a@.^:xA", b"");
    assert_eq!(output, "A");
    let cell = variable_address(b'a');
    assert_eq!(runtime.memory().fetch_word(cell).unwrap(), 65);
}

#[test]
fn test_extra_pop_stops_output() {
    let (error, output) = exec_err(",.+.^", b"Q");
    assert_eq!(error.code(), ErrorCode::StackUnderflow as u16);
    assert_eq!(output, "Q");
}

#[test]
fn test_echo_one_key() {
    let (_, output) = exec(",.^", b"Z");
    assert_eq!(output, "Z");
}

#[test]
fn test_key_difference() {
    let (runtime, _) = exec(",,-^", b"31");
    assert_eq!(runtime.data_stack(), [2, 0]);
}

#[test]
fn test_echo_until_nul() {
    // The loop target is parked in variable a, since scans only look
    // forward; each pass echoes a key and loops while it is nonzero.
    let (_, output) = exec("$la!:l,b!b@.b@a@?^", b"hi\x00");
    assert_eq!(output, "hi\u{0}");
}
