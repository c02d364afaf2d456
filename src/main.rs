//! # Tiny Bytecode
//!
//! A Forth-like single-character bytecode machine.
//!

fn main() {
    tbc::term::main()
}
