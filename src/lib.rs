//! # Tiny Bytecode
//!
//! A Forth-like language where every opcode is a single character and
//! every value lives in one flat 30000-byte memory alongside the code,
//! the stacks, and the variables.
//!
//! Run a program with the `tbc` executable:
//! ```text
//! tbc hello.tbc
//! ```
//!
//! There are no integer literals. Programs move values through the two
//! stacks with fourteen operators, twenty-six variables, and labels.
//! The introduction below covers the language; chapter 1 is the opcode
//! reference.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
pub mod term;
