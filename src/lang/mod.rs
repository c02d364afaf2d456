/*!
# Rust Language Module

This Rust module provides loading and text stripping of Tiny Bytecode
source, and the error type shared by the loader and the machine.

*/

#[macro_use]
mod error;
mod listing;

pub use error::Error;
pub use error::ErrorCode;
pub use listing::Listing;
