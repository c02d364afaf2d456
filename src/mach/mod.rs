/*!
## Rust Machine Module

This Rust module is the virtual machine for Tiny Bytecode.

*/

pub type Address = usize;
pub type Symbol = u8;

mod link;
mod memory;
mod opcode;
mod runtime;
mod stack;

#[cfg(test)]
mod tests;

pub use link::Link;
pub use memory::variable_address;
pub use memory::Memory;
pub use memory::Region;
pub use memory::DATA_STACK;
pub use memory::LOAD_BASE;
pub use memory::MEMORY_SIZE;
pub use memory::RETURN_STACK;
pub use memory::UPPER_BOUND;
pub use memory::VARIABLES;
pub use opcode::Opcode;
pub use runtime::Console;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
