use super::{Address, Memory, Symbol};
use crate::error;
use crate::lang::Error;
use std::collections::BTreeMap;
use std::ops::Range;

type Result<T> = std::result::Result<T, Error>;

fn guarded(memory: &Memory, address: Address, upper: Address) -> Result<u8> {
    if address > upper {
        return Err(error!(EmergencyBreak, @address));
    }
    memory.read(address)
}

/// Advance past a `#` comment. `from` is the address of the `#`; the
/// returned address is the terminating linefeed, so the caller's next
/// step lands on the byte after it. Shared by the dispatch loop and the
/// run-time label scan so the two can never disagree on the skip rule.
pub fn skip_comment(memory: &Memory, from: Address, upper: Address) -> Result<Address> {
    let mut pc = from;
    while guarded(memory, pc, upper)? != b'\n' {
        pc = pc.wrapping_add(1);
    }
    Ok(pc)
}

/// Run-time label lookup. `from` is the address of the letter argument;
/// the scan moves strictly forward from there, skipping comment spans,
/// until `:` immediately followed by `letter` is found. Returns the
/// address of the byte after the label pair. A scan that leaves the
/// valid address range is the emergency break.
pub fn find_label(memory: &Memory, from: Address, letter: Symbol, upper: Address) -> Result<Address> {
    let mut pc = from.wrapping_add(1);
    let mut ch = guarded(memory, pc, upper)?;
    loop {
        if ch == b'#' {
            pc = skip_comment(memory, pc, upper)?;
        } else if ch == b':' {
            pc = pc.wrapping_add(1);
            ch = guarded(memory, pc, upper)?;
            if ch == letter {
                return Ok(pc.wrapping_add(1));
            }
            // The byte after `:` gets a second look; it may itself
            // open a comment or another label.
            continue;
        }
        pc = pc.wrapping_add(1);
        ch = guarded(memory, pc, upper)?;
    }
}

/// ## Ahead-of-time label table
///
/// One pass over the loaded code records every `:x` pair. The scan
/// steps exactly like [`find_label`] so both strategies name the same
/// target: the byte immediately after the label pair. The first
/// definition of a letter wins.

#[derive(Debug, Default)]
pub struct Link {
    symbols: BTreeMap<Symbol, Address>,
}

impl Link {
    pub fn scan(memory: &Memory, code: Range<Address>) -> Link {
        let mut symbols: BTreeMap<Symbol, Address> = BTreeMap::new();
        let mut pc = code.start;
        while pc < code.end {
            let ch = match memory.read(pc) {
                Ok(byte) => byte,
                Err(_) => break,
            };
            if ch == b'#' {
                while pc < code.end && memory.read(pc).unwrap_or(b'\n') != b'\n' {
                    pc += 1;
                }
            } else if ch == b':' {
                pc += 1;
                if pc >= code.end {
                    break;
                }
                if let Ok(letter) = memory.read(pc) {
                    symbols.entry(letter).or_insert(pc + 1);
                }
                continue;
            }
            pc += 1;
        }
        Link { symbols }
    }

    pub fn resolve(&self, letter: Symbol) -> Result<Address> {
        match self.symbols.get(&letter) {
            Some(address) => Ok(*address),
            None => Err(error!(UndefinedLabel; format!("NO LABEL :{}", letter as char))),
        }
    }

    /// Walk the code for `$x` references and report every letter that
    /// has no recorded label. Runs at load time, before execution.
    pub fn check(&self, memory: &Memory, code: Range<Address>) -> Vec<Error> {
        let mut errors: Vec<Error> = vec![];
        let mut pc = code.start;
        while pc < code.end {
            let ch = match memory.read(pc) {
                Ok(byte) => byte,
                Err(_) => break,
            };
            match ch {
                b'#' => {
                    while pc < code.end && memory.read(pc).unwrap_or(b'\n') != b'\n' {
                        pc += 1;
                    }
                }
                b':' => pc += 1,
                b'$' => {
                    if let Ok(letter) = guarded(memory, pc + 1, code.end) {
                        if !self.symbols.contains_key(&letter) {
                            let error = error!(UndefinedLabel, @pc;
                                format!("NO LABEL :{}", letter as char));
                            errors.push(error);
                        }
                    }
                    pc += 1;
                }
                _ => {}
            }
            pc += 1;
        }
        errors
    }
}
