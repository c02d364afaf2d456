use std::collections::VecDeque;
use tbc::lang::{Error, ErrorCode, Listing};
use tbc::mach::{Console, Runtime, LOAD_BASE};

/// Console scripted for tests: reads come from a fixed byte sequence,
/// writes collect in a buffer.
pub struct Script {
    input: VecDeque<u8>,
    pub output: Vec<u8>,
}

impl Script {
    pub fn new(input: &[u8]) -> Script {
        Script {
            input: input.iter().copied().collect(),
            output: vec![],
        }
    }
}

impl Console for Script {
    fn read_key(&mut self) -> Result<u8, Error> {
        match self.input.pop_front() {
            Some(byte) => Ok(byte),
            None => Err(Error::new(ErrorCode::InternalError).message("NO SCRIPTED INPUT")),
        }
    }

    fn write_char(&mut self, byte: u8) -> Result<(), Error> {
        self.output.push(byte);
        Ok(())
    }
}

pub fn run_to_halt(runtime: &mut Runtime, script: &mut Script) -> Result<(), Error> {
    runtime.run(script)
}

/// Load a stripped program at the default address and run it to the
/// halt opcode.
pub fn exec(source: &str, input: &[u8]) -> (Runtime, String) {
    let mut runtime = Runtime::new();
    runtime
        .load(&Listing::from_str(source, true), LOAD_BASE)
        .unwrap();
    let mut script = Script::new(input);
    run_to_halt(&mut runtime, &mut script).unwrap();
    (runtime, String::from_utf8_lossy(&script.output).to_string())
}

/// Load a stripped program and run it until it fails.
pub fn exec_err(source: &str, input: &[u8]) -> (Error, String) {
    let mut runtime = Runtime::new();
    runtime
        .load(&Listing::from_str(source, true), LOAD_BASE)
        .unwrap();
    let mut script = Script::new(input);
    let error = run_to_halt(&mut runtime, &mut script).unwrap_err();
    (error, String::from_utf8_lossy(&script.output).to_string())
}
