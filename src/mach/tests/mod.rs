use crate::error;
use crate::lang::{Error, Listing};
use crate::mach::{Console, Event, Runtime, LOAD_BASE};
use std::collections::VecDeque;


/// Console scripted for tests: reads come from a fixed byte sequence,
/// writes collect in a buffer.
struct Script {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl Script {
    fn new(input: &[u8]) -> Script {
        Script {
            input: input.iter().copied().collect(),
            output: vec![],
        }
    }

    fn silent() -> Script {
        Script::new(b"")
    }
}

impl Console for Script {
    fn read_key(&mut self) -> Result<u8, Error> {
        match self.input.pop_front() {
            Some(byte) => Ok(byte),
            None => Err(error!(InternalError; "NO SCRIPTED INPUT")),
        }
    }

    fn write_char(&mut self, byte: u8) -> Result<(), Error> {
        self.output.push(byte);
        Ok(())
    }
}

fn load(source: &str, strip: bool) -> Runtime {
    let mut runtime = Runtime::new();
    runtime
        .load(&Listing::from_str(source, strip), LOAD_BASE)
        .unwrap();
    runtime
}

fn run(runtime: &mut Runtime, script: &mut Script) -> Result<(), Error> {
    loop {
        if let Event::Stopped = runtime.execute(5000, script)? {
            return Ok(());
        }
    }
}

/// Load a stripped program and run it to the halt opcode.
fn exec(source: &str, input: &[u8]) -> (Runtime, Script) {
    let mut runtime = load(source, true);
    let mut script = Script::new(input);
    run(&mut runtime, &mut script).unwrap();
    (runtime, script)
}

/// Load a stripped program and run it until it fails.
fn exec_err(source: &str, input: &[u8]) -> (Runtime, Script, Error) {
    let mut runtime = load(source, true);
    let mut script = Script::new(input);
    let error = run(&mut runtime, &mut script).unwrap_err();
    (runtime, script, error)
}
