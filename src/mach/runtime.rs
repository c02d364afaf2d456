use super::{link, memory, Address, Link, Memory, Opcode, Stack};
use super::{DATA_STACK, LOAD_BASE, MEMORY_SIZE, RETURN_STACK, UPPER_BOUND};
use crate::error;
use crate::lang::{Error, Listing};

type Result<T> = std::result::Result<T, Error>;

/// Blocking single-key input and eager single-character output.
/// The machine depends on nothing else for I/O.
pub trait Console {
    /// Must not return until one key is available, raw and unbuffered.
    fn read_key(&mut self) -> Result<u8>;
    /// Emit one character, preserving call order.
    fn write_char(&mut self, byte: u8) -> Result<()>;
}

/// What the machine was doing when a cycle budget ran out.
#[derive(Debug, PartialEq)]
pub enum Event {
    Running,
    Stopped,
}

/// ## Virtual machine state
///
/// Owns the memory image, both stacks, and the program counter. The
/// dispatch loop advances the program counter by exactly one position
/// after every opcode; control flow opcodes state their true target and
/// [`Runtime::jump`] alone compensates for that advance.

pub struct Runtime {
    memory: Memory,
    data: Stack,
    ret: Stack,
    link: Option<Link>,
    linked: bool,
    trace: bool,
    pc: Address,
    load_base: Address,
    code_end: Address,
    upper_bound: Address,
    halted: bool,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            memory: Memory::new(),
            data: Stack::new(DATA_STACK, "DATA"),
            ret: Stack::new(RETURN_STACK, "RETURN"),
            link: None,
            linked: false,
            trace: false,
            pc: LOAD_BASE,
            load_base: LOAD_BASE,
            code_end: LOAD_BASE,
            upper_bound: UPPER_BOUND,
            halted: false,
        }
    }

    /// Resolve labels once at load time instead of scanning memory at
    /// every `$`. Takes effect at the next `load`.
    pub fn set_linked(&mut self, linked: bool) {
        self.linked = linked;
    }

    /// Print each step to stderr before it executes.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn data_stack(&self) -> &[u8] {
        self.data.contents(&self.memory)
    }

    pub fn return_stack(&self) -> &[u8] {
        self.ret.contents(&self.memory)
    }

    pub fn program_counter(&self) -> Address {
        self.pc
    }

    /// Place a program image at `base` and reset the machine to run it.
    /// In linked mode every `$x` reference is checked here, before any
    /// instruction executes.
    pub fn load(&mut self, listing: &Listing, base: Address) -> Result<()> {
        let bytes = listing.bytes();
        match base.checked_add(bytes.len()) {
            Some(end) if end <= MEMORY_SIZE => {}
            _ => return Err(error!(OutOfMemory, @base)),
        }
        for (index, byte) in bytes.iter().enumerate() {
            self.memory.write(base + index, *byte)?;
        }
        self.load_base = base;
        self.code_end = base + bytes.len();
        self.pc = base;
        self.halted = false;
        self.data.clear();
        self.ret.clear();
        self.link = None;
        if self.linked {
            let link = Link::scan(&self.memory, base..self.code_end);
            if let Some(error) = link.check(&self.memory, base..self.code_end).into_iter().next() {
                return Err(error);
            }
            self.link = Some(link);
        }
        Ok(())
    }

    /// Run up to `steps` opcodes. Returns `Stopped` once the halt
    /// sentinel is reached, `Running` when the budget ran out first, so
    /// a caller can interleave interrupt checks with execution.
    pub fn execute(&mut self, steps: usize, io: &mut dyn Console) -> Result<Event> {
        if self.halted {
            return Ok(Event::Stopped);
        }
        for _ in 0..steps {
            let op = Opcode::decode(self.fetch()?);
            if let Opcode::Halt = op {
                self.halted = true;
                return Ok(Event::Stopped);
            }
            if self.pc < self.load_base || self.pc > self.upper_bound {
                return Err(error!(EmergencyBreak, @self.pc));
            }
            if self.trace {
                self.trace_step(&op);
            }
            self.step(op, io)?;
            self.pc = self.pc.wrapping_add(1);
        }
        Ok(Event::Running)
    }

    /// Run to completion. Blocks for as long as the program does.
    pub fn run(&mut self, io: &mut dyn Console) -> Result<()> {
        loop {
            if let Event::Stopped = self.execute(5000, io)? {
                return Ok(());
            }
        }
    }

    fn fetch(&self) -> Result<u8> {
        // A fetch outside the image entirely is a runaway program
        // counter, not a data access.
        self.memory
            .read(self.pc)
            .map_err(|_| error!(EmergencyBreak, @self.pc))
    }

    /// The single place that knows the loop advance follows every
    /// opcode. Callers pass the true target.
    fn jump(&mut self, target: Address) {
        self.pc = target.wrapping_sub(1);
    }

    fn pop_two(&mut self) -> Result<(u16, u16)> {
        let two = self.data.pop16(&self.memory)?;
        let one = self.data.pop16(&self.memory)?;
        Ok((one, two))
    }

    fn step(&mut self, op: Opcode, io: &mut dyn Console) -> Result<()> {
        match op {
            Opcode::Variable(letter) => {
                let address = memory::variable_address(letter);
                self.data.push16(&mut self.memory, address as u16)?;
            }
            Opcode::Add => {
                let (one, two) = self.pop_two()?;
                self.data.push16(&mut self.memory, one.wrapping_add(two))?;
            }
            Opcode::Sub => {
                let (one, two) = self.pop_two()?;
                self.data.push16(&mut self.memory, one.wrapping_sub(two))?;
            }
            Opcode::Half => {
                let value = self.data.pop16(&self.memory)?;
                self.data.push16(&mut self.memory, value / 2)?;
            }
            Opcode::Double => {
                let value = self.data.pop16(&self.memory)?;
                self.data.push16(&mut self.memory, value.wrapping_mul(2))?;
            }
            Opcode::Branch => {
                let target = self.data.pop16(&self.memory)?;
                let condition = self.data.pop16(&self.memory)?;
                if condition > 0 && condition & 0x8000 == 0 {
                    self.jump(target as Address);
                }
            }
            Opcode::Call => {
                self.ret.push16(&mut self.memory, self.pc as u16)?;
                let target = self.data.pop16(&self.memory)?;
                self.jump(target as Address);
            }
            Opcode::Return => {
                let address = self.ret.pop16(&self.memory)? as Address;
                self.jump(address.wrapping_add(1));
            }
            Opcode::Label => {
                self.pc = self.pc.wrapping_add(1);
            }
            Opcode::Fetch => {
                let address = self.data.pop16(&self.memory)? as Address;
                let lo = self.memory.read(address)?;
                let hi = self.memory.read(address.wrapping_add(1))?;
                self.data.push8(&mut self.memory, lo)?;
                self.data.push8(&mut self.memory, hi)?;
            }
            Opcode::Store => {
                let address = self.data.pop16(&self.memory)? as Address;
                let value = self.data.pop16(&self.memory)?;
                self.memory.store_word(address, value)?;
            }
            Opcode::Comment => {
                self.pc = link::skip_comment(&self.memory, self.pc, self.upper_bound)?;
            }
            Opcode::Find => {
                self.pc = self.pc.wrapping_add(1);
                let letter = self.fetch()?;
                let target = match &self.link {
                    Some(link) => link.resolve(letter)?,
                    None => link::find_label(&self.memory, self.pc, letter, self.upper_bound)?,
                };
                self.data.push16(&mut self.memory, target as u16)?;
            }
            Opcode::Emit => {
                let value = self.data.pop16(&self.memory)?;
                io.write_char(value as u8)?;
            }
            Opcode::Key => {
                let value = io.read_key()?;
                self.data.push16(&mut self.memory, value as u16)?;
            }
            Opcode::Halt | Opcode::Nop(_) => {}
        }
        Ok(())
    }

    fn trace_step(&self, op: &Opcode) {
        eprintln!(
            "{:04X} {:<8} d={:?} r={:?}",
            self.pc,
            op.to_string(),
            self.data.contents(&self.memory),
            self.ret.contents(&self.memory),
        );
    }
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new()
    }
}
