extern crate ansi_term;
extern crate ctrlc;
extern crate mortal;

use crate::lang::{Error, Listing};
use crate::mach::{Console, Event, Runtime};
use crate::{error, mach};
use ansi_term::Style;
use clap::Parser;
use mortal::{Key, PrepareConfig, Terminal};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "tbc")]
#[command(about = "Run a Tiny Bytecode program")]
struct Cli {
    /// Program source file
    file: PathBuf,

    /// Load address for the program image, decimal or 0x hex
    #[arg(long, value_parser = parse_address, default_value = "0x1000")]
    address: usize,

    /// Load the source byte-for-byte, leaving comments and layout for
    /// the machine to skip at run time
    #[arg(long)]
    no_strip: bool,

    /// Echo the loaded program image before running
    #[arg(long)]
    show_source: bool,

    /// Print every executed opcode and both stacks to stderr
    #[arg(long)]
    trace: bool,

    /// Resolve labels once before execution instead of scanning memory
    /// at every reference
    #[arg(long)]
    link: bool,
}

fn parse_address(s: &str) -> std::result::Result<usize, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse::<usize>(),
    };
    match parsed {
        Ok(address) if address < mach::MEMORY_SIZE => Ok(address),
        Ok(_) => Err(format!("address must be below {}", mach::MEMORY_SIZE)),
        Err(error) => Err(error.to_string()),
    }
}

pub fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .map_err(|error| error!(InternalError; error.to_string()))?;

    let listing = load(&cli.file, !cli.no_strip)?;
    if cli.show_source {
        println!("{}", String::from_utf8_lossy(listing.bytes()));
    }

    let mut runtime = Runtime::new();
    runtime.set_linked(cli.link);
    runtime.set_trace(cli.trace);
    runtime.load(&listing, cli.address)?;

    let mut console = KeyConsole::new(interrupted.clone())?;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            println!();
            return Err(error!(Break));
        }
        match runtime.execute(5000, &mut console)? {
            Event::Running => {}
            Event::Stopped => break,
        }
    }
    println!();
    Ok(())
}

fn load(filename: &PathBuf, strip: bool) -> Result<Listing, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    let mut source = String::new();
    if let Err(error) = file.read_to_string(&mut source) {
        return Err(error!(InternalError; error.to_string()));
    }
    Ok(Listing::from_str(&source, strip))
}

/// Raw terminal console. Reads are single keys with no line buffering,
/// echoed by hand since the terminal is raw while we wait; writes go to
/// stdout one byte at a time and flush immediately.
struct KeyConsole {
    terminal: Terminal,
    interrupted: Arc<AtomicBool>,
}

impl KeyConsole {
    fn new(interrupted: Arc<AtomicBool>) -> Result<KeyConsole, Error> {
        let terminal = Terminal::new().map_err(io_error)?;
        Ok(KeyConsole {
            terminal,
            interrupted,
        })
    }

    fn wait_key(&mut self) -> Result<u8, Error> {
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                return Err(error!(Break));
            }
            let event = self
                .terminal
                .read_event(Some(Duration::from_millis(100)))
                .map_err(io_error)?;
            if let Some(mortal::Event::Key(key)) = event {
                if let Some(byte) = key_byte(key) {
                    return Ok(byte);
                }
            }
        }
    }
}

impl Console for KeyConsole {
    fn read_key(&mut self) -> Result<u8, Error> {
        let state = self
            .terminal
            .prepare(PrepareConfig {
                block_signals: false,
                ..PrepareConfig::default()
            })
            .map_err(io_error)?;
        let result = self.wait_key();
        self.terminal.restore(state).map_err(io_error)?;
        let byte = result?;
        self.write_char(byte)?;
        Ok(byte)
    }

    fn write_char(&mut self, byte: u8) -> Result<(), Error> {
        let mut stdout = std::io::stdout();
        stdout.write_all(&[byte]).map_err(io_error)?;
        stdout.flush().map_err(io_error)
    }
}

fn key_byte(key: Key) -> Option<u8> {
    match key {
        Key::Char(ch) if (ch as u32) <= 0xFF => Some(ch as u8),
        Key::Enter => Some(b'\n'),
        Key::Tab => Some(b'\t'),
        Key::Backspace => Some(0x08),
        Key::Escape => Some(0x1B),
        Key::Ctrl(ch) => Some((ch as u8) & 0x1F),
        _ => None,
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(InternalError; error.to_string())
}
