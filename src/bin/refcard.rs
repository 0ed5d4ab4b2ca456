#[macro_use]
extern crate error_chain;

use clap::Parser;
use log::Level;
use refcard::{catalog, generate, BuiltinProvider, FileProvider, OpcodeProvider, Result};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "refcard", about = "Reference tables for 8-bit CPU instruction sets")]
struct Args {
    /// Specify CPU type
    #[arg(short, long, default_value = "6502")]
    cpu: String,

    /// Allow undocumented opcodes
    #[arg(short, long)]
    undocumented: bool,

    /// Show debug information as the program runs
    #[arg(short, long)]
    debug: bool,

    /// Show processed instructions as the program runs
    #[arg(short, long)]
    verbose: bool,

    /// Read the opcode table from FILE instead of the built-in tables
    #[arg(short, long, value_name = "FILE")]
    table: Option<PathBuf>,

    /// Print the cycle tables of the CPU instead of the reference tables
    #[arg(long)]
    dump_cycles: bool,
}

quick_main!(run);

fn run() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        Level::Debug
    } else if args.verbose {
        Level::Info
    } else {
        Level::Warn
    };
    simple_logger::init_with_level(level).map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dump_cycles {
        let cpu = catalog(&args.cpu)?;
        writeln!(out, "cycles = {:?}", &cpu.cycles[..])?;
        writeln!(out, "extra_cycles = {:?}", &cpu.extra_cycles[..])?;
        return Ok(());
    }

    let provider: Box<dyn OpcodeProvider> = match &args.table {
        Some(path) => Box::new(FileProvider::new(path)),
        None => Box::new(BuiltinProvider),
    };

    // Render everything before writing so a failure leaves no partial output.
    let views = generate(&args.cpu, provider.as_ref(), args.undocumented)?;
    write!(out, "{}", views)?;
    Ok(())
}
