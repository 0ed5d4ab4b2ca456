#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;

mod mode;
#[macro_use]
mod table;
mod catalog;
mod index;
mod mos6502;
mod provider;
mod render;

pub use catalog::{catalog, cpus, BranchColumns, CpuCatalog};
pub use index::{build, MnemonicEntry, ModeRecord, OpcodeIndex};
pub use mode::AddressingMode;
pub use provider::{BuiltinProvider, FileProvider, OpcodeProvider};
pub use render::{cycle_field, label, render, View, Views};
pub use table::{OpcodeFlags, RawEntry, RawTable, SENTINEL_MNEMONIC};

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    errors {
        UnknownCpu(cpu: String, known: String) {
            description("unknown cpu")
            display("no catalog registered for cpu '{}' (known: {})", cpu, known)
        }
        MissingOpcodeProvider(reason: String) {
            description("opcode table unavailable")
            display("opcode table unavailable: {}", reason)
        }
        MalformedEntry(line: usize, reason: String) {
            description("malformed opcode table entry")
            display("malformed opcode table entry on line {}: {}", line, reason)
        }
        UnknownMode(name: String) {
            description("unknown addressing mode")
            display("unknown addressing mode '{}'", name)
        }
    }
}

/// Loads the opcode table for `cpu`, indexes it and renders all five views.
///
/// Nothing is rendered unless every step succeeds.
pub fn generate<P: OpcodeProvider + ?Sized>(
    cpu: &str,
    provider: &P,
    include_undocumented: bool,
) -> Result<Views> {
    let catalog = catalog(cpu)?;
    let table = provider.opcode_table(cpu)?;
    let index = build(
        cpu,
        &table,
        catalog.cycles,
        catalog.extra_cycles,
        include_undocumented,
    )?;
    Ok(Views::render(&index, catalog))
}
