use crate::{mos6502, AddressingMode, ErrorKind, Result};
use std::collections::HashMap;

// Cycle columns of the branch table: not taken, taken, taken across a
// page boundary. They are the same for every branch of a CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchColumns {
    pub not_taken: u8,
    pub taken: u8,
    pub page_crossed: u8,
}

/// Everything about one CPU that the index builder and the views need
/// besides the raw opcode table.
pub struct CpuCatalog {
    pub name: &'static str,
    /// Modes relabelled at index time, e.g. accumulator shown as implicit.
    pub mode_map: &'static [(AddressingMode, AddressingMode)],
    /// Column order of the matrix views.
    pub order: &'static [AddressingMode],
    pub cycles: &'static [u8; 256],
    pub extra_cycles: &'static [u8; 256],
    pub status_header: &'static str,
    pub status_empty: &'static str,
    status: HashMap<&'static str, &'static str>,
    pub branch: BranchColumns,
}

impl CpuCatalog {
    pub fn display_mode(&self, mode: AddressingMode) -> AddressingMode {
        self.mode_map
            .iter()
            .find(|(from, _)| *from == mode)
            .map(|&(_, to)| to)
            .unwrap_or(mode)
    }

    /// Status-flag row for a mnemonic, or the empty row when none is
    /// registered.
    pub fn status_row(&self, mnemonic: &str) -> &'static str {
        self.status
            .get(mnemonic.to_ascii_uppercase().as_str())
            .copied()
            .unwrap_or(self.status_empty)
    }
}

const ORDER_6502: [AddressingMode; 12] = [
    AddressingMode::Implicit,
    AddressingMode::Immediate,
    AddressingMode::ZeroPage,
    AddressingMode::ZeroPageX,
    AddressingMode::ZeroPageY,
    AddressingMode::Absolute,
    AddressingMode::AbsoluteX,
    AddressingMode::AbsoluteY,
    AddressingMode::Indirect,
    AddressingMode::IndirectX,
    AddressingMode::IndirectY,
    AddressingMode::Relative,
];

lazy_static! {
    static ref CATALOGS: HashMap<&'static str, CpuCatalog> = vec![(
        "6502",
        CpuCatalog {
            name: "6502",
            mode_map: &[(AddressingMode::Accumulator, AddressingMode::Implicit)],
            order: &ORDER_6502,
            cycles: &mos6502::CYCLES,
            extra_cycles: &mos6502::EXTRA_CYCLES,
            status_header: mos6502::STATUS_HEADER,
            status_empty: mos6502::STATUS_EMPTY,
            status: mos6502::STATUS.iter().copied().collect(),
            branch: BranchColumns {
                not_taken: 2,
                taken: 3,
                page_crossed: 4,
            },
        },
    )]
    .into_iter()
    .collect();
}

pub fn catalog(cpu: &str) -> Result<&'static CpuCatalog> {
    match CATALOGS.get(cpu) {
        Some(c) => Ok(c),
        None => bail!(ErrorKind::UnknownCpu(cpu.to_owned(), cpus().join(", "))),
    }
}

/// Identifiers of every registered CPU, sorted.
pub fn cpus() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CATALOGS.keys().copied().collect();
    names.sort_unstable();
    names
}
