use crate::catalog::catalog;
use crate::table::RawTable;
use crate::{AddressingMode, Result};
use std::collections::HashMap;

// One opcode as seen from its mnemonic and addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRecord {
    pub opcode: u8,
    pub cycles: u8,
    // An extra cycle is charged under a runtime condition (page crossing,
    // taken branch).
    pub has_extra: bool,
    pub len: u8,
    pub undocumented: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicEntry {
    pub mnemonic: String,
    pub modes: HashMap<AddressingMode, ModeRecord>,
}

impl MnemonicEntry {
    pub fn get(&self, mode: AddressingMode) -> Option<&ModeRecord> {
        self.modes.get(&mode)
    }

    /// True when the mnemonic exists in exactly one mode and that mode is
    /// implicit. Such mnemonics are kept out of the matrix views.
    pub fn is_implicit_only(&self) -> bool {
        self.modes.len() == 1 && self.modes.contains_key(&AddressingMode::Implicit)
    }
}

/// Mnemonic -> addressing mode -> record, built once per run and read-only
/// afterwards. Iteration order is unspecified; the views sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeIndex {
    entries: HashMap<String, MnemonicEntry>,
}

impl OpcodeIndex {
    pub fn get(&self, mnemonic: &str) -> Option<&MnemonicEntry> {
        self.entries.get(&mnemonic.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of populated (mnemonic, mode) pairs.
    pub fn mode_count(&self) -> usize {
        self.entries.values().map(|e| e.modes.len()).sum()
    }

    /// Entries in lexicographic mnemonic order.
    pub fn sorted(&self) -> Vec<&MnemonicEntry> {
        let mut entries: Vec<&MnemonicEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.mnemonic.cmp(&b.mnemonic));
        entries
    }
}

/// Builds the mnemonic index for `cpu` from its raw opcode table and the
/// two parallel cycle tables.
///
/// Slots are skipped when they carry the `???` sentinel, when their base
/// cost is 0 (no instruction there), or when they are undocumented and
/// `include_undocumented` is off. Mnemonics are upper-cased and modes are
/// relabelled through the CPU's mode map. When two slots land on the same
/// mnemonic and mode, a documented slot wins over an undocumented one,
/// otherwise the lower opcode is kept.
pub fn build(
    cpu: &str,
    table: &RawTable,
    cycles: &[u8; 256],
    extra_cycles: &[u8; 256],
    include_undocumented: bool,
) -> Result<OpcodeIndex> {
    let catalog = catalog(cpu)?;
    let mut entries: HashMap<String, MnemonicEntry> = HashMap::new();

    for (opcode, raw) in table.iter() {
        debug!(
            "{:02x}: {} {} {} bytes, {:02x}",
            opcode,
            raw.mnemonic,
            raw.mode,
            raw.len,
            raw.flags.bits()
        );

        if raw.is_sentinel() {
            continue;
        }
        let base = cycles[opcode as usize];
        if base == 0 {
            debug!("Skipping {:02x} {}: no cycle cost", opcode, raw.mnemonic);
            continue;
        }
        if raw.is_undocumented() && !include_undocumented {
            debug!("Skipping {:02x} {}: undocumented", opcode, raw.mnemonic);
            continue;
        }

        let mnemonic = raw.mnemonic.to_ascii_uppercase();
        let mode = catalog.display_mode(raw.mode);
        let record = ModeRecord {
            opcode,
            cycles: base,
            has_extra: extra_cycles[opcode as usize] > 0,
            len: raw.len,
            undocumented: raw.is_undocumented(),
        };

        let entry = entries
            .entry(mnemonic.clone())
            .or_insert_with(|| MnemonicEntry {
                mnemonic,
                modes: HashMap::new(),
            });
        match entry.modes.get(&mode) {
            Some(kept) if !kept.undocumented || record.undocumented => {
                debug!(
                    "{:02x} {} {} shadowed by {:02x}",
                    opcode, entry.mnemonic, mode, kept.opcode
                );
            }
            _ => {
                info!(
                    "{} {} -> {:02x}, {} cycles{}, {} bytes",
                    entry.mnemonic,
                    mode,
                    opcode,
                    base,
                    if record.has_extra { "+" } else { "" },
                    raw.len
                );
                entry.modes.insert(mode, record);
            }
        }
    }

    let index = OpcodeIndex { entries };
    info!(
        "{}: indexed {} mnemonics in {} modes",
        cpu,
        index.len(),
        index.mode_count()
    );
    Ok(index)
}
