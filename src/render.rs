use crate::catalog::CpuCatalog;
use crate::index::{MnemonicEntry, ModeRecord, OpcodeIndex};
use crate::AddressingMode;
use std::fmt;

// Every mode column is three fields wide, each followed by a comma, so
// rows line up whether a mode is present or not.
const BLANK: &str = ",,,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    // Label row and data row per mnemonic, one column group per mode.
    Full,
    // Data row only, same columns as Full.
    Compact,
    // Mnemonics whose only mode is implicit.
    Implicit,
    // One row per (mnemonic, mode).
    List,
    // Branches.
    Relative,
}

impl View {
    /// Output order.
    pub const ALL: [View; 5] = [
        View::Full,
        View::Compact,
        View::Implicit,
        View::List,
        View::Relative,
    ];
}

/// `<opcode>,<cycles>[+],<bytes>,` e.g. `10,2+,2,`.
pub fn cycle_field(rec: &ModeRecord) -> String {
    format!(
        "{:02x},{}{},{},",
        rec.opcode,
        rec.cycles,
        if rec.has_extra { "+" } else { "" },
        rec.len
    )
}

/// Quoted mnemonic and operand syntax, e.g. `"ORA $nn,X"`.
pub fn label(mnemonic: &str, mode: AddressingMode) -> String {
    format!("\"{} {}\"", mnemonic, mode.operand())
}

fn row_prefix(entry: &MnemonicEntry, catalog: &CpuCatalog) -> String {
    format!("{},{},", entry.mnemonic, catalog.status_row(&entry.mnemonic))
}

fn matrix_header(catalog: &CpuCatalog) -> String {
    let mut header = format!("Opcode,{},", catalog.status_header);
    for mode in catalog.order {
        header.push_str(&format!("\"{}\",,,", mode.title()));
    }
    header
}

fn matrix_entries(index: &OpcodeIndex) -> impl Iterator<Item = &MnemonicEntry> {
    index
        .sorted()
        .into_iter()
        .filter(|entry| !entry.is_implicit_only())
}

fn data_row(mut row: String, entry: &MnemonicEntry, catalog: &CpuCatalog) -> String {
    for &mode in catalog.order {
        match entry.get(mode) {
            Some(rec) => row.push_str(&cycle_field(rec)),
            None => row.push_str(BLANK),
        }
    }
    row
}

pub fn full_matrix(index: &OpcodeIndex, catalog: &CpuCatalog) -> Vec<String> {
    let mut lines = vec![matrix_header(catalog)];
    for entry in matrix_entries(index) {
        let mut label_row = row_prefix(entry, catalog);
        for &mode in catalog.order {
            if entry.get(mode).is_some() {
                label_row.push_str(&label(&entry.mnemonic, mode));
            }
            label_row.push_str(BLANK);
        }
        lines.push(label_row);
        lines.push(data_row(format!(",{},", catalog.status_empty), entry, catalog));
    }
    lines
}

pub fn compact_matrix(index: &OpcodeIndex, catalog: &CpuCatalog) -> Vec<String> {
    let mut lines = vec![matrix_header(catalog)];
    lines.extend(
        matrix_entries(index).map(|entry| data_row(row_prefix(entry, catalog), entry, catalog)),
    );
    lines
}

pub fn implicit_only(index: &OpcodeIndex, catalog: &CpuCatalog) -> Vec<String> {
    let mut lines = vec![format!("Opcode,{},Hex,C,B", catalog.status_header)];
    for entry in index.sorted() {
        if !entry.is_implicit_only() {
            continue;
        }
        if let Some(rec) = entry.get(AddressingMode::Implicit) {
            lines.push(row_prefix(entry, catalog) + &cycle_field(rec));
        }
    }
    lines
}

// Catalog order first, then any mode the catalog has no column for.
fn list_modes(entry: &MnemonicEntry, catalog: &CpuCatalog) -> Vec<AddressingMode> {
    let mut modes: Vec<AddressingMode> = catalog
        .order
        .iter()
        .copied()
        .filter(|mode| entry.modes.contains_key(mode))
        .collect();
    let mut rest: Vec<AddressingMode> = entry
        .modes
        .keys()
        .copied()
        .filter(|mode| !catalog.order.contains(mode))
        .collect();
    rest.sort();
    modes.extend(rest);
    modes
}

pub fn flat_list(index: &OpcodeIndex, catalog: &CpuCatalog) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in index.sorted() {
        let status = catalog.status_row(&entry.mnemonic);
        for mode in list_modes(entry, catalog) {
            if let Some(rec) = entry.get(mode) {
                lines.push(format!(
                    "{},{},{}",
                    label(&entry.mnemonic, mode),
                    status,
                    cycle_field(rec)
                ));
            }
        }
    }
    lines
}

pub fn relative(index: &OpcodeIndex, catalog: &CpuCatalog) -> Vec<String> {
    let branch = catalog.branch;
    let mut lines = vec!["Opcode,Hex,,N,T,P".to_owned()];
    for entry in index.sorted() {
        if let Some(rec) = entry.get(AddressingMode::Relative) {
            lines.push(format!(
                "{},{:02x},,{},{},{}",
                entry.mnemonic, rec.opcode, branch.not_taken, branch.taken, branch.page_crossed
            ));
        }
    }
    lines
}

pub fn render(view: View, index: &OpcodeIndex, catalog: &CpuCatalog) -> Vec<String> {
    let lines = match view {
        View::Full => full_matrix(index, catalog),
        View::Compact => compact_matrix(index, catalog),
        View::Implicit => implicit_only(index, catalog),
        View::List => flat_list(index, catalog),
        View::Relative => relative(index, catalog),
    };
    info!("{:?} view: {} rows", view, lines.len());
    lines
}

/// All five views of one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Views {
    pub full: Vec<String>,
    pub compact: Vec<String>,
    pub implicit: Vec<String>,
    pub list: Vec<String>,
    pub relative: Vec<String>,
}

impl Views {
    pub fn render(index: &OpcodeIndex, catalog: &CpuCatalog) -> Self {
        Views {
            full: render(View::Full, index, catalog),
            compact: render(View::Compact, index, catalog),
            implicit: render(View::Implicit, index, catalog),
            list: render(View::List, index, catalog),
            relative: render(View::Relative, index, catalog),
        }
    }

    pub fn get(&self, view: View) -> &[String] {
        match view {
            View::Full => &self.full,
            View::Compact => &self.compact,
            View::Implicit => &self.implicit,
            View::List => &self.list,
            View::Relative => &self.relative,
        }
    }
}

impl fmt::Display for Views {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &view in View::ALL.iter() {
            for line in self.get(view) {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
