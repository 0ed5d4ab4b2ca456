use crate::table::RawTable;
use crate::{mos6502, ErrorKind, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

// Source of raw opcode tables, keyed by CPU identifier.
pub trait OpcodeProvider {
    fn opcode_table(&self, cpu: &str) -> Result<RawTable>;
}

// Tables compiled into the crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinProvider;

impl OpcodeProvider for BuiltinProvider {
    fn opcode_table(&self, cpu: &str) -> Result<RawTable> {
        match cpu {
            "6502" => Ok(RawTable::from_array(&mos6502::OPCODES)),
            _ => bail!(ErrorKind::MissingOpcodeProvider(format!(
                "no built-in opcode table for cpu '{}'",
                cpu
            ))),
        }
    }
}

/// Reads the text form of an opcode table from disk (see
/// [`RawTable::parse`]). The same file is served for every CPU.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileProvider {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OpcodeProvider for FileProvider {
    fn opcode_table(&self, cpu: &str) -> Result<RawTable> {
        let text = fs::read_to_string(&self.path).chain_err(|| {
            ErrorKind::MissingOpcodeProvider(format!("cannot read {}", self.path.display()))
        })?;
        debug!("{}: loaded opcode table from {}", cpu, self.path.display());
        RawTable::parse(&text)
    }
}
