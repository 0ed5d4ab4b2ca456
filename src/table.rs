use crate::{AddressingMode, ErrorKind, Result};
use std::borrow::Cow;

pub const SENTINEL_MNEMONIC: &str = "???";

bitflags! {
    // Flag bits carried in the optional fourth field of a table entry.
    pub struct OpcodeFlags: u8 {
        const UNDOC = 0x80; // Undocumented opcode.
    }
}

// One opcode slot as supplied by an opcode-table provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub len: u8,
    pub mnemonic: Cow<'static, str>,
    pub mode: AddressingMode,
    pub flags: OpcodeFlags,
}

impl RawEntry {
    pub const fn sentinel() -> Self {
        RawEntry {
            len: 1,
            mnemonic: Cow::Borrowed(SENTINEL_MNEMONIC),
            mode: AddressingMode::Implicit,
            flags: OpcodeFlags::empty(),
        }
    }

    pub fn is_undocumented(&self) -> bool {
        self.flags.contains(OpcodeFlags::UNDOC)
    }

    pub fn is_sentinel(&self) -> bool {
        self.mnemonic == SENTINEL_MNEMONIC
    }
}

// The 3-field form leaves the flags empty; some architectures' tables
// never carry the fourth field.
macro_rules! op {
    ($len:expr, $name:expr, $mode:ident) => {
        RawEntry {
            len: $len,
            mnemonic: Cow::Borrowed($name),
            mode: AddressingMode::$mode,
            flags: OpcodeFlags::empty(),
        }
    };
    ($len:expr, $name:expr, $mode:ident, $flags:ident) => {
        RawEntry {
            len: $len,
            mnemonic: Cow::Borrowed($name),
            mode: AddressingMode::$mode,
            flags: OpcodeFlags::$flags,
        }
    };
}

/// Raw opcode table for one CPU: exactly one entry per opcode byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    entries: Vec<RawEntry>,
}

impl RawTable {
    pub fn from_array(entries: &[RawEntry; 256]) -> Self {
        RawTable {
            entries: entries.to_vec(),
        }
    }

    pub fn get(&self, opcode: u8) -> &RawEntry {
        &self.entries[opcode as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &RawEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(opcode, entry)| (opcode as u8, entry))
    }

    /// Parses the text form of an opcode table.
    ///
    /// One entry per line, `<opcode>: <len>, <mnemonic>, <mode>[, <flags>]`,
    /// with the opcode in hex. Blank lines and `#` comments are skipped and
    /// slots that are never listed keep the `???` sentinel. Any line that
    /// does not have exactly three or four fields is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = vec![RawEntry::sentinel(); 256];
        let mut seen = [false; 256];

        for (n, line) in text.lines().enumerate() {
            let line_no = n + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (opcode, rest) = match line.find(':') {
                Some(i) => (&line[..i], &line[i + 1..]),
                None => bail!(ErrorKind::MalformedEntry(line_no, "missing ':'".into())),
            };
            let opcode = parse_opcode(opcode).ok_or_else(|| {
                ErrorKind::MalformedEntry(line_no, format!("bad opcode '{}'", opcode.trim()))
            })?;
            if seen[opcode as usize] {
                bail!(ErrorKind::MalformedEntry(
                    line_no,
                    format!("duplicate opcode {:02x}", opcode)
                ));
            }

            let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
            let entry = match fields.as_slice() {
                [len, name, mode] => parse_entry(line_no, len, name, mode, None)?,
                [len, name, mode, flags] => parse_entry(line_no, len, name, mode, Some(*flags))?,
                _ => bail!(ErrorKind::MalformedEntry(
                    line_no,
                    format!("expected 3 or 4 fields, found {}", fields.len())
                )),
            };

            seen[opcode as usize] = true;
            entries[opcode as usize] = entry;
        }

        Ok(RawTable { entries })
    }
}

fn parse_opcode(s: &str) -> Option<u8> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'))
        .unwrap_or(s);
    u8::from_str_radix(s, 16).ok()
}

fn parse_flags(s: &str) -> Option<u8> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

fn parse_entry(
    line_no: usize,
    len: &str,
    name: &str,
    mode: &str,
    flags: Option<&str>,
) -> Result<RawEntry> {
    let malformed = |reason: String| ErrorKind::MalformedEntry(line_no, reason);

    let len = match len.parse::<u8>() {
        Ok(len @ 1..=3) => len,
        _ => return Err(malformed(format!("bad byte length '{}'", len)).into()),
    };
    let name = name.trim_matches('"');
    if name.is_empty() {
        return Err(malformed("empty mnemonic".into()).into());
    }
    let mode = mode
        .trim_matches('"')
        .parse::<AddressingMode>()
        .map_err(|e| malformed(e.to_string()))?;
    let flags = match flags {
        Some(f) => parse_flags(f)
            .map(OpcodeFlags::from_bits_truncate)
            .ok_or_else(|| malformed(format!("bad flags '{}'", f)))?,
        None => OpcodeFlags::empty(),
    };

    Ok(RawEntry {
        len,
        mnemonic: Cow::Owned(name.to_owned()),
        mode,
        flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_line(err: crate::Error) -> usize {
        match err.kind() {
            ErrorKind::MalformedEntry(line, _) => *line,
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn parse_three_and_four_fields() {
        let table = RawTable::parse(
            "# comment\n\
             0x00: 1, brk, implicit\n\
             \n\
             03: 2, \"slo\", indirectx, 128\n\
             $10: 2, bpl, rel, 0x01\n",
        )
        .unwrap();

        let brk = table.get(0x00);
        assert_eq!("brk", brk.mnemonic);
        assert_eq!(AddressingMode::Implicit, brk.mode);
        assert!(!brk.is_undocumented());

        let slo = table.get(0x03);
        assert_eq!("slo", slo.mnemonic);
        assert_eq!(2, slo.len);
        assert!(slo.is_undocumented());

        // Unknown flag bits are dropped.
        let bpl = table.get(0x10);
        assert_eq!(OpcodeFlags::empty(), bpl.flags);
        assert_eq!(AddressingMode::Relative, bpl.mode);

        assert!(table.get(0x01).is_sentinel());
        assert_eq!(256, table.iter().count());
    }

    #[test]
    fn reject_wrong_field_count() {
        let err = RawTable::parse("00: 1, brk\n").unwrap_err();
        assert_eq!(1, malformed_line(err));

        let err = RawTable::parse("00: 1, brk, implicit\n01: 2, ora, indirectx, 0, 9\n").unwrap_err();
        assert_eq!(2, malformed_line(err));
    }

    #[test]
    fn reject_bad_fields() {
        for text in &[
            "zz: 1, brk, implicit",
            "100: 1, brk, implicit",
            "00 1, brk, implicit",
            "00: 4, brk, implicit",
            "00: 0, brk, implicit",
            "00: 1, , implicit",
            "00: 1, brk, sideways",
            "00: 1, brk, implicit, lots",
        ] {
            assert!(RawTable::parse(text).is_err(), "accepted {:?}", text);
        }
    }

    #[test]
    fn reject_duplicate_opcode() {
        let err = RawTable::parse("ea: 1, nop, implicit\nEA: 1, nop, implicit\n").unwrap_err();
        assert_eq!(2, malformed_line(err));
    }
}
