use crate::{Error, ErrorKind, Result};
use std::fmt;
use std::str::FromStr;

// Address Modes:
// implicit    .... implied                 OPC             operand implied
// accumulator .... Accumulator             OPC A           operand is AC (implied single byte instruction)
// immediate   .... immediate               OPC #$BB        operand is byte BB
// zeropage    .... zeropage                OPC $LL         operand is zeropage address (hi-byte is zero, address = $00LL)
// zeropagex   .... zeropage, X-indexed     OPC $LL,X       effective address is address incremented by X without carry
// zeropagey   .... zeropage, Y-indexed     OPC $LL,Y       effective address is address incremented by Y without carry
// absolute    .... absolute                OPC $LLHH       operand is address $HHLL
// absolutex   .... absolute, X-indexed     OPC $LLHH,X     effective address is address incremented by X with carry
// absolutey   .... absolute, Y-indexed     OPC $LLHH,Y     effective address is address incremented by Y with carry
// indirect    .... indirect                OPC ($LLHH)     effective address is contents of word at address: C.w($HHLL)
// indirectx   .... X-indexed, indirect     OPC ($LL,X)     effective address is word in (LL + X, LL + X + 1)
// indirecty   .... indirect, Y-indexed     OPC ($LL),Y     effective address is word in (LL, LL + 1) incremented by Y
// relative    .... relative                OPC $BB         branch target is PC + signed offset BB
//
// The declaration order is the catalog order used by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressingMode {
    Implicit,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    Accumulator,
}

impl AddressingMode {
    pub const ALL: [AddressingMode; 13] = [
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
        AddressingMode::Accumulator,
    ];

    /// Column title used in the matrix headers.
    ///
    /// Modes without operand syntax are titled by their name.
    pub fn title(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "implicit",
            AddressingMode::Relative => "relative",
            AddressingMode::Accumulator => "A",
            _ => self.operand(),
        }
    }

    /// Operand syntax written after the mnemonic, e.g. `$nn,X`.
    pub fn operand(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "",
            AddressingMode::Immediate => "#nn",
            AddressingMode::ZeroPage => "$nn",
            AddressingMode::ZeroPageX => "$nn,X",
            AddressingMode::ZeroPageY => "$nn,Y",
            AddressingMode::Absolute => "$nnnn",
            AddressingMode::AbsoluteX => "$nnnn,X",
            AddressingMode::AbsoluteY => "$nnnn,Y",
            AddressingMode::Indirect => "($nnnn)",
            AddressingMode::IndirectX => "($nn,X)",
            AddressingMode::IndirectY => "($nn),Y",
            AddressingMode::Relative => "",
            AddressingMode::Accumulator => "A",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "implicit",
            AddressingMode::Immediate => "immediate",
            AddressingMode::ZeroPage => "zeropage",
            AddressingMode::ZeroPageX => "zeropagex",
            AddressingMode::ZeroPageY => "zeropagey",
            AddressingMode::Absolute => "absolute",
            AddressingMode::AbsoluteX => "absolutex",
            AddressingMode::AbsoluteY => "absolutey",
            AddressingMode::Indirect => "indirect",
            AddressingMode::IndirectX => "indirectx",
            AddressingMode::IndirectY => "indirecty",
            AddressingMode::Relative => "relative",
            AddressingMode::Accumulator => "accumulator",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Accepts the long names used by opcode tables (zeropagex) as well as the
// short py65 disassembler tags (zpx).
impl FromStr for AddressingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mode = match s.trim().to_ascii_lowercase().as_str() {
            "implicit" | "implied" | "imp" => AddressingMode::Implicit,
            "immediate" | "imm" => AddressingMode::Immediate,
            "zeropage" | "zpg" | "zp" => AddressingMode::ZeroPage,
            "zeropagex" | "zpx" => AddressingMode::ZeroPageX,
            "zeropagey" | "zpy" => AddressingMode::ZeroPageY,
            "absolute" | "abs" => AddressingMode::Absolute,
            "absolutex" | "abx" => AddressingMode::AbsoluteX,
            "absolutey" | "aby" => AddressingMode::AbsoluteY,
            "indirect" | "ind" => AddressingMode::Indirect,
            "indirectx" | "inx" => AddressingMode::IndirectX,
            "indirecty" | "iny" => AddressingMode::IndirectY,
            "relative" | "rel" => AddressingMode::Relative,
            "accumulator" | "acc" => AddressingMode::Accumulator,
            other => return Err(ErrorKind::UnknownMode(other.to_owned()).into()),
        };
        Ok(mode)
    }
}
