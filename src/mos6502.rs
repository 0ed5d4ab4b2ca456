// NMOS 6502 instruction set data.
// ref: https://www.masswerk.at/6502/6502_instruction_set.html
//      http://www.oxyron.de/html/opcodes02.html
//
// Generated by script. Please do not change this file by hand.

use crate::table::{OpcodeFlags, RawEntry};
use crate::AddressingMode;
use std::borrow::Cow;

// Opcode slots, indexed by opcode byte. Jam (KIL) slots halt the CPU and
// carry no cycle cost.
pub const OPCODES: [RawEntry; 256] = [
    op!(1, "brk", Implicit), // 00
    op!(2, "ora", IndirectX), // 01
    op!(1, "kil", Implicit, UNDOC), // 02
    op!(2, "slo", IndirectX, UNDOC), // 03
    op!(2, "nop", ZeroPage, UNDOC), // 04
    op!(2, "ora", ZeroPage), // 05
    op!(2, "asl", ZeroPage), // 06
    op!(2, "slo", ZeroPage, UNDOC), // 07
    op!(1, "php", Implicit), // 08
    op!(2, "ora", Immediate), // 09
    op!(1, "asl", Accumulator), // 0a
    op!(2, "anc", Immediate, UNDOC), // 0b
    op!(3, "nop", Absolute, UNDOC), // 0c
    op!(3, "ora", Absolute), // 0d
    op!(3, "asl", Absolute), // 0e
    op!(3, "slo", Absolute, UNDOC), // 0f
    op!(2, "bpl", Relative), // 10
    op!(2, "ora", IndirectY), // 11
    op!(1, "kil", Implicit, UNDOC), // 12
    op!(2, "slo", IndirectY, UNDOC), // 13
    op!(2, "nop", ZeroPageX, UNDOC), // 14
    op!(2, "ora", ZeroPageX), // 15
    op!(2, "asl", ZeroPageX), // 16
    op!(2, "slo", ZeroPageX, UNDOC), // 17
    op!(1, "clc", Implicit), // 18
    op!(3, "ora", AbsoluteY), // 19
    op!(1, "nop", Implicit, UNDOC), // 1a
    op!(3, "slo", AbsoluteY, UNDOC), // 1b
    op!(3, "nop", AbsoluteX, UNDOC), // 1c
    op!(3, "ora", AbsoluteX), // 1d
    op!(3, "asl", AbsoluteX), // 1e
    op!(3, "slo", AbsoluteX, UNDOC), // 1f
    op!(3, "jsr", Absolute), // 20
    op!(2, "and", IndirectX), // 21
    op!(1, "kil", Implicit, UNDOC), // 22
    op!(2, "rla", IndirectX, UNDOC), // 23
    op!(2, "bit", ZeroPage), // 24
    op!(2, "and", ZeroPage), // 25
    op!(2, "rol", ZeroPage), // 26
    op!(2, "rla", ZeroPage, UNDOC), // 27
    op!(1, "plp", Implicit), // 28
    op!(2, "and", Immediate), // 29
    op!(1, "rol", Accumulator), // 2a
    op!(2, "anc", Immediate, UNDOC), // 2b
    op!(3, "bit", Absolute), // 2c
    op!(3, "and", Absolute), // 2d
    op!(3, "rol", Absolute), // 2e
    op!(3, "rla", Absolute, UNDOC), // 2f
    op!(2, "bmi", Relative), // 30
    op!(2, "and", IndirectY), // 31
    op!(1, "kil", Implicit, UNDOC), // 32
    op!(2, "rla", IndirectY, UNDOC), // 33
    op!(2, "nop", ZeroPageX, UNDOC), // 34
    op!(2, "and", ZeroPageX), // 35
    op!(2, "rol", ZeroPageX), // 36
    op!(2, "rla", ZeroPageX, UNDOC), // 37
    op!(1, "sec", Implicit), // 38
    op!(3, "and", AbsoluteY), // 39
    op!(1, "nop", Implicit, UNDOC), // 3a
    op!(3, "rla", AbsoluteY, UNDOC), // 3b
    op!(3, "nop", AbsoluteX, UNDOC), // 3c
    op!(3, "and", AbsoluteX), // 3d
    op!(3, "rol", AbsoluteX), // 3e
    op!(3, "rla", AbsoluteX, UNDOC), // 3f
    op!(1, "rti", Implicit), // 40
    op!(2, "eor", IndirectX), // 41
    op!(1, "kil", Implicit, UNDOC), // 42
    op!(2, "sre", IndirectX, UNDOC), // 43
    op!(2, "nop", ZeroPage, UNDOC), // 44
    op!(2, "eor", ZeroPage), // 45
    op!(2, "lsr", ZeroPage), // 46
    op!(2, "sre", ZeroPage, UNDOC), // 47
    op!(1, "pha", Implicit), // 48
    op!(2, "eor", Immediate), // 49
    op!(1, "lsr", Accumulator), // 4a
    op!(2, "alr", Immediate, UNDOC), // 4b
    op!(3, "jmp", Absolute), // 4c
    op!(3, "eor", Absolute), // 4d
    op!(3, "lsr", Absolute), // 4e
    op!(3, "sre", Absolute, UNDOC), // 4f
    op!(2, "bvc", Relative), // 50
    op!(2, "eor", IndirectY), // 51
    op!(1, "kil", Implicit, UNDOC), // 52
    op!(2, "sre", IndirectY, UNDOC), // 53
    op!(2, "nop", ZeroPageX, UNDOC), // 54
    op!(2, "eor", ZeroPageX), // 55
    op!(2, "lsr", ZeroPageX), // 56
    op!(2, "sre", ZeroPageX, UNDOC), // 57
    op!(1, "cli", Implicit), // 58
    op!(3, "eor", AbsoluteY), // 59
    op!(1, "nop", Implicit, UNDOC), // 5a
    op!(3, "sre", AbsoluteY, UNDOC), // 5b
    op!(3, "nop", AbsoluteX, UNDOC), // 5c
    op!(3, "eor", AbsoluteX), // 5d
    op!(3, "lsr", AbsoluteX), // 5e
    op!(3, "sre", AbsoluteX, UNDOC), // 5f
    op!(1, "rts", Implicit), // 60
    op!(2, "adc", IndirectX), // 61
    op!(1, "kil", Implicit, UNDOC), // 62
    op!(2, "rra", IndirectX, UNDOC), // 63
    op!(2, "nop", ZeroPage, UNDOC), // 64
    op!(2, "adc", ZeroPage), // 65
    op!(2, "ror", ZeroPage), // 66
    op!(2, "rra", ZeroPage, UNDOC), // 67
    op!(1, "pla", Implicit), // 68
    op!(2, "adc", Immediate), // 69
    op!(1, "ror", Accumulator), // 6a
    op!(2, "arr", Immediate, UNDOC), // 6b
    op!(3, "jmp", Indirect), // 6c
    op!(3, "adc", Absolute), // 6d
    op!(3, "ror", Absolute), // 6e
    op!(3, "rra", Absolute, UNDOC), // 6f
    op!(2, "bvs", Relative), // 70
    op!(2, "adc", IndirectY), // 71
    op!(1, "kil", Implicit, UNDOC), // 72
    op!(2, "rra", IndirectY, UNDOC), // 73
    op!(2, "nop", ZeroPageX, UNDOC), // 74
    op!(2, "adc", ZeroPageX), // 75
    op!(2, "ror", ZeroPageX), // 76
    op!(2, "rra", ZeroPageX, UNDOC), // 77
    op!(1, "sei", Implicit), // 78
    op!(3, "adc", AbsoluteY), // 79
    op!(1, "nop", Implicit, UNDOC), // 7a
    op!(3, "rra", AbsoluteY, UNDOC), // 7b
    op!(3, "nop", AbsoluteX, UNDOC), // 7c
    op!(3, "adc", AbsoluteX), // 7d
    op!(3, "ror", AbsoluteX), // 7e
    op!(3, "rra", AbsoluteX, UNDOC), // 7f
    op!(2, "nop", Immediate, UNDOC), // 80
    op!(2, "sta", IndirectX), // 81
    op!(2, "nop", Immediate, UNDOC), // 82
    op!(2, "sax", IndirectX, UNDOC), // 83
    op!(2, "sty", ZeroPage), // 84
    op!(2, "sta", ZeroPage), // 85
    op!(2, "stx", ZeroPage), // 86
    op!(2, "sax", ZeroPage, UNDOC), // 87
    op!(1, "dey", Implicit), // 88
    op!(2, "nop", Immediate, UNDOC), // 89
    op!(1, "txa", Implicit), // 8a
    op!(2, "xaa", Immediate, UNDOC), // 8b
    op!(3, "sty", Absolute), // 8c
    op!(3, "sta", Absolute), // 8d
    op!(3, "stx", Absolute), // 8e
    op!(3, "sax", Absolute, UNDOC), // 8f
    op!(2, "bcc", Relative), // 90
    op!(2, "sta", IndirectY), // 91
    op!(1, "kil", Implicit, UNDOC), // 92
    op!(2, "ahx", IndirectY, UNDOC), // 93
    op!(2, "sty", ZeroPageX), // 94
    op!(2, "sta", ZeroPageX), // 95
    op!(2, "stx", ZeroPageY), // 96
    op!(2, "sax", ZeroPageY, UNDOC), // 97
    op!(1, "tya", Implicit), // 98
    op!(3, "sta", AbsoluteY), // 99
    op!(1, "txs", Implicit), // 9a
    op!(3, "tas", AbsoluteY, UNDOC), // 9b
    op!(3, "shy", AbsoluteX, UNDOC), // 9c
    op!(3, "sta", AbsoluteX), // 9d
    op!(3, "shx", AbsoluteY, UNDOC), // 9e
    op!(3, "ahx", AbsoluteY, UNDOC), // 9f
    op!(2, "ldy", Immediate), // a0
    op!(2, "lda", IndirectX), // a1
    op!(2, "ldx", Immediate), // a2
    op!(2, "lax", IndirectX, UNDOC), // a3
    op!(2, "ldy", ZeroPage), // a4
    op!(2, "lda", ZeroPage), // a5
    op!(2, "ldx", ZeroPage), // a6
    op!(2, "lax", ZeroPage, UNDOC), // a7
    op!(1, "tay", Implicit), // a8
    op!(2, "lda", Immediate), // a9
    op!(1, "tax", Implicit), // aa
    op!(2, "lax", Immediate, UNDOC), // ab
    op!(3, "ldy", Absolute), // ac
    op!(3, "lda", Absolute), // ad
    op!(3, "ldx", Absolute), // ae
    op!(3, "lax", Absolute, UNDOC), // af
    op!(2, "bcs", Relative), // b0
    op!(2, "lda", IndirectY), // b1
    op!(1, "kil", Implicit, UNDOC), // b2
    op!(2, "lax", IndirectY, UNDOC), // b3
    op!(2, "ldy", ZeroPageX), // b4
    op!(2, "lda", ZeroPageX), // b5
    op!(2, "ldx", ZeroPageY), // b6
    op!(2, "lax", ZeroPageY, UNDOC), // b7
    op!(1, "clv", Implicit), // b8
    op!(3, "lda", AbsoluteY), // b9
    op!(1, "tsx", Implicit), // ba
    op!(3, "las", AbsoluteY, UNDOC), // bb
    op!(3, "ldy", AbsoluteX), // bc
    op!(3, "lda", AbsoluteX), // bd
    op!(3, "ldx", AbsoluteY), // be
    op!(3, "lax", AbsoluteY, UNDOC), // bf
    op!(2, "cpy", Immediate), // c0
    op!(2, "cmp", IndirectX), // c1
    op!(2, "nop", Immediate, UNDOC), // c2
    op!(2, "dcp", IndirectX, UNDOC), // c3
    op!(2, "cpy", ZeroPage), // c4
    op!(2, "cmp", ZeroPage), // c5
    op!(2, "dec", ZeroPage), // c6
    op!(2, "dcp", ZeroPage, UNDOC), // c7
    op!(1, "iny", Implicit), // c8
    op!(2, "cmp", Immediate), // c9
    op!(1, "dex", Implicit), // ca
    op!(2, "axs", Immediate, UNDOC), // cb
    op!(3, "cpy", Absolute), // cc
    op!(3, "cmp", Absolute), // cd
    op!(3, "dec", Absolute), // ce
    op!(3, "dcp", Absolute, UNDOC), // cf
    op!(2, "bne", Relative), // d0
    op!(2, "cmp", IndirectY), // d1
    op!(1, "kil", Implicit, UNDOC), // d2
    op!(2, "dcp", IndirectY, UNDOC), // d3
    op!(2, "nop", ZeroPageX, UNDOC), // d4
    op!(2, "cmp", ZeroPageX), // d5
    op!(2, "dec", ZeroPageX), // d6
    op!(2, "dcp", ZeroPageX, UNDOC), // d7
    op!(1, "cld", Implicit), // d8
    op!(3, "cmp", AbsoluteY), // d9
    op!(1, "nop", Implicit, UNDOC), // da
    op!(3, "dcp", AbsoluteY, UNDOC), // db
    op!(3, "nop", AbsoluteX, UNDOC), // dc
    op!(3, "cmp", AbsoluteX), // dd
    op!(3, "dec", AbsoluteX), // de
    op!(3, "dcp", AbsoluteX, UNDOC), // df
    op!(2, "cpx", Immediate), // e0
    op!(2, "sbc", IndirectX), // e1
    op!(2, "nop", Immediate, UNDOC), // e2
    op!(2, "isc", IndirectX, UNDOC), // e3
    op!(2, "cpx", ZeroPage), // e4
    op!(2, "sbc", ZeroPage), // e5
    op!(2, "inc", ZeroPage), // e6
    op!(2, "isc", ZeroPage, UNDOC), // e7
    op!(1, "inx", Implicit), // e8
    op!(2, "sbc", Immediate), // e9
    op!(1, "nop", Implicit), // ea
    op!(2, "sbc", Immediate, UNDOC), // eb
    op!(3, "cpx", Absolute), // ec
    op!(3, "sbc", Absolute), // ed
    op!(3, "inc", Absolute), // ee
    op!(3, "isc", Absolute, UNDOC), // ef
    op!(2, "beq", Relative), // f0
    op!(2, "sbc", IndirectY), // f1
    op!(1, "kil", Implicit, UNDOC), // f2
    op!(2, "isc", IndirectY, UNDOC), // f3
    op!(2, "nop", ZeroPageX, UNDOC), // f4
    op!(2, "sbc", ZeroPageX), // f5
    op!(2, "inc", ZeroPageX), // f6
    op!(2, "isc", ZeroPageX, UNDOC), // f7
    op!(1, "sed", Implicit), // f8
    op!(3, "sbc", AbsoluteY), // f9
    op!(1, "nop", Implicit, UNDOC), // fa
    op!(3, "isc", AbsoluteY, UNDOC), // fb
    op!(3, "nop", AbsoluteX, UNDOC), // fc
    op!(3, "sbc", AbsoluteX), // fd
    op!(3, "inc", AbsoluteX), // fe
    op!(3, "isc", AbsoluteX, UNDOC), // ff
];

// Base cycle cost per opcode. 0 marks a slot with no real instruction.
pub const CYCLES: [u8; 256] = [
    7, 6, 0, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 0, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 0, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6,
    2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 0, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6,
    2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4,
    2, 6, 0, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5,
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4,
    2, 5, 0, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 3, 6,
    2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
];

// Extra cycles charged under a runtime condition: 1 for a page crossing,
// 2 for a taken branch (plus a page crossing).
pub const EXTRA_CYCLES: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0,
];

pub const STATUS_HEADER: &str = "N,V,-,B,D,I,Z,C";
pub const STATUS_EMPTY: &str = ",,,,,,,";

// Status register effects per mnemonic, one column per status bit
// ---------------------------------
//   7 | 6 | 5 | 4 | 3 | 2 | 1 | 0
//   N | V |   | B | D | I | Z | C
// A letter means the flag is written, 0/1 means it is forced.
pub const STATUS: &[(&str, &str)] = &[
    ("ADC", "N,V, , , , ,Z,C"),
    ("AND", "N, , , , , ,Z, "),
    ("ASL", "N, , , , , ,Z,C"),
    ("BIT", "N,V, , , , ,Z, "),
    ("BRK", " , , ,1, ,1, , "),
    ("CLC", " , , , , , , ,0"),
    ("CLD", " , , , ,0, , , "),
    ("CLI", " , , , , ,0, , "),
    ("CLV", " ,0, , , , , , "),
    ("CMP", "N, , , , , ,Z,C"),
    ("CPX", "N, , , , , ,Z,C"),
    ("CPY", "N, , , , , ,Z,C"),
    ("DEC", "N, , , , , ,Z, "),
    ("DEX", "N, , , , , ,Z, "),
    ("DEY", "N, , , , , ,Z, "),
    ("EOR", "N, , , , , ,Z, "),
    ("INC", "N, , , , , ,Z, "),
    ("INX", "N, , , , , ,Z, "),
    ("INY", "N, , , , , ,Z, "),
    ("JMP", " , , , , , , , "),
    ("JSR", " , , , , , , , "),
    ("LDA", "N, , , , , ,Z, "),
    ("LDX", "N, , , , , ,Z, "),
    ("LDY", "N, , , , , ,Z, "),
    ("LSR", "N, , , , , ,Z,C"),
    ("NOP", " , , , , , , , "),
    ("ORA", "N, , , , , ,Z, "),
    ("PHA", " , , , , , , , "),
    ("PHP", " , , , , , , , "),
    ("PLA", "N, , , , , ,Z, "),
    ("PLP", "N,V, , ,D,I,Z,C"),
    ("ROL", "N, , , , , ,Z,C"),
    ("ROR", "N, , , , , ,Z,C"),
    ("RTI", "N,V, , ,D,I,Z,C"),
    ("RTS", " , , , , , , , "),
    ("SBC", "N,V, , , , ,Z,C"),
    ("SEC", " , , , , , , ,1"),
    ("SED", " , , , ,1, , , "),
    ("SEI", " , , , , ,1, , "),
    ("STA", " , , , , , , , "),
    ("STX", " , , , , , , , "),
    ("STY", " , , , , , , , "),
    ("TAX", "N, , , , , ,Z, "),
    ("TAY", "N, , , , , ,Z, "),
    ("TSX", "N, , , , , ,Z, "),
    ("TXA", "N, , , , , ,Z, "),
    ("TXS", " , , , , , , , "),
    ("TYA", "N, , , , , ,Z, "),
    // Undocumented
    ("AHX", " , , , , , , , "),
    ("ALR", "N, , , , , ,Z,C"),
    ("ANC", "N, , , , , ,Z,C"),
    ("ARR", "N,V, , , , ,Z,C"),
    ("AXS", "N, , , , , ,Z,C"),
    ("DCP", "N, , , , , ,Z,C"),
    ("ISC", "N,V, , , , ,Z,C"),
    ("LAS", "N, , , , , ,Z, "),
    ("LAX", "N, , , , , ,Z, "),
    ("RLA", "N, , , , , ,Z,C"),
    ("RRA", "N,V, , , , ,Z,C"),
    ("SAX", " , , , , , , , "),
    ("SHX", " , , , , , , , "),
    ("SHY", " , , , , , , , "),
    ("SLO", "N, , , , , ,Z,C"),
    ("SRE", "N, , , , , ,Z,C"),
    ("TAS", " , , , , , , , "),
    ("XAA", "N, , , , , ,Z, "),
];
