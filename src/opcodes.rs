//! # Opcode Table
//!
//! The 256-entry decode table mapping every opcode byte to its mnemonic,
//! operation kind and addressing mode. The table is the single source of
//! truth for decoding: instruction sizes are derived from the addressing
//! mode, and undefined opcodes are `None`.
//!
//! Keeping the table as a fixed array (rather than a hash map) makes the
//! lookup a plain index and makes double assignment of an opcode impossible
//! to miss: the later assignment would simply overwrite the earlier one in
//! the same `const` initializer, which the table test guards against by
//! checking known entries.

use crate::addressing::AddressingMode;

/// Operation kind, independent of addressing mode.
///
/// One opcode table entry pairs an `Operation` with an [`AddressingMode`];
/// the execution stage dispatches on the operation while the operand
/// abstraction hides whether the target is the accumulator or a memory cell.
///
/// The bit-oriented W65C02S instructions carry their bit number in the
/// variant, collapsing eight near-identical opcodes into one operation each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc,
    And,
    Asl,
    /// Branch if bit `n` of a zero-page cell is clear.
    Bbr(u8),
    /// Branch if bit `n` of a zero-page cell is set.
    Bbs(u8),
    Bcc,
    Bcs,
    Beq,
    Bit,
    /// BIT with an immediate operand updates only the Z flag.
    BitImmediate,
    Bmi,
    Bne,
    Bpl,
    Bra,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    /// Debug trap: enters the monitor when debug mode is enabled.
    Dbg,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Phx,
    Phy,
    Pla,
    Plp,
    Plx,
    Ply,
    /// Reset (clear) bit `n` of a zero-page cell.
    Rmb(u8),
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    /// Set bit `n` of a zero-page cell.
    Smb(u8),
    Sta,
    Stp,
    Stx,
    Sty,
    Stz,
    Tax,
    Tay,
    Trb,
    Tsb,
    Tsx,
    Txa,
    Txs,
    Tya,
}

/// One decoded opcode: mnemonic, operation kind, addressing mode and encoded
/// instruction length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Datasheet mnemonic, e.g. `"LDA"` or `"BBR3"`.
    pub mnemonic: &'static str,
    /// Operation kind dispatched by the execute stage.
    pub operation: Operation,
    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,
    /// Total encoded length including the opcode byte (1..=3).
    pub size: u8,
}

const fn entry(
    mnemonic: &'static str,
    operation: Operation,
    mode: AddressingMode,
) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        mnemonic,
        operation,
        mode,
        size: mode.encoded_length(),
    })
}

/// The decode table, indexed by opcode byte. Undefined opcodes are `None`.
///
/// # Examples
///
/// ```
/// use w65c02::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda = OPCODE_TABLE[0xA9].expect("LDA immediate is defined");
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.operation, Operation::Lda);
/// assert_eq!(lda.mode, AddressingMode::Immediate);
/// assert_eq!(lda.size, 2);
///
/// assert!(OPCODE_TABLE[0x03].is_none());
/// ```
pub const OPCODE_TABLE: [Option<OpcodeEntry>; 256] = build_table();

#[rustfmt::skip]
const fn build_table() -> [Option<OpcodeEntry>; 256] {
    use AddressingMode::*;
    use Operation as Op;

    let mut t: [Option<OpcodeEntry>; 256] = [None; 256];

    t[0x00] = entry("BRK", Op::Brk, Stack);
    t[0x01] = entry("ORA", Op::Ora, ZeroPageIndexedIndirect);
    t[0x02] = entry("DBG", Op::Dbg, Implied);
    t[0x04] = entry("TSB", Op::Tsb, ZeroPage);
    t[0x05] = entry("ORA", Op::Ora, ZeroPage);
    t[0x06] = entry("ASL", Op::Asl, ZeroPage);
    t[0x07] = entry("RMB0", Op::Rmb(0), ZeroPage);
    t[0x08] = entry("PHP", Op::Php, Stack);
    t[0x09] = entry("ORA", Op::Ora, Immediate);
    t[0x0A] = entry("ASL", Op::Asl, Accumulator);
    t[0x0C] = entry("TSB", Op::Tsb, Absolute);
    t[0x0D] = entry("ORA", Op::Ora, Absolute);
    t[0x0E] = entry("ASL", Op::Asl, Absolute);
    t[0x0F] = entry("BBR0", Op::Bbr(0), ZeroPageRelative);

    t[0x10] = entry("BPL", Op::Bpl, PCRelative);
    t[0x11] = entry("ORA", Op::Ora, ZeroPageIndirectIndexedY);
    t[0x12] = entry("ORA", Op::Ora, ZeroPage);
    t[0x14] = entry("TRB", Op::Trb, ZeroPage);
    t[0x15] = entry("ORA", Op::Ora, ZeroPageIndexedX);
    t[0x16] = entry("ASL", Op::Asl, ZeroPageIndexedX);
    t[0x17] = entry("RMB1", Op::Rmb(1), ZeroPage);
    t[0x18] = entry("CLC", Op::Clc, Implied);
    t[0x19] = entry("ORA", Op::Ora, AbsoluteIndexedY);
    t[0x1A] = entry("INC", Op::Inc, Accumulator);
    t[0x1C] = entry("TRB", Op::Trb, Absolute);
    t[0x1D] = entry("ORA", Op::Ora, AbsoluteIndexedX);
    t[0x1E] = entry("ASL", Op::Asl, AbsoluteIndexedX);
    t[0x1F] = entry("BBR1", Op::Bbr(1), ZeroPageRelative);

    t[0x20] = entry("JSR", Op::Jsr, Absolute);
    t[0x21] = entry("AND", Op::And, ZeroPageIndexedIndirect);
    t[0x24] = entry("BIT", Op::Bit, ZeroPage);
    t[0x25] = entry("AND", Op::And, ZeroPage);
    t[0x26] = entry("ROL", Op::Rol, ZeroPage);
    t[0x27] = entry("RMB2", Op::Rmb(2), ZeroPage);
    t[0x28] = entry("PLP", Op::Plp, Stack);
    t[0x29] = entry("AND", Op::And, Immediate);
    t[0x2A] = entry("ROL", Op::Rol, Accumulator);
    t[0x2C] = entry("BIT", Op::Bit, Absolute);
    t[0x2D] = entry("AND", Op::And, Absolute);
    t[0x2E] = entry("ROL", Op::Rol, Absolute);
    t[0x2F] = entry("BBR2", Op::Bbr(2), ZeroPageRelative);

    t[0x30] = entry("BMI", Op::Bmi, PCRelative);
    t[0x31] = entry("AND", Op::And, ZeroPageIndirectIndexedY);
    t[0x32] = entry("AND", Op::And, ZeroPage);
    t[0x34] = entry("BIT", Op::Bit, ZeroPageIndexedX);
    t[0x35] = entry("AND", Op::And, ZeroPageIndexedX);
    t[0x36] = entry("ROL", Op::Rol, ZeroPageIndexedX);
    t[0x37] = entry("RMB3", Op::Rmb(3), ZeroPage);
    t[0x38] = entry("SEC", Op::Sec, Implied);
    t[0x39] = entry("AND", Op::And, AbsoluteIndexedY);
    t[0x3A] = entry("DEC", Op::Dec, Accumulator);
    t[0x3C] = entry("BIT", Op::Bit, AbsoluteIndexedX);
    t[0x3D] = entry("AND", Op::And, AbsoluteIndexedX);
    t[0x3E] = entry("ROL", Op::Rol, AbsoluteIndexedX);
    t[0x3F] = entry("BBR3", Op::Bbr(3), ZeroPageRelative);

    t[0x40] = entry("RTI", Op::Rti, Stack);
    t[0x41] = entry("EOR", Op::Eor, ZeroPageIndexedIndirect);
    t[0x45] = entry("EOR", Op::Eor, ZeroPage);
    t[0x46] = entry("LSR", Op::Lsr, ZeroPage);
    t[0x47] = entry("RMB4", Op::Rmb(4), ZeroPage);
    t[0x48] = entry("PHA", Op::Pha, Stack);
    t[0x49] = entry("EOR", Op::Eor, Immediate);
    t[0x4A] = entry("LSR", Op::Lsr, Accumulator);
    t[0x4C] = entry("JMP", Op::Jmp, Absolute);
    t[0x4D] = entry("EOR", Op::Eor, Absolute);
    t[0x4E] = entry("LSR", Op::Lsr, Absolute);
    t[0x4F] = entry("BBR4", Op::Bbr(4), ZeroPageRelative);

    t[0x50] = entry("BVC", Op::Bvc, PCRelative);
    t[0x51] = entry("EOR", Op::Eor, ZeroPageIndirectIndexedY);
    t[0x52] = entry("EOR", Op::Eor, ZeroPage);
    t[0x55] = entry("EOR", Op::Eor, ZeroPageIndexedX);
    t[0x56] = entry("LSR", Op::Lsr, ZeroPageIndexedX);
    t[0x57] = entry("RMB5", Op::Rmb(5), ZeroPage);
    t[0x58] = entry("CLI", Op::Cli, Implied);
    t[0x59] = entry("EOR", Op::Eor, AbsoluteIndexedY);
    t[0x5A] = entry("PHY", Op::Phy, Stack);
    t[0x5D] = entry("EOR", Op::Eor, AbsoluteIndexedX);
    t[0x5E] = entry("LSR", Op::Lsr, AbsoluteIndexedX);
    t[0x5F] = entry("BBR5", Op::Bbr(5), ZeroPageRelative);

    t[0x60] = entry("RTS", Op::Rts, Stack);
    t[0x61] = entry("ADC", Op::Adc, ZeroPageIndexedIndirect);
    t[0x64] = entry("STZ", Op::Stz, ZeroPage);
    t[0x65] = entry("ADC", Op::Adc, ZeroPage);
    t[0x66] = entry("ROR", Op::Ror, ZeroPage);
    t[0x67] = entry("RMB6", Op::Rmb(6), ZeroPage);
    t[0x68] = entry("PLA", Op::Pla, Stack);
    t[0x69] = entry("ADC", Op::Adc, Immediate);
    t[0x6A] = entry("ROR", Op::Ror, Accumulator);
    t[0x6C] = entry("JMP", Op::Jmp, AbsoluteIndirect);
    t[0x6D] = entry("ADC", Op::Adc, Absolute);
    t[0x6E] = entry("ROR", Op::Ror, Absolute);
    t[0x6F] = entry("BBR6", Op::Bbr(6), ZeroPageRelative);

    t[0x70] = entry("BVS", Op::Bvs, PCRelative);
    t[0x71] = entry("ADC", Op::Adc, ZeroPageIndirectIndexedY);
    t[0x72] = entry("ADC", Op::Adc, ZeroPage);
    t[0x74] = entry("STZ", Op::Stz, ZeroPageIndexedX);
    t[0x75] = entry("ADC", Op::Adc, ZeroPageIndexedX);
    t[0x76] = entry("ROR", Op::Ror, ZeroPageIndexedX);
    t[0x77] = entry("RMB7", Op::Rmb(7), ZeroPage);
    t[0x78] = entry("SEI", Op::Sei, Implied);
    t[0x79] = entry("ADC", Op::Adc, AbsoluteIndexedY);
    t[0x7A] = entry("PLY", Op::Ply, Stack);
    t[0x7C] = entry("JMP", Op::Jmp, AbsoluteIndexedIndirect);
    t[0x7D] = entry("ADC", Op::Adc, AbsoluteIndexedX);
    t[0x7E] = entry("ROR", Op::Ror, AbsoluteIndexedX);
    t[0x7F] = entry("BBR7", Op::Bbr(7), ZeroPageRelative);

    t[0x80] = entry("BRA", Op::Bra, PCRelative);
    t[0x81] = entry("STA", Op::Sta, ZeroPageIndexedIndirect);
    t[0x84] = entry("STY", Op::Sty, ZeroPage);
    t[0x85] = entry("STA", Op::Sta, ZeroPage);
    t[0x86] = entry("STX", Op::Stx, ZeroPage);
    t[0x87] = entry("SMB0", Op::Smb(0), ZeroPage);
    t[0x88] = entry("DEY", Op::Dey, Implied);
    t[0x89] = entry("BIT", Op::BitImmediate, Immediate);
    t[0x8A] = entry("TXA", Op::Txa, Implied);
    t[0x8C] = entry("STY", Op::Sty, Absolute);
    t[0x8D] = entry("STA", Op::Sta, Absolute);
    t[0x8E] = entry("STX", Op::Stx, Absolute);
    t[0x8F] = entry("BBS0", Op::Bbs(0), ZeroPageRelative);

    t[0x90] = entry("BCC", Op::Bcc, PCRelative);
    t[0x91] = entry("STA", Op::Sta, ZeroPageIndirectIndexedY);
    t[0x92] = entry("STA", Op::Sta, ZeroPage);
    t[0x94] = entry("STY", Op::Sty, ZeroPageIndexedX);
    t[0x95] = entry("STA", Op::Sta, ZeroPageIndexedX);
    t[0x96] = entry("STX", Op::Stx, ZeroPageIndexedY);
    t[0x97] = entry("SMB1", Op::Smb(1), ZeroPage);
    t[0x98] = entry("TYA", Op::Tya, Implied);
    t[0x99] = entry("STA", Op::Sta, AbsoluteIndexedY);
    t[0x9A] = entry("TXS", Op::Txs, Implied);
    t[0x9C] = entry("STZ", Op::Stz, Absolute);
    t[0x9D] = entry("STA", Op::Sta, AbsoluteIndexedX);
    t[0x9E] = entry("STZ", Op::Stz, AbsoluteIndexedX);
    t[0x9F] = entry("BBS1", Op::Bbs(1), ZeroPageRelative);

    t[0xA0] = entry("LDY", Op::Ldy, Immediate);
    t[0xA1] = entry("LDA", Op::Lda, ZeroPageIndexedIndirect);
    t[0xA2] = entry("LDX", Op::Ldx, Immediate);
    t[0xA4] = entry("LDY", Op::Ldy, ZeroPage);
    t[0xA5] = entry("LDA", Op::Lda, ZeroPage);
    t[0xA6] = entry("LDX", Op::Ldx, ZeroPage);
    t[0xA7] = entry("SMB2", Op::Smb(2), ZeroPage);
    t[0xA8] = entry("TAY", Op::Tay, Implied);
    t[0xA9] = entry("LDA", Op::Lda, Immediate);
    t[0xAA] = entry("TAX", Op::Tax, Implied);
    t[0xAC] = entry("LDY", Op::Ldy, Absolute);
    t[0xAD] = entry("LDA", Op::Lda, Absolute);
    t[0xAE] = entry("LDX", Op::Ldx, Absolute);
    t[0xAF] = entry("BBS2", Op::Bbs(2), ZeroPageRelative);

    t[0xB0] = entry("BCS", Op::Bcs, PCRelative);
    t[0xB1] = entry("LDA", Op::Lda, ZeroPageIndirectIndexedY);
    t[0xB2] = entry("LDA", Op::Lda, ZeroPage);
    t[0xB4] = entry("LDY", Op::Ldy, ZeroPageIndexedX);
    t[0xB5] = entry("LDA", Op::Lda, ZeroPageIndexedX);
    t[0xB6] = entry("LDX", Op::Ldx, ZeroPageIndexedY);
    t[0xB7] = entry("SMB3", Op::Smb(3), ZeroPage);
    t[0xB8] = entry("CLV", Op::Clv, Implied);
    t[0xB9] = entry("LDA", Op::Lda, AbsoluteIndexedY);
    t[0xBA] = entry("TSX", Op::Tsx, Implied);
    t[0xBC] = entry("LDY", Op::Ldy, AbsoluteIndexedX);
    t[0xBD] = entry("LDA", Op::Lda, AbsoluteIndexedX);
    t[0xBE] = entry("LDX", Op::Ldx, AbsoluteIndexedY);
    t[0xBF] = entry("BBS3", Op::Bbs(3), ZeroPageRelative);

    t[0xC0] = entry("CPY", Op::Cpy, Immediate);
    t[0xC1] = entry("CMP", Op::Cmp, ZeroPageIndexedIndirect);
    t[0xC4] = entry("CPY", Op::Cpy, ZeroPage);
    t[0xC5] = entry("CMP", Op::Cmp, ZeroPage);
    t[0xC6] = entry("DEC", Op::Dec, ZeroPage);
    t[0xC7] = entry("SMB4", Op::Smb(4), ZeroPage);
    t[0xC8] = entry("INY", Op::Iny, Implied);
    t[0xC9] = entry("CMP", Op::Cmp, Immediate);
    t[0xCA] = entry("DEX", Op::Dex, Implied);
    t[0xCC] = entry("CPY", Op::Cpy, Absolute);
    t[0xCD] = entry("CMP", Op::Cmp, Absolute);
    t[0xCE] = entry("DEC", Op::Dec, Absolute);
    t[0xCF] = entry("BBS4", Op::Bbs(4), ZeroPageRelative);

    t[0xD0] = entry("BNE", Op::Bne, PCRelative);
    t[0xD1] = entry("CMP", Op::Cmp, ZeroPageIndirectIndexedY);
    t[0xD2] = entry("CMP", Op::Cmp, ZeroPageIndirect);
    t[0xD5] = entry("CMP", Op::Cmp, ZeroPageIndexedX);
    t[0xD6] = entry("DEC", Op::Dec, ZeroPageIndexedX);
    t[0xD7] = entry("SMB5", Op::Smb(5), ZeroPage);
    t[0xD8] = entry("CLD", Op::Cld, Implied);
    t[0xD9] = entry("CMP", Op::Cmp, AbsoluteIndexedY);
    t[0xDA] = entry("PHX", Op::Phx, Stack);
    t[0xDB] = entry("STP", Op::Stp, Implied);
    t[0xDD] = entry("CMP", Op::Cmp, AbsoluteIndexedX);
    t[0xDE] = entry("DEC", Op::Dec, AbsoluteIndexedX);
    t[0xDF] = entry("BBS5", Op::Bbs(5), ZeroPageRelative);

    t[0xE0] = entry("CPX", Op::Cpx, Immediate);
    t[0xE1] = entry("SBC", Op::Sbc, ZeroPageIndexedIndirect);
    t[0xE4] = entry("CPX", Op::Cpx, ZeroPage);
    t[0xE5] = entry("SBC", Op::Sbc, ZeroPage);
    t[0xE6] = entry("INC", Op::Inc, ZeroPage);
    t[0xE7] = entry("SMB6", Op::Smb(6), ZeroPage);
    t[0xE8] = entry("INX", Op::Inx, Implied);
    t[0xE9] = entry("SBC", Op::Sbc, Immediate);
    t[0xEA] = entry("NOP", Op::Nop, Implied);
    t[0xEC] = entry("CPX", Op::Cpx, Absolute);
    t[0xED] = entry("SBC", Op::Sbc, Absolute);
    t[0xEE] = entry("INC", Op::Inc, Absolute);
    t[0xEF] = entry("BBS6", Op::Bbs(6), ZeroPageRelative);

    t[0xF0] = entry("BEQ", Op::Beq, PCRelative);
    t[0xF1] = entry("SBC", Op::Sbc, ZeroPageIndirectIndexedY);
    t[0xF2] = entry("SBC", Op::Sbc, ZeroPageIndirect);
    t[0xF5] = entry("SBC", Op::Sbc, ZeroPageIndexedX);
    t[0xF6] = entry("INC", Op::Inc, ZeroPageIndexedX);
    t[0xF7] = entry("SMB7", Op::Smb(7), ZeroPage);
    t[0xF8] = entry("SED", Op::Sed, Implied);
    t[0xF9] = entry("SBC", Op::Sbc, AbsoluteIndexedY);
    t[0xFA] = entry("PLX", Op::Plx, Stack);
    t[0xFD] = entry("SBC", Op::Sbc, AbsoluteIndexedX);
    t[0xFE] = entry("INC", Op::Inc, AbsoluteIndexedX);
    t[0xFF] = entry("BBS7", Op::Bbs(7), ZeroPageRelative);

    t
}
