use super::{AddrMode, Op};

/// One row of the opcode matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub name: &'static str,
    pub op: Op,
    pub mode: AddrMode,
    pub cycles: u8,
    pub undocumented: bool,
}

impl Instruction {
    /// Total length including the opcode byte.
    pub const fn len(&self) -> u16 {
        self.mode.len()
    }

    pub const fn is_illegal(&self) -> bool {
        self.undocumented
    }
}

const fn ins(name: &'static str, op: Op, mode: AddrMode, cycles: u8) -> Instruction {
    Instruction {
        name,
        op,
        mode,
        cycles,
        undocumented: false,
    }
}

const fn ill(name: &'static str, op: Op, mode: AddrMode, cycles: u8) -> Instruction {
    Instruction {
        name,
        op,
        mode,
        cycles,
        undocumented: true,
    }
}

pub fn lookup(opcode: u8) -> &'static Instruction {
    &OPCODES[opcode as usize]
}

// Undocumented opcodes keep their usual names behind a '*' and their real
// operand lengths so that execution and disassembly step over them alike.
pub static OPCODES: [Instruction; 256] = [
    // 0x00
    ins("BRK", Op::Brk, AddrMode::Imm, 7),
    ins("ORA", Op::Ora, AddrMode::Izx, 6),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*SLO", Op::Xxx, AddrMode::Izx, 7),
    ill("*NOP", Op::Nop, AddrMode::Zp0, 3),
    ins("ORA", Op::Ora, AddrMode::Zp0, 3),
    ins("ASL", Op::Asl, AddrMode::Zp0, 5),
    ill("*SLO", Op::Xxx, AddrMode::Zp0, 5),
    ins("PHP", Op::Php, AddrMode::Imp, 3),
    ins("ORA", Op::Ora, AddrMode::Imm, 2),
    ins("ASL", Op::Asl, AddrMode::Imp, 2),
    ill("*ANC", Op::Xxx, AddrMode::Imm, 2),
    ill("*NOP", Op::Nop, AddrMode::Abs, 4),
    ins("ORA", Op::Ora, AddrMode::Abs, 4),
    ins("ASL", Op::Asl, AddrMode::Abs, 6),
    ill("*SLO", Op::Xxx, AddrMode::Abs, 6),
    // 0x10
    ins("BPL", Op::Bpl, AddrMode::Rel, 2),
    ins("ORA", Op::Ora, AddrMode::Izy, 5),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*SLO", Op::Xxx, AddrMode::Izy, 7),
    ill("*NOP", Op::Nop, AddrMode::Zpx, 4),
    ins("ORA", Op::Ora, AddrMode::Zpx, 4),
    ins("ASL", Op::Asl, AddrMode::Zpx, 6),
    ill("*SLO", Op::Xxx, AddrMode::Zpx, 6),
    ins("CLC", Op::Clc, AddrMode::Imp, 2),
    ins("ORA", Op::Ora, AddrMode::Aby, 4),
    ill("*NOP", Op::Nop, AddrMode::Imp, 2),
    ill("*SLO", Op::Xxx, AddrMode::Aby, 7),
    ill("*NOP", Op::Nop, AddrMode::Abx, 4),
    ins("ORA", Op::Ora, AddrMode::Abx, 4),
    ins("ASL", Op::Asl, AddrMode::Abx, 7),
    ill("*SLO", Op::Xxx, AddrMode::Abx, 7),
    // 0x20
    ins("JSR", Op::Jsr, AddrMode::Abs, 6),
    ins("AND", Op::And, AddrMode::Izx, 6),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*RLA", Op::Xxx, AddrMode::Izx, 7),
    ins("BIT", Op::Bit, AddrMode::Zp0, 3),
    ins("AND", Op::And, AddrMode::Zp0, 3),
    ins("ROL", Op::Rol, AddrMode::Zp0, 5),
    ill("*RLA", Op::Xxx, AddrMode::Zp0, 5),
    ins("PLP", Op::Plp, AddrMode::Imp, 4),
    ins("AND", Op::And, AddrMode::Imm, 2),
    ins("ROL", Op::Rol, AddrMode::Imp, 2),
    ill("*ANC", Op::Xxx, AddrMode::Imm, 2),
    ins("BIT", Op::Bit, AddrMode::Abs, 4),
    ins("AND", Op::And, AddrMode::Abs, 4),
    ins("ROL", Op::Rol, AddrMode::Abs, 6),
    ill("*RLA", Op::Xxx, AddrMode::Abs, 6),
    // 0x30
    ins("BMI", Op::Bmi, AddrMode::Rel, 2),
    ins("AND", Op::And, AddrMode::Izy, 5),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*RLA", Op::Xxx, AddrMode::Izy, 7),
    ill("*NOP", Op::Nop, AddrMode::Zpx, 4),
    ins("AND", Op::And, AddrMode::Zpx, 4),
    ins("ROL", Op::Rol, AddrMode::Zpx, 6),
    ill("*RLA", Op::Xxx, AddrMode::Zpx, 6),
    ins("SEC", Op::Sec, AddrMode::Imp, 2),
    ins("AND", Op::And, AddrMode::Aby, 4),
    ill("*NOP", Op::Nop, AddrMode::Imp, 2),
    ill("*RLA", Op::Xxx, AddrMode::Aby, 7),
    ill("*NOP", Op::Nop, AddrMode::Abx, 4),
    ins("AND", Op::And, AddrMode::Abx, 4),
    ins("ROL", Op::Rol, AddrMode::Abx, 7),
    ill("*RLA", Op::Xxx, AddrMode::Abx, 7),
    // 0x40
    ins("RTI", Op::Rti, AddrMode::Imp, 6),
    ins("EOR", Op::Eor, AddrMode::Izx, 6),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*SRE", Op::Xxx, AddrMode::Izx, 7),
    ill("*NOP", Op::Nop, AddrMode::Zp0, 3),
    ins("EOR", Op::Eor, AddrMode::Zp0, 3),
    ins("LSR", Op::Lsr, AddrMode::Zp0, 5),
    ill("*SRE", Op::Xxx, AddrMode::Zp0, 5),
    ins("PHA", Op::Pha, AddrMode::Imp, 3),
    ins("EOR", Op::Eor, AddrMode::Imm, 2),
    ins("LSR", Op::Lsr, AddrMode::Imp, 2),
    ill("*ALR", Op::Xxx, AddrMode::Imm, 2),
    ins("JMP", Op::Jmp, AddrMode::Abs, 3),
    ins("EOR", Op::Eor, AddrMode::Abs, 4),
    ins("LSR", Op::Lsr, AddrMode::Abs, 6),
    ill("*SRE", Op::Xxx, AddrMode::Abs, 6),
    // 0x50
    ins("BVC", Op::Bvc, AddrMode::Rel, 2),
    ins("EOR", Op::Eor, AddrMode::Izy, 5),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*SRE", Op::Xxx, AddrMode::Izy, 7),
    ill("*NOP", Op::Nop, AddrMode::Zpx, 4),
    ins("EOR", Op::Eor, AddrMode::Zpx, 4),
    ins("LSR", Op::Lsr, AddrMode::Zpx, 6),
    ill("*SRE", Op::Xxx, AddrMode::Zpx, 6),
    ins("CLI", Op::Cli, AddrMode::Imp, 2),
    ins("EOR", Op::Eor, AddrMode::Aby, 4),
    ill("*NOP", Op::Nop, AddrMode::Imp, 2),
    ill("*SRE", Op::Xxx, AddrMode::Aby, 7),
    ill("*NOP", Op::Nop, AddrMode::Abx, 4),
    ins("EOR", Op::Eor, AddrMode::Abx, 4),
    ins("LSR", Op::Lsr, AddrMode::Abx, 7),
    ill("*SRE", Op::Xxx, AddrMode::Abx, 7),
    // 0x60
    ins("RTS", Op::Rts, AddrMode::Imp, 6),
    ins("ADC", Op::Adc, AddrMode::Izx, 6),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*RRA", Op::Xxx, AddrMode::Izx, 7),
    ill("*NOP", Op::Nop, AddrMode::Zp0, 3),
    ins("ADC", Op::Adc, AddrMode::Zp0, 3),
    ins("ROR", Op::Ror, AddrMode::Zp0, 5),
    ill("*RRA", Op::Xxx, AddrMode::Zp0, 5),
    ins("PLA", Op::Pla, AddrMode::Imp, 4),
    ins("ADC", Op::Adc, AddrMode::Imm, 2),
    ins("ROR", Op::Ror, AddrMode::Imp, 2),
    ill("*ARR", Op::Xxx, AddrMode::Imm, 2),
    ins("JMP", Op::Jmp, AddrMode::Ind, 5),
    ins("ADC", Op::Adc, AddrMode::Abs, 4),
    ins("ROR", Op::Ror, AddrMode::Abs, 6),
    ill("*RRA", Op::Xxx, AddrMode::Abs, 6),
    // 0x70
    ins("BVS", Op::Bvs, AddrMode::Rel, 2),
    ins("ADC", Op::Adc, AddrMode::Izy, 5),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*RRA", Op::Xxx, AddrMode::Izy, 7),
    ill("*NOP", Op::Nop, AddrMode::Zpx, 4),
    ins("ADC", Op::Adc, AddrMode::Zpx, 4),
    ins("ROR", Op::Ror, AddrMode::Zpx, 6),
    ill("*RRA", Op::Xxx, AddrMode::Zpx, 6),
    ins("SEI", Op::Sei, AddrMode::Imp, 2),
    ins("ADC", Op::Adc, AddrMode::Aby, 4),
    ill("*NOP", Op::Nop, AddrMode::Imp, 2),
    ill("*RRA", Op::Xxx, AddrMode::Aby, 7),
    ill("*NOP", Op::Nop, AddrMode::Abx, 4),
    ins("ADC", Op::Adc, AddrMode::Abx, 4),
    ins("ROR", Op::Ror, AddrMode::Abx, 7),
    ill("*RRA", Op::Xxx, AddrMode::Abx, 7),
    // 0x80
    ill("*NOP", Op::Nop, AddrMode::Imm, 2),
    ins("STA", Op::Sta, AddrMode::Izx, 6),
    ill("*NOP", Op::Nop, AddrMode::Imm, 2),
    ill("*SAX", Op::Xxx, AddrMode::Izx, 6),
    ins("STY", Op::Sty, AddrMode::Zp0, 3),
    ins("STA", Op::Sta, AddrMode::Zp0, 3),
    ins("STX", Op::Stx, AddrMode::Zp0, 3),
    ill("*SAX", Op::Xxx, AddrMode::Zp0, 3),
    ins("DEY", Op::Dey, AddrMode::Imp, 2),
    ill("*NOP", Op::Nop, AddrMode::Imm, 2),
    ins("TXA", Op::Txa, AddrMode::Imp, 2),
    ill("*XAA", Op::Xxx, AddrMode::Imm, 2),
    ins("STY", Op::Sty, AddrMode::Abs, 4),
    ins("STA", Op::Sta, AddrMode::Abs, 4),
    ins("STX", Op::Stx, AddrMode::Abs, 4),
    ill("*SAX", Op::Xxx, AddrMode::Abs, 4),
    // 0x90
    ins("BCC", Op::Bcc, AddrMode::Rel, 2),
    ins("STA", Op::Sta, AddrMode::Izy, 6),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*SHA", Op::Xxx, AddrMode::Izy, 6),
    ins("STY", Op::Sty, AddrMode::Zpx, 4),
    ins("STA", Op::Sta, AddrMode::Zpx, 4),
    ins("STX", Op::Stx, AddrMode::Zpy, 4),
    ill("*SAX", Op::Xxx, AddrMode::Zpy, 4),
    ins("TYA", Op::Tya, AddrMode::Imp, 2),
    ins("STA", Op::Sta, AddrMode::Aby, 5),
    ins("TXS", Op::Txs, AddrMode::Imp, 2),
    ill("*TAS", Op::Xxx, AddrMode::Aby, 5),
    ill("*SHY", Op::Xxx, AddrMode::Abx, 5),
    ins("STA", Op::Sta, AddrMode::Abx, 5),
    ill("*SHX", Op::Xxx, AddrMode::Aby, 5),
    ill("*SHA", Op::Xxx, AddrMode::Aby, 5),
    // 0xA0
    ins("LDY", Op::Ldy, AddrMode::Imm, 2),
    ins("LDA", Op::Lda, AddrMode::Izx, 6),
    ins("LDX", Op::Ldx, AddrMode::Imm, 2),
    ill("*LAX", Op::Xxx, AddrMode::Izx, 6),
    ins("LDY", Op::Ldy, AddrMode::Zp0, 3),
    ins("LDA", Op::Lda, AddrMode::Zp0, 3),
    ins("LDX", Op::Ldx, AddrMode::Zp0, 3),
    ill("*LAX", Op::Xxx, AddrMode::Zp0, 3),
    ins("TAY", Op::Tay, AddrMode::Imp, 2),
    ins("LDA", Op::Lda, AddrMode::Imm, 2),
    ins("TAX", Op::Tax, AddrMode::Imp, 2),
    ill("*LAX", Op::Xxx, AddrMode::Imm, 2),
    ins("LDY", Op::Ldy, AddrMode::Abs, 4),
    ins("LDA", Op::Lda, AddrMode::Abs, 4),
    ins("LDX", Op::Ldx, AddrMode::Abs, 4),
    ill("*LAX", Op::Xxx, AddrMode::Abs, 4),
    // 0xB0
    ins("BCS", Op::Bcs, AddrMode::Rel, 2),
    ins("LDA", Op::Lda, AddrMode::Izy, 5),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*LAX", Op::Xxx, AddrMode::Izy, 5),
    ins("LDY", Op::Ldy, AddrMode::Zpx, 4),
    ins("LDA", Op::Lda, AddrMode::Zpx, 4),
    ins("LDX", Op::Ldx, AddrMode::Zpy, 4),
    ill("*LAX", Op::Xxx, AddrMode::Zpy, 4),
    ins("CLV", Op::Clv, AddrMode::Imp, 2),
    ins("LDA", Op::Lda, AddrMode::Aby, 4),
    ins("TSX", Op::Tsx, AddrMode::Imp, 2),
    ill("*LAS", Op::Xxx, AddrMode::Aby, 4),
    ins("LDY", Op::Ldy, AddrMode::Abx, 4),
    ins("LDA", Op::Lda, AddrMode::Abx, 4),
    ins("LDX", Op::Ldx, AddrMode::Aby, 4),
    ill("*LAX", Op::Xxx, AddrMode::Aby, 4),
    // 0xC0
    ins("CPY", Op::Cpy, AddrMode::Imm, 2),
    ins("CMP", Op::Cmp, AddrMode::Izx, 6),
    ill("*NOP", Op::Nop, AddrMode::Imm, 2),
    ill("*DCP", Op::Xxx, AddrMode::Izx, 7),
    ins("CPY", Op::Cpy, AddrMode::Zp0, 3),
    ins("CMP", Op::Cmp, AddrMode::Zp0, 3),
    ins("DEC", Op::Dec, AddrMode::Zp0, 5),
    ill("*DCP", Op::Xxx, AddrMode::Zp0, 5),
    ins("INY", Op::Iny, AddrMode::Imp, 2),
    ins("CMP", Op::Cmp, AddrMode::Imm, 2),
    ins("DEX", Op::Dex, AddrMode::Imp, 2),
    ill("*AXS", Op::Xxx, AddrMode::Imm, 2),
    ins("CPY", Op::Cpy, AddrMode::Abs, 4),
    ins("CMP", Op::Cmp, AddrMode::Abs, 4),
    ins("DEC", Op::Dec, AddrMode::Abs, 6),
    ill("*DCP", Op::Xxx, AddrMode::Abs, 6),
    // 0xD0
    ins("BNE", Op::Bne, AddrMode::Rel, 2),
    ins("CMP", Op::Cmp, AddrMode::Izy, 5),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*DCP", Op::Xxx, AddrMode::Izy, 7),
    ill("*NOP", Op::Nop, AddrMode::Zpx, 4),
    ins("CMP", Op::Cmp, AddrMode::Zpx, 4),
    ins("DEC", Op::Dec, AddrMode::Zpx, 6),
    ill("*DCP", Op::Xxx, AddrMode::Zpx, 6),
    ins("CLD", Op::Cld, AddrMode::Imp, 2),
    ins("CMP", Op::Cmp, AddrMode::Aby, 4),
    ill("*NOP", Op::Nop, AddrMode::Imp, 2),
    ill("*DCP", Op::Xxx, AddrMode::Aby, 7),
    ill("*NOP", Op::Nop, AddrMode::Abx, 4),
    ins("CMP", Op::Cmp, AddrMode::Abx, 4),
    ins("DEC", Op::Dec, AddrMode::Abx, 7),
    ill("*DCP", Op::Xxx, AddrMode::Abx, 7),
    // 0xE0
    ins("CPX", Op::Cpx, AddrMode::Imm, 2),
    ins("SBC", Op::Sbc, AddrMode::Izx, 6),
    ill("*NOP", Op::Nop, AddrMode::Imm, 2),
    ill("*ISC", Op::Xxx, AddrMode::Izx, 7),
    ins("CPX", Op::Cpx, AddrMode::Zp0, 3),
    ins("SBC", Op::Sbc, AddrMode::Zp0, 3),
    ins("INC", Op::Inc, AddrMode::Zp0, 5),
    ill("*ISC", Op::Xxx, AddrMode::Zp0, 5),
    ins("INX", Op::Inx, AddrMode::Imp, 2),
    ins("SBC", Op::Sbc, AddrMode::Imm, 2),
    ins("NOP", Op::Nop, AddrMode::Imp, 2),
    ill("*SBC", Op::Xxx, AddrMode::Imm, 2),
    ins("CPX", Op::Cpx, AddrMode::Abs, 4),
    ins("SBC", Op::Sbc, AddrMode::Abs, 4),
    ins("INC", Op::Inc, AddrMode::Abs, 6),
    ill("*ISC", Op::Xxx, AddrMode::Abs, 6),
    // 0xF0
    ins("BEQ", Op::Beq, AddrMode::Rel, 2),
    ins("SBC", Op::Sbc, AddrMode::Izy, 5),
    ill("*JAM", Op::Xxx, AddrMode::Imp, 2),
    ill("*ISC", Op::Xxx, AddrMode::Izy, 7),
    ill("*NOP", Op::Nop, AddrMode::Zpx, 4),
    ins("SBC", Op::Sbc, AddrMode::Zpx, 4),
    ins("INC", Op::Inc, AddrMode::Zpx, 6),
    ill("*ISC", Op::Xxx, AddrMode::Zpx, 6),
    ins("SED", Op::Sed, AddrMode::Imp, 2),
    ins("SBC", Op::Sbc, AddrMode::Aby, 4),
    ill("*NOP", Op::Nop, AddrMode::Imp, 2),
    ill("*ISC", Op::Xxx, AddrMode::Aby, 7),
    ill("*NOP", Op::Nop, AddrMode::Abx, 4),
    ins("SBC", Op::Sbc, AddrMode::Abx, 4),
    ins("INC", Op::Inc, AddrMode::Abx, 7),
    ill("*ISC", Op::Xxx, AddrMode::Abx, 7),
];
