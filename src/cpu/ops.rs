use super::{AddrMode, Cpu, Status};
use crate::bus::Bus;

pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Instruction semantics, one variant per documented mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi,
    Bne, Bpl, Brk, Bvc, Bvs, Clc, Cld, Cli,
    Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor,
    Inc, Inx, Iny, Jmp, Jsr, Lda, Ldx, Ldy,
    Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol,
    Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta,
    Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    /// Undocumented opcodes: consume operands, change nothing
    Xxx,
}

impl Op {
    /// Whether a page cross during address resolution costs an extra cycle.
    pub const fn page_penalty(self) -> bool {
        matches!(
            self,
            Op::Adc
                | Op::And
                | Op::Cmp
                | Op::Eor
                | Op::Lda
                | Op::Ldx
                | Op::Ldy
                | Op::Nop
                | Op::Ora
                | Op::Sbc
        )
    }
}

impl Cpu {
    /// Operand value for the current instruction. Implied mode already
    /// latched the accumulator during resolution.
    fn fetch<B: Bus + ?Sized>(&mut self, bus: &mut B, mode: AddrMode) -> u8 {
        if mode != AddrMode::Imp {
            self.fetched = bus.read(self.addr_abs);
        }
        self.fetched
    }

    /// Result of a read-modify-write goes back to A or to memory.
    fn write_back<B: Bus + ?Sized>(&mut self, bus: &mut B, mode: AddrMode, value: u8) {
        if mode == AddrMode::Imp {
            self.a = value;
        } else {
            bus.write(self.addr_abs, value);
        }
    }

    fn add_with_carry(&mut self, value: u8) {
        let carry = self.status.contains(Status::CARRY) as u16;
        let sum = self.a as u16 + value as u16 + carry;
        let result = sum as u8;
        self.status.set(Status::CARRY, sum > 0xFF);
        self.status
            .set(Status::OVERFLOW, (self.a ^ result) & (value ^ result) & 0x80 != 0);
        self.a = result;
        self.status.set_zn(result);
    }

    fn compare(&mut self, reg: u8, value: u8) {
        self.status.set(Status::CARRY, reg >= value);
        self.status.set_zn(reg.wrapping_sub(value));
    }

    /// Returns the cycles a taken branch adds.
    fn branch(&mut self, taken: bool) -> u8 {
        if !taken {
            return 0;
        }
        let target = self.pc.wrapping_add(self.addr_rel);
        let extra = if (target & 0xFF00) != (self.pc & 0xFF00) { 2 } else { 1 };
        self.pc = target;
        extra
    }

    /// Carry out one instruction whose operand has been resolved.
    ///
    /// Returns the extra cycles earned by the instruction itself (branches);
    /// the page-cross penalty is accounted by the caller.
    pub(super) fn execute<B: Bus + ?Sized>(&mut self, bus: &mut B, op: Op, mode: AddrMode) -> u8 {
        match op {
            Op::Adc => {
                let m = self.fetch(bus, mode);
                self.add_with_carry(m);
            }
            Op::Sbc => {
                // A - M - !C == A + !M + C
                let m = self.fetch(bus, mode);
                self.add_with_carry(!m);
            }
            Op::And => {
                self.a &= self.fetch(bus, mode);
                self.status.set_zn(self.a);
            }
            Op::Ora => {
                self.a |= self.fetch(bus, mode);
                self.status.set_zn(self.a);
            }
            Op::Eor => {
                self.a ^= self.fetch(bus, mode);
                self.status.set_zn(self.a);
            }
            Op::Bit => {
                let m = self.fetch(bus, mode);
                self.status.set(Status::ZERO, self.a & m == 0);
                self.status.set(Status::OVERFLOW, m & 0x40 != 0);
                self.status.set(Status::NEGATIVE, m & 0x80 != 0);
            }
            Op::Asl => {
                let m = self.fetch(bus, mode);
                let result = m << 1;
                self.status.set(Status::CARRY, m & 0x80 != 0);
                self.status.set_zn(result);
                self.write_back(bus, mode, result);
            }
            Op::Lsr => {
                let m = self.fetch(bus, mode);
                let result = m >> 1;
                self.status.set(Status::CARRY, m & 0x01 != 0);
                self.status.set_zn(result);
                self.write_back(bus, mode, result);
            }
            Op::Rol => {
                let m = self.fetch(bus, mode);
                let result = (m << 1) | self.status.contains(Status::CARRY) as u8;
                self.status.set(Status::CARRY, m & 0x80 != 0);
                self.status.set_zn(result);
                self.write_back(bus, mode, result);
            }
            Op::Ror => {
                let m = self.fetch(bus, mode);
                let result = (m >> 1) | ((self.status.contains(Status::CARRY) as u8) << 7);
                self.status.set(Status::CARRY, m & 0x01 != 0);
                self.status.set_zn(result);
                self.write_back(bus, mode, result);
            }
            Op::Inc => {
                let result = self.fetch(bus, mode).wrapping_add(1);
                bus.write(self.addr_abs, result);
                self.status.set_zn(result);
            }
            Op::Dec => {
                let result = self.fetch(bus, mode).wrapping_sub(1);
                bus.write(self.addr_abs, result);
                self.status.set_zn(result);
            }
            Op::Inx => {
                self.x = self.x.wrapping_add(1);
                self.status.set_zn(self.x);
            }
            Op::Iny => {
                self.y = self.y.wrapping_add(1);
                self.status.set_zn(self.y);
            }
            Op::Dex => {
                self.x = self.x.wrapping_sub(1);
                self.status.set_zn(self.x);
            }
            Op::Dey => {
                self.y = self.y.wrapping_sub(1);
                self.status.set_zn(self.y);
            }
            Op::Cmp => {
                let m = self.fetch(bus, mode);
                self.compare(self.a, m);
            }
            Op::Cpx => {
                let m = self.fetch(bus, mode);
                self.compare(self.x, m);
            }
            Op::Cpy => {
                let m = self.fetch(bus, mode);
                self.compare(self.y, m);
            }
            Op::Lda => {
                self.a = self.fetch(bus, mode);
                self.status.set_zn(self.a);
            }
            Op::Ldx => {
                self.x = self.fetch(bus, mode);
                self.status.set_zn(self.x);
            }
            Op::Ldy => {
                self.y = self.fetch(bus, mode);
                self.status.set_zn(self.y);
            }
            Op::Sta => bus.write(self.addr_abs, self.a),
            Op::Stx => bus.write(self.addr_abs, self.x),
            Op::Sty => bus.write(self.addr_abs, self.y),
            Op::Tax => {
                self.x = self.a;
                self.status.set_zn(self.x);
            }
            Op::Tay => {
                self.y = self.a;
                self.status.set_zn(self.y);
            }
            Op::Txa => {
                self.a = self.x;
                self.status.set_zn(self.a);
            }
            Op::Tya => {
                self.a = self.y;
                self.status.set_zn(self.a);
            }
            Op::Tsx => {
                self.x = self.sp;
                self.status.set_zn(self.x);
            }
            Op::Txs => self.sp = self.x,
            Op::Pha => self.push(bus, self.a),
            Op::Php => self.push(bus, self.status.pushed(true)),
            Op::Pla => {
                self.a = self.pop(bus);
                self.status.set_zn(self.a);
            }
            Op::Plp => {
                let p = self.pop(bus);
                self.status = Status::pulled(p);
            }
            Op::Clc => self.status.remove(Status::CARRY),
            Op::Cld => self.status.remove(Status::DECIMAL),
            Op::Cli => self.status.remove(Status::INTERRUPT_DISABLE),
            Op::Clv => self.status.remove(Status::OVERFLOW),
            Op::Sec => self.status.insert(Status::CARRY),
            Op::Sed => self.status.insert(Status::DECIMAL),
            Op::Sei => self.status.insert(Status::INTERRUPT_DISABLE),
            Op::Bcc => return self.branch(!self.status.contains(Status::CARRY)),
            Op::Bcs => return self.branch(self.status.contains(Status::CARRY)),
            Op::Bne => return self.branch(!self.status.contains(Status::ZERO)),
            Op::Beq => return self.branch(self.status.contains(Status::ZERO)),
            Op::Bpl => return self.branch(!self.status.contains(Status::NEGATIVE)),
            Op::Bmi => return self.branch(self.status.contains(Status::NEGATIVE)),
            Op::Bvc => return self.branch(!self.status.contains(Status::OVERFLOW)),
            Op::Bvs => return self.branch(self.status.contains(Status::OVERFLOW)),
            Op::Jmp => self.pc = self.addr_abs,
            Op::Jsr => {
                // Return address is the last byte of the JSR
                self.push_word(bus, self.pc.wrapping_sub(1));
                self.pc = self.addr_abs;
            }
            Op::Rts => {
                self.pc = self.pop_word(bus).wrapping_add(1);
            }
            Op::Brk => {
                // The padding byte was consumed as an immediate operand
                self.push_word(bus, self.pc);
                self.push(bus, self.status.pushed(true));
                self.status.insert(Status::INTERRUPT_DISABLE);
                self.pc = bus.read_word(IRQ_VECTOR);
            }
            Op::Rti => {
                let p = self.pop(bus);
                self.status = Status::pulled(p);
                self.pc = self.pop_word(bus);
            }
            Op::Nop => {}
            Op::Xxx => {
                log::debug!(
                    "Undocumented opcode: 0x{:02X} at PC: 0x{:04X}",
                    self.opcode,
                    self.instruction_pc
                );
            }
        }
        0
    }
}
