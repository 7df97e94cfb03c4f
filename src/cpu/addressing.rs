use super::Cpu;
use crate::bus::Bus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    /// Implied, or the accumulator for the shift/rotate forms
    Imp,
    Imm,
    Zp0,
    Zpx,
    Zpy,
    Rel,
    Abs,
    Abx,
    Aby,
    /// JMP only
    Ind,
    /// ($zp,X)
    Izx,
    /// ($zp),Y
    Izy,
}

impl AddrMode {
    /// Operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddrMode::Imp => 0,
            AddrMode::Imm
            | AddrMode::Zp0
            | AddrMode::Zpx
            | AddrMode::Zpy
            | AddrMode::Rel
            | AddrMode::Izx
            | AddrMode::Izy => 1,
            AddrMode::Abs | AddrMode::Abx | AddrMode::Aby | AddrMode::Ind => 2,
        }
    }

    pub const fn len(self) -> u16 {
        1 + self.operand_len()
    }
}

fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl Cpu {
    /// Consume the operand bytes for `mode` and latch the effective address.
    ///
    /// Returns true when indexing moved the address onto another page. Only
    /// instructions with a read penalty turn that into an extra cycle.
    pub(super) fn resolve<B: Bus + ?Sized>(&mut self, bus: &mut B, mode: AddrMode) -> bool {
        match mode {
            AddrMode::Imp => {
                self.fetched = self.a;
                false
            }
            AddrMode::Imm => {
                self.addr_abs = self.pc;
                self.pc = self.pc.wrapping_add(1);
                false
            }
            AddrMode::Zp0 => {
                self.addr_abs = self.next_byte(bus) as u16;
                false
            }
            AddrMode::Zpx => {
                self.addr_abs = self.next_byte(bus).wrapping_add(self.x) as u16;
                false
            }
            AddrMode::Zpy => {
                self.addr_abs = self.next_byte(bus).wrapping_add(self.y) as u16;
                false
            }
            AddrMode::Rel => {
                // Sign-extend so the branch can just add it to PC
                self.addr_rel = self.next_byte(bus) as i8 as u16;
                false
            }
            AddrMode::Abs => {
                self.addr_abs = self.next_word(bus);
                false
            }
            AddrMode::Abx => {
                let base = self.next_word(bus);
                self.addr_abs = base.wrapping_add(self.x as u16);
                page_crossed(base, self.addr_abs)
            }
            AddrMode::Aby => {
                let base = self.next_word(bus);
                self.addr_abs = base.wrapping_add(self.y as u16);
                page_crossed(base, self.addr_abs)
            }
            AddrMode::Ind => {
                let ptr = self.next_word(bus);
                let lo = bus.read(ptr) as u16;
                // The high byte never carries out of the pointer's page
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr + 1
                };
                let hi = bus.read(hi_addr) as u16;
                self.addr_abs = (hi << 8) | lo;
                false
            }
            AddrMode::Izx => {
                let zp = self.next_byte(bus).wrapping_add(self.x);
                let lo = bus.read(zp as u16) as u16;
                let hi = bus.read(zp.wrapping_add(1) as u16) as u16;
                self.addr_abs = (hi << 8) | lo;
                false
            }
            AddrMode::Izy => {
                let zp = self.next_byte(bus);
                let lo = bus.read(zp as u16) as u16;
                let hi = bus.read(zp.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                self.addr_abs = base.wrapping_add(self.y as u16);
                page_crossed(base, self.addr_abs)
            }
        }
    }
}
