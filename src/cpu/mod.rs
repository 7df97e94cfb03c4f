mod addressing;
mod ops;
mod status;
pub mod table;
pub mod trace;

use std::collections::BTreeMap;

use crate::bus::Bus;
use crate::disasm;

pub use addressing::AddrMode;
pub use ops::{Op, IRQ_VECTOR};
pub use status::Status;
pub use table::{lookup, Instruction, OPCODES};
pub use trace::{LogTrace, TraceBuffer, TraceEvent, TraceFn, TraceSink};

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const STACK_PAGE: u16 = 0x0100;

const RESET_CYCLES: u8 = 8;
const INTERRUPT_CYCLES: u8 = 7;

/// NMOS 6502 core as found in the NES 2A03.
///
/// The CPU does not own its bus: every operation that touches memory takes
/// the bus as an argument, so whoever composes the system decides where the
/// memory lives. Time only advances through [`Cpu::clock`]; an instruction
/// runs in full on its first cycle and the remaining cycles are spent idle.
pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,

    // Latched while the current instruction is in flight
    opcode: u8,
    instruction_pc: u16,
    fetched: u8,
    addr_abs: u16,
    addr_rel: u16,

    cycles: u8,
    clock_count: u64,

    trace: Option<Box<dyn TraceSink>>,
}

impl Cpu {
    pub fn new() -> Self {
        Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            status: Status::UNUSED,
            opcode: 0,
            instruction_pc: 0,
            fetched: 0,
            addr_abs: 0,
            addr_rel: 0,
            cycles: 0,
            clock_count: 0,
            trace: None,
        }
    }

    pub fn with_trace<T: TraceSink + 'static>(mut self, sink: T) -> Self {
        self.trace = Some(Box::new(sink));
        self
    }

    pub fn set_trace(&mut self, sink: Option<Box<dyn TraceSink>>) {
        self.trace = sink;
    }

    pub fn get_flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }

    /// True between instructions, the only point where registers are stable.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    /// Cycles elapsed since power-on.
    pub fn cycles(&self) -> u64 {
        self.clock_count
    }

    /// Cycles left before the next fetch.
    pub fn remaining_cycles(&self) -> u8 {
        self.cycles
    }

    /// Opcode of the instruction most recently fetched.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Effective address resolved by the most recent instruction.
    pub fn effective_address(&self) -> u16 {
        self.addr_abs
    }

    pub fn reset<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.status = Status::UNUSED;
        self.pc = bus.read_word(RESET_VECTOR);

        self.fetched = 0;
        self.addr_abs = 0;
        self.addr_rel = 0;
        self.cycles = RESET_CYCLES;

        log::info!("Reset CPU, PC set to: 0x{:04X}", self.pc);
    }

    /// Maskable interrupt request; ignored while interrupts are disabled.
    pub fn irq<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        if self.get_flag(Status::INTERRUPT_DISABLE) {
            log::debug!("IRQ ignored, interrupts disabled at PC: 0x{:04X}", self.pc);
            return;
        }
        self.interrupt(bus, IRQ_VECTOR);
    }

    pub fn nmi<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.interrupt(bus, NMI_VECTOR);
    }

    fn interrupt<B: Bus + ?Sized>(&mut self, bus: &mut B, vector: u16) {
        self.push_word(bus, self.pc);
        self.push(bus, self.status.pushed(false));
        self.status.insert(Status::INTERRUPT_DISABLE);
        self.pc = bus.read_word(vector);
        self.cycles = INTERRUPT_CYCLES;
        log::trace!("Interrupt via 0x{:04X}, PC set to: 0x{:04X}", vector, self.pc);
    }

    /// Advance by one clock cycle.
    pub fn clock<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        if self.cycles == 0 {
            self.instruction_pc = self.pc;
            self.opcode = self.next_byte(bus);
            self.status.insert(Status::UNUSED);

            let entry = table::lookup(self.opcode);
            self.emit_trace(entry);

            let crossed = self.resolve(bus, entry.mode);
            let extra = self.execute(bus, entry.op, entry.mode);
            let penalty = (crossed && entry.op.page_penalty()) as u8;
            self.cycles = entry.cycles + extra + penalty;

            self.status.insert(Status::UNUSED);
        }

        self.cycles -= 1;
        self.clock_count += 1;
    }

    /// Clock until the CPU is between instructions again.
    ///
    /// When called between instructions this runs exactly one instruction;
    /// otherwise it only finishes whatever is pending (an instruction, a
    /// reset or an interrupt sequence). Returns the cycles spent.
    pub fn step<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u64 {
        let start = self.clock_count;
        loop {
            self.clock(bus);
            if self.complete() {
                break;
            }
        }
        self.clock_count - start
    }

    pub fn disassemble<B: Bus + ?Sized>(&self, bus: &B, start: u16, stop: u16) -> BTreeMap<u16, String> {
        disasm::disassemble(bus, start, stop)
    }

    fn emit_trace(&mut self, entry: &Instruction) {
        if let Some(sink) = self.trace.as_mut() {
            let event = TraceEvent {
                pc: self.instruction_pc,
                opcode: self.opcode,
                name: entry.name,
                a: self.a,
                x: self.x,
                y: self.y,
                sp: self.sp,
                status: self.status,
                cycles: self.clock_count,
            };
            sink.instruction(&event);
        }
    }

    fn next_byte<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn next_word<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let lo = self.next_byte(bus) as u16;
        let hi = self.next_byte(bus) as u16;
        (hi << 8) | lo
    }

    fn push<B: Bus + ?Sized>(&mut self, bus: &mut B, value: u8) {
        bus.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pop<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_PAGE | self.sp as u16)
    }

    fn push_word<B: Bus + ?Sized>(&mut self, bus: &mut B, value: u16) {
        self.push(bus, (value >> 8) as u8);
        self.push(bus, value as u8);
    }

    fn pop_word<B: Bus + ?Sized>(&mut self, bus: &mut B) -> u16 {
        let lo = self.pop(bus) as u16;
        let hi = self.pop(bus) as u16;
        (hi << 8) | lo
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
