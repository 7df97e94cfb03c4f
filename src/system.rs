use std::collections::BTreeMap;

use crate::bus::{Bus, BusError, Ram};
use crate::cpu::{Cpu, RESET_VECTOR};

/// A CPU wired to the bus it executes against.
pub struct Console<B: Bus = Ram> {
    pub cpu: Cpu,
    pub bus: B,
}

impl Console<Ram> {
    pub fn new() -> Self {
        Console {
            cpu: Cpu::new(),
            bus: Ram::new(),
        }
    }

    /// Copy `image` to `origin` and point the reset vector at it, unless the
    /// image already covers the vector itself. An image holding only half of
    /// the vector is rejected before anything is written.
    pub fn load_program(&mut self, origin: u16, image: &[u8]) -> Result<(), BusError> {
        let start = origin as usize;
        let end = start + image.len();
        let covers = |addr: u16| (start..end).contains(&(addr as usize));
        let (lo, hi) = (covers(RESET_VECTOR), covers(RESET_VECTOR + 1));
        if lo != hi {
            return Err(BusError::VectorOverlap {
                origin,
                len: image.len(),
            });
        }

        self.bus.load(origin, image)?;
        if !lo {
            self.bus.write_word(RESET_VECTOR, origin);
        }
        log::info!(
            "Program loaded: {} bytes at 0x{:04X}, reset vector 0x{:04X}",
            image.len(),
            origin,
            self.bus.read_word(RESET_VECTOR)
        );
        Ok(())
    }
}

impl Default for Console<Ram> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bus> Console<B> {
    pub fn with_bus(bus: B) -> Self {
        Console {
            cpu: Cpu::new(),
            bus,
        }
    }

    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
    }

    pub fn irq(&mut self) {
        self.cpu.irq(&mut self.bus);
    }

    pub fn nmi(&mut self) {
        self.cpu.nmi(&mut self.bus);
    }

    pub fn clock(&mut self) {
        self.cpu.clock(&mut self.bus);
    }

    pub fn complete(&self) -> bool {
        self.cpu.complete()
    }

    /// Finish the pending instruction, or run the next one. Returns cycles spent.
    pub fn step(&mut self) -> u64 {
        self.cpu.step(&mut self.bus)
    }

    /// Run for at least `budget` cycles, stopping on an instruction boundary.
    pub fn run_cycles(&mut self, budget: u64) -> u64 {
        let mut spent = 0;
        while spent < budget {
            spent += self.step();
        }
        spent
    }

    pub fn disassemble(&self, start: u16, stop: u16) -> BTreeMap<u16, String> {
        self.cpu.disassemble(&self.bus, start, stop)
    }
}
