use bitflags::bitflags;

bitflags! {
    /// Processor status register (P).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY = 0b00000001;
        const ZERO = 0b00000010;
        const INTERRUPT_DISABLE = 0b00000100;
        // Settable, but the 2A03 has no BCD unit
        const DECIMAL = 0b00001000;
        // Only exists in the copy pushed to the stack
        const BREAK = 0b00010000;
        const UNUSED = 0b00100000;
        const OVERFLOW = 0b01000000;
        const NEGATIVE = 0b10000000;
    }
}

impl Status {
    /// Value as pushed by BRK/PHP (`brk == true`) or by IRQ/NMI.
    pub fn pushed(self, brk: bool) -> u8 {
        let mut p = self | Status::UNUSED;
        p.set(Status::BREAK, brk);
        p.bits()
    }

    /// Value restored from the stack by PLP/RTI.
    pub fn pulled(value: u8) -> Self {
        let mut p = Status::from_bits_retain(value);
        p.remove(Status::BREAK);
        p.insert(Status::UNUSED);
        p
    }

    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED
    }
}
