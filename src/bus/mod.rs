use thiserror::Error;

pub const ADDRESS_SPACE: usize = 0x10000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusError {
    #[error("image of {len} bytes at 0x{origin:04X} runs past the end of the address space")]
    ImageTooLarge { origin: u16, len: usize },
    #[error("image of {len} bytes at 0x{origin:04X} covers only one byte of the reset vector")]
    VectorOverlap { origin: u16, len: usize },
}

/// Anything the CPU can be attached to.
///
/// `read` and `write` are the accesses the CPU makes while executing. `peek`
/// must return what `read` would without disturbing the device, so that
/// tooling such as the disassembler can look at memory between cycles.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);
    fn peek(&self, addr: u16) -> u8;

    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, value as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Flat 64KB of RAM with no mirroring or banking.
pub struct Ram {
    mem: Box<[u8]>,
}

impl Ram {
    pub fn new() -> Self {
        Ram {
            mem: vec![0; ADDRESS_SPACE].into_boxed_slice(),
        }
    }

    /// Copy a program image into memory starting at `origin`.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<(), BusError> {
        let start = origin as usize;
        let end = start + image.len();
        if end > ADDRESS_SPACE {
            return Err(BusError::ImageTooLarge {
                origin,
                len: image.len(),
            });
        }
        self.mem[start..end].copy_from_slice(image);
        log::debug!("Loaded {} bytes at 0x{:04X}", image.len(), origin);
        Ok(())
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Ram {
    fn read(&mut self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }

    fn peek(&self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }
}
