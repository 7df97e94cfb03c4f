use std::collections::BTreeMap;

use crate::bus::Bus;
use crate::cpu::{table, AddrMode, Op};

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub addr: u16,
    pub len: u16,
    pub text: String,
}

fn operand_text<B: Bus + ?Sized>(bus: &B, addr: u16, op: Op, mode: AddrMode) -> String {
    let byte = bus.peek(addr.wrapping_add(1));
    let word = (bus.peek(addr.wrapping_add(2)) as u16) << 8 | byte as u16;
    match mode {
        AddrMode::Imp => match op {
            Op::Asl | Op::Lsr | Op::Rol | Op::Ror => "A".to_string(),
            _ => String::new(),
        },
        AddrMode::Imm => format!("#${:02X}", byte),
        AddrMode::Zp0 => format!("${:02X}", byte),
        AddrMode::Zpx => format!("${:02X},X", byte),
        AddrMode::Zpy => format!("${:02X},Y", byte),
        AddrMode::Rel => {
            let target = addr.wrapping_add(2).wrapping_add(byte as i8 as u16);
            format!("${:04X}", target)
        }
        AddrMode::Abs => format!("${:04X}", word),
        AddrMode::Abx => format!("${:04X},X", word),
        AddrMode::Aby => format!("${:04X},Y", word),
        AddrMode::Ind => format!("(${:04X})", word),
        AddrMode::Izx => format!("(${:02X},X)", byte),
        AddrMode::Izy => format!("(${:02X}),Y", byte),
    }
}

/// Decode the instruction at `addr` without touching any CPU state.
pub fn decode<B: Bus + ?Sized>(bus: &B, addr: u16) -> Line {
    let entry = table::lookup(bus.peek(addr));
    let operand = operand_text(bus, addr, entry.op, entry.mode);
    let text = if operand.is_empty() {
        format!("${:04X}: {}", addr, entry.name)
    } else {
        format!("${:04X}: {} {}", addr, entry.name, operand)
    };
    Line {
        addr,
        len: entry.len(),
        text,
    }
}

/// Every instruction starting in `start..=stop`, in address order.
///
/// Decoding walks forward from `start` by instruction length, exactly as
/// execution would, and stops once the cursor passes `stop` or the end of
/// memory.
pub fn lines<B: Bus + ?Sized>(bus: &B, start: u16, stop: u16) -> Vec<Line> {
    let mut out = Vec::new();
    let mut cursor = start as u32;
    while cursor <= stop as u32 {
        let line = decode(bus, cursor as u16);
        cursor += line.len as u32;
        out.push(line);
    }
    out
}

pub fn disassemble<B: Bus + ?Sized>(bus: &B, start: u16, stop: u16) -> BTreeMap<u16, String> {
    lines(bus, start, stop)
        .into_iter()
        .map(|line| (line.addr, line.text))
        .collect()
}
