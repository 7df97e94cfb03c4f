use nes_cpu::bus::{Bus, Ram};
use nes_cpu::config::{parse_address, DEFAULT_ORIGIN};
use nes_cpu::cpu::lookup;
use nes_cpu::disasm;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image> [origin]", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let origin = match args.get(2) {
        Some(text) => parse_address(text)?,
        None => DEFAULT_ORIGIN,
    };

    let image = std::fs::read(path)?;
    let mut ram = Ram::new();
    ram.load(origin, &image)?;

    println!("Loaded {} bytes at ${:04X}\n", image.len(), origin);

    let stop = origin as usize + image.len().max(1) - 1;
    let lines = disasm::lines(&ram, origin, stop as u16);
    let illegal = lines
        .iter()
        .filter(|l| lookup(ram.peek(l.addr)).is_illegal())
        .count();
    for line in &lines {
        let bytes: Vec<String> = (0..line.len)
            .map(|i| format!("{:02X}", ram.peek(line.addr.wrapping_add(i))))
            .collect();
        println!("{:<9} {}", bytes.join(" "), line.text);
    }

    println!("\n{} instructions, {} undocumented", lines.len(), illegal);
    Ok(())
}
