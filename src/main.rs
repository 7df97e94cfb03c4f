use std::env;
use std::fs;

use anyhow::{Context, Result};

use nes_cpu::config::RunConfig;
use nes_cpu::cpu::{LogTrace, Status};
use nes_cpu::system::Console;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match RunConfig::from_args(args.iter().skip(1).cloned()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "Usage: {} <image> [--origin ADDR] [--cycles N] [--disasm] [--trace]",
                args[0]
            );
            std::process::exit(1);
        }
    };

    log::info!("Loading program: {}", config.image.display());
    let image = fs::read(&config.image)
        .with_context(|| format!("Failed to read {}", config.image.display()))?;

    let mut console = Console::new();
    console.load_program(config.origin, &image)?;

    if config.disasm {
        let stop = config.origin.saturating_add(image.len().saturating_sub(1) as u16);
        for text in console.disassemble(config.origin, stop).values() {
            println!("{}", text);
        }
    }

    if config.trace {
        console.cpu.set_trace(Some(Box::new(LogTrace)));
    }

    console.reset();
    log::info!("Running for {} cycles...", config.cycles);
    let spent = console.run_cycles(config.cycles);

    let cpu = &console.cpu;
    println!(
        "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} PC:{:04X} P:{:02X} [{}{}{}{}{}{}] CYC:{} ({} run)",
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.sp,
        cpu.pc,
        cpu.status.bits(),
        if cpu.get_flag(Status::NEGATIVE) { 'N' } else { '-' },
        if cpu.get_flag(Status::OVERFLOW) { 'V' } else { '-' },
        if cpu.get_flag(Status::DECIMAL) { 'D' } else { '-' },
        if cpu.get_flag(Status::INTERRUPT_DISABLE) { 'I' } else { '-' },
        if cpu.get_flag(Status::ZERO) { 'Z' } else { '-' },
        if cpu.get_flag(Status::CARRY) { 'C' } else { '-' },
        cpu.cycles(),
        spent
    );

    log::info!("Emulation stopped.");
    Ok(())
}
