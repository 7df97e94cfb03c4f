//! Whole-instruction behaviour driven through a `Console`.

use std::cell::RefCell;
use std::rc::Rc;

use nes_cpu::bus::{Bus, Ram};
use nes_cpu::cpu::{lookup, Status, TraceBuffer, IRQ_VECTOR, NMI_VECTOR, OPCODES};
use nes_cpu::system::Console;

/// Load `program` at `origin`, reset, and let the reset sequence finish.
fn boot_at(origin: u16, program: &[u8]) -> Console {
    let mut console = Console::new();
    console.load_program(origin, program).unwrap();
    console.reset();
    assert_eq!(console.step(), 8, "reset sequence");
    console
}

fn boot(program: &[u8]) -> Console {
    boot_at(0x8000, program)
}

#[test]
fn test_reset_state() {
    let console = boot(&[0xEA]);
    let cpu = &console.cpu;
    assert_eq!(cpu.pc, 0x8000);
    assert_eq!(cpu.sp, 0xFD);
    assert_eq!((cpu.a, cpu.x, cpu.y), (0, 0, 0));
    assert!(cpu.get_flag(Status::UNUSED));
    assert_eq!(cpu.status.bits(), 0x20);
    assert!(console.complete());
}

#[test]
fn test_adc_simple_sum() {
    // LDA #$50; ADC #$10
    let mut console = boot(&[0xA9, 0x50, 0x69, 0x10]);
    console.step();
    console.step();

    let cpu = &console.cpu;
    assert_eq!(cpu.a, 0x60);
    assert!(!cpu.get_flag(Status::CARRY));
    assert!(!cpu.get_flag(Status::OVERFLOW));
    assert!(!cpu.get_flag(Status::NEGATIVE));
    assert!(!cpu.get_flag(Status::ZERO));
}

#[test]
fn test_adc_signed_overflow() {
    // LDA #$7F; ADC #$01
    let mut console = boot(&[0xA9, 0x7F, 0x69, 0x01]);
    console.step();
    console.step();

    let cpu = &console.cpu;
    assert_eq!(cpu.a, 0x80);
    assert!(cpu.get_flag(Status::OVERFLOW));
    assert!(cpu.get_flag(Status::NEGATIVE));
    assert!(!cpu.get_flag(Status::CARRY));
}

#[test]
fn test_stack_pha_pla() {
    // LDA #$42; PHA; LDA #$00; PLA
    let mut console = boot(&[0xA9, 0x42, 0x48, 0xA9, 0x00, 0x68]);
    console.step();
    let sp_before = console.cpu.sp;

    assert_eq!(console.step(), 3);
    assert_eq!(console.cpu.sp, sp_before.wrapping_sub(1));
    assert_eq!(console.bus.peek(0x0100 | sp_before as u16), 0x42);

    console.step();
    assert!(console.cpu.get_flag(Status::ZERO));
    assert_eq!(console.step(), 4);
    assert_eq!(console.cpu.a, 0x42);
    assert_eq!(console.cpu.sp, sp_before);
    assert!(!console.cpu.get_flag(Status::ZERO));
}

#[test]
fn test_stack_php_plp() {
    // SEC; PHP; CLC; PLP
    let mut console = boot(&[0x38, 0x08, 0x18, 0x28]);
    for _ in 0..4 {
        console.step();
    }
    assert!(console.cpu.get_flag(Status::CARRY));
    assert!(!console.cpu.get_flag(Status::BREAK));
    assert_eq!(console.cpu.sp, 0xFD);
    assert_eq!(console.bus.peek(0x01FD), 0x31, "PHP pushes B and U");
}

#[test]
fn test_stack_wraps_within_page_one() {
    // LDX #$00; TXS; PHA; PLA
    let mut console = boot(&[0xA2, 0x00, 0x9A, 0x48, 0x68]);
    console.step();
    console.step();
    console.cpu.a = 0x99;
    console.step();
    assert_eq!(console.cpu.sp, 0xFF);
    assert_eq!(console.bus.peek(0x0100), 0x99);
    assert_eq!(console.bus.peek(0x0000), 0x00, "page zero untouched");
    console.step();
    assert_eq!(console.cpu.sp, 0x00);
}

#[test]
fn test_jsr_rts() {
    let mut console = boot(&[0x20, 0x00, 0x90, 0xEA]);
    console.bus.write(0x9000, 0x60);

    assert_eq!(console.step(), 6);
    assert_eq!(console.cpu.pc, 0x9000);
    assert_eq!(console.bus.peek(0x01FD), 0x80);
    assert_eq!(console.bus.peek(0x01FC), 0x02);
    assert_eq!(console.cpu.sp, 0xFB);

    assert_eq!(console.step(), 6);
    assert_eq!(console.cpu.pc, 0x8003);
    assert_eq!(console.cpu.sp, 0xFD);
}

#[test]
fn test_brk_rti_round_trip() {
    // SEC; BRK; NOP
    let mut console = boot(&[0x38, 0x00, 0xFF, 0xEA]);
    console.bus.write_word(IRQ_VECTOR, 0x9000);
    console.bus.write(0x9000, 0x40);

    console.step();
    assert_eq!(console.step(), 7);
    assert_eq!(console.cpu.pc, 0x9000);
    assert!(console.cpu.get_flag(Status::INTERRUPT_DISABLE));
    assert_eq!(console.bus.peek(0x01FD), 0x80);
    assert_eq!(console.bus.peek(0x01FC), 0x03);
    assert_eq!(console.bus.peek(0x01FB), 0x31, "B, U and C pushed");

    assert_eq!(console.step(), 6);
    assert_eq!(console.cpu.pc, 0x8003);
    assert_eq!(console.cpu.sp, 0xFD);
    assert!(console.cpu.get_flag(Status::CARRY));
    assert!(!console.cpu.get_flag(Status::INTERRUPT_DISABLE));
    assert!(!console.cpu.get_flag(Status::BREAK));
}

#[test]
fn test_latched_opcode_and_address() {
    // LDX #$05; LDA $0300,X
    let mut console = boot(&[0xA2, 0x05, 0xBD, 0x00, 0x03]);
    console.bus.write(0x0305, 0x77);
    console.step();
    console.step();
    assert_eq!(console.cpu.opcode(), 0xBD);
    assert_eq!(console.cpu.effective_address(), 0x0305);
    assert_eq!(console.cpu.a, 0x77);
}

#[test]
fn test_jmp_indirect_page_bug() {
    let mut console = boot(&[0x6C, 0xFF, 0x02]);
    console.bus.write(0x02FF, 0x34);
    console.bus.write(0x0200, 0x12);
    console.bus.write(0x0300, 0x56);
    assert_eq!(console.step(), 5);
    assert_eq!(console.cpu.pc, 0x1234);
}

#[test]
fn test_irq_sequence() {
    // CLI; NOP
    let mut console = boot(&[0x58, 0xEA]);
    console.bus.write_word(IRQ_VECTOR, 0xA000);
    console.step();

    console.irq();
    assert!(!console.complete());
    assert_eq!(console.cpu.pc, 0xA000);
    assert_eq!(console.cpu.sp, 0xFA);
    assert_eq!(console.bus.peek(0x01FD), 0x80);
    assert_eq!(console.bus.peek(0x01FC), 0x01);
    assert_eq!(console.bus.peek(0x01FB), 0x20, "B clear, U set");
    assert!(console.cpu.get_flag(Status::INTERRUPT_DISABLE));
    assert_eq!(console.step(), 7);
}

#[test]
fn test_irq_masked() {
    // SEI
    let mut console = boot(&[0x78, 0xEA]);
    console.step();
    let cycles = console.cpu.cycles();

    console.irq();
    assert!(console.complete());
    assert_eq!(console.cpu.pc, 0x8001);
    assert_eq!(console.cpu.sp, 0xFD);
    assert_eq!(console.cpu.cycles(), cycles);
    assert_eq!(console.step(), 2, "next instruction runs normally");
}

#[test]
fn test_nmi_while_masked() {
    let mut console = boot(&[0x78, 0xEA]);
    console.bus.write_word(NMI_VECTOR, 0xB000);
    console.step();

    console.nmi();
    assert_eq!(console.cpu.pc, 0xB000);
    assert_eq!(console.cpu.sp, 0xFA);
    assert_eq!(console.bus.peek(0x01FB), 0x24);
    assert_eq!(console.step(), 7);
}

#[test]
fn test_branch_timing() {
    // LDA #$00; BEQ +$10 crosses from $80F4 to $8104
    let mut console = boot_at(0x80F0, &[0xA9, 0x00, 0xF0, 0x10]);
    console.step();
    assert_eq!(console.step(), 4);
    assert_eq!(console.cpu.pc, 0x8104);

    // LDA #$00; BEQ +$02 stays on the page
    let mut console = boot_at(0x80F0, &[0xA9, 0x00, 0xF0, 0x02]);
    console.step();
    assert_eq!(console.step(), 3);
    assert_eq!(console.cpu.pc, 0x80F6);

    // LDA #$01; BEQ not taken
    let mut console = boot_at(0x80F0, &[0xA9, 0x01, 0xF0, 0x10]);
    console.step();
    assert_eq!(console.step(), 2);
    assert_eq!(console.cpu.pc, 0x80F4);

    // Backward branch across a page
    let mut console = boot_at(0x8100, &[0xA9, 0x00, 0xF0, 0xF0]);
    console.step();
    assert_eq!(console.step(), 4);
    assert_eq!(console.cpu.pc, 0x80F4);
}

#[test]
fn test_cycles_per_addressing_mode() {
    let cases: &[(&[u8], u64, &str)] = &[
        (&[0xEA], 2, "NOP"),
        (&[0xA9, 0x01], 2, "LDA #"),
        (&[0xA5, 0x10], 3, "LDA zp"),
        (&[0xB5, 0x10], 4, "LDA zp,X"),
        (&[0xB6, 0x10], 4, "LDX zp,Y"),
        (&[0xAD, 0x00, 0x02], 4, "LDA abs"),
        (&[0xBD, 0x00, 0x02], 4, "LDA abs,X"),
        (&[0xB9, 0x00, 0x02], 4, "LDA abs,Y"),
        (&[0xA1, 0x10], 6, "LDA (zp,X)"),
        (&[0xB1, 0x10], 5, "LDA (zp),Y"),
        (&[0x6C, 0x00, 0x02], 5, "JMP (abs)"),
        (&[0x4C, 0x00, 0x90], 3, "JMP abs"),
        (&[0xF0, 0x10], 2, "BEQ not taken"),
        (&[0x0A], 2, "ASL A"),
        (&[0xE6, 0x10], 5, "INC zp"),
        (&[0xF6, 0x10], 6, "INC zp,X"),
        (&[0xEE, 0x00, 0x02], 6, "INC abs"),
        (&[0x1E, 0x00, 0x02], 7, "ASL abs,X"),
        (&[0x9D, 0x00, 0x02], 5, "STA abs,X"),
        (&[0x99, 0x00, 0x02], 5, "STA abs,Y"),
        (&[0x91, 0x10], 6, "STA (zp),Y"),
        (&[0x81, 0x10], 6, "STA (zp,X)"),
        (&[0x20, 0x00, 0x90], 6, "JSR"),
        (&[0x48], 3, "PHA"),
        (&[0x68], 4, "PLA"),
        (&[0x08], 3, "PHP"),
        (&[0x28], 4, "PLP"),
        (&[0x00, 0x00], 7, "BRK"),
        (&[0x40], 6, "RTI"),
        (&[0x60], 6, "RTS"),
    ];
    for (program, cycles, name) in cases {
        let mut console = boot(program);
        assert_eq!(console.step(), *cycles, "{}", name);
    }
}

#[test]
fn test_page_cross_penalty() {
    let cases: &[(&[u8], u64, &str)] = &[
        (&[0xBD, 0xFF, 0x02], 5, "LDA abs,X"),
        (&[0xB9, 0xFF, 0x02], 5, "LDA abs,Y"),
        (&[0xBE, 0xFF, 0x02], 5, "LDX abs,Y"),
        (&[0xBC, 0xFF, 0x02], 5, "LDY abs,X"),
        (&[0x7D, 0xFF, 0x02], 5, "ADC abs,X"),
        (&[0xDD, 0xFF, 0x02], 5, "CMP abs,X"),
        (&[0xB1, 0x10], 6, "LDA (zp),Y"),
        (&[0x51, 0x10], 6, "EOR (zp),Y"),
        (&[0x9D, 0xFF, 0x02], 5, "STA abs,X"),
        (&[0x91, 0x10], 6, "STA (zp),Y"),
        (&[0x1E, 0xFF, 0x02], 7, "ASL abs,X"),
        (&[0xDE, 0xFF, 0x02], 7, "DEC abs,X"),
        (&[0x1C, 0xFF, 0x02], 5, "*NOP abs,X"),
    ];
    for (program, cycles, name) in cases {
        let mut console = boot(program);
        console.bus.write_word(0x0010, 0x02FF);
        console.cpu.x = 1;
        console.cpu.y = 1;
        assert_eq!(console.step(), *cycles, "{}", name);
    }
}

#[test]
fn test_counting_loop() {
    let program = [
        0xA9, 0x00, // LDA #$00
        0xA2, 0x04, // LDX #$04
        0x18, // loop: CLC
        0x69, 0x03, // ADC #$03
        0xCA, // DEX
        0xD0, 0xFA, // BNE loop
        0x85, 0x10, // STA $10
        0xEA, // NOP
    ];
    let mut console = boot(&program);
    let mut spent = 0;
    while console.cpu.pc != 0x800C {
        spent += console.step();
    }
    assert_eq!(console.bus.peek(0x0010), 12);
    assert_eq!(console.cpu.x, 0);
    assert_eq!(console.cpu.a, 12);
    assert_eq!(spent, 42);
}

#[test]
fn test_compare_and_logic_flags() {
    let program = [
        0xA9, 0x0F, // LDA #$0F
        0x29, 0xF0, // AND #$F0 -> 0
        0x09, 0x80, // ORA #$80 -> 0x80
        0x49, 0xFF, // EOR #$FF -> 0x7F
        0xC9, 0x80, // CMP #$80 -> borrow
        0xA0, 0x10, // LDY #$10
        0xC0, 0x10, // CPY #$10 -> equal
        0xA2, 0x20, // LDX #$20
        0xE0, 0x30, // CPX #$30 -> less
    ];
    let mut console = boot(&program);
    console.step();
    console.step();
    assert!(console.cpu.get_flag(Status::ZERO));
    console.step();
    assert!(console.cpu.get_flag(Status::NEGATIVE));
    console.step();
    assert_eq!(console.cpu.a, 0x7F);
    console.step();
    assert!(!console.cpu.get_flag(Status::CARRY));
    assert!(console.cpu.get_flag(Status::NEGATIVE));
    console.step();
    console.step();
    assert!(console.cpu.get_flag(Status::ZERO));
    assert!(console.cpu.get_flag(Status::CARRY));
    console.step();
    console.step();
    assert!(!console.cpu.get_flag(Status::CARRY));
    assert!(console.cpu.get_flag(Status::NEGATIVE));
}

#[test]
fn test_undocumented_opcodes_are_harmless() {
    for (code, entry) in OPCODES.iter().enumerate() {
        if !entry.is_illegal() {
            continue;
        }
        let mut console = boot(&[code as u8, 0x00, 0x02, 0xEA]);
        console.cpu.a = 0x11;
        console.cpu.x = 0x22;
        console.cpu.y = 0x33;
        let before = (console.cpu.a, console.cpu.x, console.cpu.y, console.cpu.sp);

        let spent = console.step();
        assert!(spent >= entry.cycles as u64, "0x{:02X}", code);
        assert_eq!(console.cpu.pc, 0x8000 + entry.len(), "0x{:02X}", code);
        assert_eq!(
            before,
            (console.cpu.a, console.cpu.x, console.cpu.y, console.cpu.sp),
            "0x{:02X}",
            code
        );

        // Still steppable afterwards
        console.cpu.pc = 0x8003;
        assert_eq!(console.step(), 2);
    }
}

#[test]
fn test_disassembly_matches_execution() {
    let program = [
        0xA2, 0x05, // LDX #$05
        0xA0, 0x03, // LDY #$03
        0xA9, 0x10, // LDA #$10
        0x85, 0x20, // STA $20
        0x95, 0x21, // STA $21,X
        0x96, 0x30, // STX $30,Y
        0x8D, 0x00, 0x03, // STA $0300
        0x9D, 0x00, 0x03, // STA $0300,X
        0x99, 0x00, 0x03, // STA $0300,Y
        0xA5, 0x20, // LDA $20
        0xB5, 0x21, // LDA $21,X
        0xB6, 0x30, // LDX $30,Y
        0xAD, 0x00, 0x03, // LDA $0300
        0xBD, 0x00, 0x03, // LDA $0300,X
        0xB9, 0x00, 0x03, // LDA $0300,Y
        0xA1, 0x40, // LDA ($40,X)
        0xB1, 0x40, // LDA ($40),Y
        0x0A, // ASL A
        0xE6, 0x20, // INC $20
        0xF0, 0x10, // BEQ, not taken
        0x24, 0x20, // BIT $20
        0xEA, // NOP
        0x18, // CLC
        0x69, 0x01, // ADC #$01
        0xC9, 0x00, // CMP #$00
        0xD0, 0x00, // BNE to the next instruction
        0x04, 0x10, // *NOP $10
        0xEA, // NOP
    ];
    let mut console = boot(&program);
    let stop = 0x8000 + program.len() as u16 - 1;
    let map = console.disassemble(0x8000, stop);
    assert_eq!(map.len(), 28);

    let starts: Vec<u16> = map.keys().copied().collect();
    for pair in starts.windows(2) {
        let len = lookup(console.bus.peek(pair[0])).len();
        assert_eq!(pair[0] + len, pair[1], "drift after {}", map[&pair[0]]);
    }
    assert_eq!(*starts.last().unwrap(), stop);

    for next in &starts[1..] {
        console.step();
        assert_eq!(console.cpu.pc, *next, "execution left {}", map[next]);
    }
}

#[test]
fn test_trace_buffer_collects_events() {
    let mut console = boot(&[0xA9, 0x05, 0xAA, 0xE8]);
    let buffer = Rc::new(RefCell::new(TraceBuffer::default()));
    console.cpu.set_trace(Some(Box::new(Rc::clone(&buffer))));
    console.run_cycles(6);

    let trace = buffer.borrow();
    let events = &trace.events;
    let names: Vec<&str> = events.iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["LDA", "TAX", "INX"]);
    assert_eq!(events[1].a, 0x05);
    assert_eq!(events[2].x, 0x05);
    assert_eq!(events[0].cycles, 8);
    assert_eq!(events[2].pc, 0x8003);
}

/// A bus with mirrored 2KB RAM that counts CPU reads.
struct MirroredBus {
    ram: [u8; 0x800],
    rom: Ram,
    reads: usize,
}

impl Bus for MirroredBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.reads += 1;
        self.peek(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        // Writes above the RAM mirrors are dropped
        if addr < 0x2000 {
            self.ram[(addr & 0x07FF) as usize] = value;
        }
    }

    fn peek(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
            _ => self.rom.peek(addr),
        }
    }
}

#[test]
fn test_custom_bus() {
    let mut rom = Ram::new();
    // LDA #$7E; STA $0810; LDA $0010
    rom.load(0x8000, &[0xA9, 0x7E, 0x8D, 0x10, 0x08, 0xAD, 0x10, 0x00]).unwrap();
    rom.write_word(0xFFFC, 0x8000);
    let mut console = Console::with_bus(MirroredBus {
        ram: [0; 0x800],
        rom,
        reads: 0,
    });
    console.reset();
    console.step();
    console.step();
    console.step();

    let reads = console.bus.reads;
    let map = console.disassemble(0x8000, 0x8007);
    assert_eq!(map.len(), 3);
    assert_eq!(console.bus.reads, reads, "disassembly does not read through the CPU path");

    console.cpu.a = 0;
    console.step();
    assert_eq!(console.cpu.a, 0x7E);
}
