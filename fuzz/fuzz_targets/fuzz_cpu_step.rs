//! Fuzz target for clock-level CPU execution.
//!
//! Builds an arbitrary register state, memory image and configuration, then
//! runs a burst of clock pulses with interrupts injected along the way. Any
//! panic (arithmetic overflow, out-of-range index) is a bug.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{CpuConfig, FlatMemory, IllegalOpcodes, MemoryBus, Variant, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    ricoh: bool,
    emulate_illegal: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    program: [u8; 32],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
enum Event {
    Step,
    StepInstruction,
    Irq,
    Nmi,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    events: Vec<Event>,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset 0x8000, NMI 0x8000, IRQ 0x8000
    memory.load(0xFFFA, &[0x00, 0x80, 0x00, 0x80, 0x00, 0x80]);
    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let state = &input.cpu_state;
    let config = CpuConfig::default()
        .with_variant(if state.ricoh {
            Variant::Ricoh2A03
        } else {
            Variant::Nmos6502
        })
        .with_illegal_opcodes(if state.emulate_illegal {
            IllegalOpcodes::Emulate
        } else {
            IllegalOpcodes::Nop
        });

    let Ok(mut cpu) = CPU::with_config(memory, config) else {
        return;
    };

    cpu.set_a(state.a);
    cpu.set_x(state.x);
    cpu.set_y(state.y);
    cpu.set_sp(state.sp);
    cpu.set_status(state.status);

    for event in input.events.iter().take(256) {
        let before = cpu.cycles();
        match event {
            Event::Step => {
                cpu.step();
                assert_eq!(cpu.cycles(), before + 1);
            }
            Event::StepInstruction => {
                let used = cpu.step_instruction();
                assert!(used >= 1 && used <= 8);
                assert!(cpu.is_instruction_boundary());
            }
            Event::Irq => cpu.irq(),
            Event::Nmi => cpu.nmi(),
            Event::Reset => cpu.reset(),
        }

        // Bit 5 of P always reads as 1
        assert!(cpu.status() & 0x20 != 0);
    }

    // Keep the bus observable so writes are not optimized away
    let _ = cpu.memory_mut().read(0x0000);
});
