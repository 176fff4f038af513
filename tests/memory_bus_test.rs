//! Tests for custom MemoryBus implementations driving the CPU.

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Bus that records every access, with a read-to-clear status register.
struct TracingBus {
    ram: FlatMemory,
    reads: Vec<u16>,
    writes: Vec<(u16, u8)>,
    status: u8,
}

const STATUS_REG: u16 = 0xD000;

impl TracingBus {
    fn new(program: &[u8]) -> Self {
        let mut ram = FlatMemory::new();
        ram.load(0xFFFC, &[0x00, 0x80]);
        ram.load(0x8000, program);
        Self {
            ram,
            reads: Vec::new(),
            writes: Vec::new(),
            status: 0x80,
        }
    }
}

impl MemoryBus for TracingBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.reads.push(addr);
        if addr == STATUS_REG {
            // Reading acknowledges
            let value = self.status;
            self.status = 0;
            return value;
        }
        self.ram.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.writes.push((addr, value));
        self.ram.write(addr, value);
    }
}

#[test]
fn test_reset_vector_read_at_construction() {
    let cpu = CPU::new(TracingBus::new(&[]));

    assert_eq!(cpu.memory().reads, vec![0xFFFC, 0xFFFD]);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_read_side_effects_reach_device() {
    // LDA $D000; LDX $D000
    let mut cpu = CPU::new(TracingBus::new(&[0xAD, 0x00, 0xD0, 0xAE, 0x00, 0xD0]));

    cpu.step_instruction();
    cpu.step_instruction();

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_store_issues_single_write() {
    // LDA #$42; STA $0300
    let mut cpu = CPU::new(TracingBus::new(&[0xA9, 0x42, 0x8D, 0x00, 0x03]));

    cpu.step_instruction();
    cpu.step_instruction();

    assert_eq!(cpu.memory().writes, vec![(0x0300, 0x42)]);
}

#[test]
fn test_borrowed_bus_outlives_cpu() {
    let mut bus = TracingBus::new(&[0xA9, 0x01, 0x85, 0x10]);

    {
        let mut cpu = CPU::new(&mut bus);
        cpu.run_for_cycles(5);
    }

    assert_eq!(bus.ram.peek(0x0010), 0x01);
}

#[test]
fn test_into_memory_returns_bus() {
    let mut cpu = CPU::new(TracingBus::new(&[0xE6, 0x20]));
    cpu.step_instruction();

    let bus = cpu.into_memory();
    assert_eq!(bus.ram.peek(0x0020), 0x01);
}
