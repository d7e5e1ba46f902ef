//! Property tests for flag computation, addressing and the run loop.

use emu_core::{Cpu, MemoryBank};
use mos_6502::{CpuConfig, Mos6502, Registers, Status, flags};
use proptest::prelude::*;

const PROGRAM_BASE: u16 = 0x0200;

fn cpu_at(pc: u16) -> (Mos6502, MemoryBank) {
    let config = CpuConfig {
        reset_pc: pc,
        ..CpuConfig::default()
    };
    let mut cpu = Mos6502::with_config(config);
    let mut mem = MemoryBank::new();
    cpu.reset(&mut mem);
    (cpu, mem)
}

proptest! {
    #[test]
    fn lda_immediate_sets_only_n_and_z(value: u8, p: u8) {
        let (mut cpu, mut mem) = cpu_at(PROGRAM_BASE);
        mem.load(PROGRAM_BASE, &[0xA9, value]).expect("fits");
        cpu.regs.p = Status::from_byte(p);

        prop_assert_eq!(cpu.step(&mut mem), Ok(2));

        prop_assert_eq!(cpu.regs.a, value);
        prop_assert_eq!(cpu.regs.p.zero(), value == 0);
        prop_assert_eq!(cpu.regs.p.negative(), value & 0x80 != 0);
        let untouched = !(flags::N | flags::Z);
        prop_assert_eq!(cpu.regs.p.to_byte() & untouched, Status::from_byte(p).to_byte() & untouched);
    }

    #[test]
    fn zero_page_x_wraps_within_page_zero(base: u8, x: u8, value: u8) {
        let (mut cpu, mut mem) = cpu_at(PROGRAM_BASE);
        mem.load(PROGRAM_BASE, &[0xB5, base]).expect("fits");
        let target = base.wrapping_add(x);
        mem[u16::from(target)] = value;
        cpu.regs.x = x;

        prop_assert_eq!(cpu.step(&mut mem), Ok(4));
        prop_assert_eq!(cpu.regs.a, value);
    }

    #[test]
    fn reset_is_idempotent_from_any_state(
        a: u8, x: u8, y: u8, sp: u16, pc: u16, p: u8,
        writes in prop::collection::vec((any::<u16>(), any::<u8>()), 0..32),
    ) {
        let mut cpu = Mos6502::new();
        let mut mem = MemoryBank::new();
        cpu.regs = Registers { a, x, y, sp, pc, p: Status::from_byte(p) };
        for (addr, value) in writes {
            mem[addr] = value;
        }

        cpu.reset(&mut mem);
        let regs = cpu.regs;
        let image = mem.as_slice().to_vec();
        cpu.reset(&mut mem);

        prop_assert_eq!(cpu.regs, regs);
        prop_assert_eq!(cpu.regs, Registers::new(0xFFFC, 0x0100));
        prop_assert_eq!(mem.as_slice(), &image[..]);
        prop_assert!(image.iter().all(|&b| b == 0));
    }

    #[test]
    fn execute_overruns_by_less_than_one_instruction(budget in 0u32..400) {
        // A run of 2-cycle LDA #imm instructions
        let (mut cpu, mut mem) = cpu_at(PROGRAM_BASE);
        let program: Vec<u8> = [0xA9, 0x01].repeat(256);
        mem.load(PROGRAM_BASE, &program).expect("fits");

        let used = cpu.execute(&mut mem, budget).expect("no fault");

        prop_assert!(used >= budget);
        prop_assert!(used - budget < 2);
        prop_assert_eq!(used % 2, 0);
        prop_assert_eq!(u64::from(used), cpu.total_cycles());
    }
}
