//! 6502 interpreter.
//!
//! Instruction-stepped execution: each step fetches one opcode, resolves its
//! operand and applies it whole, returning the instruction's cycle cost.

use emu_core::{Bus, BusError, Cpu, Observable, Value};
use tracing::{debug, trace};

use crate::addressing::Effective;
use crate::opcode::{self, Opcode, Operation};
use crate::{CpuConfig, Fault, Registers};

/// The MOS 6502 CPU.
#[derive(Debug, Clone)]
pub struct Mos6502 {
    /// CPU registers.
    pub regs: Registers,

    pub(crate) config: CpuConfig,

    /// Cycles consumed since the last reset.
    total_cycles: u64,
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mos6502 {
    /// Create a CPU in reset state with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    #[must_use]
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            regs: Registers::new(config.reset_pc, config.stack_base),
            config,
            total_cycles: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Cycles consumed by completed instructions since the last reset.
    #[must_use]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Fetch, decode and apply one instruction.
    ///
    /// Registers may be part-updated on error; `step` rolls them back.
    fn dispatch<B: Bus>(&mut self, bus: &mut B, pc: u16) -> Result<(&'static Opcode, u32), Fault> {
        let code = self.fetch(&*bus).map_err(|e| Fault::from_bus(e, pc))?;
        let op = opcode::lookup(code).ok_or(Fault::UnknownOpcode { opcode: code, pc })?;

        let effective = self
            .resolve(&*bus, op.mode)
            .map_err(|e| Fault::from_bus(e, pc))?;

        let applied = match op.operation {
            Operation::Lda => self.do_lda(&*bus, effective),
            Operation::Jsr => self.do_jsr(bus, effective),
        };
        applied.map_err(|e| Fault::from_bus(e, pc))?;

        let penalty = u32::from(effective.page_crossed);
        Ok((op, u32::from(op.cycles) + penalty))
    }

    // ========================================================================
    // Operations
    // ========================================================================

    fn do_lda<B: Bus>(&mut self, bus: &B, effective: Effective) -> Result<(), BusError> {
        let value = bus.read(effective.address)?;
        self.regs.a = value;
        self.regs.p.update_nz(value);
        Ok(())
    }

    /// JSR stores the address of its own last byte as a little-endian word at
    /// SP, then moves SP up by two.
    fn do_jsr<B: Bus>(&mut self, bus: &mut B, effective: Effective) -> Result<(), BusError> {
        let target = effective.address as u16;
        let return_addr = self.regs.pc.wrapping_sub(1);
        let addr = self.regs.push_word();
        bus.write_word(u32::from(addr), return_addr)?;
        self.regs.pc = target;
        Ok(())
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl<B: Bus> Cpu<B> for Mos6502 {
    type Fault = Fault;

    /// Reset registers from the configuration and zero-fill the bus.
    fn reset(&mut self, bus: &mut B) {
        self.regs = Registers::new(self.config.reset_pc, self.config.stack_base);
        self.total_cycles = 0;
        bus.initialize();
        debug!(pc = self.regs.pc, sp = self.regs.sp, "reset");
    }

    fn step(&mut self, bus: &mut B) -> Result<u32, Fault> {
        let saved = self.regs;
        let pc = saved.pc;
        match self.dispatch(bus, pc) {
            Ok((op, cycles)) => {
                self.total_cycles += u64::from(cycles);
                trace!(
                    pc,
                    opcode = op.code,
                    mnemonic = op.mnemonic(),
                    cycles,
                    a = self.regs.a,
                    "step"
                );
                Ok(cycles)
            }
            Err(fault) => {
                self.regs = saved;
                Err(fault)
            }
        }
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }
}

impl Observable for Mos6502 {
    fn query(&self, path: &str) -> Option<Value> {
        let p = self.regs.p;
        match path {
            "pc" => Some(self.regs.pc.into()),
            "sp" | "s" => Some(self.regs.sp.into()),
            "a" => Some(self.regs.a.into()),
            "x" => Some(self.regs.x.into()),
            "y" => Some(self.regs.y.into()),
            "p" | "status" => Some(p.to_byte().into()),
            "flags.c" | "c" => Some(p.carry().into()),
            "flags.z" | "z" => Some(p.zero().into()),
            "flags.i" | "i" => Some(p.interrupt_disable().into()),
            "flags.d" | "d" => Some(p.decimal().into()),
            "flags.b" | "b" => Some(p.break_flag().into()),
            "flags.v" | "v" => Some(p.overflow().into()),
            "flags.n" | "n" => Some(p.negative().into()),
            "cycles" => Some(self.total_cycles.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "pc", "sp", "a", "x", "y", "p", "flags.c", "flags.z", "flags.i", "flags.d", "flags.b",
            "flags.v", "flags.n", "cycles",
        ]
    }
}
