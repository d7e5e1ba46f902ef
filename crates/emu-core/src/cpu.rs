//! CPU core trait and the cycle-budgeted run loop.

use thiserror::Error;
use tracing::{debug, warn};

use crate::Bus;

/// A fault raised part-way through an [`Cpu::execute`] call.
///
/// `cycles_used` counts only the instructions that completed before the
/// fault; the faulting instruction contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{fault} (after {cycles_used} cycles)")]
pub struct ExecuteError<F: std::error::Error + 'static> {
    #[source]
    pub fault: F,
    pub cycles_used: u32,
}

/// A CPU that executes whole instructions against a bus.
///
/// The type parameter `B` is the bus type this CPU operates on.
pub trait Cpu<B: Bus> {
    /// Decode or bus fault that stops execution.
    type Fault: std::error::Error + 'static;

    /// Put the CPU and the bus into their power-on state.
    fn reset(&mut self, bus: &mut B);

    /// Execute one instruction. Returns cycles consumed.
    ///
    /// On error the CPU is left as it was before the opcode fetch.
    fn step(&mut self, bus: &mut B) -> Result<u32, Self::Fault>;

    /// Get the current program counter.
    fn pc(&self) -> u16;

    /// Run whole instructions until `budget` cycles have been spent.
    ///
    /// The budget is only checked between instructions, so the final
    /// instruction always completes and the returned count may exceed
    /// `budget`. The overrun is not carried into the next call.
    fn execute(&mut self, bus: &mut B, budget: u32) -> Result<u32, ExecuteError<Self::Fault>> {
        let mut used: u32 = 0;
        while used < budget {
            match self.step(bus) {
                Ok(cycles) => used = used.saturating_add(cycles),
                Err(fault) => {
                    warn!(pc = self.pc(), cycles_used = used, %fault, "execution halted");
                    return Err(ExecuteError {
                        fault,
                        cycles_used: used,
                    });
                }
            }
        }
        debug!(budget, used, pc = self.pc(), "budget exhausted");
        Ok(used)
    }
}
