//! Core traits and types for cycle-counted CPU emulation.
//!
//! A CPU core executes whole instructions against a [`Bus`] and reports how
//! many cycles each one cost. [`Cpu::execute`] drives a core against a cycle
//! budget. [`MemoryBank`] is the flat 64 KiB RAM most tests and hosts use.

mod bus;
mod cpu;
mod memory;
mod observable;

pub use bus::{ADDRESS_SPACE, Bus, BusError};
pub use cpu::{Cpu, ExecuteError};
pub use memory::{LoadError, MemoryBank};
pub use observable::{Observable, Value};
