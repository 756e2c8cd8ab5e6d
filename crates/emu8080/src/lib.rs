//! Instruction-level Intel 8080 emulator core.
//!
//! The model is deliberately small: a [`Memory`] covering the full
//! 64 KiB address space and a [`Cpu`] that fetches, decodes and executes
//! one instruction per [`Cpu::step`] call, reporting the T-states it
//! consumed. Port IO is a host-supplied boundary (the [`PortIo`] trait);
//! the core never interprets port numbers itself.

pub mod cpu;
pub mod disasm;
pub mod error;
pub mod memory;

pub use cpu::{Cpu, Flags, PortIo};
pub use error::CpuError;
pub use memory::{Memory, MEMORY_SIZE};
