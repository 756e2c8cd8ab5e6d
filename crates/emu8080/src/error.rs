//! Fatal error conditions raised while stepping the CPU.

use thiserror::Error;

/// Errors returned by [`crate::Cpu::step`].
///
/// Both kinds are programmer/data errors with no recovery path: either the
/// loaded program reached a byte that matches no documented 8080 encoding,
/// or it touched a port the host never wired up.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The fetched byte matched no decode rule.
    #[error("illegal opcode {opcode:#04X} ({opcode:08b}) \"{mnemonic}\"")]
    IllegalOpcode {
        opcode: u8,
        /// Best-effort mnemonic from the disassembly table ("ill" for
        /// undocumented encodings).
        mnemonic: &'static str,
    },

    /// An IN instruction hit a port the host's [`crate::PortIo`]
    /// implementation does not handle.
    #[error("unhandled read from port {port:#04X}")]
    UnhandledPortRead { port: u8 },

    /// An OUT instruction hit a port the host's [`crate::PortIo`]
    /// implementation does not handle.
    #[error("unhandled write to port {port:#04X}")]
    UnhandledPortWrite { port: u8 },
}
