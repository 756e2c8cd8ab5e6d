//! Intel 8080 instruction engine.
//!
//! One [`Cpu::step`] call performs a single fetch-decode-execute cycle (or
//! one interrupt dispatch) against a caller-owned [`Memory`] and a
//! host-supplied [`PortIo`] boundary, and returns the T-states consumed.
//! Decode follows the documented bit-field conventions: a 3-bit register
//! field (110 reserved for memory via HL, always handled by a dedicated
//! match arm), a 2-bit register-pair field in bits 5–4, and a 3-bit
//! condition field in bits 5–3.

use std::collections::VecDeque;

use crate::disasm::MNEMONICS;
use crate::error::CpuError;
use crate::memory::Memory;

/// Host-supplied port IO boundary.
///
/// OUT and IN invoke these synchronously. Both hooks receive the engine and
/// the memory so a handler can implement software conventions that reach
/// into machine state, e.g. CP/M BDOS console output reading a
/// `$`-terminated string through the DE pair. The engine itself never
/// interprets port numbers; the default bodies reject every access.
pub trait PortIo {
    fn read_port(&mut self, _cpu: &mut Cpu, _mem: &mut Memory, port: u8) -> Result<u8, CpuError> {
        Err(CpuError::UnhandledPortRead { port })
    }

    fn write_port(
        &mut self,
        _cpu: &mut Cpu,
        _mem: &mut Memory,
        port: u8,
        _value: u8,
    ) -> Result<(), CpuError> {
        Err(CpuError::UnhandledPortWrite { port })
    }
}

/// CPU flags for the Intel 8080.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,  // zero
    pub s: bool,  // sign
    pub p: bool,  // parity (set on even parity)
    pub cy: bool, // carry
    pub ac: bool, // auxiliary carry
}

impl Flags {
    /// Pack into the program status word byte.
    ///
    /// Layout: bit 0 = CY, bit 1 always one, bit 2 = P, bit 4 = AC,
    /// bit 6 = Z, bit 7 = S; bits 3 and 5 are always zero.
    pub fn to_psw(self) -> u8 {
        let mut psw = 0x02u8;
        if self.cy {
            psw |= 0x01;
        }
        if self.p {
            psw |= 0x04;
        }
        if self.ac {
            psw |= 0x10;
        }
        if self.z {
            psw |= 0x40;
        }
        if self.s {
            psw |= 0x80;
        }
        psw
    }

    /// Restore every flag from its documented bit position.
    pub fn set_from_psw(&mut self, psw: u8) {
        self.cy = psw & 0x01 != 0;
        self.p = psw & 0x04 != 0;
        self.ac = psw & 0x10 != 0;
        self.z = psw & 0x40 != 0;
        self.s = psw & 0x80 != 0;
    }
}

/// Intel 8080 CPU state and instruction engine.
///
/// Register pairs are the single source of truth: B/C, D/E and H/L are
/// computed views over the 16-bit `bc`/`de`/`hl` cells, so a write through
/// either view is always reflected by the other. PC and SP are `u16`, so
/// every write wraps modulo 65536 like the real address bus.
#[derive(Default)]
pub struct Cpu {
    pub a: u8,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub sp: u16,
    pub pc: u16,
    pub flags: Flags,
    pub interrupts_enabled: bool,
    /// Cumulative T-state count; wraps on overflow rather than trapping.
    pub num_cycles: u64,
    interrupts: VecDeque<u8>,
    trace: Option<String>,
}

impl Cpu {
    /// Create a CPU in power-on state (all registers zero, interrupts
    /// disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all state back to power-on values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Half-register views over the pair cells.

    #[inline]
    pub fn b(&self) -> u8 {
        (self.bc >> 8) as u8
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.bc = (self.bc & 0x00FF) | (u16::from(value) << 8);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        self.bc as u8
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.bc = (self.bc & 0xFF00) | u16::from(value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        (self.de >> 8) as u8
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.de = (self.de & 0x00FF) | (u16::from(value) << 8);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        self.de as u8
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.de = (self.de & 0xFF00) | u16::from(value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        (self.hl >> 8) as u8
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.hl = (self.hl & 0x00FF) | (u16::from(value) << 8);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        self.hl as u8
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.hl = (self.hl & 0xFF00) | u16::from(value);
    }

    /// Accumulator concatenated with the packed status word, as pushed by
    /// PUSH PSW.
    #[inline]
    pub fn af(&self) -> u16 {
        (u16::from(self.a) << 8) | u16::from(self.flags.to_psw())
    }

    /// Queue an opcode (conventionally an RST) for delivery in place of the
    /// next fetch.
    ///
    /// Requests made while interrupts are disabled are dropped, matching
    /// the edge-triggered hardware gated by the enable flip-flop.
    pub fn request_interrupt(&mut self, opcode: u8) {
        if self.interrupts_enabled {
            self.interrupts.push_back(opcode);
        } else {
            log::trace!(
                "interrupt request {:#04X} dropped while interrupts are disabled",
                opcode
            );
        }
    }

    /// Diagnostic line for the most recent non-interrupt fetch.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    // Fetch helpers. Operand reads go through these so PC always advances
    // past the full instruction before execution.

    fn fetch_byte(&mut self, mem: &Memory) -> u8 {
        let byte = mem.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    fn fetch_word(&mut self, mem: &Memory) -> u16 {
        let word = mem.read_word(self.pc);
        self.pc = self.pc.wrapping_add(2);
        word
    }

    // Register-field decode helpers. The memory operand (field 110) never
    // routes through these; dedicated match arms handle it.

    fn read_source(&self, opcode: u8) -> u8 {
        match opcode & 0b111 {
            0b111 => self.a,
            0b000 => self.b(),
            0b001 => self.c(),
            0b010 => self.d(),
            0b011 => self.e(),
            0b100 => self.h(),
            0b101 => self.l(),
            field => unreachable!("source field {:03b} has no register", field),
        }
    }

    fn read_destination(&self, opcode: u8) -> u8 {
        match (opcode >> 3) & 0b111 {
            0b111 => self.a,
            0b000 => self.b(),
            0b001 => self.c(),
            0b010 => self.d(),
            0b011 => self.e(),
            0b100 => self.h(),
            0b101 => self.l(),
            field => unreachable!("destination field {:03b} has no register", field),
        }
    }

    fn write_destination(&mut self, opcode: u8, value: u8) {
        match (opcode >> 3) & 0b111 {
            0b111 => self.a = value,
            0b000 => self.set_b(value),
            0b001 => self.set_c(value),
            0b010 => self.set_d(value),
            0b011 => self.set_e(value),
            0b100 => self.set_h(value),
            0b101 => self.set_l(value),
            field => unreachable!("destination field {:03b} has no register", field),
        }
    }

    fn read_pair(&self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0b11 {
            0b00 => self.bc,
            0b01 => self.de,
            0b10 => self.hl,
            _ => self.sp,
        }
    }

    fn write_pair(&mut self, opcode: u8, value: u16) {
        match (opcode >> 4) & 0b11 {
            0b00 => self.bc = value,
            0b01 => self.de = value,
            0b10 => self.hl = value,
            _ => self.sp = value,
        }
    }

    fn condition_met(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0b111 {
            0b000 => !self.flags.z,
            0b001 => self.flags.z,
            0b010 => !self.flags.cy,
            0b011 => self.flags.cy,
            0b100 => !self.flags.p,
            0b101 => self.flags.p,
            0b110 => !self.flags.s,
            _ => self.flags.s,
        }
    }

    // ALU helpers. Every arithmetic/logical group funnels through these so
    // the joint flag semantics live in one place.

    fn set_zsp(&mut self, result: u8) {
        self.flags.z = result == 0;
        self.flags.s = result & 0x80 != 0;
        self.flags.p = result.count_ones() % 2 == 0;
    }

    fn add(&mut self, value: u8, carry_in: u8) -> u8 {
        let a = self.a;
        let result = u16::from(a) + u16::from(value) + u16::from(carry_in);
        self.set_zsp(result as u8);
        self.flags.cy = result > 0xFF;
        self.flags.ac = (a & 0x0F) + (value & 0x0F) + carry_in > 0x0F;
        result as u8
    }

    fn subtract(&mut self, value: u8, borrow_in: u8) -> u8 {
        let a = self.a;
        let result = a.wrapping_sub(value).wrapping_sub(borrow_in);
        self.set_zsp(result);
        self.flags.cy = u16::from(a) < u16::from(value) + u16::from(borrow_in);
        // 8080 half-borrow convention: AC is set unless the low nibble
        // borrows.
        self.flags.ac = i16::from(a & 0x0F) - i16::from(value & 0x0F) - i16::from(borrow_in) >= 0;
        result
    }

    fn and(&mut self, value: u8) {
        // 8080 quirk: AC takes bit 3 of (A | operand). The 8085 always sets
        // it instead.
        self.flags.ac = (self.a | value) & 0x08 != 0;
        self.a &= value;
        self.set_zsp(self.a);
        self.flags.cy = false;
    }

    fn xor(&mut self, value: u8) {
        self.a ^= value;
        self.set_zsp(self.a);
        self.flags.cy = false;
        self.flags.ac = false;
    }

    fn or(&mut self, value: u8) {
        self.a |= value;
        self.set_zsp(self.a);
        self.flags.cy = false;
        self.flags.ac = false;
    }

    fn inr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_zsp(result);
        self.flags.ac = (value & 0x0F) + 1 > 0x0F;
        // Carry is not affected by INR.
        result
    }

    fn dcr(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_zsp(result);
        self.flags.ac = value & 0x0F != 0;
        // Carry is not affected by DCR.
        result
    }

    // Stack helpers. CALL/RST push the address already advanced past the
    // full instruction.

    fn push_word(&mut self, mem: &mut Memory, value: u16) {
        self.sp = self.sp.wrapping_sub(2);
        mem.write_word(self.sp, value);
    }

    fn pop_word(&mut self, mem: &Memory) -> u16 {
        let value = mem.read_word(self.sp);
        self.sp = self.sp.wrapping_add(2);
        value
    }

    fn trace_line(&self, mem: &Memory) -> String {
        let bytes = mem.read_bytes(self.pc, 4);
        let upcoming: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
        format!(
            "PC: {:04X}, AF: {:04X}, BC: {:04X}, DE: {:04X}, HL: {:04X}, SP: {:04X}, CYC: {}\t({}) ### {}",
            self.pc,
            self.af(),
            self.bc,
            self.de,
            self.hl,
            self.sp,
            self.num_cycles,
            upcoming.join(" "),
            MNEMONICS[bytes[0] as usize],
        )
    }

    /// Execute one instruction (or dispatch one pending interrupt) and
    /// return the T-states consumed.
    ///
    /// A pending interrupt opcode is injected in place of the fetch: it is
    /// popped FIFO, interrupts are disabled, PC is left untouched and the
    /// opcode executes exactly like a fetched instruction, cycle cost
    /// included. The trace line refreshes only on real fetches.
    pub fn step<P: PortIo>(&mut self, mem: &mut Memory, ports: &mut P) -> Result<u32, CpuError> {
        let opcode = if let Some(injected) = self.interrupts.pop_front() {
            self.interrupts_enabled = false;
            injected
        } else {
            let fetched = mem.read_byte(self.pc);
            self.trace = Some(self.trace_line(mem));
            self.pc = self.pc.wrapping_add(1);
            fetched
        };

        let cycles: u32 = match opcode {
            // NOP, including the undocumented aliases.
            0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => 4,

            // Data transfer group.

            // HLT. The halted-wait state is not modeled; diagnostics never
            // rely on it.
            0x76 => 7,

            // MOV r, M
            0x46 | 0x4E | 0x56 | 0x5E | 0x66 | 0x6E | 0x7E => {
                let value = mem.read_byte(self.hl);
                self.write_destination(opcode, value);
                7
            }

            // MOV M, r
            0x70..=0x75 | 0x77 => {
                mem.write_byte(self.hl, self.read_source(opcode));
                7
            }

            // MOV r1, r2
            0x40..=0x7F => {
                let value = self.read_source(opcode);
                self.write_destination(opcode, value);
                5
            }

            // MVI r, data
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x3E => {
                let value = self.fetch_byte(mem);
                self.write_destination(opcode, value);
                7
            }

            // MVI M, data
            0x36 => {
                let value = self.fetch_byte(mem);
                mem.write_byte(self.hl, value);
                10
            }

            // LXI rp, data16
            0x01 | 0x11 | 0x21 | 0x31 => {
                let value = self.fetch_word(mem);
                self.write_pair(opcode, value);
                10
            }

            // LDA addr
            0x3A => {
                let addr = self.fetch_word(mem);
                self.a = mem.read_byte(addr);
                13
            }

            // STA addr
            0x32 => {
                let addr = self.fetch_word(mem);
                mem.write_byte(addr, self.a);
                13
            }

            // LHLD addr
            0x2A => {
                let addr = self.fetch_word(mem);
                self.hl = mem.read_word(addr);
                16
            }

            // SHLD addr
            0x22 => {
                let addr = self.fetch_word(mem);
                mem.write_word(addr, self.hl);
                16
            }

            // LDAX rp (BC or DE)
            0x0A | 0x1A => {
                self.a = mem.read_byte(self.read_pair(opcode));
                7
            }

            // STAX rp (BC or DE)
            0x02 | 0x12 => {
                mem.write_byte(self.read_pair(opcode), self.a);
                7
            }

            // XCHG
            0xEB => {
                std::mem::swap(&mut self.hl, &mut self.de);
                4
            }

            // Arithmetic group.

            // ADD M
            0x86 => {
                let value = mem.read_byte(self.hl);
                self.a = self.add(value, 0);
                7
            }

            // ADD r
            0x80..=0x87 => {
                let value = self.read_source(opcode);
                self.a = self.add(value, 0);
                4
            }

            // ADI data
            0xC6 => {
                let value = self.fetch_byte(mem);
                self.a = self.add(value, 0);
                7
            }

            // ADC M
            0x8E => {
                let value = mem.read_byte(self.hl);
                let carry = u8::from(self.flags.cy);
                self.a = self.add(value, carry);
                7
            }

            // ADC r
            0x88..=0x8F => {
                let value = self.read_source(opcode);
                let carry = u8::from(self.flags.cy);
                self.a = self.add(value, carry);
                4
            }

            // ACI data
            0xCE => {
                let value = self.fetch_byte(mem);
                let carry = u8::from(self.flags.cy);
                self.a = self.add(value, carry);
                7
            }

            // SUB M
            0x96 => {
                let value = mem.read_byte(self.hl);
                self.a = self.subtract(value, 0);
                7
            }

            // SUB r
            0x90..=0x97 => {
                let value = self.read_source(opcode);
                self.a = self.subtract(value, 0);
                4
            }

            // SUI data
            0xD6 => {
                let value = self.fetch_byte(mem);
                self.a = self.subtract(value, 0);
                7
            }

            // SBB M
            0x9E => {
                let value = mem.read_byte(self.hl);
                let borrow = u8::from(self.flags.cy);
                self.a = self.subtract(value, borrow);
                7
            }

            // SBB r
            0x98..=0x9F => {
                let value = self.read_source(opcode);
                let borrow = u8::from(self.flags.cy);
                self.a = self.subtract(value, borrow);
                4
            }

            // SBI data
            0xDE => {
                let value = self.fetch_byte(mem);
                let borrow = u8::from(self.flags.cy);
                self.a = self.subtract(value, borrow);
                7
            }

            // INR r
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x3C => {
                let value = self.read_destination(opcode);
                let result = self.inr(value);
                self.write_destination(opcode, result);
                5
            }

            // INR M
            0x34 => {
                let value = mem.read_byte(self.hl);
                let result = self.inr(value);
                mem.write_byte(self.hl, result);
                10
            }

            // DCR r
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x3D => {
                let value = self.read_destination(opcode);
                let result = self.dcr(value);
                self.write_destination(opcode, result);
                5
            }

            // DCR M
            0x35 => {
                let value = mem.read_byte(self.hl);
                let result = self.dcr(value);
                mem.write_byte(self.hl, result);
                10
            }

            // INX rp
            0x03 | 0x13 | 0x23 | 0x33 => {
                let value = self.read_pair(opcode).wrapping_add(1);
                self.write_pair(opcode, value);
                5
            }

            // DCX rp
            0x0B | 0x1B | 0x2B | 0x3B => {
                let value = self.read_pair(opcode).wrapping_sub(1);
                self.write_pair(opcode, value);
                5
            }

            // DAD rp
            0x09 | 0x19 | 0x29 | 0x39 => {
                let sum = u32::from(self.hl) + u32::from(self.read_pair(opcode));
                self.flags.cy = sum > 0xFFFF;
                self.hl = sum as u16;
                10
            }

            // DAA
            0x27 => {
                let lsb = self.a & 0x0F;
                let msb = self.a & 0xF0;
                let mut correction = 0u8;
                let mut carry = self.flags.cy;

                if lsb > 9 || self.flags.ac {
                    correction += 0x06;
                }
                if msb > 0x90 || self.flags.cy || (msb >= 0x90 && lsb > 9) {
                    correction += 0x60;
                    carry = true;
                }

                // Route the correction through the normal add path so
                // Z/S/P/AC update, then force the computed carry.
                self.a = self.add(correction, 0);
                self.flags.cy = carry;
                4
            }

            // Logical group.

            // ANA M
            0xA6 => {
                let value = mem.read_byte(self.hl);
                self.and(value);
                7
            }

            // ANA r
            0xA0..=0xA7 => {
                let value = self.read_source(opcode);
                self.and(value);
                4
            }

            // ANI data
            0xE6 => {
                let value = self.fetch_byte(mem);
                self.and(value);
                7
            }

            // XRA M
            0xAE => {
                let value = mem.read_byte(self.hl);
                self.xor(value);
                7
            }

            // XRA r
            0xA8..=0xAF => {
                let value = self.read_source(opcode);
                self.xor(value);
                4
            }

            // XRI data
            0xEE => {
                let value = self.fetch_byte(mem);
                self.xor(value);
                7
            }

            // ORA M
            0xB6 => {
                let value = mem.read_byte(self.hl);
                self.or(value);
                7
            }

            // ORA r
            0xB0..=0xB7 => {
                let value = self.read_source(opcode);
                self.or(value);
                4
            }

            // ORI data
            0xF6 => {
                let value = self.fetch_byte(mem);
                self.or(value);
                7
            }

            // CMP M — flags only, the difference is discarded.
            0xBE => {
                let value = mem.read_byte(self.hl);
                self.subtract(value, 0);
                7
            }

            // CMP r
            0xB8..=0xBF => {
                let value = self.read_source(opcode);
                self.subtract(value, 0);
                4
            }

            // CPI data
            0xFE => {
                let value = self.fetch_byte(mem);
                self.subtract(value, 0);
                7
            }

            // RLC — rotate within the accumulator, carry takes the wrapped
            // bit.
            0x07 => {
                let bit7 = self.a >> 7;
                self.a = (self.a << 1) | bit7;
                self.flags.cy = bit7 != 0;
                4
            }

            // RRC
            0x0F => {
                let bit0 = self.a & 0x01;
                self.a = (self.a >> 1) | (bit0 << 7);
                self.flags.cy = bit0 != 0;
                4
            }

            // RAL — 9-bit rotate through the existing carry.
            0x17 => {
                let bit7 = self.a >> 7;
                self.a = (self.a << 1) | u8::from(self.flags.cy);
                self.flags.cy = bit7 != 0;
                4
            }

            // RAR
            0x1F => {
                let bit0 = self.a & 0x01;
                self.a = (self.a >> 1) | (u8::from(self.flags.cy) << 7);
                self.flags.cy = bit0 != 0;
                4
            }

            // CMA — no flags affected.
            0x2F => {
                self.a = !self.a;
                4
            }

            // CMC
            0x3F => {
                self.flags.cy = !self.flags.cy;
                4
            }

            // STC
            0x37 => {
                self.flags.cy = true;
                4
            }

            // Branch group.

            // JMP addr
            0xC3 => {
                self.pc = self.fetch_word(mem);
                10
            }

            // Jcondition addr — same cost taken or not.
            0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => {
                let addr = self.fetch_word(mem);
                if self.condition_met(opcode) {
                    self.pc = addr;
                }
                10
            }

            // CALL addr
            0xCD => {
                let addr = self.fetch_word(mem);
                self.push_word(mem, self.pc);
                self.pc = addr;
                17
            }

            // Ccondition addr
            0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
                let addr = self.fetch_word(mem);
                if self.condition_met(opcode) {
                    self.push_word(mem, self.pc);
                    self.pc = addr;
                    17
                } else {
                    11
                }
            }

            // RET
            0xC9 => {
                self.pc = self.pop_word(mem);
                10
            }

            // Rcondition
            0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => {
                if self.condition_met(opcode) {
                    self.pc = self.pop_word(mem);
                    11
                } else {
                    5
                }
            }

            // RST n — call to vector 8 * n.
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
                self.push_word(mem, self.pc);
                self.pc = u16::from(opcode & 0x38);
                11
            }

            // PCHL
            0xE9 => {
                self.pc = self.hl;
                5
            }

            // Stack, IO and machine control group.

            // PUSH rp
            0xC5 | 0xD5 | 0xE5 => {
                let value = self.read_pair(opcode);
                self.push_word(mem, value);
                11
            }

            // PUSH PSW — two byte writes, A lands at the higher address.
            0xF5 => {
                self.sp = self.sp.wrapping_sub(1);
                mem.write_byte(self.sp, self.a);
                self.sp = self.sp.wrapping_sub(1);
                mem.write_byte(self.sp, self.flags.to_psw());
                11
            }

            // POP rp
            0xC1 | 0xD1 | 0xE1 => {
                let value = self.pop_word(mem);
                self.write_pair(opcode, value);
                10
            }

            // POP PSW
            0xF1 => {
                let psw = mem.read_byte(self.sp);
                self.flags.set_from_psw(psw);
                self.sp = self.sp.wrapping_add(1);
                self.a = mem.read_byte(self.sp);
                self.sp = self.sp.wrapping_add(1);
                10
            }

            // XTHL — exchange HL with the word at SP in place.
            0xE3 => {
                let top = mem.read_word(self.sp);
                mem.write_word(self.sp, self.hl);
                self.hl = top;
                18
            }

            // SPHL
            0xF9 => {
                self.sp = self.hl;
                5
            }

            // IN port
            0xDB => {
                let port = self.fetch_byte(mem);
                let value = ports.read_port(self, mem, port)?;
                self.a = value;
                10
            }

            // OUT port
            0xD3 => {
                let port = self.fetch_byte(mem);
                let value = self.a;
                ports.write_port(self, mem, port, value)?;
                10
            }

            // EI
            0xFB => {
                self.interrupts_enabled = true;
                4
            }

            // DI
            0xF3 => {
                self.interrupts_enabled = false;
                4
            }

            _ => {
                log::error!(
                    "illegal opcode {:#04X} ({:08b}) at PC {:#06X}",
                    opcode,
                    opcode,
                    self.pc.wrapping_sub(1)
                );
                return Err(CpuError::IllegalOpcode {
                    opcode,
                    mnemonic: MNEMONICS[opcode as usize],
                });
            }
        };

        self.num_cycles = self.num_cycles.wrapping_add(u64::from(cycles));
        Ok(cycles)
    }
}
