//! Byte-addressable memory for the 8080.
//!
//! The array always spans the full 16-bit address space, so no access can
//! go out of bounds; addresses simply wrap modulo 64 KiB, mirroring the
//! width of the real address bus.

/// Total addressable memory size (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// A flat 64 KiB memory with byte and little-endian word accessors.
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }
}

impl Memory {
    /// Create a zero-filled memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install one or more byte segments back to back starting at `offset`.
    ///
    /// Used by the host to place a binary image before execution starts;
    /// the CPU itself never calls this. Writes wrap past 0xFFFF like every
    /// other access.
    pub fn load(&mut self, segments: &[&[u8]], offset: u16) {
        let mut addr = offset;
        for segment in segments {
            for &byte in *segment {
                self.write_byte(addr, byte);
                addr = addr.wrapping_add(1);
            }
        }
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Read a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read_byte(addr), self.read_byte(addr.wrapping_add(1))])
    }

    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    /// Read `len` consecutive bytes starting at `addr`, wrapping at the top
    /// of the address space. Diagnostics only (trace lines).
    pub fn read_bytes(&self, addr: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| self.read_byte(addr.wrapping_add(i as u16)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_little_endian() {
        let mut mem = Memory::new();
        mem.write_word(0x1234, 0xBEEF);
        assert_eq!(mem.read_byte(0x1234), 0xEF);
        assert_eq!(mem.read_byte(0x1235), 0xBE);
        assert_eq!(mem.read_word(0x1234), 0xBEEF);
    }

    #[test]
    fn word_access_wraps_at_top_of_address_space() {
        let mut mem = Memory::new();
        mem.write_word(0xFFFF, 0xABCD);
        assert_eq!(mem.read_byte(0xFFFF), 0xCD);
        assert_eq!(mem.read_byte(0x0000), 0xAB);
        assert_eq!(mem.read_word(0xFFFF), 0xABCD);
    }

    #[test]
    fn load_places_segments_back_to_back() {
        let mut mem = Memory::new();
        mem.load(&[&[0x01, 0x02], &[0x03]], 0x0100);
        assert_eq!(mem.read_byte(0x0100), 0x01);
        assert_eq!(mem.read_byte(0x0101), 0x02);
        assert_eq!(mem.read_byte(0x0102), 0x03);
    }

    #[test]
    fn read_bytes_wraps() {
        let mut mem = Memory::new();
        mem.write_byte(0xFFFF, 0xAA);
        mem.write_byte(0x0000, 0xBB);
        assert_eq!(mem.read_bytes(0xFFFF, 2), vec![0xAA, 0xBB]);
    }
}
