//! CP/M diagnostic ROM harness.
//!
//! Runs the classic 8080 test programs (TST8080, CPUTEST, 8080PRE,
//! 8080EXM) as CP/M .COM images loaded at 0x0100, with two tiny stubs
//! patched into low memory: `OUT 0` at the reset vector signals test
//! completion (programs jump to 0x0000 when done), and `OUT 1` + `RET` at
//! the BDOS entry (0x0005) redirects console output to port 1 so the
//! harness can collect it.
//!
//! These tests need ROM images under `assets/roms/cpu_tests/` at the
//! workspace root and run for a long time (8080EXM executes tens of
//! billions of cycles), so they are ignored by default:
//! `cargo test -p emu8080 -- --ignored run_tst8080`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use emu8080::{Cpu, CpuError, Memory, PortIo};

#[derive(Default)]
struct CpmConsole {
    finished: bool,
    output: String,
}

impl PortIo for CpmConsole {
    fn write_port(
        &mut self,
        cpu: &mut Cpu,
        mem: &mut Memory,
        port: u8,
        _value: u8,
    ) -> Result<(), CpuError> {
        match port {
            // The stub at 0x0000: the program jumped back to the reset
            // vector, meaning it finished.
            0 => {
                self.finished = true;
                Ok(())
            }
            // The stub at 0x0005: a BDOS call, function number in C.
            1 => match cpu.c() {
                // C_WRITESTR: print the '$'-terminated string at DE.
                9 => {
                    let mut addr = cpu.de;
                    loop {
                        let ch = mem.read_byte(addr);
                        if ch == b'$' {
                            break;
                        }
                        self.output.push(char::from(ch));
                        addr = addr.wrapping_add(1);
                    }
                    Ok(())
                }
                // C_WRITE: print the character in E.
                2 => {
                    self.output.push(char::from(cpu.e()));
                    Ok(())
                }
                _ => Err(CpuError::UnhandledPortWrite { port }),
            },
            _ => Err(CpuError::UnhandledPortWrite { port }),
        }
    }
}

fn rom_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../assets/roms/cpu_tests")
        .join(name)
}

fn run_rom(name: &str) -> Result<String> {
    let _ = env_logger::builder().is_test(true).try_init();

    let path = rom_path(name);
    let rom = fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut mem = Memory::new();
    mem.load(&[&rom], 0x0100);
    mem.load(&[&[0xD3, 0x00]], 0x0000); // OUT 0
    mem.load(&[&[0xD3, 0x01, 0xC9]], 0x0005); // OUT 1; RET

    let mut cpu = Cpu::new();
    cpu.pc = 0x0100;

    let mut console = CpmConsole::default();
    while !console.finished {
        cpu.step(&mut mem, &mut console)
            .with_context(|| format!("last trace: {:?}", cpu.trace()))?;
    }

    log::info!("{name}: {} cycles", cpu.num_cycles);
    Ok(console.output)
}

#[test]
#[ignore]
fn run_tst8080() -> Result<()> {
    let output = run_rom("TST8080.COM")?;
    assert!(output.contains("CPU IS OPERATIONAL"), "{output}");
    Ok(())
}

#[test]
#[ignore]
fn run_8080pre() -> Result<()> {
    let output = run_rom("8080PRE.COM")?;
    assert!(output.contains("8080 Preliminary tests complete"), "{output}");
    Ok(())
}

#[test]
#[ignore]
fn run_cputest() -> Result<()> {
    let output = run_rom("CPUTEST.COM")?;
    assert!(output.contains("CPU TESTS OK"), "{output}");
    Ok(())
}

#[test]
#[ignore]
fn run_8080exm() -> Result<()> {
    let output = run_rom("8080EXM.COM")?;
    // The exerciser prints an error count per instruction group; any
    // mismatch shows up as a non-zero CRC line.
    assert!(!output.contains("ERROR"), "{output}");
    Ok(())
}
