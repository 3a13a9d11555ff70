use std::io;

use miette::{miette, Report, Severity};

// Loader errors

pub fn load_too_short(len: usize) -> Report {
    miette!(
        severity = Severity::Error,
        code = "load::too_short",
        help = "object files start with a two-byte big-endian origin address",
        "Image stream is too short ({len} bytes)",
    )
}

pub fn load_too_long(orig: u16, words: usize) -> Report {
    miette!(
        severity = Severity::Error,
        code = "load::too_long",
        help = "the last usable memory address is 0xFFFF",
        "Image with origin 0x{orig:04X} and {words} words does not fit in memory",
    )
}

// Runtime errors

pub fn exec_reserved(opcode: u16, addr: u16) -> Report {
    miette!(
        severity = Severity::Error,
        code = "exec::reserved",
        help = "opcodes 0x8 (RTI) and 0xD are reserved and cannot appear in user programs",
        "Encountered reserved opcode 0x{opcode:X} at address 0x{addr:04X}",
    )
}

pub fn exec_unknown_trap(vect: u16, addr: u16) -> Report {
    miette!(
        severity = Severity::Error,
        code = "exec::trap",
        help = "valid trap vectors are 0x20 to 0x25",
        "Encountered unknown trap vector 0x{vect:02X} at address 0x{addr:04X}",
    )
}

pub fn exec_io(err: io::Error) -> Report {
    miette!(
        severity = Severity::Error,
        code = "exec::io",
        help = "the host terminal may have closed mid-run",
        "Console IO failed: {err}",
    )
}
