//! Well-known application programs

use std::collections::HashSet;
use std::ops::RangeInclusive;
use once_cell::sync::Lazy;

/// TEAL opcodes used by fee-bump programs
pub mod opcodes {
    pub const PUSHINT: u8 = 0x81;     // Push an immediate uint64
}

/// Program versions a fee-bump program may declare (3 is the first with pushint)
pub const OP_UP_VERSIONS: RangeInclusive<u8> = 3..=15;

/// Bytes of `#pragma version N; pushint 1`, the approve-everything program
/// used by fee-bump (OpUp) applications, for every supported version
static OP_UP_PROGRAM_BYTES: Lazy<HashSet<Vec<u8>>> = Lazy::new(|| {
    OP_UP_VERSIONS
        .map(|version| vec![version, opcodes::PUSHINT, 1])
        .collect()
});

/// Whether a base64 program is a fee-bump program
///
/// Programs are compared by their decoded bytes so padding differences in the
/// upstream encoding do not matter.
pub fn is_op_up_program(program: &str) -> bool {
    match base64::decode(program.trim()) {
        Ok(bytes) => OP_UP_PROGRAM_BYTES.contains(&bytes),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_version_is_recognized() {
        for version in OP_UP_VERSIONS {
            let program = base64::encode([version, opcodes::PUSHINT, 1]);
            assert!(is_op_up_program(&program), "version {} not recognized", version);
        }
    }

    #[test]
    fn test_is_op_up_program() {
        assert!(is_op_up_program("A4EB"));
        assert!(is_op_up_program("CoEB"));
        assert!(is_op_up_program("D4EB"));
        assert!(!is_op_up_program("AoEB"), "version 2 has no pushint");
        assert!(!is_op_up_program("CoEC"));
        assert!(!is_op_up_program("not base64!"));
    }
}
