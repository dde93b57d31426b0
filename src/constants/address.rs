//! Address encoding constants

/// Domain separation prefix hashed with an application id to derive its account
pub const APP_ID_PREFIX: &[u8] = b"appID";

/// Length of a raw public key
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Number of trailing hash bytes appended to a public key as checksum
pub const CHECKSUM_LENGTH: usize = 4;

/// Length of an encoded address
pub const ADDRESS_LENGTH: usize = 58;
