//! Address encoding and application account derivation

use data_encoding::BASE32_NOPAD;

use crate::constants::address::{ADDRESS_LENGTH, APP_ID_PREFIX, CHECKSUM_LENGTH, PUBLIC_KEY_LENGTH};
use crate::models::{Address, AppId};
use crate::utils::hash::sha512_256;

/// Encode a public key as an address: base32 of the key followed by the
/// last four bytes of its digest, without padding
pub fn encode_address(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> Address {
    let digest = sha512_256(public_key);
    let mut bytes = Vec::with_capacity(PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH);
    bytes.extend_from_slice(public_key);
    bytes.extend_from_slice(&digest[digest.len() - CHECKSUM_LENGTH..]);
    
    let encoded = BASE32_NOPAD.encode(&bytes);
    debug_assert_eq!(encoded.len(), ADDRESS_LENGTH);
    Address::new(encoded)
}

/// Account controlled by an application
pub fn application_address(application_id: AppId) -> Address {
    let mut preimage = Vec::with_capacity(APP_ID_PREFIX.len() + 8);
    preimage.extend_from_slice(APP_ID_PREFIX);
    preimage.extend_from_slice(&application_id.to_be_bytes());
    encode_address(&sha512_256(&preimage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_address() {
        let address = encode_address(&[0u8; PUBLIC_KEY_LENGTH]);
        assert_eq!(address.as_str(), "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ");
    }

    #[test]
    fn test_address_round_trips_to_public_key() {
        let public_key = [7u8; PUBLIC_KEY_LENGTH];
        let address = encode_address(&public_key);
        let decoded = BASE32_NOPAD.decode(address.as_str().as_bytes()).unwrap();
        assert_eq!(decoded.len(), PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH);
        assert_eq!(&decoded[..PUBLIC_KEY_LENGTH], &public_key[..]);
    }

    #[test]
    fn test_application_address_is_stable() {
        let first = application_address(1234);
        assert_eq!(first.as_str().len(), ADDRESS_LENGTH);
        assert_eq!(first, application_address(1234));
        assert_ne!(first, application_address(1235));
    }
}
