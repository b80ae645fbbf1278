//! Derivation of unbiased outcomes from revealed secrets.

use crate::crypto::Secret;
use crate::error::ProtocolError;
use sha2::{Digest, Sha256};

fn digest(secret: &Secret) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.finalize().into()
}

/// Derive one unbiased bit from two independently committed secrets.
///
/// Each secret is hashed independently, the low bit of the final digest byte
/// is taken from each, and the two bits are XORed. If either secret was drawn
/// uniformly at random and independently of the other, the result is uniform
/// over {0, 1} no matter how the other secret was chosen.
///
/// Both commitments must be published before either secret is revealed;
/// enforcing that ordering is the round layer's contract, not this function's.
pub fn fair_bit(a: &Secret, b: &Secret) -> u8 {
    let bit_a = digest(a)[31] & 1;
    let bit_b = digest(b)[31] & 1;
    bit_a ^ bit_b
}

/// Derive a uniform index in `[0, range)` from a revealed secret.
///
/// The first 16 digest bytes are read as a big-endian u128 and reduced modulo
/// `range`. For any range below 2^32 the resulting modulo bias is under 2^-96
/// relative, which is accepted and documented rather than corrected.
pub fn fair_index(secret: &Secret, range: usize) -> Result<usize, ProtocolError> {
    if range == 0 {
        return Err(ProtocolError::InvalidRange { range });
    }

    let d = digest(secret);
    let mut prefix = [0u8; 16];
    prefix.copy_from_slice(&d[..16]);
    let value = u128::from_be_bytes(prefix);

    Ok((value % range as u128) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fair_bit_is_binary() {
        let a = Secret::from_bytes([1u8; 32]);
        let b = Secret::from_bytes([2u8; 32]);

        assert!(fair_bit(&a, &b) <= 1);
    }

    #[test]
    fn test_fair_bit_is_symmetric() {
        let a = Secret::from_bytes([3u8; 32]);
        let b = Secret::from_bytes([4u8; 32]);

        assert_eq!(fair_bit(&a, &b), fair_bit(&b, &a));
    }

    #[test]
    fn test_fair_bit_same_secret_is_zero() {
        // x XOR x == 0
        let a = Secret::from_bytes([5u8; 32]);

        assert_eq!(fair_bit(&a, &a), 0);
    }

    #[test]
    fn test_fair_index_stays_in_range() {
        let secrets: Vec<Secret> = (0u8..100).map(|i| Secret::from_bytes([i; 32])).collect();

        for range in [1, 2, 3, 6, 7, 100, 65_536] {
            for secret in &secrets {
                let index = fair_index(secret, range).unwrap();
                assert!(index < range);
            }
        }
    }

    #[test]
    fn test_fair_index_range_one_is_zero() {
        let secret = Secret::from_bytes([9u8; 32]);

        assert_eq!(fair_index(&secret, 1).unwrap(), 0);
    }

    #[test]
    fn test_fair_index_zero_range_is_invalid() {
        let secret = Secret::from_bytes([9u8; 32]);
        let err = fair_index(&secret, 0).unwrap_err();

        assert!(matches!(err, ProtocolError::InvalidRange { range: 0 }));
    }

    #[test]
    fn test_fair_index_is_deterministic() {
        let secret = Secret::from_bytes([42u8; 32]);

        assert_eq!(
            fair_index(&secret, 6).unwrap(),
            fair_index(&secret, 6).unwrap()
        );
    }
}
