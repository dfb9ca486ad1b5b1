// [libs/core/hashing/src/lib.rs]
/*!
 * =================================================================
 * APARATO: EXPRESSION HASHER (ESTRATO L1 - CORE)
 * RESPONSABILIDAD: DERIVAR PREFIJOS DE HASH DESDE EXPRESIONES DE URL
 *
 * Un "prefijo de hash" es el digest SHA-256 completo de una expresión
 * de URL canónica, truncado a sus primeros bytes. Dos longitudes
 * conviven: 4 bytes (u32, big-endian) para las listas "rápidas" y
 * 32 bytes completos (Uint256, big-endian) para las listas de baja
 * falsa-positividad.
 * =================================================================
 */

use aegis_core_uint256::Uint256;
use sha2::{Digest, Sha256};

/// Calcula el digest SHA-256 completo de `expression` como 32 bytes big-endian.
fn digest(expression: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(expression.as_bytes());
    hasher.finalize().into()
}

/// Prefijo de 4 bytes (primeros 4 bytes del digest, interpretados big-endian).
#[must_use]
pub fn hash_u32(expression: &str) -> u32 {
    let bytes = digest(expression);
    u32::from_be_bytes(bytes[0..4].try_into().unwrap())
}

/// Prefijo de 32 bytes completo, empacado como cuatro limbs big-endian.
#[must_use]
pub fn hash_u256(expression: &str) -> Uint256 {
    Uint256::from_be_bytes(digest(expression))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_u32_is_the_big_endian_prefix_of_the_sha256_digest() {
        let expr = "a.example.com/";
        let full = digest(expr);
        let expected = u32::from_be_bytes(full[0..4].try_into().unwrap());
        assert_eq!(hash_u32(expr), expected);
    }

    #[test]
    fn hash_u32_is_deterministic() {
        assert_eq!(hash_u32("https://example.com/"), hash_u32("https://example.com/"));
    }

    #[test]
    fn hash_u32_differs_for_different_expressions() {
        assert_ne!(hash_u32("a.example.com/"), hash_u32("b.example.com/"));
    }

    #[test]
    fn hash_u256_uses_the_full_digest() {
        let full = digest("malware.testing.google.test/");
        let expected = Uint256::from_be_bytes(full);
        assert_eq!(hash_u256("malware.testing.google.test/"), expected);
    }

    #[test]
    fn hash_u256_high_limb_matches_hash_u32() {
        // part1 (los 8 bytes más significativos) debe contener, en sus primeros
        // 4 bytes, el mismo prefijo que hash_u32 produce.
        let expr = "sub.testsafebrowsing.appspot.com/s/phishing.html";
        let short = hash_u32(expr);
        let long = hash_u256(expr);
        let short_from_long = (long.part1 >> 32) as u32;
        assert_eq!(short, short_from_long);
    }
}
