// [libs/core/uint256/src/lib.rs]
/*!
 * =================================================================
 * APARATO: UINT256 (ESTRATO L1 - CORE)
 * RESPONSABILIDAD: ARITMÉTICA DE 256 BITS SOBRE CUATRO LIMBS DE 64 BITS
 *
 * Part1 es el limb más significativo, Part4 el menos significativo —
 * igual que el prefijo de hash SHA-256 completo empacado big-endian.
 * =================================================================
 */

use std::cmp::Ordering;

/// Entero sin signo de 256 bits representado como cuatro limbs `u64`.
///
/// El orden de declaración de los campos (Part1..Part4) es intencional:
/// `derive(PartialOrd, Ord)` compara campos en orden de declaración, que
/// es exactamente la comparación lexicográfica Part1 > Part2 > Part3 > Part4
/// que exige el invariante de orden ascendente de las listas locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uint256 {
    pub part1: u64,
    pub part2: u64,
    pub part3: u64,
    pub part4: u64,
}

impl Uint256 {
    #[must_use]
    pub const fn new(part1: u64, part2: u64, part3: u64, part4: u64) -> Self {
        Self { part1, part2, part3, part4 }
    }

    /// Construye un Uint256 desde 32 bytes big-endian (el layout de un digest SHA-256 completo).
    #[must_use]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self {
            part1: u64::from_be_bytes(bytes[0..8].try_into().unwrap()),
            part2: u64::from_be_bytes(bytes[8..16].try_into().unwrap()),
            part3: u64::from_be_bytes(bytes[16..24].try_into().unwrap()),
            part4: u64::from_be_bytes(bytes[24..32].try_into().unwrap()),
        }
    }

    /// Suma con acarreo propagado de limbs menos significativos a más significativos,
    /// detectado por envoltura (`sum < addend`), exactamente como la fuente original.
    #[must_use]
    pub fn add(self, delta: Self) -> Self {
        let p4 = self.part4.wrapping_add(delta.part4);
        let mut p3 = self.part3.wrapping_add(delta.part3);
        let mut p2 = self.part2.wrapping_add(delta.part2);
        let mut p1 = self.part1.wrapping_add(delta.part1);

        if p4 < self.part4 {
            p3 = p3.wrapping_add(1);
        }
        if p3 < self.part3 {
            p2 = p2.wrapping_add(1);
        }
        if p2 < self.part2 {
            p1 = p1.wrapping_add(1);
        }

        Self { part1: p1, part2: p2, part3: p3, part4: p4 }
    }

    /// Compara dos valores devolviendo el mismo contrato que `Ordering` de Rust,
    /// expuesto por nombre para paridad con la fuente original (`Compare`).
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
