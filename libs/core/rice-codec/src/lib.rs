// [libs/core/rice-codec/src/lib.rs]
/*!
 * =================================================================
 * APARATO: RICE-GOLOMB DECODER (ESTRATO L1 - CORE)
 * RESPONSABILIDAD: DESCOMPRESIÓN DELTA DE PREFIJOS DE HASH
 *
 * Dos variantes, alineadas con el cable del servicio remoto:
 * - 32 bits: delta = (unary_quotient << k) | k-bit remainder.
 * - 256 bits: delta empaca un cuociente unario compartido con cuatro
 *   limbs de remanente de k/4 bits cada uno (ver Uint256).
 *
 * La variante de 256 bits trata el documento fuente como si el
 * cuociente unario fuera compartido entre los cuatro limbs y cada
 * limb llevara su propio remanente — esto NO ha sido verificado
 * contra un fixture real del operador del servicio (ver nota en
 * `decode_u256`).
 * =================================================================
 */

use aegis_core_bitstream::{BitStream256, BitStream32, BitStreamError};
use aegis_core_uint256::Uint256;
use thiserror::Error;

/// Errores posibles al decodificar un bloque Rice-Golomb.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RiceError {
    /// El parámetro Rice está fuera del rango permitido para la variante en uso.
    #[error("invalid rice parameter {parameter} (expected {expected_range})")]
    InvalidRiceParameter { parameter: u32, expected_range: &'static str },
    /// El flujo de bits se agotó antes de terminar de decodificar todas las entradas.
    #[error("bitstream exhausted while decoding: {0}")]
    Decode(#[from] BitStreamError),
}

/// Decodifica `entries_count + 1` prefijos u32 ascendentes desde un bloque Rice de 32 bits.
///
/// `first_value` se emite tal cual; cada una de las `entries_count` entradas
/// restantes se obtiene sumando un delta reconstruido a partir de un cuociente
/// unario y un remanente de `rice_parameter` bits.
pub fn decode_u32(
    first_value: u32,
    rice_parameter: u32,
    entries_count: u32,
    encoded_data: &[u8],
) -> Result<Vec<u32>, RiceError> {
    if rice_parameter > 31 {
        return Err(RiceError::InvalidRiceParameter {
            parameter: rice_parameter,
            expected_range: "0..=31",
        });
    }

    let mut values = Vec::with_capacity(entries_count as usize + 1);
    values.push(first_value);

    let mut bit_stream = BitStream32::new(encoded_data);
    let mut current = first_value;

    for _ in 0..entries_count {
        let quotient = bit_stream.read_unary()?;
        let remainder = bit_stream.read_bits(rice_parameter)?;
        let delta = (quotient << rice_parameter) | remainder;
        current = current.wrapping_add(delta);
        values.push(current);
    }

    Ok(values)
}

/// Decodifica `entries_count + 1` prefijos Uint256 ascendentes desde un bloque Rice de 256 bits.
///
/// # Nota de verificación
///
/// El documento fuente de este diseño marca esta ruta como no verificada
/// contra el servicio real (ver la "Open Question" del diseño): el
/// cuociente unario se trata como compartido entre los cuatro limbs, cada
/// uno con un remanente de `rice_parameter / 4` bits. No confiar en esta
/// ruta sin validarla primero contra un fixture conocido.
pub fn decode_u256(
    first_value: Uint256,
    rice_parameter: u32,
    entries_count: u32,
    encoded_data: &[u8],
) -> Result<Vec<Uint256>, RiceError> {
    if !(227..=254).contains(&rice_parameter) {
        return Err(RiceError::InvalidRiceParameter {
            parameter: rice_parameter,
            expected_range: "227..=254",
        });
    }

    let remainder_bits = rice_parameter / 4;

    let mut values = Vec::with_capacity(entries_count as usize + 1);
    values.push(first_value);

    let mut bit_stream = BitStream256::new(encoded_data);
    let mut current = first_value;

    for _ in 0..entries_count {
        let quotient = bit_stream.read_unary()?;
        let r1 = bit_stream.read_bits(remainder_bits)?;
        let r2 = bit_stream.read_bits(remainder_bits)?;
        let r3 = bit_stream.read_bits(remainder_bits)?;
        let r4 = bit_stream.read_bits(remainder_bits)?;

        let delta = Uint256::new((quotient << remainder_bits) | r1, r2, r3, r4);
        current = current.add(delta);
        values.push(current);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Caso del §8 de la especificación: first_value=489866504, k=30, n=2.
    /// Debe reproducir los prefijos de 4 bytes de SHA-256 de
    /// "a.example.com/", "b.example.com/", "y.example.com/" en orden ascendente.
    #[test]
    fn decodes_the_canonical_fixture() {
        let encoded_data: [u8; 9] = [0x74, 0x00, 0xD2, 0x97, 0x1B, 0xED, 0x49, 0x74, 0x00];
        let decoded = decode_u32(489_866_504, 30, 2, &encoded_data).unwrap();

        assert_eq!(decoded, vec![489_866_504, 689_685_826, 4_154_786_533]);
        assert!(decoded.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn entries_count_zero_emits_only_first_value() {
        let decoded = decode_u32(42, 10, 0, &[]).unwrap();
        assert_eq!(decoded, vec![42]);
    }

    #[test]
    fn rice_parameter_zero_reduces_to_plain_unary_deltas() {
        // k=0: remainder is always 0 bits, delta is the unary quotient itself.
        // Encode two unary values "10" (q=1) and "110" (q=2) back to back:
        // bits (LSB-first within byte): 1,0,1,1,0 -> byte = 0b00001101 = 0x0D
        let encoded_data: [u8; 1] = [0b0000_1101];
        let decoded = decode_u32(0, 0, 2, &encoded_data).unwrap();
        assert_eq!(decoded, vec![0, 1, 3]);
    }

    #[test]
    fn rejects_rice_parameter_out_of_range_for_u32() {
        assert_eq!(
            decode_u32(0, 32, 0, &[]),
            Err(RiceError::InvalidRiceParameter { parameter: 32, expected_range: "0..=31" })
        );
    }

    #[test]
    fn rejects_rice_parameter_out_of_range_for_u256() {
        let zero = Uint256::default();
        assert_eq!(
            decode_u256(zero, 226, 0, &[]),
            Err(RiceError::InvalidRiceParameter { parameter: 226, expected_range: "227..=254" })
        );
        assert_eq!(
            decode_u256(zero, 255, 0, &[]),
            Err(RiceError::InvalidRiceParameter { parameter: 255, expected_range: "227..=254" })
        );
    }

    #[test]
    fn insufficient_data_mid_remainder_surfaces_as_decode_error() {
        // Declares one entry but supplies no bits at all.
        let err = decode_u32(0, 10, 1, &[]).unwrap_err();
        assert_eq!(err, RiceError::Decode(BitStreamError::InsufficientData));
    }

    #[test]
    fn decode_u256_accumulates_across_entries() {
        // remainder_bits = 227/4 = 56 (integer division), well within a u64 limb.
        // Build one entry with q=0 and a small, known remainder.
        let first = Uint256::new(0, 0, 0, 1000);
        // Hand craft encoded bits for one entry: q=0 (terminator bit 0), then
        // r1=0 (56 bits), r2=0, r3=0, r4=5 (56 bits each) -> delta{part1:0,part2:0,part3:0,part4:5}
        let mut bits: Vec<u8> = Vec::new();
        let mut bitbuf: u128 = 0;
        let mut nbits = 0u32;
        let mut push_bits = |value: u128, n: u32, bitbuf: &mut u128, nbits: &mut u32, out: &mut Vec<u8>| {
            for i in 0..n {
                let bit = (value >> i) & 1;
                *bitbuf |= bit << *nbits;
                *nbits += 1;
                if *nbits == 8 {
                    out.push(*bitbuf as u8);
                    *bitbuf = 0;
                    *nbits = 0;
                }
            }
        };
        push_bits(0, 1, &mut bitbuf, &mut nbits, &mut bits); // unary terminator (q=0)
        push_bits(0, 56, &mut bitbuf, &mut nbits, &mut bits); // r1
        push_bits(0, 56, &mut bitbuf, &mut nbits, &mut bits); // r2
        push_bits(0, 56, &mut bitbuf, &mut nbits, &mut bits); // r3
        push_bits(5, 56, &mut bitbuf, &mut nbits, &mut bits); // r4
        if nbits > 0 {
            bits.push(bitbuf as u8);
        }

        let decoded = decode_u256(first, 227, 1, &bits).unwrap();
        assert_eq!(decoded, vec![first, Uint256::new(0, 0, 0, 1005)]);
    }
}
