// [libs/core/bitstream/src/lib.rs]
/*!
 * =================================================================
 * APARATO: BITSTREAM READER (ESTRATO L1 - CORE)
 * RESPONSABILIDAD: LECTURA DE BITS Y CONTEOS UNARIOS SOBRE UN BUFFER
 *
 * El orden de bits es LSB-first dentro de cada byte: el bit en la
 * posición p vive en el byte p/8, índice p%8 (0 = menos significativo).
 * Este orden lo impone el formato de cable del servicio remoto y no
 * es negociable — ver golomb_rice.go / decoder256.go en la fuente
 * original para la referencia bit-exacta.
 * =================================================================
 */

use thiserror::Error;

/// Errores de lectura del flujo de bits.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BitStreamError {
    /// El buffer se agotó antes de completar la lectura solicitada.
    #[error("insufficient data in bitstream")]
    InsufficientData,
    /// Se pidió leer más bits de los que el ancho nativo soporta.
    #[error("cannot read {requested} bits at once (max {max})")]
    WidthExceeded { requested: u32, max: u32 },
}

/// Lector de bits de 32 bits de ancho nativo, usado por el decodificador Rice de 4 bytes.
pub struct BitStream32<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitStream32<'a> {
    /// Envuelve un buffer de bytes crudo sin copiarlo.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Lee `n` bits (n <= 32) y los ensambla con el primer bit leído
    /// como el menos significativo del resultado.
    pub fn read_bits(&mut self, n: u32) -> Result<u32, BitStreamError> {
        if n > 32 {
            return Err(BitStreamError::WidthExceeded { requested: n, max: 32 });
        }

        let mut value: u32 = 0;
        for i in 0..n {
            value |= u32::from(self.read_bit()?) << i;
        }
        Ok(value)
    }

    /// Lee bits en 1 hasta el primer bit en 0 (el cual se consume pero no se cuenta).
    pub fn read_unary(&mut self) -> Result<u32, BitStreamError> {
        let mut count: u32 = 0;
        loop {
            if self.read_bit()? == 0 {
                break;
            }
            count += 1;
        }
        Ok(count)
    }

    #[inline]
    fn read_bit(&mut self) -> Result<u8, BitStreamError> {
        let byte_index = self.bit_pos / 8;
        if byte_index >= self.data.len() {
            return Err(BitStreamError::InsufficientData);
        }
        let bit_index = self.bit_pos % 8;
        let bit = (self.data[byte_index] >> bit_index) & 1;
        self.bit_pos += 1;
        Ok(bit)
    }
}

/// Lector de bits de 64 bits de ancho nativo, usado por el decodificador Rice de 32 bytes.
pub struct BitStream256<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitStream256<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Lee `n` bits (n <= 64) con la misma convención LSB-first.
    pub fn read_bits(&mut self, n: u32) -> Result<u64, BitStreamError> {
        if n > 64 {
            return Err(BitStreamError::WidthExceeded { requested: n, max: 64 });
        }

        let mut value: u64 = 0;
        for i in 0..n {
            value |= u64::from(self.read_bit()?) << i;
        }
        Ok(value)
    }

    /// Lee el conteo unario como u64 (el cuociente del decodificador de 256 bits puede superar 32 bits en teoría).
    pub fn read_unary(&mut self) -> Result<u64, BitStreamError> {
        let mut count: u64 = 0;
        loop {
            if self.read_bit()? == 0 {
                break;
            }
            count += 1;
        }
        Ok(count)
    }

    #[inline]
    fn read_bit(&mut self) -> Result<u8, BitStreamError> {
        let byte_index = self.bit_pos / 8;
        if byte_index >= self.data.len() {
            return Err(BitStreamError::InsufficientData);
        }
        let bit_index = self.bit_pos % 8;
        let bit = (self.data[byte_index] >> bit_index) & 1;
        self.bit_pos += 1;
        Ok(bit)
    }
}
