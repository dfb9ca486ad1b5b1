// [libs/infra/remote-api/src/wire.rs]
/*!
 * =================================================================
 * APARATO: REMOTE API WIRE TYPES (ESTRATO L3 - INFRA)
 * RESPONSABILIDAD: FORMA DEL SOBRE JSON DE LA API DE REPUTACIÓN
 *
 * El formato real del servicio es protocol-buffers; esta workspace
 * lo sustituye por un sobre JSON estructuralmente equivalente (mismos
 * campos, misma semántica posicional) ya que la decodificación de
 * wire de protobuf está fuera de alcance. `encoded_data` viaja como
 * base64 de los mismos bytes empacados que consume `aegis-core-rice-codec`.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Bloque Rice-Golomb de 32 bits, tal como lo describe spec.md §3 (RiceEncodedBlock).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiceDeltaEncoded32Bit {
    pub first_value: u32,
    pub rice_parameter: u32,
    pub entries_count: u32,
    #[serde(with = "base64_bytes")]
    pub encoded_data: Vec<u8>,
}

/// Bloque Rice-Golomb de 256 bits. `first_value` viaja como cuatro limbs
/// big-endian (Part1 = más significativo), igual que `Uint256`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiceDeltaEncoded256Bit {
    pub first_value: [u64; 4],
    pub rice_parameter: u32,
    pub entries_count: u32,
    #[serde(with = "base64_bytes")]
    pub encoded_data: Vec<u8>,
}

/// Una entrada de lista tal como la devuelve `batch_get`/`list_hash_lists`.
/// Carga a lo sumo uno de los dos cuerpos comprimidos, per spec.md §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashListEntry {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub compressed_removals: Option<RiceDeltaEncoded32Bit>,
    #[serde(default)]
    pub additions_thirty_two_bytes: Option<RiceDeltaEncoded256Bit>,
    #[serde(default, with = "base64_bytes_opt")]
    pub version: Option<Vec<u8>>,
    #[serde(default, with = "base64_bytes_opt")]
    pub sha256_checksum: Option<Vec<u8>>,
}

/// Sobre de respuesta compartido por ambas operaciones del colaborador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListHashListsResponse {
    pub lists: Vec<HashListEntry>,
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
    }
}

mod base64_bytes_opt {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(b) => serializer.serialize_some(&STANDARD.encode(b)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        match encoded {
            Some(s) => STANDARD
                .decode(s.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
