// [libs/domain/models/src/lib.rs]
/*!
 * =================================================================
 * APARATO: DOMAIN MODELS (ESTRATO L2 - DOMAIN)
 * RESPONSABILIDAD: TIPOS COMPARTIDOS DEL DOMINIO DE REPUTACIÓN DE URLS
 *
 * Ningún tipo aquí toca la red ni el disco — son los sustantivos que
 * el resto del workspace comparte: categorías de amenaza, metadatos
 * de listas, el catálogo compile-time de listas recomendadas y el
 * resultado final de una consulta.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Categoría de amenaza que una lista de 4 bytes puede reportar. Enumeración cerrada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatType {
    SocialEngineering,
    Malware,
    UnwantedSoftware,
    PotentiallyHarmfulApplication,
}

/// Categoría de "probablemente seguro" que una lista de 32 bytes puede reportar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LikelySafeType {
    GeneralBrowsing,
}

/// Longitud de prefijo de hash soportada por una lista.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashLength {
    FourBytes,
    ThirtyTwoBytes,
}

/// Metadatos de una lista de hashes, tal como los describe el catálogo remoto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashListMetadata {
    pub description: String,
    pub threat_types: Vec<ThreatType>,
    pub likely_safe_types: Vec<LikelySafeType>,
    pub supported_hash_lengths: Vec<HashLength>,
}

/// Una entrada del catálogo compile-time de listas recomendadas.
#[derive(Debug, Clone, Copy)]
pub struct RecommendedList {
    /// Identificador estable de la lista (p. ej. "se", "mw", "gc").
    pub name: &'static str,
    pub threat_types: &'static [ThreatType],
    pub likely_safe_types: &'static [LikelySafeType],
    pub hash_length: HashLength,
}

impl RecommendedList {
    #[must_use]
    pub fn metadata(&self) -> HashListMetadata {
        HashListMetadata {
            description: self.name.to_string(),
            threat_types: self.threat_types.to_vec(),
            likely_safe_types: self.likely_safe_types.to_vec(),
            supported_hash_lengths: vec![self.hash_length],
        }
    }
}

/// Catálogo compile-time de listas recomendadas: guía tanto la solicitud
/// `batch_get` como la asociación por nombre de metadatos a la respuesta.
pub const RECOMMENDED_LISTS: &[RecommendedList] = &[
    RecommendedList {
        name: "gc",
        threat_types: &[],
        likely_safe_types: &[LikelySafeType::GeneralBrowsing],
        hash_length: HashLength::ThirtyTwoBytes,
    },
    RecommendedList {
        name: "se",
        threat_types: &[ThreatType::SocialEngineering],
        likely_safe_types: &[],
        hash_length: HashLength::FourBytes,
    },
    RecommendedList {
        name: "mw",
        threat_types: &[ThreatType::Malware],
        likely_safe_types: &[],
        hash_length: HashLength::FourBytes,
    },
    RecommendedList {
        name: "uws",
        threat_types: &[ThreatType::UnwantedSoftware],
        likely_safe_types: &[],
        hash_length: HashLength::FourBytes,
    },
    RecommendedList {
        name: "uwsa",
        threat_types: &[ThreatType::UnwantedSoftware],
        likely_safe_types: &[],
        hash_length: HashLength::FourBytes,
    },
    RecommendedList {
        name: "pha",
        threat_types: &[ThreatType::PotentiallyHarmfulApplication],
        likely_safe_types: &[],
        hash_length: HashLength::FourBytes,
    },
];

/// Busca una entrada del catálogo compile-time por nombre.
#[must_use]
pub fn find_recommended(name: &str) -> Option<&'static RecommendedList> {
    RECOMMENDED_LISTS.iter().find(|entry| entry.name == name)
}

/// Resultado de evaluar un conjunto de expresiones de URL contra la base local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub safe: bool,
    pub threats: Vec<ThreatType>,
}

impl CheckResult {
    #[must_use]
    pub fn safe() -> Self {
        Self { safe: true, threats: Vec::new() }
    }

    #[must_use]
    pub fn unsafe_with(threats: Vec<ThreatType>) -> Self {
        Self { safe: threats.is_empty(), threats }
    }
}
