// [libs/core/database/src/list.rs]
/*!
 * =================================================================
 * APARATO: LOCAL LIST (ESTRATO L1 - CORE)
 * RESPONSABILIDAD: UNA LISTA DE HASHES DECODIFICADA EN MEMORIA
 * =================================================================
 */

use aegis_core_probabilistic::PrefixFilter as Bloom;
use aegis_core_uint256::Uint256;
use aegis_domain_models::HashListMetadata;

/// El arreglo de prefijos decodificado, en exactamente una de sus dos formas.
pub enum PrefixSet {
    U32(Vec<u32>),
    U256(Vec<Uint256>),
}

/// Pre-filtro Bloom opcional, best-effort: un `false` es definitivo, un `true`
/// exige confirmar con búsqueda binaria. Nunca cambia el resultado de una
/// consulta, solo evita recorrer binary_search en listas que seguro no matchean.
pub enum PrefixFilter {
    U32(Bloom<u32>),
    U256(Bloom<Uint256>),
    /// Listas demasiado pequeñas para justificar un filtro no lo construyen.
    None,
}

pub struct LocalList {
    pub name: String,
    pub metadata: HashListMetadata,
    pub prefixes: PrefixSet,
    pub filter: PrefixFilter,
    pub entries_count: u32,
    pub version: Vec<u8>,
    pub checksum: Vec<u8>,
}

const BLOOM_FALSE_POSITIVE_RATE: f64 = 0.01;
const BLOOM_MIN_ITEMS: usize = 64;

impl LocalList {
    #[must_use]
    pub fn new(
        name: String,
        metadata: HashListMetadata,
        prefixes: PrefixSet,
        entries_count: u32,
        version: Vec<u8>,
        checksum: Vec<u8>,
    ) -> Self {
        let filter = build_filter(&prefixes);
        Self { name, metadata, prefixes, filter, entries_count, version, checksum }
    }

    /// Búsqueda binaria de `needle` en un conjunto de prefijos de 4 bytes,
    /// con el pre-filtro Bloom como veto rápido cuando está disponible.
    #[must_use]
    pub fn contains_u32(&self, needle: u32) -> bool {
        match (&self.prefixes, &self.filter) {
            (PrefixSet::U32(prefixes), PrefixFilter::U32(bloom)) => {
                bloom.may_contain(&needle) && prefixes.binary_search(&needle).is_ok()
            }
            (PrefixSet::U32(prefixes), _) => prefixes.binary_search(&needle).is_ok(),
            _ => false,
        }
    }

    /// Simétrico a `contains_u32`, sobre el conjunto de prefijos de 32 bytes.
    #[must_use]
    pub fn contains_u256(&self, needle: Uint256) -> bool {
        match (&self.prefixes, &self.filter) {
            (PrefixSet::U256(prefixes), PrefixFilter::U256(bloom)) => {
                bloom.may_contain(&needle) && prefixes.binary_search(&needle).is_ok()
            }
            (PrefixSet::U256(prefixes), _) => prefixes.binary_search(&needle).is_ok(),
            _ => false,
        }
    }
}

fn build_filter(prefixes: &PrefixSet) -> PrefixFilter {
    match prefixes {
        PrefixSet::U32(values) if values.len() >= BLOOM_MIN_ITEMS => {
            PrefixFilter::U32(Bloom::built_from(values, BLOOM_FALSE_POSITIVE_RATE))
        }
        PrefixSet::U256(values) if values.len() >= BLOOM_MIN_ITEMS => {
            PrefixFilter::U256(Bloom::built_from(values, BLOOM_FALSE_POSITIVE_RATE))
        }
        _ => PrefixFilter::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_domain_models::HashLength;

    fn metadata() -> HashListMetadata {
        HashListMetadata {
            description: "test".to_string(),
            threat_types: Vec::new(),
            likely_safe_types: Vec::new(),
            supported_hash_lengths: vec![HashLength::FourBytes],
        }
    }

    #[test]
    fn contains_u32_finds_present_value_without_filter() {
        let list = LocalList::new(
            "se".into(),
            metadata(),
            PrefixSet::U32(vec![1, 5, 9, 20]),
            3,
            Vec::new(),
            Vec::new(),
        );
        assert!(list.contains_u32(9));
        assert!(!list.contains_u32(10));
    }

    #[test]
    fn contains_u32_with_bloom_filter_above_threshold() {
        let values: Vec<u32> = (0..200).map(|i| i * 3).collect();
        let list = LocalList::new(
            "se".into(),
            metadata(),
            PrefixSet::U32(values.clone()),
            values.len() as u32 - 1,
            Vec::new(),
            Vec::new(),
        );
        assert!(matches!(list.filter, PrefixFilter::U32(_)));
        assert!(list.contains_u32(*values.last().unwrap()));
        assert!(!list.contains_u32(u32::MAX));
    }
}
