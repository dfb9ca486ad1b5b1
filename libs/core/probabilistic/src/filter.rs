// [libs/core/probabilistic/src/filter.rs]
use std::hash::Hash;

use bloomfilter::Bloom;

/// Pre-filtro Bloom sobre un conjunto de prefijos `T`, opcional y best-effort.
///
/// `may_contain` devuelve `false` solo cuando el elemento no está en el
/// conjunto con certeza; un `true` exige confirmar contra el arreglo
/// ordenado real. Un filtro "vacío" (`none()`) siempre responde `true` y
/// por tanto nunca cambia el resultado de una búsqueda, solo su costo.
pub enum PrefixFilter<T> {
    /// Filtro construido sobre un conjunto suficientemente grande para justificarlo.
    Built(Bloom<T>),
    /// Sin filtro: la búsqueda recurre directamente a `binary_search`.
    None,
}

impl<T: Hash> PrefixFilter<T> {
    /// Construye un filtro dimensionado para `items` a la tasa de falsos
    /// positivos dada, marcando cada elemento como presente.
    #[must_use]
    pub fn built_from(items: &[T], false_positive_rate: f64) -> Self {
        let mut bloom = Bloom::new_for_fp_rate(items.len(), false_positive_rate);
        for item in items {
            bloom.set(item);
        }
        PrefixFilter::Built(bloom)
    }

    /// `true` si el elemento podría estar presente (o si no hay filtro construido).
    #[must_use]
    pub fn may_contain(&self, item: &T) -> bool {
        match self {
            PrefixFilter::Built(bloom) => bloom.check(item),
            PrefixFilter::None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filter_always_may_contain() {
        let filter: PrefixFilter<u32> = PrefixFilter::None;
        assert!(filter.may_contain(&42));
    }

    #[test]
    fn built_filter_rejects_values_never_inserted() {
        let values: Vec<u32> = (0..500).map(|i| i * 7).collect();
        let filter = PrefixFilter::built_from(&values, 0.01);
        assert!(filter.may_contain(&0));
        assert!(filter.may_contain(values.last().unwrap()));
        assert!(!filter.may_contain(&u32::MAX));
    }
}
