// [libs/core/probabilistic/src/lib.rs]
#![deny(missing_docs)]

//! # APARATO: PROBABILISTIC STRATUM (ESTRATO L1 - CORE)
//! RESPONSABILIDAD: PRE-FILTRO BLOOM DELANTE DE LA BÚSQUEDA BINARIA
//!
//! Envuelve `bloomfilter::Bloom` para los dos anchos de prefijo que maneja
//! el sistema (4 bytes y 32 bytes). Un filtro es siempre opcional y siempre
//! best-effort: un `false` es definitivo, un `true` exige confirmar contra
//! el arreglo ordenado real. Nunca es la fuente de verdad de una consulta.

mod filter;

pub use filter::PrefixFilter;
