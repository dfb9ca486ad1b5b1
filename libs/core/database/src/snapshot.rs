// [libs/core/database/src/snapshot.rs]
/*!
 * =================================================================
 * APARATO: SNAPSHOT (ESTRATO L1 - CORE)
 * RESPONSABILIDAD: BUNDLE INMUTABLE DE LISTAS + MARCA DE TIEMPO
 * =================================================================
 */

use std::time::SystemTime;

use crate::list::LocalList;

/// Bundle inmutable de todas las listas locales vigentes más su marca de
/// última actualización. Reemplazado por completo en cada refresco exitoso —
/// nunca mutado en sitio, para que los lectores nunca observen un estado parcial.
pub struct Snapshot {
    pub lists: Vec<LocalList>,
    pub last_update: Option<SystemTime>,
}

impl Snapshot {
    #[must_use]
    pub fn empty() -> Self {
        Self { lists: Vec::new(), last_update: None }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Intervalo y plazo del ciclo de refresco, configurables con valores por
/// defecto sensatos (la fuente original los hardcodea).
#[derive(Debug, Clone, Copy)]
pub struct RefreshConfig {
    pub interval: std::time::Duration,
    pub construction_deadline: std::time::Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: std::time::Duration::from_secs(30 * 60),
            construction_deadline: std::time::Duration::from_secs(5),
        }
    }
}
