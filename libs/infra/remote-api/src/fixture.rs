// [libs/infra/remote-api/src/fixture.rs]
/*!
 * =================================================================
 * APARATO: FIXTURE API DOUBLE (ESTRATO L3 - INFRA)
 * RESPONSABILIDAD: COLABORADOR DE PRUEBA RESPALDADO POR UN JSON ESTÁTICO
 *
 * Sustituye el `fakeAPI` de la fuente original: en vez de servir un
 * fixture protobuf binario, carga un sobre JSON equivalente desde disco.
 * `batch_get` respeta el contrato de alineación posicional con `names`.
 * =================================================================
 */

use std::path::Path;

use async_trait::async_trait;

use crate::client::SafeBrowsingApi;
use crate::errors::RemoteError;
use crate::wire::{HashListEntry, ListHashListsResponse};

pub struct FixtureSafeBrowsingApi {
    lists: Vec<HashListEntry>,
}

impl FixtureSafeBrowsingApi {
    /// Carga el sobre de fixture desde un archivo JSON en disco.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RemoteError> {
        let raw = std::fs::read_to_string(path)?;
        let envelope: ListHashListsResponse = serde_json::from_str(&raw)?;
        Ok(Self { lists: envelope.lists })
    }

    /// Construye el doble directamente desde un sobre ya en memoria (útil en pruebas unitarias).
    #[must_use]
    pub fn from_envelope(envelope: ListHashListsResponse) -> Self {
        Self { lists: envelope.lists }
    }
}

#[async_trait]
impl SafeBrowsingApi for FixtureSafeBrowsingApi {
    async fn list_hash_lists(&self) -> Result<ListHashListsResponse, RemoteError> {
        Ok(ListHashListsResponse { lists: self.lists.clone() })
    }

    async fn batch_get(&self, names: &[String]) -> Result<ListHashListsResponse, RemoteError> {
        let mut aligned = Vec::with_capacity(names.len());
        for name in names {
            if let Some(entry) = self.lists.iter().find(|l| &l.name == name) {
                aligned.push(entry.clone());
            }
        }
        Ok(ListHashListsResponse { lists: aligned })
    }
}
