// [libs/core/database/src/lib.rs]
/*!
 * =================================================================
 * APARATO: LOCAL DATABASE (ESTRATO L1 - CORE)
 * RESPONSABILIDAD: SNAPSHOT CONCURRENTE DE LISTAS + BUCLE DE REFRESCO
 *
 * Lectores toman un candado de lectura sobre un `Arc<Snapshot>` y lo
 * clonan — el candado solo protege el puntero, nunca el contenido, así
 * que una lectura nunca compite con la decodificación ni la red. El
 * escritor decodifica y llama al colaborador remoto completamente fuera
 * de cualquier candado, y solo toma el candado de escritura para el
 * intercambio atómico final del snapshot.
 * =================================================================
 */

mod errors;
mod list;
mod snapshot;

pub use errors::DatabaseError;
pub use list::{LocalList, PrefixFilter, PrefixSet};
pub use snapshot::{RefreshConfig, Snapshot};

use std::sync::{Arc, RwLock};

use aegis_core_uint256::Uint256;
use aegis_domain_models::{LikelySafeType, ThreatType, RECOMMENDED_LISTS};
use aegis_infra_remote_api::wire::{HashListEntry, RiceDeltaEncoded256Bit};
use aegis_infra_remote_api::SafeBrowsingApi;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Snapshot local concurrente de listas de hashes, con refresco periódico.
pub struct LocalDatabase {
    inner: RwLock<Arc<Snapshot>>,
}

impl Default for LocalDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: RwLock::new(Arc::new(Snapshot::empty())) }
    }

    fn current(&self) -> Arc<Snapshot> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => {
                error!("💀 database lock poisoned, recovering previous snapshot");
                Arc::clone(&poisoned.into_inner())
            }
        }
    }

    fn swap(&self, snapshot: Arc<Snapshot>) {
        match self.inner.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => {
                error!("💀 database lock poisoned while swapping snapshot, recovering");
                *poisoned.into_inner() = snapshot;
            }
        }
    }

    #[must_use]
    pub fn last_update(&self) -> Option<std::time::SystemTime> {
        self.current().last_update
    }

    /// Acumula las categorías de amenaza de todas las listas cuyo conjunto de
    /// prefijos de 4 bytes coincide con al menos uno de los `hashes` dados.
    #[must_use]
    pub fn find_threats_by_u32(&self, hashes: &[u32]) -> Vec<ThreatType> {
        let snapshot = self.current();
        let mut found = Vec::new();

        for list in &snapshot.lists {
            if list.metadata.threat_types.is_empty() {
                continue;
            }
            if hashes.iter().any(|h| list.contains_u32(*h)) {
                for threat in &list.metadata.threat_types {
                    if !found.contains(threat) {
                        found.push(*threat);
                    }
                }
            }
        }
        found
    }

    /// Simétrico a `find_threats_by_u32`, sobre listas de 32 bytes y categorías
    /// "probablemente seguro".
    #[must_use]
    pub fn find_likely_safe_by_u256(&self, hashes: &[Uint256]) -> Vec<LikelySafeType> {
        let snapshot = self.current();
        let mut found = Vec::new();

        for list in &snapshot.lists {
            if list.metadata.likely_safe_types.is_empty() {
                continue;
            }
            if hashes.iter().any(|h| list.contains_u256(*h)) {
                for safe_type in &list.metadata.likely_safe_types {
                    if !found.contains(safe_type) {
                        found.push(*safe_type);
                    }
                }
            }
        }
        found
    }

    /// Descarga y decodifica todas las listas recomendadas, y reemplaza el
    /// snapshot vigente de forma atómica. Si cualquier lista falla al
    /// decodificar, el refresco entero se abandona y el snapshot anterior
    /// se conserva intacto.
    #[instrument(skip(self, api))]
    pub async fn update(&self, api: &dyn SafeBrowsingApi) -> Result<(), DatabaseError> {
        let names: Vec<String> = RECOMMENDED_LISTS.iter().map(|l| l.name.to_string()).collect();
        let response = api.batch_get(&names).await?;

        let mut lists = Vec::with_capacity(response.lists.len());
        for entry in response.lists {
            lists.push(decode_entry(entry)?);
        }

        let snapshot = Arc::new(Snapshot { lists, last_update: Some(std::time::SystemTime::now()) });
        self.swap(snapshot);

        info!("🔄 local database refreshed with {} lists", names.len());
        Ok(())
    }

    /// Bucle de refresco periódico: tras cada tick del intervalo configurado,
    /// invoca `update`. Los errores se registran y se continúa; la cancelación
    /// detiene el bucle después de que el refresco en curso termine o se
    /// abandone.
    pub async fn run_self_updates(
        self: Arc<Self>,
        api: Arc<dyn SafeBrowsingApi>,
        config: RefreshConfig,
        cancel: CancellationToken,
    ) {
        let mut ticker =
            tokio::time::interval_at(tokio::time::Instant::now() + config.interval, config.interval);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("🛑 refresh loop cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.update(api.as_ref()).await {
                        warn!("⚠️ scheduled refresh failed, keeping previous snapshot: {e}");
                    }
                }
            }
        }
    }
}

fn decode_entry(entry: HashListEntry) -> Result<LocalList, DatabaseError> {
    let recommended = aegis_domain_models::find_recommended(&entry.name)
        .ok_or_else(|| DatabaseError::UnknownListName(entry.name.clone()))?;

    let metadata = recommended.metadata();
    let version = entry.version.unwrap_or_default();
    let checksum = entry.sha256_checksum.unwrap_or_default();

    if let Some(block) = entry.compressed_removals {
        let prefixes = aegis_core_rice_codec::decode_u32(
            block.first_value,
            block.rice_parameter,
            block.entries_count,
            &block.encoded_data,
        )
        .map_err(|source| DatabaseError::DecodeFailure { list_name: entry.name.clone(), source })?;

        return Ok(LocalList::new(
            entry.name,
            metadata,
            PrefixSet::U32(prefixes),
            block.entries_count,
            version,
            checksum,
        ));
    }

    if let Some(block) = entry.additions_thirty_two_bytes {
        let prefixes = decode_u256_block(&block)
            .map_err(|source| DatabaseError::DecodeFailure { list_name: entry.name.clone(), source })?;

        return Ok(LocalList::new(
            entry.name,
            metadata,
            PrefixSet::U256(prefixes),
            block.entries_count,
            version,
            checksum,
        ));
    }

    Err(DatabaseError::EmptyListBody(entry.name))
}

fn decode_u256_block(
    block: &RiceDeltaEncoded256Bit,
) -> Result<Vec<Uint256>, aegis_core_rice_codec::RiceError> {
    let [p1, p2, p3, p4] = block.first_value;
    let first_value = Uint256::new(p1, p2, p3, p4);
    aegis_core_rice_codec::decode_u256(
        first_value,
        block.rice_parameter,
        block.entries_count,
        &block.encoded_data,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use aegis_infra_remote_api::wire::{ListHashListsResponse, RiceDeltaEncoded32Bit};
    use aegis_infra_remote_api::RemoteError;

    struct StubApi {
        response: ListHashListsResponse,
    }

    #[async_trait]
    impl SafeBrowsingApi for StubApi {
        async fn list_hash_lists(&self) -> Result<ListHashListsResponse, RemoteError> {
            Ok(self.response.clone())
        }
        async fn batch_get(&self, _names: &[String]) -> Result<ListHashListsResponse, RemoteError> {
            Ok(self.response.clone())
        }
    }

    fn entry_with_u32(name: &str, first_value: u32) -> HashListEntry {
        HashListEntry {
            name: name.to_string(),
            description: None,
            compressed_removals: Some(RiceDeltaEncoded32Bit {
                first_value,
                rice_parameter: 0,
                entries_count: 0,
                encoded_data: Vec::new(),
            }),
            additions_thirty_two_bytes: None,
            version: None,
            sha256_checksum: None,
        }
    }

    #[tokio::test]
    async fn update_populates_snapshot_and_lookup_succeeds() {
        let db = LocalDatabase::new();
        let api = StubApi {
            response: ListHashListsResponse { lists: vec![entry_with_u32("se", 777)] },
        };

        db.update(&api).await.unwrap();
        assert!(db.last_update().is_some());

        let threats = db.find_threats_by_u32(&[777]);
        assert_eq!(threats, vec![ThreatType::SocialEngineering]);

        let threats = db.find_threats_by_u32(&[1]);
        assert!(threats.is_empty());
    }

    #[tokio::test]
    async fn update_rejects_unknown_list_names() {
        let db = LocalDatabase::new();
        let api = StubApi {
            response: ListHashListsResponse { lists: vec![entry_with_u32("totally-unknown", 1)] },
        };

        let err = db.update(&api).await.unwrap_err();
        assert!(matches!(err, DatabaseError::UnknownListName(name) if name == "totally-unknown"));
    }

    #[tokio::test]
    async fn threat_accumulation_spans_multiple_matching_lists() {
        let db = LocalDatabase::new();
        let api = StubApi {
            response: ListHashListsResponse {
                lists: vec![entry_with_u32("mw", 5), entry_with_u32("uws", 5)],
            },
        };
        db.update(&api).await.unwrap();

        let mut threats = db.find_threats_by_u32(&[5]);
        threats.sort_by_key(|t| format!("{t:?}"));
        assert_eq!(threats, vec![ThreatType::Malware, ThreatType::UnwantedSoftware]);
    }

    #[test]
    fn refresh_config_defaults_match_the_specified_intervals() {
        let config = RefreshConfig::default();
        assert_eq!(config.interval, std::time::Duration::from_secs(1800));
        assert_eq!(config.construction_deadline, std::time::Duration::from_secs(5));
    }
}
