// [libs/domain/safe-browser/src/lib.rs]
/*!
 * =================================================================
 * APARATO: SAFE BROWSER FACADE (ESTRATO L2 - DOMAIN)
 * RESPONSABILIDAD: API PÚBLICA DE VERIFICACIÓN DE REPUTACIÓN DE URLS
 *
 * Compone los tres componentes duros del sistema — generación de
 * expresiones, hashing, y la base de datos local — detrás de una
 * superficie mínima: `new`, `run`, `check_urls`.
 * =================================================================
 */

mod errors;
mod options;

pub use aegis_core_database::RefreshConfig;
pub use aegis_domain_models::CheckResult;
pub use errors::SafeBrowserError;
pub use options::{with_api_client, with_api_key, with_refresh_config, SafeBrowserOption};

use std::sync::Arc;

use aegis_core_database::LocalDatabase;
use aegis_core_hashing::hash_u32;
use aegis_domain_expressions::generate_expressions;
use aegis_infra_remote_api::{HttpSafeBrowsingApi, SafeBrowsingApi};
use options::ResolvedOptions;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Fachada pública del verificador de reputación de URLs.
pub struct SafeBrowser {
    api: Arc<dyn SafeBrowsingApi>,
    database: Arc<LocalDatabase>,
    refresh_config: RefreshConfig,
}

impl SafeBrowser {
    /// Construye un `SafeBrowser` a partir de opciones funcionales. Realiza un
    /// refresco inicial síncrono acotado por `refresh_config.construction_deadline`;
    /// si ese refresco no completa a tiempo o falla, la construcción falla.
    #[instrument(skip(options))]
    pub async fn new(
        options: impl IntoIterator<Item = SafeBrowserOption>,
    ) -> Result<Self, SafeBrowserError> {
        let resolved = options
            .into_iter()
            .fold(ResolvedOptions::default(), ResolvedOptions::apply);

        let api: Arc<dyn SafeBrowsingApi> = match (resolved.api_client, resolved.api_key) {
            (Some(client), _) => client,
            (None, Some(key)) => {
                Arc::new(HttpSafeBrowsingApi::new("https://safebrowsing.googleapis.com", key))
            }
            (None, None) => return Err(SafeBrowserError::MissingCollaborator),
        };

        let database = Arc::new(LocalDatabase::new());

        let refresh = database.update(api.as_ref());
        match tokio::time::timeout(resolved.refresh_config.construction_deadline, refresh).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(SafeBrowserError::Database(e)),
            Err(_elapsed) => return Err(SafeBrowserError::ConstructionTimeout),
        }

        info!("🛡️ safe browser constructed, initial refresh complete");
        Ok(Self { api, database, refresh_config: resolved.refresh_config })
    }

    /// Inicia el bucle de refresco periódico y retorna cuando `cancel` se dispara.
    pub async fn run(self: Arc<Self>, cancel: CancellationToken) {
        let database = Arc::clone(&self.database);
        let api = Arc::clone(&self.api);
        let config = self.refresh_config;
        database.run_self_updates(api, config, cancel).await;
    }

    /// Evalúa cada URL de `urls` contra la base local y devuelve un veredicto por URL.
    #[instrument(skip(self, urls))]
    pub fn check_urls(&self, urls: &[String]) -> Result<Vec<CheckResult>, SafeBrowserError> {
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            let expressions = generate_expressions(url)?;
            let hashes: Vec<u32> = expressions.iter().map(|e| hash_u32(e)).collect();
            let threats = self.database.find_threats_by_u32(&hashes);
            results.push(CheckResult { safe: threats.is_empty(), threats });
        }
        Ok(results)
    }
}

/// Helper de conveniencia para que los binarios que embeben esta librería
/// opten por un subscriber de `tracing` por defecto. Nunca se invoca
/// automáticamente desde código de librería.
pub fn init_default_subscriber() {
    let _ = tracing_subscriber::fmt::try_init();
}
