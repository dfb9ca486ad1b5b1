// [libs/domain/safe-browser/src/options.rs]
/*!
 * =================================================================
 * APARATO: SAFE BROWSER OPTIONS (ESTRATO L2 - DOMAIN)
 * RESPONSABILIDAD: OPCIONES FUNCIONALES DE CONSTRUCCIÓN
 *
 * Puerto directo del patrón `SafeBrowserOption func(*SafeBrowser)` de la
 * fuente original al idioma de Rust: cada opción es una variante de datos
 * en vez de una clausura, aplicada en orden de llegada sobre un builder.
 * =================================================================
 */

use std::sync::Arc;

use aegis_core_database::RefreshConfig;
use aegis_infra_remote_api::SafeBrowsingApi;

/// Una opción de construcción de `SafeBrowser`.
pub enum SafeBrowserOption {
    /// Construye el cliente HTTPS por defecto con esta clave de API.
    ApiKey(String),
    /// Usa directamente este colaborador, ignorando cualquier clave de API.
    ApiClient(Arc<dyn SafeBrowsingApi>),
    /// Sobrescribe el intervalo de refresco / plazo de construcción por defecto.
    Refresh(RefreshConfig),
}

/// `WithAPIKey` — construye el cliente HTTP por defecto con esta clave.
#[must_use]
pub fn with_api_key(key: impl Into<String>) -> SafeBrowserOption {
    SafeBrowserOption::ApiKey(key.into())
}

/// `WithAPIClient` — inyecta un colaborador ya construido (p. ej. un doble de prueba).
#[must_use]
pub fn with_api_client(client: Arc<dyn SafeBrowsingApi>) -> SafeBrowserOption {
    SafeBrowserOption::ApiClient(client)
}

/// Sobrescribe el intervalo de refresco y/o el plazo de construcción.
#[must_use]
pub fn with_refresh_config(config: RefreshConfig) -> SafeBrowserOption {
    SafeBrowserOption::Refresh(config)
}

#[derive(Default)]
pub(crate) struct ResolvedOptions {
    pub(crate) api_key: Option<String>,
    pub(crate) api_client: Option<Arc<dyn SafeBrowsingApi>>,
    pub(crate) refresh_config: RefreshConfig,
}

impl ResolvedOptions {
    pub(crate) fn apply(mut self, option: SafeBrowserOption) -> Self {
        match option {
            SafeBrowserOption::ApiKey(key) => self.api_key = Some(key),
            SafeBrowserOption::ApiClient(client) => self.api_client = Some(client),
            SafeBrowserOption::Refresh(config) => self.refresh_config = config,
        }
        self
    }
}
