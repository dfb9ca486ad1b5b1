// [libs/infra/remote-api/src/client.rs]
/*!
 * =================================================================
 * APARATO: REMOTE API COLLABORATOR (ESTRATO L3 - INFRA)
 * RESPONSABILIDAD: CONTRATO Y CLIENTE HTTP POR DEFECTO
 *
 * `SafeBrowsingApi` es el único punto de costura polimórfica del
 * workspace: la base local de datos no sabe si habla con el servicio
 * real o con un doble de prueba, solo conoce este contrato.
 * =================================================================
 */

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::instrument;

use crate::errors::RemoteError;
use crate::wire::ListHashListsResponse;

/// Contrato del colaborador remoto de reputación: dos operaciones GET.
#[async_trait]
pub trait SafeBrowsingApi: Send + Sync {
    /// Devuelve el catálogo de listas disponibles con sus metadatos.
    async fn list_hash_lists(&self) -> Result<ListHashListsResponse, RemoteError>;

    /// Devuelve los cuerpos de las listas nombradas, alineados posicionalmente con `names`.
    async fn batch_get(&self, names: &[String]) -> Result<ListHashListsResponse, RemoteError>;
}

/// Cliente HTTP por defecto: reqwest con la clave de API como query param `key`.
pub struct HttpSafeBrowsingApi {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpSafeBrowsingApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::builder()
                .user_agent("aegis-safe-browser/0.1")
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("FATAL: http client initialization failed"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl SafeBrowsingApi for HttpSafeBrowsingApi {
    #[instrument(skip(self))]
    async fn list_hash_lists(&self) -> Result<ListHashListsResponse, RemoteError> {
        let url = format!("{}/v5/hashLists", self.base_url);
        let response = self.http.get(&url).query(&[("key", &self.api_key)]).send().await?;

        if response.status() != StatusCode::OK {
            return Err(RemoteError::ServerRejection(format!("HTTP_{}", response.status())));
        }
        Ok(response.json::<ListHashListsResponse>().await?)
    }

    #[instrument(skip(self, names))]
    async fn batch_get(&self, names: &[String]) -> Result<ListHashListsResponse, RemoteError> {
        let url = format!("{}/v5/hashLists:batchGet", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(&names.iter().map(|n| ("names", n.as_str())).collect::<Vec<_>>())
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(RemoteError::ServerRejection(format!("HTTP_{}", response.status())));
        }
        Ok(response.json::<ListHashListsResponse>().await?)
    }
}
