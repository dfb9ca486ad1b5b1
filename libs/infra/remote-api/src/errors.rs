// [libs/infra/remote-api/src/errors.rs]
//! =================================================================
//! APARATO: REMOTE API ERRORS (ESTRATO L3 - INFRA)
//! RESPONSABILIDAD: CATALOGACIÓN DE FALLOS DEL COLABORADOR REMOTO
//! =================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("network failure reaching the reputation service: {0}")]
    NetworkFault(#[from] reqwest::Error),

    #[error("failed to decode service response: {0}")]
    DecodingFault(#[from] serde_json::Error),

    #[error("service rejected the request: {0}")]
    ServerRejection(String),

    #[error("fixture i/o failure: {0}")]
    FixtureIoFault(#[from] std::io::Error),
}
