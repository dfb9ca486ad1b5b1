// [libs/core/database/src/errors.rs]
//! =================================================================
//! APARATO: LOCAL DATABASE ERRORS (ESTRATO L1 - CORE)
//! RESPONSABILIDAD: CATALOGACIÓN DE FALLOS DE REFRESCO Y DECODIFICACIÓN
//! =================================================================

use aegis_core_rice_codec::RiceError;
use aegis_infra_remote_api::RemoteError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("remote list '{0}' has no counterpart in the recommended-list table")]
    UnknownListName(String),

    #[error("remote collaborator failure: {0}")]
    Remote(#[from] RemoteError),

    #[error("failed to decode list '{list_name}': {source}")]
    DecodeFailure { list_name: String, #[source] source: RiceError },

    #[error("list '{0}' carries neither a 32-bit nor a 256-bit compressed body")]
    EmptyListBody(String),
}
