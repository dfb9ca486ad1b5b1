// [libs/domain/safe-browser/src/errors.rs]
//! =================================================================
//! APARATO: SAFE BROWSER ERRORS (ESTRATO L2 - DOMAIN)
//! RESPONSABILIDAD: CATALOGACIÓN DE FALLOS DE LA FACHADA PÚBLICA
//! =================================================================

use aegis_core_database::DatabaseError;
use aegis_domain_expressions::ExpressionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SafeBrowserError {
    #[error("no api_key or api_client option supplied to SafeBrowser::new")]
    MissingCollaborator,

    #[error("initial refresh did not complete within the construction deadline")]
    ConstructionTimeout,

    #[error("local database failure: {0}")]
    Database(#[from] DatabaseError),

    #[error("invalid url in check_urls: {0}")]
    Expression(#[from] ExpressionError),
}
