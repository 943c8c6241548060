//! Error types for lightbnb-db

use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure of a gateway operation.
///
/// "Not found" is not an error: lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("conflict: {resource} {detail}")]
    Conflict {
        resource: &'static str,
        detail: String,
    },

    #[error("migration failed: {0}")]
    Migration(#[source] sqlx::Error),
}

impl GatewayError {
    /// Map unique violations to `Conflict`, everything else to `Query`.
    pub(crate) fn from_insert(resource: &'static str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::Conflict {
                    resource,
                    detail: db_err.message().to_owned(),
                };
            }
        }
        Self::Query(err)
    }
}
