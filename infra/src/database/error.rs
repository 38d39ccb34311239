//! Translation of sqlx errors into domain errors

use jb_core::errors::DomainError;

/// Maps a sqlx error raised while working on `resource` to a domain error.
///
/// Constraint violations are caller errors: a duplicate unique key becomes
/// `Conflict`, a dangling foreign key or failed CHECK becomes `Validation`.
/// Everything else is logged and reported as `Database`.
pub fn map_sqlx_error(resource: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            tracing::debug!(resource = resource, "Unique constraint violated");
            return DomainError::conflict(format!("{} already exists", resource));
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::Validation {
                message: format!("{} references a record that does not exist", resource),
            };
        }
        if db_err.is_check_violation() {
            return DomainError::Validation {
                message: format!("{} violates a data constraint", resource),
            };
        }
    }

    tracing::error!(resource = resource, error = %err, "Database query failed");
    DomainError::Database {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_errors_become_database_errors() {
        let err = map_sqlx_error("User", sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Database { .. }));
    }

    #[test]
    fn test_pool_timeout_is_not_a_conflict() {
        let err = map_sqlx_error("House", sqlx::Error::PoolTimedOut);
        assert!(!err.is_conflict());
    }
}
