/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Errors raised by a [`super::History`] backend.
#[derive(Debug)]
pub enum StoreError {
    Postgres(PgErr),
    NegativeLimit(i64),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres(e) => write!(f, "{}", e),
            Self::NegativeLimit(n) => write!(f, "LIMIT must not be negative, got {}", n),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Postgres(e) => Some(e),
            Self::NegativeLimit(_) => None,
        }
    }
}

impl From<PgErr> for StoreError {
    fn from(e: PgErr) -> Self {
        Self::Postgres(e)
    }
}
