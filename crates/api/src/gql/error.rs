/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `From<sqlx::Error>` — logs the DB detail, shows a sanitized message to clients
///   - `GqlError::new("…")` — custom one-off messages
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}
