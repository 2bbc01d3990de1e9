#[derive(Debug)]
pub enum ServiceError {
    /// An operation targeted an id that does not exist. Updates return this
    /// instead of silently doing nothing.
    NotFound { entity: &'static str, id: String },
    /// Registration with an email that already has an account.
    EmailExists(String),
    /// The underlying slot store failed to read or write.
    Store(String),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn store(e: std::io::Error) -> Self {
        ServiceError::Store(e.to_string())
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            ServiceError::EmailExists(email) => write!(f, "email already exists: {email}"),
            ServiceError::Store(e) => write!(f, "store error: {e}"),
        }
    }
}

impl std::error::Error for ServiceError {}
