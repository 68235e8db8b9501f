use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: String },
    #[error("{entity} not found (id={id})")]
    MissingReference { entity: &'static str, id: String },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn missing_reference(entity: &'static str, id: impl ToString) -> Self {
        Self::MissingReference {
            entity,
            id: id.to_string(),
        }
    }
}
