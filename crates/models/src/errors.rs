use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => ModelError::Duplicate(msg),
            _ => {
                let msg = e.to_string();
                // Drivers that don't expose a structured code still say so in the message.
                if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key value") {
                    ModelError::Duplicate(msg)
                } else {
                    ModelError::Db(msg)
                }
            }
        }
    }
}
