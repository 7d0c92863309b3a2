use sea_orm::{entity::prelude::*, QueryOrder, Set, ConnectionTrait};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Record row. Serialized with camelCase timestamps (`createdAt`, `updatedAt`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "example")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::CreatedAt).all(db).await?)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id.to_string()).one(db).await?)
}

/// Insert a row stamped with the current time. A primary-key clash comes back as
/// `ModelError::Duplicate`.
pub async fn create<C: ConnectionTrait>(db: &C, id: &str) -> Result<Model, errors::ModelError> {
    if id.is_empty() {
        return Err(errors::ModelError::Validation("id required".into()));
    }
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: Set(id.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}
