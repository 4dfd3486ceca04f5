use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_content(content: &str) -> Result<(), errors::ModelError> {
    if content.is_empty() {
        return Err(errors::ModelError::Validation("content cannot be empty".into()));
    }
    Ok(())
}

/// Insert a todo; the store assigns the id.
pub async fn create(
    db: &DatabaseConnection,
    content: &str,
    completed: bool,
) -> Result<Model, errors::ModelError> {
    validate_content(content)?;

    let am = ActiveModel {
        id: NotSet,
        content: Set(content.to_string()),
        completed: Set(completed),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
