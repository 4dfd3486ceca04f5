use models::todo::{self, Entity as TodoEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::errors::ServiceError;

/// List all todos in insertion order.
pub async fn list_todos(db: &DatabaseConnection) -> Result<Vec<todo::Model>, ServiceError> {
    let rows = TodoEntity::find()
        .order_by_asc(todo::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Store(e.to_string()))?;
    Ok(rows)
}

/// Create a todo after validation.
pub async fn create_todo(
    db: &DatabaseConnection,
    content: &str,
    completed: bool,
) -> Result<todo::Model, ServiceError> {
    // validations are in models::todo
    let created = todo::create(db, content, completed).await?;
    Ok(created)
}

/// Replace a todo's content and completion flag wholesale.
/// Both mutable fields are always written; partial updates are not a thing here.
pub async fn update_todo(
    db: &DatabaseConnection,
    id: i32,
    content: &str,
    completed: bool,
) -> Result<todo::Model, ServiceError> {
    if id <= 0 {
        return Err(ServiceError::Validation("invalid or missing id".into()));
    }
    todo::validate_content(content)?;

    let current = TodoEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Store(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("todo")); };

    let mut am: todo::ActiveModel = existing.into();
    am.content = Set(content.to_string());
    am.completed = Set(completed);
    let updated = am.update(db).await.map_err(|e| ServiceError::Store(e.to_string()))?;
    Ok(updated)
}

/// Delete a todo; returns true if a row was removed.
pub async fn delete_todo(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = TodoEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Store(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;
    use sea_orm::{ConnectOptions, Database};

    async fn setup_test_db() -> DatabaseConnection {
        // Single connection so the whole test shares one :memory: database
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.expect("connect");
        migration::Migrator::up(&db, None).await.expect("migrate");
        db
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let db = setup_test_db().await;
        let rows = list_todos(&db).await.expect("list");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let db = setup_test_db().await;

        let created = create_todo(&db, "buy milk", false).await.expect("create");
        let rows = list_todos(&db).await.expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, created.id);
        assert_eq!(rows[0].content, "buy milk");
        assert!(!rows[0].completed);
    }

    #[tokio::test]
    async fn create_rejects_empty_content() {
        let db = setup_test_db().await;

        let err = create_todo(&db, "", true).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert!(list_todos(&db).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_wholesale() {
        let db = setup_test_db().await;

        let created = create_todo(&db, "walk dog", true).await.expect("create");
        // completed omitted by callers decodes to false; the update must write it
        let updated = update_todo(&db, created.id, "walk cat", false).await.expect("update");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.content, "walk cat");
        assert!(!updated.completed);

        let rows = list_todos(&db).await.expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content, "walk cat");
    }

    #[tokio::test]
    async fn update_missing_id_is_validation_error() {
        let db = setup_test_db().await;

        let err = update_todo(&db, 0, "x", false).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let db = setup_test_db().await;

        let err = update_todo(&db, 9999, "x", false).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_rejects_empty_content() {
        let db = setup_test_db().await;

        let created = create_todo(&db, "keep me", false).await.expect("create");
        let err = update_todo(&db, created.id, "", true).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));

        // Record untouched
        let rows = list_todos(&db).await.expect("list");
        assert_eq!(rows[0].content, "keep me");
    }

    #[tokio::test]
    async fn delete_removes_and_second_delete_reports_missing() {
        let db = setup_test_db().await;

        let created = create_todo(&db, "one shot", false).await.expect("create");
        assert!(delete_todo(&db, created.id).await.expect("delete"));
        assert!(list_todos(&db).await.expect("list").is_empty());

        // Deleting again finds nothing
        assert!(!delete_todo(&db, created.id).await.expect("delete again"));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let db = setup_test_db().await;

        create_todo(&db, "first", false).await.expect("create");
        create_todo(&db, "second", false).await.expect("create");
        create_todo(&db, "third", true).await.expect("create");

        let rows = list_todos(&db).await.expect("list");
        let contents: Vec<&str> = rows.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }
}
