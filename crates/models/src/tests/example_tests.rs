use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::{db::{connect_ephemeral, test_connection}, errors::ModelError, example};

async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_ephemeral().await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_ephemeral_connection_is_usable() -> Result<()> {
    let db = setup_test_db().await?;
    test_connection(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_create_and_find() -> Result<()> {
    let db = setup_test_db().await?;

    let created = example::create(&db, "abcd").await?;
    assert_eq!(created.id, "abcd");
    assert_eq!(created.created_at, created.updated_at);

    let found = example::find_by_id(&db, "abcd").await?;
    assert_eq!(found.map(|m| m.id), Some("abcd".to_string()));
    assert!(example::find_by_id(&db, "zzz").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_find_all_returns_every_row() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(example::find_all(&db).await?.is_empty());

    for id in ["one", "two", "three"] {
        example::create(&db, id).await?;
    }
    let mut ids: Vec<String> = example::find_all(&db).await?.into_iter().map(|m| m.id).collect();
    ids.sort();
    assert_eq!(ids, vec!["one", "three", "two"]);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_primary_key_is_reported_as_duplicate() -> Result<()> {
    let db = setup_test_db().await?;
    example::create(&db, "dup").await?;

    let err = example::create(&db, "dup").await.unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)), "unexpected error: {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_empty_id_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let err = example::create(&db, "").await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}

#[test]
fn test_model_serializes_camel_case_timestamps() {
    let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
    let m = example::Model { id: "abc".into(), created_at: now, updated_at: now };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["id"], "abc");
    assert!(v.get("createdAt").is_some());
    assert!(v.get("updatedAt").is_some());
    assert!(v.get("created_at").is_none());
}
