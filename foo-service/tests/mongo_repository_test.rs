//! Runs against a live MongoDB (`TEST_MONGODB_URI`, default localhost).

mod common;

use common::{foo, ID, VALUE};
use foo_service::services::{FooRepository, FooService, MongoFooRepository};
use std::sync::Arc;

async fn connect() -> (MongoFooRepository, String) {
    let uri = std::env::var("TEST_MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = format!("foo_test_{}", uuid::Uuid::new_v4().simple());
    let repository = MongoFooRepository::connect(&uri, &db_name)
        .await
        .expect("Failed to connect to MongoDB");
    (repository, db_name)
}

async fn teardown_test_db(db_name: &str) {
    let uri = std::env::var("TEST_MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = mongodb::Client::with_uri_str(&uri).await.unwrap();
    client.database(db_name).drop(None).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires MongoDB to be running"]
async fn save_then_find_by_id() {
    let (repository, db_name) = connect().await;

    assert_eq!(repository.find_by_id(ID).await.unwrap(), None);

    let saved = repository.save(foo(ID, VALUE)).await.unwrap();
    assert_eq!(saved, foo(ID, VALUE));
    assert_eq!(repository.find_by_id(ID).await.unwrap(), Some(foo(ID, VALUE)));

    repository.save(foo(ID, "updated")).await.unwrap();
    assert_eq!(
        repository.find_by_id(ID).await.unwrap(),
        Some(foo(ID, "updated"))
    );

    teardown_test_db(&db_name).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB to be running"]
async fn multi_get_through_service() {
    let (repository, db_name) = connect().await;
    repository.save(foo(ID, VALUE)).await.unwrap();
    repository.save(foo("test-2222", "value-2222")).await.unwrap();

    let service = FooService::new(Arc::new(repository));

    let single = service.get_all_the_foos(&[ID.to_string()]).await.unwrap();
    assert_eq!(single, vec![foo(ID, VALUE)]);

    let mut bars = service
        .get_all_the_foos_as_bars(&[ID.to_string(), "test-2222".to_string(), "nope".to_string()])
        .await
        .unwrap();
    bars.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[1].value, "value-2222");

    assert!(service.get_all_the_foos(&[]).await.unwrap().is_empty());

    teardown_test_db(&db_name).await;
}
