use rowmap::{Db, Entity};
use tests::{models, tests, DbTest};

async fn closed_handle_fails(test: &mut DbTest) {
    let user = models::user();
    let db = test.setup_db(&[&user]).await;

    db.close().await.unwrap();
    // Closing again is a no-op
    db.close().await.unwrap();

    let err = db.objects(&user).all().await.unwrap_err();
    assert!(err.is_execution());
    assert_eq!(err.to_string(), "connection closed");

    let mut mobin = Entity::new(&user, [("email", "mobin@example.com".into())]).unwrap();
    assert!(mobin.save(&db).await.unwrap_err().is_execution());
}

tests!(closed_handle_fails);

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn connect_in_memory() {
    let user = models::user();
    let db = Db::connect("sqlite::memory:").await.unwrap();

    db.create_table(&user).await.unwrap();
    let mut mobin = Entity::new(&user, [("email", "mobin@example.com".into())]).unwrap();
    mobin.save(&db).await.unwrap();
    assert_eq!(db.objects(&user).all().await.unwrap().len(), 1);

    db.close().await.unwrap();
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn connect_file_persists_rows() {
    let path = std::env::temp_dir().join(format!("rowmap-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());
    let user = models::user();

    let db = Db::connect(&url).await.unwrap();
    db.create_table(&user).await.unwrap();
    let mut mobin = Entity::new(&user, [("email", "mobin@example.com".into())]).unwrap();
    mobin.save(&db).await.unwrap();
    db.close().await.unwrap();

    let db = Db::connect(&url).await.unwrap();
    let users = db.objects(&user).all().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].get::<String>("email").unwrap(), "mobin@example.com");
    db.close().await.unwrap();

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn connect_rejects_unknown_scheme() {
    let err = Db::connect("redis://localhost:6379").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn connect_reports_missing_database() {
    let err = Db::connect("sqlite:/nonexistent-rowmap-dir/app.db")
        .await
        .unwrap_err();
    assert!(err.is_execution());
    assert_eq!(err.to_string(), "database does not exist");
}
