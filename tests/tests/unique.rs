use rowmap::{Entity, Value};
use tests::{models, tests, DbTest};

async fn duplicate_insert_is_rejected(test: &mut DbTest) {
    let user = models::user();
    let db = test.setup_db(&[&user]).await;

    let mut first = Entity::new(&user, [("email", "mobin@example.com".into())]).unwrap();
    first.save(&db).await.unwrap();

    let mut second = Entity::new(&user, [("email", "mobin@example.com".into())]).unwrap();
    let err = second.save(&db).await.unwrap_err();

    assert!(err.is_unique_constraint());
    assert_eq!(
        err.to_string(),
        "unique constraint violated: `user.email` already holds String(\"mobin@example.com\")"
    );
    assert!(!second.is_persisted());
    assert_eq!(db.objects(&user).all().await.unwrap().len(), 1);
}

async fn keeping_own_value_is_allowed(test: &mut DbTest) {
    let user = models::user();
    let db = test.setup_db(&[&user]).await;

    let mut mobin = Entity::new(&user, [("email", "mobin@example.com".into())]).unwrap();
    mobin.save(&db).await.unwrap();

    mobin
        .update(&db, [("email", "mobin@example.com".into())])
        .await
        .unwrap();

    mobin.set("name", "mobin").unwrap();
    mobin.save(&db).await.unwrap();
}

async fn taking_another_value_is_rejected(test: &mut DbTest) {
    let user = models::user();
    let db = test.setup_db(&[&user]).await;

    let mut mobin = Entity::new(&user, [("email", "mobin@example.com".into())]).unwrap();
    mobin.save(&db).await.unwrap();
    let mut naser = Entity::new(&user, [("email", "naser@example.com".into())]).unwrap();
    naser.save(&db).await.unwrap();

    let err = naser
        .update(&db, [("email", "mobin@example.com".into())])
        .await
        .unwrap_err();
    assert!(err.is_unique_constraint());

    let err = {
        naser.set("email", "mobin@example.com").unwrap();
        naser.save(&db).await.unwrap_err()
    };
    assert!(err.is_unique_constraint());
}

async fn nulls_never_collide(test: &mut DbTest) {
    let user = models::user();
    let employee = models::employee(&user);
    let db = test.setup_db(&[&user, &employee]).await;

    for name in ["mohammad", "nima"] {
        let mut e = Entity::new(
            &employee,
            [("name", name.into()), ("phonenum", Value::Null.into())],
        )
        .unwrap();
        e.save(&db).await.unwrap();
    }

    assert_eq!(db.objects(&employee).all().await.unwrap().len(), 2);
}

tests!(
    duplicate_insert_is_rejected,
    keeping_own_value_is_allowed,
    taking_another_value_is_rejected,
    nulls_never_collide,
);
