use pretty_assertions::assert_eq;
use rowmap::{eq, Entity, FieldValue, Related, Value};
use tests::{models, tests, DbTest};

async fn foreign_key_round_trip(test: &mut DbTest) {
    let user = models::user();
    let employee = models::employee(&user);
    let db = test.setup_db(&[&user, &employee]).await;

    let mut mobin = Entity::new(
        &user,
        [("name", "mobin".into()), ("email", "mobin@example.com".into())],
    )
    .unwrap();
    mobin.save(&db).await.unwrap();
    assert_eq!(mobin.id(), Value::I64(1));

    let mut mohammad = Entity::new(
        &employee,
        [
            ("name", "mohammad".into()),
            ("phonenum", "0915".into()),
            ("user", (&mobin).into()),
        ],
    )
    .unwrap();
    mohammad.save(&db).await.unwrap();

    // The foreign-key column holds the user's primary key
    let insert = test.log().last_op();
    assert_eq!(insert.params.last(), Some(&Value::I64(1)));

    let loaded = db
        .objects(&employee)
        .get([eq("name", "mohammad")])
        .await
        .unwrap()
        .unwrap();

    let owner = loaded.related("user").unwrap();
    assert_eq!(owner.id(), mobin.id());
    assert_eq!(owner.get::<String>("name").unwrap(), "mobin");
    assert_eq!(loaded.value("user").unwrap(), Value::I64(1));
}

async fn foreign_key_from_raw_key(test: &mut DbTest) {
    let user = models::user();
    let employee = models::employee(&user);
    let db = test.setup_db(&[&user, &employee]).await;

    let mut naser = Entity::new(
        &user,
        [("name", "naser".into()), ("email", "naser@example.com".into())],
    )
    .unwrap();
    naser.save(&db).await.unwrap();

    let mut nima = Entity::new(
        &employee,
        [("name", "nima".into()), ("user", naser.id().into())],
    )
    .unwrap();
    assert!(nima.related("user").is_none());
    nima.save(&db).await.unwrap();

    // An unresolved key is loaded on request
    let owner = nima.resolve(&db, "user").await.unwrap().unwrap();
    assert_eq!(owner.get::<String>("name").unwrap(), "naser");
    assert!(matches!(
        nima.field("user"),
        Some(FieldValue::Related(Related::Resolved(_)))
    ));
}

async fn dangling_foreign_key_is_unset(test: &mut DbTest) {
    let user = models::user();
    let employee = models::employee(&user);
    let db = test.setup_db(&[&user, &employee]).await;

    let mut orphan = Entity::new(&employee, [("name", "orphan".into()), ("user", 99.into())]).unwrap();
    orphan.save(&db).await.unwrap();

    let loaded = db
        .objects(&employee)
        .get([eq("name", "orphan")])
        .await
        .unwrap()
        .unwrap();

    assert!(loaded.related("user").is_none());
    assert!(matches!(
        loaded.field("user"),
        Some(FieldValue::Related(related)) if related.is_unset()
    ));
    assert_eq!(loaded.value("user").unwrap(), Value::Null);
}

async fn null_foreign_key_runs_no_lookup(test: &mut DbTest) {
    let user = models::user();
    let employee = models::employee(&user);
    let db = test.setup_db(&[&user, &employee]).await;

    let mut loner = Entity::new(&employee, [("name", "loner".into())]).unwrap();
    loner.save(&db).await.unwrap();
    test.log().clear();

    let employees = db.objects(&employee).all().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert!(employees[0].related("user").is_none());

    // Only the SELECT on `employee`; no lookup on `user`
    assert_eq!(test.log().len(), 1);
}

async fn filter_by_entity(test: &mut DbTest) {
    let user = models::user();
    let employee = models::employee(&user);
    let db = test.setup_db(&[&user, &employee]).await;

    let mut mobin = Entity::new(&user, [("email", "mobin@example.com".into())]).unwrap();
    mobin.save(&db).await.unwrap();
    let mut naser = Entity::new(&user, [("email", "naser@example.com".into())]).unwrap();
    naser.save(&db).await.unwrap();

    for (name, owner) in [("mohammad", &mobin), ("nima", &mobin), ("ali", &naser)] {
        let mut e = Entity::new(&employee, [("name", name.into()), ("user", owner.into())]).unwrap();
        e.save(&db).await.unwrap();
    }

    let employees = db
        .objects(&employee)
        .filter([eq("user", &mobin)])
        .await
        .unwrap();

    let names = employees
        .iter()
        .map(|e| e.get::<String>("name").unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["mohammad", "nima"]);
}

async fn filter_by_unsaved_entity_is_rejected(test: &mut DbTest) {
    let user = models::user();
    let employee = models::employee(&user);
    let db = test.setup_db(&[&user, &employee]).await;

    let mut loner = Entity::new(&employee, [("name", "loner".into())]).unwrap();
    loner.save(&db).await.unwrap();
    test.log().clear();

    let stranger = Entity::new(&user, [("email", "x@example.com".into())]).unwrap();
    let err = db
        .objects(&employee)
        .filter([eq("user", &stranger)])
        .await
        .unwrap_err();

    assert!(err.is_state());
    assert!(test.log().is_empty());

    // A null key is still a valid filter
    let employees = db
        .objects(&employee)
        .filter([eq("user", Value::Null)])
        .await
        .unwrap();
    assert_eq!(employees.len(), 1);
}

async fn foreign_key_not_null_rejects_unset(test: &mut DbTest) {
    let user = models::user();
    let badge = rowmap::Schema::builder("Badge")
        .field("owner", rowmap::Field::foreign_key(&user))
        .build()
        .unwrap();
    let db = test.setup_db(&[&user, &badge]).await;

    let mut orphan = Entity::new(&badge, Vec::<(&str, FieldValue)>::new()).unwrap();
    let err = orphan.save(&db).await.unwrap_err();
    assert!(err.is_null_constraint());

    // An owner that was never saved has no key to store
    let stranger = Entity::new(&user, [("email", "x@example.com".into())]).unwrap();
    orphan.set("owner", stranger).unwrap();
    let err = orphan.save(&db).await.unwrap_err();
    assert!(err.is_null_constraint());
}

tests!(
    foreign_key_round_trip,
    foreign_key_from_raw_key,
    dangling_foreign_key_is_unset,
    null_foreign_key_runs_no_lookup,
    filter_by_entity,
    filter_by_unsaved_entity_is_rejected,
    foreign_key_not_null_rejects_unset,
);
