use pretty_assertions::assert_eq;
use rowmap::{eq, Entity, Field, OrderBy, Schema, Value};
use std::sync::Arc;
use tests::{models, tests, DbTest};

fn pair() -> Arc<Schema> {
    Schema::builder("Pair")
        .field("a", Field::integer())
        .field("b", Field::integer())
        .build()
        .unwrap()
}

async fn filters_accumulate(test: &mut DbTest) {
    let pair = pair();
    let db = test.setup_db(&[&pair]).await;

    for (a, b) in [(1, 1), (1, 2), (2, 2)] {
        let mut row = Entity::new(&pair, [("a", a.into()), ("b", b.into())]).unwrap();
        row.save(&db).await.unwrap();
    }

    let mut query = db.objects(&pair);
    assert_eq!(query.filter([eq("a", 1)]).await.unwrap().len(), 2);

    let matched = query.filter([eq("b", 2)]).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].get::<i64>("a").unwrap(), 1);
    assert_eq!(matched[0].get::<i64>("b").unwrap(), 2);

    if test.is_sqlite() {
        let select = test.log().last_op();
        assert_eq!(
            select.sql,
            "SELECT * FROM \"pair\" WHERE \"a\" = ?1 AND \"b\" = ?2;"
        );
        assert_eq!(select.params, vec![Value::I64(1), Value::I64(2)]);
    }

    // A fresh query starts over
    assert_eq!(db.objects(&pair).filter([eq("b", 2)]).await.unwrap().len(), 2);
}

async fn several_clauses_in_one_call(test: &mut DbTest) {
    let user = models::user();
    let db = test.setup_db(&[&user]).await;

    let mut mobin = Entity::new(
        &user,
        [("name", "mobin".into()), ("email", "mobin@example.com".into())],
    )
    .unwrap();
    mobin.save(&db).await.unwrap();

    let found = db
        .objects(&user)
        .get([eq("name", "mobin"), eq("email", "mobin@example.com")])
        .await
        .unwrap();
    assert_eq!(found.unwrap().id(), mobin.id());

    let missing = db
        .objects(&user)
        .get([eq("name", "mobin"), eq("email", "other@example.com")])
        .await
        .unwrap();
    assert!(missing.is_none());
}

async fn order_and_limit(test: &mut DbTest) {
    let pair = pair();
    let db = test.setup_db(&[&pair]).await;

    for a in [3, 1, 4, 1, 5] {
        let mut row = Entity::new(&pair, [("a", a.into()), ("b", 0.into())]).unwrap();
        row.save(&db).await.unwrap();
    }

    let values = |rows: Vec<Entity>| {
        rows.iter()
            .map(|row| row.get::<i64>("a").unwrap())
            .collect::<Vec<_>>()
    };

    let mut query = db.objects(&pair);
    assert_eq!(values(query.order_by("a").await.unwrap()), vec![1, 1, 3, 4, 5]);
    assert_eq!(
        values(query.order_by(OrderBy::desc("a")).await.unwrap()),
        vec![5, 4, 3, 1, 1]
    );
    assert_eq!(values(query.limit(2).await.unwrap()), vec![5, 4]);

    if test.is_sqlite() {
        assert_eq!(
            test.log().last_op().sql,
            "SELECT * FROM \"pair\" ORDER BY \"a\" DESC LIMIT 2;"
        );
    }

    // Filters still accumulate on top of an ordered, limited query
    assert_eq!(values(query.filter([eq("a", 1)]).await.unwrap()), vec![1, 1]);
}

async fn null_filter(test: &mut DbTest) {
    let user = models::user();
    let employee = models::employee(&user);
    let db = test.setup_db(&[&user, &employee]).await;

    let mut anonymous = Entity::new(&employee, [("name", Value::Null.into())]).unwrap();
    anonymous.save(&db).await.unwrap();
    let mut named = Entity::new(&employee, [("name", "nima".into())]).unwrap();
    named.save(&db).await.unwrap();

    let found = db
        .objects(&employee)
        .filter([eq("name", Value::Null)])
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), anonymous.id());

    if test.is_sqlite() {
        let select = test.log().last_op();
        assert_eq!(select.sql, "SELECT * FROM \"employee\" WHERE \"name\" IS NULL;");
        assert!(select.params.is_empty());
    }
}

async fn unknown_field_runs_nothing(test: &mut DbTest) {
    let user = models::user();
    let db = test.setup_db(&[&user]).await;

    let mut query = db.objects(&user);

    let err = query.filter([eq("salary", 10)]).await.unwrap_err();
    assert!(err.is_unknown_field());
    assert_eq!(err.to_string(), "no field `salary` on `user`");

    let err = query.order_by("salary").await.unwrap_err();
    assert!(err.is_unknown_field());

    assert!(test.log().is_empty());

    // The failed calls left nothing behind
    assert!(query.all().await.unwrap().is_empty());
    assert_eq!(test.log().count_sql("SELECT * FROM"), 1);
}

async fn all_on_empty_table(test: &mut DbTest) {
    let user = models::user();
    let db = test.setup_db(&[&user]).await;

    assert!(db.objects(&user).all().await.unwrap().is_empty());
    assert!(db.objects(&user).get([eq("id", 1)]).await.unwrap().is_none());
}

tests!(
    filters_accumulate,
    several_clauses_in_one_call,
    order_and_limit,
    null_filter,
    unknown_field_runs_nothing,
    all_on_empty_table,
);
