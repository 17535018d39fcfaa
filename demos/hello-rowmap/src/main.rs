mod models;

use clap::{Parser, Subcommand};
use rowmap::{eq, Db, Entity, FieldValue, Schema};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Walk through rowmap against a real database")]
struct Cli {
    /// Database to connect to, `sqlite:<path>`, `sqlite::memory:` or `mysql://...`
    #[arg(long, env = "ROWMAP_DATABASE_URL", default_value = "sqlite:./hello-rowmap.db")]
    url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Create the `user` and `employee` tables
    CreateTables,
    /// Add three users and two employees
    Add,
    /// Print every user and employee
    List,
    /// Delete every employee
    Delete,
    /// All of the above, in order
    Run,
}

struct Models {
    user: Arc<Schema>,
    employee: Arc<Schema>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let user = models::user()?;
    let employee = models::employee(&user)?;
    let models = Models { user, employee };

    tracing::info!(url = %cli.url, "connecting");
    let db = Db::connect(&cli.url).await?;

    match cli.command.unwrap_or(Command::Run) {
        Command::CreateTables => create_tables(&db, &models).await?,
        Command::Add => add(&db, &models).await?,
        Command::List => list(&db, &models).await?,
        Command::Delete => delete(&db, &models).await?,
        Command::Run => {
            create_tables(&db, &models).await?;
            add(&db, &models).await?;
            list(&db, &models).await?;
            delete(&db, &models).await?;
            list(&db, &models).await?;
        }
    }

    db.close().await?;
    Ok(())
}

async fn create_tables(db: &Db, models: &Models) -> rowmap::Result<()> {
    println!("==> creating tables");
    db.create_table(&models.user).await?;
    db.create_table(&models.employee).await?;
    Ok(())
}

async fn add(db: &Db, models: &Models) -> rowmap::Result<()> {
    println!("==> adding users");
    for (name, email) in [
        (None, "mmd@example.com"),
        (Some("mobin"), "mobin@example.com"),
        (Some("naser"), "naser@example.com"),
    ] {
        let mut fields: Vec<(&str, FieldValue)> = vec![("email", email.into())];
        if let Some(name) = name {
            fields.push(("name", name.into()));
        }

        let mut user = Entity::new(&models.user, fields)?;
        user.save(db).await?;
        println!(" -> {user:?}");
    }

    let Some(mobin) = db
        .objects(&models.user)
        .get([eq("name", "mobin")])
        .await?
    else {
        rowmap::bail!("user `mobin` was not saved");
    };

    println!("==> adding employees of {:?}", mobin.id());
    for (name, phonenum) in [("mohammad", "0915"), ("nima", "0936")] {
        let mut employee = Entity::new(
            &models.employee,
            [
                ("name", name.into()),
                ("phonenum", phonenum.into()),
                ("user", (&mobin).into()),
            ],
        )?;
        employee.save(db).await?;
        println!(" -> {employee:?}");
    }

    Ok(())
}

async fn list(db: &Db, models: &Models) -> rowmap::Result<()> {
    println!("==> users");
    for user in db.objects(&models.user).all().await? {
        println!(
            "ID: {:?}, Name: {}, Email: {}",
            user.id(),
            user.get::<String>("name")?,
            user.get::<String>("email")?,
        );
    }

    println!("==> employees");
    for employee in db.objects(&models.employee).all().await? {
        let owner = match employee.related("user") {
            Some(user) => user.get::<String>("name")?,
            None => "-".to_string(),
        };
        println!(
            "ID: {:?}, Name: {:?}, phoneNum: {:?}, User: {owner}",
            employee.id(),
            employee.get::<Option<String>>("name")?,
            employee.get::<Option<String>>("phonenum")?,
        );
    }

    Ok(())
}

async fn delete(db: &Db, models: &Models) -> rowmap::Result<()> {
    println!("==> deleting employees");
    for mut employee in db.objects(&models.employee).all().await? {
        employee.delete(db).await?;
    }
    Ok(())
}
