use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{motorcycle::MotorcycleRepository, user::UserRepository},
    error::AppError,
    model::{
        motorcycle::{MotorcycleModel, NewMotorcycle},
        user::CreateUserParam,
    },
    util::password::hash_password,
};

const DEMO_USER_NAME: &str = "Admin Demo";
const DEMO_USER_EMAIL: &str = "admin@mottu.com";
const DEMO_USER_PASSWORD: &str = "123456";

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds a demo account and two motorcycles into an empty database.
///
/// Does nothing once any user exists, so restarts never duplicate the demo data.
///
/// # Arguments
/// - `db` - Migrated database connection
///
/// # Returns
/// - `Ok(true)` - Demo data inserted
/// - `Ok(false)` - Database already had users
/// - `Err(AppError)` - Hashing or database failure
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.count().await? > 0 {
        return Ok(false);
    }

    let password_hash = hash_password(DEMO_USER_PASSWORD.to_string()).await?;
    user_repo
        .create(CreateUserParam {
            name: DEMO_USER_NAME.to_string(),
            email: DEMO_USER_EMAIL.to_string(),
            password_hash,
        })
        .await?;

    let motorcycle_repo = MotorcycleRepository::new(db);
    for (plate, year, model) in [
        ("ABC-1234", 2022, MotorcycleModel::Sport),
        ("XYZ-0001", 2024, MotorcycleModel::Pop),
    ] {
        if motorcycle_repo.exists_by_plate(plate).await? {
            continue;
        }

        motorcycle_repo
            .create(NewMotorcycle {
                plate: plate.to_string(),
                year,
                model,
            })
            .await?;
    }

    tracing::info!("Seeded demo user {}", DEMO_USER_EMAIL);

    Ok(true)
}
