pub mod application;
pub mod config;
pub mod console;
pub mod db;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod schema;

#[cfg(test)]
mod testing;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub use application::order_service::OrderService;
pub use config::{Config, Environment};
pub use console::ConsoleApp;
pub use db::{create_pool, DbPool};
pub use errors::AppError;
pub use infrastructure::order_repo::DieselOrderRepository;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), AppError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::Migration(e.to_string()))?;
    log::info!("Applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Migrate the schema and load the sample data if the database is empty.
pub fn prepare_database(pool: &DbPool) -> Result<(), AppError> {
    run_migrations(pool)?;
    let mut conn = pool.get()?;
    infrastructure::seed::seed_sample_data(&mut conn)?;
    Ok(())
}

/// Wire the Diesel repository into the service and console loop.
pub fn build_app(pool: DbPool) -> ConsoleApp<DieselOrderRepository> {
    ConsoleApp::new(OrderService::new(DieselOrderRepository::new(pool)))
}
