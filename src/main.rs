use customer_order_viewer::{build_app, create_pool, prepare_database, AppError, Config};
use dotenvy::dotenv;
use std::io;

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    log::info!("Starting customer order viewer ({} environment)", config.environment);

    let pool = create_pool(&config.database_url);
    if config.environment.prepares_database() {
        prepare_database(&pool)?;
    }

    let app = build_app(pool);
    app.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
