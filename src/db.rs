use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// How long a checkout waits for a connection before the request fails.
pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the pool without opening any connection. An unreachable store
/// surfaces later as a failed checkout on the request that needs it.
pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .min_idle(Some(0))
        .connection_timeout(CONNECTION_TIMEOUT)
        .build_unchecked(manager)
}
