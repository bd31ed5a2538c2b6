//! Prometheus gauges for the connection pool

use prometheus::{register_int_gauge_vec, IntGaugeVec};
use sqlx::PgPool;

lazy_static::lazy_static! {
    /// Pool connection count by state (idle/active/max)
    static ref DB_POOL_CONNECTIONS: IntGaugeVec = register_int_gauge_vec!(
        "db_pool_connections",
        "Database pool connection count by state",
        &["service", "state"]
    ).expect("Prometheus metrics registration should succeed at startup");
}

/// Snapshot of the pool, split the way the gauges report it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolUsage {
    pub idle: i64,
    pub active: i64,
    pub max: i64,
}

impl PoolUsage {
    pub fn from_counts(size: u32, idle: usize, max: u32) -> Self {
        let idle = i64::try_from(idle).unwrap_or(i64::MAX);
        Self {
            idle,
            active: (i64::from(size) - idle).max(0),
            max: i64::from(max),
        }
    }

    pub fn of(pool: &PgPool) -> Self {
        Self::from_counts(
            pool.size(),
            pool.num_idle(),
            pool.options().get_max_connections(),
        )
    }
}

/// Refresh the pool gauges (called periodically)
pub(crate) fn update_pool_metrics(pool: &PgPool, service: &str) {
    let usage = PoolUsage::of(pool);

    for (state, value) in [
        ("idle", usage.idle),
        ("active", usage.active),
        ("max", usage.max),
    ] {
        DB_POOL_CONNECTIONS
            .with_label_values(&[service, state])
            .set(value);
    }
}
