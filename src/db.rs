use diesel::{
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection, Error as ConnectionError, Pool},
    SqliteConnection,
};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const CREATE_ENTRIES: &str =
    include_str!("../migrations/2024-05-12-093000_create_entries/up.sql");

#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, ConnectionError> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), ConnectionError> {
        // Concurrent writers wait on the file lock instead of failing immediately
        conn.batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(ConnectionError::QueryError)
    }
}

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}

/// Creates the `entries` table when it does not exist yet.
pub fn ensure_schema(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    conn.batch_execute(CREATE_ENTRIES)?;
    Ok(())
}

#[cfg(test)]
pub fn test_pool() -> DbPool {
    // One connection keeps the in-memory database alive for the pool's lifetime
    let pool = build_pool(":memory:", 1).expect("in-memory pool");
    ensure_schema(&pool).expect("schema");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::prelude::*;
    use diesel::sql_types::BigInt;

    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = BigInt)]
        n: i64,
    }

    #[test]
    fn schema_bootstrap_is_idempotent() {
        let pool = test_pool();
        ensure_schema(&pool).unwrap();

        let mut conn = pool.get().unwrap();
        let count: Count = diesel::sql_query("SELECT COUNT(*) AS n FROM entries")
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(count.n, 0);
    }
}
