/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. The pool is the only storage handle; it is passed
/// explicitly to every repository call.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shinobi_db::DbPool,
}
