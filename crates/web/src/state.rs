use storage::Database;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub wrapped_test_key: Option<String>,
}
