/// Shared application state, available to all route handlers via `State<Arc<AppState<S>>>`.
///
/// The store owns the process-wide connection pool; handlers open one
/// session on it per request.
pub struct AppState<S> {
    pub store: S,
}

impl<S> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}
