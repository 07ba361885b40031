use api::ApiClient;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub api: ApiClient,
}

/// The stable, non-reactive part of the app state, shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self(Arc::new(AppStateData { api }))
    }
}
