use std::sync::Arc;

use crate::services::EmailJs;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<EmailJs>,
}
