use std::sync::{Arc, Mutex};

use crate::models::Roster;
use crate::services::SearchDebouncer;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Mutex<Roster>>,
    pub search_debounce: SearchDebouncer,
    pub custom_css: Option<String>,
}
