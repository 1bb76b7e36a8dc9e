pub mod roster_service;
pub mod search_debounce;

// Re-export commonly used functions
pub use roster_service::load_initial_roster;
pub use search_debounce::SearchDebouncer;
