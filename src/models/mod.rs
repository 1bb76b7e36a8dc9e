pub mod app_state;
pub mod member;
pub mod member_row;
pub mod roster;

// Re-export the model types for convenient access
pub use app_state::AppState;
pub use member::Member;
pub use member_row::MemberRow;
pub use roster::{EditSession, Roster};
