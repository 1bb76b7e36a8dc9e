// Individual template files
pub mod roster_page_template;

// Re-export all templates
pub use roster_page_template::{PageLink, RosterPageTemplate};
