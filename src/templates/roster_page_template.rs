use askama::Template;

use crate::models::MemberRow;

pub struct PageLink {
    pub number: usize,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "roster.html")]
pub struct RosterPageTemplate {
    pub search_term: String,
    /// Name text of the active edit session; empty while viewing.
    pub scratch: String,
    pub rows: Vec<MemberRow>,
    pub pages: Vec<PageLink>,
    pub current_page: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub selected_count: usize,
    pub debounce_ms: u64,
}
