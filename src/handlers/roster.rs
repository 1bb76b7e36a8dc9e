use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::models::{AppState, MemberRow};
use crate::templates::{PageLink, RosterPageTemplate};

use super::helpers::render_template;

pub async fn roster_page(State(state): State<AppState>) -> impl IntoResponse {
    let roster = state.roster.lock().unwrap();
    let rows: Vec<MemberRow> = roster
        .current_page_members()
        .iter()
        .map(|m| MemberRow {
            id: m.id.clone(),
            name: m.name.clone(),
            email: m.email.clone(),
            role: m.role.clone(),
            selected: roster.is_selected(&m.id),
            editing: roster.edit().is_some_and(|e| e.member_id == m.id),
        })
        .collect();
    let page_count = roster.page_count();
    let current_page = roster.current_page();
    let pages: Vec<PageLink> = (1..=page_count)
        .map(|number| PageLink {
            number,
            current: number == current_page,
        })
        .collect();
    render_template(RosterPageTemplate {
        search_term: roster.search_term().to_string(),
        scratch: roster
            .edit()
            .map(|e| e.scratch.clone())
            .unwrap_or_default(),
        rows,
        pages,
        current_page,
        filtered_count: roster.filtered().len(),
        total_count: roster.members().len(),
        selected_count: roster.selected_count(),
        debounce_ms: crate::config::SEARCH_DEBOUNCE_MS,
    })
}

#[derive(Deserialize)]
pub struct SearchInputForm {
    #[serde(default)]
    pub term: String,
}

/// One keystroke from the search field. The input echoes locally in the
/// page; the term only reaches the filter once the debounce window passes
/// with no further keystrokes.
pub async fn search_input(
    State(state): State<AppState>,
    Form(form): Form<SearchInputForm>,
) -> StatusCode {
    state
        .search_debounce
        .submit(Arc::clone(&state.roster), form.term);
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
pub struct PageForm {
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

pub async fn page_set(State(state): State<AppState>, Form(form): Form<PageForm>) -> Redirect {
    state.roster.lock().unwrap().goto_page(form.page);
    Redirect::to("/")
}

pub async fn page_first(State(state): State<AppState>) -> Redirect {
    state.roster.lock().unwrap().first_page();
    Redirect::to("/")
}

pub async fn page_last(State(state): State<AppState>) -> Redirect {
    state.roster.lock().unwrap().last_page();
    Redirect::to("/")
}

pub async fn toggle_member(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.roster.lock().unwrap().toggle_selected(&id);
    Redirect::to("/")
}

pub async fn delete_member(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.roster.lock().unwrap().delete_one(&id);
    Redirect::to("/")
}

pub async fn delete_selected(State(state): State<AppState>) -> Redirect {
    state.roster.lock().unwrap().delete_selected();
    Redirect::to("/")
}

pub async fn edit_member(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.roster.lock().unwrap().begin_edit(&id);
    Redirect::to("/")
}

#[derive(Deserialize)]
pub struct SaveMemberForm {
    #[serde(default)]
    pub name: String,
}

pub async fn save_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SaveMemberForm>,
) -> Redirect {
    let mut roster = state.roster.lock().unwrap();
    // A save posted for a row that is no longer under edit (stale tab,
    // retargeted session) is dropped rather than applied.
    if roster.edit().is_some_and(|e| e.member_id == id) {
        roster.change_scratch(form.name);
        roster.save_edit(&id);
    } else {
        tracing::warn!(%id, "Ignoring save with no matching edit session");
    }
    Redirect::to("/")
}

pub async fn cancel_edit(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let mut roster = state.roster.lock().unwrap();
    if roster.edit().is_some_and(|e| e.member_id == id) {
        roster.cancel_edit();
    }
    Redirect::to("/")
}
