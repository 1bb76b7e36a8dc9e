use std::collections::HashSet;

use crate::config::PAGE_SIZE;
use crate::models::Member;

/// The single row currently in inline-edit mode, with the name text being
/// typed. Dropping the session discards the scratch text with it.
#[derive(Clone, Debug)]
pub struct EditSession {
    pub member_id: String,
    pub scratch: String,
}

/// All view state for the admin table: the member list, the committed search
/// term, the 1-based page number, the checked ids, and the edit session.
///
/// Every derived view (`filtered`, `page_count`, `current_page_members`) is
/// recomputed from this canonical state on each call; nothing is cached.
#[derive(Debug)]
pub struct Roster {
    members: Vec<Member>,
    search_term: String,
    current_page: usize,
    selected: HashSet<String>,
    edit: Option<EditSession>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        Roster {
            members,
            search_term: String::new(),
            current_page: 1,
            selected: HashSet::new(),
            edit: None,
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Members whose name, email, or role contains the committed search term,
    /// case-insensitively. An empty term matches everything.
    pub fn filtered(&self) -> Vec<&Member> {
        let needle = self.search_term.to_lowercase();
        self.members
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&needle)
                    || m.email.to_lowercase().contains(&needle)
                    || m.role.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of pages in the filtered view; 0 when nothing matches.
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// The slice of the filtered view shown on the current page.
    pub fn current_page_members(&self) -> Vec<&Member> {
        self.filtered()
            .into_iter()
            .skip((self.current_page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    /// Commit a new search term and jump back to page 1.
    pub fn commit_search(&mut self, term: String) {
        self.search_term = term;
        self.current_page = 1;
    }

    /// The numbered page control passes its value through unchanged; values
    /// below 1 are raised to 1 so the 1-based index math stays total.
    pub fn goto_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self) {
        self.current_page = self.page_count().max(1);
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Remove the single member and drop its id from the selection set.
    pub fn delete_one(&mut self, id: &str) {
        self.members.retain(|m| m.id != id);
        self.selected.remove(id);
        self.after_removal();
    }

    /// Remove every member whose id is checked, then clear the selection.
    pub fn delete_selected(&mut self) {
        let selected = std::mem::take(&mut self.selected);
        self.members.retain(|m| !selected.contains(&m.id));
        self.after_removal();
    }

    /// Start editing `id`, seeding the scratch text with the current name.
    /// Retargets an already-active session without saving it.
    pub fn begin_edit(&mut self, id: &str) {
        if let Some(member) = self.members.iter().find(|m| m.id == id) {
            self.edit = Some(EditSession {
                member_id: member.id.clone(),
                scratch: member.name.clone(),
            });
        }
    }

    /// Replace the scratch text. No-op outside an edit session; the
    /// underlying record is untouched until save.
    pub fn change_scratch(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.scratch = text.into();
        }
    }

    /// Write the scratch text into the member's name and return to viewing.
    /// Only honored when the active session targets `id`; the new name is not
    /// validated (empty is accepted). Returns whether a save happened.
    pub fn save_edit(&mut self, id: &str) -> bool {
        match self.edit.take() {
            Some(edit) if edit.member_id == id => {
                if let Some(member) = self.members.iter_mut().find(|m| m.id == id) {
                    member.name = edit.scratch;
                }
                true
            }
            other => {
                self.edit = other;
                false
            }
        }
    }

    /// Return to viewing, discarding the scratch text.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    // Deletes can shrink the filtered view below the current page and can
    // remove the row under edit; restore both invariants.
    fn after_removal(&mut self) {
        if let Some(edit) = &self.edit {
            if !self.members.iter().any(|m| m.id == edit.member_id) {
                self.edit = None;
            }
        }
        let last = self.page_count().max(1);
        if self.current_page > last {
            self.current_page = last;
        }
    }
}
