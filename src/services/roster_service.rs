use crate::api::fetch_members;
use crate::models::Roster;

/// Build the roster from the one startup fetch. A failed or malformed
/// response is logged and leaves the roster empty; there is no retry and no
/// operator-visible error state.
pub async fn load_initial_roster(client: &reqwest::Client, members_url: &str) -> Roster {
    match fetch_members(client, members_url).await {
        Ok(members) => {
            tracing::info!(count = members.len(), "Loaded member roster");
            Roster::new(members)
        }
        Err(e) => {
            tracing::error!(%e, "Error fetching member roster");
            Roster::new(Vec::new())
        }
    }
}
