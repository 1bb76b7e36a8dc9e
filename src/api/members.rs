use serde_json::from_str;

use crate::api::error::FetchError;
use crate::models::Member;

/// The one network read: GET the members endpoint and decode the JSON array.
/// No auth, no query parameters, no retry; the caller decides what an error
/// means (at startup it means an empty roster).
pub async fn fetch_members(
    client: &reqwest::Client,
    members_url: &str,
) -> Result<Vec<Member>, FetchError> {
    tracing::debug!(url = members_url, "Fetching member roster");
    let resp = client.get(members_url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }
    let body = resp.text().await?;
    from_str::<Vec<Member>>(&body).map_err(FetchError::Decode)
}
