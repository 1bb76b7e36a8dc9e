use serde::{Deserialize, Serialize};

/// One roster entry, consumed verbatim from the members endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}
