use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Quiescence window for the search input, measured from the last keystroke.
pub const SEARCH_DEBOUNCE_MS: u64 = 800;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_members_url() -> String {
    members_url_or_default(&env::var("MEMBERS_URL").unwrap_or_default())
}

pub fn members_url_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_MEMBERS_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
