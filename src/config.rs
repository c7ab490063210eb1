//! Build-time configuration.

/// Backend used when `BT_VIEWER_API_URL` is not set at compile time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the generation backend, without a trailing slash.
pub fn api_url() -> String {
	normalize_url(option_env!("BT_VIEWER_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_url(raw: &str) -> String {
	let trimmed = raw.trim().trim_end_matches('/');
	if trimmed.is_empty() {
		DEFAULT_API_URL.to_owned()
	} else {
		trimmed.to_owned()
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
