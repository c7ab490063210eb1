use gloo_net::http::Request;
use log::{error, info};

use super::types::{ErrorBody, GenerateRequest, GenerateResponse, Generation, display_value};
use crate::config;
use crate::error::ApiError;

const GENERIC_FAILURE: &str = "Failed to generate behavior tree";

/// Ask the backend to generate a tree for one scenario.
///
/// # Errors
///
/// Fails on transport errors, non-success statuses, undecodable bodies and
/// responses missing either the XML or the metadata.
pub async fn generate_behavior_tree(name: &str, prompt: &str) -> Result<Generation, ApiError> {
	let url = format!("{}/generate", config::api_url());
	info!("POST {url} for scenario {name:?}");

	let result = send(&url, &GenerateRequest::single(name, prompt)).await;
	if let Err(ref err) = result {
		error!("Generation Error: {err}");
	}
	result
}

async fn send(url: &str, body: &GenerateRequest) -> Result<Generation, ApiError> {
	let resp = Request::post(url)
		.json(body)
		.map_err(|e| ApiError::Network(e.to_string()))?
		.send()
		.await
		.map_err(|e| ApiError::Network(e.to_string()))?;
	let status = resp.status();
	let text = resp
		.text()
		.await
		.map_err(|e| ApiError::Network(e.to_string()))?;
	if !resp.ok() {
		return Err(status_error(status, &text));
	}
	decode_generation(&text)
}

pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
	let detail = serde_json::from_str::<ErrorBody>(body)
		.ok()
		.and_then(|b| b.detail)
		.map(|d| display_value(&d))
		.filter(|d| !d.is_empty())
		.unwrap_or_else(|| GENERIC_FAILURE.to_owned());
	ApiError::Status { status, detail }
}

pub(crate) fn decode_generation(body: &str) -> Result<Generation, ApiError> {
	let resp: GenerateResponse =
		serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
	match (resp.xml, resp.metadata) {
		(Some(xml), Some(metadata)) if !xml.trim().is_empty() && !metadata.is_null() => {
			Ok(Generation { xml, metadata })
		}
		_ => Err(ApiError::IncompleteResponse),
	}
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
