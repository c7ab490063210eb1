//! Save generated artifacts through a transient object URL.

use log::info;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// `{scenario}_behavior_tree.xml`, with path separators replaced.
pub fn xml_file_name(scenario: &str) -> String {
	format!("{}_behavior_tree.xml", file_stem(scenario))
}

/// `{scenario}_metadata.json`, with path separators replaced.
pub fn metadata_file_name(scenario: &str) -> String {
	format!("{}_metadata.json", file_stem(scenario))
}

fn file_stem(scenario: &str) -> String {
	let stem: String = scenario
		.trim()
		.chars()
		.map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
		.collect();
	if stem.is_empty() {
		"scenario".to_owned()
	} else {
		stem
	}
}

/// Pretty JSON with two-space indentation.
pub fn metadata_json(metadata: &Value) -> String {
	serde_json::to_string_pretty(metadata).unwrap_or_else(|_| metadata.to_string())
}

/// Save the tree XML as a file.
pub fn download_xml(xml: &str, scenario: &str) -> Result<(), JsValue> {
	trigger_download(xml, "application/xml", &xml_file_name(scenario))
}

/// Save the metadata as pretty-printed JSON.
pub fn download_metadata(metadata: &Value, scenario: &str) -> Result<(), JsValue> {
	trigger_download(
		&metadata_json(metadata),
		"application/json",
		&metadata_file_name(scenario),
	)
}

fn trigger_download(contents: &str, mime: &str, file_name: &str) -> Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let body = document
		.body()
		.ok_or_else(|| JsValue::from_str("no document body"))?;

	let options = BlobPropertyBag::new();
	options.set_type(mime);
	let parts = js_sys::Array::of1(&JsValue::from_str(contents));
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(file_name);
	body.append_child(&anchor)?;
	anchor.click();
	Url::revoke_object_url(&url)?;
	body.remove_child(&anchor)?;

	info!("downloaded {file_name}");
	Ok(())
}

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;
