use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One scenario to generate a tree for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scenario {
	/// Scenario name, also used for download file names.
	pub name: String,
	/// Free-text mission description.
	pub prompt: String,
}

/// Body of `POST /generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
	/// Scenarios in request order.
	pub scenarios: Vec<Scenario>,
}

impl GenerateRequest {
	/// A request carrying exactly one scenario.
	pub fn single(name: &str, prompt: &str) -> Self {
		Self {
			scenarios: vec![Scenario {
				name: name.to_owned(),
				prompt: prompt.to_owned(),
			}],
		}
	}
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
	#[serde(default)]
	pub xml: Option<String>,
	#[serde(default)]
	pub metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
	#[serde(default)]
	pub detail: Option<Value>,
}

/// A generated tree together with the metadata the backend recorded for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
	/// Behavior tree XML as returned by the backend.
	pub xml: String,
	/// Kept as raw JSON so downloads and the JSON view show every field.
	pub metadata: Value,
}

impl Generation {
	/// Typed view of [`Generation::metadata`].
	pub fn metadata(&self) -> Metadata {
		Metadata::from_value(&self.metadata)
	}
}

/// Typed view of the metadata fields the formatted panel shows.
///
/// Each field decodes on its own, so one field of the wrong type only blanks
/// that field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
	/// Generation time as reported by the backend.
	#[serde(deserialize_with = "text")]
	pub timestamp: String,
	/// Scenario name.
	#[serde(deserialize_with = "text")]
	pub scenario: String,
	/// Prompt the tree was generated from.
	#[serde(deserialize_with = "text")]
	pub prompt: String,
	/// Number of retrieved context chunks.
	#[serde(deserialize_with = "lenient")]
	pub context_chunks: u64,
	/// Retrieved context text.
	#[serde(deserialize_with = "text")]
	pub context_used: String,
	/// Model parameters, in backend order.
	#[serde(deserialize_with = "lenient")]
	pub generation_params: Map<String, Value>,
}

/// Any JSON value, shown the way [`display_value`] shows it.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Ok(display_value(&Value::deserialize(deserializer)?))
}

/// The field's own type, or its default when the value has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	let value = Value::deserialize(deserializer)?;
	Ok(T::deserialize(value).unwrap_or_default())
}

impl Metadata {
	/// Decode leniently. A non-object renders as all defaults.
	pub fn from_value(value: &Value) -> Self {
		Self::deserialize(value).unwrap_or_default()
	}

	/// Generation parameters as display strings, in backend order.
	pub fn params(&self) -> Vec<(String, String)> {
		self.generation_params
			.iter()
			.map(|(k, v)| (k.clone(), display_value(v)))
			.collect()
	}
}

/// Strings without quotes, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
