use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One movie record as returned by the discover endpoint.
///
/// Every known field is optional and a value of the wrong type reads as
/// absent, so one odd record never fails the whole list. Fields the browser
/// does not know about are kept in `extra` so the record survives untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub original_language: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub overview: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    /// Minimal record with just an id and a title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            poster_path: None,
            release_date: None,
            vote_average: None,
            original_language: None,
            overview: None,
            extra: Map::new(),
        }
    }

    /// Release year taken from the `YYYY-MM-DD` release date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }
}

/// Any JSON value, or `None` when it does not fit `T` (including `null`).
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, String>(deserializer)?.unwrap_or_default())
}

/// Wire shape of the discover response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverResponse {
    /// Only the string `"False"` marks a logical failure; any other value,
    /// of any type, does not.
    #[serde(rename = "Response", default)]
    pub response: Option<Value>,
    #[serde(rename = "Error", default, deserialize_with = "lenient")]
    pub error: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
}

/// What a decoded discover body means for the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoverOutcome {
    Movies(Vec<Movie>),
    Rejected { message: String },
}

impl DiscoverResponse {
    pub fn into_outcome(self, default_message: &str) -> DiscoverOutcome {
        if matches!(&self.response, Some(Value::String(flag)) if flag == "False") {
            let message = self
                .error
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| default_message.to_string());
            return DiscoverOutcome::Rejected { message };
        }
        DiscoverOutcome::Movies(self.results.unwrap_or_default())
    }
}
