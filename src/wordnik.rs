//! Wordnik lookups. Needs an API key, see https://developer.wordnik.com/.

use serde::Deserialize;
use url::Url;

use crate::client::{self, Client, RemoteError};
use crate::de::null_default;
use crate::error::{Error, Result};
use crate::grouping::Grouped;
use crate::render::Report;

pub const BASE_URL: &str = "https://api.wordnik.com";
pub const DEFAULT_SOURCE_DICTIONARY: &str = "ahd-5";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Definition {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub part_of_speech: String,
    pub attribution_text: Option<String>,
    pub source_dictionary: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    pub sequence: Option<String>,
    pub score: Option<f64>,
    pub word: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub example_uses: Vec<ExampleUse>,
    pub attribution_url: Option<String>,
    pub wordnik_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub labels: Vec<Label>,
    #[serde(deserialize_with = "null_default")]
    pub citations: Vec<Citation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExampleUse {
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    pub position: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Label {
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Citation {
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    #[serde(deserialize_with = "null_default")]
    pub cite: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pronunciation {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub raw: String,
    pub raw_type: Option<String>,
    pub seq: Option<i64>,
    pub attribution_url: Option<String>,
    pub attribution_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default, deserialize_with = "null_default")]
    message: String,
}

impl RemoteError for ApiError {
    fn into_message(self) -> String {
        self.message
    }
}

/// Builds `{base}/v4/word.json/{word}/{object}?api_key=..&sourceDictionaries=..`.
pub fn build_url(
    base: &str,
    word: &str,
    object: &str,
    api_key: &str,
    source_dictionary: &str,
) -> Result<Url> {
    let mut url = client::endpoint(base, &["v4", "word.json", word, object])?;
    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .append_pair("sourceDictionaries", source_dictionary);
    Ok(url)
}

/// Fetches definitions, then pronunciations, and folds them into a report.
pub fn lookup(
    client: &Client,
    base: &str,
    word: &str,
    api_key: &str,
    source_dictionary: &str,
) -> Result<Report> {
    let url = build_url(base, word, "definitions", api_key, source_dictionary)?;
    let definitions: Vec<Definition> = client.get_json::<_, ApiError>(&url)?;

    let url = build_url(base, word, "pronunciations", api_key, source_dictionary)?;
    let pronunciations: Vec<Pronunciation> = client.get_json::<_, ApiError>(&url)?;

    normalize(word, &definitions, &pronunciations)
}

/// Groups definitions by part of speech. The header takes the first
/// pronunciation; having none is an error.
pub fn normalize(
    word: &str,
    definitions: &[Definition],
    pronunciations: &[Pronunciation],
) -> Result<Report> {
    let first = pronunciations
        .first()
        .ok_or_else(|| Error::MissingPronunciation {
            word: word.to_string(),
        })?;

    let mut groups = Grouped::new();
    for d in definitions {
        groups.push(&d.part_of_speech, &d.text);
    }
    tracing::debug!(
        definitions = definitions.len(),
        groups = groups.len(),
        "grouped wordnik definitions"
    );

    Ok(Report {
        word: word.to_string(),
        pronunciation: format!("/{}/", first.raw),
        groups,
    })
}
