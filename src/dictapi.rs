//! Lookups against the keyless Free Dictionary API (dictionaryapi.dev).

use serde::Deserialize;
use url::Url;

use crate::client::{self, Client, RemoteError};
use crate::de::null_default;
use crate::error::Result;
use crate::grouping::Grouped;
use crate::render::Report;

pub const BASE_URL: &str = "https://api.dictionaryapi.dev";
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entry {
    #[serde(deserialize_with = "null_default")]
    pub word: String,
    #[serde(deserialize_with = "null_default")]
    pub phonetic: String,
    #[serde(deserialize_with = "null_default")]
    pub phonetics: Vec<Phonetic>,
    #[serde(deserialize_with = "null_default")]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Phonetic {
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(deserialize_with = "null_default")]
    pub audio: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meaning {
    #[serde(deserialize_with = "null_default")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "null_default")]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "null_default")]
    pub definition: String,
    pub example: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub synonyms: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiError {
    #[serde(deserialize_with = "null_default")]
    title: String,
    #[serde(deserialize_with = "null_default")]
    message: String,
    #[serde(deserialize_with = "null_default")]
    resolution: String,
}

impl RemoteError for ApiError {
    fn into_message(self) -> String {
        if !self.resolution.is_empty() {
            tracing::debug!(resolution = %self.resolution, "upstream suggested a resolution");
        }
        if self.title.is_empty() {
            self.message
        } else {
            self.title
        }
    }
}

/// Builds `{base}/api/v2/entries/{language}/{word}`.
pub fn build_url(base: &str, language: &str, word: &str) -> Result<Url> {
    client::endpoint(base, &["api", "v2", "entries", language, word])
}

pub fn lookup(client: &Client, base: &str, language: &str, word: &str) -> Result<Report> {
    let url = build_url(base, language, word)?;
    let entries: Vec<Entry> = client.get_json::<_, ApiError>(&url)?;
    Ok(normalize(word, &entries))
}

/// Folds every entry into one report. The last non-empty word and phonetic
/// win; buckets accumulate across all entries. With no phonetic at all the
/// report's pronunciation stays empty and the header is the bare word.
pub fn normalize(word: &str, entries: &[Entry]) -> Report {
    let mut report = Report {
        word: word.to_string(),
        pronunciation: String::new(),
        groups: Grouped::new(),
    };

    for entry in entries {
        if !entry.word.is_empty() {
            report.word = entry.word.clone();
        }
        let sound = phonetic(entry);
        if !sound.is_empty() {
            report.pronunciation = sound.to_string();
        }
        for meaning in &entry.meanings {
            for d in &meaning.definitions {
                report.groups.push(&meaning.part_of_speech, &d.definition);
            }
        }
    }
    tracing::debug!(
        entries = entries.len(),
        groups = report.groups.len(),
        "grouped dictionaryapi meanings"
    );
    report
}

fn phonetic(entry: &Entry) -> &str {
    if !entry.phonetic.is_empty() {
        return &entry.phonetic;
    }
    entry
        .phonetics
        .iter()
        .map(|p| p.text.as_str())
        .find(|t| !t.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const HELLO: &str = r#"[{
        "word": "hello",
        "phonetic": "/həˈloʊ/",
        "phonetics": [{"text": "/həˈloʊ/", "audio": ""}],
        "meanings": [{
            "partOfSpeech": "exclamation",
            "definitions": [{"definition": "used as a greeting", "synonyms": [], "antonyms": []}]
        }]
    }]"#;

    fn entry(word: &str, phonetic: &str, meanings: Vec<(&str, Vec<&str>)>) -> Entry {
        Entry {
            word: word.to_string(),
            phonetic: phonetic.to_string(),
            phonetics: vec![],
            meanings: meanings
                .into_iter()
                .map(|(pos, defs)| Meaning {
                    part_of_speech: pos.to_string(),
                    definitions: defs
                        .into_iter()
                        .map(|d| Definition {
                            definition: d.to_string(),
                            ..Default::default()
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn url_escapes_language_and_word() {
        let url = build_url(BASE_URL, "en", "look up").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/look%20up"
        );
    }

    #[test]
    fn hello_payload() {
        let entries: Vec<Entry> = serde_json::from_str(HELLO).unwrap();
        let report = normalize("hello", &entries);
        assert_eq!(report.word, "hello");
        assert_eq!(report.pronunciation, "/həˈloʊ/");
        assert_eq!(
            report.groups.get("exclamation"),
            Some(&["used as a greeting".to_string()][..])
        );
    }

    #[test]
    fn last_entry_sets_header_and_buckets_merge() {
        let entries = vec![
            entry("bank", "/bæŋk/", vec![("noun", vec!["a river side"])]),
            entry("bank", "/bank/", vec![("verb", vec!["to tilt"]), ("noun", vec!["a lender", ""])]),
        ];
        let report = normalize("bank", &entries);

        assert_eq!(report.pronunciation, "/bank/");
        let keys: Vec<&str> = report.groups.iter().map(|(pos, _)| pos).collect();
        assert_eq!(keys, vec!["noun", "verb"]);
        assert_eq!(report.groups.get("noun").map(<[String]>::len), Some(2));
        assert_eq!(report.groups.definition_count(), 3);
    }

    #[test]
    fn blank_phonetic_in_later_entry_keeps_earlier_one() {
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[{"word":"bank","phonetic":"/bæŋk/","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a river side"}]}]},
                {"word":"bank","meanings":[]}]"#,
        )
        .unwrap();
        let report = normalize("bank", &entries);
        assert_eq!(report.pronunciation, "/bæŋk/");
        assert_eq!(report.groups.definition_count(), 1);
    }

    #[test]
    fn nulls_decode_as_empty() {
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[{"word":"hi","phonetic":null,"phonetics":null,"meanings":[
                {"partOfSpeech":"noun","definitions":[{"definition":null},{"definition":"a greeting","synonyms":null}]}
            ]}]"#,
        )
        .unwrap();
        let report = normalize("hi", &entries);
        assert_eq!(report.pronunciation, "");
        assert_eq!(report.groups.get("noun"), Some(&["a greeting".to_string()][..]));
    }

    #[test]
    fn no_phonetic_leaves_header_bare() {
        console::set_colors_enabled(false);
        let report = normalize("hi", &[entry("hi", "", vec![("noun", vec!["a greeting"])])]);
        let mut out = Vec::new();
        crate::render::write_report(&report, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("hi\n\nnoun\n"));
    }

    #[test]
    fn falls_back_to_phonetics_list() {
        let mut e = entry("cat", "", vec![]);
        e.phonetics = vec![
            Phonetic { text: String::new(), audio: "a.mp3".into() },
            Phonetic { text: "/kæt/".into(), audio: String::new() },
        ];
        assert_eq!(normalize("cat", &[e]).pronunciation, "/kæt/");
    }

    #[test]
    fn no_entries_keeps_requested_word() {
        let report = normalize("ghost", &[]);
        assert_eq!(report.word, "ghost");
        assert!(report.groups.is_empty());
    }

    #[test]
    fn lookup_hits_entries_endpoint() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v2/entries/en/hello")
            .with_status(200)
            .with_body(HELLO)
            .create();

        let report = lookup(&Client::new(false), &server.url(), "en", "hello").unwrap();
        assert_eq!(report.groups.definition_count(), 1);
        mock.assert();
    }

    #[test]
    fn not_found_reports_title() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/v2/entries/en/qwxz")
            .with_status(404)
            .with_body(
                r#"{"title":"No Definitions Found","message":"Sorry pal, we couldn't find definitions for the word you were looking for.","resolution":"You can try the search again at later time or head to the web instead."}"#,
            )
            .create();

        let err = lookup(&Client::new(false), &server.url(), "en", "qwxz").unwrap_err();
        match err {
            Error::Remote { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "No Definitions Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
