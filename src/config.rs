use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::error::{Error, Result};
use crate::{dictapi, wordnik};

pub const KEY_ENV: &str = "WORDNIKAPIKEY";
pub const KEY_FILE: &str = ".define-api-key";

/// Look up a word in an online dictionary.
#[derive(Debug, Parser)]
#[command(name = "define", version)]
pub struct Cli {
    /// Dictionary API to query
    #[arg(long, value_enum, default_value_t = Api::Wordnik)]
    pub api: Api,

    /// Wordnik API key (defaults to $WORDNIKAPIKEY, then $HOME/.define-api-key)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Language code for the free dictionary API
    #[arg(short, long, default_value = dictapi::DEFAULT_LANGUAGE)]
    pub language: String,

    /// Wordnik source dictionary
    #[arg(long, default_value = wordnik::DEFAULT_SOURCE_DICTIONARY)]
    pub source_dictionary: String,

    /// Override the API host
    #[arg(long, hide = true)]
    pub base_url: Option<String>,

    /// Print request urls and debug logs to stderr
    #[arg(long)]
    pub debug: bool,

    /// Word to define
    #[arg(value_parser = parse_word)]
    pub word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Api {
    /// Wordnik, requires an API key
    Wordnik,
    /// dictionaryapi.dev, keyless
    Free,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Wordnik {
        api_key: String,
        source_dictionary: String,
    },
    Free {
        language: String,
    },
}

/// Resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub word: String,
    pub backend: Backend,
    pub base_url: String,
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Flag,
    Env,
    File,
}

fn parse_word(s: &str) -> std::result::Result<String, String> {
    match s.trim() {
        "" => Err("the word must not be empty".to_string()),
        "." | ".." => Err(format!("{s:?} is not a word")),
        _ => Ok(s.to_string()),
    }
}

pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?)
}

impl Cli {
    /// Resolves the key chain against the real environment when needed.
    pub fn into_request(self) -> Result<LookupRequest> {
        let backend = match self.api {
            Api::Wordnik => {
                let (api_key, source) =
                    resolve_key(self.key.as_deref(), || env::var(KEY_ENV).ok(), home_dir)?;
                tracing::debug!(source = ?source, "resolved api key");
                Backend::Wordnik {
                    api_key,
                    source_dictionary: self.source_dictionary,
                }
            }
            Api::Free => Backend::Free {
                language: self.language,
            },
        };
        let base_url = self.base_url.unwrap_or_else(|| match &backend {
            Backend::Wordnik { .. } => wordnik::BASE_URL.to_string(),
            Backend::Free { .. } => dictapi::BASE_URL.to_string(),
        });
        Ok(LookupRequest {
            word: self.word,
            backend,
            base_url,
            debug: self.debug,
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Picks the api key from the flag, then the environment, then the key
/// file under the home directory. Later sources are not consulted once one
/// is non-blank.
pub fn resolve_key<E, H>(flag: Option<&str>, env_value: E, home: H) -> Result<(String, KeySource)>
where
    E: FnOnce() -> Option<String>,
    H: FnOnce() -> Option<PathBuf>,
{
    if let Some(key) = flag.map(str::trim).filter(|k| !k.is_empty()) {
        return Ok((key.to_string(), KeySource::Flag));
    }
    if let Some(key) = env_value().as_deref().map(str::trim).filter(|k| !k.is_empty()) {
        return Ok((key.to_string(), KeySource::Env));
    }

    let home = home().ok_or_else(|| missing_key("home directory not found"))?;
    let key = read_key_file(&home.join(KEY_FILE))?;
    Ok((key, KeySource::File))
}

fn read_key_file(path: &Path) -> Result<String> {
    let data = fs::read_to_string(path)
        .map_err(|e| missing_key(&format!("{}: {}", path.display(), e)))?;
    let key = data.trim();
    if key.is_empty() {
        return Err(missing_key(&format!("{}: file is empty", path.display())));
    }
    Ok(key.to_string())
}

fn missing_key(cause: &str) -> Error {
    Error::Credential(format!(
        "reading API key: {cause}\n\n\
         Please request your WORDNIK API key at https://wordnik.com and write it\n\
         to ${KEY_ENV} or $HOME/{KEY_FILE} to use this program."
    ))
}
