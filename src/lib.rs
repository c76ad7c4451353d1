//! Define a word from the command line using an online dictionary API.

pub mod client;
pub mod config;
mod de;
pub mod dictapi;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod render;
pub mod wordnik;

use client::Client;
use config::{Backend, LookupRequest};
use error::Result;
use render::Report;

/// Runs the lookup for one resolved request. Nothing is printed here, so a
/// failure leaves no partial report behind.
pub fn lookup(request: &LookupRequest) -> Result<Report> {
    let client = Client::new(request.debug);
    match &request.backend {
        Backend::Wordnik {
            api_key,
            source_dictionary,
        } => wordnik::lookup(
            &client,
            &request.base_url,
            &request.word,
            api_key,
            source_dictionary,
        ),
        Backend::Free { language } => {
            dictapi::lookup(&client, &request.base_url, language, &request.word)
        }
    }
}
