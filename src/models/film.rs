//! Film records as served by the films endpoint.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FetchError, FetchResult};

/// One film from the API.
///
/// Missing or null text fields decode as empty strings so one sparse record
/// does not sink the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Film {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Zero when absent or not a non-negative integer
    #[serde(default, deserialize_with = "lenient_episode_id")]
    pub episode_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opening_crawl: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub director: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub producer: String,
    /// Release date as sent by the API, normally `YYYY-MM-DD`
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts integers and integer strings; anything else decodes as 0.
fn lenient_episode_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let id = match &value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(id.unwrap_or_default())
}

impl Film {
    /// Year shown in the list row.
    ///
    /// Falls back to the leading four digits of a date chrono cannot parse,
    /// then to the raw text.
    pub fn release_year(&self) -> String {
        let raw = self.release_date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.year().to_string();
        }
        let prefix: String = raw.chars().take(4).collect();
        if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
            prefix
        } else {
            raw.to_string()
        }
    }

    /// Parameters handed to the detail screen for this film.
    pub fn detail_params(&self) -> FilmDetailParams {
        FilmDetailParams {
            title: self.title.clone(),
            opening_crawl: self.opening_crawl.clone(),
        }
    }
}

/// The typed payload carried from the list screen to the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmDetailParams {
    pub title: String,
    pub opening_crawl: String,
}

/// The page envelope some deployments wrap the listing in.
#[derive(Debug, Deserialize)]
struct FilmPage {
    results: Vec<Film>,
}

/// Accepted body shapes: a bare array or the page envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FilmsPayload {
    List(Vec<Film>),
    Page(FilmPage),
}

/// Decode a response body into films, preserving API order.
pub fn parse_films(body: &[u8]) -> FetchResult<Vec<Film>> {
    // Parse to a Value first so syntax errors keep serde's line/column detail
    // instead of the untagged enum's generic message.
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| FetchError::decode(&e))?;

    let payload = FilmsPayload::deserialize(value).map_err(|e| FetchError::Decode {
        message: format!("expected a film array or an object with `results`: {}", e),
    })?;

    Ok(match payload {
        FilmsPayload::List(films) => films,
        FilmsPayload::Page(page) => page.results,
    })
}
