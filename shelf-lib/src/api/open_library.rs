use log::{info, trace, warn};
use serde_json::{Map, Value};

use crate::{Error, ErrorKind};

use super::Client;

const OPEN_LIBRARY_URL: &str = "https://openlibrary.org";

macro_rules! books_url {
    ($isbn: expr) => {
        format!(
            "{}/api/books?bibkeys=ISBN:{}&format=json&jscmd=data",
            OPEN_LIBRARY_URL, $isbn
        )
    };
}

macro_rules! editions_url {
    ($work: expr) => {
        format!("{}/works/{}/editions.json", OPEN_LIBRARY_URL, $work)
    };
}

/// Retrieves the book data object that Open Library keeps under the `ISBN:<isbn>` key.
pub(crate) fn get_book_data<C: Client>(isbn: &str) -> Result<Map<String, Value>, Error> {
    info!("Searching for ISBN '{isbn}' using Open Library API");
    let url = books_url!(isbn);
    trace!("Requesting '{url}'");

    let client = C::default();
    let mut envelope: Map<String, Value> = client.get_json(&url)?;

    trace!("Request was successful");

    match envelope.remove(&format!("ISBN:{isbn}")) {
        Some(Value::Object(data)) => Ok(data),
        _ => Err(Error::new(
            ErrorKind::NoValue,
            format!("No book found for ISBN '{isbn}'"),
        )),
    }
}

/// Counts the editions Open Library lists for a work.
///
/// Any failure is logged and counted as zero editions.
pub(crate) fn get_similar_editions<C: Client>(work_id: &str) -> u32 {
    let url = editions_url!(work_id);
    trace!("Requesting '{url}'");

    let client = C::default();
    match client.get_json::<Value>(&url) {
        Ok(body) => {
            trace!("Editions response for work '{work_id}': {body}");
            edition_size(&body)
        }
        Err(err) if err.status().is_some() => {
            info!("No editions available for work '{work_id}': {err}");
            0
        }
        Err(err) => {
            warn!("Could not count editions for work '{work_id}': {err}");
            0
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn edition_size(body: &Value) -> u32 {
    let size = match body.get("size") {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            // sizes such as `7.0` are truncated towards zero
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    size.and_then(|n| u32::try_from(n).ok()).unwrap_or(0)
}
