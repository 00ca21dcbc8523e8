use chrono::NaiveDate;
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    api::{open_library, Client},
    date,
};

/// A book as described by a bibliographic record.
///
/// Only the ISBN is guaranteed; every other field is filled in when the record provides it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// The ISBN used to look up the book.
    pub isbn: String,
    /// Title of the book.
    pub title: Option<String>,
    /// Names of the authors in the order they are listed, separated by `", "`.
    pub authors: Option<String>,
    /// Name of the first listed publisher.
    pub publisher: Option<String>,
    /// Publication date, defaulting to the first day of the month or year when the record is
    /// less precise.
    pub published: Option<NaiveDate>,
    /// Number of editions of the same work.
    pub similar_editions: u32,
    /// Alternate ISBN-10 and ISBN-13 values listed for this edition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub isbns: Vec<String>,
}

const WORKS_PREFIX: &str = "/works/";

pub(crate) fn from_data<C: Client>(data: &Map<String, Value>, isbn: &str) -> Book {
    trace!("Converting book data for ISBN '{isbn}'");

    let similar_editions = work_id(data)
        .map(open_library::get_similar_editions::<C>)
        .unwrap_or_default();

    Book {
        isbn: isbn.to_owned(),
        title: data.get("title").and_then(Value::as_str).map(str::to_owned),
        authors: authors(data),
        publisher: publisher(data),
        published: published(data),
        similar_editions,
        isbns: alternate_isbns(data),
    }
}

fn authors(data: &Map<String, Value>) -> Option<String> {
    let names = data
        .get("authors")?
        .as_array()?
        .iter()
        .filter_map(|author| author.get("name")?.as_str())
        .collect::<Vec<_>>();

    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

fn publisher(data: &Map<String, Value>) -> Option<String> {
    // later publishers are imprints or distributors, only the first is kept
    data.get("publishers")?
        .as_array()?
        .first()?
        .get("name")?
        .as_str()
        .map(str::to_owned)
}

fn published(data: &Map<String, Value>) -> Option<NaiveDate> {
    match data.get("publish_date")? {
        Value::String(text) => date::normalize(text),
        other => {
            warn!("Ignoring publish_date that is not a string: {other}");
            None
        }
    }
}

fn work_id(data: &Map<String, Value>) -> Option<&str> {
    let key = data
        .get("works")?
        .as_array()?
        .first()?
        .get("key")?
        .as_str()?;

    Some(key.strip_prefix(WORKS_PREFIX).unwrap_or(key))
}

fn alternate_isbns(data: &Map<String, Value>) -> Vec<String> {
    let identifiers = data.get("identifiers").and_then(Value::as_object);

    let mut isbns: Vec<String> = Vec::new();
    for field in ["isbn_10", "isbn_13"] {
        let values = data
            .get(field)
            .or_else(|| identifiers.and_then(|ids| ids.get(field)))
            .and_then(Value::as_array);

        for isbn in values.into_iter().flatten().filter_map(Value::as_str) {
            if !isbns.iter().any(|known| known == isbn) {
                isbns.push(isbn.to_owned());
            }
        }
    }
    isbns
}
