#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod book;
pub mod date;
mod error;

pub use book::Book;
pub use error::{Error, ErrorKind};
pub use serde_json::{Map, Value};

use log::trace;

type Client = reqwest::blocking::Client;

/// Look up a book by `isbn` and convert it into a [`Book`].
///
/// This is [`book_data_by_isbn`] followed by [`book_from_data`].
///
/// # Errors
///
/// An `Err` is returned when the book data cannot be retrieved, see [`book_data_by_isbn`].
/// Problems with individual fields never cause an `Err`, the field is left unset instead.
#[inline]
pub fn book_by_isbn(isbn: &str) -> Result<Book, Error> {
    trace!("Search book by ISBN of '{isbn}'");
    api::open_library::get_book_data::<Client>(isbn)
        .map(|data| book::from_data::<Client>(&data, isbn))
}

/// Retrieve the raw book data object Open Library holds for an `isbn`.
///
/// The `isbn` is used as given, it is not validated or normalized.
///
/// # Errors
///
/// An `Err` with [`ErrorKind::Status`] is returned when the API does not answer with `200 OK`.
/// An `Err` with [`ErrorKind::NoValue`] is returned when no book is found for the `isbn`.
/// An `Err` with [`ErrorKind::IO`] or [`ErrorKind::Deserialize`] is returned when the request
/// fails or the response cannot be read.
#[inline]
pub fn book_data_by_isbn(isbn: &str) -> Result<Map<String, Value>, Error> {
    trace!("Search book data by ISBN of '{isbn}'");
    api::open_library::get_book_data::<Client>(isbn)
}

/// Convert a book data object, as returned by [`book_data_by_isbn`], into a [`Book`].
///
/// When the data refers to a work the number of editions of that work is requested, which is
/// one more network call.
#[must_use]
#[inline]
pub fn book_from_data(data: &Map<String, Value>, isbn: &str) -> Book {
    book::from_data::<Client>(data, isbn)
}

/// Count the editions listed for a work, e.g. `OL45804W`.
///
/// Returns `0` when the count cannot be retrieved for any reason.
#[must_use]
#[inline]
pub fn similar_editions(work_id: &str) -> u32 {
    trace!("Count editions of work '{work_id}'");
    api::open_library::get_similar_editions::<Client>(work_id)
}
