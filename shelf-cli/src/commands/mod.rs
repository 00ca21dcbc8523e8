use crate::app;

use clap::Subcommand;
use eyre::{eyre, Context};
use log::{info, trace};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Look up a book by ISBN
    ///
    /// Hyphens in the ISBN are removed before searching.
    #[clap(arg_required_else_help = true)]
    Isbn {
        /// The ISBN to search for
        isbn: String,

        /// Print the book as JSON instead of a summary
        #[clap(long)]
        json: bool,
    },

    /// Print the book data Open Library holds for an ISBN, without any conversion
    #[clap(arg_required_else_help = true)]
    Raw {
        /// The ISBN to search for
        isbn: String,
    },

    /// Count the editions of a work, e.g. OL45804W or /works/OL45804W
    #[clap(arg_required_else_help = true)]
    Editions {
        /// The work identifier
        work: String,
    },

    /// Normalize a publication date the same way book lookups do
    #[clap(arg_required_else_help = true)]
    Date {
        /// The date text, e.g. 2023-03 or October 1, 1988
        #[clap(required = true)]
        text: Vec<String>,
    },
}

impl Commands {
    pub fn execute(self) -> eyre::Result<String> {
        match self {
            Commands::Isbn { isbn, json } => {
                let isbn = strip_hyphens(&isbn);
                let book = shelf::book_by_isbn(&isbn)
                    .wrap_err_with(|| eyre!("Cannot look up a book for the ISBN '{isbn}'"))?;

                if json {
                    serde_json::to_string_pretty(&book)
                        .wrap_err_with(|| eyre!("Cannot write the book as JSON"))
                } else {
                    Ok(app::render_book(&book))
                }
            }
            Commands::Raw { isbn } => {
                let isbn = strip_hyphens(&isbn);
                let data = shelf::book_data_by_isbn(&isbn)
                    .wrap_err_with(|| eyre!("Cannot look up a book for the ISBN '{isbn}'"))?;

                serde_json::to_string_pretty(&data)
                    .wrap_err_with(|| eyre!("Cannot write the book data as JSON"))
            }
            Commands::Editions { work } => {
                let work = work.trim_start_matches("/works/");
                trace!("Counting editions for work '{work}'");
                Ok(shelf::similar_editions(work).to_string())
            }
            Commands::Date { text } => {
                let text = text.join(" ");
                Ok(shelf::date::normalize(&text)
                    .map_or_else(|| "none".to_owned(), |date| date.to_string()))
            }
        }
    }
}

// remove hyphens from ISBN-13 (if applicable)
fn strip_hyphens(isbn: &str) -> String {
    let stripped = isbn.replace('-', "");
    if stripped != isbn {
        info!("Searching with '{stripped}' instead of '{isbn}'");
    }
    stripped
}

#[test]
fn hyphens_are_removed_from_isbn() {
    assert_eq!("9780380815937", strip_hyphens("978-0380815937"));
    assert_eq!("0735619670", strip_hyphens("0735619670"));
}
