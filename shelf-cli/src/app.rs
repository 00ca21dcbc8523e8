use std::fmt::Write;

use shelf::Book;

const MISSING: &str = "-";

/// Human readable summary of a [`Book`], one field per line.
pub fn render_book(book: &Book) -> String {
    let published = book.published.map(|date| date.to_string());
    let isbns = book.isbns.join(", ");

    let mut lines = vec![
        ("Title", book.title.as_deref()),
        ("Authors", book.authors.as_deref()),
        ("Publisher", book.publisher.as_deref()),
        ("Published", published.as_deref()),
        ("ISBN", Some(book.isbn.as_str())),
    ];

    if !isbns.is_empty() {
        lines.push(("Other ISBNs", Some(isbns.as_str())));
    }

    let mut out = String::new();
    for (name, value) in lines {
        let _ = writeln!(out, "{:<18}{}", format!("{name}:"), value.unwrap_or(MISSING));
    }
    let _ = write!(out, "{:<18}{}", "Similar editions:", book.similar_editions);
    out
}

#[test]
fn missing_fields_are_rendered_as_dash() {
    let book = Book {
        isbn: "0140328726".to_owned(),
        title: Some("Fantastic Mr. Fox".to_owned()),
        similar_editions: 3,
        ..Book::default()
    };

    let out = render_book(&book);

    assert!(out.contains("Title:            Fantastic Mr. Fox"), "{out}");
    assert!(out.contains("Authors:          -"), "{out}");
    assert!(out.contains("Similar editions: 3"), "{out}");
    assert!(!out.contains("Other ISBNs"), "{out}");
}

#[test]
fn dates_and_other_isbns_are_rendered() {
    let book = Book {
        isbn: "0140328726".to_owned(),
        published: shelf::date::normalize("1988-10-01"),
        isbns: vec!["0140328726".to_owned(), "9780140328721".to_owned()],
        ..Book::default()
    };

    let out = render_book(&book);

    assert!(out.contains("Published:        1988-10-01"), "{out}");
    assert!(out.contains("Other ISBNs:      0140328726, 9780140328721"), "{out}");
}

