//! The reference walkthrough of the address book, printed to a writer.

use crate::book::AddressBook;
use crate::error::BookError;
use crate::models::Record;
use anyhow::{Context, Result};
use std::io::Write;

/// Build a small book, edit it, and print each step to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    print_all(&book, out)?;

    let john = book.find_mut("John").context("John should be in the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    writeln!(out, "{}", john)?;

    let found = john
        .find_phone("5555555555")
        .ok_or_else(|| BookError::PhoneNotFound("5555555555".to_string()))?;
    writeln!(out, "{}: {}", john.name(), found)?;

    book.delete("Jane");
    if let Some(john) = book.find_mut("John") {
        john.remove_phone("5555555555");
    }

    print_all(&book, out)?;
    Ok(())
}

fn print_all<W: Write>(book: &AddressBook, out: &mut W) -> Result<()> {
    for (_, record) in book {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
