//! Address Book - demonstration entry point
//!
//! Builds a small sample book, then prints it page by page along with the
//! birthdays coming up within the configured window.

use address_book::{AddressBook, Config, Record};
use anyhow::Result;
use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        page_size = config.page_size,
        birthday_window_days = config.birthday_window_days,
        "Configuration loaded"
    );

    let book = match sample_book() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to build sample address book: {}", e);
            return Err(e);
        }
    };

    for (number, page) in book.iterate(config.page_size)?.enumerate() {
        println!("Page {}", number + 1);
        for record in page {
            println!("  {}", record);
        }
    }

    let today = Local::now().date_naive();
    let upcoming = book.upcoming_birthdays(today, i64::from(config.birthday_window_days));
    if upcoming.is_empty() {
        println!(
            "No birthdays in the next {} days",
            config.birthday_window_days
        );
    }
    for (record, days) in upcoming {
        println!("{} has a birthday in {} day(s)", record.name(), days);
    }

    Ok(())
}

fn sample_book() -> Result<AddressBook> {
    let mut john = Record::new("John", Some("1990-05-21"))?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    john.edit_phone("1234567890", "1112223333")?;

    let mut jane = Record::new("Jane", None)?;
    jane.add_phone("9876543210")?;

    let mut book = AddressBook::new();
    book.add_record(john);
    book.add_record(jane);
    Ok(book)
}
