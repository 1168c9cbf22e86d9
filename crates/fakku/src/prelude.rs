pub use anstream::println;
pub use color_eyre::eyre::{eyre, Result};

pub fn new_table() -> prettytable::Table {
    let mut table = prettytable::Table::new();

    let format = prettytable::format::FormatBuilder::new()
        .padding(1, 1)
        .build();

    table.set_format(format);

    table
}

/// Print a retrieval failure the way every command reports it
///
/// The error, the response body when one was received, and a hint go to stdout.
/// The command then returns normally.
pub fn report_failure(err: &fakku::Error) {
    println!("{err}");
    if let Some(body) = err.body() {
        println!("{body}");
    }
    println!("Something bad happened! Perhaps Fakku is down?");
}

/// Unwrap a retrieval result, reporting the failure when there is one
pub fn or_report<T>(result: fakku::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("retrieval failed: {err:?}");
            report_failure(&err);
            None
        }
    }
}
