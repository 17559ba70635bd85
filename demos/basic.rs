//! Minimal preen example — trimming a parsed signup form.
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example basic
//!
//! The form is what a host framework would hand over after parsing a
//! request body: flat field names, string values. preen trims everything
//! except the fields on the exception list.

use std::collections::HashMap;

use preen::{TrimExceptions, TrimStrings, Trimming};

fn main() {
    tracing_subscriber::fmt::init();

    // Registration time: build the middleware once, share it across requests.
    let trim = TrimStrings::new(TrimExceptions::new([
        "password",
        "password_confirmation",
    ]));

    // Request time: the host hands over parsed fields.
    let mut form = HashMap::new();
    form.insert("email".to_owned(), "  alice@example.com ".to_owned());
    form.insert("display_name".to_owned(), "alice \t".to_owned());
    form.insert("password".to_owned(), " hunter2 ".to_owned());
    form.insert("password_confirmation".to_owned(), " hunter2 ".to_owned());

    let form = trim.trim(form);

    let mut fields: Vec<_> = form.iter().collect();
    fields.sort();
    for (field, value) in fields {
        println!("{field} = {value:?}");
    }
}
