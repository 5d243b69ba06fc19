//! Derivation of the schema.org document from the input records.

mod builder;
mod party;
mod period;

pub use builder::InvoiceMarkup;
pub use period::{CalendarInterval, billing_period};
