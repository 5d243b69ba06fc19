//! Core library for invoice JSON-LD markup.
//!
//! This crate provides:
//! - Input records for the invoice and its parties (seller, buyer)
//! - Calendar-aware billing period formatting (ISO 8601 durations)
//! - The `InvoiceMarkup` builder assembling a schema.org `Invoice`
//!   document embeddable as a `<script type="application/ld+json">` tag

pub mod markup;
pub mod models;

pub use markup::{CalendarInterval, InvoiceMarkup, billing_period};
pub use models::{InvoiceRecord, PartyRecord};

/// Re-export schema.org vocabulary types.
pub use rechnung_schema as schema;
