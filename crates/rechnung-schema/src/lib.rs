//! schema.org vocabulary layer for invoice markup.
//!
//! This crate models the JSON-LD nodes an invoice page embeds:
//! - `Invoice` with its nested `PriceSpecification` and payment status
//! - `Organization` / `Person` party nodes with a shared property payload
//! - `PostalAddress`
//!
//! It knows vocabulary and wire shape only; mapping billing data onto
//! these nodes lives in `rechnung-core`.

mod address;
mod invoice;
mod party;
mod script;

pub mod datetime;

pub use address::PostalAddress;
pub use invoice::{CONTEXT, InvoiceNode, PaymentStatusType, PriceSpecification};
pub use party::{PartyFields, PartyNode, Properties};
