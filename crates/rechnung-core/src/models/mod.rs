//! Input records the markup is built from.

pub mod invoice;
pub mod party;

pub use invoice::InvoiceRecord;
pub use party::PartyRecord;
