//! Caller-supplied party details.

use serde::{Deserialize, Serialize};

/// Details of one party on the invoice, seller or buyer.
///
/// Every field is optional and unset by default. Partial data is written
/// with struct-update syntax over [`PartyRecord::default()`]; whatever is
/// left unset stays out of the generated markup. Whether the party renders
/// as an organization or a person depends solely on `company`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRecord {
    /// Company name; when set the party is an organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Given name, used for person parties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name, used for person parties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Street name and number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// State, province or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Country name or code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// VAT identification number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,

    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl PartyRecord {
    /// Whether this party renders as an organization.
    pub fn is_organization(&self) -> bool {
        self.company.is_some()
    }

    /// Person display name: `"{first_name} {last_name}"`.
    ///
    /// `None` only when both name fields are unset. An unset component is
    /// rendered as the empty string and the separating space is kept, so a
    /// first name alone yields `"Jane "`. Downstream consumers rely on that
    /// exact text, so it is not trimmed here.
    pub fn full_name(&self) -> Option<String> {
        if self.first_name.is_none() && self.last_name.is_none() {
            return None;
        }
        Some(format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        ))
    }
}
