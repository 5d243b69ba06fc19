//! Mapping of party records onto schema.org nodes.

use rechnung_schema::{PartyNode, PostalAddress};

use crate::models::PartyRecord;

impl From<&PartyRecord> for PostalAddress {
    /// Map the address fields onto a `PostalAddress`, keeping only the
    /// ones present. A record without address data yields an empty node.
    fn from(record: &PartyRecord) -> Self {
        PostalAddress {
            street_address: record.street_address.clone(),
            address_locality: record.city.clone(),
            postal_code: record.zip.clone(),
            address_region: record.state.clone(),
            address_country: record.country.clone(),
        }
    }
}

impl From<&PartyRecord> for PartyNode {
    /// Build the party node: an `Organization` named after `company` when
    /// that is set, a `Person` otherwise. The address is attached only
    /// when it has content; `vatID`, `email` and `url` only when present.
    fn from(record: &PartyRecord) -> Self {
        let mut node = match &record.company {
            Some(company) => {
                let mut node = PartyNode::organization();
                node.fields_mut().name = Some(company.clone());
                node
            }
            None => {
                let mut node = PartyNode::person();
                node.fields_mut().name = record.full_name();
                node
            }
        };

        let address = PostalAddress::from(record);
        if !address.is_empty() {
            node.fields_mut().address = Some(address);
        }
        node.fields_mut().vat_id = record.vat_id.clone();
        node.fields_mut().email = record.email.clone();
        node.fields_mut().url = record.website.clone();
        node
    }
}
