//! schema.org party nodes: `Organization` and `Person`.
//!
//! Both kinds carry the same set of invoice-relevant properties, so the
//! variants share one [`PartyFields`] payload. On top of the typed
//! properties every party node exposes a generic property map for
//! vocabulary terms this crate does not model explicitly.

use serde::Serialize;
use serde_json::Value;

use crate::address::PostalAddress;

/// Insertion-ordered map of additional node properties.
pub type Properties = serde_json::Map<String, Value>;

/// Properties shared by both party kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartyFields {
    /// Display name (company name or person name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Postal address, attached only when it has content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,

    /// VAT identification number.
    #[serde(rename = "vatID", skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,

    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Any further properties, serialized inline after the typed ones.
    #[serde(flatten)]
    pub extra: Properties,
}

impl PartyFields {
    /// Check whether the node carries any property at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.vat_id.is_none()
            && self.email.is_none()
            && self.url.is_none()
            && self.extra.is_empty()
    }
}

/// A party on the invoice, either an organization or a natural person.
///
/// The variant decides the serialized `@type`; the payload is shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum PartyNode {
    /// A company or other legal entity.
    Organization(PartyFields),
    /// A natural person.
    Person(PartyFields),
}

impl PartyNode {
    /// An organization node with no properties yet.
    pub fn organization() -> Self {
        PartyNode::Organization(PartyFields::default())
    }

    /// A person node with no properties yet.
    pub fn person() -> Self {
        PartyNode::Person(PartyFields::default())
    }

    /// Shared property payload, regardless of kind.
    pub fn fields(&self) -> &PartyFields {
        match self {
            PartyNode::Organization(fields) | PartyNode::Person(fields) => fields,
        }
    }

    /// Mutable access to the shared property payload.
    pub fn fields_mut(&mut self) -> &mut PartyFields {
        match self {
            PartyNode::Organization(fields) | PartyNode::Person(fields) => fields,
        }
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.fields().name.as_deref()
    }

    /// Check whether the node carries any property at all.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Set a property by vocabulary name.
    ///
    /// String values for the known property names (`name`, `vatID`,
    /// `email`, `url`) land in the typed fields, so each name serializes
    /// exactly once; everything else goes to the extra map in insertion
    /// order.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let fields = self.fields_mut();
        match value.into() {
            Value::String(text) => {
                let slot = match name.as_str() {
                    "name" => Some(&mut fields.name),
                    "vatID" => Some(&mut fields.vat_id),
                    "email" => Some(&mut fields.email),
                    "url" => Some(&mut fields.url),
                    _ => None,
                };
                match slot {
                    Some(slot) => *slot = Some(text),
                    None => {
                        fields.extra.insert(name, Value::String(text));
                    }
                }
            }
            value => {
                fields.extra.insert(name, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_nodes() {
        assert!(PartyNode::organization().is_empty());
        assert!(PartyNode::person().is_empty());
    }

    #[test]
    fn test_organization_tag() {
        let mut node = PartyNode::organization();
        node.fields_mut().name = Some("ACME GmbH".to_string());
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"@type":"Organization","name":"ACME GmbH"}"#);
    }

    #[test]
    fn test_person_tag() {
        let mut node = PartyNode::person();
        node.fields_mut().email = Some("jane@example.com".to_string());
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"@type":"Person","email":"jane@example.com"}"#);
    }

    #[test]
    fn test_set_property_routes_known_names() {
        let mut node = PartyNode::organization();
        node.set_property("name", "ACME GmbH");
        node.set_property("vatID", "DE123456789");
        assert_eq!(node.name(), Some("ACME GmbH"));
        assert_eq!(node.fields().vat_id.as_deref(), Some("DE123456789"));
        assert!(node.fields().extra.is_empty());

        // Last write wins, still a single serialized key.
        node.set_property("name", "ACME AG");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"@type":"Organization","name":"ACME AG","vatID":"DE123456789"}"#
        );
    }

    #[test]
    fn test_set_property_keeps_unknown_names_in_order() {
        let mut node = PartyNode::person();
        node.fields_mut().name = Some("Jane Doe".to_string());
        node.set_property("telephone", "+49 30 1234");
        node.set_property("jobTitle", "CFO");
        node.set_property("loyaltyPoints", json!(42));
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"@type":"Person","name":"Jane Doe","telephone":"+49 30 1234","jobTitle":"CFO","loyaltyPoints":42}"#
        );
    }

    #[test]
    fn test_extra_properties_count_towards_emptiness() {
        let mut node = PartyNode::organization();
        assert!(node.is_empty());
        node.set_property("telephone", "+49 30 1234");
        assert!(!node.is_empty());
    }

    #[test]
    fn test_address_attachment() {
        let mut node = PartyNode::organization();
        node.fields_mut().address = Some(PostalAddress {
            address_locality: Some("Berlin".to_string()),
            ..PostalAddress::default()
        });
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"@type":"Organization","address":{"@type":"PostalAddress","addressLocality":"Berlin"}}"#
        );
    }
}
