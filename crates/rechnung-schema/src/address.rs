//! schema.org `PostalAddress` node.

use serde::Serialize;

/// A postal address attached to a party node.
///
/// Every property is optional; absent properties are left out of the
/// serialized node entirely rather than emitted as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct PostalAddress {
    /// Street name and number.
    #[serde(rename = "streetAddress", skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    /// City or locality.
    #[serde(rename = "addressLocality", skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,

    /// Postal or ZIP code.
    #[serde(rename = "postalCode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// State, province or region.
    #[serde(rename = "addressRegion", skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,

    /// Country name or code.
    #[serde(rename = "addressCountry", skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

impl PostalAddress {
    /// Check whether the address carries any property at all.
    pub fn is_empty(&self) -> bool {
        self.street_address.is_none()
            && self.address_locality.is_none()
            && self.postal_code.is_none()
            && self.address_region.is_none()
            && self.address_country.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address_is_empty() {
        assert!(PostalAddress::default().is_empty());
    }

    #[test]
    fn test_any_property_makes_address_non_empty() {
        let address = PostalAddress {
            address_country: Some("DE".to_string()),
            ..PostalAddress::default()
        };
        assert!(!address.is_empty());
    }

    #[test]
    fn test_absent_properties_are_omitted() {
        let address = PostalAddress {
            street_address: Some("Musterstr. 1".to_string()),
            postal_code: Some("10115".to_string()),
            ..PostalAddress::default()
        };
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(
            json,
            r#"{"@type":"PostalAddress","streetAddress":"Musterstr. 1","postalCode":"10115"}"#
        );
    }

    #[test]
    fn test_empty_address_serializes_to_type_only() {
        let json = serde_json::to_string(&PostalAddress::default()).unwrap();
        assert_eq!(json, r#"{"@type":"PostalAddress"}"#);
    }
}
