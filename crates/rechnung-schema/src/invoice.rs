//! schema.org `Invoice` node and its nested value types.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

use crate::datetime;
use crate::party::PartyNode;
use crate::script;

/// JSON-LD context carried by the root node.
pub const CONTEXT: &str = "https://schema.org";

/// schema.org `PaymentStatusType` enumeration.
///
/// Serializes to the canonical enumeration member URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentStatusType {
    /// An automatic payment system is in place and will be used.
    #[serde(rename = "https://schema.org/PaymentAutomaticallyApplied")]
    PaymentAutomaticallyApplied,
    /// The payment has been received and processed.
    #[serde(rename = "https://schema.org/PaymentComplete")]
    PaymentComplete,
    /// The payee received the payment but declined it.
    #[serde(rename = "https://schema.org/PaymentDeclined")]
    PaymentDeclined,
    /// The payment is due, but still within an acceptable time.
    #[serde(rename = "https://schema.org/PaymentDue")]
    PaymentDue,
    /// The payment is due and considered late.
    #[serde(rename = "https://schema.org/PaymentPastDue")]
    PaymentPastDue,
}

impl PaymentStatusType {
    /// Canonical enumeration member URL.
    pub fn as_url(&self) -> &'static str {
        match self {
            PaymentStatusType::PaymentAutomaticallyApplied => {
                "https://schema.org/PaymentAutomaticallyApplied"
            }
            PaymentStatusType::PaymentComplete => "https://schema.org/PaymentComplete",
            PaymentStatusType::PaymentDeclined => "https://schema.org/PaymentDeclined",
            PaymentStatusType::PaymentDue => "https://schema.org/PaymentDue",
            PaymentStatusType::PaymentPastDue => "https://schema.org/PaymentPastDue",
        }
    }
}

/// schema.org `PriceSpecification` for the invoice total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub struct PriceSpecification {
    /// Amount in major currency units.
    #[serde(serialize_with = "serialize_price")]
    pub price: Decimal,

    /// Upper-case ISO 4217 currency code.
    #[serde(rename = "priceCurrency")]
    pub price_currency: String,
}

impl PriceSpecification {
    /// Build from a minor-unit amount (e.g. cents) and a currency code in
    /// any case.
    pub fn from_minor_units(amount: i64, currency: &str) -> Self {
        Self {
            price: Decimal::new(amount, 2),
            price_currency: currency.to_ascii_uppercase(),
        }
    }
}

/// Whole amounts serialize as integers, fractional ones as floats
/// (`123` rather than `123.00`, `123.45` otherwise).
fn serialize_price<S>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.is_integer() {
        serializer.serialize_i64(price.to_i64().unwrap_or_default())
    } else {
        serializer.serialize_f64(price.to_f64().unwrap_or_default())
    }
}

/// schema.org `Invoice` root node.
///
/// Every property is optional; the caller decides which ones to attach.
/// Properties serialize in declaration order, absent ones are omitted
/// entirely. Only the root node carries `@context`; nested nodes are
/// tagged with `@type` alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceNode {
    #[serde(rename = "@context")]
    context: &'static str,

    #[serde(rename = "@type")]
    node_type: &'static str,

    /// Invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Document name, conventionally the invoice number as well.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Billing period as `<start date>/<ISO 8601 duration>`.
    #[serde(rename = "billingPeriod", skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<String>,

    /// The buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<PartyNode>,

    /// When payment is due.
    #[serde(
        rename = "paymentDueDate",
        serialize_with = "datetime::serialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_due_date: Option<DateTime<Utc>>,

    /// Payment status of the invoice.
    #[serde(rename = "paymentStatus", skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatusType>,

    /// The seller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<PartyNode>,

    /// When the next payment attempt is scheduled.
    #[serde(
        rename = "scheduledPaymentDate",
        serialize_with = "datetime::serialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_payment_date: Option<DateTime<Utc>>,

    /// Total amount due.
    #[serde(rename = "totalPaymentDue", skip_serializing_if = "Option::is_none")]
    pub total_payment_due: Option<PriceSpecification>,

    /// Canonical URL of the invoice page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl InvoiceNode {
    /// A node carrying only the JSON-LD tags.
    pub fn new() -> Self {
        Self {
            context: CONTEXT,
            node_type: "Invoice",
            identifier: None,
            name: None,
            billing_period: None,
            customer: None,
            payment_due_date: None,
            payment_status: None,
            provider: None,
            scheduled_payment_date: None,
            total_payment_due: None,
            url: None,
        }
    }

    /// Serialized JSON-LD text.
    pub fn to_json(&self) -> String {
        // Node types serialize infallibly: string keys, finite numbers.
        serde_json::to_string(self).expect("invoice node serializes to JSON")
    }

    /// The node as an embeddable `<script type="application/ld+json">` tag.
    pub fn to_script(&self) -> String {
        script::script_tag(&self.to_json())
    }
}

impl Default for InvoiceNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvoiceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_script())
    }
}
