//! The markup builder tying records and schema nodes together.

use std::fmt;

use rechnung_schema::{InvoiceNode, PartyNode, PaymentStatusType, PriceSpecification};
use tracing::debug;

use crate::markup::period::billing_period;
use crate::models::{InvoiceRecord, PartyRecord};

/// Builds schema.org `Invoice` markup from an invoice record and the two
/// party records involved in it.
///
/// The builder holds the state for one rendering operation. Configure it
/// through the chaining setters, then call [`build`](Self::build) for the
/// document or [`to_script`](Self::to_script) for the embeddable tag.
/// A builder without an invoice record produces nothing; that is the only
/// non-success outcome. Use one builder per invoice rather than sharing
/// an instance across renders.
#[derive(Debug, Clone, Default)]
pub struct InvoiceMarkup {
    invoice: Option<InvoiceRecord>,
    seller: PartyRecord,
    buyer: PartyRecord,
    url: Option<String>,
}

impl InvoiceMarkup {
    /// Create a builder with no invoice, empty parties and no URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the invoice record the markup describes.
    pub fn with_invoice(mut self, invoice: InvoiceRecord) -> Self {
        self.invoice = Some(invoice);
        self
    }

    /// Set the seller party, replacing any previous seller entirely.
    pub fn with_seller(mut self, seller: PartyRecord) -> Self {
        self.seller = seller;
        self
    }

    /// Set the buyer party, replacing any previous buyer entirely.
    pub fn with_buyer(mut self, buyer: PartyRecord) -> Self {
        self.buyer = buyer;
        self
    }

    /// Set the canonical URL of the page the markup is embedded in.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The configured invoice record, if any.
    pub fn invoice(&self) -> Option<&InvoiceRecord> {
        self.invoice.as_ref()
    }

    /// The configured seller record.
    pub fn seller(&self) -> &PartyRecord {
        &self.seller
    }

    /// The configured buyer record.
    pub fn buyer(&self) -> &PartyRecord {
        &self.buyer
    }

    /// The configured page URL, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The seller as a schema.org party node.
    pub fn seller_markup(&self) -> PartyNode {
        PartyNode::from(&self.seller)
    }

    /// The buyer as a schema.org party node.
    pub fn buyer_markup(&self) -> PartyNode {
        PartyNode::from(&self.buyer)
    }

    /// Build the `Invoice` document, or `None` when no invoice record has
    /// been configured.
    ///
    /// `identifier` and `name` both carry the invoice number. Parties are
    /// attached only when they have at least one property, the due and
    /// scheduled payment dates only when the record carries the matching
    /// timestamp, and the URL only when one was set. `paymentStatus` is
    /// always `PaymentAutomaticallyApplied`.
    pub fn build(&self) -> Option<InvoiceNode> {
        let invoice = match &self.invoice {
            Some(invoice) => invoice,
            None => {
                debug!("No invoice configured, skipping markup");
                return None;
            }
        };
        debug!("Building markup for invoice {}", invoice.number);

        let mut node = InvoiceNode::new();
        node.identifier = Some(invoice.number.clone());
        node.name = Some(invoice.number.clone());
        node.billing_period = Some(billing_period(
            invoice.period_start_utc(),
            invoice.period_end_utc(),
        ));

        let customer = self.buyer_markup();
        if !customer.is_empty() {
            node.customer = Some(customer);
        }
        node.payment_due_date = invoice.due_date_utc();
        node.payment_status = Some(PaymentStatusType::PaymentAutomaticallyApplied);

        let provider = self.seller_markup();
        if !provider.is_empty() {
            node.provider = Some(provider);
        }
        node.scheduled_payment_date = invoice.next_payment_attempt_utc();
        node.total_payment_due = Some(PriceSpecification::from_minor_units(
            invoice.total,
            &invoice.currency,
        ));
        node.url = self.url.clone();

        Some(node)
    }

    /// The document as a `<script type="application/ld+json">` tag, or
    /// `None` when no invoice record has been configured.
    pub fn to_script(&self) -> Option<String> {
        self.build().map(|node| node.to_script())
    }
}

impl fmt::Display for InvoiceMarkup {
    /// Writes the script tag, or nothing when no invoice is configured.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_script() {
            Some(script) => f.write_str(&script),
            None => Ok(()),
        }
    }
}
