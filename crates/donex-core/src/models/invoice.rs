//! Invoice record models matching the Donut ground-truth schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of a single schema field.
///
/// The model emits each field as inner text of an `<s_*>` tag pair. A tag
/// name that occurs once yields a scalar; repeated occurrences (one per
/// logical table row) fold into an ordered list. Serialized untagged, so a
/// scalar becomes a JSON string and a list a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single occurrence of the field.
    Scalar(String),
    /// Repeated occurrences, in first-seen order.
    List(Vec<String>),
}

impl FieldValue {
    /// Create a scalar value.
    pub fn scalar(value: impl Into<String>) -> Self {
        FieldValue::Scalar(value.into())
    }

    /// Append another occurrence, promoting a scalar to a two-element list.
    pub fn push(&mut self, value: String) {
        match self {
            FieldValue::Scalar(first) => {
                let first = std::mem::take(first);
                *self = FieldValue::List(vec![first, value]);
            }
            FieldValue::List(values) => values.push(value),
        }
    }

    /// The value as a scalar, if it is one.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            FieldValue::List(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(value) => f.write_str(value),
            FieldValue::List(values) => f.write_str(&values.join("; ")),
        }
    }
}

/// A decoded invoice record.
///
/// The shape is fixed regardless of input: all leaf fields exist in every
/// record and serialize as `null` when the corresponding tag was absent
/// from the model output. Consumers must treat every leaf as potentially
/// absent or list-typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice header fields.
    pub header: InvoiceHeader,

    /// Line items. Always exactly one object: repeated item tags collapse
    /// into list-valued fields on that object rather than extra rows.
    pub items: Vec<LineItem>,

    /// Invoice totals.
    pub summary: InvoiceSummary,
}

/// Invoice header fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    /// Invoice number/identifier.
    pub invoice_no: Option<FieldValue>,

    /// Issue date, as printed on the document.
    pub invoice_date: Option<FieldValue>,

    /// Seller name and address block.
    pub seller: Option<FieldValue>,

    /// Client name and address block.
    pub client: Option<FieldValue>,

    /// Seller tax identification number.
    pub seller_tax_id: Option<FieldValue>,

    /// Client tax identification number.
    pub client_tax_id: Option<FieldValue>,

    /// Seller bank account (IBAN).
    pub iban: Option<FieldValue>,
}

/// A line-item object.
///
/// Multi-row invoices produce one object whose fields hold lists (one
/// entry per row) instead of one object per row. This mirrors the model's
/// flat tag stream, which repeats each item tag without a row delimiter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product/service description.
    pub item_desc: Option<FieldValue>,

    /// Quantity.
    pub item_qty: Option<FieldValue>,

    /// Unit price (net).
    pub item_net_price: Option<FieldValue>,

    /// Line total (net).
    pub item_net_worth: Option<FieldValue>,

    /// VAT rate or amount, as printed.
    pub item_vat: Option<FieldValue>,

    /// Line total (gross).
    pub item_gross_worth: Option<FieldValue>,
}

/// Invoice totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    /// Total net amount.
    pub total_net_worth: Option<FieldValue>,

    /// Total VAT amount.
    pub total_vat: Option<FieldValue>,

    /// Total gross amount.
    pub total_gross_worth: Option<FieldValue>,
}

impl Invoice {
    /// Create an empty record: every leaf absent, one empty line item.
    pub fn new() -> Self {
        Self {
            header: InvoiceHeader::default(),
            items: vec![LineItem::default()],
            summary: InvoiceSummary::default(),
        }
    }

    /// Names of schema fields that came back absent, in declared order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        let header = [
            ("invoice_no", &self.header.invoice_no),
            ("invoice_date", &self.header.invoice_date),
            ("seller", &self.header.seller),
            ("client", &self.header.client),
            ("seller_tax_id", &self.header.seller_tax_id),
            ("client_tax_id", &self.header.client_tax_id),
            ("iban", &self.header.iban),
        ];
        for (name, value) in header {
            if value.is_none() {
                missing.push(name);
            }
        }

        for item in &self.items {
            let fields = [
                ("item_desc", &item.item_desc),
                ("item_qty", &item.item_qty),
                ("item_net_price", &item.item_net_price),
                ("item_net_worth", &item.item_net_worth),
                ("item_vat", &item.item_vat),
                ("item_gross_worth", &item.item_gross_worth),
            ];
            for (name, value) in fields {
                if value.is_none() {
                    missing.push(name);
                }
            }
        }

        let summary = [
            ("total_net_worth", &self.summary.total_net_worth),
            ("total_vat", &self.summary.total_vat),
            ("total_gross_worth", &self.summary.total_gross_worth),
        ];
        for (name, value) in summary {
            if value.is_none() {
                missing.push(name);
            }
        }

        missing
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}
