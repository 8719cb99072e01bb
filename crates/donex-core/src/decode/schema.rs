//! Projection of the extracted FieldMap onto the fixed invoice schema.

use super::tags::FieldMap;
use crate::models::invoice::{Invoice, InvoiceHeader, InvoiceSummary, LineItem};

/// Project a FieldMap onto the fixed three-section record.
///
/// Each schema field reads its source tag directly; absent tags become
/// `None`. Values are carried over as-is, scalar or list. The items
/// collection always holds exactly one object: list-valued item fields
/// stay lists on that object instead of being unzipped into one object
/// per row. Total over any FieldMap.
pub fn project(fields: &FieldMap) -> Invoice {
    let field = |key: &str| fields.get(key).cloned();

    Invoice {
        header: InvoiceHeader {
            invoice_no: field("s_invoice_no"),
            invoice_date: field("s_invoice_date"),
            seller: field("s_seller"),
            client: field("s_client"),
            seller_tax_id: field("s_seller_tax_id"),
            client_tax_id: field("s_client_tax_id"),
            iban: field("s_iban"),
        },
        items: vec![LineItem {
            item_desc: field("s_item_desc"),
            item_qty: field("s_item_qty"),
            item_net_price: field("s_item_net_price"),
            item_net_worth: field("s_item_net_worth"),
            item_vat: field("s_item_vat"),
            item_gross_worth: field("s_item_gross_worth"),
        }],
        summary: InvoiceSummary {
            total_net_worth: field("s_total_net_worth"),
            total_vat: field("s_total_vat"),
            total_gross_worth: field("s_total_gross_worth"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_map_projects_to_all_absent() {
        let invoice = project(&FieldMap::new());
        assert_eq!(invoice, Invoice::new());
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.missing_fields().len(), 16);
    }

    #[test]
    fn test_known_keys_land_in_their_slots() {
        let mut fields = FieldMap::new();
        fields.insert("s_invoice_no".to_string(), FieldValue::scalar("INV-1"));
        fields.insert("s_total_vat".to_string(), FieldValue::scalar("23"));

        let invoice = project(&fields);
        assert_eq!(invoice.header.invoice_no, Some(FieldValue::scalar("INV-1")));
        assert_eq!(invoice.summary.total_vat, Some(FieldValue::scalar("23")));
        assert_eq!(invoice.header.client, None);
    }

    #[test]
    fn test_list_values_stay_on_the_single_item() {
        let mut fields = FieldMap::new();
        fields.insert(
            "s_item_desc".to_string(),
            FieldValue::List(vec!["a".to_string(), "b".to_string()]),
        );
        fields.insert("s_item_qty".to_string(), FieldValue::scalar("1"));

        let invoice = project(&fields);
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(
            invoice.items[0].item_desc,
            Some(FieldValue::List(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(invoice.items[0].item_qty, Some(FieldValue::scalar("1")));
    }

    #[test]
    fn test_unknown_keys_are_not_projected() {
        let mut fields = FieldMap::new();
        fields.insert("s_mystery".to_string(), FieldValue::scalar("42"));

        let invoice = project(&fields);
        assert_eq!(invoice, Invoice::new());
    }
}
