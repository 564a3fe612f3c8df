//! The invoice record with its labor and material line items.

use crate::fields::{Field, FieldSet};
use crate::line_item::LineItem;
use crate::validate;

const MAX_NAME_LEN: usize = 100;
const MAX_JOB_CARD_LEN: usize = 50;
const MAX_ORDER_NUMBER_LEN: usize = 50;

/// An invoice issued to a client.
///
/// Validity covers the scalar fields only. The two line-item collections are
/// carried alongside and assembled separately; an invoice header can be valid
/// before its lines have been attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invoice {
    invoice_id: i64,
    business_name: String,
    job_card_number: String,
    order_number: String,
    invoice_date: String,
    paid: i64,
    description_total: f64,
    material_total: f64,
    grand_total: f64,
    description_items: Vec<LineItem>,
    material_items: Vec<LineItem>,
    populated: FieldSet,
}

impl Invoice {
    const REQUIRED: FieldSet = FieldSet::of(&[
        Field::InvoiceId,
        Field::BusinessName,
        Field::JobCardNumber,
        Field::OrderNumber,
        Field::InvoiceDate,
        Field::Paid,
        Field::DescriptionTotal,
        Field::MaterialTotal,
        Field::GrandTotal,
    ]);

    /// Construct an empty, invalid record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_invoice_id(&mut self, value: i64) -> bool {
        let accepted = validate::record_id(value);
        if accepted {
            self.invoice_id = value;
        }
        self.populated.mark(Field::InvoiceId, accepted)
    }

    pub fn set_business_name(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_NAME_LEN);
        if accepted {
            self.business_name = value.to_string();
        }
        self.populated.mark(Field::BusinessName, accepted)
    }

    pub fn set_job_card_number(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_JOB_CARD_LEN);
        if accepted {
            self.job_card_number = value.to_string();
        }
        self.populated.mark(Field::JobCardNumber, accepted)
    }

    pub fn set_order_number(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_ORDER_NUMBER_LEN);
        if accepted {
            self.order_number = value.to_string();
        }
        self.populated.mark(Field::OrderNumber, accepted)
    }

    /// ISO `YYYY-MM-DD`.
    pub fn set_invoice_date(&mut self, value: &str) -> bool {
        let accepted = validate::date(value);
        if accepted {
            self.invoice_date = value.to_string();
        }
        self.populated.mark(Field::InvoiceDate, accepted)
    }

    /// 1 once settled, 0 while outstanding.
    pub fn set_paid(&mut self, value: i64) -> bool {
        let accepted = validate::flag(value);
        if accepted {
            self.paid = value;
        }
        self.populated.mark(Field::Paid, accepted)
    }

    pub fn set_description_total(&mut self, value: f64) -> bool {
        let accepted = validate::amount(value);
        if accepted {
            self.description_total = value;
        }
        self.populated.mark(Field::DescriptionTotal, accepted)
    }

    pub fn set_material_total(&mut self, value: f64) -> bool {
        let accepted = validate::amount(value);
        if accepted {
            self.material_total = value;
        }
        self.populated.mark(Field::MaterialTotal, accepted)
    }

    pub fn set_grand_total(&mut self, value: f64) -> bool {
        let accepted = validate::amount(value);
        if accepted {
            self.grand_total = value;
        }
        self.populated.mark(Field::GrandTotal, accepted)
    }

    pub fn set_description_items(&mut self, items: Vec<LineItem>) {
        self.description_items = items;
    }

    pub fn set_material_items(&mut self, items: Vec<LineItem>) {
        self.material_items = items;
    }

    pub fn add_description_item(&mut self, item: LineItem) {
        self.description_items.push(item);
    }

    pub fn add_material_item(&mut self, item: LineItem) {
        self.material_items.push(item);
    }

    pub fn invoice_id(&self) -> i64 {
        self.invoice_id
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn job_card_number(&self) -> &str {
        &self.job_card_number
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn invoice_date(&self) -> &str {
        &self.invoice_date
    }

    pub fn paid(&self) -> i64 {
        self.paid
    }

    pub fn description_total(&self) -> f64 {
        self.description_total
    }

    pub fn material_total(&self) -> f64 {
        self.material_total
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    pub fn description_items(&self) -> &[LineItem] {
        &self.description_items
    }

    pub fn material_items(&self) -> &[LineItem] {
        &self.material_items
    }

    /// All required scalar fields populated and nothing else.
    pub fn is_valid(&self) -> bool {
        self.populated.is_exactly(Self::REQUIRED)
    }
}

#[cfg(test)]
pub(crate) fn valid_invoice(invoice_id: i64) -> Invoice {
    let mut invoice = Invoice::new();
    invoice.set_invoice_id(invoice_id);
    invoice.set_business_name("Harbour Engineering");
    invoice.set_job_card_number("JC-1042");
    invoice.set_order_number("PO-88231");
    invoice.set_invoice_date("2024-03-15");
    invoice.set_paid(0);
    invoice.set_description_total(5558.99);
    invoice.set_material_total(1200.50);
    invoice.set_grand_total(6759.49);
    invoice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::valid_line_item;

    #[test]
    fn test_new_record_is_invalid() {
        assert!(!Invoice::new().is_valid());
    }

    #[test]
    fn test_fully_populated_record_is_valid() {
        assert!(valid_invoice(7).is_valid());
    }

    #[test]
    fn test_zero_id_rejected() {
        let mut invoice = valid_invoice(7);
        assert!(!invoice.set_invoice_id(0));
        assert!(!invoice.is_valid());
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut invoice = valid_invoice(7);
        assert!(!invoice.set_invoice_date("15/03/2024"));
        assert!(!invoice.is_valid());
        assert!(invoice.set_invoice_date("2024-03-15"));
        assert!(invoice.is_valid());
    }

    #[test]
    fn test_line_items_do_not_affect_validity() {
        let mut invoice = valid_invoice(7);
        invoice.add_description_item(valid_line_item(1, 1));
        invoice.add_material_item(valid_line_item(1, 0));
        assert!(invoice.is_valid());
        assert_eq!(invoice.description_items().len(), 1);
        assert_eq!(invoice.material_items().len(), 1);

        invoice.set_description_items(Vec::new());
        assert!(invoice.is_valid());
        assert!(invoice.description_items().is_empty());
    }
}
