//! One row of an invoice's labor or material breakdown.

use crate::fields::{Field, FieldSet};
use crate::validate;

const MAX_DESCRIPTION_LEN: usize = 500;

/// A quantity/description/amount line on an invoice.
///
/// The `is_description` flag separates labor lines (1) from material
/// lines (0); the row number preserves the order the lines were entered in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItem {
    quantity: i64,
    description: String,
    amount: f64,
    row_number: i64,
    is_description: i64,
    populated: FieldSet,
}

impl LineItem {
    const REQUIRED: FieldSet = FieldSet::of(&[
        Field::Quantity,
        Field::Description,
        Field::Amount,
        Field::RowNumber,
        Field::IsDescription,
    ]);

    /// Construct an empty, invalid record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_quantity(&mut self, value: i64) -> bool {
        let accepted = validate::quantity(value);
        if accepted {
            self.quantity = value;
        }
        self.populated.mark(Field::Quantity, accepted)
    }

    pub fn set_description(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_DESCRIPTION_LEN);
        if accepted {
            self.description = value.to_string();
        }
        self.populated.mark(Field::Description, accepted)
    }

    pub fn set_amount(&mut self, value: f64) -> bool {
        let accepted = validate::amount(value);
        if accepted {
            self.amount = value;
        }
        self.populated.mark(Field::Amount, accepted)
    }

    /// Any value is a usable row number.
    pub fn set_row_number(&mut self, value: i64) -> bool {
        self.row_number = value;
        self.populated.mark(Field::RowNumber, true)
    }

    /// 1 for a labor line, 0 for a material line.
    pub fn set_is_description(&mut self, value: i64) -> bool {
        let accepted = validate::flag(value);
        if accepted {
            self.is_description = value;
        }
        self.populated.mark(Field::IsDescription, accepted)
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn row_number(&self) -> i64 {
        self.row_number
    }

    pub fn is_description(&self) -> i64 {
        self.is_description
    }

    /// All required fields populated and nothing else.
    pub fn is_valid(&self) -> bool {
        self.populated.is_exactly(Self::REQUIRED)
    }
}

#[cfg(test)]
pub(crate) fn valid_line_item(row_number: i64, is_description: i64) -> LineItem {
    let mut item = LineItem::new();
    item.set_quantity(12);
    item.set_description("Machining");
    item.set_amount(5558.99);
    item.set_row_number(row_number);
    item.set_is_description(is_description);
    item
}
