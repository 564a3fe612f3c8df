//! The billing statement record.

use crate::fields::{Field, FieldSet};
use crate::validate;

const MAX_NAME_LEN: usize = 100;

/// A statement aggregating a client's invoices over a billing period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    statement_id: i64,
    business_name: String,
    statement_date: String,
    paid: i64,
    period_start: String,
    period_end: String,
    populated: FieldSet,
}

impl Statement {
    const REQUIRED: FieldSet = FieldSet::of(&[
        Field::StatementId,
        Field::BusinessName,
        Field::StatementDate,
        Field::Paid,
        Field::PeriodStart,
        Field::PeriodEnd,
    ]);

    /// Construct an empty, invalid record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_statement_id(&mut self, value: i64) -> bool {
        let accepted = validate::record_id(value);
        if accepted {
            self.statement_id = value;
        }
        self.populated.mark(Field::StatementId, accepted)
    }

    pub fn set_business_name(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_NAME_LEN);
        if accepted {
            self.business_name = value.to_string();
        }
        self.populated.mark(Field::BusinessName, accepted)
    }

    /// ISO `YYYY-MM-DD`.
    pub fn set_statement_date(&mut self, value: &str) -> bool {
        let accepted = validate::date(value);
        if accepted {
            self.statement_date = value.to_string();
        }
        self.populated.mark(Field::StatementDate, accepted)
    }

    /// 1 once settled, 0 while outstanding.
    pub fn set_paid(&mut self, value: i64) -> bool {
        let accepted = validate::flag(value);
        if accepted {
            self.paid = value;
        }
        self.populated.mark(Field::Paid, accepted)
    }

    pub fn set_period_start(&mut self, value: &str) -> bool {
        let accepted = validate::date(value);
        if accepted {
            self.period_start = value.to_string();
        }
        self.populated.mark(Field::PeriodStart, accepted)
    }

    pub fn set_period_end(&mut self, value: &str) -> bool {
        let accepted = validate::date(value);
        if accepted {
            self.period_end = value.to_string();
        }
        self.populated.mark(Field::PeriodEnd, accepted)
    }

    pub fn statement_id(&self) -> i64 {
        self.statement_id
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn statement_date(&self) -> &str {
        &self.statement_date
    }

    pub fn paid(&self) -> i64 {
        self.paid
    }

    pub fn period_start(&self) -> &str {
        &self.period_start
    }

    pub fn period_end(&self) -> &str {
        &self.period_end
    }

    /// All required fields populated and nothing else.
    pub fn is_valid(&self) -> bool {
        self.populated.is_exactly(Self::REQUIRED)
    }
}

#[cfg(test)]
pub(crate) fn valid_statement(statement_id: i64) -> Statement {
    let mut statement = Statement::new();
    statement.set_statement_id(statement_id);
    statement.set_business_name("Harbour Engineering");
    statement.set_statement_date("2024-03-31");
    statement.set_paid(0);
    statement.set_period_start("2024-03-01");
    statement.set_period_end("2024-03-31");
    statement
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_invalid() {
        assert!(!Statement::new().is_valid());
    }

    #[test]
    fn test_fully_populated_record_is_valid() {
        assert!(valid_statement(3).is_valid());
    }

    #[test]
    fn test_period_bounds_must_be_dates() {
        let mut statement = valid_statement(3);
        assert!(!statement.set_period_start("March 1st"));
        assert!(!statement.is_valid());
        assert!(statement.set_period_start("2024-03-01"));
        assert!(statement.is_valid());
    }
}
