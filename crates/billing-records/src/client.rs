//! The client record: a customer the owner invoices.
//!
//! Business-shaped fields plus a VAT number and the statement schedule, a
//! pair of weekday digits ("first,second") controlling when statements go
//! out for this client.

use crate::fields::{Field, FieldSet};
use crate::validate;

const MAX_NAME_LEN: usize = 100;
const MAX_ADDRESS_LEN: usize = 200;
const MAX_AREA_CODE_LEN: usize = 10;
const MAX_TOWN_LEN: usize = 100;
const MAX_CELLPHONE_LEN: usize = 20;
const MAX_EMAIL_LEN: usize = 200;
const MAX_VAT_NUMBER_LEN: usize = 30;

/// A customer of the application owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Client {
    business_name: String,
    address: String,
    area_code: String,
    town: String,
    cellphone: String,
    email: String,
    vat_number: String,
    statement_schedule: String,
    populated: FieldSet,
}

impl Client {
    const REQUIRED: FieldSet = FieldSet::of(&[
        Field::BusinessName,
        Field::Address,
        Field::AreaCode,
        Field::Town,
        Field::Cellphone,
        Field::Email,
        Field::VatNumber,
        Field::StatementSchedule,
    ]);

    /// Construct an empty, invalid record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_business_name(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_NAME_LEN);
        if accepted {
            self.business_name = value.to_string();
        }
        self.populated.mark(Field::BusinessName, accepted)
    }

    pub fn set_address(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_ADDRESS_LEN);
        if accepted {
            self.address = value.to_string();
        }
        self.populated.mark(Field::Address, accepted)
    }

    pub fn set_area_code(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_AREA_CODE_LEN);
        if accepted {
            self.area_code = value.to_string();
        }
        self.populated.mark(Field::AreaCode, accepted)
    }

    pub fn set_town(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_TOWN_LEN);
        if accepted {
            self.town = value.to_string();
        }
        self.populated.mark(Field::Town, accepted)
    }

    pub fn set_cellphone(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_CELLPHONE_LEN);
        if accepted {
            self.cellphone = value.to_string();
        }
        self.populated.mark(Field::Cellphone, accepted)
    }

    /// One or more addresses separated by `;` or `,`.
    pub fn set_email(&mut self, value: &str) -> bool {
        let accepted = validate::optional_text(value, MAX_EMAIL_LEN) && validate::email_list(value);
        if accepted {
            self.email = value.to_string();
        }
        self.populated.mark(Field::Email, accepted)
    }

    /// May be empty for clients not registered for VAT.
    pub fn set_vat_number(&mut self, value: &str) -> bool {
        let accepted = validate::optional_text(value, MAX_VAT_NUMBER_LEN);
        if accepted {
            self.vat_number = value.to_string();
        }
        self.populated.mark(Field::VatNumber, accepted)
    }

    /// Two weekday digits in `"first,second"` form, each 1 through 7.
    pub fn set_statement_schedule(&mut self, value: &str) -> bool {
        let accepted = validate::statement_schedule(value);
        if accepted {
            self.statement_schedule = value.to_string();
        }
        self.populated.mark(Field::StatementSchedule, accepted)
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn town(&self) -> &str {
        &self.town
    }

    pub fn cellphone(&self) -> &str {
        &self.cellphone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn vat_number(&self) -> &str {
        &self.vat_number
    }

    pub fn statement_schedule(&self) -> &str {
        &self.statement_schedule
    }

    /// All required fields populated and nothing else.
    pub fn is_valid(&self) -> bool {
        self.populated.is_exactly(Self::REQUIRED)
    }
}

#[cfg(test)]
pub(crate) fn valid_client() -> Client {
    let mut client = Client::new();
    client.set_business_name("Harbour Engineering");
    client.set_address("12 Quay Street");
    client.set_area_code("4001");
    client.set_town("Durban");
    client.set_cellphone("0834567890");
    client.set_email("orders@harboureng.co.za");
    client.set_vat_number("4550123456");
    client.set_statement_schedule("1,4");
    client
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_invalid() {
        assert!(!Client::new().is_valid());
    }

    #[test]
    fn test_fully_populated_record_is_valid() {
        assert!(valid_client().is_valid());
    }

    #[test]
    fn test_schedule_rejects_day_out_of_range() {
        let mut client = valid_client();
        assert!(!client.set_statement_schedule("4,9"));
        assert!(!client.is_valid());
        assert!(client.set_statement_schedule("4,7"));
        assert!(client.is_valid());
    }

    #[test]
    fn test_empty_vat_number_is_accepted() {
        let mut client = valid_client();
        assert!(client.set_vat_number(""));
        assert!(client.is_valid());
    }

    #[test]
    fn test_multiple_emails() {
        let mut client = valid_client();
        assert!(client.set_email("orders@harboureng.co.za;accounts@harboureng.co.za"));
        assert!(client.is_valid());
        assert!(!client.set_email("orders@harboureng.co.za;not-an-address"));
        assert!(!client.is_valid());
    }
}
