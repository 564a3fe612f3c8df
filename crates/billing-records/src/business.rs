//! The business identity record.
//!
//! Base shape shared by the admin and client records: a trading name plus
//! contact details. Every field is required.

use crate::fields::{Field, FieldSet};
use crate::validate;

const MAX_NAME_LEN: usize = 100;
const MAX_ADDRESS_LEN: usize = 200;
const MAX_AREA_CODE_LEN: usize = 10;
const MAX_TOWN_LEN: usize = 100;
const MAX_CELLPHONE_LEN: usize = 20;
const MAX_EMAIL_LEN: usize = 200;

/// A business's identity and contact details.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Business {
    business_name: String,
    address: String,
    area_code: String,
    town: String,
    cellphone: String,
    email: String,
    populated: FieldSet,
}

impl Business {
    const REQUIRED: FieldSet = FieldSet::of(&[
        Field::BusinessName,
        Field::Address,
        Field::AreaCode,
        Field::Town,
        Field::Cellphone,
        Field::Email,
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

    /// All required fields populated and nothing else.
    pub fn is_valid(&self) -> bool {
        self.populated.is_exactly(Self::REQUIRED)
    }
}

#[cfg(test)]
pub(crate) fn valid_business() -> Business {
    let mut business = Business::new();
    business.set_business_name("TME");
    business.set_address("7 Mill Road");
    business.set_area_code("4021");
    business.set_town("Durban");
    business.set_cellphone("0823456789");
    business.set_email("accounts@tme.co.za");
    business
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_invalid() {
        assert!(!Business::new().is_valid());
    }

    #[test]
    fn test_fully_populated_record_is_valid() {
        assert!(valid_business().is_valid());
    }

    #[test]
    fn test_rejected_setter_clears_validity() {
        let mut business = valid_business();
        assert!(business.is_valid());

        assert!(!business.set_town(""));
        assert!(!business.is_valid());

        // Accepting a replacement restores validity.
        assert!(business.set_town("Pinetown"));
        assert!(business.is_valid());
        assert_eq!(business.town(), "Pinetown");
    }

    #[test]
    fn test_rejection_keeps_previous_value_but_not_validity() {
        let mut business = valid_business();
        business.set_cellphone(&"9".repeat(40));
        assert_eq!(business.cellphone(), "0823456789");
        assert!(!business.is_valid());
    }

    #[test]
    fn test_multi_address_email() {
        let mut business = valid_business();
        assert!(business.set_email("accounts@tme.co.za;boss@tme.co.za"));
        assert!(business.is_valid());

        assert!(!business.set_email("accounts@tme.co.za;nonsense"));
        assert!(!business.is_valid());
    }

    #[test]
    fn test_name_length_cap() {
        let mut business = Business::new();
        assert!(business.set_business_name(&"a".repeat(100)));
        assert!(!business.set_business_name(&"a".repeat(101)));
    }
}
