//! The admin record: the application owner's own business details.
//!
//! Business-shaped fields plus banking particulars, the message printed on
//! client documents, and the application password. The password is the one
//! field with no emptiness requirement, only a length cap.

use crate::fields::{Field, FieldSet};
use crate::validate;

const MAX_NAME_LEN: usize = 100;
const MAX_ADDRESS_LEN: usize = 200;
const MAX_AREA_CODE_LEN: usize = 10;
const MAX_TOWN_LEN: usize = 100;
const MAX_CELLPHONE_LEN: usize = 20;
const MAX_EMAIL_LEN: usize = 200;
const MAX_BANK_NAME_LEN: usize = 100;
const MAX_BRANCH_CODE_LEN: usize = 20;
const MAX_ACCOUNT_NUMBER_LEN: usize = 30;
const MAX_CLIENT_MESSAGE_LEN: usize = 500;
const MAX_PASSWORD_LEN: usize = 50;

/// The application owner's business record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Admin {
    business_name: String,
    address: String,
    area_code: String,
    town: String,
    cellphone: String,
    email: String,
    bank_name: String,
    branch_code: String,
    account_number: String,
    client_message: String,
    password: String,
    populated: FieldSet,
}

impl Admin {
    const REQUIRED: FieldSet = FieldSet::of(&[
        Field::BusinessName,
        Field::Address,
        Field::AreaCode,
        Field::Town,
        Field::Cellphone,
        Field::Email,
        Field::BankName,
        Field::BranchCode,
        Field::AccountNumber,
        Field::ClientMessage,
        Field::Password,
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

    pub fn set_bank_name(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_BANK_NAME_LEN);
        if accepted {
            self.bank_name = value.to_string();
        }
        self.populated.mark(Field::BankName, accepted)
    }

    pub fn set_branch_code(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_BRANCH_CODE_LEN);
        if accepted {
            self.branch_code = value.to_string();
        }
        self.populated.mark(Field::BranchCode, accepted)
    }

    pub fn set_account_number(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_ACCOUNT_NUMBER_LEN);
        if accepted {
            self.account_number = value.to_string();
        }
        self.populated.mark(Field::AccountNumber, accepted)
    }

    pub fn set_client_message(&mut self, value: &str) -> bool {
        let accepted = validate::bounded_text(value, MAX_CLIENT_MESSAGE_LEN);
        if accepted {
            self.client_message = value.to_string();
        }
        self.populated.mark(Field::ClientMessage, accepted)
    }

    /// May be empty; only the length cap applies.
    pub fn set_password(&mut self, value: &str) -> bool {
        let accepted = validate::optional_text(value, MAX_PASSWORD_LEN);
        if accepted {
            self.password = value.to_string();
        }
        self.populated.mark(Field::Password, accepted)
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

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn client_message(&self) -> &str {
        &self.client_message
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// All required fields populated and nothing else.
    pub fn is_valid(&self) -> bool {
        self.populated.is_exactly(Self::REQUIRED)
    }
}

#[cfg(test)]
pub(crate) fn valid_admin() -> Admin {
    let mut admin = Admin::new();
    admin.set_business_name("TME");
    admin.set_address("7 Mill Road");
    admin.set_area_code("4021");
    admin.set_town("Durban");
    admin.set_cellphone("0823456789");
    admin.set_email("accounts@tme.co.za");
    admin.set_bank_name("First National");
    admin.set_branch_code("250655");
    admin.set_account_number("62000000001");
    admin.set_client_message("Thank you for your business");
    admin.set_password("hunter2");
    admin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_invalid() {
        assert!(!Admin::new().is_valid());
    }

    #[test]
    fn test_fully_populated_record_is_valid() {
        assert!(valid_admin().is_valid());
    }

    #[test]
    fn test_empty_password_is_accepted() {
        let mut admin = valid_admin();
        assert!(admin.set_password(""));
        assert!(admin.is_valid());
        assert_eq!(admin.password(), "");
    }

    #[test]
    fn test_password_length_cap() {
        let mut admin = valid_admin();
        assert!(!admin.set_password(&"p".repeat(51)));
        assert!(!admin.is_valid());
    }

    #[test]
    fn test_missing_bank_details_invalid() {
        let mut admin = Admin::new();
        admin.set_business_name("TME");
        admin.set_address("7 Mill Road");
        admin.set_area_code("4021");
        admin.set_town("Durban");
        admin.set_cellphone("0823456789");
        admin.set_email("accounts@tme.co.za");
        admin.set_client_message("Thanks");
        admin.set_password("");
        assert!(!admin.is_valid());
    }
}
