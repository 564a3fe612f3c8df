//! Composite aggregates handed to the document rendering layer.
//!
//! These bundle already-validated records; they add no validation of their
//! own beyond requiring every constituent to be valid.

use crate::admin::Admin;
use crate::client::Client;
use crate::invoice::Invoice;
use crate::statement::Statement;

/// Everything needed to render one invoice document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfInvoice {
    pub admin: Admin,
    pub client: Client,
    pub invoice: Invoice,
}

impl PdfInvoice {
    pub fn new(admin: Admin, client: Client, invoice: Invoice) -> Self {
        Self {
            admin,
            client,
            invoice,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.admin.is_valid() && self.client.is_valid() && self.invoice.is_valid()
    }
}

/// Everything needed to render one statement document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfStatement {
    pub admin: Admin,
    pub client: Client,
    pub statement: Statement,
    pub invoices: Vec<Invoice>,
}

impl PdfStatement {
    pub fn new(admin: Admin, client: Client, statement: Statement, invoices: Vec<Invoice>) -> Self {
        Self {
            admin,
            client,
            statement,
            invoices,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.admin.is_valid()
            && self.client.is_valid()
            && self.statement.is_valid()
            && self.invoices.iter().all(Invoice::is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::valid_admin;
    use crate::client::valid_client;
    use crate::invoice::valid_invoice;
    use crate::statement::valid_statement;

    #[test]
    fn test_pdf_invoice_requires_every_constituent() {
        let bundle = PdfInvoice::new(valid_admin(), valid_client(), valid_invoice(7));
        assert!(bundle.is_valid());

        let broken = PdfInvoice::new(valid_admin(), Client::new(), valid_invoice(7));
        assert!(!broken.is_valid());
    }

    #[test]
    fn test_pdf_statement_requires_every_invoice() {
        let mut bundle = PdfStatement::new(
            valid_admin(),
            valid_client(),
            valid_statement(3),
            vec![valid_invoice(7), valid_invoice(8)],
        );
        assert!(bundle.is_valid());

        bundle.invoices.push(Invoice::new());
        assert!(!bundle.is_valid());
    }

    #[test]
    fn test_empty_invoice_list_is_still_valid() {
        let bundle = PdfStatement::new(
            valid_admin(),
            valid_client(),
            valid_statement(3),
            Vec::new(),
        );
        assert!(bundle.is_valid());
    }
}
