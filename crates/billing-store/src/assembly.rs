//! Composite load and save operations.
//!
//! These compose catalogue queries into the multi-record aggregates the
//! document layer consumes. Loads never fail hard: a record with no row
//! behind it comes back default and invalid, and the caller checks validity.
//! The invoice save runs as one immediate transaction covering the parent
//! statement, the line-item rewrite, and the invoice row; a failed step rolls
//! the whole save back and nothing later in the save executes.

use billing_database::Connection;
use billing_records::{
    Admin, Business, Client, Invoice, LineItem, PdfInvoice, PdfStatement, Statement,
};
use tracing::warn;

use crate::catalog;
use crate::serialize;

// ===== Loads =====

/// The owner's record. There is at most one admin row.
pub fn load_admin(db: &Connection) -> Admin {
    let rows = db.select_all(catalog::ADMIN_SELECT.sql);
    serialize::extract_admins(&rows)
        .into_iter()
        .next()
        .unwrap_or_default()
}

pub fn load_business(db: &Connection, business_name: &str) -> Business {
    let rows = db.select(
        catalog::BUSINESS_SELECT_BY_NAME.sql,
        &[business_name.into()],
    );
    serialize::extract_businesses(&rows)
        .into_iter()
        .next()
        .unwrap_or_default()
}

pub fn load_client(db: &Connection, business_name: &str) -> Client {
    let rows = db.select(
        catalog::CLIENT_SELECT_BY_BUSINESS.sql,
        &[business_name.into()],
    );
    serialize::extract_clients(&rows)
        .into_iter()
        .next()
        .unwrap_or_default()
}

pub fn load_clients(db: &Connection) -> Vec<Client> {
    let rows = db.select_all(catalog::CLIENT_SELECT_ALL.sql);
    serialize::extract_clients(&rows)
}

/// Description and material line items for one invoice, in entry order.
pub fn load_invoice_items(db: &Connection, invoice_id: i64) -> (Vec<LineItem>, Vec<LineItem>) {
    let description_rows = db.select(catalog::LABOR_SELECT_DESCRIPTION.sql, &[invoice_id.into()]);
    let material_rows = db.select(catalog::LABOR_SELECT_MATERIAL.sql, &[invoice_id.into()]);
    (
        serialize::extract_line_items(&description_rows),
        serialize::extract_line_items(&material_rows),
    )
}

fn attach_items(db: &Connection, invoice: &mut Invoice) {
    let (description_items, material_items) = load_invoice_items(db, invoice.invoice_id());
    invoice.set_description_items(description_items);
    invoice.set_material_items(material_items);
}

/// One invoice with its line items attached.
pub fn load_invoice(db: &Connection, invoice_id: i64) -> Invoice {
    let rows = db.select(catalog::INVOICE_SELECT_BY_ID.sql, &[invoice_id.into()]);
    let Some(mut invoice) = serialize::extract_invoices(&rows).into_iter().next() else {
        return Invoice::new();
    };
    attach_items(db, &mut invoice);
    invoice
}

/// Every invoice for a business, each with its line items attached.
pub fn load_invoices(db: &Connection, business_name: &str) -> Vec<Invoice> {
    let rows = db.select(
        catalog::INVOICE_SELECT_BY_BUSINESS.sql,
        &[business_name.into()],
    );
    let mut invoices = serialize::extract_invoices(&rows);
    for invoice in &mut invoices {
        attach_items(db, invoice);
    }
    invoices
}

/// Outstanding invoice headers for a business, without line items.
pub fn load_unpaid_invoices(db: &Connection, business_name: &str) -> Vec<Invoice> {
    let rows = db.select(
        catalog::INVOICE_SELECT_UNPAID_BY_BUSINESS.sql,
        &[business_name.into()],
    );
    serialize::extract_invoices(&rows)
}

pub fn load_statements(db: &Connection, business_name: &str) -> Vec<Statement> {
    let rows = db.select(
        catalog::STATEMENT_SELECT_BY_BUSINESS.sql,
        &[business_name.into()],
    );
    serialize::extract_statements(&rows)
}

/// Bundle one invoice with the owner and client records needed to render it.
pub fn load_pdf_invoice(db: &Connection, invoice_id: i64) -> PdfInvoice {
    let invoice = load_invoice(db, invoice_id);
    let client = load_client(db, invoice.business_name());
    let admin = load_admin(db);
    PdfInvoice::new(admin, client, invoice)
}

/// Bundle every invoice for a business for rendering.
pub fn load_pdf_invoices(db: &Connection, business_name: &str) -> Vec<PdfInvoice> {
    let admin = load_admin(db);
    let client = load_client(db, business_name);
    load_invoices(db, business_name)
        .into_iter()
        .map(|invoice| PdfInvoice::new(admin.clone(), client.clone(), invoice))
        .collect()
}

/// Bundle the statement covering a billing period with the business's
/// outstanding invoices.
pub fn load_pdf_statement(
    db: &Connection,
    business_name: &str,
    period_start: &str,
    period_end: &str,
) -> PdfStatement {
    let rows = db.select(
        catalog::STATEMENT_SELECT_BY_BUSINESS_AND_PERIOD.sql,
        &[business_name.into(), period_start.into(), period_end.into()],
    );
    let statement = serialize::extract_statements(&rows)
        .into_iter()
        .next()
        .unwrap_or_default();
    let admin = load_admin(db);
    let client = load_client(db, business_name);
    let invoices = load_unpaid_invoices(db, business_name);
    PdfStatement::new(admin, client, statement, invoices)
}

// ===== Saves =====

pub fn save_business(db: &Connection, business: &Business) -> bool {
    let params = serialize::package_business(business);
    if params.is_empty() {
        return false;
    }
    db.usert(catalog::BUSINESS_UPSERT.sql, &params)
}

pub fn save_admin(db: &Connection, admin: &Admin) -> bool {
    let params = serialize::package_admin(admin);
    if params.is_empty() {
        return false;
    }
    db.usert(catalog::ADMIN_UPSERT.sql, &params)
}

pub fn save_client(db: &Connection, client: &Client) -> bool {
    let params = serialize::package_client(client);
    if params.is_empty() {
        return false;
    }
    db.usert(catalog::CLIENT_UPSERT.sql, &params)
}

pub fn save_statement(db: &Connection, statement: &Statement) -> bool {
    let params = serialize::package_statement(statement);
    if params.is_empty() {
        return false;
    }
    db.usert(catalog::STATEMENT_UPSERT.sql, &params)
}

/// Save an invoice, its line items, and its parent statement atomically.
///
/// Inside the transaction the existing line items are deleted and rewritten
/// from the record, so the stored set always matches the record exactly.
pub fn save_invoice(db: &Connection, invoice: &Invoice, statement: &Statement) -> bool {
    let invoice_params = serialize::package_invoice(invoice);
    let statement_params = serialize::package_statement(statement);
    if invoice_params.is_empty() || statement_params.is_empty() {
        return false;
    }

    if !db.transaction(catalog::BEGIN_IMMEDIATE) {
        return false;
    }
    if !db.usert(catalog::STATEMENT_UPSERT.sql, &statement_params) {
        return rollback(db);
    }
    if !db.usert(
        catalog::LABOR_DELETE_BY_INVOICE.sql,
        &[invoice.invoice_id().into()],
    ) {
        return rollback(db);
    }
    if !db.usert(catalog::INVOICE_UPSERT.sql, &invoice_params) {
        return rollback(db);
    }
    for item in invoice
        .description_items()
        .iter()
        .chain(invoice.material_items().iter())
    {
        let item_params = serialize::package_line_item(item, invoice.invoice_id());
        if item_params.is_empty() || !db.usert(catalog::LABOR_UPSERT.sql, &item_params) {
            return rollback(db);
        }
    }
    db.transaction(catalog::COMMIT)
}

/// Line items go with the invoice through the schema's cascade.
pub fn delete_invoice(db: &Connection, invoice_id: i64) -> bool {
    db.usert(catalog::INVOICE_DELETE.sql, &[invoice_id.into()])
}

pub fn delete_statement(db: &Connection, statement_id: i64) -> bool {
    db.usert(catalog::STATEMENT_DELETE.sql, &[statement_id.into()])
}

fn rollback(db: &Connection) -> bool {
    warn!("rolling back invoice save");
    if !db.transaction(catalog::ROLLBACK) {
        warn!("rollback failed");
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn invoice_with_items(invoice_id: i64, per_side: i64) -> Invoice {
        let mut invoice = fixtures::sample_invoice(invoice_id);
        for row in 1..=per_side {
            invoice.add_description_item(fixtures::sample_line_item(row, 1));
            invoice.add_material_item(fixtures::sample_line_item(row, 0));
        }
        invoice
    }

    #[test]
    fn saved_invoice_round_trips() {
        let db = fixtures::store();
        let invoice = invoice_with_items(7, 3);

        assert!(save_invoice(&db, &invoice, &fixtures::sample_statement(1)));
        assert_eq!(load_invoice(&db, 7), invoice);
    }

    #[test]
    fn large_invoice_saves_atomically() {
        let db = fixtures::store();
        let invoice = invoice_with_items(8, 50);

        assert!(save_invoice(&db, &invoice, &fixtures::sample_statement(2)));

        let loaded = load_invoice(&db, 8);
        assert_eq!(loaded.description_items().len(), 50);
        assert_eq!(loaded.material_items().len(), 50);
        assert_eq!(loaded, invoice);
    }

    #[test]
    fn aborted_save_preserves_prior_state() {
        let db = fixtures::store();
        let statement = fixtures::sample_statement(1);
        let original = invoice_with_items(7, 3);
        assert!(save_invoice(&db, &original, &statement));

        // A rewrite with a bad line item partway through the batch.
        let mut update = invoice_with_items(7, 50);
        update.set_grand_total(99_999.99);
        let mut items = update.description_items().to_vec();
        items[29] = LineItem::new();
        update.set_description_items(items);

        assert!(!save_invoice(&db, &update, &statement));
        assert_eq!(load_invoice(&db, 7), original);
    }

    #[test]
    fn resave_replaces_line_items() {
        let db = fixtures::store();
        let statement = fixtures::sample_statement(1);
        assert!(save_invoice(&db, &invoice_with_items(7, 5), &statement));

        let replacement = invoice_with_items(7, 2);
        assert!(save_invoice(&db, &replacement, &statement));
        assert_eq!(load_invoice(&db, 7), replacement);
    }

    #[test]
    fn saved_invoice_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("billing.db");
        let invoice = invoice_with_items(7, 2);

        let db = Connection::open(&path, "store test key").unwrap();
        assert!(save_invoice(&db, &invoice, &fixtures::sample_statement(1)));
        db.close();

        let db = Connection::open(&path, "store test key").unwrap();
        assert_eq!(load_invoice(&db, 7), invoice);
    }

    #[test]
    fn pdf_invoices_bundle_every_record() {
        let db = fixtures::store();
        assert!(save_admin(&db, &fixtures::sample_admin()));
        assert!(save_client(&db, &fixtures::sample_client()));
        let statement = fixtures::sample_statement(1);
        assert!(save_invoice(&db, &invoice_with_items(7, 2), &statement));
        assert!(save_invoice(&db, &invoice_with_items(8, 1), &statement));

        let bundles = load_pdf_invoices(&db, "Harbour Engineering");
        assert_eq!(bundles.len(), 2);
        assert!(bundles.iter().all(PdfInvoice::is_valid));
        assert_eq!(bundles[0].invoice.invoice_id(), 7);
        assert_eq!(bundles[0].invoice.description_items().len(), 2);
        assert_eq!(bundles[1].invoice.invoice_id(), 8);
    }

    #[test]
    fn pdf_invoice_bundles_one_invoice() {
        let db = fixtures::store();
        assert!(save_admin(&db, &fixtures::sample_admin()));
        assert!(save_client(&db, &fixtures::sample_client()));
        assert!(save_invoice(
            &db,
            &invoice_with_items(7, 2),
            &fixtures::sample_statement(1)
        ));

        let bundle = load_pdf_invoice(&db, 7);
        assert!(bundle.is_valid());
        assert_eq!(bundle.admin.business_name(), "TME");
        assert_eq!(bundle.client.business_name(), "Harbour Engineering");
    }

    #[test]
    fn pdf_statement_collects_unpaid_invoices() {
        let db = fixtures::store();
        assert!(save_admin(&db, &fixtures::sample_admin()));
        assert!(save_client(&db, &fixtures::sample_client()));
        let statement = fixtures::sample_statement(3);

        let mut paid = fixtures::sample_invoice(7);
        paid.set_paid(1);
        assert!(save_invoice(&db, &paid, &statement));
        assert!(save_invoice(&db, &fixtures::sample_invoice(8), &statement));

        let bundle = load_pdf_statement(&db, "Harbour Engineering", "2024-03-01", "2024-03-31");
        assert!(bundle.is_valid());
        assert_eq!(bundle.statement, statement);
        assert_eq!(bundle.invoices.len(), 1);
        assert_eq!(bundle.invoices[0].invoice_id(), 8);
    }

    #[test]
    fn missing_rows_load_invalid_records() {
        let db = fixtures::store();
        assert!(!load_admin(&db).is_valid());
        assert!(!load_client(&db, "Harbour Engineering").is_valid());
        assert!(!load_invoice(&db, 7).is_valid());
        assert!(load_pdf_invoices(&db, "Harbour Engineering").is_empty());
        let bundle = load_pdf_statement(&db, "Harbour Engineering", "2024-03-01", "2024-03-31");
        assert!(!bundle.is_valid());
    }

    #[test]
    fn deleting_invoice_removes_line_items() {
        let db = fixtures::store();
        assert!(save_invoice(
            &db,
            &invoice_with_items(7, 3),
            &fixtures::sample_statement(1)
        ));

        assert!(delete_invoice(&db, 7));
        assert!(!load_invoice(&db, 7).is_valid());
        let (description_items, material_items) = load_invoice_items(&db, 7);
        assert!(description_items.is_empty());
        assert!(material_items.is_empty());
    }

    #[test]
    fn statement_lifecycle() {
        let db = fixtures::store();
        let statement = fixtures::sample_statement(3);

        assert!(save_statement(&db, &statement));
        assert_eq!(
            load_statements(&db, "Harbour Engineering"),
            vec![statement]
        );

        assert!(delete_statement(&db, 3));
        assert!(load_statements(&db, "Harbour Engineering").is_empty());
    }

    #[test]
    fn business_round_trips() {
        let db = fixtures::store();
        let business = fixtures::sample_business();

        assert!(save_business(&db, &business));
        assert_eq!(load_business(&db, "TME"), business);
    }

    #[test]
    fn clients_list_in_name_order() {
        let db = fixtures::store();
        let mut second = fixtures::sample_client();
        second.set_business_name("Zinc Works");
        assert!(save_client(&db, &fixtures::sample_client()));
        assert!(save_client(&db, &second));

        let clients = load_clients(&db);
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].business_name(), "Harbour Engineering");
        assert_eq!(clients[1].business_name(), "Zinc Works");
    }

    #[test]
    fn incomplete_record_does_not_save() {
        let db = fixtures::store();
        assert!(!save_admin(&db, &Admin::new()));
        assert!(!save_invoice(
            &db,
            &Invoice::new(),
            &fixtures::sample_statement(1)
        ));
        assert!(!load_admin(&db).is_valid());
    }
}
