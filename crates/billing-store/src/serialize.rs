//! Row extraction and parameter packaging.
//!
//! Extraction walks a rows collection against a catalogue column order and
//! feeds each value to the matching record setter. A column whose stored
//! variant does not fit the field it maps to is skipped and logged at debug
//! level; the record is then missing that field and reports itself invalid,
//! the same signal an unpopulated setter produces. Packaging is the reverse
//! direction: a valid record becomes the parameter list its upsert expects,
//! and an incomplete record packages to an empty list.

use billing_database::{ColumnValue, ParamValue, Rows};
use billing_records::{Admin, Business, Client, Field, Invoice, LineItem, Statement};
use tracing::debug;

use crate::catalog;

fn extract<T: Default>(
    rows: &Rows,
    columns: &[Field],
    apply: fn(&mut T, Field, &ColumnValue),
    label: &str,
) -> Vec<T> {
    if rows.is_empty() {
        debug!(entity = label, "no rows to extract");
        return Vec::new();
    }
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let mut record = T::default();
        for (field, value) in columns.iter().zip(row) {
            apply(&mut record, *field, value);
        }
        records.push(record);
    }
    records
}

fn skipped(field: Field, value: &ColumnValue) {
    debug!(?field, stored = value.type_name(), "column type mismatch, field skipped");
}

// ===== Business details =====

fn apply_business(business: &mut Business, field: Field, value: &ColumnValue) {
    match (field, value) {
        (Field::BusinessName, ColumnValue::Text(v)) => {
            business.set_business_name(v);
        }
        (Field::Address, ColumnValue::Text(v)) => {
            business.set_address(v);
        }
        (Field::AreaCode, ColumnValue::Text(v)) => {
            business.set_area_code(v);
        }
        (Field::Town, ColumnValue::Text(v)) => {
            business.set_town(v);
        }
        (Field::Cellphone, ColumnValue::Text(v)) => {
            business.set_cellphone(v);
        }
        (Field::Email, ColumnValue::Text(v)) => {
            business.set_email(v);
        }
        _ => skipped(field, value),
    }
}

pub fn extract_businesses(rows: &Rows) -> Vec<Business> {
    extract(rows, catalog::BUSINESS_COLUMNS, apply_business, "business")
}

pub fn package_business(business: &Business) -> Vec<ParamValue> {
    if !business.is_valid() {
        debug!("business record incomplete, nothing to package");
        return Vec::new();
    }
    vec![
        business.business_name().into(),
        business.address().into(),
        business.area_code().into(),
        business.town().into(),
        business.cellphone().into(),
        business.email().into(),
    ]
}

// ===== Admin =====

fn apply_admin(admin: &mut Admin, field: Field, value: &ColumnValue) {
    match (field, value) {
        (Field::BusinessName, ColumnValue::Text(v)) => {
            admin.set_business_name(v);
        }
        (Field::Address, ColumnValue::Text(v)) => {
            admin.set_address(v);
        }
        (Field::AreaCode, ColumnValue::Text(v)) => {
            admin.set_area_code(v);
        }
        (Field::Town, ColumnValue::Text(v)) => {
            admin.set_town(v);
        }
        (Field::Cellphone, ColumnValue::Text(v)) => {
            admin.set_cellphone(v);
        }
        (Field::Email, ColumnValue::Text(v)) => {
            admin.set_email(v);
        }
        (Field::BankName, ColumnValue::Text(v)) => {
            admin.set_bank_name(v);
        }
        (Field::BranchCode, ColumnValue::Text(v)) => {
            admin.set_branch_code(v);
        }
        (Field::AccountNumber, ColumnValue::Text(v)) => {
            admin.set_account_number(v);
        }
        (Field::ClientMessage, ColumnValue::Text(v)) => {
            admin.set_client_message(v);
        }
        (Field::Password, ColumnValue::Text(v)) => {
            admin.set_password(v);
        }
        _ => skipped(field, value),
    }
}

pub fn extract_admins(rows: &Rows) -> Vec<Admin> {
    extract(rows, catalog::ADMIN_COLUMNS, apply_admin, "admin")
}

pub fn package_admin(admin: &Admin) -> Vec<ParamValue> {
    if !admin.is_valid() {
        debug!("admin record incomplete, nothing to package");
        return Vec::new();
    }
    vec![
        admin.business_name().into(),
        admin.address().into(),
        admin.area_code().into(),
        admin.town().into(),
        admin.cellphone().into(),
        admin.email().into(),
        admin.bank_name().into(),
        admin.branch_code().into(),
        admin.account_number().into(),
        admin.client_message().into(),
        admin.password().into(),
    ]
}

// ===== Client =====

fn apply_client(client: &mut Client, field: Field, value: &ColumnValue) {
    match (field, value) {
        (Field::BusinessName, ColumnValue::Text(v)) => {
            client.set_business_name(v);
        }
        (Field::Address, ColumnValue::Text(v)) => {
            client.set_address(v);
        }
        (Field::AreaCode, ColumnValue::Text(v)) => {
            client.set_area_code(v);
        }
        (Field::Town, ColumnValue::Text(v)) => {
            client.set_town(v);
        }
        (Field::Cellphone, ColumnValue::Text(v)) => {
            client.set_cellphone(v);
        }
        (Field::Email, ColumnValue::Text(v)) => {
            client.set_email(v);
        }
        (Field::VatNumber, ColumnValue::Text(v)) => {
            client.set_vat_number(v);
        }
        (Field::StatementSchedule, ColumnValue::Text(v)) => {
            client.set_statement_schedule(v);
        }
        _ => skipped(field, value),
    }
}

pub fn extract_clients(rows: &Rows) -> Vec<Client> {
    extract(rows, catalog::CLIENT_COLUMNS, apply_client, "client")
}

pub fn package_client(client: &Client) -> Vec<ParamValue> {
    if !client.is_valid() {
        debug!("client record incomplete, nothing to package");
        return Vec::new();
    }
    vec![
        client.business_name().into(),
        client.address().into(),
        client.area_code().into(),
        client.town().into(),
        client.cellphone().into(),
        client.email().into(),
        client.vat_number().into(),
        client.statement_schedule().into(),
    ]
}

// ===== Invoice =====

fn apply_invoice(invoice: &mut Invoice, field: Field, value: &ColumnValue) {
    match (field, value) {
        (Field::InvoiceId, ColumnValue::Integer(v)) => {
            invoice.set_invoice_id(*v);
        }
        (Field::BusinessName, ColumnValue::Text(v)) => {
            invoice.set_business_name(v);
        }
        (Field::JobCardNumber, ColumnValue::Text(v)) => {
            invoice.set_job_card_number(v);
        }
        (Field::OrderNumber, ColumnValue::Text(v)) => {
            invoice.set_order_number(v);
        }
        (Field::InvoiceDate, ColumnValue::Text(v)) => {
            invoice.set_invoice_date(v);
        }
        (Field::Paid, ColumnValue::Integer(v)) => {
            invoice.set_paid(*v);
        }
        (Field::DescriptionTotal, ColumnValue::Real(v)) => {
            invoice.set_description_total(*v);
        }
        (Field::MaterialTotal, ColumnValue::Real(v)) => {
            invoice.set_material_total(*v);
        }
        (Field::GrandTotal, ColumnValue::Real(v)) => {
            invoice.set_grand_total(*v);
        }
        _ => skipped(field, value),
    }
}

/// Invoice headers only; line items are attached by the load layer.
pub fn extract_invoices(rows: &Rows) -> Vec<Invoice> {
    extract(rows, catalog::INVOICE_COLUMNS, apply_invoice, "invoice")
}

pub fn package_invoice(invoice: &Invoice) -> Vec<ParamValue> {
    if !invoice.is_valid() {
        debug!("invoice record incomplete, nothing to package");
        return Vec::new();
    }
    vec![
        invoice.invoice_id().into(),
        invoice.business_name().into(),
        invoice.job_card_number().into(),
        invoice.order_number().into(),
        invoice.invoice_date().into(),
        invoice.paid().into(),
        invoice.description_total().into(),
        invoice.material_total().into(),
        invoice.grand_total().into(),
    ]
}

// ===== Labor line items =====

fn apply_line_item(item: &mut LineItem, field: Field, value: &ColumnValue) {
    match (field, value) {
        (Field::Quantity, ColumnValue::Integer(v)) => {
            item.set_quantity(*v);
        }
        (Field::Description, ColumnValue::Text(v)) => {
            item.set_description(v);
        }
        (Field::Amount, ColumnValue::Real(v)) => {
            item.set_amount(*v);
        }
        (Field::RowNumber, ColumnValue::Integer(v)) => {
            item.set_row_number(*v);
        }
        (Field::IsDescription, ColumnValue::Integer(v)) => {
            item.set_is_description(*v);
        }
        _ => skipped(field, value),
    }
}

pub fn extract_line_items(rows: &Rows) -> Vec<LineItem> {
    extract(rows, catalog::LABOR_COLUMNS, apply_line_item, "line item")
}

/// The labor upsert keys on the owning invoice, so the id rides along.
pub fn package_line_item(item: &LineItem, invoice_id: i64) -> Vec<ParamValue> {
    if !item.is_valid() {
        debug!(invoice_id, "line item incomplete, nothing to package");
        return Vec::new();
    }
    vec![
        invoice_id.into(),
        item.row_number().into(),
        item.quantity().into(),
        item.description().into(),
        item.amount().into(),
        item.is_description().into(),
    ]
}

// ===== Statements =====

fn apply_statement(statement: &mut Statement, field: Field, value: &ColumnValue) {
    match (field, value) {
        (Field::StatementId, ColumnValue::Integer(v)) => {
            statement.set_statement_id(*v);
        }
        (Field::BusinessName, ColumnValue::Text(v)) => {
            statement.set_business_name(v);
        }
        (Field::StatementDate, ColumnValue::Text(v)) => {
            statement.set_statement_date(v);
        }
        (Field::Paid, ColumnValue::Integer(v)) => {
            statement.set_paid(*v);
        }
        (Field::PeriodStart, ColumnValue::Text(v)) => {
            statement.set_period_start(v);
        }
        (Field::PeriodEnd, ColumnValue::Text(v)) => {
            statement.set_period_end(v);
        }
        _ => skipped(field, value),
    }
}

pub fn extract_statements(rows: &Rows) -> Vec<Statement> {
    extract(rows, catalog::STATEMENT_COLUMNS, apply_statement, "statement")
}

pub fn package_statement(statement: &Statement) -> Vec<ParamValue> {
    if !statement.is_valid() {
        debug!("statement record incomplete, nothing to package");
        return Vec::new();
    }
    vec![
        statement.statement_id().into(),
        statement.business_name().into(),
        statement.statement_date().into(),
        statement.paid().into(),
        statement.period_start().into(),
        statement.period_end().into(),
    ]
}
