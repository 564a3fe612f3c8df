//! The query catalogue.
//!
//! Every SQL operation the store performs lives here, keyed by a logical
//! operation name and carrying the two pieces of metadata the rest of the
//! crate needs: how many placeholders the text expects, and the column order
//! a SELECT produces. Serializers read the column order from the same entry
//! the executor reads the SQL from, so the two cannot drift apart.

use std::collections::HashMap;
use std::sync::LazyLock;

use billing_records::Field;

/// One catalogued operation.
#[derive(Debug)]
pub struct QuerySpec {
    pub name: &'static str,
    pub sql: &'static str,
    /// Number of `?N` placeholders in the SQL text.
    pub placeholders: usize,
    /// Result column order for SELECTs; empty for writes.
    pub columns: &'static [Field],
}

// ===== Transaction control =====

pub const BEGIN_IMMEDIATE: &str = "BEGIN IMMEDIATE";
pub const COMMIT: &str = "COMMIT";
pub const ROLLBACK: &str = "ROLLBACK";

// ===== Column orders =====

pub const BUSINESS_COLUMNS: &[Field] = &[
    Field::BusinessName,
    Field::Address,
    Field::AreaCode,
    Field::Town,
    Field::Cellphone,
    Field::Email,
];

pub const ADMIN_COLUMNS: &[Field] = &[
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
];

pub const CLIENT_COLUMNS: &[Field] = &[
    Field::BusinessName,
    Field::Address,
    Field::AreaCode,
    Field::Town,
    Field::Cellphone,
    Field::Email,
    Field::VatNumber,
    Field::StatementSchedule,
];

pub const INVOICE_COLUMNS: &[Field] = &[
    Field::InvoiceId,
    Field::BusinessName,
    Field::JobCardNumber,
    Field::OrderNumber,
    Field::InvoiceDate,
    Field::Paid,
    Field::DescriptionTotal,
    Field::MaterialTotal,
    Field::GrandTotal,
];

pub const LABOR_COLUMNS: &[Field] = &[
    Field::Quantity,
    Field::Description,
    Field::Amount,
    Field::RowNumber,
    Field::IsDescription,
];

pub const STATEMENT_COLUMNS: &[Field] = &[
    Field::StatementId,
    Field::BusinessName,
    Field::StatementDate,
    Field::Paid,
    Field::PeriodStart,
    Field::PeriodEnd,
];

// ===== Business details =====

pub static BUSINESS_UPSERT: QuerySpec = QuerySpec {
    name: "business.upsert",
    sql: "INSERT INTO business_details (business_name, address, area_code, town, cellphone, email) \
          VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
          ON CONFLICT(business_name) DO UPDATE SET address = excluded.address, \
          area_code = excluded.area_code, town = excluded.town, \
          cellphone = excluded.cellphone, email = excluded.email",
    placeholders: 6,
    columns: &[],
};

pub static BUSINESS_SELECT_BY_NAME: QuerySpec = QuerySpec {
    name: "business.select_by_name",
    sql: "SELECT business_name, address, area_code, town, cellphone, email \
          FROM business_details WHERE business_name = ?1",
    placeholders: 1,
    columns: BUSINESS_COLUMNS,
};

// ===== Admin =====

pub static ADMIN_UPSERT: QuerySpec = QuerySpec {
    name: "admin.upsert",
    sql: "INSERT INTO admin (business_name, address, area_code, town, cellphone, email, \
          bank_name, branch_code, account_number, client_message, password) \
          VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) \
          ON CONFLICT(business_name) DO UPDATE SET address = excluded.address, \
          area_code = excluded.area_code, town = excluded.town, \
          cellphone = excluded.cellphone, email = excluded.email, \
          bank_name = excluded.bank_name, branch_code = excluded.branch_code, \
          account_number = excluded.account_number, \
          client_message = excluded.client_message, password = excluded.password",
    placeholders: 11,
    columns: &[],
};

pub static ADMIN_SELECT: QuerySpec = QuerySpec {
    name: "admin.select",
    sql: "SELECT business_name, address, area_code, town, cellphone, email, \
          bank_name, branch_code, account_number, client_message, password \
          FROM admin LIMIT 1",
    placeholders: 0,
    columns: ADMIN_COLUMNS,
};

// ===== Client =====

pub static CLIENT_UPSERT: QuerySpec = QuerySpec {
    name: "client.upsert",
    sql: "INSERT INTO client (business_name, address, area_code, town, cellphone, email, \
          vat_number, statement_schedule) \
          VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
          ON CONFLICT(business_name) DO UPDATE SET address = excluded.address, \
          area_code = excluded.area_code, town = excluded.town, \
          cellphone = excluded.cellphone, email = excluded.email, \
          vat_number = excluded.vat_number, \
          statement_schedule = excluded.statement_schedule",
    placeholders: 8,
    columns: &[],
};

pub static CLIENT_SELECT_BY_BUSINESS: QuerySpec = QuerySpec {
    name: "client.select_by_business",
    sql: "SELECT business_name, address, area_code, town, cellphone, email, \
          vat_number, statement_schedule \
          FROM client WHERE business_name = ?1",
    placeholders: 1,
    columns: CLIENT_COLUMNS,
};

pub static CLIENT_SELECT_ALL: QuerySpec = QuerySpec {
    name: "client.select_all",
    sql: "SELECT business_name, address, area_code, town, cellphone, email, \
          vat_number, statement_schedule \
          FROM client ORDER BY business_name",
    placeholders: 0,
    columns: CLIENT_COLUMNS,
};

// ===== Invoice =====

pub static INVOICE_UPSERT: QuerySpec = QuerySpec {
    name: "invoice.upsert",
    sql: "INSERT INTO invoice (invoice_id, business_name, job_card_number, order_number, \
          invoice_date, paid, description_total, material_total, grand_total) \
          VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
          ON CONFLICT(invoice_id) DO UPDATE SET business_name = excluded.business_name, \
          job_card_number = excluded.job_card_number, order_number = excluded.order_number, \
          invoice_date = excluded.invoice_date, paid = excluded.paid, \
          description_total = excluded.description_total, \
          material_total = excluded.material_total, grand_total = excluded.grand_total",
    placeholders: 9,
    columns: &[],
};

pub static INVOICE_SELECT_BY_BUSINESS: QuerySpec = QuerySpec {
    name: "invoice.select_by_business",
    sql: "SELECT invoice_id, business_name, job_card_number, order_number, \
          invoice_date, paid, description_total, material_total, grand_total \
          FROM invoice WHERE business_name = ?1 ORDER BY invoice_id",
    placeholders: 1,
    columns: INVOICE_COLUMNS,
};

pub static INVOICE_SELECT_BY_ID: QuerySpec = QuerySpec {
    name: "invoice.select_by_id",
    sql: "SELECT invoice_id, business_name, job_card_number, order_number, \
          invoice_date, paid, description_total, material_total, grand_total \
          FROM invoice WHERE invoice_id = ?1",
    placeholders: 1,
    columns: INVOICE_COLUMNS,
};

pub static INVOICE_SELECT_UNPAID_BY_BUSINESS: QuerySpec = QuerySpec {
    name: "invoice.select_unpaid_by_business",
    sql: "SELECT invoice_id, business_name, job_card_number, order_number, \
          invoice_date, paid, description_total, material_total, grand_total \
          FROM invoice WHERE business_name = ?1 AND paid = 0 ORDER BY invoice_id",
    placeholders: 1,
    columns: INVOICE_COLUMNS,
};

pub static INVOICE_DELETE: QuerySpec = QuerySpec {
    name: "invoice.delete",
    sql: "DELETE FROM invoice WHERE invoice_id = ?1",
    placeholders: 1,
    columns: &[],
};

// ===== Labor =====

pub static LABOR_UPSERT: QuerySpec = QuerySpec {
    name: "labor.upsert",
    sql: "INSERT INTO labor (invoice_id, row_number, quantity, description, amount, is_description) \
          VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
          ON CONFLICT(invoice_id, is_description, row_number) DO UPDATE SET \
          quantity = excluded.quantity, description = excluded.description, \
          amount = excluded.amount",
    placeholders: 6,
    columns: &[],
};

pub static LABOR_SELECT_DESCRIPTION: QuerySpec = QuerySpec {
    name: "labor.select_description",
    sql: "SELECT quantity, description, amount, row_number, is_description \
          FROM labor WHERE invoice_id = ?1 AND is_description = 1 ORDER BY row_number",
    placeholders: 1,
    columns: LABOR_COLUMNS,
};

pub static LABOR_SELECT_MATERIAL: QuerySpec = QuerySpec {
    name: "labor.select_material",
    sql: "SELECT quantity, description, amount, row_number, is_description \
          FROM labor WHERE invoice_id = ?1 AND is_description = 0 ORDER BY row_number",
    placeholders: 1,
    columns: LABOR_COLUMNS,
};

pub static LABOR_DELETE_BY_INVOICE: QuerySpec = QuerySpec {
    name: "labor.delete_by_invoice",
    sql: "DELETE FROM labor WHERE invoice_id = ?1",
    placeholders: 1,
    columns: &[],
};

// ===== Statement =====

pub static STATEMENT_UPSERT: QuerySpec = QuerySpec {
    name: "statement.upsert",
    sql: "INSERT INTO statement (statement_id, business_name, statement_date, paid, \
          period_start, period_end) \
          VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
          ON CONFLICT(statement_id) DO UPDATE SET business_name = excluded.business_name, \
          statement_date = excluded.statement_date, paid = excluded.paid, \
          period_start = excluded.period_start, period_end = excluded.period_end",
    placeholders: 6,
    columns: &[],
};

pub static STATEMENT_SELECT_BY_BUSINESS_AND_PERIOD: QuerySpec = QuerySpec {
    name: "statement.select_by_business_and_period",
    sql: "SELECT statement_id, business_name, statement_date, paid, period_start, period_end \
          FROM statement WHERE business_name = ?1 AND period_start = ?2 AND period_end = ?3",
    placeholders: 3,
    columns: STATEMENT_COLUMNS,
};

pub static STATEMENT_SELECT_BY_BUSINESS: QuerySpec = QuerySpec {
    name: "statement.select_by_business",
    sql: "SELECT statement_id, business_name, statement_date, paid, period_start, period_end \
          FROM statement WHERE business_name = ?1 ORDER BY statement_date",
    placeholders: 1,
    columns: STATEMENT_COLUMNS,
};

pub static STATEMENT_DELETE: QuerySpec = QuerySpec {
    name: "statement.delete",
    sql: "DELETE FROM statement WHERE statement_id = ?1",
    placeholders: 1,
    columns: &[],
};

static SPECS: [&QuerySpec; 20] = [
    &BUSINESS_UPSERT,
    &BUSINESS_SELECT_BY_NAME,
    &ADMIN_UPSERT,
    &ADMIN_SELECT,
    &CLIENT_UPSERT,
    &CLIENT_SELECT_BY_BUSINESS,
    &CLIENT_SELECT_ALL,
    &INVOICE_UPSERT,
    &INVOICE_SELECT_BY_BUSINESS,
    &INVOICE_SELECT_BY_ID,
    &INVOICE_SELECT_UNPAID_BY_BUSINESS,
    &INVOICE_DELETE,
    &LABOR_UPSERT,
    &LABOR_SELECT_DESCRIPTION,
    &LABOR_SELECT_MATERIAL,
    &LABOR_DELETE_BY_INVOICE,
    &STATEMENT_UPSERT,
    &STATEMENT_SELECT_BY_BUSINESS_AND_PERIOD,
    &STATEMENT_SELECT_BY_BUSINESS,
    &STATEMENT_DELETE,
];

static CATALOG: LazyLock<HashMap<&'static str, &'static QuerySpec>> =
    LazyLock::new(|| SPECS.iter().map(|spec| (spec.name, *spec)).collect());

/// Look up an operation by its catalogue name.
pub fn get(name: &str) -> Option<&'static QuerySpec> {
    CATALOG.get(name).copied()
}

/// Iterate over every catalogued operation.
pub fn all() -> impl Iterator<Item = &'static QuerySpec> {
    SPECS.iter().copied()
}
