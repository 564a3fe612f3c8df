//! Shared builders for store tests.

use billing_database::Connection;
use billing_records::{Admin, Business, Client, Invoice, LineItem, Statement};

pub(crate) fn store() -> Connection {
    Connection::open_in_memory().unwrap()
}

pub(crate) fn sample_business() -> Business {
    let mut business = Business::new();
    business.set_business_name("TME");
    business.set_address("7 Mill Road");
    business.set_area_code("4021");
    business.set_town("Durban");
    business.set_cellphone("0823456789");
    business.set_email("accounts@tme.co.za");
    business
}

pub(crate) fn sample_admin() -> Admin {
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

pub(crate) fn sample_client() -> Client {
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

pub(crate) fn sample_invoice(invoice_id: i64) -> Invoice {
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

pub(crate) fn sample_line_item(row_number: i64, is_description: i64) -> LineItem {
    let mut item = LineItem::new();
    item.set_quantity(12);
    item.set_description(&format!("Line {row_number}"));
    item.set_amount(5558.99);
    item.set_row_number(row_number);
    item.set_is_description(is_description);
    item
}

pub(crate) fn sample_statement(statement_id: i64) -> Statement {
    let mut statement = Statement::new();
    statement.set_statement_id(statement_id);
    statement.set_business_name("Harbour Engineering");
    statement.set_statement_date("2024-03-31");
    statement.set_paid(0);
    statement.set_period_start("2024-03-01");
    statement.set_period_end("2024-03-31");
    statement
}
