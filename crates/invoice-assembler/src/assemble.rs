//! Builds the XML payload the invoice stylesheet expects

use invoice_markup::{list_to_element, record_to_element, scalar_to_element, XmlScalar};

use crate::page::InvoicePage;

/// Serialize invoice pages into the `<Invoices>` payload.
///
/// Emits one `<Invoice>` per page, in input order, with children in the
/// fixed order the stylesheet relies on: `createDate`, `companyInfo`,
/// `clientInfo`, `headerInfo`, `invoiceInfo`, `invoiceItems`. Uses the raw
/// (unescaped) serializer mode.
pub fn assemble_invoice_xml(pages: &[InvoicePage]) -> String {
    let mut xml = String::from("<Invoices>");
    for page in pages {
        xml.push_str("<Invoice>");
        xml.push_str(&scalar_to_element(
            "createDate",
            &XmlScalar::from(page.create_date.as_str()),
        ));
        xml.push_str(&record_to_element("companyInfo", &page.company_info));
        xml.push_str(&record_to_element("clientInfo", &page.client_info));
        xml.push_str(&record_to_element("headerInfo", &page.header_info));
        xml.push_str(&record_to_element("invoiceInfo", &page.invoice_info));
        xml.push_str(&list_to_element(
            "invoiceItems",
            "invoiceItem",
            &page.invoice_items,
        ));
        xml.push_str("</Invoice>");
    }
    xml.push_str("</Invoices>");
    xml
}
