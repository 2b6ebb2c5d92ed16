//! Tests for invoice XML assembly.

use invoice_assembler::{assemble_invoice_xml, InvoicePage};
use invoice_markup::XmlItem;

fn small_page(n: i64) -> InvoicePage {
    InvoicePage {
        create_date: format!("2024-01-{:02}", n),
        company_info: XmlItem::new().field("companyName", "ACME"),
        client_info: XmlItem::new().field("name", format!("client-{}", n)),
        header_info: XmlItem::new().field("logo", "logo.png"),
        invoice_info: XmlItem::new().field("invoiceNumber", n),
        invoice_items: vec![XmlItem::new().field("id", n)],
    }
}

#[test]
fn single_page_structural_contract() {
    let xml = assemble_invoice_xml(&[small_page(1)]);
    assert_eq!(
        xml,
        "<Invoices><Invoice>\
         <createDate>2024-01-01</createDate>\
         <companyInfo><companyName>ACME</companyName></companyInfo>\
         <clientInfo><name>client-1</name></clientInfo>\
         <headerInfo><logo>logo.png</logo></headerInfo>\
         <invoiceInfo><invoiceNumber>1</invoiceNumber></invoiceInfo>\
         <invoiceItems><invoiceItem><id>1</id></invoiceItem></invoiceItems>\
         </Invoice></Invoices>"
    );
}

#[test]
fn two_pages_one_root_two_invoices() {
    let xml = assemble_invoice_xml(&[small_page(1), small_page(2)]);
    assert_eq!(xml.matches("<Invoices>").count(), 1, "exactly one root");
    assert_eq!(xml.matches("<Invoice>").count(), 2, "one Invoice per page");
    assert!(xml.starts_with("<Invoices><Invoice>"));
    assert!(xml.ends_with("</Invoice></Invoices>"));
}

#[test]
fn page_order_equals_input_order() {
    let xml = assemble_invoice_xml(&[small_page(2), small_page(1), small_page(3)]);
    let p2 = xml.find("client-2").unwrap();
    let p1 = xml.find("client-1").unwrap();
    let p3 = xml.find("client-3").unwrap();
    assert!(p2 < p1 && p1 < p3, "pages are never reordered");
}

#[test]
fn line_items_keep_input_order() {
    let mut page = small_page(1);
    page.invoice_items = (1..=5)
        .map(|id| {
            XmlItem::new()
                .field("id", id)
                .field("name", format!("Widget {}", id))
                .field("quantity", 2)
                .field("price", 9.75)
        })
        .collect();
    let xml = assemble_invoice_xml(&[page]);

    let mut last = 0;
    for id in 1..=5 {
        let pos = xml.find(&format!("<id>{}</id>", id)).expect("item present");
        assert!(pos > last, "item {} out of order", id);
        last = pos;
    }
}

#[test]
fn empty_page_list_produces_bare_root() {
    assert_eq!(assemble_invoice_xml(&[]), "<Invoices></Invoices>");
}

#[test]
fn reserved_characters_pass_through_unescaped() {
    let mut page = small_page(1);
    page.company_info = XmlItem::new().field("companyName", "Smith & Sons");
    let xml = assemble_invoice_xml(&[page]);
    assert!(
        xml.contains("<companyName>Smith & Sons</companyName>"),
        "raw serializer mode leaves the ampersand literal"
    );
}

#[test]
fn pages_deserialize_from_json_in_order() {
    let json = r#"[{
        "createDate": "2024-02-01",
        "companyInfo": {"companyName": "ACME", "companyCity": "Springfield"},
        "clientInfo": {"name": "Alice", "email": "alice@example.com"},
        "headerInfo": {"logo": "logo.png", "taxId": "TX-1"},
        "invoiceInfo": {"invoiceNumber": "INV-7", "total": "$120.00"},
        "invoiceItems": [
            {"id": 1, "name": "Widget", "total": "$60.00"},
            {"id": 2, "name": "Gadget", "total": "$60.00"}
        ]
    }]"#;
    let pages: Vec<InvoicePage> = serde_json::from_str(json).expect("valid page JSON");
    assert_eq!(pages.len(), 1);

    let xml = assemble_invoice_xml(&pages);
    assert!(xml.contains(
        "<companyInfo><companyName>ACME</companyName><companyCity>Springfield</companyCity></companyInfo>"
    ));
    assert!(xml.find("<id>1</id>").unwrap() < xml.find("<id>2</id>").unwrap());
}
