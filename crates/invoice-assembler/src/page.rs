//! Invoice page data model

use invoice_markup::{XmlItem, XmlItemList};
use serde::{Deserialize, Serialize};

/// Data for one printed invoice page.
///
/// Serde names follow the JSON payload shape (camelCase), so a page list
/// can be loaded straight from a data file with `serde_json`. Record field
/// order is preserved end to end: it becomes child-element order in the
/// assembled XML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePage {
    pub create_date: String,
    pub company_info: XmlItem,
    pub client_info: XmlItem,
    pub header_info: XmlItem,
    pub invoice_info: XmlItem,
    pub invoice_items: XmlItemList,
}
