//! invoice-assembler: invoice XML assembly and HTML generation
//!
//! Orchestrates the pipeline end to end: page records are serialized into
//! the `<Invoices>` XML payload with `invoice-markup`, the stylesheet text
//! is retrieved through a [`StylesheetFetcher`], and `invoice-engine`
//! applies it to produce the final markup string.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use invoice_assembler::{assemble_invoice_xml, FileFetcher, InvoiceGenerator};
//!
//! let xml = assemble_invoice_xml(&pages);
//! let mut generator = InvoiceGenerator::new(FileFetcher::new());
//! let html = generator.generate_invoice_html("assets/invoice.xslt", &xml, HashMap::new())?;
//! ```

pub mod assemble;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod page;

// Re-export core types
pub use assemble::assemble_invoice_xml;
pub use error::{GenerateError, Result};
pub use fetch::{FetchError, FileFetcher, StringFetcher, StylesheetFetcher};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use generator::InvoiceGenerator;
pub use page::InvoicePage;
