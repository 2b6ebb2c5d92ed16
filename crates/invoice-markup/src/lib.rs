//! Record-to-XML serialization for the invoice pipeline.
//!
//! This crate converts in-memory scalars, records and record lists into XML
//! element text. It is a deliberately minimal templating utility: element
//! names are not validated, and in the default [`EscapeMode::Raw`] mode text
//! content is emitted verbatim, reserved characters included, because the
//! downstream stylesheets were written against that exact output. The
//! opt-in [`EscapeMode::Escaped`] mode entity-escapes text content instead.

pub mod item;
pub mod scalar;
pub mod writer;

pub use item::{XmlItem, XmlItemList};
pub use scalar::XmlScalar;
pub use writer::{
    escape_text, list_to_element, record_to_element, scalar_to_element, ElementWriter, EscapeMode,
};
