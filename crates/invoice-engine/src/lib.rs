//! invoice-engine: XSLT transformation core for the invoice pipeline
//!
//! This crate wraps an XSLT 1.0 engine behind small capability traits
//! (parse, apply-with-parameters, serialize) and layers the
//! [`Transformer`] on top, which injects the reserved `create-date`
//! parameter from an injectable clock.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use invoice_engine::Transformer;
//!
//! let mut transformer = Transformer::new();
//! let html = transformer.transform(xslt_text, xml_text, HashMap::new())?;
//! ```

pub mod clock;
pub mod engine_xrust;
pub mod error;
pub mod traits;
pub mod transformer;

// Re-export core types
pub use clock::{format_create_date, Clock, FixedClock, SystemClock, CREATE_DATE_FORMAT};
pub use engine_xrust::{XrustDocument, XrustEngine};
pub use error::{Error, Result};
pub use traits::{XmlDocument, XmlParser, XsltProcessor, XsltVersion};
pub use transformer::{Transformer, CREATE_DATE_PARAM};
