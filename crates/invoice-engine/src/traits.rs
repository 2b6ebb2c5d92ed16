//! Capability traits for XML parse / transform / serialize

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Version information for XSLT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XsltVersion {
    V1_0,
    V2_0,
    V3_0,
}

/// XML document handle - opaque reference to parsed XML
pub trait XmlDocument {
    /// Serialize the document to markup text
    fn to_xml(&self) -> Result<String>;
}

/// XML parsing capability
pub trait XmlParser {
    /// The document type returned by this parser
    type Document: XmlDocument;

    /// Parse XML from a string
    fn parse(&mut self, xml: &str) -> Result<Self::Document>;

    /// Parse XML from a file
    fn parse_file(&mut self, path: &Path) -> Result<Self::Document> {
        let content = std::fs::read_to_string(path)?;
        self.parse(&content)
    }
}

/// XSLT application capability.
///
/// One call covers the whole three-step contract: compile the stylesheet
/// text, bind every named parameter, apply the transformation to `source`
/// and serialize the result tree back to a markup string.
pub trait XsltProcessor: XmlParser {
    /// Apply `stylesheet` to `source` with the given named parameters
    fn apply(
        &mut self,
        stylesheet: &str,
        source: &Self::Document,
        params: &HashMap<String, String>,
    ) -> Result<String>;

    /// Get the XSLT version supported by this processor
    fn xslt_version(&self) -> XsltVersion;
}
