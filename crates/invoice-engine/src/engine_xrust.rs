//! xrust engine wrapper
//!
//! Supports:
//! - XML parsing
//! - XSLT ~1.0 transformation with named string parameters
//!
//! xrust's XSLT 1.0 coverage includes every construct the invoice
//! stylesheets use (templates, for-each, value-of, choose).

use std::collections::HashMap;
use std::rc::Rc;

use xrust::item::{Item as XrustItem, Node, SequenceTrait};
use xrust::parser::xml::parse as parse_xml;
use xrust::transform::context::StaticContextBuilder;
use xrust::trees::smite::RNode;
use xrust::value::Value;
use xrust::xdmerror::{Error as XrustError, ErrorKind};
use xrust::xslt::from_document;

use crate::error::{Error, Result};
use crate::traits::{XmlDocument, XmlParser, XsltProcessor, XsltVersion};

/// xrust engine wrapper
pub struct XrustEngine;

impl Default for XrustEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl XrustEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Document handle for xrust (wraps RNode)
pub struct XrustDocument {
    root: RNode,
}

impl XmlDocument for XrustDocument {
    fn to_xml(&self) -> Result<String> {
        Ok(self.root.to_xml())
    }
}

impl XmlParser for XrustEngine {
    type Document = XrustDocument;

    fn parse(&mut self, xml: &str) -> Result<Self::Document> {
        let doc = RNode::new_document();
        parse_xml(doc.clone(), xml, None).map_err(|e| Error::XmlParse(e.to_string()))?;
        Ok(XrustDocument { root: doc })
    }
}

impl XsltProcessor for XrustEngine {
    fn apply(
        &mut self,
        stylesheet: &str,
        source: &Self::Document,
        params: &HashMap<String, String>,
    ) -> Result<String> {
        // Parse the stylesheet
        let style = RNode::new_document();
        parse_xml(style.clone(), stylesheet, None)
            .map_err(|e| Error::XsltCompile(format!("failed to parse stylesheet: {}", e)))?;

        // Compile stylesheet
        let mut context = from_document(
            style,
            None,
            |s: &str| {
                let doc = RNode::new_document();
                parse_xml(doc.clone(), s, None)?;
                Ok(doc)
            },
            |_| Ok(String::new()),
        )
        .map_err(|e| Error::XsltCompile(e.to_string()))?;

        // Set source document as context
        context.context(vec![XrustItem::Node(source.root.clone())], 0);

        // Create result document
        let result_doc = RNode::new_document();
        context.result_document(result_doc);

        // Named parameters become string variables in the evaluation
        // context, referenced from the stylesheet as $name.
        for (name, value) in params {
            context.var_push(
                name.clone(),
                vec![XrustItem::Value(Rc::new(Value::from(value.clone())))],
            );
        }

        // Create static context and evaluate
        let mut static_context = StaticContextBuilder::new()
            .message(|_| Ok(()))
            .fetcher(|_| Err(XrustError::new(ErrorKind::NotImplemented, "not implemented")))
            .parser(|_| Err(XrustError::new(ErrorKind::NotImplemented, "not implemented")))
            .build();

        let sequence = context
            .evaluate(&mut static_context)
            .map_err(|e| Error::XsltTransform(e.to_string()))?;

        Ok(sequence.to_xml())
    }

    fn xslt_version(&self) -> XsltVersion {
        XsltVersion::V1_0
    }
}
