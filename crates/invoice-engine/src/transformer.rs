//! Stylesheet application with the injected `create-date` parameter

use std::collections::HashMap;

use tracing::debug;

use crate::clock::{format_create_date, Clock, SystemClock};
use crate::engine_xrust::XrustEngine;
use crate::error::Result;
use crate::traits::{XmlParser, XsltProcessor};

/// Reserved parameter name, always set by the transformer.
pub const CREATE_DATE_PARAM: &str = "create-date";

/// Applies one stylesheet to one XML document with named parameters.
///
/// Every call parses its own document trees and discards them on return;
/// no state is shared between calls. The clock is injectable so tests can
/// pin the `create-date` value.
pub struct Transformer<C: Clock = SystemClock> {
    engine: XrustEngine,
    clock: C,
}

impl Transformer {
    /// Transformer on the real system clock.
    pub fn new() -> Self {
        Transformer {
            engine: XrustEngine::new(),
            clock: SystemClock,
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Transformer<C> {
    pub fn with_clock(clock: C) -> Self {
        Transformer {
            engine: XrustEngine::new(),
            clock,
        }
    }

    /// Apply `xslt` to `xml` with the given named parameters.
    ///
    /// The `create-date` parameter is inserted after the caller's map is
    /// merged, so a caller-supplied value of that name is always
    /// overwritten.
    pub fn transform(
        &mut self,
        xslt: &str,
        xml: &str,
        params: HashMap<String, String>,
    ) -> Result<String> {
        let mut params = params;
        params.insert(
            CREATE_DATE_PARAM.to_string(),
            format_create_date(self.clock.now()),
        );
        debug!(params = params.len(), "applying stylesheet");

        let source = self.engine.parse(xml)?;
        self.engine.apply(xslt, &source, &params)
    }
}
