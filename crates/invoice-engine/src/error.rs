//! Error types for the transformation engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error("XSLT compilation error: {0}")]
    XsltCompile(String),

    #[error("XSLT transformation error: {0}")]
    XsltTransform(String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
