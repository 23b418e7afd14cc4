// crates/umlconf-rs/src/error.rs

use core::fmt;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors that can occur while loading a class model or deriving artifacts from it.
#[derive(Debug)]
pub enum ModelError {
    /// An error from the underlying `quick-xml` deserializer (malformed input).
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` writer.
    XmlWriting(XmlError),

    /// The metadata could not be serialized to JSON.
    JsonSerializing(serde_json::Error),

    /// The rendered output was not valid UTF-8.
    Utf8(FromUtf8Error),

    /// A required attribute was missing on an element (e.g., `@name` on `<Class>`).
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// A class name was referenced but never declared.
    UnknownClass { name: String },

    /// The containment graph loops back on itself.
    ///
    /// `path` starts and ends with the re-entered class.
    CycleDetected { path: Vec<String> },

    /// The input file does not exist.
    MissingFile(PathBuf),

    /// Any other I/O failure while reading or writing files.
    Io(io::Error),
}

impl From<DeError> for ModelError {
    fn from(e: DeError) -> Self {
        ModelError::XmlParsing(e)
    }
}

impl From<XmlError> for ModelError {
    fn from(e: XmlError) -> Self {
        ModelError::XmlWriting(e)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::JsonSerializing(e)
    }
}

impl From<FromUtf8Error> for ModelError {
    fn from(e: FromUtf8Error) -> Self {
        ModelError::Utf8(e)
    }
}

impl From<io::Error> for ModelError {
    fn from(e: io::Error) -> Self {
        ModelError::Io(e)
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            ModelError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            ModelError::JsonSerializing(e) => write!(f, "JSON serializing error: {}", e),
            ModelError::Utf8(e) => write!(f, "Rendered output is not UTF-8: {}", e),
            ModelError::MissingAttribute { element, attribute } => {
                write!(
                    f,
                    "Missing required attribute '{}' on <{}>",
                    attribute, element
                )
            }
            ModelError::UnknownClass { name } => {
                write!(f, "Reference to undeclared class: {}", name)
            }
            ModelError::CycleDetected { path } => {
                write!(f, "Containment cycle detected: {}", path.join(" -> "))
            }
            ModelError::MissingFile(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            ModelError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::XmlParsing(e) => Some(e),
            ModelError::XmlWriting(e) => Some(e),
            ModelError::JsonSerializing(e) => Some(e),
            ModelError::Utf8(e) => Some(e),
            ModelError::Io(e) => Some(e),
            _ => None,
        }
    }
}
