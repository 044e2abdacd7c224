//! Typed request nodes matching the version 2 wire schema, plus XML
//! rendering for them.

pub mod service;
pub mod shipment;

use quick_xml::SeError;
use serde::Serialize;

/// Renders a request node as the XML fragment the SOAP body carries.
pub fn to_xml<T: Serialize>(node: &T) -> Result<String, SeError> {
    quick_xml::se::to_string(node)
}
