//! A request model SDK for version 2 of the DHL Business Customer Shipping
//! SOAP API. The option holders mirror the optional and required fields of
//! the remote schema and render into typed request nodes that a SOAP
//! transport writes into the request body.
//! # Building a Service block
//! ```
//! use dhl_bcs_sdk::enums::age_check::AgeCheck;
//! use dhl_bcs_sdk::enums::product_type::ProductType;
//! use dhl_bcs_sdk::models::service::Service;
//!
//! let mut service = Service::new();
//! service.visual_check_of_age_enabled = Some(true);
//! service.visual_check_of_age_type = Some(AgeCheck::A18);
//! service.preferred_location_enabled = Some(true);
//! service.preferred_location_details = Some("Garage".to_string());
//!
//! let node = service.to_wire(ProductType::NationalPackage).unwrap();
//! let xml = dhl_bcs_sdk::wire::to_xml(&node).unwrap();
//!
//! assert!(xml.contains(r#"<VisualCheckOfAge active="1" type="A18"/>"#));
//! assert!(xml.contains(r#"<PreferredLocation active="1" details="Garage"/>"#));
//! ```
//! Services a product does not accept are dropped from the request, so the
//! same holder can be reused across products:
//! ```
//! use dhl_bcs_sdk::enums::product_type::ProductType;
//! use dhl_bcs_sdk::models::service::Service;
//!
//! let mut service = Service::new();
//! service.delivery_timeframe_enabled = Some(true);
//! service.delivery_timeframe = Some("10001230".to_string());
//!
//! let node = service.to_wire(ProductType::NationalPackage).unwrap();
//! assert!(node.delivery_timeframe.is_none());
//!
//! let node = service.to_wire(ProductType::WishTimeMessenger).unwrap();
//! assert!(node.delivery_timeframe.is_some());
//! ```

pub mod credentials;
pub mod enums;
pub mod errors;
pub mod models;
pub mod wire;

mod validate;

pub use credentials::Credentials;
pub use enums::age_check::AgeCheck;
pub use enums::endorsement_type::EndorsementType;
pub use enums::product_type::ProductType;
pub use enums::shipment_handling_type::ShipmentHandlingType;
pub use errors::validation_error::ValidationError;
pub use models::ident_check::IdentCheck;
pub use models::service::Service;
pub use models::shipment_details::ShipmentDetails;
