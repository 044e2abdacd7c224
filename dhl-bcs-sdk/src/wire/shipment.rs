use crate::wire::service::ShipmentService;
use serde::Serialize;

/// The `ShipmentDetails` block of a shipment order request.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename = "ShipmentDetails")]
pub struct ShipmentDetailsType {
    pub product: String,
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(rename = "customerReference", skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(rename = "shipmentDate", skip_serializing_if = "Option::is_none")]
    pub shipment_date: Option<String>,
    #[serde(
        rename = "returnShipmentAccountNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub return_shipment_account_number: Option<String>,
    #[serde(
        rename = "returnShipmentReference",
        skip_serializing_if = "Option::is_none"
    )]
    pub return_shipment_reference: Option<String>,
    #[serde(rename = "ShipmentItem")]
    pub shipment_item: ShipmentItemType,
    #[serde(rename = "Service", skip_serializing_if = "Option::is_none")]
    pub service: Option<ShipmentService>,
    #[serde(rename = "Notification", skip_serializing_if = "Option::is_none")]
    pub notification: Option<ShipmentNotificationType>,
}

/// Parcel measurements. Only the weight is mandatory.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShipmentItemType {
    #[serde(rename = "weightInKG")]
    pub weight_in_kg: f64,
    #[serde(rename = "lengthInCM", skip_serializing_if = "Option::is_none")]
    pub length_in_cm: Option<u32>,
    #[serde(rename = "widthInCM", skip_serializing_if = "Option::is_none")]
    pub width_in_cm: Option<u32>,
    #[serde(rename = "heightInCM", skip_serializing_if = "Option::is_none")]
    pub height_in_cm: Option<u32>,
}

/// Where DHL sends status mails for the shipment.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShipmentNotificationType {
    #[serde(rename = "recipientEmailAddress")]
    pub recipient_email_address: String,
}
