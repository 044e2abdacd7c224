use crate::enums::product_type::ProductType;
use crate::errors::validation_error::ValidationError;
use crate::models::service::Service;
use crate::validate;
use crate::wire::shipment::{ShipmentDetailsType, ShipmentItemType, ShipmentNotificationType};
use chrono::NaiveDate;

/// Option holder for a single shipment: the product, billing data, parcel
/// measurements and the services booked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentDetails {
    /// Product the shipment is booked with. Also decides which services of
    /// the embedded [`Service`] holder make it into the request.
    pub product: ProductType,
    /// Account number the shipment is billed to, exactly 14 characters
    /// (EKP, procedure and participation).
    pub account_number: String,
    /// Free reference printed on the label. 1 to 35 characters.
    pub customer_reference: Option<String>,
    /// Day the parcel is handed to DHL.
    pub shipment_date: Option<NaiveDate>,
    /// Account number return shipments are billed to, exactly 14
    /// characters.
    pub return_shipment_account_number: Option<String>,
    /// Free reference for return shipments. 1 to 35 characters.
    pub return_shipment_reference: Option<String>,
    /// Parcel weight in kilograms.
    pub weight_in_kg: f64,
    /// Parcel length in centimeters.
    pub length_in_cm: Option<u32>,
    /// Parcel width in centimeters.
    pub width_in_cm: Option<u32>,
    /// Parcel height in centimeters.
    pub height_in_cm: Option<u32>,
    /// Address DHL sends shipment status mails to. 1 to 70 characters.
    pub notification_email: Option<String>,
    /// Services booked for this shipment.
    pub service: Option<Service>,
}

impl ShipmentDetails {
    /// New shipment details with the default parcel weight of 5 kg.
    pub fn new(product: ProductType, account_number: String) -> Self {
        Self {
            product,
            account_number,
            customer_reference: None,
            shipment_date: None,
            return_shipment_account_number: None,
            return_shipment_reference: None,
            weight_in_kg: 5.0,
            length_in_cm: None,
            width_in_cm: None,
            height_in_cm: None,
            notification_email: None,
            service: None,
        }
    }

    /// Builds the `ShipmentDetails` block of a shipment order request. The
    /// embedded service holder is rendered with this shipment's product, so
    /// services the product does not accept are dropped.
    pub fn to_wire(&self) -> Result<ShipmentDetailsType, ValidationError> {
        validate::check_account_number("accountNumber", &self.account_number)?;
        validate::check_weight(self.weight_in_kg)?;

        if let Some(reference) = &self.customer_reference {
            validate::check_text("customerReference", reference, 35)?;
        }
        if let Some(number) = &self.return_shipment_account_number {
            validate::check_account_number("returnShipmentAccountNumber", number)?;
        }
        if let Some(reference) = &self.return_shipment_reference {
            validate::check_text("returnShipmentReference", reference, 35)?;
        }
        if let Some(email) = &self.notification_email {
            validate::check_text("recipientEmailAddress", email, 70)?;
        }

        let service = match &self.service {
            Some(service) => Some(service.to_wire(self.product)?),
            None => None,
        };

        Ok(ShipmentDetailsType {
            product: self.product.code().to_string(),
            account_number: self.account_number.clone(),
            customer_reference: self.customer_reference.clone(),
            shipment_date: self
                .shipment_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
            return_shipment_account_number: self.return_shipment_account_number.clone(),
            return_shipment_reference: self.return_shipment_reference.clone(),
            shipment_item: ShipmentItemType {
                weight_in_kg: self.weight_in_kg,
                length_in_cm: self.length_in_cm,
                width_in_cm: self.width_in_cm,
                height_in_cm: self.height_in_cm,
            },
            service,
            notification: self.notification_email.clone().map(|email| {
                ShipmentNotificationType {
                    recipient_email_address: email,
                }
            }),
        })
    }
}
