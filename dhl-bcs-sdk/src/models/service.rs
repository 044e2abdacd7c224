use crate::enums::age_check::AgeCheck;
use crate::enums::endorsement_type::EndorsementType;
use crate::enums::product_type::ProductType;
use crate::enums::shipment_handling_type::ShipmentHandlingType;
use crate::errors::validation_error::ValidationError;
use crate::models::ident_check::IdentCheck;
use crate::validate;
use crate::wire::service::{
    Serviceconfiguration, ServiceconfigurationAdditionalInsurance,
    ServiceconfigurationCashOnDelivery, ServiceconfigurationDetails, ServiceconfigurationIC,
    ServiceconfigurationType, ShipmentService,
};
use chrono::NaiveDate;
use log::warn;

/// Products the day of delivery, delivery time frame, individual sender
/// requirement and shipment handling services are accepted for.
const MESSENGER_PRODUCTS: [ProductType; 2] = [
    ProductType::SameDayMessenger,
    ProductType::WishTimeMessenger,
];

/// Products the preferred time service is accepted for.
const PREFERRED_TIME_PRODUCTS: [ProductType; 2] =
    [ProductType::NationalPackage, ProductType::SameDayPackage];

/// Products the return immediately service is accepted for.
const RETURN_IMMEDIATELY_PRODUCTS: [ProductType; 1] = [ProductType::SameDayPackage];

/// Option holder for the bookable shipment services. Every field is unset
/// by default; unset services are not part of the request at all.
///
/// Switching a service on usually requires its detail field as well, see
/// the field docs. [`Service::to_wire`] checks those pairs and leaves out
/// services the shipment's product does not support.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Service {
    /// Delivery on a specific day. Messenger products only.
    pub day_of_delivery_enabled: Option<bool>,
    /// Day the shipment should be delivered on. Required if
    /// `day_of_delivery_enabled`.
    pub day_of_delivery_date: Option<NaiveDate>,
    /// Delivery within a specific time frame. Messenger products only.
    pub delivery_timeframe_enabled: Option<bool>,
    /// The time frame, written as `HHMMHHMM` (10:00 - 12:30 becomes
    /// `10001230`). Required if `delivery_timeframe_enabled`.
    pub delivery_timeframe: Option<String>,
    /// Preferred delivery time frame. National and same-day package only.
    pub preferred_time_enabled: Option<bool>,
    /// The preferred time frame, written as `HHMMHHMM`. Required if
    /// `preferred_time_enabled`.
    pub preferred_time: Option<String>,
    /// Individual requirement of the sender. Messenger products only.
    pub individual_sender_requirements_enabled: Option<bool>,
    /// The requirement as free text, 1 to 250 characters. Required if
    /// `individual_sender_requirements_enabled`.
    pub individual_sender_requirements_text: Option<String>,
    /// Return of the transport packaging.
    pub packaging_return: Option<bool>,
    /// Return the shipment right away if delivery fails. Same-day package
    /// only.
    pub return_immediately_if_shipment_failed: Option<bool>,
    /// Notify the sender when the shipment cannot be delivered.
    pub notice_on_non_deliverable: Option<bool>,
    /// Special handling by the messenger. Messenger products only.
    pub shipment_handling_enabled: Option<bool>,
    /// How the messenger handles the parcel. Required if
    /// `shipment_handling_enabled`.
    pub shipment_handling_type: Option<ShipmentHandlingType>,
    /// What to do with an undeliverable shipment.
    pub endorsement_enabled: Option<bool>,
    /// The endorsement kind. Required if `endorsement_enabled`.
    pub endorsement_type: Option<EndorsementType>,
    /// Visual age check at the door.
    pub visual_check_of_age_enabled: Option<bool>,
    /// Minimum age to check for. Required if `visual_check_of_age_enabled`.
    pub visual_check_of_age_type: Option<AgeCheck>,
    /// Drop the shipment at a preferred location.
    pub preferred_location_enabled: Option<bool>,
    /// The location as free text, 1 to 100 characters. Required if
    /// `preferred_location_enabled`.
    pub preferred_location_details: Option<String>,
    /// Deliver to a preferred neighbour.
    pub preferred_neighbour_enabled: Option<bool>,
    /// The neighbour as free text, 1 to 100 characters. Required if
    /// `preferred_neighbour_enabled`.
    pub preferred_neighbour_text: Option<String>,
    /// Deliver on a preferred day.
    pub preferred_day_enabled: Option<bool>,
    /// The day as free text, 1 to 100 characters. Required if
    /// `preferred_day_enabled`.
    pub preferred_day_text: Option<String>,
    /// GoGreen climate neutral shipping. API version 1 field, ignored by
    /// the version 2 request.
    pub go_green: Option<bool>,
    /// The shipment contains perishable goods.
    pub perishables: Option<bool>,
    /// Handover to the addressed person only. API version 1 field, the
    /// version 2 request uses `named_person_only`.
    pub personal_handover: Option<bool>,
    /// Never deliver to a neighbour.
    pub disable_neighbour_delivery: Option<bool>,
    /// Only the named person may accept the shipment.
    pub named_person_only: Option<bool>,
    /// Return receipt service.
    pub return_receipt: Option<bool>,
    /// Premium service for fast and safe international delivery.
    pub premium: Option<bool>,
    /// Cash on delivery.
    pub cash_on_delivery_enabled: Option<bool>,
    /// Let DHL add the transmission fee to the collected amount. Written
    /// only when set, independent of `cash_on_delivery_enabled`.
    pub cash_on_delivery_add_fee: Option<bool>,
    /// Amount to collect from the receiver, including the 2 EUR
    /// transmission fee. Required if `cash_on_delivery_enabled`.
    pub cash_on_delivery_amount: Option<f64>,
    /// Insurance above the standard coverage.
    pub additional_insurance_enabled: Option<bool>,
    /// Insured amount. Required if `additional_insurance_enabled`.
    pub additional_insurance_amount: Option<f64>,
    /// The shipment is bulky goods.
    pub bulky_goods: Option<bool>,
    /// Ident check of the receiver.
    pub ident_check_enabled: Option<bool>,
    /// Identity to check against. Required if `ident_check_enabled`.
    pub ident_check: Option<IdentCheck>,
}

impl Service {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the `Service` block for a shipment booked with the given
    /// product.
    ///
    /// Every service that was set is written with an `active` attribute of
    /// `1` or `0` and its detail value, unless the product does not accept
    /// it. Unsupported services are dropped without an error even when they
    /// are populated. A service that is switched on while its required
    /// detail is unset fails with [`ValidationError::MissingDetail`].
    pub fn to_wire(&self, product: ProductType) -> Result<ShipmentService, ValidationError> {
        let mut node = ShipmentService::default();

        if let Some(enabled) = self.day_of_delivery_enabled {
            if MESSENGER_PRODUCTS.contains(&product) {
                let date = require_if_enabled(
                    enabled,
                    self.day_of_delivery_date,
                    "dayOfDeliveryDate",
                )?;
                node.day_of_delivery = Some(ServiceconfigurationDetails {
                    active: enabled as u8,
                    details: date.map(|date| date.format("%Y-%m-%d").to_string()),
                });
            }
        }

        if let Some(enabled) = self.delivery_timeframe_enabled {
            if MESSENGER_PRODUCTS.contains(&product) {
                node.delivery_timeframe = Some(ServiceconfigurationType {
                    active: enabled as u8,
                    r#type: checked_time_frame(
                        enabled,
                        &self.delivery_timeframe,
                        "deliveryTimeframe",
                    )?,
                });
            }
        }

        if let Some(enabled) = self.preferred_time_enabled {
            if PREFERRED_TIME_PRODUCTS.contains(&product) {
                node.preferred_time = Some(ServiceconfigurationType {
                    active: enabled as u8,
                    r#type: checked_time_frame(enabled, &self.preferred_time, "preferredTime")?,
                });
            }
        }

        if let Some(enabled) = self.individual_sender_requirements_enabled {
            if MESSENGER_PRODUCTS.contains(&product) {
                node.individual_sender_requirement = Some(ServiceconfigurationDetails {
                    active: enabled as u8,
                    details: checked_text(
                        enabled,
                        &self.individual_sender_requirements_text,
                        "individualSenderRequirement",
                        250,
                    )?,
                });
            }
        }

        node.packaging_return = self.packaging_return.map(Serviceconfiguration::from);

        if RETURN_IMMEDIATELY_PRODUCTS.contains(&product) {
            node.return_immediately = self
                .return_immediately_if_shipment_failed
                .map(Serviceconfiguration::from);
        }

        node.notice_of_non_deliverability = self
            .notice_on_non_deliverable
            .map(Serviceconfiguration::from);

        if let Some(enabled) = self.shipment_handling_enabled {
            if MESSENGER_PRODUCTS.contains(&product) {
                node.shipment_handling = Some(ServiceconfigurationType {
                    active: enabled as u8,
                    r#type: checked_code(
                        enabled,
                        self.shipment_handling_type.map(|kind| kind.code()),
                        "shipmentHandlingType",
                    )?,
                });
            }
        }

        if let Some(enabled) = self.endorsement_enabled {
            node.endorsement = Some(ServiceconfigurationType {
                active: enabled as u8,
                r#type: checked_code(
                    enabled,
                    self.endorsement_type.map(|kind| kind.code()),
                    "endorsementType",
                )?,
            });
        }

        if let Some(enabled) = self.visual_check_of_age_enabled {
            node.visual_check_of_age = Some(ServiceconfigurationType {
                active: enabled as u8,
                r#type: checked_code(
                    enabled,
                    self.visual_check_of_age_type.map(|age| age.code()),
                    "visualCheckOfAgeType",
                )?,
            });
        }

        if let Some(enabled) = self.preferred_location_enabled {
            node.preferred_location = Some(ServiceconfigurationDetails {
                active: enabled as u8,
                details: checked_text(
                    enabled,
                    &self.preferred_location_details,
                    "preferredLocationDetails",
                    100,
                )?,
            });
        }

        if let Some(enabled) = self.preferred_neighbour_enabled {
            node.preferred_neighbour = Some(ServiceconfigurationDetails {
                active: enabled as u8,
                details: checked_text(
                    enabled,
                    &self.preferred_neighbour_text,
                    "preferredNeighbourText",
                    100,
                )?,
            });
        }

        if let Some(enabled) = self.preferred_day_enabled {
            node.preferred_day = Some(ServiceconfigurationDetails {
                active: enabled as u8,
                details: checked_text(
                    enabled,
                    &self.preferred_day_text,
                    "preferredDayText",
                    100,
                )?,
            });
        }

        node.perishables = self.perishables.map(Serviceconfiguration::from);
        node.no_neighbour_delivery = self
            .disable_neighbour_delivery
            .map(Serviceconfiguration::from);
        node.named_person_only = self.named_person_only.map(Serviceconfiguration::from);
        node.return_receipt = self.return_receipt.map(Serviceconfiguration::from);
        node.premium = self.premium.map(Serviceconfiguration::from);

        if let Some(enabled) = self.cash_on_delivery_enabled {
            if enabled && self.cash_on_delivery_amount.is_none() {
                return Err(ValidationError::MissingDetail { field: "codAmount" });
            }
            node.cash_on_delivery = Some(ServiceconfigurationCashOnDelivery {
                active: enabled as u8,
                add_fee: self.cash_on_delivery_add_fee,
                cod_amount: self.cash_on_delivery_amount,
            });
        }

        if let Some(enabled) = self.additional_insurance_enabled {
            if enabled && self.additional_insurance_amount.is_none() {
                return Err(ValidationError::MissingDetail {
                    field: "insuranceAmount",
                });
            }
            node.additional_insurance = Some(ServiceconfigurationAdditionalInsurance {
                active: enabled as u8,
                insurance_amount: self.additional_insurance_amount,
            });
        }

        node.bulky_goods = self.bulky_goods.map(Serviceconfiguration::from);

        if let Some(enabled) = self.ident_check_enabled {
            let ident = match &self.ident_check {
                Some(check) => Some(check.to_wire()?),
                None if enabled => {
                    return Err(ValidationError::MissingDetail { field: "Ident" });
                }
                None => None,
            };
            node.ident_check = Some(ServiceconfigurationIC {
                active: enabled as u8,
                ident,
            });
        }

        Ok(node)
    }

    /// The version 1 rendition of the `Service` block.
    ///
    /// The version 1 schema is shut down on the DHL side; this always
    /// yields an empty block and only exists so version 1 callers keep
    /// compiling while they migrate.
    #[deprecated(note = "API version 1 is shut down, use to_wire instead")]
    pub fn to_wire_v1(&self, _product: ProductType) -> ShipmentService {
        warn!("the version 1 service schema is no longer functional, returning an empty block");

        ShipmentService::default()
    }
}

/// An enabled service needs its detail value; a service switched off may
/// carry one, but does not have to.
fn require_if_enabled<T>(
    enabled: bool,
    value: Option<T>,
    field: &'static str,
) -> Result<Option<T>, ValidationError> {
    match value {
        Some(value) => Ok(Some(value)),
        None if enabled => Err(ValidationError::MissingDetail { field }),
        None => Ok(None),
    }
}

fn checked_text(
    enabled: bool,
    value: &Option<String>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    if let Some(text) = value {
        validate::check_text(field, text, max)?;
    }

    require_if_enabled(enabled, value.clone(), field)
}

fn checked_time_frame(
    enabled: bool,
    value: &Option<String>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    if let Some(time_frame) = value {
        validate::check_time_frame(field, time_frame)?;
    }

    require_if_enabled(enabled, value.clone(), field)
}

fn checked_code(
    enabled: bool,
    code: Option<&'static str>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    require_if_enabled(enabled, code.map(str::to_string), field)
}
