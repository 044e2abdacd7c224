use serde::Serialize;

/// The `Service` block of a shipment request. One member per bookable
/// service; members that stay `None` are left out of the XML entirely.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename = "Service")]
pub struct ShipmentService {
    #[serde(rename = "DayOfDelivery", skip_serializing_if = "Option::is_none")]
    pub day_of_delivery: Option<ServiceconfigurationDetails>,
    #[serde(rename = "DeliveryTimeframe", skip_serializing_if = "Option::is_none")]
    pub delivery_timeframe: Option<ServiceconfigurationType>,
    #[serde(rename = "PreferredTime", skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<ServiceconfigurationType>,
    #[serde(
        rename = "IndividualSenderRequirement",
        skip_serializing_if = "Option::is_none"
    )]
    pub individual_sender_requirement: Option<ServiceconfigurationDetails>,
    #[serde(rename = "PackagingReturn", skip_serializing_if = "Option::is_none")]
    pub packaging_return: Option<Serviceconfiguration>,
    #[serde(rename = "ReturnImmediately", skip_serializing_if = "Option::is_none")]
    pub return_immediately: Option<Serviceconfiguration>,
    #[serde(
        rename = "NoticeOfNonDeliverability",
        skip_serializing_if = "Option::is_none"
    )]
    pub notice_of_non_deliverability: Option<Serviceconfiguration>,
    #[serde(rename = "ShipmentHandling", skip_serializing_if = "Option::is_none")]
    pub shipment_handling: Option<ServiceconfigurationType>,
    #[serde(rename = "Endorsement", skip_serializing_if = "Option::is_none")]
    pub endorsement: Option<ServiceconfigurationType>,
    #[serde(rename = "VisualCheckOfAge", skip_serializing_if = "Option::is_none")]
    pub visual_check_of_age: Option<ServiceconfigurationType>,
    #[serde(rename = "PreferredLocation", skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<ServiceconfigurationDetails>,
    #[serde(rename = "PreferredNeighbour", skip_serializing_if = "Option::is_none")]
    pub preferred_neighbour: Option<ServiceconfigurationDetails>,
    #[serde(rename = "PreferredDay", skip_serializing_if = "Option::is_none")]
    pub preferred_day: Option<ServiceconfigurationDetails>,
    #[serde(rename = "Perishables", skip_serializing_if = "Option::is_none")]
    pub perishables: Option<Serviceconfiguration>,
    #[serde(rename = "NoNeighbourDelivery", skip_serializing_if = "Option::is_none")]
    pub no_neighbour_delivery: Option<Serviceconfiguration>,
    #[serde(rename = "NamedPersonOnly", skip_serializing_if = "Option::is_none")]
    pub named_person_only: Option<Serviceconfiguration>,
    #[serde(rename = "ReturnReceipt", skip_serializing_if = "Option::is_none")]
    pub return_receipt: Option<Serviceconfiguration>,
    #[serde(rename = "Premium", skip_serializing_if = "Option::is_none")]
    pub premium: Option<Serviceconfiguration>,
    #[serde(rename = "CashOnDelivery", skip_serializing_if = "Option::is_none")]
    pub cash_on_delivery: Option<ServiceconfigurationCashOnDelivery>,
    #[serde(
        rename = "AdditionalInsurance",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_insurance: Option<ServiceconfigurationAdditionalInsurance>,
    #[serde(rename = "BulkyGoods", skip_serializing_if = "Option::is_none")]
    pub bulky_goods: Option<Serviceconfiguration>,
    #[serde(rename = "IdentCheck", skip_serializing_if = "Option::is_none")]
    pub ident_check: Option<ServiceconfigurationIC>,
}

/// A service that is a bare on/off switch.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Serviceconfiguration {
    #[serde(rename = "@active")]
    pub active: u8,
}

impl From<bool> for Serviceconfiguration {
    fn from(enabled: bool) -> Self {
        Self {
            active: enabled as u8,
        }
    }
}

/// A service carrying a free-text detail attribute.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceconfigurationDetails {
    #[serde(rename = "@active")]
    pub active: u8,
    #[serde(rename = "@details", skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A service carrying an enumerated type attribute.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceconfigurationType {
    #[serde(rename = "@active")]
    pub active: u8,
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// The cash on delivery service. `addFee` controls whether DHL adds the
/// transmission fee to the collected amount and is only written when the
/// caller decided either way.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceconfigurationCashOnDelivery {
    #[serde(rename = "@active")]
    pub active: u8,
    #[serde(rename = "@addFee", skip_serializing_if = "Option::is_none")]
    pub add_fee: Option<bool>,
    #[serde(rename = "@codAmount", skip_serializing_if = "Option::is_none")]
    pub cod_amount: Option<f64>,
}

/// Insurance above the standard coverage.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceconfigurationAdditionalInsurance {
    #[serde(rename = "@active")]
    pub active: u8,
    #[serde(rename = "@insuranceAmount", skip_serializing_if = "Option::is_none")]
    pub insurance_amount: Option<f64>,
}

/// The ident check service with its embedded identity data.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceconfigurationIC {
    #[serde(rename = "@active")]
    pub active: u8,
    #[serde(rename = "Ident", skip_serializing_if = "Option::is_none")]
    pub ident: Option<Ident>,
}

/// Identity of the receiver for the ident check service.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Ident {
    #[serde(rename = "@surname")]
    pub surname: String,
    #[serde(rename = "@givenName")]
    pub given_name: String,
    #[serde(rename = "@dateOfBirth", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "@minimumAge", skip_serializing_if = "Option::is_none")]
    pub minimum_age: Option<String>,
}
