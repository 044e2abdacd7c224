/// How the messenger handles the parcel at the door. Only accepted by the
/// same-day and wish-time messenger products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipmentHandlingType {
    /// Remove the content and take the box back.
    RemoveContentReturnBox,
    /// Remove the content, pick up and dispose of the cardboard packaging.
    RemoveContentDisposePackaging,
    /// Hand the parcel over to the customer without disposing of anything.
    HandoverWithoutDisposal,
    /// Remove the bag from the cooling unit and hand it over.
    RemoveBagFromCoolingUnit,
    /// Remove the content, apply a return label, seal the box and take it
    /// back.
    RemoveContentApplyReturnLabel,
}

impl ShipmentHandlingType {
    /// The single-letter value the API expects in the `ShipmentHandling`
    /// type attribute.
    pub fn code(&self) -> &'static str {
        match self {
            ShipmentHandlingType::RemoveContentReturnBox => "a",
            ShipmentHandlingType::RemoveContentDisposePackaging => "b",
            ShipmentHandlingType::HandoverWithoutDisposal => "c",
            ShipmentHandlingType::RemoveBagFromCoolingUnit => "d",
            ShipmentHandlingType::RemoveContentApplyReturnLabel => "e",
        }
    }
}
