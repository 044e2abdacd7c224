/// What DHL should do with a shipment that could not be delivered.
///
/// `ReturnImmediately` and `SecondDeliveryAttempt` apply to national
/// shipments, the remaining variants to international ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndorsementType {
    /// Return the shipment to the sender right away (national).
    ReturnImmediately,
    /// Attempt a second delivery before returning (national).
    SecondDeliveryAttempt,
    /// Send back to the sender immediately (international).
    Immediate,
    /// Send back to the sender after the storage deadline (international).
    AfterDeadline,
    /// Abandon the parcel at the hands of the sender, free of charge
    /// (international).
    Abandonment,
}

impl EndorsementType {
    /// The value the API expects in the `Endorsement` type attribute.
    pub fn code(&self) -> &'static str {
        match self {
            EndorsementType::ReturnImmediately => "SOZU",
            EndorsementType::SecondDeliveryAttempt => "ZWZU",
            EndorsementType::Immediate => "IMMEDIATE",
            EndorsementType::AfterDeadline => "AFTER_DEADLINE",
            EndorsementType::Abandonment => "ABANDONMENT",
        }
    }
}
