use std::fmt;

/// DHL product a shipment is booked with. Gates which service features the
/// API accepts for the shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// DHL Paket (national).
    NationalPackage,
    /// DHL Paket International.
    InternationalPackage,
    /// DHL Europapaket.
    EuropaPackage,
    /// DHL Paket Connect.
    PackedConnect,
    /// DHL Paket Taggleich.
    SameDayPackage,
    /// DHL Kurier Taggleich.
    SameDayMessenger,
    /// DHL Kurier Wunschzeit.
    WishTimeMessenger,
    /// DHL Paket Austria.
    AustriaPackage,
    /// DHL Paket International Austria.
    AustriaInternationalPackage,
    /// DHL Paket Connect Austria.
    ConnectPackage,
}

impl ProductType {
    /// The product code the API expects in the `product` field.
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::NationalPackage => "V01PAK",
            ProductType::InternationalPackage => "V53WPAK",
            ProductType::EuropaPackage => "V54EPAK",
            ProductType::PackedConnect => "V55PAK",
            ProductType::SameDayPackage => "V06PAK",
            ProductType::SameDayMessenger => "V06TG",
            ProductType::WishTimeMessenger => "V06WZ",
            ProductType::AustriaPackage => "V86PARCEL",
            ProductType::AustriaInternationalPackage => "V82PARCEL",
            ProductType::ConnectPackage => "V87PARCEL",
        }
    }

    /// Every product the API currently knows.
    pub const ALL: [ProductType; 10] = [
        ProductType::NationalPackage,
        ProductType::InternationalPackage,
        ProductType::EuropaPackage,
        ProductType::PackedConnect,
        ProductType::SameDayPackage,
        ProductType::SameDayMessenger,
        ProductType::WishTimeMessenger,
        ProductType::AustriaPackage,
        ProductType::AustriaInternationalPackage,
        ProductType::ConnectPackage,
    ];
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
