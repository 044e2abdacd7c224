use chrono::NaiveDate;
use dhl_bcs_sdk::enums::age_check::AgeCheck;
use dhl_bcs_sdk::enums::endorsement_type::EndorsementType;
use dhl_bcs_sdk::enums::product_type::ProductType;
use dhl_bcs_sdk::enums::shipment_handling_type::ShipmentHandlingType;
use dhl_bcs_sdk::models::ident_check::IdentCheck;
use dhl_bcs_sdk::models::service::Service;

#[test]
fn active_flag_projects_to_one_and_zero() {
    let mut service = Service::new();
    service.preferred_location_enabled = Some(true);
    service.preferred_location_details = Some("Garage".to_string());

    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    assert_eq!(node.preferred_location.as_ref().unwrap().active, 1);

    service.preferred_location_enabled = Some(false);
    let node = service.to_wire(ProductType::NationalPackage).unwrap();

    let location = node.preferred_location.unwrap();
    assert_eq!(location.active, 0);
    assert_eq!(location.details.as_deref(), Some("Garage"));
}

#[test]
fn detail_values_pass_through() {
    crate::init_logs();

    let mut service = Service::new();
    service.day_of_delivery_enabled = Some(true);
    service.day_of_delivery_date = NaiveDate::from_ymd_opt(2026, 8, 7);
    service.delivery_timeframe_enabled = Some(true);
    service.delivery_timeframe = Some("09131000".to_string());
    service.preferred_neighbour_enabled = Some(true);
    service.preferred_neighbour_text = Some("Familie Mustermann".to_string());
    service.visual_check_of_age_enabled = Some(true);
    service.visual_check_of_age_type = Some(AgeCheck::A16);

    let node = service.to_wire(ProductType::SameDayMessenger).unwrap();

    assert_eq!(
        node.day_of_delivery.unwrap().details.as_deref(),
        Some("2026-08-07")
    );
    assert_eq!(
        node.delivery_timeframe.unwrap().r#type.as_deref(),
        Some("09131000")
    );
    assert_eq!(
        node.preferred_neighbour.unwrap().details.as_deref(),
        Some("Familie Mustermann")
    );
    assert_eq!(
        node.visual_check_of_age.unwrap().r#type.as_deref(),
        Some("A16")
    );
}

#[test]
fn endorsement_codes() {
    let cases = [
        (EndorsementType::ReturnImmediately, "SOZU"),
        (EndorsementType::SecondDeliveryAttempt, "ZWZU"),
        (EndorsementType::Immediate, "IMMEDIATE"),
        (EndorsementType::AfterDeadline, "AFTER_DEADLINE"),
        (EndorsementType::Abandonment, "ABANDONMENT"),
    ];

    for (kind, code) in cases {
        let mut service = Service::new();
        service.endorsement_enabled = Some(true);
        service.endorsement_type = Some(kind);

        let node = service.to_wire(ProductType::InternationalPackage).unwrap();
        assert_eq!(node.endorsement.unwrap().r#type.as_deref(), Some(code));
    }
}

#[test]
fn shipment_handling_codes() {
    let cases = [
        (ShipmentHandlingType::RemoveContentReturnBox, "a"),
        (ShipmentHandlingType::RemoveContentDisposePackaging, "b"),
        (ShipmentHandlingType::HandoverWithoutDisposal, "c"),
        (ShipmentHandlingType::RemoveBagFromCoolingUnit, "d"),
        (ShipmentHandlingType::RemoveContentApplyReturnLabel, "e"),
    ];

    for (kind, code) in cases {
        let mut service = Service::new();
        service.shipment_handling_enabled = Some(true);
        service.shipment_handling_type = Some(kind);

        let node = service.to_wire(ProductType::WishTimeMessenger).unwrap();
        assert_eq!(node.shipment_handling.unwrap().r#type.as_deref(), Some(code));
    }
}

#[test]
fn cash_on_delivery_amount_and_fee() {
    let mut service = Service::new();
    service.cash_on_delivery_enabled = Some(true);
    service.cash_on_delivery_amount = Some(23.5);

    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    let cod = node.cash_on_delivery.unwrap();
    assert_eq!(cod.active, 1);
    assert_eq!(cod.cod_amount, Some(23.5));
    assert_eq!(cod.add_fee, None);

    service.cash_on_delivery_add_fee = Some(false);
    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    assert_eq!(node.cash_on_delivery.unwrap().add_fee, Some(false));
}

#[test]
fn add_fee_alone_does_not_book_cash_on_delivery() {
    let mut service = Service::new();
    service.cash_on_delivery_add_fee = Some(true);

    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    assert!(node.cash_on_delivery.is_none());
}

#[test]
fn additional_insurance_amount_passes_through() {
    let mut service = Service::new();
    service.additional_insurance_enabled = Some(true);
    service.additional_insurance_amount = Some(2500.0);

    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    let insurance = node.additional_insurance.unwrap();
    assert_eq!(insurance.active, 1);
    assert_eq!(insurance.insurance_amount, Some(2500.0));
}

#[test]
fn ident_check_embeds_identity() {
    let mut ident = IdentCheck::new("Mustermann".to_string(), "Max".to_string());
    ident.date_of_birth = NaiveDate::from_ymd_opt(1990, 1, 1);
    ident.minimum_age = Some(AgeCheck::A18);

    let mut service = Service::new();
    service.ident_check_enabled = Some(true);
    service.ident_check = Some(ident);

    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    let check = node.ident_check.unwrap();
    assert_eq!(check.active, 1);

    let ident = check.ident.unwrap();
    assert_eq!(ident.surname, "Mustermann");
    assert_eq!(ident.given_name, "Max");
    assert_eq!(ident.date_of_birth.as_deref(), Some("1990-01-01"));
    assert_eq!(ident.minimum_age.as_deref(), Some("A18"));
}

#[test]
fn disabled_ident_check_needs_no_identity() {
    let mut service = Service::new();
    service.ident_check_enabled = Some(false);

    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    let check = node.ident_check.unwrap();
    assert_eq!(check.active, 0);
    assert!(check.ident.is_none());
}

#[test]
#[allow(deprecated)]
fn version_1_rendition_is_empty() {
    crate::init_logs();

    let mut service = Service::new();
    service.premium = Some(true);
    service.go_green = Some(true);
    service.personal_handover = Some(true);

    let node = service.to_wire_v1(ProductType::NationalPackage);
    assert_eq!(node, Default::default());
}

#[test]
fn version_1_fields_never_reach_the_version_2_request() {
    let mut service = Service::new();
    service.go_green = Some(true);
    service.personal_handover = Some(true);

    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    assert_eq!(node, Default::default());
}
