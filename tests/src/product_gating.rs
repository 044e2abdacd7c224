use chrono::NaiveDate;
use dhl_bcs_sdk::enums::product_type::ProductType;
use dhl_bcs_sdk::enums::shipment_handling_type::ShipmentHandlingType;
use dhl_bcs_sdk::models::service::Service;

fn messenger_only_service() -> Service {
    let mut service = Service::new();
    service.day_of_delivery_enabled = Some(true);
    service.day_of_delivery_date = NaiveDate::from_ymd_opt(2026, 8, 7);
    service.delivery_timeframe_enabled = Some(true);
    service.delivery_timeframe = Some("10001230".to_string());
    service.individual_sender_requirements_enabled = Some(true);
    service.individual_sender_requirements_text = Some("Ring twice".to_string());
    service.shipment_handling_enabled = Some(true);
    service.shipment_handling_type = Some(ShipmentHandlingType::RemoveContentReturnBox);
    service
}

#[test]
fn messenger_services_emitted_for_messenger_products() {
    crate::init_logs();

    let service = messenger_only_service();

    for product in [ProductType::SameDayMessenger, ProductType::WishTimeMessenger] {
        let node = service.to_wire(product).unwrap();
        assert!(node.day_of_delivery.is_some());
        assert!(node.delivery_timeframe.is_some());
        assert!(node.individual_sender_requirement.is_some());
        assert!(node.shipment_handling.is_some());
    }
}

#[test]
fn messenger_services_suppressed_for_other_products() {
    let service = messenger_only_service();

    for product in [
        ProductType::NationalPackage,
        ProductType::InternationalPackage,
        ProductType::SameDayPackage,
        ProductType::AustriaPackage,
    ] {
        let node = service.to_wire(product).unwrap();
        assert!(node.day_of_delivery.is_none());
        assert!(node.delivery_timeframe.is_none());
        assert!(node.individual_sender_requirement.is_none());
        assert!(node.shipment_handling.is_none());
    }
}

#[test]
fn preferred_time_gated_on_package_products() {
    let mut service = Service::new();
    service.preferred_time_enabled = Some(true);
    service.preferred_time = Some("16001900".to_string());

    for product in [ProductType::NationalPackage, ProductType::SameDayPackage] {
        let node = service.to_wire(product).unwrap();
        assert!(node.preferred_time.is_some());
    }

    for product in [
        ProductType::SameDayMessenger,
        ProductType::WishTimeMessenger,
        ProductType::EuropaPackage,
    ] {
        let node = service.to_wire(product).unwrap();
        assert!(node.preferred_time.is_none());
    }
}

#[test]
fn return_immediately_only_for_same_day_package() {
    let mut service = Service::new();
    service.return_immediately_if_shipment_failed = Some(true);

    let node = service.to_wire(ProductType::SameDayPackage).unwrap();
    assert!(node.return_immediately.is_some());

    for product in ProductType::ALL {
        if product == ProductType::SameDayPackage {
            continue;
        }

        let node = service.to_wire(product).unwrap();
        assert!(node.return_immediately.is_none());
    }
}

#[test]
fn unrestricted_services_emitted_for_every_product() {
    let mut service = Service::new();
    service.packaging_return = Some(true);
    service.notice_on_non_deliverable = Some(true);
    service.perishables = Some(true);
    service.disable_neighbour_delivery = Some(true);
    service.named_person_only = Some(true);
    service.return_receipt = Some(true);
    service.premium = Some(true);
    service.bulky_goods = Some(true);

    for product in ProductType::ALL {
        let node = service.to_wire(product).unwrap();
        assert!(node.packaging_return.is_some());
        assert!(node.notice_of_non_deliverability.is_some());
        assert!(node.perishables.is_some());
        assert!(node.no_neighbour_delivery.is_some());
        assert!(node.named_person_only.is_some());
        assert!(node.return_receipt.is_some());
        assert!(node.premium.is_some());
        assert!(node.bulky_goods.is_some());
    }
}

#[test]
fn unset_services_emit_nothing() {
    let service = Service::new();

    for product in ProductType::ALL {
        let node = service.to_wire(product).unwrap();
        assert_eq!(node, Default::default());
    }
}

#[test]
fn suppressed_services_skip_their_required_details() {
    // Enabled without a date would be an error for a messenger product, but
    // the service never makes it into a national package request.
    let mut service = Service::new();
    service.day_of_delivery_enabled = Some(true);

    let node = service.to_wire(ProductType::NationalPackage).unwrap();
    assert!(node.day_of_delivery.is_none());

    assert!(service.to_wire(ProductType::SameDayMessenger).is_err());
}
