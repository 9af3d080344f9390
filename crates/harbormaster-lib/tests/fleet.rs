mod common;

use common::{fleet_catalog, ContainerFactory};
use harbormaster_lib::container::Container;
use harbormaster_lib::error::{CapacityLimit, Error, ErrorKind};
use harbormaster_lib::events::{CargoEvent, EventLog};
use harbormaster_lib::fleet::Fleet;

fn fixture_fleet() -> Fleet {
    Fleet::from_catalog(&fleet_catalog()).expect("fixture fleet is valid")
}

#[test]
fn fleet_is_built_from_catalog_in_name_order() {
    let fleet = fixture_fleet();
    let names: Vec<&str> = fleet.ships().map(|ship| ship.name()).collect();

    assert_eq!(names, vec!["Aurora", "Borealis", "Cygnus"]);
    assert_eq!(fleet.container_count(), 0);
    assert_eq!(fleet.ship("cygnus").map(|s| s.attributes().max_containers), Some(2));
}

#[test]
fn transfer_by_name_moves_container_and_keeps_totals() {
    let mut fleet = fixture_fleet();
    let mut factory = ContainerFactory::new();
    let mut log = EventLog::new();
    let reefer = factory.refrigerated("Fish");
    let serial = reefer.serial();

    fleet
        .require_mut("aurora")
        .unwrap()
        .load(reefer, &mut log)
        .unwrap();
    let total_before = fleet.total_mass_kg();

    fleet
        .transfer("Aurora", "Cygnus", serial, &mut log)
        .expect("cygnus has room");

    assert_eq!(fleet.locate(serial).map(|s| s.name()), Some("Cygnus"));
    assert_eq!(fleet.total_mass_kg(), total_before);
    match log.events().last() {
        Some(CargoEvent::ContainerTransferred { from, to, .. }) => {
            assert_eq!((from.as_str(), to.as_str()), ("Aurora", "Cygnus"));
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn transfer_to_a_full_ship_leaves_everything_in_place() {
    let mut fleet = fixture_fleet();
    let mut factory = ContainerFactory::new();
    let mut log = EventLog::new();

    let cygnus = fleet.require_mut("Cygnus").unwrap();
    cygnus.load(factory.standard(10.0), &mut log).unwrap();
    cygnus.load(factory.standard(10.0), &mut log).unwrap();

    let cargo = factory.liquid(false);
    let serial = cargo.serial();
    fleet
        .require_mut("Borealis")
        .unwrap()
        .load(cargo, &mut log)
        .unwrap();
    let before = fleet.status();

    let err = fleet
        .transfer("Borealis", "Cygnus", serial, &mut log)
        .expect_err("cygnus has no free slot");

    assert!(matches!(
        err,
        Error::CapacityExceeded {
            limit: CapacityLimit::Slots,
            ..
        }
    ));
    assert_eq!(fleet.status(), before);
    assert_eq!(fleet.locate(serial).map(|s| s.name()), Some("Borealis"));
}

#[test]
fn transfer_between_unknown_ships_is_not_found() {
    let mut fleet = fixture_fleet();
    let mut factory = ContainerFactory::new();
    let mut log = EventLog::new();
    let serial = factory.gas().serial();

    let err = fleet
        .transfer("Aurora", "Titanic", serial, &mut log)
        .expect_err("no such ship");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("Titanic"));
    assert!(log.is_empty());
}
