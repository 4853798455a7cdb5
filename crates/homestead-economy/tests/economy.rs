//! The economy bundle as a whole: loading, counting, and snapshots.
#![allow(clippy::unwrap_used)]

use homestead_economy::{Economy, Settlement};
use homestead_types::BuildingKind;

#[test]
fn partial_document_fills_in_defaults() {
    let economy: Economy = serde_json::from_str(
        r#"{
            "settlement": { "population_count": 30, "animals": [{ "kind": "Fox" }] },
            "resources": { "gold_count": 5 }
        }"#,
    )
    .unwrap();
    assert_eq!(economy.settlement.population_count, 30);
    assert_eq!(economy.settlement.name, Settlement::default().name);
    assert_eq!(economy.settlement.animals.len(), 1);
    assert_eq!(economy.resources.gold_count, 5);
    assert_eq!(economy.resources.food_count, Economy::default().resources.food_count);
    let military = &economy.military;
    assert_eq!(military.attack_units_count, Economy::default().military.attack_units_count);
    assert_eq!(military.buildings.len(), 2);
}

#[test]
fn collections_are_not_shared_between_instances() {
    let mut first = Economy::default();
    let second = Economy::default();
    first.resources.add_building(BuildingKind::Gold);
    first.settlement.spawn_animal(homestead_types::AnimalKind::Bunny);
    assert!(second.resources.buildings.is_empty());
    assert!(second.settlement.animals.is_empty());
}

#[test]
fn buildings_count_spans_every_aggregate() {
    let mut economy = Economy::default();
    let base = economy.buildings_count();
    economy.settlement.houses_count = 2;
    economy.resources.add_building(BuildingKind::Food);
    economy.military.add_building(BuildingKind::Defense);
    assert_eq!(economy.buildings_count(), base + 2 + 1 + 1);
}

#[test]
fn wealth_is_food_plus_gold() {
    let mut economy = Economy::default();
    economy.resources.food_count = 120;
    economy.resources.gold_count = 380;
    assert_eq!(economy.wealth(), 500);
    let snapshot = economy.snapshot();
    assert_eq!(snapshot.food_count + snapshot.gold_count, 500);
}

#[test]
fn military_counters_match_instances() {
    let economy: Economy = serde_json::from_str(
        r#"{ "military": { "attack_buildings_count": 2, "defense_buildings_count": 0, "buildings": [] } }"#,
    )
    .unwrap();
    let mut military = economy.military;
    military.fill_buildings();
    let attacks = military
        .buildings
        .iter()
        .filter(|b| b.kind == BuildingKind::Attack)
        .count();
    assert_eq!(attacks, 2);
    assert_eq!(military.buildings.len(), 2);
}
