//! Scenario tests for network queries, journey planning and fares.

use super::*;
use crate::domain::{Crs, Station};
use crate::fare::{FareModel, fare};

fn crs(s: &str) -> Crs {
    Crs::parse(s).unwrap()
}

fn station(code: &str, region: &str, lat: f64, lon: f64, hub: bool) -> Station {
    Station::new(format!("{code} Station"), region, code, lat, lon, hub).unwrap()
}

/// Two regions with hubs and one without.
///
/// ```text
/// north: LDS (hub), YRK (hub), HGT, SKP
/// south: KGX (hub), CLJ (hub), BTN
/// east:  NRW (no hubs)
/// ```
fn sample_network() -> RailNetwork {
    RailNetwork::new(vec![
        station("LDS", "north", 53.795, -1.548, true),
        station("HGT", "north", 53.993, -1.538, false),
        station("YRK", "north", 53.958, -1.093, true),
        station("KGX", "south", 51.532, -0.124, true),
        station("BTN", "south", 50.829, -0.141, false),
        station("CLJ", "south", 51.464, -0.170, true),
        station("NRW", "east", 52.627, 1.306, false),
        station("SKP", "north", 53.958, -2.026, false),
    ])
    .unwrap()
}

fn get<'a>(network: &'a RailNetwork, code: &str) -> &'a Station {
    network.station(&crs(code)).unwrap()
}

fn codes(journey: &Journey<'_>) -> Vec<String> {
    journey
        .stops()
        .iter()
        .map(|s| s.crs().to_string())
        .collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn duplicate_codes_rejected() {
    let result = RailNetwork::new(vec![
        station("ABC", "aaaa", 1.0, 1.0, false),
        station("DEF", "aaaa", 1.0, 1.0, false),
        station("ABC", "bbbb", 2.0, 2.0, true),
    ]);
    assert_eq!(result.unwrap_err(), NetworkError::DuplicateCode(crs("ABC")));
}

#[test]
fn one_entry_per_code() {
    let network = sample_network();
    assert_eq!(network.station_count(), 8);
    for s in network.stations() {
        assert_eq!(network.station(&s.crs()).unwrap().name(), s.name());
    }
    assert!(network.contains(&crs("BTN")));
    assert!(!network.contains(&crs("XYZ")));
    assert!(network.station(&crs("XYZ")).is_none());
}

#[test]
fn empty_network() {
    let network = RailNetwork::new(Vec::new()).unwrap();
    assert!(network.is_empty());
    assert_eq!(network.station_count(), 0);
    assert!(network.regions().is_empty());
    assert!(network.hub_stations(None).is_empty());
}

#[test]
fn stations_keep_insertion_order() {
    let network = sample_network();
    let order: Vec<_> = network.stations().iter().map(|s| s.crs().to_string()).collect();
    assert_eq!(order, ["LDS", "HGT", "YRK", "KGX", "BTN", "CLJ", "NRW", "SKP"]);
}

// ============================================================================
// Regions and hubs
// ============================================================================

#[test]
fn regions_first_seen_order_without_repeats() {
    let network = sample_network();
    assert_eq!(network.regions(), vec!["north", "south", "east"]);
}

#[test]
fn hub_stations_all_and_filtered() {
    let network = sample_network();

    let all: Vec<_> = network
        .hub_stations(None)
        .iter()
        .map(|s| s.crs().to_string())
        .collect();
    assert_eq!(all, ["LDS", "YRK", "KGX", "CLJ"]);

    let south: Vec<_> = network
        .hub_stations(Some("south"))
        .iter()
        .map(|s| s.crs().to_string())
        .collect();
    assert_eq!(south, ["KGX", "CLJ"]);

    assert!(network.hub_stations(Some("east")).is_empty());
    assert!(network.hub_stations(Some("nowhere")).is_empty());
}

#[test]
fn hub_count_per_region() {
    let network = sample_network();
    assert_eq!(network.hub_count("north"), 2);
    assert_eq!(network.hub_count("south"), 2);
    assert_eq!(network.hub_count("east"), 0);
}

#[test]
fn closest_hub_picks_nearest_in_region() {
    let network = sample_network();
    assert_eq!(network.closest_hub(get(&network, "HGT")).unwrap().crs(), crs("LDS"));
    assert_eq!(network.closest_hub(get(&network, "BTN")).unwrap().crs(), crs("CLJ"));
}

#[test]
fn hub_is_its_own_closest_hub() {
    let network = sample_network();
    assert_eq!(network.closest_hub(get(&network, "YRK")).unwrap().crs(), crs("YRK"));
}

#[test]
fn closest_hub_ignores_other_regions() {
    // KGX is far nearer to the ordinary station but lives in another region.
    let network = RailNetwork::new(vec![
        station("FAR", "north", 55.0, -1.0, true),
        station("KGX", "south", 51.53, -0.12, true),
        station("STN", "north", 51.54, -0.13, false),
    ])
    .unwrap();
    let stn = get(&network, "STN");
    assert_eq!(network.closest_hub(stn).unwrap().crs(), crs("FAR"));
}

#[test]
fn closest_hub_tie_goes_to_first_in_network() {
    let network = RailNetwork::new(vec![
        station("MID", "r", 0.0, 0.0, false),
        station("FST", "r", 0.0, 1.0, true),
        station("SND", "r", 0.0, 1.0, true),
    ])
    .unwrap();
    assert_eq!(network.closest_hub(get(&network, "MID")).unwrap().crs(), crs("FST"));
}

#[test]
fn closest_hub_not_in_network() {
    let network = sample_network();
    let outsider = station("XYZ", "north", 53.0, -1.0, false);
    assert_eq!(
        network.closest_hub(&outsider).unwrap_err(),
        NetworkError::NotInNetwork(crs("XYZ"))
    );
}

#[test]
fn closest_hub_measures_from_station_as_given() {
    let network = sample_network();
    // Same code as Harrogate, but placed in the south next to Brighton.
    let moved = station("HGT", "south", 50.83, -0.14, false);
    assert_eq!(network.closest_hub(&moved).unwrap().crs(), crs("CLJ"));

    // And the planner agrees with it on which region that is.
    let journey = network
        .journey_planner(&moved, get(&network, "BTN"))
        .unwrap();
    assert_eq!(journey.stops(), &[&moved, get(&network, "BTN")]);
    let journey = network
        .journey_planner(&moved, get(&network, "LDS"))
        .unwrap();
    assert_eq!(codes(&journey), ["HGT", "CLJ", "LDS"]);
}

#[test]
fn closest_hub_no_hub_in_region() {
    let network = RailNetwork::new(vec![
        station("ABC", "aaaa", 1.0, 1.0, false),
        station("DEF", "aaaa", 1.0, 1.0, false),
    ])
    .unwrap();
    assert_eq!(
        network.closest_hub(get(&network, "DEF")).unwrap_err(),
        NetworkError::NoHubInRegion("aaaa".into())
    );
}

// ============================================================================
// Journey planning
// ============================================================================

#[test]
fn same_region_is_direct_even_with_hubs() {
    let network = sample_network();
    let journey = network
        .journey_planner(get(&network, "HGT"), get(&network, "SKP"))
        .unwrap();
    assert_eq!(codes(&journey), ["HGT", "SKP"]);
}

#[test]
fn same_region_needs_no_membership() {
    let network = sample_network();
    let a = station("AAA", "west", 1.0, 1.0, false);
    let b = station("BBB", "west", 1.0, 2.0, false);
    let journey = network.journey_planner(&a, &b).unwrap();
    assert_eq!(journey.stops(), &[&a, &b]);
}

#[test]
fn cross_region_via_both_hubs() {
    let network = sample_network();
    let journey = network
        .journey_planner(get(&network, "HGT"), get(&network, "BTN"))
        .unwrap();
    assert_eq!(codes(&journey), ["HGT", "LDS", "CLJ", "BTN"]);
}

#[test]
fn cross_region_from_hub_skips_start_hub() {
    let network = sample_network();
    let journey = network
        .journey_planner(get(&network, "YRK"), get(&network, "BTN"))
        .unwrap();
    assert_eq!(codes(&journey), ["YRK", "CLJ", "BTN"]);
}

#[test]
fn cross_region_to_hub_skips_dest_hub() {
    let network = sample_network();
    let journey = network
        .journey_planner(get(&network, "HGT"), get(&network, "KGX"))
        .unwrap();
    assert_eq!(codes(&journey), ["HGT", "LDS", "KGX"]);
}

#[test]
fn hub_to_hub_is_direct() {
    let network = sample_network();
    let journey = network
        .journey_planner(get(&network, "LDS"), get(&network, "KGX"))
        .unwrap();
    assert_eq!(codes(&journey), ["LDS", "KGX"]);
}

#[test]
fn cross_region_into_hubless_region_fails() {
    let network = sample_network();
    let err = network
        .journey_planner(get(&network, "HGT"), get(&network, "NRW"))
        .unwrap_err();
    assert_eq!(err, NetworkError::NoHubInRegion("east".into()));
}

#[test]
fn cross_region_with_outsider_fails() {
    let network = sample_network();
    let outsider = station("XYZ", "west", 52.0, -3.0, false);
    let err = network
        .journey_planner(&outsider, get(&network, "BTN"))
        .unwrap_err();
    assert_eq!(err, NetworkError::NotInNetwork(crs("XYZ")));
}

// ============================================================================
// Fares
// ============================================================================

#[test]
fn same_region_reference_fare() {
    let network = RailNetwork::new(vec![
        station("ABC", "aaaa", 5.0, 41.4, false),
        station("DEF", "aaaa", 5.0, 41.5, false),
    ])
    .unwrap();
    let a = get(&network, "ABC");
    let b = get(&network, "DEF");

    let distance = a.distance_to(b);
    assert!((distance - 11.0772).abs() < 1e-3);

    let total = network.journey_fare(a, b).unwrap();
    assert!((total - fare(distance, false, 0)).abs() < 1e-12);
    assert!((total - fare(11.0772, false, 0)).abs() < 1e-3);
}

#[test]
fn fare_to_self_is_base() {
    let network = sample_network();
    let btn = get(&network, "BTN");
    assert_eq!(network.journey_fare(btn, btn).unwrap(), 1.0);
}

#[test]
fn multi_leg_fare_is_sum_of_legs() {
    let network = sample_network();
    let hgt = get(&network, "HGT");
    let lds = get(&network, "LDS");
    let clj = get(&network, "CLJ");
    let btn = get(&network, "BTN");

    let quote = network.journey_quote(hgt, btn).unwrap();
    assert_eq!(quote.legs().len(), 3);

    // Leg hub counts use the region each leg arrives in.
    let expected = [
        (hgt, lds, false, 2),
        (lds, clj, true, 2),
        (clj, btn, false, 2),
    ];
    for (leg, (from, to, crosses, hubs)) in quote.legs().iter().zip(expected) {
        assert_eq!(leg.from, from);
        assert_eq!(leg.to, to);
        assert_eq!(leg.crosses_region, crosses);
        assert_eq!(leg.dest_region_hubs, hubs);
        assert!((leg.distance_km - from.distance_to(to)).abs() < 1e-12);
        assert!((leg.fare - fare(leg.distance_km, crosses, hubs)).abs() < 1e-12);
    }

    let sum: f64 = quote.legs().iter().map(|l| l.fare).sum();
    assert!((quote.total() - sum).abs() < 1e-12);
    assert!((network.journey_fare(hgt, btn).unwrap() - sum).abs() < 1e-12);
}

#[test]
fn hub_surcharge_uses_each_legs_arrival_region() {
    // The crossing leg arrives in "big" (three hubs) even though the overall
    // destination region is also "big"; a return trip arrives in "small".
    let network = RailNetwork::new(vec![
        station("SMA", "small", 0.0, 0.0, true),
        station("BGA", "big", 0.0, 1.0, true),
        station("BGB", "big", 10.0, 10.0, true),
        station("BGC", "big", -10.0, -10.0, true),
    ])
    .unwrap();
    let sma = get(&network, "SMA");
    let bga = get(&network, "BGA");
    let d = sma.distance_to(bga);

    let out = network.journey_fare(sma, bga).unwrap();
    assert!((out - fare(d, true, 3)).abs() < 1e-12);

    let back = network.journey_fare(bga, sma).unwrap();
    assert!((back - fare(d, true, 1)).abs() < 1e-12);
    assert!(out > back);
}

#[test]
fn custom_fare_model_prices_legs() {
    let model = FareModel::new(3.0, 100.0, 10.0);
    let network = RailNetwork::with_fare_model(
        vec![
            station("ABC", "aaaa", 5.0, 41.4, false),
            station("DEF", "aaaa", 5.0, 41.5, false),
        ],
        model,
    )
    .unwrap();
    let a = get(&network, "ABC");
    let b = get(&network, "DEF");
    assert_eq!(network.fare_model(), &model);
    let expected = model.price(a.distance_to(b), false, 0);
    assert!((network.journey_fare(a, b).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn fare_errors_propagate() {
    let network = sample_network();
    let err = network
        .journey_fare(get(&network, "NRW"), get(&network, "KGX"))
        .unwrap_err();
    assert_eq!(err, NetworkError::NoHubInRegion("east".into()));
}

#[test]
fn fares_to_covers_every_station() {
    let network = RailNetwork::new(vec![
        station("LDS", "north", 53.795, -1.548, true),
        station("HGT", "north", 53.993, -1.538, false),
        station("KGX", "south", 51.532, -0.124, true),
    ])
    .unwrap();
    let fares = network.fares_to(&crs("KGX")).unwrap();
    let order: Vec<_> = fares.iter().map(|(s, _)| s.crs().to_string()).collect();
    assert_eq!(order, ["LDS", "HGT", "KGX"]);

    let kgx = get(&network, "KGX");
    for (start, total) in &fares {
        assert_eq!(*total, network.journey_fare(start, kgx).unwrap());
    }
    assert_eq!(fares[2].1, 1.0);
}

#[test]
fn fares_to_unknown_destination() {
    let network = sample_network();
    assert_eq!(
        network.fares_to(&crs("XYZ")).unwrap_err(),
        NetworkError::NotInNetwork(crs("XYZ"))
    );
}

// ============================================================================
// Summary
// ============================================================================

#[test]
fn summary_lists_route_and_fare() {
    let network = sample_network();
    let quote = network
        .journey_quote(get(&network, "HGT"), get(&network, "BTN"))
        .unwrap();
    let text = quote.to_string();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0], "Journey from HGT Station (HGT) to BTN Station (BTN)");
    assert_eq!(
        lines[1],
        "Route: HGT -> LDS (LDS Station) -> CLJ (CLJ Station) -> BTN"
    );
    assert_eq!(lines[2], format!("Fare: £{:.2}", quote.total()));
}

#[test]
fn summary_for_direct_journey() {
    let network = sample_network();
    let quote = network
        .journey_quote(get(&network, "HGT"), get(&network, "SKP"))
        .unwrap();
    let text = quote.to_string();
    assert!(text.contains("Route: HGT -> SKP\n"));
}
