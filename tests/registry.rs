use std::thread;

use checkers_core::config::MAX_MATCHES_VAR;
use checkers_core::{Coord, EngineError, MatchRegistry, Phase, RegistryConfig, Side};

fn c(x: i8, y: i8) -> Coord {
    Coord::new(x, y)
}

#[test]
fn create_activate_and_view() {
    let reg = MatchRegistry::default();
    let id = reg.create().unwrap();
    assert_eq!(reg.len(), 1);

    let (act, view) = reg.activate(id, c(2, 6), Side::White).unwrap();
    assert!(act.changed());
    assert_eq!(view.phase, Phase::Selected);
    assert_eq!(reg.view(id).unwrap(), view);
}

#[test]
fn ids_are_distinct_and_listed_in_order() {
    let reg = MatchRegistry::default();
    let a = reg.create().unwrap();
    let b = reg.create().unwrap();
    let d = reg.create().unwrap();
    assert!(a < b && b < d);
    assert_eq!(reg.ids(), vec![a, b, d]);

    reg.remove(b).unwrap();
    assert_eq!(reg.ids(), vec![a, d]);
    assert!(matches!(reg.remove(b), Err(EngineError::UnknownMatch(x)) if x == b));
}

#[test]
fn unknown_matches_are_errors() {
    let reg = MatchRegistry::default();
    let id = reg.create().unwrap();
    reg.remove(id).unwrap();
    assert!(reg.is_empty());
    assert!(matches!(reg.view(id), Err(EngineError::UnknownMatch(_))));
    assert!(matches!(
        reg.activate(id, c(2, 6), Side::White),
        Err(EngineError::UnknownMatch(_))
    ));
}

#[test]
fn bad_coordinates_surface_through_the_registry() {
    let reg = MatchRegistry::default();
    let id = reg.create().unwrap();
    assert!(matches!(
        reg.activate(id, c(9, 9), Side::White),
        Err(EngineError::Board(_))
    ));
    assert_eq!(reg.view(id).unwrap().version, 0);
}

#[test]
fn capacity_limit_is_enforced() {
    let reg = MatchRegistry::new(RegistryConfig::new().with_max_matches(Some(2)));
    let a = reg.create().unwrap();
    reg.create().unwrap();
    assert!(matches!(
        reg.create(),
        Err(EngineError::RegistryFull { limit: 2 })
    ));

    reg.remove(a).unwrap();
    assert!(reg.create().is_ok());
}

#[test]
fn reset_replaces_the_match_in_place() {
    let reg = MatchRegistry::default();
    let id = reg.create().unwrap();
    reg.activate(id, c(2, 6), Side::White).unwrap();
    reg.activate(id, c(1, 5), Side::White).unwrap();

    let view = reg.reset(id).unwrap();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.turn_owner, Side::White);
    assert_eq!(view.version, 3);
}

#[test]
fn snapshot_and_restore_give_an_equal_match() {
    let reg = MatchRegistry::default();
    let id = reg.create().unwrap();
    reg.activate(id, c(4, 6), Side::White).unwrap();

    let text = reg.snapshot(id).unwrap();
    let copy = reg.restore(&text).unwrap();
    assert_ne!(copy, id);
    assert_eq!(reg.view(copy).unwrap(), reg.view(id).unwrap());

    // the two evolve independently
    reg.activate(copy, c(5, 5), Side::White).unwrap();
    assert_eq!(reg.view(id).unwrap().phase, Phase::Selected);
    assert_eq!(reg.view(copy).unwrap().turn_owner, Side::Black);
}

#[test]
fn matches_run_in_parallel() {
    let reg = MatchRegistry::default();
    let ids: Vec<_> = (0..8).map(|_| reg.create().unwrap()).collect();

    thread::scope(|s| {
        for &id in &ids {
            let reg = &reg;
            s.spawn(move || {
                reg.activate(id, c(2, 6), Side::White).unwrap();
                reg.activate(id, c(3, 5), Side::White).unwrap();
                reg.activate(id, c(3, 3), Side::Black).unwrap();
                reg.activate(id, c(4, 4), Side::Black).unwrap();
            });
        }
    });

    for id in ids {
        let view = reg.view(id).unwrap();
        assert_eq!(view.turn_owner, Side::White);
        assert_eq!(view.version, 4);
    }
}

#[test]
fn concurrent_clicks_on_one_match_are_linearized() {
    let reg = MatchRegistry::default();
    let id = reg.create().unwrap();

    let changed: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let reg = &reg;
                s.spawn(move || {
                    let (act, _) = reg.activate(id, c(2, 6), Side::White).unwrap();
                    act.changed() as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    // the first click selects, every later one lands on a non-destination
    assert_eq!(changed, 1);
    assert_eq!(reg.view(id).unwrap().version, 1);
}

#[test]
fn config_reads_capacity_from_a_lookup() {
    let cfg = RegistryConfig::from_lookup(|k| (k == MAX_MATCHES_VAR).then(|| "5".to_string()))
        .unwrap();
    assert_eq!(cfg.max_matches, Some(5));

    let unlimited = RegistryConfig::from_lookup(|_| Some("0".to_string())).unwrap();
    assert_eq!(unlimited.max_matches, None);

    let unset = RegistryConfig::from_lookup(|_| None).unwrap();
    assert_eq!(unset, RegistryConfig::default());

    assert!(matches!(
        RegistryConfig::from_lookup(|_| Some("many".to_string())),
        Err(EngineError::InvalidConfig { .. })
    ));
}
