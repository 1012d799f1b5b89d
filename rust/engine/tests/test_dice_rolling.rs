use yacht_engine::dice::Hand;
use yacht_engine::roller::DiceRoller;
use yacht_engine::rules::GameRules;

#[test]
fn rolls_respect_die_count_and_faces() {
    let rules = GameRules::default();
    let mut roller = DiceRoller::new_with_seed(42, rules).unwrap();
    for _ in 0..1000 {
        let hand = roller.roll();
        assert!(hand.validate_for(&rules).is_ok(), "{}", hand);
    }
}

#[test]
fn same_seed_yields_same_hands() {
    let mut a = DiceRoller::new_with_seed(12345, GameRules::default()).unwrap();
    let mut b = DiceRoller::new_with_seed(12345, GameRules::default()).unwrap();
    let ha: Vec<Hand> = (0..10).map(|_| a.roll()).collect();
    let hb: Vec<Hand> = (0..10).map(|_| b.roll()).collect();
    assert_eq!(ha, hb, "same seed must yield identical hands");
}

#[test]
fn different_seeds_differ() {
    let mut a = DiceRoller::new_with_seed(1, GameRules::default()).unwrap();
    let mut b = DiceRoller::new_with_seed(2, GameRules::default()).unwrap();
    let ha: Vec<Hand> = (0..10).map(|_| a.roll()).collect();
    let hb: Vec<Hand> = (0..10).map(|_| b.roll()).collect();
    assert_ne!(
        ha, hb,
        "different seeds should produce different hands (high probability)"
    );
}

#[test]
fn every_face_eventually_appears() {
    let mut roller = DiceRoller::new_with_seed(7, GameRules::default()).unwrap();
    let mut seen = [false; 9];
    for _ in 0..200 {
        for &v in roller.roll().values() {
            seen[v as usize] = true;
        }
    }
    assert!(seen[1..].iter().all(|&s| s));
    assert!(!seen[0]);
}

#[test]
fn custom_rules_shape_the_hand() {
    let rules = GameRules {
        dice: 6,
        faces: 6,
        ..GameRules::default()
    };
    let mut roller = DiceRoller::new_with_seed(3, rules).unwrap();
    let hand = roller.roll();
    assert_eq!(hand.len(), 6);
    assert!(hand.values().iter().all(|&v| (1..=6).contains(&v)));
    assert_eq!(roller.rules(), &rules);
}
