use pocket_arena::data::roster::{RosterDatabase, MOVES_PER_CREATURE};

#[test]
fn default_roster_loads_the_full_catalog() {
    let roster = RosterDatabase::default();
    assert_eq!(roster.len(), 6);
    for entry in roster.entries() {
        assert_eq!(entry.moves.len(), MOVES_PER_CREATURE);
        assert!(entry.max_hp > 0);
        for mv in &entry.moves {
            assert!(mv.power >= 0);
            assert!((0..=100).contains(&mv.accuracy));
            assert!(mv.pp >= 0);
        }
        // every creature carries one utility move
        assert!(entry.moves.iter().any(|mv| mv.is_utility()));
    }
}

#[test]
fn minimal_fallback_matches_the_embedded_catalog() {
    let minimal = RosterDatabase::minimal();
    let embedded = RosterDatabase::load_default().expect("embedded roster parses");
    assert_eq!(minimal.len(), embedded.len());
    for (a, b) in minimal.entries().iter().zip(embedded.entries()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.max_hp, b.max_hp);
    }
}

#[test]
fn yaml_entries_keep_their_order() {
    let yaml = r#"
- name: First
  maxHp: 10
  attack: 5
  defense: 5
  moves:
    - { name: A, power: 10, accuracy: 100, pp: 5 }
    - { name: B, power: 10, accuracy: 100, pp: 5 }
    - { name: C, power: 0, accuracy: 100, pp: 5 }
- name: Second
  maxHp: 12
  attack: 6
  defense: 4
  moves:
    - { name: D, power: 10, accuracy: 100, pp: 5 }
    - { name: E, power: 10, accuracy: 100, pp: 5 }
    - { name: F, power: 0, accuracy: 100, pp: 5 }
"#;
    let roster = RosterDatabase::load_from_yaml_str(yaml).expect("valid roster");
    assert_eq!(roster.get(0).map(|c| c.name.as_str()), Some("First"));
    assert_eq!(roster.get(1).map(|c| c.name.as_str()), Some("Second"));
}

#[test]
fn wrong_move_count_is_rejected() {
    let yaml = r#"
- name: Short
  maxHp: 10
  attack: 5
  defense: 5
  moves:
    - { name: A, power: 10, accuracy: 100, pp: 5 }
"#;
    assert!(RosterDatabase::load_from_yaml_str(yaml).is_err());
}

#[test]
fn out_of_range_accuracy_is_rejected() {
    let yaml = r#"
- name: Wild
  maxHp: 10
  attack: 5
  defense: 5
  moves:
    - { name: A, power: 10, accuracy: 150, pp: 5 }
    - { name: B, power: 10, accuracy: 100, pp: 5 }
    - { name: C, power: 0, accuracy: 100, pp: 5 }
"#;
    assert!(RosterDatabase::load_from_yaml_str(yaml).is_err());
}
