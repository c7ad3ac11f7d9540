use pocket_arena::core::state::{Combatant, MoveSlot, NoPpError};
use pocket_arena::data::roster::MoveData;

fn combatant() -> Combatant {
    let mv = MoveData {
        name: "Jolt".to_string(),
        power: 40,
        accuracy: 100,
        pp: 2,
    };
    Combatant {
        name: "Unit".to_string(),
        max_hp: 30,
        hp: 30,
        attack: 10,
        defense: 8,
        moves: vec![MoveSlot {
            pp: mv.pp,
            data: mv,
        }],
        defending: false,
    }
}

#[test]
fn apply_damage_clamps_at_zero() {
    let mut unit = combatant();
    let applied = unit.apply_damage(100);
    assert_eq!(applied, 100);
    assert_eq!(unit.hp, 0);
    assert!(unit.is_fainted());
}

#[test]
fn defending_halves_one_hit_then_clears() {
    let mut unit = combatant();
    unit.defending = true;

    let applied = unit.apply_damage(17);
    assert_eq!(applied, 9); // (17 + 1) / 2
    assert_eq!(unit.hp, 21);
    assert!(!unit.defending);

    // the next hit lands at full strength
    let applied = unit.apply_damage(17);
    assert_eq!(applied, 17);
    assert_eq!(unit.hp, 4);
}

#[test]
fn heal_never_exceeds_max_hp() {
    let mut unit = combatant();
    unit.hp = 28;
    unit.heal(8);
    assert_eq!(unit.hp, 30);
}

#[test]
fn use_move_spends_pp_and_rejects_empty_slots() {
    let mut unit = combatant();
    assert!(unit.use_move(0).is_ok());
    assert!(unit.use_move(0).is_ok());
    assert_eq!(unit.moves[0].pp, 0);
    assert_eq!(unit.use_move(0), Err(NoPpError));
    assert_eq!(unit.moves[0].pp, 0);
}

#[test]
fn use_move_rejects_unknown_index() {
    let mut unit = combatant();
    assert_eq!(unit.use_move(5), Err(NoPpError));
}

#[test]
fn reset_restores_hp_and_clamps_negative_pp() {
    let mut unit = combatant();
    unit.hp = 2;
    unit.defending = true;
    unit.moves[0].pp = -1;

    unit.reset();

    assert_eq!(unit.hp, unit.max_hp);
    assert!(!unit.defending);
    assert_eq!(unit.moves[0].pp, 0);
}
