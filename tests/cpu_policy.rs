use pocket_arena::ai::choose_action;
use pocket_arena::core::session::Difficulty;
use pocket_arena::core::state::{Combatant, MoveSlot, TurnAction};
use pocket_arena::data::roster::MoveData;

fn mv(name: &str, power: i32, pp: i32) -> MoveSlot {
    MoveSlot {
        data: MoveData {
            name: name.to_string(),
            power,
            accuracy: 100,
            pp,
        },
        pp,
    }
}

fn combatant(powers: [i32; 3]) -> Combatant {
    Combatant {
        name: "Unit".to_string(),
        max_hp: 40,
        hp: 40,
        attack: 10,
        defense: 8,
        moves: vec![
            mv("First", powers[0], 10),
            mv("Second", powers[1], 10),
            mv("Third", powers[2], 10),
        ],
        defending: false,
    }
}

// uniform_int(rng, 1, 100) yields 1 + floor(f * 100)
fn roll(f: f64) -> impl FnMut() -> f64 {
    move || f
}

#[test]
fn easy_roll_table_boundaries() {
    let unit = combatant([40, 30, 0]);
    // mid-bucket draws: 0.345 -> roll 35, 0.355 -> roll 36, and so on, kept
    // clear of exact f64 bucket edges
    let cases = [
        (0.005, TurnAction::Move(0)), // roll 1
        (0.345, TurnAction::Move(0)), // roll 35
        (0.355, TurnAction::Move(1)), // roll 36
        (0.695, TurnAction::Move(1)), // roll 70
        (0.705, TurnAction::Move(2)), // roll 71
        (0.845, TurnAction::Move(2)), // roll 85
        (0.855, TurnAction::Retreat), // roll 86
        (0.995, TurnAction::Retreat), // roll 100
    ];
    for (f, expected) in cases {
        let mut rng = roll(f);
        assert_eq!(
            choose_action(&unit, Difficulty::Easy, &mut rng),
            expected,
            "draw {}",
            f
        );
    }
}

#[test]
fn hard_prefers_the_strongest_move() {
    let unit = combatant([40, 50, 0]);
    let mut rng = roll(0.0);
    assert_eq!(
        choose_action(&unit, Difficulty::Hard, &mut rng),
        TurnAction::Move(1)
    );
}

#[test]
fn hard_skips_moves_with_no_pp() {
    let mut unit = combatant([40, 50, 0]);
    unit.moves[1].pp = 0;
    let mut rng = roll(0.0);
    assert_eq!(
        choose_action(&unit, Difficulty::Hard, &mut rng),
        TurnAction::Move(0)
    );
}

#[test]
fn hard_breaks_power_ties_on_first_occurrence() {
    let unit = combatant([50, 50, 0]);
    let mut rng = roll(0.0);
    assert_eq!(
        choose_action(&unit, Difficulty::Hard, &mut rng),
        TurnAction::Move(0)
    );
}

#[test]
fn hard_retreats_on_rolls_above_85() {
    let unit = combatant([40, 50, 0]);
    let mut rng = roll(0.855); // roll 86
    assert_eq!(
        choose_action(&unit, Difficulty::Hard, &mut rng),
        TurnAction::Retreat
    );
}
