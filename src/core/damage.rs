use crate::core::session::Difficulty;
use crate::core::state::Combatant;
use crate::core::utils::uniform_int;
use crate::data::roster::MoveData;

pub const MIN_DAMAGE: i32 = 1;
pub const HARD_DAMAGE_MULT: f64 = 1.08;

/// Damage formula. Pure in its inputs plus the injected random source; the
/// variance roll is drawn before the difficulty multiplier is applied, and
/// callers that replay rng sequences depend on that order. The HARD
/// multiplier applies to both sides, not only the CPU seat.
pub fn compute_damage(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &MoveData,
    difficulty: Difficulty,
    rng: &mut dyn FnMut() -> f64,
) -> i32 {
    let mut base = attacker.attack as f64 - defender.defense as f64 * 0.45;
    if base < 1.0 {
        base = 1.0;
    }
    let mut raw = base * (mv.power as f64 / 20.0);
    let variance = uniform_int(rng, 85, 100) as f64 / 100.0;
    if difficulty == Difficulty::Hard {
        raw *= HARD_DAMAGE_MULT;
    }
    raw *= variance;
    // round half up, never below the floor
    let dmg = (raw + 0.5).floor() as i32;
    dmg.max(MIN_DAMAGE)
}
