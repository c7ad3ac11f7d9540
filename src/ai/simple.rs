use crate::core::session::Difficulty;
use crate::core::state::{Combatant, TurnAction};
use crate::core::utils::uniform_int;

/// CPU action policy. Pure decision function: the roll and the move table
/// are the whole strategy, no search.
///
/// EASY spreads rolls across all three moves with an occasional retreat.
/// HARD locks onto the strongest move that still has PP and retreats on the
/// remaining 15%.
pub fn choose_action(
    combatant: &Combatant,
    difficulty: Difficulty,
    rng: &mut dyn FnMut() -> f64,
) -> TurnAction {
    match difficulty {
        Difficulty::Easy => {
            let r = uniform_int(rng, 1, 100);
            if r <= 35 {
                TurnAction::Move(0)
            } else if r <= 70 {
                TurnAction::Move(1)
            } else if r <= 85 {
                TurnAction::Move(2)
            } else {
                TurnAction::Retreat
            }
        }
        Difficulty::Hard => {
            let mut best = 0;
            for (i, slot) in combatant.moves.iter().enumerate() {
                if slot.data.power > combatant.moves[best].data.power && slot.pp > 0 {
                    best = i;
                }
            }
            if uniform_int(rng, 1, 100) <= 85 {
                TurnAction::Move(best)
            } else {
                TurnAction::Retreat
            }
        }
    }
}
