use crate::core::state::{Combatant, MoveSlot};
use crate::data::roster::CreatureData;

/// Copy-initialize a live combatant from a catalog template: full HP, defend
/// cleared, every move at its maximum PP.
pub fn create_combatant(data: &CreatureData) -> Combatant {
    Combatant {
        name: data.name.clone(),
        max_hp: data.max_hp,
        hp: data.max_hp,
        attack: data.attack,
        defense: data.defense,
        moves: data
            .moves
            .iter()
            .map(|mv| MoveSlot {
                pp: mv.pp,
                data: mv.clone(),
            })
            .collect(),
        defending: false,
    }
}
