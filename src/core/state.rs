use crate::data::roster::MoveData;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    P1,
    P2,
}

impl Slot {
    pub fn opponent(self) -> Slot {
        match self {
            Slot::P1 => Slot::P2,
            Slot::P2 => Slot::P1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Slot::P1 => 0,
            Slot::P2 => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::P1 => "Player 1",
            Slot::P2 => "Player 2",
        }
    }
}

/// Returned when a move with 0 remaining PP is used. Handled locally by
/// re-prompting the same actor; never escapes the turn loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoPpError;

impl fmt::Display for NoPpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no PP left for that move")
    }
}

impl std::error::Error for NoPpError {}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveSlot {
    pub data: MoveData,
    pub pp: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub max_hp: i32,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub defending: bool,
}

impl Combatant {
    /// Restores HP and clears the defend flag. PP is not refilled; only
    /// negative counters are clamped back to 0.
    pub fn reset(&mut self) {
        self.hp = self.max_hp;
        self.defending = false;
        for slot in &mut self.moves {
            if slot.pp < 0 {
                slot.pp = 0;
            }
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    /// Subtracts damage, clamping HP at 0. A defending combatant absorbs the
    /// hit at half strength (round half up) and loses the flag in doing so.
    /// Returns the amount actually applied.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        let applied = if self.defending {
            self.defending = false;
            (amount + 1) / 2
        } else {
            amount
        };
        self.hp = (self.hp - applied).clamp(0, self.max_hp);
        applied
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Spends one PP of the indexed move.
    pub fn use_move(&mut self, index: usize) -> Result<(), NoPpError> {
        match self.moves.get_mut(index) {
            Some(slot) if slot.pp > 0 => {
                slot.pp -= 1;
                Ok(())
            }
            _ => Err(NoPpError),
        }
    }

    pub fn move_pp(&self, index: usize) -> i32 {
        self.moves.get(index).map(|slot| slot.pp).unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(Slot),
    Tie,
    Retreated(Slot),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    AwaitingAction { actor: Slot },
    Over { outcome: MatchOutcome },
}

/// One action per turn: a move by index (0..=2) or a retreat. Anything the
/// input surface produces outside this set is the invalid-selection case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Move(usize),
    Retreat,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    pub combatants: [Combatant; 2],
    pub phase: MatchPhase,
    #[serde(default)]
    pub log: Vec<String>,
}

impl MatchState {
    pub fn combatant(&self, slot: Slot) -> &Combatant {
        &self.combatants[slot.index()]
    }

    pub fn combatant_mut(&mut self, slot: Slot) -> &mut Combatant {
        &mut self.combatants[slot.index()]
    }

    /// Actor and opponent views in one borrow.
    pub fn pair(&self, slot: Slot) -> (&Combatant, &Combatant) {
        let [first, second] = &self.combatants;
        match slot {
            Slot::P1 => (first, second),
            Slot::P2 => (second, first),
        }
    }

    pub fn actor(&self) -> Option<Slot> {
        match self.phase {
            MatchPhase::AwaitingAction { actor } => Some(actor),
            MatchPhase::Over { .. } => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::Over { .. })
    }
}

pub fn create_match_state(p1: Combatant, p2: Combatant) -> MatchState {
    MatchState {
        combatants: [p1, p2],
        phase: MatchPhase::AwaitingAction { actor: Slot::P1 },
        log: Vec::new(),
    }
}
