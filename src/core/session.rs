use crate::ai::choose_action;
use crate::core::factory::create_combatant;
use crate::core::state::{
    create_match_state, MatchOutcome, MatchPhase, MatchState, Slot, TurnAction,
};
use crate::core::utils::uniform_int;
use crate::data::roster::RosterDatabase;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Hard,
}

/// Process-wide counters, initialized once at startup and bumped only when a
/// match terminates.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub games_played: u32,
    pub human_wins: u32,
    pub cpu_wins: u32,
}

impl SessionStats {
    /// Every terminal outcome counts as a played game; only a faint win
    /// credits a seat. Ties and retreats credit nobody.
    pub fn record(&mut self, outcome: &MatchOutcome, p1_human: bool) {
        self.games_played += 1;
        if let MatchOutcome::Winner(slot) = outcome {
            let winner_is_human = match slot {
                Slot::P1 => p1_human,
                Slot::P2 => !p1_human,
            };
            if winner_is_human {
                self.human_wins += 1;
            } else {
                self.cpu_wins += 1;
            }
        }
    }
}

/// Owns seat assignment, difficulty, and session statistics; hands fresh
/// `MatchState`s to the turn engine and records what comes back.
#[derive(Clone, Debug)]
pub struct MatchController {
    roster: RosterDatabase,
    pub difficulty: Difficulty,
    pub stats: SessionStats,
    pub p1_human: bool,
}

impl MatchController {
    /// A roster smaller than two entries cannot seat a match; that is a
    /// configuration error, fatal at startup.
    pub fn new(roster: RosterDatabase, difficulty: Difficulty) -> Result<Self, String> {
        if roster.len() < 2 {
            return Err(format!(
                "roster needs at least two creatures, found {}",
                roster.len()
            ));
        }
        Ok(Self {
            roster,
            difficulty,
            stats: SessionStats::default(),
            p1_human: true,
        })
    }

    pub fn roster(&self) -> &RosterDatabase {
        &self.roster
    }

    /// Flips a coin for the human seat, then draws two distinct roster
    /// indices (reject-and-resample) and seats both combatants. Turn order
    /// is not part of the flip: P1 acts first either way.
    pub fn assign_combatants(&mut self, rng: &mut dyn FnMut() -> f64) -> MatchState {
        self.p1_human = uniform_int(rng, 0, 1) == 0;

        let high = self.roster.len() as i32 - 1;
        let first = uniform_int(rng, 0, high) as usize;
        let mut second = uniform_int(rng, 0, high) as usize;
        while second == first {
            second = uniform_int(rng, 0, high) as usize;
        }

        let mut p1 = create_combatant(&self.roster.entries()[first]);
        let mut p2 = create_combatant(&self.roster.entries()[second]);
        p1.reset();
        p2.reset();
        create_match_state(p1, p2)
    }

    /// Same two combatants, restored for another round. PP carries over.
    pub fn rematch(&self, state: &MatchState) -> MatchState {
        let mut next = state.clone();
        for combatant in &mut next.combatants {
            combatant.reset();
        }
        next.phase = MatchPhase::AwaitingAction { actor: Slot::P1 };
        next.log.clear();
        next
    }

    pub fn is_human(&self, slot: Slot) -> bool {
        match slot {
            Slot::P1 => self.p1_human,
            Slot::P2 => !self.p1_human,
        }
    }

    /// Difficulty-gated policy for a CPU-held seat.
    pub fn cpu_action(
        &self,
        state: &MatchState,
        slot: Slot,
        rng: &mut dyn FnMut() -> f64,
    ) -> TurnAction {
        choose_action(state.combatant(slot), self.difficulty, rng)
    }

    pub fn record_outcome(&mut self, outcome: &MatchOutcome) {
        self.stats.record(outcome, self.p1_human);
    }
}
