use crate::core::damage::compute_damage;
use crate::core::events::BattleEvent;
use crate::core::session::Difficulty;
use crate::core::state::{MatchOutcome, MatchPhase, MatchState, Slot, TurnAction};
use crate::core::utils::uniform_int;

pub const RETREAT_HEAL: i32 = 8;

/// Result of stepping the engine by one action.
#[derive(Clone, Debug)]
pub struct StepResult {
    pub state: MatchState,
    pub events: Vec<BattleEvent>,
}

/// The per-turn state machine. One call resolves one chosen action and
/// either advances the turn, keeps the same actor (no-PP / invalid
/// selection), or terminates the match.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    pub difficulty: Difficulty,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
        }
    }
}

impl TurnEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Resolve one action for the awaiting actor. `launcher` is the
    /// display-owned projectile phase: it is consulted only after a
    /// successful accuracy roll and reports whether the projectile reached
    /// the target before leaving the field.
    pub fn step_turn(
        &self,
        state: &MatchState,
        action: TurnAction,
        rng: &mut dyn FnMut() -> f64,
        launcher: &mut dyn FnMut(Slot) -> bool,
    ) -> StepResult {
        let mut next = state.clone();
        let mut events = Vec::new();

        let actor_slot = match next.phase {
            MatchPhase::AwaitingAction { actor } => actor,
            MatchPhase::Over { .. } => {
                return StepResult {
                    state: next,
                    events,
                }
            }
        };

        match action {
            TurnAction::Retreat => {
                let actor = next.combatant_mut(actor_slot);
                actor.heal(RETREAT_HEAL);
                events.push(BattleEvent::Retreated {
                    actor: actor.name.clone(),
                    healed_to: actor.hp,
                });
                // retreat ends the match on the spot, regardless of HP
                let outcome = MatchOutcome::Retreated(actor_slot);
                events.push(BattleEvent::MatchEnded { outcome });
                next.phase = MatchPhase::Over { outcome };
            }
            TurnAction::Move(index) => {
                let resolved = self.resolve_move(&mut next, actor_slot, index, rng, launcher, &mut events);
                if resolved {
                    if let Some(outcome) = check_termination(&next) {
                        events.push(BattleEvent::MatchEnded { outcome });
                        next.phase = MatchPhase::Over { outcome };
                    } else {
                        next.phase = MatchPhase::AwaitingAction {
                            actor: actor_slot.opponent(),
                        };
                    }
                }
                // unresolved: same actor is prompted again, nothing mutated
            }
        }

        for event in &events {
            next.log.push(event.log_line());
        }
        StepResult {
            state: next,
            events,
        }
    }

    /// Returns true when the move resolved (turn advances), false when the
    /// selection was rejected (invalid index or no PP).
    fn resolve_move(
        &self,
        next: &mut MatchState,
        actor_slot: Slot,
        index: usize,
        rng: &mut dyn FnMut() -> f64,
        launcher: &mut dyn FnMut(Slot) -> bool,
        events: &mut Vec<BattleEvent>,
    ) -> bool {
        let actor_name = next.combatant(actor_slot).name.clone();

        let mv = match next.combatant(actor_slot).moves.get(index) {
            Some(slot) => slot.data.clone(),
            None => {
                events.push(BattleEvent::InvalidSelection { actor: actor_name });
                return false;
            }
        };

        if next.combatant(actor_slot).move_pp(index) <= 0 {
            events.push(BattleEvent::NoPp {
                actor: actor_name,
                move_name: mv.name,
            });
            return false;
        }

        if mv.is_utility() {
            let actor = next.combatant_mut(actor_slot);
            actor.use_move(index).ok();
            actor.defending = true;
            events.push(BattleEvent::MoveUsed {
                actor: actor_name.clone(),
                move_name: mv.name,
            });
            events.push(BattleEvent::DefendRaised { actor: actor_name });
            return true;
        }

        // attack move: accuracy gate first; a miss spends the turn but no PP
        let roll = uniform_int(rng, 1, 100);
        if roll > mv.accuracy {
            events.push(BattleEvent::Missed {
                actor: actor_name.clone(),
                move_name: mv.name.clone(),
            });
        } else if launcher(actor_slot) {
            let target_slot = actor_slot.opponent();
            let dmg = {
                let (attacker, defender) = next.pair(actor_slot);
                compute_damage(attacker, defender, &mv, self.difficulty, rng)
            };
            let target = next.combatant_mut(target_slot);
            let applied = target.apply_damage(dmg);
            let target_name = target.name.clone();
            let target_hp_after = target.hp;
            next.combatant_mut(actor_slot).use_move(index).ok();
            events.push(BattleEvent::MoveUsed {
                actor: actor_name.clone(),
                move_name: mv.name.clone(),
            });
            events.push(BattleEvent::DamageDealt {
                actor: actor_name.clone(),
                target: target_name,
                move_name: mv.name.clone(),
                amount: applied,
                target_hp_after,
            });
        } else {
            // projectile left the field without touching the target; PP is
            // spent as if the move had landed
            next.combatant_mut(actor_slot).use_move(index).ok();
            events.push(BattleEvent::NoEffect {
                actor: actor_name.clone(),
                move_name: mv.name.clone(),
            });
        }

        // a leftover defend does not survive the actor's own attacking turn
        if next.combatant(actor_slot).defending {
            next.combatant_mut(actor_slot).defending = false;
        }
        true
    }
}

/// Faint check after a resolution step. Both down at once is a tie, never an
/// arbitrary winner.
pub fn check_termination(state: &MatchState) -> Option<MatchOutcome> {
    let p1_down = state.combatant(Slot::P1).is_fainted();
    let p2_down = state.combatant(Slot::P2).is_fainted();
    match (p1_down, p2_down) {
        (true, true) => Some(MatchOutcome::Tie),
        (true, false) => Some(MatchOutcome::Winner(Slot::P2)),
        (false, true) => Some(MatchOutcome::Winner(Slot::P1)),
        (false, false) => None,
    }
}

pub fn is_match_over(state: &MatchState) -> bool {
    state.is_over() || check_termination(state).is_some()
}
