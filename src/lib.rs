pub mod ai;
pub mod core;
pub mod data;

pub use ai::choose_action;
pub use core::{
    battle::{check_termination, is_match_over, StepResult, TurnEngine, RETREAT_HEAL},
    damage::{compute_damage, MIN_DAMAGE},
    events::{event_type, BattleEvent},
    factory::create_combatant,
    session::{Difficulty, MatchController, SessionStats},
    state::{
        create_match_state, Combatant, MatchOutcome, MatchPhase, MatchState, MoveSlot, NoPpError,
        Slot, TurnAction,
    },
};
pub use data::roster::{CreatureData, MoveData, RosterDatabase};
