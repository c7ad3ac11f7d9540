use crate::core::state::MatchOutcome;

/// Structured report of one state change, consumed by the display
/// collaborator. Payloads carry names and amounts only; no references back
/// into match state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    MoveUsed {
        actor: String,
        move_name: String,
    },
    DefendRaised {
        actor: String,
    },
    Missed {
        actor: String,
        move_name: String,
    },
    /// Projectile left the field without touching the target. Spends PP like
    /// a hit but deals nothing; not reachable with the shipped geometry.
    NoEffect {
        actor: String,
        move_name: String,
    },
    DamageDealt {
        actor: String,
        target: String,
        move_name: String,
        amount: i32,
        target_hp_after: i32,
    },
    NoPp {
        actor: String,
        move_name: String,
    },
    InvalidSelection {
        actor: String,
    },
    Retreated {
        actor: String,
        healed_to: i32,
    },
    MatchEnded {
        outcome: MatchOutcome,
    },
}

pub fn event_type(event: &BattleEvent) -> &str {
    match event {
        BattleEvent::MoveUsed { .. } => "move_used",
        BattleEvent::DefendRaised { .. } => "defend_raised",
        BattleEvent::Missed { .. } => "missed",
        BattleEvent::NoEffect { .. } => "no_effect",
        BattleEvent::DamageDealt { .. } => "damage_dealt",
        BattleEvent::NoPp { .. } => "no_pp",
        BattleEvent::InvalidSelection { .. } => "invalid_selection",
        BattleEvent::Retreated { .. } => "retreated",
        BattleEvent::MatchEnded { .. } => "match_ended",
    }
}

impl BattleEvent {
    pub fn log_line(&self) -> String {
        match self {
            BattleEvent::MoveUsed { actor, move_name } => {
                format!("{} used {}!", actor, move_name)
            }
            BattleEvent::DefendRaised { actor } => format!("{} is defending.", actor),
            BattleEvent::Missed { actor, move_name } => {
                format!("{} used {} but missed!", actor, move_name)
            }
            BattleEvent::NoEffect { actor, move_name } => {
                format!("{} used {} - no hit.", actor, move_name)
            }
            BattleEvent::DamageDealt {
                target,
                amount,
                target_hp_after,
                ..
            } => format!("Hit {} for {} dmg ({} HP left)", target, amount, target_hp_after),
            BattleEvent::NoPp { actor, move_name } => {
                format!("{} has no PP left for {}.", actor, move_name)
            }
            BattleEvent::InvalidSelection { actor } => {
                format!("{} made an invalid selection.", actor)
            }
            BattleEvent::Retreated { actor, healed_to } => {
                format!("{} retreated and healed to {} HP.", actor, healed_to)
            }
            BattleEvent::MatchEnded { outcome } => match outcome {
                MatchOutcome::Winner(slot) => format!(
                    "{} lost. {} wins!",
                    slot.opponent().label(),
                    slot.label()
                ),
                MatchOutcome::Tie => "It's a tie!".to_string(),
                MatchOutcome::Retreated(slot) => {
                    format!("Match over - {} left the field.", slot.label())
                }
            },
        }
    }
}
