use inquire::Select;
use pocket_arena::core::battle::TurnEngine;
use pocket_arena::core::events::BattleEvent;
use pocket_arena::core::session::{Difficulty, MatchController, SessionStats};
use pocket_arena::core::state::{Combatant, MatchOutcome, MatchState, Slot, TurnAction};
use pocket_arena::data::roster::RosterDatabase;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

// Field geometry, inherited from the 320x240 handheld screen this game was
// designed around. The projectile travels the horizontal axis only; both
// sprites sit on the same row.
const FIELD_W: i32 = 320;
const SPRITE_W: i32 = 48;
const P1_X: i32 = 40;
const P2_X: i32 = 220;
const PROJECTILE_W: i32 = 8;
const PROJECTILE_STEP_PX: i32 = 6;
const PROJECTILE_TICK_MS: u64 = 20;

const CPU_PAUSE_MS: u64 = 400;
const CPU_ECHO_MS: u64 = 300;
const TURN_PAUSE_MS: u64 = 200;
const RESULT_PAUSE_MS: u64 = 1100;

fn main() {
    println!("╔═══════════════════════════════════════╗");
    println!("║          ⚡ POCKET ARENA ⚡           ║");
    println!("╚═══════════════════════════════════════╝");
    println!();

    let roster = RosterDatabase::default();
    let mut controller =
        MatchController::new(roster, Difficulty::Easy).expect("roster cannot seat a match");

    let mut small = SmallRng::from_os_rng();
    let mut rng = move || small.random::<f64>();

    loop {
        println!();
        let choice = Select::new(
            "Main menu",
            vec!["Play", "Instructions", "Statistics", "Credits"],
        )
        .prompt();

        match choice {
            Ok("Play") => play(&mut controller, &mut rng),
            Ok("Instructions") => show_instructions(),
            Ok("Statistics") => show_statistics(&controller.stats),
            Ok("Credits") => show_credits(),
            _ => continue,
        }
    }
}

fn play(controller: &mut MatchController, rng: &mut dyn FnMut() -> f64) {
    controller.difficulty = prompt_difficulty();
    let engine = TurnEngine::new(controller.difficulty);

    let mut state = controller.assign_combatants(rng);
    let human_slot = if controller.p1_human { Slot::P1 } else { Slot::P2 };
    println!();
    println!(
        "⚔  {} (P1) vs {} (P2)",
        state.combatant(Slot::P1).name,
        state.combatant(Slot::P2).name
    );
    println!(
        "You are {} with {}.",
        human_slot.label(),
        state.combatant(human_slot).name
    );
    println!();

    loop {
        let outcome = run_match(&engine, controller, &mut state, rng);
        controller.record_outcome(&outcome);

        match outcome {
            // a retreat exits straight to the menu, no replay offer
            MatchOutcome::Retreated(_) => break,
            _ => {
                if prompt_replay() {
                    state = controller.rematch(&state);
                    println!("Restarting match...");
                    println!();
                } else {
                    break;
                }
            }
        }
    }
    println!("Returning to menu...");
}

fn run_match(
    engine: &TurnEngine,
    controller: &MatchController,
    state: &mut MatchState,
    rng: &mut dyn FnMut() -> f64,
) -> MatchOutcome {
    loop {
        let actor_slot = match state.actor() {
            Some(slot) => slot,
            None => unreachable!("run_match entered with a finished state"),
        };

        print_battle_status(controller, state);

        let action = if controller.is_human(actor_slot) {
            prompt_action(state.combatant(actor_slot))
        } else {
            let name = state.combatant(actor_slot).name.clone();
            println!("{} is thinking...", name);
            thread::sleep(Duration::from_millis(CPU_PAUSE_MS));
            let action = controller.cpu_action(state, actor_slot, rng);
            let label = match action {
                TurnAction::Move(i) => state.combatant(actor_slot).moves[i].data.name.clone(),
                TurnAction::Retreat => "Run".to_string(),
            };
            println!("{} chose {}.", name, label);
            thread::sleep(Duration::from_millis(CPU_ECHO_MS));
            action
        };

        let mut launcher = |slot: Slot| animate_projectile(slot);
        let result = engine.step_turn(state, action, rng, &mut launcher);
        *state = result.state;

        for event in &result.events {
            println!("{}", event.log_line());
            if let BattleEvent::MatchEnded { outcome } = event {
                thread::sleep(Duration::from_millis(RESULT_PAUSE_MS));
                return *outcome;
            }
        }
        thread::sleep(Duration::from_millis(TURN_PAUSE_MS));
        println!();
    }
}

/// The projectile phase the engine contracts out: a stepped flight across
/// the field that ends on rectangle overlap with the target's hitbox or on
/// leaving the field bounds.
fn animate_projectile(actor: Slot) -> bool {
    let (mut x, dir, target_x) = match actor {
        Slot::P1 => (P1_X + SPRITE_W, 1, P2_X),
        Slot::P2 => (P2_X - PROJECTILE_W, -1, P1_X),
    };

    let mut hit = false;
    while x > 0 && x < FIELD_W {
        draw_field(x);
        let overlap = x + PROJECTILE_W >= target_x && x <= target_x + SPRITE_W;
        if overlap {
            hit = true;
            break;
        }
        x += dir * PROJECTILE_STEP_PX;
        thread::sleep(Duration::from_millis(PROJECTILE_TICK_MS));
    }
    println!();
    hit
}

fn draw_field(proj_x: i32) {
    const SCALE: i32 = 5;
    let width = (FIELD_W / SCALE) as usize;
    let mut row = vec![' '; width];
    for i in 0..(SPRITE_W / SCALE) {
        row[((P1_X + i * SCALE) / SCALE) as usize] = '#';
        row[((P2_X + i * SCALE) / SCALE) as usize] = '#';
    }
    let p = (proj_x / SCALE).clamp(0, width as i32 - 1) as usize;
    row[p] = '*';
    print!("\r|{}|", row.iter().collect::<String>());
    io::stdout().flush().ok();
}

fn print_battle_status(controller: &MatchController, state: &MatchState) {
    println!("─────────────────────────────────────────");
    for slot in [Slot::P1, Slot::P2] {
        let combatant = state.combatant(slot);
        let who = if controller.is_human(slot) { "you" } else { "cpu" };
        let defending = if combatant.defending { " [Defending]" } else { "" };
        println!(
            "  [{} · {}] {} {}{}",
            slot.label(),
            who,
            combatant.name,
            hp_bar_string(combatant.hp, combatant.max_hp),
            defending
        );
    }
    println!("─────────────────────────────────────────");
}

fn hp_bar_string(hp: i32, max_hp: i32) -> String {
    let bars = (hp as f64 / max_hp as f64 * 10.0) as usize;
    let filled = "█".repeat(bars);
    let empty = "░".repeat(10 - bars);
    format!("[{}{}] {}/{}", filled, empty, hp, max_hp)
}

fn prompt_action(combatant: &Combatant) -> TurnAction {
    loop {
        let mut options: Vec<String> = combatant
            .moves
            .iter()
            .map(|slot| format!("{} (PP {})", slot.data.name, slot.pp))
            .collect();
        options.push("Run".to_string());

        let ans = Select::new("Choose an action:", options.clone()).prompt();
        match ans {
            Ok(choice) => {
                if let Some(idx) = options.iter().position(|opt| opt == &choice) {
                    if idx == options.len() - 1 {
                        return TurnAction::Retreat;
                    }
                    return TurnAction::Move(idx);
                }
            }
            Err(_) => {
                // stray escape; same actor keeps the turn
                println!("No selection.");
            }
        }
    }
}

fn prompt_difficulty() -> Difficulty {
    match Select::new("Select difficulty:", vec!["Easy", "Hard"]).prompt() {
        Ok("Hard") => Difficulty::Hard,
        Ok(_) => Difficulty::Easy,
        Err(_) => {
            println!("No selection, starting default (Easy).");
            Difficulty::Easy
        }
    }
}

fn prompt_replay() -> bool {
    matches!(
        Select::new("Play again?", vec!["Rematch", "Back to menu"]).prompt(),
        Ok("Rematch")
    )
}

fn show_instructions() {
    println!();
    println!("Instructions:");
    println!("- Pick one of the four actions each turn.");
    println!("- Attacks fire a projectile; the utility move halves the next hit taken.");
    println!("- Run heals a little and exits the match with no winner.");
    println!("- Difficulty changes CPU behavior and damage.");
}

fn show_statistics(stats: &SessionStats) {
    println!();
    println!("Statistics (session):");
    println!("Games Played: {}", stats.games_played);
    println!("Human Wins: {}", stats.human_wins);
    println!("CPU Wins: {}", stats.cpu_wins);
}

fn show_credits() {
    println!();
    println!("Credits:");
    println!("Pocket Arena battle engine and CLI.");
}
