use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use synaptic::persist::{JsonFileStore, MemoryStore, Store};
use synaptic::session::GameEvent;
use synaptic::{Difficulty, GameMode, Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Tic-Tac-Toe against a friend or the engine", long_about = None)]
struct Args {
    /// Game mode: 'player' for two players, 'ai' to play X against the engine
    #[arg(long, default_value = "ai")]
    mode: String,

    /// Engine strength for a new game: easy, medium or impossible.
    /// A resumed game keeps its saved difficulty; use `difficulty <level>` to change it.
    #[arg(long)]
    difficulty: Option<String>,

    /// JSON file to resume from and save to after every move
    #[arg(long)]
    state: Option<PathBuf>,

    /// Delay before the engine replies, in milliseconds
    #[arg(long, default_value_t = 500)]
    ai_delay_ms: u64,

    /// Seed for Easy/Medium randomness
    #[arg(long)]
    seed: Option<u64>,
}

fn print_help() {
    println!("Commands: 0-8 (play a cell), new, mode, difficulty <level>, scores,");
    println!("          reset-scores, history, jump <n>, help, quit");
}

fn print_state(session: &Session) {
    println!("\n{}", session.current_board());
    let s = session.scores();
    let o_label = match session.mode() {
        GameMode::VsAi => format!("AI ({})", session.difficulty()),
        GameMode::TwoPlayer => "Player O".to_string(),
    };
    println!("Player X: {}  {}: {}", s.x, o_label, s.o);
    println!("{}", session.status_message());
}

fn wait_for_ai(session: &mut Session) {
    while let Some(due) = session.pending_ai() {
        let now = Instant::now();
        if now < due { std::thread::sleep(due - now); }
        if let Some(i) = session.tick(Instant::now()) {
            println!("Engine plays: {}", i);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = SessionConfig::default()
        .with_ai_delay_ms(args.ai_delay_ms)
        .with_mode(args.mode.parse::<GameMode>()?);
    if let Some(seed) = args.seed { config = config.with_seed(seed); }
    if let Some(d) = &args.difficulty { config = config.with_difficulty(d.parse::<Difficulty>()?); }

    let store: Box<dyn Store> = match &args.state {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    let mut session = Session::with_store(config, store);

    session.subscribe(Box::new(|e: &GameEvent| {
        if let GameEvent::GameWon { player, line } = e {
            println!("*** {} completes {:?} ***", player, line);
        }
    }));

    print_help();
    wait_for_ai(&mut session);
    print_state(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 { break; }
        let line = line.trim();
        if line.is_empty() { continue; }

        let mut tokens = line.split_whitespace();
        let cmd = tokens.next().unwrap_or("");
        let outcome = match cmd {
            "quit" | "q" | "exit" => break,
            "help" | "?" => { print_help(); continue; }
            "new" => { session.reset(); Ok(()) }
            "mode" => { let m = session.toggle_mode(); println!("Mode: {}", m); Ok(()) }
            "difficulty" => match tokens.next().map(str::parse::<Difficulty>) {
                Some(Ok(d)) => { session.set_difficulty(d); Ok(()) }
                Some(Err(e)) => Err(e),
                None => { println!("Difficulty: {}", session.difficulty()); continue; }
            },
            "scores" => { let s = session.scores(); println!("X {} - O {}", s.x, s.o); continue; }
            "reset-scores" => { session.reset_scores(); Ok(()) }
            "history" => {
                let view = session.timeline_view();
                for item in &view.items {
                    let marker = if item.step == view.cursor { "*" } else { " " };
                    println!("{} {:>2}. {}", marker, item.step, item.label);
                }
                continue;
            }
            "jump" => match tokens.next().and_then(|s| s.parse::<usize>().ok()) {
                Some(n) => session.jump_to(n).map(|_| ()),
                None => { println!("usage: jump <step>"); continue; }
            },
            other => match other.parse::<usize>() {
                Ok(i) => session.apply_human_move(i).map(|_| ()),
                Err(_) => { println!("Unknown command '{}'. Type 'help'.", other); continue; }
            },
        };
        // Illegal actions are ignored, as clicking a filled cell would be.
        if let Err(e) = outcome { println!("({})", e); }
        wait_for_ai(&mut session);
        print_state(&session);
    }

    println!("Thanks for playing!");
    Ok(())
}
