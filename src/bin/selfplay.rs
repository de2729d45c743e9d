use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use synaptic::selfplay::{play_game, write_records, SelfPlayParams, Tally};
use synaptic::Difficulty;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "synaptic-selfplay", about = "Play the engine against itself and write game records")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Difficulty for X
    #[arg(long, default_value = "impossible")]
    x: String,
    /// Difficulty for O
    #[arg(long, default_value = "impossible")]
    o: String,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        x: a.x.parse::<Difficulty>()?,
        o: a.o.parse::<Difficulty>()?,
        seed: a.seed,
    };
    eprintln!("Playing {} games (X={}, O={}, seed={})", params.games, params.x, params.o, params.seed);
    let pb = ProgressBar::new(params.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")?);
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        games.push(play_game(&params, gi));
        pb.inc(1);
    }
    pb.finish_and_clear();
    let t = Tally::of(&games);
    eprintln!("X wins {}, O wins {}, draws {}", t.x, t.o, t.draws);
    write_records(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
