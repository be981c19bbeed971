use anyhow::Context;
use boxfield_common::GameConfig;
use boxfield_game::GameLoop;
use boxfield_input::{EventQueue, InputEvent, PollPolicy};
use boxfield_kernel::{FrameClock, VirtualTicks, World, wall_clock_seed};
use boxfield_render::DebugTextRenderer;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boxfield-cli", about = "Headless boxfield runner")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and configuration
    Info,
    /// Run the game loop on a virtual clock with scripted input
    Run {
        #[command(flatten)]
        script: Script,
        /// Print the final world as JSON instead of the last frame
        #[arg(long)]
        json: bool,
    },
    /// Run, rebuild the world from its event log, and compare state hashes
    Replay {
        #[command(flatten)]
        script: Script,
    },
}

#[derive(Args)]
struct Script {
    /// Maximum number of frames to run
    #[arg(short, long, default_value = "60")]
    frames: u64,
    /// Seed for enemy placement (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,
    /// Handle every pending event each frame instead of one
    #[arg(long)]
    drain_events: bool,
    /// Input events in order: +key press, -key release, quit.
    /// Keys: left right up down esc r
    #[arg(allow_hyphen_values = true)]
    events: Vec<String>,
}

/// Outcome of a headless run.
struct HeadlessRun {
    game: GameLoop<DebugTextRenderer, VirtualTicks>,
    last_frame: Option<String>,
}

fn run_headless(config: &GameConfig, script: &Script) -> anyhow::Result<HeadlessRun> {
    let events = script
        .events
        .iter()
        .map(|token| {
            token
                .parse::<InputEvent>()
                .with_context(|| format!("invalid event {token:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let policy = if script.drain_events {
        PollPolicy::DrainAll
    } else {
        PollPolicy::OnePerFrame
    };
    let seed = script.seed.unwrap_or_else(wall_clock_seed);
    tracing::debug!(seed, ?policy, events = events.len(), "headless run");

    let mut queue = EventQueue::new(policy);
    queue.extend(events);
    let mut game = GameLoop::new(
        World::with_seed(config.bounds(), seed),
        queue,
        FrameClock::new(VirtualTicks::new(), config.frame_target_ms()),
        DebugTextRenderer::new(),
    );

    let mut last_frame = None;
    for _ in 0..script.frames {
        match game.iterate() {
            Some(text) => last_frame = Some(text),
            None => break,
        }
    }
    Ok(HeadlessRun { game, last_frame })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = GameConfig::default();

    match cli.command {
        Commands::Info => {
            println!("boxfield-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", boxfield_common::crate_info());
            println!("render: {}", boxfield_render::crate_info());
            println!("config: {}", serde_json::to_string(&config)?);
        }
        Commands::Run { script, json } => {
            let run = run_headless(&config, &script)?;
            if json {
                println!("{}", serde_json::to_string_pretty(run.game.world())?);
            } else {
                if let Some(frame) = &run.last_frame {
                    print!("{frame}");
                }
                let world = run.game.world();
                println!(
                    "frames={} tick={} seed={} state={:?} pending_events={}",
                    run.game.frames(),
                    world.tick(),
                    world.seed(),
                    run.game.state(),
                    run.game.pending_events()
                );
            }
        }
        Commands::Replay { script } => {
            let run = run_headless(&config, &script)?;
            let world = run.game.into_world();
            let replayed = World::replay(world.bounds(), world.events());

            println!(
                "Run:    tick={} hash={:#018x}",
                world.tick(),
                world.state_hash()
            );
            println!(
                "Replay: tick={} hash={:#018x}",
                replayed.tick(),
                replayed.state_hash()
            );
            if world.state_hash() != replayed.state_hash() {
                anyhow::bail!("replay diverged from the recorded run");
            }
            println!("Match: OK");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxfield_game::LoopState;

    fn script(events: &[&str]) -> Script {
        Script {
            frames: 100,
            seed: Some(3),
            drain_events: false,
            events: events.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn cli_parses_hyphenated_events() {
        let cli = Cli::try_parse_from(["boxfield-cli", "run", "--seed", "1", "+left", "-left"])
            .unwrap();
        match cli.command {
            Commands::Run { script, json } => {
                assert!(!json);
                assert_eq!(script.seed, Some(1));
                assert_eq!(script.events, vec!["+left", "-left"]);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn headless_run_stops_on_quit() {
        let run = run_headless(&GameConfig::default(), &script(&["+right", "quit"])).unwrap();
        assert_eq!(run.game.state(), LoopState::Stopped);
        assert_eq!(run.game.frames(), 1);
        assert!(run.last_frame.unwrap().contains("Frame 1"));
    }

    #[test]
    fn headless_run_honours_frame_limit() {
        let mut s = script(&["+down"]);
        s.frames = 10;
        let run = run_headless(&GameConfig::default(), &s).unwrap();
        assert_eq!(run.game.state(), LoopState::Running);
        assert_eq!(run.game.frames(), 10);
    }

    #[test]
    fn headless_run_rejects_bad_events() {
        assert!(run_headless(&GameConfig::default(), &script(&["jump"])).is_err());
    }

    #[test]
    fn replay_matches_headless_run() {
        let run = run_headless(
            &GameConfig::default(),
            &script(&["+right", "+up", "-r", "-right", "+left"]),
        )
        .unwrap();
        let world = run.game.into_world();
        let replayed = World::replay(world.bounds(), world.events());
        assert_eq!(world.state_hash(), replayed.state_hash());
    }
}
