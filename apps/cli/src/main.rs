mod console;
mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eardrill_audio::{NullPlayer, PitchPlayer, PlaybackRunner};
use eardrill_domain::{RandomSource, SeededRandom, ThreadRandom};
use eardrill_tutor::{DrillSession, Mode, TutorError};

use crate::console::ConsolePlayer;
use crate::settings::{default_settings_path, load_settings, save_settings, DrillSettings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ear-training drill for intervals, chords and scales", long_about = None)]
struct Cli {
    /// Drill mode: interval, chord or scale (defaults to the saved setting)
    #[arg(short, long)]
    mode: Option<String>,
    /// Number of rounds before the session ends
    #[arg(short, long, default_value_t = 10)]
    rounds: u32,
    /// Seed for a reproducible sequence of challenges
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
    /// Do not print the notes being played
    #[arg(long)]
    no_audio: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Replay,
    Skip,
    Reset,
    Quit,
    Answer(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line {
            "" => None,
            ":r" | ":replay" => Some(Command::Replay),
            ":s" | ":skip" => Some(Command::Skip),
            ":reset" => Some(Command::Reset),
            ":q" | ":quit" => Some(Command::Quit),
            answer => Some(Command::Answer(answer.to_string())),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings_path = cli.settings.clone().or_else(default_settings_path);
    let mut settings = match &settings_path {
        Some(path) => load_settings(path)?,
        None => DrillSettings::default(),
    };
    if let Some(mode) = &cli.mode {
        settings.mode = mode.parse::<Mode>()?;
    }
    if cli.save_settings {
        match &settings_path {
            Some(path) => {
                save_settings(path, &settings)?;
                info!(path = %path.display(), "saved settings");
            }
            None => warn!("no config directory available, settings not saved"),
        }
    }

    let rng: Box<dyn RandomSource + Send> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let mut session =
        DrillSession::new(settings.mode, rng).with_playback_config(settings.playback);
    let player: Arc<dyn PitchPlayer> = if cli.no_audio {
        Arc::new(NullPlayer)
    } else {
        Arc::new(ConsolePlayer)
    };
    let mut runner = PlaybackRunner::new(player);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "{} drill, {} rounds. Commands: :r replay, :s skip, :reset, :q quit",
        session.mode(),
        cli.rounds
    );

    'rounds: for _ in 0..cli.rounds {
        let challenge = session.next_challenge()?.clone();
        println!("\nRound {}: {}", session.round(), challenge.prompt());
        println!("Choices: {}", challenge.answer_choices().join(" | "));
        runner.start(session.playback_plan()?);

        loop {
            let Some(line) = lines.next_line().await? else {
                break 'rounds;
            };
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            match command {
                Command::Replay => runner.start(session.playback_plan()?),
                Command::Skip => {
                    println!("Skipped, it was {}", challenge.describe_answer());
                    break;
                }
                Command::Reset => {
                    let score = session.reset_score();
                    println!("Score reset: {}/{}", score.correct, score.total);
                }
                Command::Quit => break 'rounds,
                Command::Answer(answer) => match session.submit(&answer) {
                    Ok(verdict) => {
                        let score = session.score();
                        if verdict.is_correct {
                            println!(
                                "Correct, {}. Score {}/{}",
                                challenge.describe_answer(),
                                score.correct,
                                score.total
                            );
                        } else {
                            println!(
                                "Not quite, it was {}. Score {}/{}",
                                challenge.describe_answer(),
                                score.correct,
                                score.total
                            );
                        }
                        break;
                    }
                    Err(TutorError::Domain(err)) => println!("{err}; pick one of the choices"),
                    Err(err) => return Err(err.into()),
                },
            }
        }
        runner.cancel();
    }

    runner.cancel();
    let score = session.score();
    println!(
        "\nFinal score {}/{} ({:.0}%)",
        score.correct,
        score.total,
        score.accuracy() * 100.0
    );
    Ok(())
}
