use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use referee::{run_session, Config, Console};
use tictactoe::Player;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayer {
    X,
    O,
    Random,
}

#[derive(Parser)]
struct Args {
    /// Board size of the first series, between 3 and 7
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=7))]
    size: Option<u8>,

    /// Who moves first in the first series
    #[arg(short, long, value_enum)]
    first: Option<FirstPlayer>,

    /// RNG seed for picking the first player with "--first random"
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print a summary of all series as JSON when the session ends
    #[arg(long, default_value_t = false)]
    json_summary: bool,
}

impl Args {
    /// Checks combinations of arguments that clap can't express.
    fn validate(&self) -> Result<(), clap::Error> {
        if self.seed.is_some() && !matches!(self.first, Some(FirstPlayer::Random)) {
            return Err(Args::command().error(
                ErrorKind::ArgumentConflict,
                "--seed can only be used with --first random",
            ));
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Err(err) = args.validate() {
        err.exit();
    }

    initialize_logging(args.log_level);

    let starting_player = match args.first {
        Some(FirstPlayer::X) => Some(Player::X),
        Some(FirstPlayer::O) => Some(Player::O),
        Some(FirstPlayer::Random) => {
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut rng = StdRng::seed_from_u64(seed);
            Some(if rng.gen::<bool>() { Player::X } else { Player::O })
        }
        None => None,
    };
    let config = Config {
        board_size: args.size.map(usize::from),
        starting_player,
    };

    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
    let summary = run_session(&mut console, &config)?;

    if args.json_summary {
        let mut stdout = console.into_output();
        serde_json::to_writer_pretty(&mut stdout, &summary)?;
        writeln!(stdout)?;
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // The game itself talks on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
