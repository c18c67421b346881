mod terminal;

use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use slide_puzzle::Session;

use terminal::{MAX_SIZE, MIN_SIZE};

/// Slide numbered tiles back into order in the terminal.
#[derive(Parser)]
#[command(name = "slide-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side length of the board.
    #[arg(long, default_value_t = 4, value_parser = parse_size)]
    size: usize,
    /// Seed for a reproducible shuffle.
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{}", e))?;
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be between {} and {}", MIN_SIZE, MAX_SIZE))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(cli.size, rng)?;
    info!("starting {0}x{0} game", cli.size);

    terminal::run(&mut session)?;

    if let Some(summary) = session.summary() {
        println!("{}", summary);
    }
    Ok(())
}
