#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Interactive console adapter for the Mars Rovers simulation.

use std::io;

use anyhow::Result;
use clap::Parser;
use mars_rovers_world::Plateau;

mod named_rover;
mod session;

use session::Session;

/// Command-line arguments accepted by the console.
#[derive(Debug, Parser)]
#[command(name = "mars-rovers", about = "Menu-driven console for the Mars Rovers simulation")]
struct Args {
    /// Width of a plateau to create before the first menu, measured West to East.
    #[arg(long, requires = "height")]
    width: Option<i32>,

    /// Height of a plateau to create before the first menu, measured South to North.
    #[arg(long, requires = "width")]
    height: Option<i32>,
}

/// Entry point for the Mars Rovers console.
fn main() -> Result<()> {
    let args = Args::parse();
    let initial = match (args.width, args.height) {
        (Some(width), Some(height)) => Some(Plateau::new(width, height)),
        _ => None,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run(initial)
}
