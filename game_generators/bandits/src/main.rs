// Solves the pursuit game read from a maze description and prints the value of the
// root for the chosen player.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context};
use log::{debug, info};
use structopt::StructOpt;

use bandits::{export_gambit, read_game};
use libgt::Player;
use zero_sum_solving::{root_value, SolverConfig};

#[derive(StructOpt, Debug)]
#[structopt(name = "bandits")]
struct Opt {
    // Maze description, read from standard input when missing
    #[structopt(short = "i", long = "input", parse(from_os_str))]
    input: Option<PathBuf>,

    // Player of interest, 0 for the agent and 1 for the bandits. Read from the
    // line following the maze description when missing.
    #[structopt(short = "p", long = "player")]
    player: Option<usize>,

    // Also write the game tree in Gambit's .efg format
    #[structopt(short = "g", long = "export_gambit", parse(from_os_str))]
    export_gambit: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt = Opt::from_args();
    debug!("Options {:?}", opt);

    let mut input: Box<dyn BufRead> = match &opt.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let game = read_game(&mut input).context("reading the game")?;
    let index = match opt.player {
        Some(index) => index,
        None => bandits::reader::read_number(&mut input, "player of interest")?,
    };
    let player = match Player::from_index(index) {
        Some(player) => player,
        None => bail!("player of interest must be 0 or 1, got {}", index),
    };
    let root = game.root();

    if let Some(path) = &opt.export_gambit {
        let efg = export_gambit(&root)?;
        fs::write(path, efg).with_context(|| format!("writing {}", path.display()))?;
        info!("Game tree written to {}", path.display());
    }

    let value = root_value(&root, player, &SolverConfig::default())?;
    info!("Root value for {:?}: {}", player, value);
    println!("{}", value);
    Ok(())
}
