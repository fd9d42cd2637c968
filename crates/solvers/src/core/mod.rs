/// Coin arrangement solver for the monument equation
pub mod coin;
/// Route solver for the orb vault
pub mod orb;
/// Eighth-register calibration for the teleporter
pub mod teleporter;

use std::time::Instant;

use tracing::{debug, info};

use crate::{
    error::Error,
    interfaces::{Puzzle, SolveArgs},
};

/// Solve the selected puzzle and render its answer as display text.
pub fn solve(args: SolveArgs) -> Result<String, Error> {
    let start_time = Instant::now();

    let answer = match args.puzzle {
        Puzzle::Coins => {
            let order = coin::arrangement()?;
            let names =
                order.iter().map(|(_, name)| String::from(*name)).collect::<Vec<String>>();
            let values = order.iter().map(|(value, _)| value.to_string()).collect::<Vec<String>>();
            format!("coin order: {} ({})", names.join(", "), values.join(", "))
        }
        Puzzle::Orb => {
            let route = orb::shortest_path()?;
            let steps = route.iter().map(ToString::to_string).collect::<Vec<String>>();
            format!("orb route ({} steps): {}", route.len(), steps.join(" "))
        }
        Puzzle::Teleporter => {
            let setting = teleporter::calibrate()?;
            format!("eighth register setting: {setting}")
        }
    };

    info!("solved the {:?} puzzle.", args.puzzle);
    debug!("solve took {:?}.", start_time.elapsed());

    Ok(answer)
}
