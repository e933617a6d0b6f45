// Export of the game tree in the textual `.efg` format read by Gambit.

use itertools::Itertools;
use libgt::GameTreeVertex;

use crate::error::GameError;
use crate::history::{History, Turn};

/// Writes the tree below `root` in depth-first pre-order, one vertex per line
/// indented by its depth.
pub fn export_gambit(root: &History) -> Result<String, GameError> {
    let players = (0..2).map(|i| format!("\"Pl{}\"", i)).join(" ");
    let mut out = format!("EFG 2 R \"\" {{ {} }} \n", players);

    let mut terminal_idx = 1;
    let mut chance_idx = 1;
    let mut stack = vec![(root.clone(), 0)];

    while let Some((history, depth)) = stack.pop() {
        let actions = history.actions();
        let line = match history.turn() {
            Turn::Terminal => {
                let utility = history.utility()?;
                terminal_idx += 1;
                format!(
                    "t \"\" {} \"\" {{ {:?}, {:?} }}",
                    terminal_idx - 1,
                    utility,
                    -utility
                )
            }
            Turn::Chance => {
                let outcomes = actions
                    .iter()
                    .map(|action| {
                        let probability = history.chance_probability(action)?;
                        Ok::<_, GameError>(format!("\"{}\" {:.3}", action, probability))
                    })
                    .collect::<Result<Vec<_>, GameError>>()?;
                chance_idx += 1;
                format!("c \"\" {} \"\" {{ {} }} 0", chance_idx - 1, outcomes.join(" "))
            }
            Turn::Agent | Turn::Bandit => {
                let player = if history.turn() == Turn::Agent { 1 } else { 2 };
                let labels = actions.iter().map(|a| format!("\"{}\"", a)).join(" ");
                format!(
                    "p \"\" {} {} \"\" {{ {} }} 0",
                    player,
                    history.infoset()?.index,
                    labels
                )
            }
        };
        out.push_str(&" ".repeat(depth));
        out.push_str(&line);
        out.push('\n');

        for action in actions.iter().rev() {
            stack.push((history.child(action)?, depth + 1));
        }
    }
    Ok(out)
}
