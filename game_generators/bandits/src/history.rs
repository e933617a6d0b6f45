use std::rc::Rc;

use libgt::{GameTreeVertex, Leaf, Player, VertexType};

use crate::actions::{Action, Allocation, Chance, Move};
use crate::error::GameError;
use crate::game::{Game, BASE_UTILITY};
use crate::infoset::{Infoset, InfosetKey};
use crate::location::Location;
use crate::trail::Trail;

/// Who acts at a history.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    Agent,
    Bandit,
    Chance,
    Terminal,
}

/// A vertex of the pursuit game tree. Histories are immutable: `child` builds a new
/// history which shares the walked path and the action log with its parent.
#[derive(Debug, Clone)]
pub struct History {
    game: Rc<Game>,
    turn: Turn,
    // Armed until the bandits reallocate or attack for the first time.
    alarm: bool,
    num_golds: u32,
    agent: Location,
    visited: Trail<Location>,
    bandits: Option<Rc<[usize]>>,
    actions: Trail<Action>,
}

impl History {
    pub(crate) fn root(game: Rc<Game>) -> History {
        let start = game.maze().start();
        History {
            game,
            turn: Turn::Bandit,
            alarm: true,
            num_golds: 0,
            agent: start,
            visited: Trail::new().push(start),
            bandits: None,
            actions: Trail::new(),
        }
    }

    pub fn game(&self) -> &Rc<Game> {
        &self.game
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_terminal(&self) -> bool {
        self.turn == Turn::Terminal
    }

    pub fn alarm(&self) -> bool {
        self.alarm
    }

    pub fn num_golds(&self) -> u32 {
        self.num_golds
    }

    pub fn agent_location(&self) -> Location {
        self.agent
    }

    pub fn visited_locations(&self) -> Vec<Location> {
        self.visited.to_vec()
    }

    pub fn bandit_indexes(&self) -> Option<&[usize]> {
        self.bandits.as_deref()
    }

    pub fn bandit_locations(&self) -> Vec<Location> {
        let dangers = self.game.maze().dangers();
        self.bandits
            .iter()
            .flat_map(|indexes| indexes.iter().map(move |&i| dangers[i]))
            .collect()
    }

    /// Actions taken from the root, oldest first.
    pub fn history(&self) -> Vec<Action> {
        self.actions.to_vec()
    }

    /// Legal actions in their canonical order; empty exactly at terminal histories.
    pub fn actions(&self) -> Vec<Action> {
        let maze = self.game.maze();
        match self.turn {
            Turn::Agent => Move::possible(maze, self.agent, &self.visited)
                .into_iter()
                .map(Action::Move)
                .collect(),
            Turn::Bandit => Allocation::possible(
                self.game.num_bandits(),
                maze.dangers().len(),
                self.bandit_indexes(),
                maze.danger_index(self.agent),
            )
            .into_iter()
            .map(Action::Allocation)
            .collect(),
            Turn::Chance => Chance::possible().into_iter().map(Action::Chance).collect(),
            Turn::Terminal => vec![],
        }
    }

    pub fn child(&self, action: &Action) -> Result<History, GameError> {
        if !self.actions().contains(action) {
            return Err(GameError::UnexpectedAction {
                action: action.to_string(),
                turn: self.turn,
            });
        }

        let mut child = self.clone();
        child.actions = self.actions.push(action.clone());
        let maze = self.game.maze();

        match action {
            Action::Move(m) => {
                let location = m.apply(self.agent);
                child.agent = location;
                child.visited = self.visited.push(location);

                child.turn = if Move::possible(maze, location, &child.visited).is_empty() {
                    Turn::Terminal
                } else if location == maze.goal() {
                    Turn::Terminal
                } else if maze.is_gold(location) {
                    child.num_golds += 1;
                    Turn::Agent
                } else if let Some(danger) = maze.danger_index(location) {
                    if self.bandit_indexes().map_or(false, |b| b.contains(&danger)) {
                        Turn::Chance
                    } else if self.alarm {
                        Turn::Bandit
                    } else {
                        Turn::Agent
                    }
                } else {
                    Turn::Agent
                };
            }
            Action::Allocation(allocation) => {
                if self.bandits.is_some() {
                    child.alarm = false;
                }
                child.bandits = Some(allocation.indexes().into());
                // A walled-in start leaves nothing to do after the first placement.
                child.turn = if Move::possible(maze, self.agent, &self.visited).is_empty() {
                    Turn::Terminal
                } else {
                    Turn::Agent
                };
            }
            Action::Chance(outcome) => {
                child.alarm = false;
                child.turn = match outcome {
                    Chance::Hit => Turn::Terminal,
                    Chance::Miss => Turn::Agent,
                };
            }
        }
        Ok(child)
    }

    /// Payoff of the agent: the base utility plus the gold collected if it reached
    /// the goal, zero otherwise.
    pub fn utility(&self) -> Result<f64, GameError> {
        if self.turn != Turn::Terminal {
            return Err(self.wrong_turn("utility"));
        }
        if self.agent == self.game.maze().goal() {
            Ok(BASE_UTILITY + f64::from(self.num_golds))
        } else {
            Ok(0.0)
        }
    }

    pub fn chance_prob(&self, outcome: Chance) -> Result<f64, GameError> {
        if self.turn != Turn::Chance {
            return Err(self.wrong_turn("chance probability"));
        }
        Ok(outcome.probability(self.game.hit_chance()))
    }

    pub fn infoset(&self) -> Result<Infoset, GameError> {
        let key = self.infoset_key()?;
        Ok(Infoset {
            turn: self.turn,
            index: self.game.infoset_index(&key),
            key,
        })
    }

    pub fn infoset_key(&self) -> Result<InfosetKey, GameError> {
        match self.turn {
            Turn::Agent => {
                let mut symbols: Vec<char> = self.actions.iter_rev().map(Action::symbol).collect();
                symbols.reverse();
                Ok(InfosetKey::Agent(symbols.into_iter().collect()))
            }
            Turn::Bandit => match self.bandit_indexes() {
                None => Ok(InfosetKey::BanditRoot),
                Some(bandits) => {
                    let maze = self.game.maze();
                    let empty = maze
                        .danger_index(self.agent)
                        .filter(|danger| !bandits.contains(danger))
                        .map(|danger| (0..danger).filter(|i| !bandits.contains(i)).count())
                        .ok_or(GameError::AgentNotOnEmptyDanger(self.agent))?;
                    Ok(InfosetKey::BanditReallocation {
                        allocation: self.game.allocation_index(bandits)?,
                        empty,
                    })
                }
            },
            Turn::Chance | Turn::Terminal => Err(self.wrong_turn("infoset")),
        }
    }

    fn wrong_turn(&self, query: &'static str) -> GameError {
        GameError::WrongTurn {
            query,
            turn: self.turn,
        }
    }
}

impl GameTreeVertex for History {
    type PlayerInfo = usize;
    type Action = Action;
    type Error = GameError;

    fn vertex_type(&self) -> VertexType {
        match self.turn {
            Turn::Agent => VertexType::Player(Player::Player1),
            Turn::Bandit => VertexType::Player(Player::Player2),
            Turn::Chance => VertexType::Chance,
            Turn::Terminal => VertexType::Terminal,
        }
    }

    fn player_information(&self) -> Result<usize, GameError> {
        self.infoset().map(|infoset| infoset.index)
    }

    fn available_actions(&self) -> Vec<Action> {
        self.actions()
    }

    fn chance_probability(&self, action: &Action) -> Result<f64, GameError> {
        match action {
            Action::Chance(outcome) => self.chance_prob(*outcome),
            _ => Err(GameError::UnexpectedAction {
                action: action.to_string(),
                turn: self.turn,
            }),
        }
    }

    fn next_state(&self, action: &Action) -> Result<History, GameError> {
        self.child(action)
    }

    fn leaf(&self) -> Result<Leaf, GameError> {
        self.utility().map(Leaf::zero_sum)
    }

    fn validate(&self) {
        debug_assert_eq!(self.is_terminal(), self.actions().is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use crate::reader::read_game;

    fn game(text: &str) -> Rc<Game> {
        read_game(&mut text.as_bytes()).unwrap()
    }

    fn labels(history: &History) -> Vec<String> {
        history.actions().iter().map(|a| a.to_string()).collect()
    }

    fn play(history: &History, label: &str) -> History {
        let action = history
            .actions()
            .into_iter()
            .find(|a| a.to_string() == label)
            .unwrap();
        history.child(&action).unwrap()
    }

    #[test]
    fn guarded_corridor() {
        let root = game("1\n3\nSED\n1\n0.3\n").root();
        assert_eq!(root.turn(), Turn::Bandit);
        assert_eq!(labels(&root), vec!["Allocate(0)"]);

        let placed = play(&root, "Allocate(0)");
        assert_eq!(placed.turn(), Turn::Agent);
        assert!(placed.alarm());
        assert_eq!(placed.bandit_locations(), vec![Location::new(1, 0)]);
        assert_eq!(labels(&placed), vec!["Right"]);

        let attacked = play(&placed, "Right");
        assert_eq!(attacked.turn(), Turn::Chance);
        assert_eq!(labels(&attacked), vec!["Miss", "Hit"]);
        assert_approx_eq!(attacked.chance_prob(Chance::Hit).unwrap(), 0.3);
        assert_approx_eq!(attacked.chance_prob(Chance::Miss).unwrap(), 0.7);

        let hit = play(&attacked, "Hit");
        assert!(hit.is_terminal());
        assert_approx_eq!(hit.utility().unwrap(), 0.0);

        let missed = play(&attacked, "Miss");
        assert_eq!(missed.turn(), Turn::Agent);
        assert!(!missed.alarm());
        let arrived = play(&missed, "Right");
        assert!(arrived.is_terminal());
        assert!(arrived.actions().is_empty());
        assert_approx_eq!(arrived.utility().unwrap(), BASE_UTILITY);
        assert_eq!(
            arrived.visited_locations(),
            vec![Location::new(0, 0), Location::new(1, 0), Location::new(2, 0)]
        );
        assert_eq!(arrived.history().len(), 4);
    }

    #[test]
    fn unguarded_danger_raises_the_alarm_once() {
        let root = game("1\n4\nSEED\n1\n0.5\n").root();
        assert_eq!(labels(&root), vec!["Allocate(0)", "Allocate(1)"]);

        let placed = play(&root, "Allocate(1)");
        let alarmed = play(&placed, "Right");
        assert_eq!(alarmed.turn(), Turn::Bandit);
        assert_eq!(
            alarmed.infoset_key().unwrap(),
            InfosetKey::BanditReallocation {
                allocation: 1,
                empty: 0
            }
        );
        // The only bandit may not jump onto the agent.
        assert_eq!(labels(&alarmed), vec!["Allocate(1)"]);

        let reallocated = play(&alarmed, "Allocate(1)");
        assert_eq!(reallocated.turn(), Turn::Agent);
        assert!(!reallocated.alarm());
        assert_eq!(play(&reallocated, "Right").turn(), Turn::Chance);

        // With the bandit on the first cell, the second one is reached after the attack
        // has disarmed the alarm.
        let placed = play(&root, "Allocate(0)");
        let missed = play(&play(&placed, "Right"), "Miss");
        assert_eq!(play(&missed, "Right").turn(), Turn::Agent);
    }

    #[test]
    fn gold_keeps_the_agent_moving() {
        let root = game("1\n4\nSGDE\n1\n0.5\n").root();
        let placed = play(&root, "Allocate(0)");
        let rich = play(&placed, "Right");
        assert_eq!(rich.turn(), Turn::Agent);
        assert_eq!(rich.num_golds(), 1);
        let done = play(&rich, "Right");
        assert!(done.is_terminal());
        assert_approx_eq!(done.utility().unwrap(), BASE_UTILITY + 1.0);
    }

    #[test]
    fn dead_ends_are_terminal() {
        let root = game("2\n3\nS-E\n-#D\n1\n0.5\n").root();
        let placed = play(&root, "Allocate(0)");
        assert_eq!(labels(&placed), vec!["Right", "Down"]);
        let corner = play(&play(&placed, "Right"), "Right");
        assert_eq!(corner.turn(), Turn::Chance);
        let stuck = play(&placed, "Down");
        assert!(stuck.is_terminal());
        assert_approx_eq!(stuck.utility().unwrap(), 0.0);

        let walled = game("1\n4\nS#ED\n1\n0.5\n").root();
        let nowhere = play(&walled, "Allocate(0)");
        assert!(nowhere.is_terminal());
        assert_approx_eq!(nowhere.utility().unwrap(), 0.0);
    }

    #[test]
    fn child_leaves_the_parent_untouched() {
        let root = game("3\n3\nS-E\n-#-\nE-D\n1\n0.5\n").root();
        let placed = play(&root, "Allocate(1)");
        let before = (labels(&placed), placed.infoset().unwrap(), placed.history());

        for action in placed.actions() {
            let child = placed.child(&action).unwrap();
            let _ = child.actions();
        }

        assert_eq!(labels(&placed), before.0);
        assert_eq!(placed.infoset().unwrap(), before.1);
        assert_eq!(placed.history(), before.2);
        assert_eq!(placed.visited_locations(), vec![Location::new(0, 0)]);
    }

    #[test]
    fn agent_infoset_hides_bandit_placement() {
        let root = game("3\n3\nS-E\n-#-\nE-D\n1\n0.5\n").root();
        assert_eq!(root.infoset_key().unwrap(), InfosetKey::BanditRoot);
        let first = play(&root, "Allocate(0)");
        let second = play(&root, "Allocate(1)");
        assert_eq!(first.infoset_key().unwrap(), InfosetKey::Agent("A".to_string()));
        assert_eq!(first.infoset().unwrap().index, second.infoset().unwrap().index);
        assert_eq!(labels(&first), labels(&second));

        let right = play(&first, "Right");
        assert_eq!(right.infoset_key().unwrap(), InfosetKey::Agent("AR".to_string()));
        assert_ne!(right.infoset().unwrap().index, first.infoset().unwrap().index);
    }

    #[test]
    fn contract_violations() {
        let root = game("1\n3\nSED\n1\n0.5\n").root();
        assert!(matches!(
            root.utility(),
            Err(GameError::WrongTurn { turn: Turn::Bandit, .. })
        ));
        assert!(matches!(root.chance_prob(Chance::Hit), Err(GameError::WrongTurn { .. })));

        let right = Action::Move(Move::new(1, 0).unwrap());
        assert!(matches!(
            root.child(&right),
            Err(GameError::UnexpectedAction { turn: Turn::Bandit, .. })
        ));

        let placed = play(&root, "Allocate(0)");
        let left = Action::Move(Move::new(-1, 0).unwrap());
        assert!(placed.child(&left).is_err());
        assert!(matches!(placed.chance_probability(&right), Err(GameError::UnexpectedAction { .. })));

        let hit = play(&play(&placed, "Right"), "Hit");
        assert!(matches!(hit.infoset(), Err(GameError::WrongTurn { turn: Turn::Terminal, .. })));
        assert!(hit.child(&right).is_err());
    }
}
