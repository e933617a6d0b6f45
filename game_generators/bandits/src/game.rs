use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::error::{GameError, MazeError};
use crate::history::History;
use crate::infoset::{InfosetKey, InfosetRegistry};
use crate::maze::Maze;

/// Payoff of reaching the goal, before the collected gold is added.
pub const BASE_UTILITY: f64 = 10.0;

/// One instance of the pursuit game: the maze, its parameters and the registry of
/// information sets discovered so far. Histories of the game share it through `Rc`.
#[derive(Debug)]
pub struct Game {
    maze: Maze,
    num_bandits: usize,
    hit_chance: f64,
    registry: RefCell<InfosetRegistry>,
}

impl Game {
    pub fn new(maze: Maze, num_bandits: usize, hit_chance: f64) -> Result<Rc<Game>, MazeError> {
        let num_dangers = maze.dangers().len();
        if num_bandits == 0 || num_bandits > num_dangers {
            return Err(MazeError::BanditCount {
                num_bandits,
                num_dangers,
            });
        }
        if !(0.0..=1.0).contains(&hit_chance) {
            return Err(MazeError::HitChance(hit_chance));
        }
        info!(
            "Game on a {}x{} maze with {} dangers, {} bandits and hit chance {}",
            maze.height(),
            maze.width(),
            num_dangers,
            num_bandits,
            hit_chance
        );
        Ok(Rc::new(Game {
            registry: RefCell::new(InfosetRegistry::new(num_bandits, num_dangers)),
            maze,
            num_bandits,
            hit_chance,
        }))
    }

    /// The initial history, where the bandits place themselves.
    pub fn root(self: &Rc<Self>) -> History {
        History::root(Rc::clone(self))
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn num_bandits(&self) -> usize {
        self.num_bandits
    }

    pub fn hit_chance(&self) -> f64 {
        self.hit_chance
    }

    pub fn infoset_index(&self, key: &InfosetKey) -> usize {
        self.registry.borrow_mut().index(key)
    }

    pub fn allocation_index(&self, indexes: &[usize]) -> Result<usize, GameError> {
        self.registry.borrow().allocation_index(indexes)
    }

    pub fn num_infosets(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Starts numbering information sets afresh.
    pub fn reset_infosets(&self) {
        self.registry
            .borrow_mut()
            .reset(self.num_bandits, self.maze.dangers().len());
    }
}
