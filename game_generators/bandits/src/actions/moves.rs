use std::fmt;

use crate::error::GameError;
use crate::location::Location;
use crate::maze::Maze;
use crate::trail::Trail;

/// Unit step of the agent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    dx: i32,
    dy: i32,
}

impl Move {
    pub fn new(dx: i32, dy: i32) -> Result<Move, GameError> {
        if dx.abs() + dy.abs() != 1 {
            return Err(GameError::InvalidMove { dx, dy });
        }
        Ok(Move { dx, dy })
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }

    pub fn apply(&self, location: Location) -> Location {
        location.add(self.dx, self.dy)
    }

    /// Moves from `location` to a free neighbour which is not on the path walked
    /// so far, in the maze's neighbour order.
    pub fn possible(maze: &Maze, location: Location, visited: &Trail<Location>) -> Vec<Move> {
        maze.neighbors(location)
            .filter(|neighbor| !visited.contains(neighbor))
            .map(|neighbor| {
                let (dx, dy) = neighbor.sub(location);
                Move { dx, dy }
            })
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match (self.dx, self.dy) {
            (1, _) => "Right",
            (_, 1) => "Down",
            (-1, _) => "Left",
            _ => "Up",
        }
    }

    pub fn symbol(&self) -> char {
        match (self.dx, self.dy) {
            (1, _) => 'R',
            (_, 1) => 'D',
            (-1, _) => 'L',
            _ => 'U',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;

    #[test]
    fn rejects_non_unit_steps() {
        assert!(Move::new(0, 1).is_ok());
        assert!(matches!(Move::new(1, 1), Err(GameError::InvalidMove { dx: 1, dy: 1 })));
        assert!(Move::new(0, 0).is_err());
        assert!(Move::new(-2, 0).is_err());
    }

    #[test]
    fn possible_moves_skip_visited_cells() {
        let maze = Maze::new(
            vec![vec![Cell::Free; 3]; 2],
            Location::new(1, 0),
            Location::new(2, 1),
            vec![],
            vec![],
        )
        .unwrap();
        let start = Location::new(1, 0);
        let visited = Trail::new().push(start);

        let labels: Vec<_> = Move::possible(&maze, start, &visited)
            .iter()
            .map(Move::label)
            .collect();
        assert_eq!(labels, vec!["Right", "Down", "Left"]);

        let visited = visited.push(Location::new(1, 1));
        let labels: Vec<_> = Move::possible(&maze, Location::new(1, 1), &visited)
            .iter()
            .map(Move::label)
            .collect();
        assert_eq!(labels, vec!["Right", "Left"]);
    }
}
