use crate::error::MazeError;
use crate::location::Location;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    Free,
    Obstacle,
}

/// Neighbour offsets, in the order moves are enumerated: right, down, left, up.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Rectangular grid with the distinguished cells of the game. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    data: Vec<Vec<Cell>>,
    start: Location,
    goal: Location,
    golds: Vec<Location>,
    dangers: Vec<Location>,
}

impl Maze {
    /// Validates that the grid is a non-empty rectangle and that every
    /// distinguished cell is a free cell within it.
    pub fn new(
        data: Vec<Vec<Cell>>,
        start: Location,
        goal: Location,
        golds: Vec<Location>,
        dangers: Vec<Location>,
    ) -> Result<Maze, MazeError> {
        let width = data.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(MazeError::EmptyMaze);
        }
        if let Some((row, found)) = data
            .iter()
            .map(|row| row.len())
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(MazeError::RowLength {
                row,
                expected: width,
                found,
            });
        }

        if start == goal {
            return Err(MazeError::StartIsGoal(start));
        }

        let maze = Maze {
            data,
            start,
            goal,
            golds,
            dangers,
        };
        let special = [maze.start, maze.goal]
            .iter()
            .chain(maze.golds.iter())
            .chain(maze.dangers.iter())
            .cloned()
            .collect::<Vec<_>>();
        for location in special {
            if !maze.is_free(location) {
                return Err(MazeError::NotFree(location));
            }
        }
        Ok(maze)
    }

    pub fn height(&self) -> usize {
        self.data.len()
    }

    pub fn width(&self) -> usize {
        self.data[0].len()
    }

    pub fn start(&self) -> Location {
        self.start
    }

    pub fn goal(&self) -> Location {
        self.goal
    }

    pub fn golds(&self) -> &[Location] {
        &self.golds
    }

    pub fn dangers(&self) -> &[Location] {
        &self.dangers
    }

    /// Free cells adjacent to `location`, in `DIRECTIONS` order.
    pub fn neighbors(&self, location: Location) -> impl Iterator<Item = Location> + '_ {
        DIRECTIONS
            .iter()
            .map(move |&(dx, dy)| location.add(dx, dy))
            .filter(move |&neighbor| self.is_free(neighbor))
    }

    pub fn contains(&self, location: Location) -> bool {
        location.x >= 0
            && location.y >= 0
            && (location.x as usize) < self.width()
            && (location.y as usize) < self.height()
    }

    /// Cells outside of the grid count as obstacles.
    pub fn is_free(&self, location: Location) -> bool {
        self.contains(location) && self.data[location.y as usize][location.x as usize] == Cell::Free
    }

    pub fn is_gold(&self, location: Location) -> bool {
        self.golds.contains(&location)
    }

    /// Position of `location` in the list of dangers, if it is a danger cell.
    pub fn danger_index(&self, location: Location) -> Option<usize> {
        self.dangers.iter().position(|&danger| danger == location)
    }
}
