// Text description of a game:
//
//   M              number of rows
//   N              number of columns
//   M rows of N    '#' obstacle, '-' free, 'S' start, 'D' goal,
//                  'G' gold, 'E' danger
//   num_bandits
//   hit_chance
//
// Gold and danger cells are numbered in row-major order.

use std::io::BufRead;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;

use crate::error::MazeError;
use crate::game::Game;
use crate::location::Location;
use crate::maze::{Cell, Maze};

/// Reads a maze and the game parameters, validating all of them.
pub fn read_game<R: BufRead>(input: &mut R) -> Result<Rc<Game>, MazeError> {
    let maze = read_maze(input)?;
    let num_bandits = read_number(input, "number of bandits")?;
    let hit_chance = read_number(input, "hit chance")?;
    Game::new(maze, num_bandits, hit_chance)
}

pub fn read_maze<R: BufRead>(input: &mut R) -> Result<Maze, MazeError> {
    let num_rows: usize = read_number(input, "number of rows")?;
    let num_cols: usize = read_number(input, "number of columns")?;
    if num_rows == 0 || num_cols == 0 {
        return Err(MazeError::EmptyMaze);
    }

    let mut data = Vec::with_capacity(num_rows);
    let mut start = None;
    let mut goal = None;
    let mut golds = vec![];
    let mut dangers = vec![];

    for y in 0..num_rows {
        let line = read_line(input, "end of the maze")?;
        let mut row = Vec::with_capacity(num_cols);
        for (x, symbol) in line.chars().enumerate() {
            let location = Location::new(x as i32, y as i32);
            let cell = match symbol {
                '#' => Cell::Obstacle,
                '-' => Cell::Free,
                'S' => {
                    if start.replace(location).is_some() {
                        return Err(MazeError::DuplicateStart);
                    }
                    Cell::Free
                }
                'D' => {
                    if goal.replace(location).is_some() {
                        return Err(MazeError::DuplicateGoal);
                    }
                    Cell::Free
                }
                'G' => {
                    golds.push(location);
                    Cell::Free
                }
                'E' => {
                    dangers.push(location);
                    Cell::Free
                }
                _ => return Err(MazeError::UnknownCell { symbol, location }),
            };
            row.push(cell);
        }
        if row.len() != num_cols {
            return Err(MazeError::RowLength {
                row: y,
                expected: num_cols,
                found: row.len(),
            });
        }
        data.push(row);
    }

    let (start, goal) = match (start, goal) {
        (Some(start), Some(goal)) => (start, goal),
        _ => return Err(MazeError::MissingStartOrGoal),
    };
    debug!(
        "Read maze with start {}, goal {}, {} golds and {} dangers",
        start,
        goal,
        golds.len(),
        dangers.len()
    );
    Maze::new(data, start, goal, golds, dangers)
}

/// Next non-empty line parsed as a number.
pub fn read_number<R: BufRead, T: FromStr>(input: &mut R, what: &'static str) -> Result<T, MazeError> {
    let line = read_line(input, what)?;
    line.parse().map_err(|_| MazeError::InvalidNumber {
        what,
        value: line.clone(),
    })
}

fn read_line<R: BufRead>(input: &mut R, what: &'static str) -> Result<String, MazeError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(MazeError::MissingLine(what));
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn read(text: &str) -> Result<Rc<Game>, MazeError> {
        read_game(&mut text.as_bytes())
    }

    #[test]
    fn reads_a_complete_game() {
        let game = read("3\n3\nSGE\n-#-\nE-D\n2\n0.25\n").unwrap();
        let maze = game.maze();
        assert_eq!((maze.height(), maze.width()), (3, 3));
        assert_eq!(maze.start(), Location::new(0, 0));
        assert_eq!(maze.goal(), Location::new(2, 2));
        assert_eq!(maze.golds(), &[Location::new(1, 0)]);
        assert_eq!(maze.dangers(), &[Location::new(2, 0), Location::new(0, 2)]);
        assert!(!maze.is_free(Location::new(1, 1)));
        assert_eq!(game.num_bandits(), 2);
        assert_approx_eq!(game.hit_chance(), 0.25);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut input = "\n1\n3\n\nSED\n1\n1\n4\n".as_bytes();
        let game = read_game(&mut input).unwrap();
        assert_eq!(game.maze().dangers().len(), 1);
        let player: usize = read_number(&mut input, "player").unwrap();
        assert_eq!(player, 4);
    }

    #[test]
    fn rejects_malformed_games() {
        assert!(matches!(read("1\n3\nSED\n"), Err(MazeError::MissingLine("number of bandits"))));
        assert!(matches!(read("x\n"), Err(MazeError::InvalidNumber { what: "number of rows", .. })));
        assert!(matches!(read("1\n3\nSE\n1\n0.5\n"), Err(MazeError::RowLength { row: 0, .. })));
        assert!(matches!(read("1\n3\nSEX\n1\n0.5\n"), Err(MazeError::UnknownCell { symbol: 'X', .. })));
        assert!(matches!(read("1\n4\nSESD\n1\n0.5\n"), Err(MazeError::DuplicateStart)));
        assert!(matches!(read("1\n4\nSEDD\n1\n0.5\n"), Err(MazeError::DuplicateGoal)));
        assert!(matches!(read("1\n3\nSE-\n1\n0.5\n"), Err(MazeError::MissingStartOrGoal)));
        assert!(matches!(read("0\n3\n"), Err(MazeError::EmptyMaze)));
        assert!(matches!(
            read("1\n3\nSED\n2\n0.5\n"),
            Err(MazeError::BanditCount { num_bandits: 2, num_dangers: 1 })
        ));
        assert!(matches!(read("1\n3\nSED\n0\n0.5\n"), Err(MazeError::BanditCount { .. })));
        assert!(matches!(read("1\n2\nSD\n1\n0.5\n"), Err(MazeError::BanditCount { .. })));
        assert!(matches!(read("1\n3\nSED\n1\n1.5\n"), Err(MazeError::HitChance(_))));
    }
}
