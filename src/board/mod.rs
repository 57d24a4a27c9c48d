//! Board model: tiles, positions, and path enumeration.

pub mod answer;
pub mod constraints;
pub mod generator;
pub mod path;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;
use crate::letters;

/// The two wildcard placements permitted inside the 2x2 interior. Both
/// pairs are diagonal and therefore non-adjacent.
pub const WILDCARD_PAIRS: [(Position, Position); 2] = [
    (Position { row: 1, col: 1 }, Position { row: 2, col: 2 }),
    (Position { row: 1, col: 2 }, Position { row: 2, col: 1 }),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Two positions are adjacent iff both deltas are at most 1 and they
    /// are not the same cell.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let dr = (self.row as i8 - other.row as i8).abs();
        let dc = (self.col as i8 - other.col as i8).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }

    /// A move is diagonal iff both row and column change.
    pub fn is_diagonal_move_to(&self, other: &Position) -> bool {
        self.row != other.row && self.col != other.col
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Lettered { letter: char, points: u32 },
    Wildcard,
}

impl Tile {
    pub fn lettered(letter: char) -> Self {
        Tile::Lettered {
            letter: letter.to_ascii_lowercase(),
            points: letters::points_for_letter(letter.to_ascii_lowercase()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Tile::Wildcard)
    }

    /// Whether this tile can supply the given character: a lettered tile
    /// matches only its own letter, a wildcard matches anything.
    pub fn matches(&self, c: char) -> bool {
        match self {
            Tile::Lettered { letter, .. } => *letter == c,
            Tile::Wildcard => true,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Tile::Lettered { points, .. } => *points,
            Tile::Wildcard => 0,
        }
    }
}

/// 4x4 grid of tiles with exactly two wildcards at one of the two permitted
/// diagonal pairs. The first/second designation (lexicographically smaller
/// position is first) is part of the board's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: [[Tile; 4]; 4],
    first_wildcard: Position,
    second_wildcard: Position,
}

impl Board {
    /// Builds a board from a 4x4 grid of tiles, validating the invariants:
    /// exactly two wildcards, at one of the permitted pairs.
    pub fn from_grid(tiles: [[Tile; 4]; 4]) -> Result<Self, GameError> {
        let mut wildcards = Vec::new();
        for (row, line) in tiles.iter().enumerate() {
            for (col, tile) in line.iter().enumerate() {
                if tile.is_wildcard() {
                    wildcards.push(Position::new(row as u8, col as u8));
                }
            }
        }

        if wildcards.len() != 2 {
            return Err(GameError::PersistenceFailure(format!(
                "board must have exactly 2 wildcards, found {}",
                wildcards.len()
            )));
        }

        wildcards.sort();
        let (a, b) = (wildcards[0], wildcards[1]);
        if !WILDCARD_PAIRS
            .iter()
            .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
        {
            return Err(GameError::PersistenceFailure(format!(
                "wildcards at {:?} and {:?} are not one of the permitted interior pairs",
                a, b
            )));
        }

        Ok(Self {
            tiles,
            first_wildcard: a,
            second_wildcard: b,
        })
    }

    /// Parses a 16-character row-major string such as
    /// `"hissc*lole*dseeo"`, where `*` marks a wildcard. Panics on malformed
    /// input; intended for tests and fixtures, not untrusted data.
    pub fn from_letters(spec: &str) -> Self {
        let chars: Vec<char> = spec.chars().collect();
        assert_eq!(chars.len(), 16, "board spec must have exactly 16 cells");

        let mut tiles = [[Tile::Wildcard; 4]; 4];
        for (i, &c) in chars.iter().enumerate() {
            let row = i / 4;
            let col = i % 4;
            tiles[row][col] = if c == '*' {
                Tile::Wildcard
            } else {
                Tile::lettered(c)
            };
        }
        Board::from_grid(tiles).expect("from_letters spec must satisfy board invariants")
    }

    pub fn get(&self, pos: Position) -> Tile {
        self.tiles[pos.row as usize][pos.col as usize]
    }

    pub fn first_wildcard(&self) -> Position {
        self.first_wildcard
    }

    pub fn second_wildcard(&self) -> Position {
        self.second_wildcard
    }

    pub fn is_first_wildcard(&self, pos: Position) -> bool {
        pos == self.first_wildcard
    }

    pub fn is_second_wildcard(&self, pos: Position) -> bool {
        pos == self.second_wildcard
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0u8..4).flat_map(|row| (0u8..4).map(move |col| Position::new(row, col)))
    }

    /// Enumerates every valid path spelling `word` on this board, along
    /// with the wildcard demand each path implies. Full
    /// enumeration -- no filtering by wildcard count here; that happens
    /// only for display purposes.
    pub fn enumerate_paths(&self, word: &str) -> Vec<path::PathMatch> {
        let word: Vec<char> = word.chars().collect();
        if word.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for start in self.positions() {
            self.dfs(&word, 0, start, 0u16, Vec::new(), &mut results);
        }
        results
    }

    fn dfs(
        &self,
        word: &[char],
        index: usize,
        pos: Position,
        visited: u16,
        mut so_far: Vec<Position>,
        results: &mut Vec<path::PathMatch>,
    ) {
        let bit = 1u16 << (pos.row * 4 + pos.col);
        if visited & bit != 0 {
            return;
        }
        let tile = self.get(pos);
        if !tile.matches(word[index]) {
            return;
        }

        so_far.push(pos);
        let visited = visited | bit;

        if index + 1 == word.len() {
            results.push(path::PathMatch::new(self, word, so_far));
            return;
        }

        for next in self.neighbors(pos) {
            self.dfs(word, index + 1, next, visited, so_far.clone(), results);
        }
    }

    /// The (up to 8) king-move neighbors of `pos` that lie on the board.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        NeighborIter::new(pos)
    }
}

struct NeighborIter {
    origin: Position,
    index: usize,
}

impl NeighborIter {
    fn new(origin: Position) -> Self {
        Self { origin, index: 0 }
    }
}

/// King-move offsets, in a stable order, used both for neighbor iteration
/// and to keep path enumeration order deterministic.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.index < DIRECTIONS.len() {
            let (dr, dc) = DIRECTIONS[self.index];
            self.index += 1;
            let row = self.origin.row as i8 + dr;
            let col = self.origin.col as i8 + dc;
            if (0..4).contains(&row) && (0..4).contains(&col) {
                return Some(Position::new(row as u8, col as u8));
            }
        }
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for tile in row {
                match tile {
                    Tile::Lettered { letter, .. } => write!(f, " {} ", letter.to_ascii_uppercase())?,
                    Tile::Wildcard => write!(f, " * ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
