use std::{collections::VecDeque, fmt};

use hashbrown::HashSet;

use crate::error::Error;

/// One tile of the vault floor: an operator applied to the orb's weight,
/// or a number feeding the pending operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Add,
    Sub,
    Mul,
    Value(i64),
}

/// The vault floor, row by row from the door at the top down to the
/// antechamber, indexed as `FLOOR[y][x]`.
const FLOOR: [[Cell; 4]; 4] = [
    [Cell::Mul, Cell::Value(8), Cell::Sub, Cell::Value(1)],
    [Cell::Value(4), Cell::Mul, Cell::Value(11), Cell::Mul],
    [Cell::Add, Cell::Value(4), Cell::Sub, Cell::Value(18)],
    [Cell::Value(22), Cell::Sub, Cell::Value(9), Cell::Mul],
];

/// The antechamber tile where the orb is picked up.
const START: (usize, usize) = (0, 3);
/// The vault door tile.
const VAULT: (usize, usize) = (3, 0);
/// The orb's weight as it is picked up.
const INITIAL_WEIGHT: i64 = 22;
/// The weight the orb must reach as it arrives at the vault door.
const TARGET_WEIGHT: i64 = 30;
/// The orb shatters when its weight leaves `0..=WEIGHT_LIMIT`.
const WEIGHT_LIMIT: i64 = 1023;

/// A single step across the vault floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the vault door
    North,
    /// Toward the higher columns
    East,
    /// Toward the antechamber
    South,
    /// Toward the lower columns
    West,
}

impl Direction {
    /// The tile one step in this direction, when it stays on the floor.
    fn apply(self, x: usize, y: usize) -> Option<(usize, usize)> {
        match self {
            Self::North => y.checked_sub(1).map(|y| (x, y)),
            Self::East => (x + 1 < FLOOR[0].len()).then_some((x + 1, y)),
            Self::South => (y + 1 < FLOOR.len()).then_some((x, y + 1)),
            Self::West => x.checked_sub(1).map(|x| (x, y)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        write!(f, "{name}")
    }
}

/// A partial route through the vault, tracked by the breadth-first search.
#[derive(Debug, Clone)]
struct Route {
    x: usize,
    y: usize,
    weight: i64,
    steps: Vec<Direction>,
}

/// Find the shortest route that carries the orb from the antechamber to
/// the vault door arriving at exactly the target weight.
///
/// The floor alternates number and operator tiles, so the orb's weight
/// changes on every second step: stepping onto an operator tile arms it,
/// and stepping onto a number tile applies the armed operator. The
/// antechamber tile resets the orb and may never be re-entered, and the
/// vault door ends the route whether or not the weight is right.
pub fn shortest_path() -> Result<Vec<Direction>, Error> {
    let mut queue = VecDeque::new();
    let mut seen: HashSet<(usize, usize, i64)> = HashSet::new();

    queue.push_back(Route {
        x: START.0,
        y: START.1,
        weight: INITIAL_WEIGHT,
        steps: Vec::new(),
    });

    while let Some(route) = queue.pop_front() {
        // standing on an operator tile means that operator is armed
        let armed = FLOOR[route.y][route.x];

        for direction in [Direction::North, Direction::East, Direction::South, Direction::West] {
            let Some((x, y)) = direction.apply(route.x, route.y) else {
                continue;
            };
            if (x, y) == START {
                continue;
            }

            let weight = match FLOOR[y][x] {
                Cell::Value(value) => match armed {
                    Cell::Add => route.weight + value,
                    Cell::Sub => route.weight - value,
                    Cell::Mul => route.weight * value,
                    // two adjacent number tiles never occur on this floor
                    Cell::Value(_) => route.weight,
                },
                _ => route.weight,
            };
            if !(0..=WEIGHT_LIMIT).contains(&weight) {
                continue;
            }

            let mut steps = route.steps.clone();
            steps.push(direction);

            if (x, y) == VAULT {
                if weight == TARGET_WEIGHT {
                    return Ok(steps);
                }
                // arriving at the door at any other weight destroys the orb
                continue;
            }

            if seen.insert((x, y, weight)) {
                queue.push_back(Route { x, y, weight, steps });
            }
        }
    }

    Err(Error::NoSolution(
        "no route carries the orb to the vault at the target weight".to_string(),
    ))
}
