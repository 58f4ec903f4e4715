use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::{Board, Coord, Grid};

/// A movement cost, counted in half units.
///
/// Every step cost is a Euclidean distance rounded to the nearest half,
/// so sums of costs are exact and totally ordered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u32);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub const fn from_half_units(half_units: u32) -> Self {
        Self(half_units)
    }

    pub fn half_units(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl std::ops::Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

impl Serialize for Cost {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Euclidean distance between two coordinates, rounded to the nearest half
/// unit (ties to even).
///
/// A cardinal step costs 1 and a diagonal step costs 1.5.
pub fn distance(a: Coord, b: Coord) -> Cost {
    let dx = a.x.abs_diff(b.x) as f64;
    let dy = a.y.abs_diff(b.y) as f64;
    let doubled = 2.0 * (dx * dx + dy * dy).sqrt();
    Cost(doubled.round_ties_even() as u32)
}

const DIRECTIONS: [(isize, isize); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

/// The open cells reachable from `coord` in a single step.
///
/// Diagonal steps are allowed even between two walls.
pub fn neighbors(grid: &Grid, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
    DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
        let x = coord.x as isize + dx;
        let y = coord.y as isize + dy;
        if !grid.contains(x, y) {
            return None;
        }
        let neighbor = Coord::new(x as usize, y as usize);
        grid.is_open(neighbor).then_some(neighbor)
    })
}

/// The result of a search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Starts with the start coordinate, ends with the goal if it is
    /// reachable, or else with the reachable coordinate closest to the goal.
    pub path: Vec<Coord>,
    pub reached_goal: bool,
    /// The accumulated cost of `path`.
    pub cost: Cost,
    /// How many coordinates were expanded during the search.
    pub expanded: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct QueueEntry {
    f: Cost,
    coord: Coord,
    g: Cost,
}

// Reversed, so that the max-heap pops the entry with the smallest f-score
// first. Equal f-scores are ordered by coordinate.
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The reachable coordinate closest to the goal seen so far.
#[derive(Copy, Clone, Debug)]
struct Closest {
    coord: Coord,
    h: Cost,
    g: Cost,
}

/// A* search over a grid with 8-directional movement.
pub struct AStar<'a> {
    grid: &'a Grid,
    start: Coord,
    goal: Coord,
}

impl<'a> AStar<'a> {
    pub fn new(grid: &'a Grid, start: Coord, goal: Coord) -> Self {
        Self { grid, start, goal }
    }

    fn heuristic(&self, coord: Coord) -> Cost {
        distance(coord, self.goal)
    }

    /// Finds a cheapest path from the start to the goal.
    ///
    /// This never fails: if the goal cannot be reached, the path leads to
    /// the reachable coordinate with the smallest heuristic distance to the
    /// goal, preferring the cheaper one among equally close coordinates.
    /// The output only depends on the grid, start and goal.
    pub fn pathfind(&self) -> SearchOutcome {
        let mut g_score: HashMap<Coord, Cost> = HashMap::new();
        let mut came_from: HashMap<Coord, Coord> = HashMap::new();
        let mut closed: HashSet<Coord> = HashSet::new();
        // Number of entries per coordinate currently in the queue
        let mut queued: HashMap<Coord, usize> = HashMap::new();
        let mut open = BinaryHeap::new();
        let mut expanded = 0;

        g_score.insert(self.start, Cost::ZERO);
        open.push(QueueEntry {
            f: self.heuristic(self.start),
            coord: self.start,
            g: Cost::ZERO,
        });
        *queued.entry(self.start).or_default() += 1;

        let mut closest = Closest {
            coord: self.start,
            h: self.heuristic(self.start),
            g: Cost::ZERO,
        };

        while let Some(QueueEntry { coord: current, g, .. }) = open.pop() {
            if let Entry::Occupied(mut entry) = queued.entry(current) {
                *entry.get_mut() -= 1;
                if *entry.get() == 0 {
                    entry.remove();
                }
            }
            // Superseded by an entry with a better g-score
            if g_score.get(&current).is_some_and(|&best| g > best) {
                continue;
            }

            if current == self.goal {
                return self.outcome(&came_from, &g_score, self.goal, expanded);
            }

            closed.insert(current);
            expanded += 1;
            trace!(%current, g = %g, "Expanding");

            for neighbor in neighbors(self.grid, current) {
                let tentative_g = g + distance(current, neighbor);
                let known_g = g_score.get(&neighbor).copied();

                if closed.contains(&neighbor) && known_g.is_some_and(|known| tentative_g >= known) {
                    continue;
                }

                let improves = known_g.map_or(true, |known| tentative_g < known);
                if improves || !queued.contains_key(&neighbor) {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative_g);
                    closed.remove(&neighbor);

                    let h = self.heuristic(neighbor);
                    open.push(QueueEntry {
                        f: tentative_g + h,
                        coord: neighbor,
                        g: tentative_g,
                    });
                    *queued.entry(neighbor).or_default() += 1;

                    if (h, tentative_g) < (closest.h, closest.g) {
                        closest = Closest {
                            coord: neighbor,
                            h,
                            g: tentative_g,
                        };
                    }
                }
            }
        }

        debug!(closest = %closest.coord, "Goal is unreachable");
        self.outcome(&came_from, &g_score, closest.coord, expanded)
    }

    fn outcome(
        &self,
        came_from: &HashMap<Coord, Coord>,
        g_score: &HashMap<Coord, Cost>,
        target: Coord,
        expanded: usize,
    ) -> SearchOutcome {
        let mut path = vec![target];
        let mut current = target;
        while let Some(&previous) = came_from.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        let cost = g_score.get(&target).copied().unwrap_or_default();
        let reached_goal = target == self.goal;
        debug!(
            path_len = path.len(),
            %cost,
            expanded,
            reached_goal,
            "Search finished"
        );
        SearchOutcome {
            path,
            reached_goal,
            cost,
            expanded,
        }
    }
}

impl Board {
    /// Runs [`AStar::pathfind()`] from this board's start to its goal.
    pub fn solve(&self) -> SearchOutcome {
        AStar::new(&self.grid, self.start, self.goal).pathfind()
    }
}
