//! Maze shortest path by breadth-first search with a parent map
//!
//! Open cells show their BFS distance once discovered. The path is rebuilt
//! by following parent links back from the goal.

use std::collections::{BTreeMap, VecDeque};

use crate::algorithm::state::{CellValue, Highlight, MatrixState, Step};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function solveMaze(grid, start, goal):
  queue = [start]
  parent = {start: none}
  while queue is not empty:
    cell = queue.dequeue()
    if cell == goal:
      break
    for next in open neighbors of cell (up, right, down, left):
      if next not in parent:
        parent[next] = cell
        queue.enqueue(next)
  path = follow parent links from goal back to start
  return path"#;

const L_INIT: usize = 3;
const L_DEQUEUE: usize = 5;
const L_GOAL: usize = 7;
const L_ENQUEUE: usize = 11;
const L_PATH: usize = 12;
const L_RETURN: usize = 13;

const GRID: [&str; 6] = [
    "S.#...",
    ".##.#.",
    "....#.",
    "#.##..",
    "..#.#.",
    "#...#G",
];

type Cell = (usize, usize);

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

struct Maze {
    rows: usize,
    cols: usize,
    walls: Vec<Vec<bool>>,
    start: Cell,
    goal: Cell,
}

impl Maze {
    fn parse(grid: &[&str]) -> Self {
        let mut start = (0, 0);
        let mut goal = (0, 0);
        let walls = grid
            .iter()
            .enumerate()
            .map(|(r, line)| {
                line.chars()
                    .enumerate()
                    .map(|(c, ch)| {
                        match ch {
                            'S' => start = (r, c),
                            'G' => goal = (r, c),
                            _ => {}
                        }
                        ch == '#'
                    })
                    .collect()
            })
            .collect();
        Self {
            rows: grid.len(),
            cols: grid.first().map_or(0, |line| line.len()),
            walls,
            start,
            goal,
        }
    }

    /// Open neighbors in up, right, down, left order
    fn neighbors(&self, (r, c): Cell) -> Vec<Cell> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = r.checked_add_signed(dr)?;
                let nc = c.checked_add_signed(dc)?;
                (nr < self.rows && nc < self.cols && !self.walls[nr][nc]).then_some((nr, nc))
            })
            .collect()
    }
}

struct Search {
    distance: BTreeMap<Cell, usize>,
    expanded: Vec<Cell>,
    queue: VecDeque<Cell>,
}

impl Search {
    fn state(&self, maze: &Maze) -> MatrixState {
        let mut values = vec![vec![CellValue::Empty; maze.cols]; maze.rows];
        for (r, row) in maze.walls.iter().enumerate() {
            for (c, &wall) in row.iter().enumerate() {
                if wall {
                    values[r][c] = CellValue::text("#");
                }
            }
        }
        for (&(r, c), &d) in &self.distance {
            values[r][c] = CellValue::Number(d as i64);
        }
        values[maze.start.0][maze.start.1] = CellValue::text("S");
        values[maze.goal.0][maze.goal.1] = CellValue::text("G");

        let mut state = MatrixState::from_values(values);
        for (r, row) in maze.walls.iter().enumerate() {
            for (c, &wall) in row.iter().enumerate() {
                if wall {
                    state = state.highlight(r, c, Highlight::Wall);
                }
            }
        }
        for &(r, c) in &self.queue {
            state = state.highlight(r, c, Highlight::Active);
        }
        for &(r, c) in &self.expanded {
            state = state.highlight(r, c, Highlight::Visited);
        }
        state
            .highlight(maze.start.0, maze.start.1, Highlight::Start)
            .highlight(maze.goal.0, maze.goal.1, Highlight::Goal)
    }
}

fn fmt_cell((r, c): Cell) -> String {
    format!("({},{})", r, c)
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    solve(n, &GRID)
}

fn solve(n: &Narrator<'_>, grid: &[&str]) -> Vec<Step> {
    let maze = Maze::parse(grid);
    let mut rec = StepRecorder::new();
    let mut parent: BTreeMap<Cell, Option<Cell>> = BTreeMap::from([(maze.start, None)]);
    let mut search = Search {
        distance: BTreeMap::from([(maze.start, 0)]),
        expanded: Vec::new(),
        queue: VecDeque::from([maze.start]),
    };

    rec.record(
        say!(n, "maze.start", start = fmt_cell(maze.start), goal = fmt_cell(maze.goal)),
        L_INIT,
        vars!["start" => fmt_cell(maze.start), "goal" => fmt_cell(maze.goal), "queue" => 1usize],
        search.state(&maze),
    );

    let mut reached = false;
    while let Some(cell) = search.queue.pop_front() {
        search.expanded.push(cell);
        let dist = search.distance.get(&cell).copied().unwrap_or(0);
        rec.record(
            say!(n, "maze.dequeue", cell = fmt_cell(cell), dist = dist),
            L_DEQUEUE,
            vars!["cell" => fmt_cell(cell), "dist" => dist, "queue" => search.queue.len()],
            search.state(&maze).highlight(cell.0, cell.1, Highlight::Current),
        );

        if cell == maze.goal {
            reached = true;
            rec.record(
                say!(n, "maze.goal", dist = dist),
                L_GOAL,
                vars!["cell" => fmt_cell(cell), "dist" => dist],
                search.state(&maze).highlight(cell.0, cell.1, Highlight::Found),
            );
            break;
        }

        for next in maze.neighbors(cell) {
            if parent.contains_key(&next) {
                continue;
            }
            parent.insert(next, Some(cell));
            search.distance.insert(next, dist + 1);
            search.queue.push_back(next);
            rec.record(
                say!(n, "maze.enqueue", cell = fmt_cell(next), dist = dist + 1),
                L_ENQUEUE,
                vars!["cell" => fmt_cell(cell), "next" => fmt_cell(next), "queue" => search.queue.len()],
                search
                    .state(&maze)
                    .highlight(cell.0, cell.1, Highlight::Current)
                    .highlight(next.0, next.1, Highlight::Selected),
            );
        }
    }

    if !reached {
        rec.record(
            say!(n, "maze.no_path"),
            L_RETURN,
            vars!["explored" => search.expanded.len()],
            search.state(&maze),
        );
        return rec.finish();
    }

    let mut path = vec![maze.goal];
    let mut cursor = maze.goal;
    while let Some(Some(prev)) = parent.get(&cursor) {
        path.push(*prev);
        cursor = *prev;
    }
    path.reverse();

    let traced = path
        .iter()
        .fold(search.state(&maze), |state, &(r, c)| state.highlight(r, c, Highlight::Path));
    rec.print(path.iter().map(|&c| fmt_cell(c)).collect::<Vec<_>>().join(" -> "));
    rec.record(
        say!(n, "maze.path", moves = path.len() - 1),
        L_PATH,
        vars!["length" => path.len() - 1],
        traced.clone(),
    );
    rec.record(
        say!(n, "maze.done", moves = path.len() - 1),
        L_RETURN,
        vars!["length" => path.len() - 1],
        traced,
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::state::Scalar;
    use crate::algorithm::testing;
    use crate::i18n::Locale;

    /// Independent BFS distance from S to G
    fn shortest(grid: &[&str]) -> Option<usize> {
        let maze = Maze::parse(grid);
        let mut dist = BTreeMap::from([(maze.start, 0usize)]);
        let mut queue = VecDeque::from([maze.start]);
        while let Some(cell) = queue.pop_front() {
            for next in maze.neighbors(cell) {
                if !dist.contains_key(&next) {
                    dist.insert(next, dist[&cell] + 1);
                    queue.push_back(next);
                }
            }
        }
        dist.get(&maze.goal).copied()
    }

    #[test]
    fn test_path_is_shortest_and_connected() {
        let steps = testing::run_en(run);
        let last = steps.last().unwrap();
        let expected = shortest(&GRID).unwrap();
        assert_eq!(last.variables.get("length"), Some(&Scalar::from(expected)));

        let board = last.matrix().unwrap();
        let path: Vec<_> = board
            .highlights
            .iter()
            .filter(|(_, h)| **h == Highlight::Path)
            .map(|(k, _)| (k.row, k.col))
            .collect();
        assert_eq!(path.len(), expected + 1);
        for (r, c) in path {
            assert_ne!(GRID[r].as_bytes()[c], b'#');
        }
    }

    #[test]
    fn test_unreachable_goal() {
        let narrator = Narrator::builtin(Locale::En);
        let steps = solve(&narrator, &["S#", "#G"]);
        assert_eq!(steps.last().unwrap().code_line, Some(L_RETURN));
        assert!(steps.iter().all(|s| s.code_line != Some(L_PATH)));
    }
}
