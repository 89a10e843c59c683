//! Tower of Hanoi
//!
//! The matrix is levels x pegs: row 0 is the top level, the last row the
//! peg base. A cell holds the size of the disk resting there.

use crate::algorithm::state::{CellValue, Highlight, MatrixState, Step};
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function hanoi(n, from, to, via):
  if n == 0:
    return
  hanoi(n - 1, from, via, to)
  move disk n from `from` to `to`
  hanoi(n - 1, via, to, from)"#;

const L_CALL: usize = 1;
const L_MOVE: usize = 5;
const L_DONE: usize = 6;

const DISKS: usize = 3;
const PEG_NAMES: [&str; 3] = ["A", "B", "C"];

struct Towers<'a, 'n> {
    n: &'a Narrator<'n>,
    /// Disk sizes per peg, bottom first
    pegs: [Vec<usize>; 3],
    moves: usize,
    rec: StepRecorder,
}

impl Towers<'_, '_> {
    /// Row index at which the `height`-th disk (0 = bottom) of a peg is drawn
    fn level(height: usize) -> usize {
        DISKS - 1 - height
    }

    fn state(&self) -> MatrixState {
        let mut values = vec![vec![CellValue::Empty; self.pegs.len()]; DISKS];
        for (peg, disks) in self.pegs.iter().enumerate() {
            for (height, &disk) in disks.iter().enumerate() {
                values[Self::level(height)][peg] = CellValue::Number(disk as i64);
            }
        }
        MatrixState::from_values(values).with_labels(
            (0..DISKS).map(|level| level.to_string()).collect(),
            PEG_NAMES.iter().map(|p| (*p).to_owned()).collect(),
        )
    }

    fn solve(&mut self, disks: usize, from: usize, to: usize, via: usize) {
        if disks == 0 {
            return;
        }
        self.solve(disks - 1, from, via, to);

        let source_height = self.pegs[from].len().saturating_sub(1);
        let Some(disk) = self.pegs[from].pop() else {
            return;
        };
        self.pegs[to].push(disk);
        self.moves += 1;
        let target_height = self.pegs[to].len() - 1;

        let n = self.n;
        self.rec.print(format!("{}: {} -> {}", disk, PEG_NAMES[from], PEG_NAMES[to]));
        self.rec.record(
            say!(n, "hanoi.move", disk = disk, from = PEG_NAMES[from], to = PEG_NAMES[to], count = self.moves),
            L_MOVE,
            vars![
                "n" => disks,
                "from" => PEG_NAMES[from],
                "to" => PEG_NAMES[to],
                "via" => PEG_NAMES[via],
                "moves" => self.moves,
            ],
            self.state()
                .highlight(Self::level(source_height), from, Highlight::Eliminated)
                .highlight(Self::level(target_height), to, Highlight::Placed),
        );

        self.solve(disks - 1, via, to, from);
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut towers = Towers {
        n,
        pegs: [(1..=DISKS).rev().collect(), Vec::new(), Vec::new()],
        moves: 0,
        rec: StepRecorder::new(),
    };

    towers.rec.record(
        say!(n, "hanoi.start", disks = DISKS, from = PEG_NAMES[0], to = PEG_NAMES[2]),
        L_CALL,
        vars!["n" => DISKS, "from" => PEG_NAMES[0], "to" => PEG_NAMES[2], "via" => PEG_NAMES[1]],
        towers.state(),
    );
    towers.solve(DISKS, 0, 2, 1);

    let total = towers.moves;
    let done = (0..DISKS).fold(towers.state(), |state, level| state.highlight(level, 2, Highlight::Sorted));
    towers.rec.record(
        say!(n, "hanoi.done", moves = total),
        L_DONE,
        vars!["n" => DISKS, "moves" => total],
        done,
    );
    towers.rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::testing;

    #[test]
    fn test_move_count_is_two_to_the_n_minus_one() {
        let steps = testing::run_en(run);
        let moves = steps.iter().filter(|s| s.code_line == Some(L_MOVE)).count();
        assert_eq!(moves, (1 << DISKS) - 1);
        assert_eq!(steps.last().unwrap().console_output.len(), 7);
    }

    #[test]
    fn test_trace_starts_at_header_and_ends_on_last_line() {
        let steps = testing::run_en(run);
        assert_eq!(steps.first().unwrap().code_line, Some(L_CALL));
        assert_eq!(steps.last().unwrap().code_line, Some(L_DONE));
        assert_eq!(L_DONE, SOURCE.lines().count());
    }

    #[test]
    fn test_all_disks_end_on_last_peg_in_order() {
        let steps = testing::run_en(run);
        let board = steps.last().unwrap().matrix().unwrap();
        let last_peg: Vec<Option<i64>> = (0..DISKS).map(|r| board.get(r, 2).and_then(CellValue::as_number)).collect();
        assert_eq!(last_peg, vec![Some(1), Some(2), Some(3)]);
        assert!(board.values.iter().all(|row| row[0].is_empty() && row[1].is_empty()));
    }

    #[test]
    fn test_never_larger_on_smaller() {
        for step in testing::run_en(run) {
            let board = step.matrix().unwrap();
            for peg in 0..3 {
                let column: Vec<i64> = (0..DISKS)
                    .rev()
                    .filter_map(|r| board.get(r, peg).and_then(CellValue::as_number))
                    .collect();
                assert!(column.windows(2).all(|w| w[0] > w[1]), "{:?}", column);
            }
        }
    }
}
