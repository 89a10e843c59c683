//! Top-down Fibonacci with a memo table

use std::collections::{BTreeMap, BTreeSet};

use crate::algorithm::concept::{ElementState, MemoEntry, MemoTable};
use crate::algorithm::state::Step;
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function fib(n, memo):
  if n in memo:
    return memo[n]
  if n <= 1:
    return n
  memo[n] = fib(n - 1, memo) + fib(n - 2, memo)
  return memo[n]"#;

const L_CALL: usize = 1;
const L_HIT: usize = 3;
const L_BASE: usize = 5;
const L_STORE: usize = 6;
const L_RETURN: usize = 7;

const INPUT: u32 = 6;

struct Memo<'a, 'n> {
    n: &'a Narrator<'n>,
    memo: BTreeMap<u32, u64>,
    pending: BTreeSet<u32>,
    calls: u32,
    hits: u32,
    rec: StepRecorder,
}

impl Memo<'_, '_> {
    /// Memo table for 2..=INPUT; `focus` overrides one entry's state
    fn table(&self, active: Option<u32>, focus: Option<(u32, ElementState)>) -> MemoTable {
        let entries = (2..=INPUT)
            .map(|k| {
                let base = match (self.memo.get(&k), self.pending.contains(&k)) {
                    (Some(_), _) => ElementState::Done,
                    (None, true) => ElementState::Waiting,
                    (None, false) => ElementState::Idle,
                };
                let state = match focus {
                    Some((f, state)) if f == k => state,
                    _ => base,
                };
                MemoEntry {
                    n: k,
                    value: self.memo.get(&k).copied(),
                    state,
                }
            })
            .collect();
        MemoTable {
            entries,
            active,
            calls: self.calls,
            hits: self.hits,
        }
    }

    fn fib(&mut self, k: u32) -> u64 {
        let n = self.n;
        self.calls += 1;
        self.rec.record(
            say!(n, "memo.call", n = k),
            L_CALL,
            vars!["n" => k, "calls" => self.calls, "hits" => self.hits],
            self.table(Some(k), Some((k, ElementState::Active))),
        );

        if let Some(&value) = self.memo.get(&k) {
            self.hits += 1;
            self.rec.record(
                say!(n, "memo.hit", n = k, value = value),
                L_HIT,
                vars!["n" => k, "memo[n]" => value, "calls" => self.calls, "hits" => self.hits],
                self.table(Some(k), Some((k, ElementState::Found))),
            );
            return value;
        }

        if k <= 1 {
            let value = u64::from(k);
            self.rec.record(
                say!(n, "memo.base", n = k),
                L_BASE,
                vars!["n" => k, "calls" => self.calls, "hits" => self.hits],
                self.table(Some(k), None),
            );
            return value;
        }

        self.pending.insert(k);
        let value = self.fib(k - 1) + self.fib(k - 2);
        self.pending.remove(&k);
        self.memo.insert(k, value);
        self.rec.record(
            say!(n, "memo.store", n = k, value = value),
            L_STORE,
            vars!["n" => k, "memo[n]" => value, "calls" => self.calls, "hits" => self.hits],
            self.table(Some(k), Some((k, ElementState::Entering))),
        );
        value
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut memo = Memo {
        n,
        memo: BTreeMap::new(),
        pending: BTreeSet::new(),
        calls: 0,
        hits: 0,
        rec: StepRecorder::new(),
    };
    let value = memo.fib(INPUT);
    memo.rec.print(format!("fib({}) = {} ({} calls, {} memo hits)", INPUT, value, memo.calls, memo.hits));
    memo.rec.record(
        say!(n, "memo.done", n = INPUT, value = value, calls = memo.calls, hits = memo.hits),
        L_RETURN,
        vars!["n" => INPUT, "result" => value, "calls" => memo.calls, "hits" => memo.hits],
        memo.table(None, None),
    );
    memo.rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    #[test]
    fn test_memo_table_and_counters() {
        let steps = testing::run_en(run);
        let Some(ConceptState::MemoTable(table)) = steps.last().unwrap().concept() else {
            panic!("expected memo table");
        };
        let values: Vec<Option<u64>> = table.entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![Some(1), Some(2), Some(3), Some(5), Some(8)]);
        assert_eq!((table.calls, table.hits), (11, 3));
        assert!(table.entries.iter().all(|e| e.state == ElementState::Done));
    }
}
