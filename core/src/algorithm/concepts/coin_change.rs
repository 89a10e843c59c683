//! Greedy coin change against the DP optimum
//!
//! With coins {1, 3, 4} and amount 6 the greedy choice (largest coin first)
//! needs three coins while the DP table finds two.

use crate::algorithm::concept::{CoinChange, CoinPhase};
use crate::algorithm::state::Step;
use crate::execution::recorder::{fmt_list, vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function greedyCoins(coins, amount):
  for coin in coins from largest to smallest:
    while coin <= amount:
      take coin; amount = amount - coin
  return coins taken

function dpCoins(coins, amount):
  dp = [0] + [infinity] * amount
  for a from 1 to amount:
    for coin in coins:
      if coin <= a and dp[a - coin] + 1 < dp[a]:
        dp[a] = dp[a - coin] + 1
  return dp[amount]"#;

const L_GREEDY: usize = 1;
const L_TOO_BIG: usize = 3;
const L_TAKE: usize = 4;
const L_GREEDY_DONE: usize = 5;
const L_DP_INIT: usize = 8;
const L_DP_CHECK: usize = 11;
const L_DP_IMPROVE: usize = 12;
const L_DP_DONE: usize = 13;

const COINS: [u32; 3] = [1, 3, 4];
const AMOUNT: u32 = 6;

struct Board {
    phase: CoinPhase,
    picked: Vec<u32>,
    remaining: u32,
    dp: Vec<Option<u32>>,
}

impl Board {
    fn state(&self, cursor: Option<usize>, coin: Option<u32>) -> CoinChange {
        CoinChange {
            coins: COINS.to_vec(),
            amount: AMOUNT,
            phase: self.phase,
            greedy_picked: self.picked.clone(),
            greedy_remaining: self.remaining,
            dp: self.dp.clone(),
            dp_cursor: cursor,
            dp_coin: coin,
        }
    }
}

fn fmt_dp(value: Option<u32>) -> String {
    value.map_or("∞".to_owned(), |v| v.to_string())
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut board = Board {
        phase: CoinPhase::Greedy,
        picked: Vec::new(),
        remaining: AMOUNT,
        dp: vec![None; AMOUNT as usize + 1],
    };

    rec.record(
        say!(n, "coins.start", coins = fmt_list(&COINS), amount = AMOUNT),
        L_GREEDY,
        vars!["amount" => AMOUNT],
        board.state(None, None),
    );

    for &coin in COINS.iter().rev() {
        while coin <= board.remaining {
            board.remaining -= coin;
            board.picked.push(coin);
            rec.record(
                say!(n, "coins.take", coin = coin, remaining = board.remaining),
                L_TAKE,
                vars!["coin" => coin, "amount" => board.remaining, "taken" => board.picked.len()],
                board.state(None, Some(coin)),
            );
        }
        if board.remaining > 0 {
            rec.record(
                say!(n, "coins.too_big", coin = coin, remaining = board.remaining),
                L_TOO_BIG,
                vars!["coin" => coin, "amount" => board.remaining, "taken" => board.picked.len()],
                board.state(None, Some(coin)),
            );
        }
    }

    let greedy_count = board.picked.len();
    rec.print(format!("greedy: {} -> {} coins", fmt_list(&board.picked), greedy_count));
    rec.record(
        say!(n, "coins.greedy_done", picked = fmt_list(&board.picked), count = greedy_count),
        L_GREEDY_DONE,
        vars!["taken" => greedy_count],
        board.state(None, None),
    );

    board.phase = CoinPhase::Dp;
    board.dp[0] = Some(0);
    rec.record(
        say!(n, "coins.dp_init", amount = AMOUNT),
        L_DP_INIT,
        vars!["dp[0]" => 0],
        board.state(Some(0), None),
    );

    for a in 1..=AMOUNT as usize {
        for &coin in &COINS {
            let c = coin as usize;
            if c > a {
                continue;
            }
            let candidate = board.dp[a - c].map(|v| v + 1);
            let improves = match (candidate, board.dp[a]) {
                (Some(new), Some(old)) => new < old,
                (Some(_), None) => true,
                (None, _) => false,
            };
            if improves {
                board.dp[a] = candidate;
                rec.record(
                    say!(n, "coins.dp_improve", a = a, coin = coin, value = fmt_dp(candidate)),
                    L_DP_IMPROVE,
                    vars!["a" => a, "coin" => coin, "dp[a]" => candidate],
                    board.state(Some(a), Some(coin)),
                );
            } else {
                rec.record(
                    say!(n, "coins.dp_keep", a = a, coin = coin, value = fmt_dp(board.dp[a])),
                    L_DP_CHECK,
                    vars!["a" => a, "coin" => coin, "dp[a]" => board.dp[a]],
                    board.state(Some(a), Some(coin)),
                );
            }
        }
    }

    let optimum = board.dp[AMOUNT as usize];
    board.phase = CoinPhase::Compare;
    rec.print(format!("dp: {} coins", fmt_dp(optimum)));
    rec.record(
        say!(n, "coins.compare", greedy = greedy_count, dp = fmt_dp(optimum)),
        L_DP_DONE,
        vars!["greedy" => greedy_count, "dp" => optimum],
        board.state(Some(AMOUNT as usize), None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    #[test]
    fn test_greedy_uses_three_coins_dp_two() {
        let steps = testing::run_en(run);
        let Some(ConceptState::CoinChange(last)) = steps.last().unwrap().concept() else {
            panic!("expected coin change");
        };
        assert_eq!(last.phase, CoinPhase::Compare);
        assert_eq!(last.greedy_picked, vec![4, 1, 1]);
        assert_eq!(last.greedy_remaining, 0);
        assert_eq!(last.dp, vec![Some(0), Some(1), Some(2), Some(1), Some(1), Some(2), Some(2)]);
    }
}
