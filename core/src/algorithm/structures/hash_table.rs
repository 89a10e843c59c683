//! Hash table with separate chaining
//!
//! The hash is the sum of the key's character codes modulo the bucket count,
//! which is small enough to compute by hand and still produces a collision
//! for the demo keys.

use crate::algorithm::concept::{ElementState, HashEntry, HashTable};
use crate::algorithm::state::Step;
use crate::execution::recorder::{vars, StepRecorder};
use crate::i18n::{say, Narrator};

pub const SOURCE: &str = r#"function hash(key):
  return (sum of character codes of key) % 5

function put(table, key, value):
  bucket = table[hash(key)]
  append (key, value) to bucket

function get(table, key):
  for (k, v) in table[hash(key)]:
    if k == key: return v
  return none"#;

const L_HASH: usize = 2;
const L_BUCKET: usize = 5;
const L_APPEND: usize = 6;
const L_SCAN: usize = 9;
const L_MATCH: usize = 10;
const L_NONE: usize = 11;

const BUCKETS: usize = 5;
const ENTRIES: [(&str, i64); 6] = [
    ("apple", 5),
    ("grape", 8),
    ("lemon", 3),
    ("mango", 6),
    ("peach", 4),
    ("kiwi", 2),
];
const LOOKUPS: [&str; 2] = ["mango", "cherry"];

fn char_sum(key: &str) -> u32 {
    key.chars().map(u32::from).sum()
}

fn bucket_of(key: &str) -> usize {
    char_sum(key) as usize % BUCKETS
}

fn hash_note(key: &str) -> String {
    format!("h(\"{}\") = {} % {} = {}", key, char_sum(key), BUCKETS, bucket_of(key))
}

struct Table {
    buckets: Vec<Vec<(String, i64)>>,
}

impl Table {
    fn state(&self, active: Option<usize>, focus: Option<(usize, usize, ElementState)>, note: Option<String>) -> HashTable {
        let buckets = self
            .buckets
            .iter()
            .enumerate()
            .map(|(b, chain)| {
                chain
                    .iter()
                    .enumerate()
                    .map(|(i, (key, value))| HashEntry {
                        key: key.clone(),
                        value: *value,
                        state: match focus {
                            Some((fb, fi, state)) if fb == b && fi == i => state,
                            _ => ElementState::Idle,
                        },
                    })
                    .collect()
            })
            .collect();
        HashTable {
            buckets,
            active_bucket: active,
            hash_note: note,
        }
    }
}

pub fn run(n: &Narrator<'_>) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut table = Table {
        buckets: vec![Vec::new(); BUCKETS],
    };

    rec.record(
        say!(n, "hash.start", buckets = BUCKETS),
        L_HASH,
        vars!["buckets" => BUCKETS],
        table.state(None, None, None),
    );

    for (key, value) in ENTRIES {
        let bucket = bucket_of(key);
        rec.record(
            say!(n, "hash.hash", key = key, code = char_sum(key), bucket = bucket),
            L_BUCKET,
            vars!["key" => key, "value" => value, "hash" => bucket],
            table.state(Some(bucket), None, Some(hash_note(key))),
        );

        let chain = &mut table.buckets[bucket];
        chain.push((key.to_owned(), value));
        let position = chain.len() - 1;
        let description = if position == 0 {
            say!(n, "hash.put", key = key, value = value, bucket = bucket)
        } else {
            say!(n, "hash.collision", key = key, bucket = bucket, count = position + 1)
        };
        rec.record(
            description,
            L_APPEND,
            vars!["key" => key, "value" => value, "hash" => bucket, "chainLength" => position + 1],
            table.state(Some(bucket), Some((bucket, position, ElementState::Entering)), Some(hash_note(key))),
        );
    }

    for key in LOOKUPS {
        let bucket = bucket_of(key);
        rec.record(
            say!(n, "hash.lookup", key = key, bucket = bucket),
            L_SCAN,
            vars!["key" => key, "hash" => bucket],
            table.state(Some(bucket), None, Some(hash_note(key))),
        );

        let mut found = None;
        for (i, (candidate, value)) in table.buckets[bucket].iter().enumerate() {
            let hit = candidate == key;
            rec.record(
                if hit {
                    say!(n, "hash.found", key = key, value = value)
                } else {
                    say!(n, "hash.compare", key = key, candidate = candidate)
                },
                L_MATCH,
                vars!["key" => key, "hash" => bucket, "k" => candidate.as_str(), "v" => *value],
                table.state(
                    Some(bucket),
                    Some((bucket, i, if hit { ElementState::Found } else { ElementState::Comparing })),
                    Some(hash_note(key)),
                ),
            );
            if hit {
                found = Some(*value);
                break;
            }
        }

        match found {
            Some(value) => rec.print(format!("get(\"{}\") -> {}", key, value)),
            None => {
                rec.print(format!("get(\"{}\") -> none", key));
                rec.record(
                    say!(n, "hash.missing", key = key, bucket = bucket),
                    L_NONE,
                    vars!["key" => key, "hash" => bucket],
                    table.state(Some(bucket), None, Some(hash_note(key))),
                );
            }
        }
    }

    rec.record(
        say!(n, "hash.done", count = ENTRIES.len(), buckets = BUCKETS),
        L_NONE,
        vars!["size" => ENTRIES.len()],
        table.state(None, None, None),
    );
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::concept::ConceptState;
    use crate::algorithm::testing;

    #[test]
    fn test_bucket_assignment() {
        assert_eq!(bucket_of("apple"), 0);
        assert_eq!(bucket_of("mango"), 0);
        assert_eq!(bucket_of("kiwi"), 1);
        assert_eq!(bucket_of("cherry"), 3);
        assert_eq!(hash_note("apple"), "h(\"apple\") = 530 % 5 = 0");
    }

    #[test]
    fn test_collision_chain_and_lookups() {
        let steps = testing::run_en(run);
        let Some(ConceptState::HashTable(last)) = steps.last().unwrap().concept() else {
            panic!("expected hash table");
        };
        let chain: Vec<&str> = last.buckets[0].iter().map(|e| e.key.as_str()).collect();
        assert_eq!(chain, vec!["apple", "mango"]);
        assert_eq!(last.buckets.iter().map(Vec::len).sum::<usize>(), ENTRIES.len());
        assert_eq!(
            steps.last().unwrap().console_output,
            vec!["get(\"mango\") -> 6", "get(\"cherry\") -> none"]
        );
    }
}
