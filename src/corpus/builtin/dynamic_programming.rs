//! Dynamic programming entry groups.

use crate::entry::{Entry, CONCEPT};

pub static DP_FOUNDATIONS: &[Entry] = &[
    Entry::new(
        "optimal substructure",
        "An optimal answer is built from optimal answers to smaller subproblems.",
        CONCEPT,
        "Foundations",
        "// fib(n) = fib(n - 1) + fib(n - 2)",
    ),
    Entry::new(
        "memoize(f)",
        "Top-down: cache each subproblem result the first time it is computed.",
        "O(states)",
        "Foundations",
        r#"fn fib(n: u64, memo: &mut HashMap<u64, u64>) -> u64 {
    if n < 2 {
        return n;
    }
    if let Some(&v) = memo.get(&n) {
        return v;
    }
    let v = fib(n - 1, memo) + fib(n - 2, memo);
    memo.insert(n, v);
    v
}"#,
    ),
    Entry::new(
        "tabulate(n)",
        "Bottom-up: fill a table in dependency order so every lookup is already computed.",
        "O(states)",
        "Foundations",
        r#"let mut table = vec![0u64; n + 1];
if n > 0 { table[1] = 1; }
for i in 2..=n {
    table[i] = table[i - 1] + table[i - 2];
}"#,
    ),
];

pub static DP_CLASSICS: &[Entry] = &[
    Entry::new(
        "knapsack_01(items, capacity)",
        "Best total value using each item at most once, iterating capacity downwards.",
        "O(n·W)",
        "Classic Problems",
        r#"fn knapsack(items: &[(usize, u64)], capacity: usize) -> u64 {
    let mut best = vec![0u64; capacity + 1];
    for &(weight, value) in items {
        for c in (weight..=capacity).rev() {
            best[c] = best[c].max(best[c - weight] + value);
        }
    }
    best[capacity]
}"#,
    ),
    Entry::new(
        "lcs(a, b)",
        "Longest common subsequence via a two-row table.",
        "O(n·m)",
        "Classic Problems",
        r#"fn lcs(a: &[u8], b: &[u8]) -> usize {
    let mut prev = vec![0; b.len() + 1];
    for &x in a {
        let mut cur = vec![0; b.len() + 1];
        for (j, &y) in b.iter().enumerate() {
            cur[j + 1] = if x == y { prev[j] + 1 } else { cur[j].max(prev[j + 1]) };
        }
        prev = cur;
    }
    prev[b.len()]
}"#,
    ),
    Entry::new(
        "edit_distance(a, b)",
        "Minimum insertions, deletions and substitutions turning one string into another.",
        "O(n·m)",
        "Classic Problems",
        r#"dp[i][j] = if a[i - 1] == b[j - 1] {
    dp[i - 1][j - 1]
} else {
    1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
};"#,
    ),
];
