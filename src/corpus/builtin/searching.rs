//! Searching entry groups.

use crate::entry::{Entry, CONCEPT};

pub static BINARY_SEARCH: &[Entry] = &[
    Entry::new(
        "binary_search(arr, target)",
        "Halve a sorted search range until the target is found or the range is empty.",
        "O(log n)",
        "Binary Search",
        r#"fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, arr.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
        }
    }
    None
}"#,
    ),
    Entry::new(
        "lower_bound(arr, target)",
        "First index whose element is not less than the target.",
        "O(log n)",
        "Binary Search",
        r#"let idx = arr.partition_point(|x| x < &target);"#,
    ),
    Entry::new(
        "search on answer",
        "Binary search over a monotone predicate on the answer space instead of an array.",
        CONCEPT,
        "Binary Search",
        r#"// smallest capacity that ships all packages within `days`
let (mut lo, mut hi) = (max_weight, total_weight);
while lo < hi {
    let mid = (lo + hi) / 2;
    if feasible(mid) { hi = mid } else { lo = mid + 1 }
}"#,
    ),
];

pub static TWO_POINTERS: &[Entry] = &[
    Entry::new(
        "pair_with_sum(sorted, target)",
        "Move inward from both ends of a sorted array, adjusting whichever side overshoots.",
        "O(n)",
        "Two Pointers",
        r#"fn pair_with_sum(sorted: &[i64], target: i64) -> Option<(usize, usize)> {
    let (mut i, mut j) = (0, sorted.len().checked_sub(1)?);
    while i < j {
        match (sorted[i] + sorted[j]).cmp(&target) {
            std::cmp::Ordering::Equal => return Some((i, j)),
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j -= 1,
        }
    }
    None
}"#,
    ),
    Entry::new(
        "sliding_window(arr, k)",
        "Maintain a running aggregate over a fixed-width window as it slides right.",
        "O(n)",
        "Two Pointers",
        r#"fn max_window_sum(arr: &[i64], k: usize) -> Option<i64> {
    let mut sum: i64 = arr.get(..k)?.iter().sum();
    let mut best = sum;
    for i in k..arr.len() {
        sum += arr[i] - arr[i - k];
        best = best.max(sum);
    }
    Some(best)
}"#,
    ),
];
