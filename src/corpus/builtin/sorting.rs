//! Sorting entry groups.

use crate::entry::{Entry, CONCEPT};

pub static SORTING_QUADRATIC: &[Entry] = &[
    Entry::new(
        "bubble_sort(arr)",
        "Repeatedly swap adjacent out-of-order pairs until a full pass makes no swaps.",
        "O(n²)",
        "Comparison Sorts",
        r#"fn bubble_sort<T: Ord>(arr: &mut [T]) {
    for end in (1..arr.len()).rev() {
        let mut swapped = false;
        for i in 0..end {
            if arr[i] > arr[i + 1] {
                arr.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}"#,
    ),
    Entry::new(
        "insertion_sort(arr)",
        "Grow a sorted prefix by shifting each new element left into place. Fast on nearly sorted input.",
        "O(n²)",
        "Comparison Sorts",
        r#"fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}"#,
    ),
    Entry::new(
        "selection_sort(arr)",
        "Select the minimum of the unsorted suffix and swap it to the front.",
        "O(n²)",
        "Comparison Sorts",
        r#"fn selection_sort<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        let min = (i..arr.len()).min_by(|&a, &b| arr[a].cmp(&arr[b])).unwrap_or(i);
        arr.swap(i, min);
    }
}"#,
    ),
    Entry::new(
        "stability",
        "A stable sort keeps equal keys in their original relative order.",
        CONCEPT,
        "Sorting Concepts",
        r#"let mut people = vec![("ann", 30), ("bob", 25), ("cat", 30)];
people.sort_by_key(|p| p.1); // stable: ann stays before cat"#,
    ),
];

pub static SORTING_DIVIDE_CONQUER: &[Entry] = &[
    Entry::new(
        "merge_sort(arr)",
        "Split in half, sort each half, merge the sorted halves. Stable.",
        "O(n log n)",
        "Comparison Sorts",
        r#"fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let (left, right) = arr.split_at(arr.len() / 2);
    let (left, right) = (merge_sort(left), merge_sort(right));
    let mut out = Vec::with_capacity(arr.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}"#,
    ),
    Entry::new(
        "quick_sort(arr)",
        "Partition around a pivot, then sort both sides in place. Worst case O(n²) on bad pivots.",
        "O(n log n)",
        "Comparison Sorts",
        r#"fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = arr.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if arr[i] <= arr[pivot] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, pivot);
    let (left, right) = arr.split_at_mut(store);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}"#,
    ),
    Entry::new(
        "heap_sort(arr)",
        "Build a max-heap, then repeatedly move the root to the end. In place, not stable.",
        "O(n log n)",
        "Comparison Sorts",
        r#"use std::collections::BinaryHeap;

fn heap_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    BinaryHeap::from(items).into_sorted_vec()
}"#,
    ),
    Entry::new(
        "comparison lower bound",
        "Any comparison sort needs Ω(n log n) comparisons in the worst case.",
        CONCEPT,
        "Sorting Concepts",
        "// log2(n!) comparisons are required to distinguish all n! orderings",
    ),
];

pub static SORTING_LINEAR: &[Entry] = &[
    Entry::new(
        "counting_sort(arr, max)",
        "Count occurrences of each small integer key, then emit keys in order.",
        "O(n + k)",
        "Non-Comparison Sorts",
        r#"fn counting_sort(arr: &[usize], max: usize) -> Vec<usize> {
    let mut counts = vec![0; max + 1];
    for &x in arr {
        counts[x] += 1;
    }
    counts
        .iter()
        .enumerate()
        .flat_map(|(value, &n)| std::iter::repeat(value).take(n))
        .collect()
}"#,
    ),
    Entry::new(
        "radix_sort(arr)",
        "Stable counting sort on each digit, least significant first.",
        "O(d·(n + b))",
        "Non-Comparison Sorts",
        r#"fn radix_sort(arr: &mut Vec<u32>) {
    for shift in (0..32).step_by(8) {
        let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); 256];
        for &x in arr.iter() {
            buckets[((x >> shift) & 0xff) as usize].push(x);
        }
        *arr = buckets.concat();
    }
}"#,
    ),
];
