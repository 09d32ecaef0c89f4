//! Data structure entry groups.

use crate::entry::{Entry, CONCEPT};

pub static STACKS_QUEUES: &[Entry] = &[
    Entry::new(
        "Vec::push / Vec::pop",
        "A Vec used as a stack: push and pop at the back.",
        "O(1) amortized",
        "Stacks & Queues",
        r#"let mut stack = Vec::new();
stack.push(1);
stack.push(2);
assert_eq!(stack.pop(), Some(2));"#,
    ),
    Entry::new(
        "VecDeque::push_back / pop_front",
        "A ring buffer used as a FIFO queue.",
        "O(1)",
        "Stacks & Queues",
        r#"let mut queue = std::collections::VecDeque::new();
queue.push_back(1);
queue.push_back(2);
assert_eq!(queue.pop_front(), Some(1));"#,
    ),
    Entry::new(
        "monotonic stack",
        "Keep the stack sorted by popping dominated elements; answers next-greater queries in one pass.",
        "O(n)",
        "Stacks & Queues",
        r#"let mut next_greater = vec![None; arr.len()];
let mut stack: Vec<usize> = Vec::new();
for (i, &x) in arr.iter().enumerate() {
    while let Some(&top) = stack.last() {
        if arr[top] >= x { break; }
        next_greater[top] = Some(i);
        stack.pop();
    }
    stack.push(i);
}"#,
    ),
];

pub static HEAPS: &[Entry] = &[
    Entry::new(
        "BinaryHeap::push / pop",
        "Max-heap priority queue; wrap items in Reverse for a min-heap.",
        "O(log n)",
        "Heaps",
        r#"use std::{cmp::Reverse, collections::BinaryHeap};

let mut heap = BinaryHeap::new();
heap.push(Reverse(5));
heap.push(Reverse(1));
assert_eq!(heap.pop(), Some(Reverse(1)));"#,
    ),
    Entry::new(
        "top_k(items, k)",
        "Keep a min-heap of size k; the heap holds the k largest items seen.",
        "O(n log k)",
        "Heaps",
        r#"let mut heap = BinaryHeap::new();
for x in items {
    heap.push(Reverse(x));
    if heap.len() > k { heap.pop(); }
}"#,
    ),
    Entry::new(
        "heap property",
        "Every parent orders before its children; the root is the extreme element.",
        CONCEPT,
        "Heaps",
        "// children of index i live at 2i + 1 and 2i + 2",
    ),
];
