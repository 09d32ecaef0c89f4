//! Composition Layer
//!
//! Stitches entry-group modules into per-page entry lists.
//!
//! - `concatenate`: join whole lists in the order given
//! - `slice` / `slice_from`: select a sub-range, clamping instead of failing
//! - `compose`: concatenate a sequence of whole-list or slice steps
//!
//! Every operation returns a fresh `Vec` of references into the sources.
//! Sources are only ever borrowed immutably, so two compositions that reuse
//! overlapping ranges of the same module can never affect each other or the
//! module itself. Order is always source order; nothing is re-sorted.

use std::ops::Range;

// ============================================================================
// Range resolution
// ============================================================================

/// Resolve `[start, end)` against a list of `len` elements.
///
/// Negative bounds and `start > end` resolve to the empty range. Bounds past
/// the end clamp to `len`. `end = None` means "to the end of the list".
fn clamp_range(len: usize, start: i64, end: Option<i64>) -> Range<usize> {
    let end = end.unwrap_or(len as i64);
    if start < 0 || end < 0 || start > end {
        return 0..0;
    }
    let start = usize::try_from(start).unwrap_or(usize::MAX).min(len);
    let end = usize::try_from(end).unwrap_or(usize::MAX).min(len);
    start..end
}

// ============================================================================
// Primitive operations
// ============================================================================

/// Join `lists` in order. Output length is the sum of the input lengths.
pub fn concatenate<'a, T>(lists: &[&'a [T]]) -> Vec<&'a T> {
    let total = lists.iter().map(|list| list.len()).sum();
    let mut out = Vec::with_capacity(total);
    for list in lists {
        out.extend(list.iter());
    }
    out
}

/// Select the half-open range `[start, end)` of `list`.
///
/// Malformed ranges (negative bounds, `start > end`) give an empty result and
/// out-of-range bounds clamp to the list length.
pub fn slice<'a, T>(list: &'a [T], start: i64, end: i64) -> Vec<&'a T> {
    list[clamp_range(list.len(), start, Some(end))].iter().collect()
}

/// Select everything from `start` to the end of `list`.
pub fn slice_from<'a, T>(list: &'a [T], start: i64) -> Vec<&'a T> {
    list[clamp_range(list.len(), start, None)].iter().collect()
}

// ============================================================================
// Steps and composition
// ============================================================================

/// One contribution to a composed list.
#[derive(Debug)]
pub enum Step<'a, T> {
    /// The whole source list
    All(&'a [T]),
    /// `[start, end)` of the source list
    Range { source: &'a [T], start: i64, end: i64 },
    /// `[start, len)` of the source list
    From { source: &'a [T], start: i64 },
}

impl<T> Clone for Step<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Step<'_, T> {}

impl<'a, T> Step<'a, T> {
    /// The sub-slice of the source this step contributes.
    pub fn select(&self) -> &'a [T] {
        match *self {
            Step::All(source) => source,
            Step::Range { source, start, end } => &source[clamp_range(source.len(), start, Some(end))],
            Step::From { source, start } => &source[clamp_range(source.len(), start, None)],
        }
    }

    pub fn len(&self) -> usize {
        self.select().len()
    }

    pub fn is_empty(&self) -> bool {
        self.select().is_empty()
    }
}

/// Concatenate the selections of `steps`, in order.
pub fn compose<'a, T>(steps: &[Step<'a, T>]) -> Vec<&'a T> {
    let selections: Vec<&'a [T]> = steps.iter().map(Step::select).collect();
    concatenate(&selections)
}

/// Fluent builder over [`compose`].
///
/// ```
/// use entry_catalog::compose::Composition;
///
/// let first = [1, 2, 3];
/// let second = [4, 5];
/// let page = Composition::new().range(&first, 0, 2).all(&second).build();
/// assert_eq!(page, vec![&1, &2, &4, &5]);
/// ```
#[derive(Debug)]
pub struct Composition<'a, T> {
    steps: Vec<Step<'a, T>>,
}

impl<'a, T> Composition<'a, T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn all(mut self, source: &'a [T]) -> Self {
        self.steps.push(Step::All(source));
        self
    }

    pub fn range(mut self, source: &'a [T], start: i64, end: i64) -> Self {
        self.steps.push(Step::Range { source, start, end });
        self
    }

    pub fn rest(mut self, source: &'a [T], start: i64) -> Self {
        self.steps.push(Step::From { source, start });
        self
    }

    pub fn step(mut self, step: Step<'a, T>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Step<'a, T>] {
        &self.steps
    }

    pub fn build(&self) -> Vec<&'a T> {
        compose(&self.steps)
    }
}

impl<T> Default for Composition<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
