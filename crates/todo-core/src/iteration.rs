//! # Iteration Primitives
//!
//! Small, generic building blocks used by the list: a left fold, a filter
//! that collects into a fresh `Vec`, and a counted loop.
//!
//! ```rust
//! use todo_core::iteration::{reduce, select, times};
//!
//! let sum = reduce(&[1, 2, 3], 0, |acc, n| acc + n);
//! assert_eq!(sum, 6);
//!
//! let odd = select(&[1, 2, 3], |n| n % 2 == 1);
//! assert_eq!(odd, vec![1, 3]);
//!
//! let mut seen = Vec::new();
//! assert_eq!(times(3, |i| seen.push(i)), 3);
//! assert_eq!(seen, vec![0, 1, 2]);
//! ```

/// Folds `f(accumulator, item)` over `items` from left to right.
///
/// Returns `initial` unchanged when `items` is empty.
pub fn reduce<T, A, F>(items: &[T], initial: A, mut f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut accumulator = initial;
    for item in items {
        accumulator = f(accumulator, item);
    }
    accumulator
}

/// Returns clones of the items for which `predicate` holds, in order.
pub fn select<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut selected = Vec::new();
    for item in items {
        if predicate(item) {
            selected.push(item.clone());
        }
    }
    selected
}

/// Calls `f` with `0..n` and returns `n`.
pub fn times<F>(n: usize, mut f: F) -> usize
where
    F: FnMut(usize),
{
    for i in 0..n {
        f(i);
    }
    n
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_defaults_to_initial() {
        let empty: [i32; 0] = [];
        assert_eq!(reduce(&empty, 10, |acc, n| acc + n), 10);
    }

    #[test]
    fn test_reduce_is_left_to_right() {
        let words = ["a", "b", "c"];
        let joined = reduce(&words, String::new(), |mut acc, w| {
            acc.push_str(w);
            acc
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_select_keeps_order() {
        let picked = select(&[5, 2, 8, 1, 9], |n| *n > 4);
        assert_eq!(picked, vec![5, 8, 9]);
        assert!(select(&[1, 2], |_| false).is_empty());
    }

    #[test]
    fn test_times() {
        let mut calls = 0;
        assert_eq!(times(0, |_| calls += 1), 0);
        assert_eq!(calls, 0);

        let mut last = None;
        assert_eq!(times(5, |i| last = Some(i)), 5);
        assert_eq!(last, Some(4));
    }
}
