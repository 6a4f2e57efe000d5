//! Display index into a filtered view.

use std::fmt::{Display, Formatter};

/// 1-based position as shown to the user.
///
/// Stored zero-based; construction from a one-based value rejects `0`, so an
/// `Index` is always a valid positive display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Returns `None` for `0`.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn zero_based(self) -> usize {
        self.zero_based
    }

    pub fn one_based(self) -> usize {
        self.zero_based + 1
    }

    /// Looks up this position in a view, `None` when past the end.
    pub fn pick<T: Copy>(self, view: &[T]) -> Option<T> {
        view.get(self.zero_based).copied()
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::Index;

    #[test]
    fn one_based_zero_is_rejected() {
        assert_eq!(Index::from_one_based(0), None);
        let index = Index::from_one_based(3).expect("positive index");
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
    }

    #[test]
    fn pick_checks_view_bounds() {
        let view = ["a", "b", "c"];
        assert_eq!(Index::from_zero_based(2).pick(&view), Some("c"));
        assert_eq!(Index::from_zero_based(3).pick(&view), None);
    }
}
