//! Generalized Büchi acceptance.
//!
//! An acceptance condition with `n` sets accepts a run iff the run takes a
//! transition carrying each set `0..n` infinitely often. Transitions carry
//! a [`Mark`]: the bitset of sets they belong to.

use crate::error::AutomatonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// Bitset of acceptance-set indices carried by one transition.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Mark(u32);

impl Mark {
    pub const EMPTY: Mark = Mark(0);

    pub fn from_sets<I: IntoIterator<Item = u32>>(sets: I) -> Self {
        sets.into_iter().fold(Self::EMPTY, |mark, set| mark.with(set))
    }

    /// This mark plus set `set`.
    pub fn with(self, set: u32) -> Self {
        assert!(set < AccCond::MAX_SETS, "acceptance set {set} out of range");
        Self(self.0 | (1 << set))
    }

    pub fn has(self, set: u32) -> bool {
        set < AccCond::MAX_SETS && self.0 & (1 << set) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_subset_of(self, other: Mark) -> bool {
        self.0 & !other.0 == 0
    }

    /// Set indices in ascending order.
    pub fn sets(self) -> impl Iterator<Item = u32> {
        (0..AccCond::MAX_SETS).filter(move |&set| self.has(set))
    }
}

impl BitOr for Mark {
    type Output = Mark;

    fn bitor(self, rhs: Mark) -> Mark {
        Mark(self.0 | rhs.0)
    }
}

impl BitAnd for Mark {
    type Output = Mark;

    fn bitand(self, rhs: Mark) -> Mark {
        Mark(self.0 & rhs.0)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, set) in self.sets().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{set}")?;
        }
        write!(f, "}}")
    }
}

/// A generalized Büchi acceptance condition over `num_sets` sets.
///
/// Serializes as the bare set count. Deserialized counts above
/// [`AccCond::MAX_SETS`] are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct AccCond {
    num_sets: u32,
}

impl AccCond {
    pub const MAX_SETS: u32 = 32;

    /// Panics if `num_sets` exceeds [`AccCond::MAX_SETS`].
    #[track_caller]
    pub fn generalized_buchi(num_sets: u32) -> Self {
        match Self::try_generalized_buchi(num_sets) {
            Ok(acc) => acc,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_generalized_buchi(num_sets: u32) -> Result<Self, AutomatonError> {
        if num_sets > Self::MAX_SETS {
            return Err(AutomatonError::TooManyAcceptanceSets(num_sets));
        }
        Ok(Self { num_sets })
    }

    pub fn num_sets(self) -> u32 {
        self.num_sets
    }

    /// The mark carrying every set of this condition.
    pub fn all_sets(self) -> Mark {
        Mark(u32::MAX.checked_shr(Self::MAX_SETS - self.num_sets).unwrap_or(0))
    }

    /// Whether a cycle whose transitions jointly carry `mark` is accepting.
    pub fn accepting(self, mark: Mark) -> bool {
        self.all_sets().is_subset_of(mark)
    }
}

impl TryFrom<u32> for AccCond {
    type Error = AutomatonError;

    fn try_from(num_sets: u32) -> Result<Self, Self::Error> {
        Self::try_generalized_buchi(num_sets)
    }
}

impl From<AccCond> for u32 {
    fn from(acc: AccCond) -> Self {
        acc.num_sets
    }
}

impl fmt::Display for AccCond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_sets == 0 {
            return write!(f, "t");
        }
        for set in 0..self.num_sets {
            if set > 0 {
                write!(f, "&")?;
            }
            write!(f, "Inf({set})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sets_covers_exactly_the_declared_sets() {
        let acc = AccCond::generalized_buchi(2);
        assert_eq!(acc.all_sets(), Mark::from_sets([0, 1]));
        assert_eq!(acc.all_sets().count(), 2);
        assert_eq!(AccCond::generalized_buchi(0).all_sets(), Mark::EMPTY);
        assert_eq!(AccCond::generalized_buchi(32).all_sets().count(), 32);
    }

    #[test]
    fn accepting_requires_every_set() {
        let acc = AccCond::generalized_buchi(2);
        assert!(acc.accepting(Mark::from_sets([0, 1])));
        assert!(acc.accepting(Mark::from_sets([0, 1, 5])));
        assert!(!acc.accepting(Mark::from_sets([1])));
        assert!(!acc.accepting(Mark::EMPTY));
        assert!(AccCond::generalized_buchi(0).accepting(Mark::EMPTY));
    }

    #[test]
    fn mark_set_algebra() {
        let a = Mark::from_sets([0, 2]);
        let b = Mark::from_sets([2, 3]);
        assert_eq!(a | b, Mark::from_sets([0, 2, 3]));
        assert_eq!(a & b, Mark::from_sets([2]));
        assert!(Mark::from_sets([2]).is_subset_of(a));
        assert!(!a.has(1));
        assert!(!a.has(40));
        assert_eq!(a.sets().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn oversized_condition_is_rejected() {
        assert!(matches!(
            AccCond::try_generalized_buchi(33),
            Err(AutomatonError::TooManyAcceptanceSets(33))
        ));
        assert_eq!(AccCond::try_generalized_buchi(32).unwrap().num_sets(), 32);
    }

    #[test]
    #[should_panic(expected = "at most 32 acceptance sets are supported, got 40")]
    fn generalized_buchi_panics_past_the_mark_width() {
        let _ = AccCond::generalized_buchi(40);
    }

    #[test]
    fn deserialized_condition_is_range_checked() {
        let acc: AccCond = serde_json::from_str("2").unwrap();
        assert_eq!(acc.all_sets(), Mark::from_sets([0, 1]));
        assert_eq!(serde_json::to_string(&acc).unwrap(), "2");

        let err = serde_json::from_str::<AccCond>("40").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("at most 32 acceptance sets are supported, got 40"));
    }

    #[test]
    fn rendering() {
        assert_eq!(AccCond::generalized_buchi(2).to_string(), "Inf(0)&Inf(1)");
        assert_eq!(AccCond::generalized_buchi(0).to_string(), "t");
        assert_eq!(Mark::from_sets([0, 1]).to_string(), "{0,1}");
        assert_eq!(Mark::EMPTY.to_string(), "{}");
    }
}
