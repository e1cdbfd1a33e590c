//! Step patterns for the accumulation recurrence.

use crate::error::StepPatternError;

/// One admissible predecessor move: consume `dn` rows and `dm` columns,
/// weighting the similarity value picked up at the target cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPattern {
    dn: usize,
    dm: usize,
    weight: f64,
}

impl StepPattern {
    /// Create a step pattern.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`StepPatternError::NullStep`] | `dn` and `dm` are both zero |
    /// | [`StepPatternError::NonFiniteWeight`] | `weight` is NaN or infinite |
    pub fn new(dn: usize, dm: usize, weight: f64) -> Result<Self, StepPatternError> {
        if dn == 0 && dm == 0 {
            return Err(StepPatternError::NullStep);
        }
        if !weight.is_finite() {
            return Err(StepPatternError::NonFiniteWeight { weight });
        }
        Ok(Self { dn, dm, weight })
    }

    /// Return the row delta.
    #[must_use]
    pub fn dn(&self) -> usize {
        self.dn
    }

    /// Return the column delta.
    #[must_use]
    pub fn dm(&self) -> usize {
        self.dm
    }

    /// Return the similarity weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Ordered, non-empty set of step patterns.
///
/// Order matters: when two steps produce the same candidate score at a cell,
/// the lower-indexed step wins.
#[derive(Debug, Clone, PartialEq)]
pub struct StepPatternSet(Vec<StepPattern>);

impl StepPatternSet {
    /// Create a step pattern set from an ordered list of steps.
    ///
    /// # Errors
    ///
    /// Returns [`StepPatternError::EmptySet`] if `steps` is empty.
    pub fn new(steps: Vec<StepPattern>) -> Result<Self, StepPatternError> {
        if steps.is_empty() {
            return Err(StepPatternError::EmptySet);
        }
        Ok(Self(steps))
    }

    /// Create a step pattern set from parallel delta and weight arrays.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`StepPatternError::LengthMismatch`] | The arrays differ in length |
    /// | [`StepPatternError::EmptySet`] | The arrays are empty |
    /// | [`StepPatternError::NullStep`] | Some `(dn[i], dm[i])` is `(0, 0)` |
    /// | [`StepPatternError::NonFiniteWeight`] | Some weight is NaN or infinite |
    pub fn from_arrays(dn: &[usize], dm: &[usize], weights: &[f64]) -> Result<Self, StepPatternError> {
        if dn.len() != dm.len() || dn.len() != weights.len() {
            return Err(StepPatternError::LengthMismatch {
                dn_len: dn.len(),
                dm_len: dm.len(),
                weight_len: weights.len(),
            });
        }
        let steps = dn
            .iter()
            .zip(dm.iter())
            .zip(weights.iter())
            .map(|((&dn, &dm), &weight)| StepPattern::new(dn, dm, weight))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(steps)
    }

    /// Return the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the set contains no steps.
    ///
    /// A [`StepPatternSet`] constructed via [`StepPatternSet::new`] is always
    /// non-empty, so this always returns `false` for valid instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepPattern> {
        self.0.iter()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&StepPattern> {
        self.0.get(index)
    }
}

impl Default for StepPatternSet {
    /// The classic move set: diagonal, vertical, and horizontal unit steps,
    /// all with unit weight.
    fn default() -> Self {
        Self(vec![
            StepPattern { dn: 1, dm: 1, weight: 1.0 },
            StepPattern { dn: 1, dm: 0, weight: 1.0 },
            StepPattern { dn: 0, dm: 1, weight: 1.0 },
        ])
    }
}

impl<'a> IntoIterator for &'a StepPatternSet {
    type Item = &'a StepPattern;
    type IntoIter = std::slice::Iter<'a, StepPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
