//! Greek range envelope types.

use num_traits::Float;

/// Statistical envelope of one Greek across a scenario grid.
///
/// `mode` is the value at the unperturbed base snapshot; `min` and `max`
/// are the observed extrema across the grid. For well-formed grids
/// `min <= mode <= max`; an asymmetric grid whose clamps shift the
/// zero-perturbation point (base expiry under the time floor) can violate
/// the ordering, which is why [`is_ordered`](GreekRange::is_ordered) is a
/// query rather than an invariant enforced at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekRange<T: Float> {
    /// Value at the unperturbed base snapshot
    pub mode: T,
    /// Minimum observed across the grid
    pub min: T,
    /// Maximum observed across the grid
    pub max: T,
}

impl<T: Float> GreekRange<T> {
    /// Creates a range envelope.
    pub fn new(mode: T, min: T, max: T) -> Self {
        Self { mode, min, max }
    }

    /// Width of the envelope (`max - min`).
    #[inline]
    pub fn width(&self) -> T {
        self.max - self.min
    }

    /// True when `min <= mode <= max`.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.mode && self.mode <= self.max
    }
}

/// Range envelopes for all five Greeks of one contract.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekRangeSet<T: Float> {
    /// Delta envelope
    pub delta: GreekRange<T>,
    /// Gamma envelope
    pub gamma: GreekRange<T>,
    /// Theta envelope
    pub theta: GreekRange<T>,
    /// Vega envelope
    pub vega: GreekRange<T>,
    /// Rho envelope
    pub rho: GreekRange<T>,
}

impl<T: Float> GreekRangeSet<T> {
    /// True when every envelope satisfies `min <= mode <= max`.
    pub fn is_ordered(&self) -> bool {
        self.delta.is_ordered()
            && self.gamma.is_ordered()
            && self.theta.is_ordered()
            && self.vega.is_ordered()
            && self.rho.is_ordered()
    }
}
