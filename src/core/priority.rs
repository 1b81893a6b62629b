//! Ordering of rewriters attached to the same hook point.

/// Processing priority of a registered rewriter.
///
/// Lower value = runs earlier. Rewriters with equal priority run in
/// registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i32);

impl Priority {
    /// Runs before everything else.
    pub const EARLIEST: Self = Self(i32::MIN);

    /// Default for generic post-processing.
    pub const DEFAULT: Self = Self(10);

    /// Runs after everything else (minifiers, compression).
    pub const LATEST: Self = Self(i32::MAX);
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}
