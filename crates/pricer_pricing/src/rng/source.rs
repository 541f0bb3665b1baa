//! Standard normal variate sources.

/// A stream of independent standard normal draws.
///
/// Scenario generation is generic over this trait so the generator is an
/// explicit, caller-owned dependency. Each call advances the stream.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::{NormalSource, ReplayNormals};
///
/// let mut source = ReplayNormals::new(vec![0.5, -1.0]);
/// assert_eq!(source.next_normal(), 0.5);
/// assert_eq!(source.next_normal(), -1.0);
/// assert_eq!(source.next_normal(), 0.5);
/// ```
pub trait NormalSource {
    /// Draws the next standard normal variate.
    fn next_normal(&mut self) -> f64;

    /// Fills `buffer` with consecutive draws, advancing the stream by
    /// `buffer.len()`.
    fn fill_normals(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_normal();
        }
    }
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }

    #[inline]
    fn fill_normals(&mut self, buffer: &mut [f64]) {
        (**self).fill_normals(buffer)
    }
}

/// Deterministic source that cycles through a fixed sequence of draws.
///
/// An empty sequence yields zeros.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplayNormals {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplayNormals {
    /// Creates a source replaying `values` in order, wrapping at the end.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl NormalSource for ReplayNormals {
    fn next_normal(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_wraps() {
        let mut source = ReplayNormals::new(vec![1.0, 2.0, 3.0]);
        let drawn: Vec<f64> = (0..7).map(|_| source.next_normal()).collect();
        assert_eq!(drawn, vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0]);
        assert_eq!(source.draws(), 7);
    }

    #[test]
    fn test_replay_empty_yields_zero() {
        let mut source = ReplayNormals::default();
        assert_eq!(source.next_normal(), 0.0);
    }

    #[test]
    fn test_fill_normals_through_mut_ref() {
        fn fill<S: NormalSource>(mut source: S, buffer: &mut [f64]) {
            source.fill_normals(buffer);
        }

        let mut source = ReplayNormals::new(vec![-1.0, 1.0]);
        let mut buffer = [0.0; 4];
        fill(&mut source, &mut buffer);
        assert_eq!(buffer, [-1.0, 1.0, -1.0, 1.0]);
        assert_eq!(source.draws(), 4);
    }
}
