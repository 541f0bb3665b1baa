//! Option exercise style definitions.

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime, and
/// therefore which pricer is authoritative for it.
///
/// # Variants
/// - `European`: Exercise only at expiry (closed-form pricing)
/// - `American`: Exercise at any time up to expiry (lattice pricing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle {
    /// European style: exercise only at expiry.
    European,

    /// American style: exercise at any time before expiry.
    American,
}
