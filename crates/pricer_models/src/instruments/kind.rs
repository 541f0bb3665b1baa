//! The closed set of supported option variants.

use super::exercise::ExerciseStyle;
use super::payoff::PayoffType;

/// Option variant tag: exercise style crossed with payoff side.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, OptionKind, PayoffType};
///
/// let kind = OptionKind::AmericanPut;
/// assert_eq!(kind.payoff_type(), PayoffType::Put);
/// assert_eq!(kind.exercise_style(), ExerciseStyle::American);
/// assert_eq!(OptionKind::from_parts(PayoffType::Put, ExerciseStyle::American), kind);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// European call
    EuropeanCall,
    /// European put
    EuropeanPut,
    /// American call
    AmericanCall,
    /// American put
    AmericanPut,
}

impl OptionKind {
    /// All four variants, in declaration order.
    pub const ALL: [OptionKind; 4] = [
        OptionKind::EuropeanCall,
        OptionKind::EuropeanPut,
        OptionKind::AmericanCall,
        OptionKind::AmericanPut,
    ];

    /// Builds the tag from its two axes.
    pub fn from_parts(payoff: PayoffType, exercise: ExerciseStyle) -> Self {
        match (exercise, payoff) {
            (ExerciseStyle::European, PayoffType::Call) => OptionKind::EuropeanCall,
            (ExerciseStyle::European, PayoffType::Put) => OptionKind::EuropeanPut,
            (ExerciseStyle::American, PayoffType::Call) => OptionKind::AmericanCall,
            (ExerciseStyle::American, PayoffType::Put) => OptionKind::AmericanPut,
        }
    }

    /// Returns the payoff side.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        match self {
            OptionKind::EuropeanCall | OptionKind::AmericanCall => PayoffType::Call,
            OptionKind::EuropeanPut | OptionKind::AmericanPut => PayoffType::Put,
        }
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        match self {
            OptionKind::EuropeanCall | OptionKind::EuropeanPut => ExerciseStyle::European,
            OptionKind::AmericanCall | OptionKind::AmericanPut => ExerciseStyle::American,
        }
    }

    /// Human-readable label, e.g. "American Put".
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::EuropeanCall => "European Call",
            OptionKind::EuropeanPut => "European Put",
            OptionKind::AmericanCall => "American Call",
            OptionKind::AmericanPut => "American Put",
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
