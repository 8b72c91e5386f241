//! Error types returned by the slider's property setters.

use std::fmt;

/// A property of the value model that a setter can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Minimum,
    Maximum,
    ValueLeft,
    ValueRight,
    SmallChange,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minimum => "Minimum",
            Self::Maximum => "Maximum",
            Self::ValueLeft => "ValueLeft",
            Self::ValueRight => "ValueRight",
            Self::SmallChange => "SmallChange",
        };
        f.write_str(name)
    }
}

/// Errors raised by the range slider.
///
/// Interactive input never produces these: drags, clicks and wheel ticks that
/// would break an invariant are dropped instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliderError {
    /// A property setter was given a value that would break an invariant.
    /// The model is left unchanged.
    #[error("Value of '{value}' is not valid for '{property}'. {reason}")]
    InvalidArgument {
        property: Property,
        value: i32,
        reason: &'static str,
    },
    /// Internal consistency check failed after a mutation.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl SliderError {
    pub(crate) fn invalid(property: Property, value: i32, reason: &'static str) -> Self {
        log::debug!("rejected {property} = {value}: {reason}");
        Self::InvalidArgument {
            property,
            value,
            reason,
        }
    }

    /// The property named by an `InvalidArgument`, if any.
    pub fn property(&self) -> Option<Property> {
        match self {
            Self::InvalidArgument { property, .. } => Some(*property),
            Self::InvariantViolation(_) => None,
        }
    }
}

pub type Result<T, E = SliderError> = std::result::Result<T, E>;
