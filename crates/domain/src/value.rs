use std::fmt::{self, Display};

use derive_more::{AsRef, Display, Into};
use serde::Serialize;

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd, Serialize)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Serialize)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..1000).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Time {
    type Error = TimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Time::new(parsed_value),
            Err(_) => Err(TimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 999 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd, Serialize)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 kg")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Rating of perceived exertion, stored in tenths on a half-point grid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f32")]
pub struct Rpe(u8);

impl Rpe {
    pub const ONE: Rpe = Rpe(10);
    pub const TWO: Rpe = Rpe(20);
    pub const THREE: Rpe = Rpe(30);
    pub const FOUR: Rpe = Rpe(40);
    pub const FIVE: Rpe = Rpe(50);
    pub const SIX: Rpe = Rpe(60);
    pub const SEVEN: Rpe = Rpe(70);
    pub const EIGHT: Rpe = Rpe(80);
    pub const NINE: Rpe = Rpe(90);
    pub const TEN: Rpe = Rpe(100);

    pub fn new(value: f32) -> Result<Self, RpeError> {
        if !(1.0..=10.0).contains(&value) {
            return Err(RpeError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RpeError::InvalidResolution);
        }

        Ok(Self(v))
    }

    /// Coerces an arbitrary number onto the valid RPE scale. `NaN` means
    /// "no rating"; everything else is clamped to `[1.0, 10.0]` and
    /// snapped to the nearest half point.
    #[must_use]
    pub fn clamp(value: f32) -> Option<Rpe> {
        if value.is_nan() {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Self(((value.clamp(1.0, 10.0) * 2.0).round() as u8) * 5))
    }
}

impl From<Rpe> for f32 {
    fn from(value: Rpe) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for Rpe {
    type Error = RpeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Rpe::new(parsed_value),
            Err(_) => Err(RpeError::ParseError),
        }
    }
}

impl Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RpeError {
    #[error("RPE must be in the range 1.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Bench Press", Ok(Name("Bench Press".to_string())))]
    #[case("  Squat  ", Ok(Name("Squat".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("8", Ok(Reps(8)))]
    #[case("0", Ok(Reps(0)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("eight", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case("20", Ok(Time(20)))]
    #[case("1000", Err(TimeError::OutOfRange))]
    #[case("twenty", Err(TimeError::ParseError))]
    fn test_time_try_from(#[case] value: &str, #[case] expected: Result<Time, TimeError>) {
        assert_eq!(Time::try_from(value), expected);
    }

    #[rstest]
    #[case("135", Ok(Weight(135.0)))]
    #[case("62.5", Ok(Weight(62.5)))]
    #[case("1000", Err(WeightError::OutOfRange))]
    #[case("-5", Err(WeightError::OutOfRange))]
    #[case("62.55", Err(WeightError::InvalidResolution))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[rstest]
    #[case("8", Ok(Rpe::EIGHT))]
    #[case("7.5", Ok(Rpe(75)))]
    #[case("0.5", Err(RpeError::OutOfRange))]
    #[case("10.5", Err(RpeError::OutOfRange))]
    #[case("7.3", Err(RpeError::InvalidResolution))]
    #[case("hard", Err(RpeError::ParseError))]
    fn test_rpe_try_from(#[case] value: &str, #[case] expected: Result<Rpe, RpeError>) {
        assert_eq!(Rpe::try_from(value), expected);
    }

    #[rstest]
    #[case(12.0, Some(Rpe::TEN))]
    #[case(0.2, Some(Rpe::ONE))]
    #[case(7.3, Some(Rpe(75)))]
    #[case(7.2, Some(Rpe(70)))]
    #[case(10.0, Some(Rpe::TEN))]
    #[case(f32::NAN, None)]
    fn test_rpe_clamp(#[case] value: f32, #[case] expected: Option<Rpe>) {
        assert_eq!(Rpe::clamp(value), expected);
    }

    #[test]
    fn test_rpe_display() {
        assert_eq!(Rpe(75).to_string(), "7.5");
        assert_eq!(Rpe::TEN.to_string(), "10");
    }
}
