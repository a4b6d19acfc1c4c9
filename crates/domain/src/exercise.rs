use std::fmt;

use chrono::{DateTime, Utc};
use derive_more::{Display, Into};
use serde_json::{Map, Value, json};

use crate::{Title, ValidationError};

/// Weight in kilograms, shared by the user profile and strength exercises.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidRange {
                field: "weight_kg",
                requirement: "greater than 0",
            });
        }

        Ok(Self(value))
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::InvalidRange {
                field: "reps",
                requirement: "greater than 0",
            });
        }

        Ok(Self(value))
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::InvalidRange {
                field: "sets",
                requirement: "greater than 0",
            });
        }

        Ok(Self(value))
    }
}

/// Duration in minutes. `new` validates caller input, `between` computes
/// elapsed wall-clock time and may legitimately round down to zero.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Minutes(f64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0.0);

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidRange {
                field: "duration_min",
                requirement: "greater than 0",
            });
        }

        Ok(Self(value))
    }

    /// Minutes elapsed between two instants, rounded to two decimal places.
    #[must_use]
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let seconds = (end - start).num_milliseconds() as f64 / 1000.0;
        Self((seconds / 60.0 * 100.0).round() / 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Strength,
    Cardio,
}

impl TryFrom<&str> for Kind {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "strength" => Ok(Kind::Strength),
            "cardio" => Ok(Kind::Cardio),
            _ => Err(ValidationError::InvalidEnum {
                field: "kind",
                expected: "strength, cardio",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Kind::Strength => "strength",
                Kind::Cardio => "cardio",
            }
        )
    }
}

/// One logical exercise performed during a session. The strength-only
/// fields exist exactly when the exercise is a strength exercise, so no
/// instance can carry an invalid field combination.
#[derive(Debug, Clone, PartialEq)]
pub enum Exercise {
    Strength {
        title: Title,
        duration: Minutes,
        weight: Weight,
        reps: Reps,
        sets: Sets,
    },
    Cardio {
        title: Title,
        duration: Minutes,
    },
}

impl Exercise {
    /// Validates raw caller input. Strength exercises require weight, reps
    /// and sets; cardio exercises must not carry them.
    pub fn new(
        kind: &str,
        title: &str,
        duration_min: f64,
        weight_kg: Option<f64>,
        reps: Option<u32>,
        sets: Option<u32>,
    ) -> Result<Self, ValidationError> {
        let kind = Kind::try_from(kind)?;
        let title = Title::new(title)?;
        let duration = Minutes::new(duration_min)?;

        match kind {
            Kind::Strength => Ok(Exercise::Strength {
                title,
                duration,
                weight: Weight::new(
                    weight_kg.ok_or(ValidationError::MissingField("weight_kg"))?,
                )?,
                reps: Reps::new(reps.ok_or(ValidationError::MissingField("reps"))?)?,
                sets: Sets::new(sets.ok_or(ValidationError::MissingField("sets"))?)?,
            }),
            Kind::Cardio => {
                if weight_kg.is_some() {
                    return Err(ValidationError::UnexpectedField("weight_kg"));
                }
                if reps.is_some() {
                    return Err(ValidationError::UnexpectedField("reps"));
                }
                if sets.is_some() {
                    return Err(ValidationError::UnexpectedField("sets"));
                }
                Ok(Exercise::Cardio { title, duration })
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Exercise::Strength { .. } => Kind::Strength,
            Exercise::Cardio { .. } => Kind::Cardio,
        }
    }

    #[must_use]
    pub fn title(&self) -> &Title {
        match self {
            Exercise::Strength { title, .. } | Exercise::Cardio { title, .. } => title,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Minutes {
        match self {
            Exercise::Strength { duration, .. } | Exercise::Cardio { duration, .. } => *duration,
        }
    }

    /// Flat key/value representation for export. Strength-only fields are
    /// present exactly when the exercise is a strength exercise.
    #[must_use]
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("kind".into(), json!(self.kind().to_string()));
        record.insert("title".into(), json!(self.title().as_ref()));
        record.insert("duration_min".into(), json!(f64::from(self.duration())));
        if let Exercise::Strength {
            weight, reps, sets, ..
        } = self
        {
            record.insert("weight_kg".into(), json!(f64::from(*weight)));
            record.insert("reps".into(), json!(u32::from(*reps)));
            record.insert("sets".into(), json!(u32::from(*sets)));
        }
        record
    }
}
