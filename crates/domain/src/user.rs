use std::fmt;

use chrono::{DateTime, Utc};
use derive_more::{AsRef, Display, Into};

use crate::{ValidationError, Weight};

/// Opaque identifier of a user, as assigned by the messenger driving the
/// diary. Surrounding whitespace is stripped.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: &str) -> Result<Self, ValidationError> {
        let trimmed_id = id.trim();

        if trimmed_id.is_empty() {
            return Err(ValidationError::EmptyIdentifier("user id"));
        }

        Ok(UserId(trimmed_id.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl TryFrom<&str> for Sex {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "female" => Ok(Sex::FEMALE),
            "male" => Ok(Sex::MALE),
            _ => Err(ValidationError::InvalidEnum {
                field: "sex",
                expected: "female, male",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

/// Body height in centimeters.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Height(f64);

impl Height {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidRange {
                field: "height_cm",
                requirement: "greater than 0",
            });
        }

        Ok(Self(value))
    }
}

/// Profile of the person keeping the diary. All fields are validated at
/// construction and `created_at` is stamped exactly once; no update or
/// delete operations exist.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub created_at: DateTime<Utc>,
    pub age: Option<u32>,
    pub weight: Option<Weight>,
    pub height: Option<Height>,
    pub sex: Option<Sex>,
}

impl User {
    pub fn new(
        id: &str,
        age: Option<u32>,
        weight_kg: Option<f64>,
        height_cm: Option<f64>,
        sex: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: UserId::new(id)?,
            created_at: Utc::now(),
            age,
            weight: weight_kg.map(Weight::new).transpose()?,
            height: height_cm.map(Height::new).transpose()?,
            sex: sex.map(Sex::try_from).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("mario", Ok(UserId("mario".to_string())))]
    #[case("  mario  ", Ok(UserId("mario".to_string())))]
    #[case("", Err(ValidationError::EmptyIdentifier("user id")))]
    #[case("   ", Err(ValidationError::EmptyIdentifier("user id")))]
    fn test_user_id_new(#[case] id: &str, #[case] expected: Result<UserId, ValidationError>) {
        assert_eq!(UserId::new(id), expected);
    }

    #[rstest]
    #[case("female", Ok(Sex::FEMALE))]
    #[case("male", Ok(Sex::MALE))]
    #[case("MALE", Ok(Sex::MALE))]
    #[case("  Female  ", Ok(Sex::FEMALE))]
    #[case("other", Err(ValidationError::InvalidEnum {
        field: "sex",
        expected: "female, male",
        value: "other".to_string(),
    }))]
    fn test_sex_try_from(#[case] value: &str, #[case] expected: Result<Sex, ValidationError>) {
        assert_eq!(Sex::try_from(value), expected);
    }

    #[rstest]
    #[case(Sex::FEMALE, "female")]
    #[case(Sex::MALE, "male")]
    fn test_sex_display(#[case] sex: Sex, #[case] string: &str) {
        assert_eq!(sex.to_string(), string);
    }

    #[rstest]
    #[case(182.5, Ok(Height(182.5)))]
    #[case(0.0, Err(ValidationError::InvalidRange {
        field: "height_cm",
        requirement: "greater than 0",
    }))]
    #[case(-1.0, Err(ValidationError::InvalidRange {
        field: "height_cm",
        requirement: "greater than 0",
    }))]
    #[case(f64::NAN, Err(ValidationError::InvalidRange {
        field: "height_cm",
        requirement: "greater than 0",
    }))]
    fn test_height_new(#[case] value: f64, #[case] expected: Result<Height, ValidationError>) {
        assert_eq!(Height::new(value), expected);
    }

    #[test]
    fn test_user_new() {
        let user = User::new("  mario  ", Some(35), Some(72.5), Some(182.0), Some("MALE")).unwrap();

        assert_eq!(user.id.as_ref(), "mario");
        assert_eq!(user.age, Some(35));
        assert_eq!(user.weight, Some(Weight::new(72.5).unwrap()));
        assert_eq!(user.height, Some(Height::new(182.0).unwrap()));
        assert_eq!(user.sex, Some(Sex::MALE));
    }

    #[test]
    fn test_user_new_without_profile_data() {
        let user = User::new("mario", None, None, None, None).unwrap();

        assert_eq!(user.id.as_ref(), "mario");
        assert_eq!(user.age, None);
        assert_eq!(user.weight, None);
        assert_eq!(user.height, None);
        assert_eq!(user.sex, None);
    }

    #[rstest]
    #[case("", None, None, None, ValidationError::EmptyIdentifier("user id"))]
    #[case("mario", Some(0.0), None, None, ValidationError::InvalidRange {
        field: "weight_kg",
        requirement: "greater than 0",
    })]
    #[case("mario", None, Some(-3.0), None, ValidationError::InvalidRange {
        field: "height_cm",
        requirement: "greater than 0",
    })]
    #[case("mario", None, None, Some("x"), ValidationError::InvalidEnum {
        field: "sex",
        expected: "female, male",
        value: "x".to_string(),
    })]
    fn test_user_new_invalid(
        #[case] id: &str,
        #[case] weight_kg: Option<f64>,
        #[case] height_cm: Option<f64>,
        #[case] sex: Option<&str>,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(User::new(id, None, weight_kg, height_cm, sex), Err(expected));
    }
}
