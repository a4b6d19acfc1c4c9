#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod title;
mod user;
mod workout_session;

pub use error::{RepositoryError, ValidationError};
pub use exercise::{Exercise, Kind, Minutes, Reps, Sets, Weight};
pub use title::Title;
pub use user::{Height, Sex, User, UserId};
pub use workout_session::{SessionId, SessionRepository, SessionState, WorkoutSession, iso_utc};
