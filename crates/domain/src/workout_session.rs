use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::{AsRef, Display};
use log::debug;
use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::{Exercise, Minutes, RepositoryError, UserId, ValidationError};

/// Storage seam for sessions. Implementations must preserve insertion
/// order in `read_sessions`.
pub trait SessionRepository {
    fn create_session(&mut self, session: WorkoutSession) -> Result<SessionId, RepositoryError>;
    fn read_session(&self, id: &SessionId) -> Result<&WorkoutSession, RepositoryError>;
    fn read_sessions(&self) -> Vec<&WorkoutSession>;
    fn delete_session(&mut self, id: &SessionId) -> Result<SessionId, RepositoryError>;
}

/// Opaque session identifier.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Lifecycle of a session. A closed session never reopens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unstarted,
    Open,
    Closed,
}

/// A single timed workout owning its exercises in insertion order.
///
/// The fields are private so the lifecycle cannot be bypassed: `end_time`
/// is only ever set while `start_time` is set, and `duration_min` is
/// stored exactly once, when the session is stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    id: SessionId,
    user_id: UserId,
    title: String,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    duration_min: Option<Minutes>,
    exercises: Vec<Exercise>,
}

impl WorkoutSession {
    #[must_use]
    pub fn new(id: SessionId, user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            start_time: None,
            end_time: None,
            duration_min: None,
            exercises: Vec::new(),
        }
    }

    pub fn start(&mut self) -> Result<DateTime<Utc>, ValidationError> {
        if self.start_time.is_some() {
            return Err(ValidationError::AlreadyStarted);
        }

        let now = Utc::now();
        self.start_time = Some(now);
        debug!("started session {}", self.id);
        Ok(now)
    }

    pub fn add_exercise(&mut self, exercise: Exercise) -> Result<(), ValidationError> {
        match self.state() {
            SessionState::Unstarted => Err(ValidationError::NotStarted),
            SessionState::Closed => Err(ValidationError::AlreadyClosed),
            SessionState::Open => {
                self.exercises.push(exercise);
                Ok(())
            }
        }
    }

    /// Closes the session, stores the rounded duration and returns it.
    /// This transition is irreversible.
    pub fn stop(&mut self) -> Result<Minutes, ValidationError> {
        let Some(start_time) = self.start_time else {
            return Err(ValidationError::NotStarted);
        };
        if self.end_time.is_some() {
            return Err(ValidationError::AlreadyClosed);
        }
        if self.exercises.is_empty() {
            return Err(ValidationError::NoExercises);
        }

        let now = Utc::now();
        let duration = Minutes::between(start_time, now);
        self.end_time = Some(now);
        self.duration_min = Some(duration);
        debug!("finished session {} after {} min", self.id, duration);
        Ok(duration)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match (self.start_time, self.end_time) {
            (None, _) => SessionState::Unstarted,
            (Some(_), None) => SessionState::Open,
            (Some(_), Some(_)) => SessionState::Closed,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state() == SessionState::Open
    }

    /// Minutes elapsed so far. Unstarted sessions report zero, open
    /// sessions the time since start, closed sessions the stored duration.
    /// Query-only, never writes `duration_min`.
    #[must_use]
    pub fn live_duration(&self) -> Minutes {
        match (self.start_time, self.duration_min) {
            (None, _) => Minutes::ZERO,
            (Some(start_time), None) => Minutes::between(start_time, Utc::now()),
            (Some(_), Some(duration)) => duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    #[must_use]
    pub fn duration_min(&self) -> Option<Minutes> {
        self.duration_min
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Flat representation for export. Only closed sessions can be
    /// serialized.
    pub fn to_record(&self) -> Result<Map<String, Value>, ValidationError> {
        let (Some(start_time), Some(end_time), Some(duration)) =
            (self.start_time, self.end_time, self.duration_min)
        else {
            return Err(ValidationError::SessionStillOpen);
        };

        let mut record = Map::new();
        record.insert("id".into(), json!(self.id.as_ref()));
        record.insert("user_id".into(), json!(self.user_id.as_ref()));
        record.insert("title".into(), json!(self.title));
        record.insert("start_time".into(), json!(iso_utc(start_time)));
        record.insert("end_time".into(), json!(iso_utc(end_time)));
        record.insert("duration_min".into(), json!(f64::from(duration)));
        record.insert("exercises_count".into(), json!(self.exercises.len()));
        record.insert(
            "exercises".into(),
            Value::Array(
                self.exercises
                    .iter()
                    .map(|e| Value::Object(e.to_record()))
                    .collect(),
            ),
        );
        Ok(record)
    }
}

/// ISO-8601 timestamp in UTC with a `Z` suffix.
#[must_use]
pub fn iso_utc(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
