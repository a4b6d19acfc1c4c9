use fitlog_domain::{RepositoryError, SessionId, SessionRepository, WorkoutSession};

/// Keeps sessions in memory, in insertion order, keyed by their
/// identifier. Not durable storage, only the holding collection that
/// feeds export.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: Vec<WorkoutSession>,
}

impl InMemorySessionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn create_session(&mut self, session: WorkoutSession) -> Result<SessionId, RepositoryError> {
        if self.sessions.iter().any(|s| s.id() == session.id()) {
            return Err(RepositoryError::Conflict);
        }

        let id = session.id().clone();
        self.sessions.push(session);
        Ok(id)
    }

    fn read_session(&self, id: &SessionId) -> Result<&WorkoutSession, RepositoryError> {
        self.sessions
            .iter()
            .find(|s| s.id() == id)
            .ok_or(RepositoryError::NotFound)
    }

    fn read_sessions(&self) -> Vec<&WorkoutSession> {
        self.sessions.iter().collect()
    }

    fn delete_session(&mut self, id: &SessionId) -> Result<SessionId, RepositoryError> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        self.sessions.remove(index);
        Ok(id.clone())
    }
}
