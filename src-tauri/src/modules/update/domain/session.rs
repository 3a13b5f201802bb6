// Update Session
//
// 一次 check → download → install 周期

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::state::UpdateState;
use crate::modules::update::ports::UpdateError;

#[derive(Debug, Clone)]
pub struct UpdateSession {
    pub id: Uuid,
    pub state: UpdateState,
    pub version: Option<String>,
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl UpdateSession {
    /// 新会话直接进入 Checking
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: UpdateState::Checking,
            version: None,
            error: None,
            started_at: Utc::now(),
        }
    }

    pub fn transition(&mut self, next: UpdateState) -> Result<(), UpdateError> {
        if !self.state.can_transition_to(next) {
            return Err(UpdateError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }

        tracing::debug!("[Update {}] {} -> {}", self.id, self.state, next);
        self.state = next;
        Ok(())
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), UpdateError> {
        self.transition(UpdateState::Error)?;
        self.error = Some(reason.into());
        Ok(())
    }
}

/// 提供给 UI 的更新状态快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSnapshot {
    pub session_id: Option<Uuid>,
    pub state: UpdateState,
    pub version: Option<String>,
}

impl UpdateSnapshot {
    pub fn idle() -> Self {
        Self {
            session_id: None,
            state: UpdateState::Idle,
            version: None,
        }
    }
}

impl From<&UpdateSession> for UpdateSnapshot {
    fn from(session: &UpdateSession) -> Self {
        Self {
            session_id: Some(session.id),
            state: session.state,
            version: session.version.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_rejects_skipping_update_available() {
        let mut session = UpdateSession::start();

        let err = session.transition(UpdateState::Downloading).unwrap_err();
        assert!(matches!(
            err,
            UpdateError::InvalidTransition {
                from: UpdateState::Checking,
                to: UpdateState::Downloading
            }
        ));
        assert_eq!(session.state, UpdateState::Checking);
    }

    #[test]
    fn test_session_records_failure() {
        let mut session = UpdateSession::start();
        session.fail("manifest missing").unwrap();

        assert_eq!(session.state, UpdateState::Error);
        assert_eq!(session.error.as_deref(), Some("manifest missing"));
    }
}
