// Update State
//
// Idle → Checking → {NoUpdateAvailable, UpdateAvailable → Downloading → Downloaded}
// Error 只能从 Checking / Downloading 进入，并回到 Idle；
// NoUpdateAvailable 回到 Idle；Downloaded 保持到进程退出

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum UpdateState {
    #[default]
    Idle,
    Checking,
    NoUpdateAvailable,
    UpdateAvailable,
    Downloading,
    Downloaded,
    Error,
}

impl UpdateState {
    pub fn can_transition_to(self, next: UpdateState) -> bool {
        use UpdateState::*;

        matches!(
            (self, next),
            (Idle, Checking)
                | (Checking, NoUpdateAvailable)
                | (Checking, UpdateAvailable)
                | (Checking, Error)
                | (UpdateAvailable, Downloading)
                | (Downloading, Downloaded)
                | (Downloading, Error)
                | (NoUpdateAvailable, Idle)
                | (Error, Idle)
        )
    }

    /// 会话在这些状态结束并被丢弃
    pub fn ends_session(&self) -> bool {
        matches!(self, UpdateState::NoUpdateAvailable | UpdateState::Error)
    }

    /// 检查或下载正在进行
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            UpdateState::Checking | UpdateState::UpdateAvailable | UpdateState::Downloading
        )
    }
}

impl std::fmt::Display for UpdateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downloading_only_from_update_available() {
        for state in [
            UpdateState::Idle,
            UpdateState::Checking,
            UpdateState::NoUpdateAvailable,
            UpdateState::Downloading,
            UpdateState::Downloaded,
            UpdateState::Error,
        ] {
            assert!(!state.can_transition_to(UpdateState::Downloading), "{}", state);
        }
        assert!(UpdateState::UpdateAvailable.can_transition_to(UpdateState::Downloading));
    }

    #[test]
    fn test_error_only_from_checking_or_downloading() {
        assert!(UpdateState::Checking.can_transition_to(UpdateState::Error));
        assert!(UpdateState::Downloading.can_transition_to(UpdateState::Error));
        assert!(!UpdateState::Idle.can_transition_to(UpdateState::Error));
        assert!(!UpdateState::Downloaded.can_transition_to(UpdateState::Error));
        assert!(UpdateState::Error.can_transition_to(UpdateState::Idle));
    }

    #[test]
    fn test_in_flight_states() {
        assert!(UpdateState::Checking.is_in_flight());
        assert!(UpdateState::UpdateAvailable.is_in_flight());
        assert!(UpdateState::Downloading.is_in_flight());
        assert!(!UpdateState::Downloaded.is_in_flight());
        assert!(!UpdateState::Idle.is_in_flight());
    }

    #[test]
    fn test_downloaded_is_terminal() {
        assert!(!UpdateState::Downloaded.can_transition_to(UpdateState::Idle));
        assert!(!UpdateState::Downloaded.can_transition_to(UpdateState::Checking));
    }
}
