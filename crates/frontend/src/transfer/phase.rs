//! Lifecycle of one transfer attempt.

/// `Idle → Requesting → Replaying → Done`, with `Requesting → Failed` on
/// error. There is no cancellation; a new attempt or a reset is the only way
/// out of a terminal state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TransferPhase {
    #[default]
    Idle,
    /// Request is in flight; the start button is disabled.
    Requesting,
    /// Checkpoints are being replayed on the client-side timer.
    Replaying,
    Done,
    Failed,
}

impl TransferPhase {
    /// A fresh attempt may start from anything except an in-flight one.
    pub fn begin_request(self) -> Self {
        match self {
            TransferPhase::Requesting | TransferPhase::Replaying => self,
            _ => TransferPhase::Requesting,
        }
    }

    pub fn begin_replay(self) -> Self {
        match self {
            TransferPhase::Requesting => TransferPhase::Replaying,
            other => other,
        }
    }

    pub fn complete(self) -> Self {
        match self {
            // An empty progress list legally completes straight from Requesting.
            TransferPhase::Replaying | TransferPhase::Requesting => TransferPhase::Done,
            other => other,
        }
    }

    pub fn fail(self) -> Self {
        match self {
            TransferPhase::Requesting | TransferPhase::Replaying => TransferPhase::Failed,
            other => other,
        }
    }

    pub fn reset(self) -> Self {
        TransferPhase::Idle
    }

    /// Busy states keep the start button disabled.
    pub fn is_busy(self) -> bool {
        matches!(self, TransferPhase::Requesting | TransferPhase::Replaying)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let p = TransferPhase::Idle.begin_request();
        assert_eq!(p, TransferPhase::Requesting);
        let p = p.begin_replay();
        assert_eq!(p, TransferPhase::Replaying);
        let p = p.complete();
        assert_eq!(p, TransferPhase::Done);
    }

    #[test]
    fn failure_from_requesting() {
        let p = TransferPhase::Idle.begin_request().fail();
        assert_eq!(p, TransferPhase::Failed);
    }

    #[test]
    fn empty_progress_completes_without_replay() {
        let p = TransferPhase::Idle.begin_request().complete();
        assert_eq!(p, TransferPhase::Done);
    }

    #[test]
    fn terminal_states_allow_new_attempt() {
        assert_eq!(TransferPhase::Done.begin_request(), TransferPhase::Requesting);
        assert_eq!(TransferPhase::Failed.begin_request(), TransferPhase::Requesting);
    }

    #[test]
    fn illegal_transitions_are_ignored() {
        assert_eq!(TransferPhase::Requesting.begin_request(), TransferPhase::Requesting);
        assert_eq!(TransferPhase::Idle.begin_replay(), TransferPhase::Idle);
        assert_eq!(TransferPhase::Done.fail(), TransferPhase::Done);
        assert_eq!(TransferPhase::Idle.complete(), TransferPhase::Idle);
    }

    #[test]
    fn busy_only_while_in_flight() {
        assert!(TransferPhase::Requesting.is_busy());
        assert!(TransferPhase::Replaying.is_busy());
        assert!(!TransferPhase::Idle.is_busy());
        assert!(!TransferPhase::Done.is_busy());
        assert!(!TransferPhase::Failed.is_busy());
    }
}
