use std::cell::Cell;
use std::rc::Rc;

/// State that lives exactly as long as one browser session.
///
/// Created once by the app root and handed out through context; nothing here
/// is a process-wide global.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    missing_metadata_prompted: Rc<Cell<bool>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once per session: the first caller gets to show
    /// the missing-metadata prompt, everyone after that is told not to.
    pub fn claim_missing_metadata_prompt(&self) -> bool {
        !self.missing_metadata_prompted.replace(true)
    }

    pub fn missing_metadata_prompted(&self) -> bool {
        self.missing_metadata_prompted.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_prompt_latch_fires_once_and_is_shared_by_clones() {
        let session = SessionState::new();
        let handle = session.clone();
        assert!(!session.missing_metadata_prompted());
        assert!(handle.claim_missing_metadata_prompt());
        assert!(!session.claim_missing_metadata_prompt());
        assert!(session.missing_metadata_prompted());
    }

    #[test]
    fn a_new_session_starts_unlatched() {
        let first = SessionState::new();
        first.claim_missing_metadata_prompt();
        assert!(SessionState::new().claim_missing_metadata_prompt());
    }
}
