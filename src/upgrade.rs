//! The paid-upgrade state machine. It has to survive the client leaving to
//! an external checkout page and coming back in a fresh process, so the
//! refresh-and-redirect step on return is guarded by a single-use latch.

#[derive(Clone, Debug, Default, PartialEq)]
pub enum UpgradeState {
    #[default]
    Idle,
    CheckoutRequested,
    AwaitingReturn,
    Refreshing,
    Complete,
    Failed(String),
}

/// Transition attempts from the wrong state are no-ops; the UI may fire
/// callbacks more often than the journey advances.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpgradeFlow {
    state: UpgradeState,
}

impl UpgradeFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UpgradeState {
        &self.state
    }

    /// Starts a checkout attempt. Requires a session email to hand to the
    /// payment processor; returns whether the request should be issued.
    pub fn request_checkout(&mut self, email: &str) -> bool {
        if email.is_empty() {
            return false;
        }
        match self.state {
            UpgradeState::Idle | UpgradeState::Failed(_) => {
                self.state = UpgradeState::CheckoutRequested;
                true
            }
            _ => false,
        }
    }

    /// The backend produced a checkout URL; the caller navigates to it next.
    pub fn checkout_ready(&mut self) {
        if self.state == UpgradeState::CheckoutRequested {
            self.state = UpgradeState::AwaitingReturn;
        }
    }

    pub fn checkout_failed(&mut self, message: String) {
        if self.state == UpgradeState::CheckoutRequested {
            self.state = UpgradeState::Failed(message);
        }
    }

    /// Dismissing a surfaced failure re-arms the machine for a fresh attempt.
    pub fn acknowledge_failure(&mut self) {
        if matches!(self.state, UpgradeState::Failed(_)) {
            self.state = UpgradeState::Idle;
        }
    }

    /// The single-use latch for the return view. Returns `true` exactly once
    /// per arrival: the first call moves to `Refreshing` and tells the caller
    /// to run the identity refresh; re-renders that call again get `false`.
    ///
    /// `Idle` is accepted alongside `AwaitingReturn` because the external
    /// redirect tears down the process — a fresh client standing at the
    /// return view *is* the return signal.
    pub fn arrive_at_return(&mut self) -> bool {
        match self.state {
            UpgradeState::Idle | UpgradeState::AwaitingReturn => {
                self.state = UpgradeState::Refreshing;
                true
            }
            _ => false,
        }
    }

    pub fn refresh_succeeded(&mut self) {
        if self.state == UpgradeState::Refreshing {
            self.state = UpgradeState::Complete;
        }
    }

    /// A failed refresh parks the journey in `Failed`; it never reaches
    /// `Complete` and never redirects again on its own.
    pub fn refresh_failed(&mut self, message: String) {
        if self.state == UpgradeState::Refreshing {
            self.state = UpgradeState::Failed(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_complete() {
        let mut flow = UpgradeFlow::new();
        assert!(flow.request_checkout("a@b.com"));
        assert_eq!(flow.state(), &UpgradeState::CheckoutRequested);

        flow.checkout_ready();
        assert_eq!(flow.state(), &UpgradeState::AwaitingReturn);

        assert!(flow.arrive_at_return());
        assert_eq!(flow.state(), &UpgradeState::Refreshing);

        flow.refresh_succeeded();
        assert_eq!(flow.state(), &UpgradeState::Complete);
    }

    #[test]
    fn empty_email_refuses_checkout() {
        let mut flow = UpgradeFlow::new();
        assert!(!flow.request_checkout(""));
        assert_eq!(flow.state(), &UpgradeState::Idle);
    }

    #[test]
    fn return_latch_fires_exactly_once() {
        let mut flow = UpgradeFlow::new();
        assert!(flow.arrive_at_return());
        assert!(!flow.arrive_at_return());
        assert!(!flow.arrive_at_return());
        assert_eq!(flow.state(), &UpgradeState::Refreshing);
    }

    #[test]
    fn fresh_arrival_counts_as_the_return_signal() {
        // The external redirect destroyed the old machine: arriving from
        // Idle must still run the refresh, once.
        let mut flow = UpgradeFlow::new();
        assert_eq!(flow.state(), &UpgradeState::Idle);
        assert!(flow.arrive_at_return());
        assert!(!flow.arrive_at_return());
    }

    #[test]
    fn failed_refresh_never_reaches_complete() {
        let mut flow = UpgradeFlow::new();
        assert!(flow.arrive_at_return());
        flow.refresh_failed("backend unreachable".to_string());
        assert_eq!(
            flow.state(),
            &UpgradeState::Failed("backend unreachable".to_string())
        );

        // No redirect loop: another render of the return view does nothing.
        assert!(!flow.arrive_at_return());
        flow.refresh_succeeded();
        assert_ne!(flow.state(), &UpgradeState::Complete);
    }

    #[test]
    fn checkout_failure_is_recoverable() {
        let mut flow = UpgradeFlow::new();
        assert!(flow.request_checkout("a@b.com"));
        flow.checkout_failed("card declined".to_string());
        assert_eq!(
            flow.state(),
            &UpgradeState::Failed("card declined".to_string())
        );

        flow.acknowledge_failure();
        assert_eq!(flow.state(), &UpgradeState::Idle);
        assert!(flow.request_checkout("a@b.com"));
    }

    #[test]
    fn failed_state_permits_a_direct_retry() {
        let mut flow = UpgradeFlow::new();
        assert!(flow.request_checkout("a@b.com"));
        flow.checkout_failed("oops".to_string());
        assert!(flow.request_checkout("a@b.com"));
        assert_eq!(flow.state(), &UpgradeState::CheckoutRequested);
    }

    #[test]
    fn double_checkout_requests_do_not_stack() {
        let mut flow = UpgradeFlow::new();
        assert!(flow.request_checkout("a@b.com"));
        assert!(!flow.request_checkout("a@b.com"));
    }
}
