use std::{cell::Cell, rc::Rc};
use web_sys::{AbortController, AbortSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What caused a fetch; the dashboard only announces manual refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Mount,
    Manual,
    AfterMutation,
}

/// Cancellation shared between a view and the requests it issued.
///
/// Cancelling aborts the attached `AbortController` (if any) and marks every ticket carrying this
/// handle as dead, so late responses are dropped instead of applied.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    cancelled: Rc<Cell<bool>>,
    controller: Option<AbortController>,
}

impl Cancellation {
    /// Handle backed by a browser `AbortController`.
    pub fn with_abort_controller() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
            controller: AbortController::new().ok(),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);

        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    seq: u64,
    origin: FetchOrigin,
    cancellation: Cancellation,
}

impl FetchTicket {
    pub fn origin(&self) -> FetchOrigin {
        self.origin
    }

    pub fn cancellation(&self) -> &Cancellation {
        &self.cancellation
    }
}

/// Issues monotonically increasing tickets; only the latest one may be applied.
#[derive(Debug, Default)]
pub struct FetchSequence {
    issued: u64,
}

impl FetchSequence {
    pub fn issue(&mut self, origin: FetchOrigin, cancellation: &Cancellation) -> FetchTicket {
        self.issued += 1;

        FetchTicket {
            seq: self.issued,
            origin,
            cancellation: cancellation.clone(),
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.seq == self.issued && !ticket.cancellation.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let cancellation = Cancellation::default();
        let mut seq = FetchSequence::default();

        let first = seq.issue(FetchOrigin::Mount, &cancellation);
        assert!(seq.is_current(&first));

        let second = seq.issue(FetchOrigin::Manual, &cancellation);
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
        assert_eq!(second.origin(), FetchOrigin::Manual);
    }

    #[test]
    fn cancelled_ticket_is_not_current() {
        let cancellation = Cancellation::default();
        let mut seq = FetchSequence::default();
        let ticket = seq.issue(FetchOrigin::Mount, &cancellation);

        cancellation.cancel();

        assert!(ticket.cancellation().is_cancelled());
        assert!(!seq.is_current(&ticket));
    }
}
