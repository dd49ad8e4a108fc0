use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

/// Ticket drawn at the start of an acquisition flow. Tickets order flows by
/// when they were triggered, not by when their network work finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AcquisitionTicket(u64);

/// The single slot holding the text currently awaiting translation.
///
/// Cheap to clone; all clones share one slot. An acquisition flow draws a
/// ticket up front and commits its text with that ticket once the flow
/// succeeds. Commits carrying a ticket older than the newest committed one
/// are rejected, so when two flows overlap, the one triggered last wins
/// regardless of how their network calls interleave. Failed flows never
/// commit and leave the slot untouched.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Default)]
struct SessionInner {
    next_ticket: AtomicU64,
    slot: Mutex<Slot>,
}

#[derive(Default)]
struct Slot {
    text: Option<String>,
    ticket: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_acquisition(&self) -> AcquisitionTicket {
        AcquisitionTicket(self.inner.next_ticket.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Store `text` as the current session content. Returns false (slot
    /// unchanged) when a newer acquisition has already committed.
    pub fn commit(&self, ticket: AcquisitionTicket, text: String) -> bool {
        let mut slot = self.inner.slot.lock().expect("session slot poisoned");
        if ticket.0 < slot.ticket {
            log::debug!("dropping stale acquisition (ticket {})", ticket.0);
            return false;
        }
        slot.ticket = ticket.0;
        slot.text = Some(text);
        true
    }

    pub fn text(&self) -> Option<String> {
        self.inner.slot.lock().expect("session slot poisoned").text.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.text().map_or(true, |t| t.is_empty())
    }
}
