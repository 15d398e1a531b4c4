//! Toggle Controller
//!
//! Sends one completion toggle per click and renders whatever the server
//! confirms. The client never flips the flag itself.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ToggleError;
use crate::models::{ToggleResponse, ToggleTarget};
use crate::toast::{Notify, ToastKind};

/// Shown when the request itself failed
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong!";

/// Backend call for one toggle
#[async_trait(?Send)]
pub trait ToggleTransport {
    async fn toggle(&self, target: &ToggleTarget) -> Result<ToggleResponse, ToggleError>;
}

/// The DOM subtree owned by one toggle control
pub trait ToggleSurface {
    /// Lock or release the control for the request duration
    fn set_busy(&self, busy: bool);
    /// Render the server-confirmed completion flag
    fn show_completed(&self, completed: bool);
}

/// What happened to one toggle request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Server confirmed; the surface now shows `completed`
    Applied { completed: bool },
    /// Server answered `success: false`
    Rejected { message: String },
    /// Request or decoding failed
    Failed(ToggleError),
    /// A newer request for the same control was issued meanwhile
    Superseded,
}

/// Ticket for one issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    target: ToggleTarget,
    id: u64,
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Monotonic request ids, tracked per control
#[derive(Debug, Default)]
pub struct RequestGenerations {
    counter: Cell<u64>,
    latest: RefCell<HashMap<ToggleTarget, u64>>,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, target: &ToggleTarget) -> RequestTicket {
        let id = self.counter.get() + 1;
        self.counter.set(id);
        self.latest.borrow_mut().insert(target.clone(), id);
        RequestTicket {
            target: target.clone(),
            id,
        }
    }

    /// True while no newer ticket exists for the same control
    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        self.latest.borrow().get(&ticket.target) == Some(&ticket.id)
    }
}

struct BusyGuard<'a, S: ToggleSurface + ?Sized>(&'a S);

impl<'a, S: ToggleSurface + ?Sized> BusyGuard<'a, S> {
    fn lock(surface: &'a S) -> Self {
        surface.set_busy(true);
        Self(surface)
    }
}

impl<S: ToggleSurface + ?Sized> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.0.set_busy(false);
    }
}

/// Runs toggles against a transport and reports through a notifier
pub struct ToggleController<T, N> {
    transport: T,
    notifier: N,
    generations: RequestGenerations,
}

impl<T: ToggleTransport, N: Notify> ToggleController<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport,
            notifier,
            generations: RequestGenerations::new(),
        }
    }

    pub async fn toggle<S: ToggleSurface + ?Sized>(&self, target: &ToggleTarget, surface: &S) -> ToggleOutcome {
        let _busy = BusyGuard::lock(surface);
        let ticket = self.generations.issue(target);
        tracing::debug!(
            endpoint = %target.endpoint(),
            request = ticket.id(),
            shown_completed = target.current_completed(),
            "toggle requested"
        );

        let result = self.transport.toggle(target).await;

        if !self.generations.is_latest(&ticket) {
            tracing::debug!(request = ticket.id(), "discarding superseded toggle response");
            return ToggleOutcome::Superseded;
        }

        match result {
            Ok(response) if response.success => match response.completed {
                Some(completed) => {
                    surface.show_completed(completed);
                    self.notifier.notify(&response.message, ToastKind::Success);
                    ToggleOutcome::Applied { completed }
                }
                None => self.fail(
                    target,
                    ToggleError::Decode("success without completion flag".to_string()),
                ),
            },
            Ok(response) => {
                tracing::warn!(endpoint = %target.endpoint(), message = %response.message, "toggle rejected");
                self.notifier.notify(&response.message, ToastKind::Error);
                ToggleOutcome::Rejected {
                    message: response.message,
                }
            }
            Err(err) => self.fail(target, err),
        }
    }

    fn fail(&self, target: &ToggleTarget, err: ToggleError) -> ToggleOutcome {
        tracing::error!(endpoint = %target.endpoint(), error = %err, "toggle failed");
        self.notifier.notify(GENERIC_FAILURE_MESSAGE, ToastKind::Error);
        ToggleOutcome::Failed(err)
    }
}
