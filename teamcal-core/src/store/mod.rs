//! Session store.
//!
//! The store owns the current [`AppState`] and is passed explicitly to
//! whatever renders or edits it. Commands go through [`Store::dispatch`],
//! which swaps in the next state and hands any resulting [`Notice`] to
//! subscribers.

mod command;
mod notice;
mod state;

pub use command::Command;
pub use notice::{Notice, NoticeKind};
pub use state::{AppState, Transition};

use crate::error::TeamcalResult;
use crate::export::{Export, ExportFormat};
use crate::reminder::Reminder;

type Subscriber = Box<dyn FnMut(&Notice)>;

#[derive(Default)]
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Store {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Notice) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply a command. On error the current state is kept.
    pub fn dispatch(&mut self, command: Command) -> TeamcalResult<&AppState> {
        let name = command.name();
        let Transition { state, notice } = self.state.apply(command).inspect_err(|e| {
            tracing::debug!(command = name, error = %e, "command rejected");
        })?;

        tracing::debug!(
            command = name,
            events = state.events().len(),
            categories = state.categories().len(),
            members = state.members().len(),
            "state updated"
        );
        self.state = state;

        if let Some(notice) = notice {
            self.notify(&notice);
        }

        Ok(&self.state)
    }

    /// Serialize the filtered events. Nothing is announced until the caller
    /// has delivered the file, see [`Store::announce_export`].
    pub fn export(&self, format: ExportFormat) -> TeamcalResult<Export> {
        let export = self.state.export(format)?;
        tracing::info!(
            format = %format,
            bytes = export.content.len(),
            filtered = !self.state.selected_categories().is_empty(),
            "calendar exported"
        );
        Ok(export)
    }

    /// Tell subscribers an export was delivered.
    pub fn announce_export(&mut self, format: ExportFormat) {
        self.notify(&Notice::info(
            "Calendar exported",
            format!(
                "Calendar has been exported as {}.",
                format.extension().to_uppercase()
            ),
        ));
    }

    /// Simulate mailing a reminder and announce it.
    pub fn send_reminder(&mut self, reminder: &Reminder) {
        tracing::info!(
            event = %reminder.event_id,
            recipients = reminder.recipients.len(),
            lead_minutes = reminder.lead_minutes,
            subject = %reminder.subject,
            "sending email reminders"
        );
        self.notify(&reminder.notice());
    }

    fn notify(&mut self, notice: &Notice) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(notice);
        }
    }
}
