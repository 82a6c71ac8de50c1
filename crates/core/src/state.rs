//! # Application State
//!
//! `AppState` mirrors the remote provider collection and the server-computed
//! schedule, together with the form draft and the single error slot. Every
//! operation of the client is expressed as a plain transition on this struct,
//! so the whole synchronization contract can be exercised without a network or
//! a rendering surface.
//!
//! Loads are sequenced: each request takes a [`Ticket`] before it is sent, and a
//! completion is only applied if its ticket is newer than the last one applied
//! for that resource. Late responses from older requests are dropped.

use crate::{
    errors::{ClientError, ClientResult, Operation},
    form::{FormDraft, FormField, Submission},
    models::{
        provider::{Provider, ProviderId},
        schedule::Schedule,
    },
};

/// What happens to the error slot after an operation succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// The last error stays visible until another failure replaces it.
    #[default]
    Sticky,
    /// Any successful operation clears the error slot.
    ClearOnSuccess,
}

/// Sequence number handed out when a load request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Result of feeding a load completion back into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// A newer request already completed; nothing was changed.
    Stale,
}

#[derive(Debug, Clone, Default)]
struct Sequence {
    issued: u64,
    applied: u64,
}

impl Sequence {
    fn issue(&mut self) -> Ticket {
        self.issued = self.issued.saturating_add(1);
        Ticket(self.issued)
    }

    fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    providers: Vec<Provider>,
    schedule: Schedule,
    form: FormDraft,
    error: Option<String>,
    policy: ErrorPolicy,
    provider_loads: Sequence,
    schedule_loads: Sequence,
}

impl AppState {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn form(&self) -> &FormDraft {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn find_provider(&self, id: ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|provider| provider.id == id)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn begin_edit(&mut self, provider: &Provider) {
        self.form.begin_edit(provider);
    }

    pub fn cancel_edit(&mut self) {
        self.form.clear();
    }

    /// Validates the draft and returns the request to send.
    ///
    /// A missing field records the validation error and yields `Err`; the
    /// caller must not issue any request in that case.
    pub fn prepare_submit(&mut self) -> ClientResult<Submission> {
        self.form.submission().map_err(|err| {
            self.fail(err.clone());
            err
        })
    }

    pub fn submit_succeeded(&mut self) {
        self.form.clear();
        self.succeeded();
    }

    pub fn delete_succeeded(&mut self) {
        self.succeeded();
    }

    /// Records a failure in the single error slot, replacing any previous one.
    pub fn fail(&mut self, err: ClientError) {
        self.error = Some(err.to_string());
    }

    pub fn begin_load_providers(&mut self) -> Ticket {
        self.provider_loads.issue()
    }

    pub fn complete_load_providers(
        &mut self,
        ticket: Ticket,
        result: ClientResult<Vec<Provider>>,
    ) -> LoadOutcome {
        if !self.provider_loads.accept(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(providers) => {
                self.providers = providers;
                self.succeeded();
                LoadOutcome::Applied
            }
            Err(_) => {
                self.fail(ClientError::RequestFailed(Operation::LoadProviders));
                LoadOutcome::Failed
            }
        }
    }

    pub fn begin_load_schedule(&mut self) -> Ticket {
        self.schedule_loads.issue()
    }

    pub fn complete_load_schedule(
        &mut self,
        ticket: Ticket,
        result: ClientResult<Schedule>,
    ) -> LoadOutcome {
        if !self.schedule_loads.accept(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(schedule) => {
                self.schedule = schedule;
                self.succeeded();
                LoadOutcome::Applied
            }
            Err(_) => {
                self.fail(ClientError::RequestFailed(Operation::LoadSchedule));
                LoadOutcome::Failed
            }
        }
    }

    fn succeeded(&mut self) {
        if self.policy == ErrorPolicy::ClearOnSuccess {
            self.error = None;
        }
    }
}
