//! # Provider & Schedule Client
//!
//! Runs every user-facing operation against a [`ProviderApi`] and folds the
//! result into the shared [`AppState`]. Failures never propagate out of these
//! methods: they are logged and recorded in the state's error slot, so the
//! surface stays interactive after any of them.
//!
//! The state lock is only taken around state transitions, never across a
//! request, so overlapping operations proceed independently. Loads carry a
//! [`Ticket`](telehealth_core::state::Ticket) and late completions of older
//! loads are discarded.

use std::sync::Arc;

use telehealth_core::{
    errors::{ClientError, Operation},
    form::{FormField, Submission},
    models::provider::{Provider, ProviderId},
    state::{AppState, ErrorPolicy, LoadOutcome},
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::api::ProviderApi;

pub struct ProviderScheduleClient<A> {
    api: Arc<A>,
    state: Arc<RwLock<AppState>>,
}

impl<A> Clone for ProviderScheduleClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: ProviderApi> ProviderScheduleClient<A> {
    pub fn new(api: A, policy: ErrorPolicy) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(RwLock::new(AppState::new(policy))),
        }
    }

    /// A copy of the current state, for rendering.
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Initial load performed once when the surface comes up.
    pub async fn mount(&self) -> LoadOutcome {
        info!("Mounting provider client");
        self.load_providers().await
    }

    /// Replaces the cached provider list with the server's.
    pub async fn load_providers(&self) -> LoadOutcome {
        let ticket = self.state.write().await.begin_load_providers();
        debug!("Loading providers (ticket {})", ticket.value());

        let result = self.api.list_providers().await.map_err(|e| {
            error!("Failed to {}: {}", Operation::LoadProviders, e);
            ClientError::RequestFailed(Operation::LoadProviders)
        });

        let outcome = self.state.write().await.complete_load_providers(ticket, result);
        if outcome == LoadOutcome::Stale {
            warn!("Discarded stale provider list (ticket {})", ticket.value());
        }
        outcome
    }

    /// Creates or updates a provider from the form draft.
    ///
    /// Nothing is sent when a field is missing. On success the draft is cleared
    /// and the provider list reloaded once; on failure draft and list are left
    /// untouched.
    pub async fn submit(&self) {
        let prepared = self.state.write().await.prepare_submit();
        let submission = match prepared {
            Ok(submission) => submission,
            Err(e) => {
                warn!("Submit rejected: {}", e);
                return;
            }
        };

        let operation = submission.operation();
        info!("Submitting: {}", operation);
        let result = match submission {
            Submission::Create(payload) => self.api.create_provider(payload).await,
            Submission::Update { id, payload } => self.api.update_provider(id, payload).await,
        };

        match result {
            Ok(()) => {
                self.state.write().await.submit_succeeded();
                self.load_providers().await;
            }
            Err(e) => {
                error!("Failed to {}: {}", operation, e);
                self.state
                    .write()
                    .await
                    .fail(ClientError::RequestFailed(operation));
            }
        }
    }

    /// Deletes a provider. The cached list only changes once the follow-up
    /// reload succeeds.
    pub async fn delete(&self, id: ProviderId) {
        info!("Deleting provider {}", id);
        match self.api.delete_provider(id).await {
            Ok(()) => {
                self.state.write().await.delete_succeeded();
                self.load_providers().await;
            }
            Err(e) => {
                error!("Failed to {} {}: {}", Operation::DeleteProvider, id, e);
                self.state
                    .write()
                    .await
                    .fail(ClientError::RequestFailed(Operation::DeleteProvider));
            }
        }
    }

    pub async fn begin_edit(&self, provider: &Provider) {
        self.state.write().await.begin_edit(provider);
    }

    /// Begins editing the cached provider with `id`. Returns `false`, changing
    /// nothing, when no such provider is cached.
    pub async fn begin_edit_by_id(&self, id: ProviderId) -> bool {
        let mut state = self.state.write().await;
        match state.find_provider(id).cloned() {
            Some(provider) => {
                state.begin_edit(&provider);
                true
            }
            None => false,
        }
    }

    pub async fn cancel_edit(&self) {
        self.state.write().await.cancel_edit();
    }

    pub async fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.state.write().await.set_field(field, value);
    }

    /// Fetches the server-computed schedule. Only ever called on request.
    pub async fn load_schedule(&self) -> LoadOutcome {
        let ticket = self.state.write().await.begin_load_schedule();
        debug!("Loading schedule (ticket {})", ticket.value());

        let result = self.api.get_schedule().await.map_err(|e| {
            error!("Failed to {}: {}", Operation::LoadSchedule, e);
            ClientError::RequestFailed(Operation::LoadSchedule)
        });

        let outcome = self.state.write().await.complete_load_schedule(ticket, result);
        if outcome == LoadOutcome::Stale {
            warn!("Discarded stale schedule (ticket {})", ticket.value());
        }
        outcome
    }
}
