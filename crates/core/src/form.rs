use crate::{
    errors::{ClientError, ClientResult, Operation},
    models::provider::{Provider, ProviderId, ProviderPayload},
};

/// One of the three editable inputs of the provider form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    AvailabilityStart,
    AvailabilityEnd,
}

/// Where the form sits in its Idle / Creating / Editing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Idle,
    Creating,
    Editing,
}

/// Transient, unsaved contents of the add/edit form.
///
/// When `editing` holds a provider, submitting the draft updates that provider
/// instead of creating a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub availability_start: String,
    pub availability_end: String,
    pub editing: Option<Provider>,
}

/// The request a valid draft turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(ProviderPayload),
    Update {
        id: ProviderId,
        payload: ProviderPayload,
    },
}

impl Submission {
    pub fn operation(&self) -> Operation {
        match self {
            Submission::Create(_) => Operation::AddProvider,
            Submission::Update { .. } => Operation::UpdateProvider,
        }
    }
}

impl FormDraft {
    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Editing
        } else if self.name.is_empty()
            && self.availability_start.is_empty()
            && self.availability_end.is_empty()
        {
            FormMode::Idle
        } else {
            FormMode::Creating
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::AvailabilityStart => self.availability_start = value,
            FormField::AvailabilityEnd => self.availability_end = value,
        }
    }

    /// Copies the provider's fields into the draft and makes it the edit target.
    pub fn begin_edit(&mut self, provider: &Provider) {
        self.name = provider.name.clone();
        self.availability_start = provider.availability_start.clone();
        self.availability_end = provider.availability_end.clone();
        self.editing = Some(provider.clone());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// All three fields must be non-empty. Start/end ordering is not checked.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.availability_start.is_empty()
            && !self.availability_end.is_empty()
    }

    pub fn payload(&self) -> ProviderPayload {
        ProviderPayload {
            name: self.name.clone(),
            availability_start: self.availability_start.clone(),
            availability_end: self.availability_end.clone(),
        }
    }

    pub fn submission(&self) -> ClientResult<Submission> {
        if !self.is_complete() {
            return Err(ClientError::Validation);
        }

        let payload = self.payload();
        Ok(match &self.editing {
            Some(provider) => Submission::Update {
                id: provider.id,
                payload,
            },
            None => Submission::Create(payload),
        })
    }
}
