//! Text rendering of the application state, laid out as a single page:
//! error banner, add/edit form, provider list and schedule.

use std::fmt;

use telehealth_core::{form::FormMode, state::AppState};

pub const TITLE: &str = "Telehealth Scheduling System";

/// Renders an [`AppState`] through `Display`.
pub struct View<'a>(pub &'a AppState);

pub fn render(state: &AppState) -> String {
    View(state).to_string()
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let form = state.form();
        let editing = form.mode() == FormMode::Editing;

        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", "=".repeat(TITLE.len()))?;
        if let Some(error) = state.error() {
            writeln!(f, "! {}", error)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", if editing { "Edit Provider" } else { "Add Provider" })?;
        writeln!(f, "  Name:               {}", form.name)?;
        writeln!(f, "  Availability Start: {}", form.availability_start)?;
        writeln!(f, "  Availability End:   {}", form.availability_end)?;
        if editing {
            writeln!(f, "  [Update Provider] [Cancel]")?;
        } else {
            writeln!(f, "  [Add Provider]")?;
        }

        writeln!(f)?;
        writeln!(f, "Providers")?;
        for provider in state.providers() {
            writeln!(
                f,
                "  #{} {} ({} - {})",
                provider.id, provider.name, provider.availability_start, provider.availability_end
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Schedule")?;
        for (provider, times) in state.schedule() {
            writeln!(f, "  {}", provider)?;
            for time in times {
                writeln!(f, "    - {}", time)?;
            }
        }

        Ok(())
    }
}
