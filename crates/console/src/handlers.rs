use telehealth_client::{ProviderApi, ProviderScheduleClient};
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::debug;

use crate::commands::{Command, HELP};

/// What the console loop should do after a command was handled.
#[derive(Debug)]
pub enum Reply {
    /// Local state changed; render it now.
    Render,
    /// Print this text as-is.
    Message(String),
    /// A request is in flight. The task signals `updates` when it completes.
    Pending(JoinHandle<()>),
    Quit,
}

/// Applies one command to the client.
///
/// Form edits, begin-edit and cancel are applied immediately. Everything that
/// talks to the service runs on its own task so the prompt stays responsive;
/// several of them may be in flight at once.
pub async fn handle<A>(
    client: &ProviderScheduleClient<A>,
    command: Command,
    updates: &UnboundedSender<()>,
) -> Reply
where
    A: ProviderApi + 'static,
{
    match command {
        Command::Set(field, value) => {
            client.set_field(field, value).await;
            Reply::Render
        }
        Command::Edit(id) => {
            if client.begin_edit_by_id(id).await {
                Reply::Render
            } else {
                Reply::Message(format!("Unknown provider id: {}", id))
            }
        }
        Command::Cancel => {
            client.cancel_edit().await;
            Reply::Render
        }
        Command::Submit => Reply::Pending(spawn(client, updates, |client| async move {
            client.submit().await
        })),
        Command::Delete(id) => Reply::Pending(spawn(client, updates, move |client| async move {
            client.delete(id).await
        })),
        Command::Providers => Reply::Pending(spawn(client, updates, |client| async move {
            client.load_providers().await;
        })),
        Command::Schedule => Reply::Pending(spawn(client, updates, |client| async move {
            client.load_schedule().await;
        })),
        Command::Show => Reply::Render,
        Command::Help => Reply::Message(HELP.to_string()),
        Command::Quit => Reply::Quit,
    }
}

/// Starts the initial provider load in the background, signalling `updates`
/// like any other request.
pub fn mount<A>(client: &ProviderScheduleClient<A>, updates: &UnboundedSender<()>) -> JoinHandle<()>
where
    A: ProviderApi + 'static,
{
    spawn(client, updates, |client| async move {
        client.mount().await;
    })
}

fn spawn<A, F, Fut>(
    client: &ProviderScheduleClient<A>,
    updates: &UnboundedSender<()>,
    operation: F,
) -> JoinHandle<()>
where
    A: ProviderApi + 'static,
    F: FnOnce(ProviderScheduleClient<A>) -> Fut,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    let task = operation(client.clone());
    let updates = updates.clone();
    tokio::spawn(async move {
        task.await;
        if updates.send(()).is_err() {
            debug!("Console stopped listening before the request completed");
        }
    })
}
