//! # Telehealth Console
//!
//! A line-oriented terminal surface for the provider client. It reads
//! commands, applies them through [`handlers::handle`] and re-renders the state
//! whenever a local edit happens or a request completes.

use std::io::Write;

use eyre::Result;
use telehealth_client::{ProviderApi, ProviderScheduleClient};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
    task::JoinHandle,
};
use tracing::{error, info};

pub mod commands;
pub mod handlers;
pub mod view;

use commands::ParseError;
use handlers::Reply;

/// Runs the console until `quit` or end of input.
///
/// The first render happens before the initial provider load completes; the
/// list is rendered again once it arrives. Requests still in flight when the
/// loop ends are awaited, and the final state is rendered before returning.
pub async fn run<A, R, W>(client: ProviderScheduleClient<A>, input: R, output: &mut W) -> Result<()>
where
    A: ProviderApi + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (updates_tx, mut updates_rx) = mpsc::unbounded_channel();
    let mut lines = input.lines();
    let mut pending: Vec<JoinHandle<()>> = vec![handlers::mount(&client, &updates_tx)];

    write!(output, "{}", view::render(&client.snapshot().await))?;
    writeln!(output, "Type `help` for commands.")?;
    output.flush()?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let command = match commands::parse(&line) {
                    Ok(command) => command,
                    Err(ParseError::Empty) => continue,
                    Err(e) => {
                        writeln!(output, "{}. Type `help` for commands.", e)?;
                        output.flush()?;
                        continue;
                    }
                };

                match handlers::handle(&client, command, &updates_tx).await {
                    Reply::Render => write!(output, "{}", view::render(&client.snapshot().await))?,
                    Reply::Message(message) => writeln!(output, "{}", message)?,
                    Reply::Pending(task) => pending.push(task),
                    Reply::Quit => break,
                }
                output.flush()?;
            }
            Some(()) = updates_rx.recv() => {
                write!(output, "{}", view::render(&client.snapshot().await))?;
                output.flush()?;
            }
        }
        pending.retain(|task| !task.is_finished());
    }

    if !pending.is_empty() {
        info!("Waiting for {} request(s) to finish", pending.len());
        for task in pending {
            if let Err(e) = task.await {
                error!("Request task failed: {}", e);
            }
        }
        write!(output, "{}", view::render(&client.snapshot().await))?;
        output.flush()?;
    }

    info!("Console closed");
    Ok(())
}
