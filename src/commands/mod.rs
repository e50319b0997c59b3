pub mod display;
pub mod help;
pub mod lookup;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;
use tracing::{debug, error};

use crate::api::blockstream::BlockstreamClient;
use crate::models::LookupOutcome;

/// Prompt shown when the interactive session starts
pub const PROMPT: &str = "Enter Transaction ID:";

/// Messages delivered to the display task
#[derive(Debug)]
pub enum DisplayMessage {
    Outcome { txid: String, outcome: LookupOutcome },
    Notice(String),
}

impl DisplayMessage {
    /// Text written to the display. Failures name their txid, since
    /// interactive results arrive in completion order.
    pub fn render(&self, pretty: bool) -> String {
        match self {
            DisplayMessage::Outcome {
                txid,
                outcome: LookupOutcome::Failure(message),
            } => format!("Error: {}: {}", txid, message),
            DisplayMessage::Outcome { outcome, .. } => outcome.render(pretty),
            DisplayMessage::Notice(text) => text.clone(),
        }
    }
}

/// One line of user input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup(String),
    Help,
    Quit,
    Empty,
}

/// Classify a line. `help`, `quit` and `exit` are reserved; everything else is a txid.
pub fn parse_input(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    match trimmed.to_lowercase().as_str() {
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Lookup(trimmed.to_string()),
    }
}

/// Handle one line from the terminal. Returns `false` when the user asked to quit.
pub async fn handle_input(client: &BlockstreamClient, line: &str, sink: &Sender<DisplayMessage>) -> bool {
    match parse_input(line) {
        Command::Empty => true,
        Command::Quit => false,
        Command::Help => {
            if let Err(e) = help::execute(sink).await {
                error!("❌ Error executing command help: {}", e);
            }
            true
        }
        Command::Lookup(txid) => {
            // Result arrives on the display; input keeps flowing meanwhile.
            let _ = lookup::execute(client, &txid, sink);
            true
        }
    }
}

/// Look up each txid in order, one request at a time
pub async fn run_one_shot(
    client: &BlockstreamClient,
    txids: &[String],
    sink: Sender<DisplayMessage>,
) -> Result<(), String> {
    for txid in txids {
        lookup::execute(client, txid, &sink)
            .await
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Read one txid per line from `reader` until EOF or `quit`
pub async fn run_interactive<R>(
    client: &BlockstreamClient,
    reader: R,
    sink: Sender<DisplayMessage>,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
{
    sink.send(DisplayMessage::Notice(PROMPT.to_string()))
        .await
        .map_err(|e| e.to_string())?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        if !handle_input(client, &line, &sink).await {
            debug!("Quit requested");
            break;
        }
    }

    Ok(())
}

/// Process exit status: one-shot runs fail when any lookup failed
pub fn exit_status(interactive: bool, failures: usize) -> u8 {
    if !interactive && failures > 0 {
        1
    } else {
        0
    }
}
