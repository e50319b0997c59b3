use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::DisplayMessage;

const DISPLAY_QUEUE: usize = 32;

/// Spawn the display task writing to stdout.
/// The handle resolves to the number of failed lookups once every sender is dropped.
pub fn spawn(pretty: bool) -> (Sender<DisplayMessage>, JoinHandle<usize>) {
    let (sender, receiver) = mpsc::channel::<DisplayMessage>(DISPLAY_QUEUE);
    let task = tokio::spawn(run(receiver, tokio::io::stdout(), pretty));
    (sender, task)
}

/// Drain `receiver` into `out`, one rendered block per message
pub async fn run<W>(mut receiver: Receiver<DisplayMessage>, mut out: W, pretty: bool) -> usize
where
    W: AsyncWrite + Unpin,
{
    let mut failures = 0;

    while let Some(message) = receiver.recv().await {
        if let DisplayMessage::Outcome { txid, outcome } = &message {
            if !outcome.is_success() {
                failures += 1;
            }
            debug!("Displaying result for {}", txid);
        }
        let text = message.render(pretty);

        if let Err(e) = write_line(&mut out, &text).await {
            error!("Failed to write to display: {}", e);
            break;
        }
    }

    failures
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
