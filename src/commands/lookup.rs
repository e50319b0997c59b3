use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tracing::debug;

use super::DisplayMessage;
use crate::api::blockstream::BlockstreamClient;
use crate::services::lookup_service;

/// Run one lookup on a worker task and deliver the outcome to the display.
///
/// The caller may await the handle to serialise lookups, or drop it to keep
/// reading input while the request is in flight.
pub fn execute(client: &BlockstreamClient, txid: &str, sink: &Sender<DisplayMessage>) -> JoinHandle<()> {
    let client = client.clone();
    let txid = txid.trim().to_string();
    let sink = sink.clone();

    tokio::spawn(async move {
        let outcome = lookup_service::lookup(&client, &txid).await;
        if sink.send(DisplayMessage::Outcome { txid, outcome }).await.is_err() {
            debug!("Display closed before the lookup finished");
        }
    })
}
