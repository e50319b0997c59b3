use tokio::sync::mpsc::Sender;

use super::DisplayMessage;

/// Usage text shown for `help`
pub fn usage() -> String {
    [
        "📖 ViewTXO",
        "Fetch a Bitcoin transaction from the Blockstream API and print its raw JSON.",
        "",
        "  <txid>   Look up a transaction, e.g. 4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
        "  help     Show this help message",
        "  quit     Exit (also: exit, Ctrl-D)",
    ]
    .join("\n")
}

pub async fn execute(sink: &Sender<DisplayMessage>) -> Result<(), String> {
    sink.send(DisplayMessage::Notice(usage()))
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_mentions_commands() {
        let text = usage();
        assert!(text.contains("<txid>"));
        assert!(text.contains("help"));
        assert!(text.contains("quit"));
    }
}
