use clap::Parser;

use crate::api::blockstream::BlockstreamClient;

/// Fetch Bitcoin transactions from the Blockstream API and print the raw JSON
#[derive(Debug, Parser)]
#[command(name = "viewtxo", version)]
pub struct Config {
    /// Transaction IDs to look up; starts an interactive prompt when omitted
    #[arg(value_name = "TXID")]
    pub txids: Vec<String>,

    /// Esplora API base URL
    #[arg(long, env = "BLOCKSTREAM_API_URL", default_value = BlockstreamClient::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Indent the JSON output
    #[arg(long, env = "VIEWTXO_PRETTY")]
    pub pretty: bool,
}

impl Config {
    pub fn is_interactive(&self) -> bool {
        self.txids.is_empty()
    }

    pub fn client(&self) -> BlockstreamClient {
        BlockstreamClient::with_base_url(self.base_url.clone())
    }
}
