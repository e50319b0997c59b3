pub mod txid;

pub use txid::looks_like_txid;
