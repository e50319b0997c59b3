/// Length in bytes of a Bitcoin transaction hash
pub const TXID_BYTES: usize = 32;

/// Whether `input` has the shape of a txid: 64 hex characters.
/// Only used for diagnostics; the API decides what is valid.
pub fn looks_like_txid(input: &str) -> bool {
    match hex::decode(input) {
        Ok(bytes) => bytes.len() == TXID_BYTES,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_txid() {
        assert!(looks_like_txid("4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"));
        assert!(looks_like_txid(&"AB".repeat(32)));
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        assert!(!looks_like_txid(""));
        assert!(!looks_like_txid("abc"));
        assert!(!looks_like_txid(&"zz".repeat(32)));
        assert!(!looks_like_txid(&"ab".repeat(33)));
    }
}
