use crate::errors::CoreError;
use crate::models::bankroll::Bankroll;

use super::format;

/// High-level storage operations: save/load a bankroll to/from snapshot
/// bytes or files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a bankroll to raw snapshot bytes (portable, platform-independent).
    ///
    /// Flow: Bankroll → bincode → PKSN format bytes
    pub fn save_to_bytes(bankroll: &Bankroll) -> Result<Vec<u8>, CoreError> {
        let payload = bincode::serialize(bankroll)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize bankroll: {e}")))?;
        Ok(format::write_snapshot(format::CURRENT_VERSION, &payload))
    }

    /// Deserialize a bankroll from raw snapshot bytes.
    ///
    /// The session history is re-validated while decoding; a snapshot whose
    /// cumulative balances don't add up is rejected. Settings must pass the
    /// same checks the setters apply.
    pub fn load_from_bytes(data: &[u8]) -> Result<Bankroll, CoreError> {
        let (header, payload) = format::read_snapshot(data)?;
        let bankroll: Bankroll = bincode::deserialize(payload)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize bankroll: {e}")))?;
        bankroll.settings.validate()?;
        tracing::debug!(
            version = header.version,
            bytes = header.payload_len,
            sessions = bankroll.ledger.len(),
            "snapshot loaded"
        );
        Ok(bankroll)
    }

    /// Save a bankroll to a snapshot file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(bankroll: &Bankroll, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(bankroll)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a bankroll from a snapshot file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Bankroll, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}
