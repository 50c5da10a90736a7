//! Error types surfaced by the engine's public operations.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, RoomId, WearSlot};

/// Caller mistakes rejected by [`super::Engine`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("character {0} not found")]
    UnknownCharacter(CharacterId),

    #[error("{0} not found")]
    UnknownRoom(RoomId),

    #[error("character {character} already wears something in {slot:?}")]
    SlotOccupied {
        character: CharacterId,
        slot: WearSlot,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::UnknownCharacter(_) | EngineError::UnknownRoom(_) => {
                ErrorSeverity::Validation
            }
            EngineError::SlotOccupied { .. } => ErrorSeverity::Recoverable,
            EngineError::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::UnknownCharacter(_) => "ENGINE_UNKNOWN_CHARACTER",
            EngineError::UnknownRoom(_) => "ENGINE_UNKNOWN_ROOM",
            EngineError::SlotOccupied { .. } => "ENGINE_SLOT_OCCUPIED",
            EngineError::Oracle(error) => error.error_code(),
        }
    }
}
