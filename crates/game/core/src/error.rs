//! Error classification shared by the engine and its oracles.
//!
//! Only caller mistakes surface as errors: unknown characters or rooms, an
//! occupied wear slot, a missing item definition. Broken engine invariants
//! (removing an effect that is not on the character, unequipping an empty
//! slot) panic instead.

/// How a caller should treat a failed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request may succeed once the character's state changes, e.g. after
    /// the occupied slot is emptied.
    Recoverable,
    /// The request names something that does not exist.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Implemented by every error type the crate returns.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineError;
    use crate::env::OracleError;
    use crate::state::{CharacterId, ItemHandle, WearSlot};

    #[test]
    fn occupied_slots_are_recoverable() {
        let busy = EngineError::SlotOccupied {
            character: CharacterId(1),
            slot: WearSlot::Hands,
        };
        assert!(busy.severity().is_recoverable());
        assert_eq!(
            EngineError::UnknownCharacter(CharacterId(9)).severity(),
            ErrorSeverity::Validation
        );
        assert_eq!(
            OracleError::ItemNotFound(ItemHandle(4)).severity().as_str(),
            "validation"
        );
    }
}
