//! Value objects exchanged between the vendor SDK, the session and the host.

pub mod outcome;
pub mod payload;
pub mod token_result;
pub mod ui_event;

// Re-export commonly used types
pub use outcome::{IntermediateKind, Outcome};
pub use payload::{RawResult, ResultChannel, ResultPayload};
pub use token_result::TokenResult;
pub use ui_event::UiEvent;
