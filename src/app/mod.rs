pub mod event;
pub mod mode;
pub mod state;
pub mod text_input;

pub use event::{ListEvent, event_for_key, handle_key_event};
pub use mode::Mode;
pub use state::{AppState, Effect, StatusMessage};
pub use text_input::TextInput;
