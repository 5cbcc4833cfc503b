pub mod debounce;
pub mod engine;

pub use debounce::DebounceTimer;
pub use engine::{AutoSaveEngine, SaveState};
