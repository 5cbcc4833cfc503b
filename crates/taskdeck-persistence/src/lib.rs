pub mod autosave;
pub mod serialization;
pub mod state_store;
pub mod store;
pub mod traits;

pub use autosave::*;
pub use serialization::*;
pub use state_store::*;
pub use store::*;
pub use traits::*;
