pub mod model_store;
pub mod state_store;
pub mod training_journal;

pub use model_store::ModelStore;
pub use state_store::{PersistedState, StateStore};
pub use training_journal::{JournalRow, TrainingJournal};
