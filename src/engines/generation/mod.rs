pub mod engine;
pub mod genome;
pub mod operators;
pub mod progress;

pub use engine::{GeneticSearch, ProgressCallback};
pub use genome::{FreeSlot, Genome};
pub use operators::{select_parents, tournament_selection};
pub use progress::{ConsoleProgress, NullProgress, RecordingProgress};
