pub mod algorithm;
pub mod options;
pub mod trace;

pub use algorithm::{GeneticAlgorithm, RunState};
pub use options::{GaOptions, GaOptionsBuilder, LogLevel, SizeProfile};
pub use trace::{ConfigSnapshot, ExecutionTrace, GenerationRecord, ALGORITHM_NAME};
