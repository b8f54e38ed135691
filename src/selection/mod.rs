pub mod random;
pub mod selection_strategy;
pub mod steady_state;

pub use random::RandomSelection;
pub use selection_strategy::{selection_count, SelectionStrategy, SelectionType};
pub use steady_state::SteadyStateSelection;
