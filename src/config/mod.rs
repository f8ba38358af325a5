pub mod goals;
pub mod manager;
pub mod search;
pub mod traits;

pub use goals::OptimizationGoals;
pub use manager::{AppConfig, ConfigManager};
pub use search::SearchConfig;
pub use traits::ConfigSection;
