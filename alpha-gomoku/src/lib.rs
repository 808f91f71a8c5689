pub mod agent;
pub mod config;
pub mod engine;
pub mod error;
pub mod search;

pub use agent::{Cascade, NeighbourPolicy, Policy, Rollout, Tactics, WeightedRollout};
pub use config::{Budget, SearchConfig};
pub use engine::{Engine, SearchStats};
pub use error::{Adapter, SearchError};
