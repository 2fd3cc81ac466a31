pub mod engine;
pub mod models;

pub use engine::compute_cost;
pub use models::{AreaType, Complexity, CostBreakdown, JobSpec, MaterialType, PriceTable};
