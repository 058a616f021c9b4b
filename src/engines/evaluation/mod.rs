pub mod expression;
pub mod fitness;

pub use expression::evaluate;
pub use fitness::{fitness, weight, MIN_WEIGHT};
