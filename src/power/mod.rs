//----------------------------------------
// power mod
//----------------------------------------
pub mod analytic;
pub mod compute;
pub mod error;
pub mod monte_carlo;
pub mod types;

pub use compute::{compute_detection_probability, detection_probability};
pub use types::{Criterion, PowerQuery, Strategy, Tail};
