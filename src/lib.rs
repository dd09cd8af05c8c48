pub mod accrual;
pub mod input;
pub mod report;
pub mod time;

pub use accrual::{project, Projection, ProjectionInput};
