mod month;
pub use month::*;
mod date;
pub use date::*;
mod week_day;
pub use week_day::*;
mod week_start;
pub use week_start::*;
mod year;
pub use year::*;
