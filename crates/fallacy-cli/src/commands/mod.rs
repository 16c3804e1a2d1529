//! Command implementations.

pub mod cases;
pub mod detect;
pub mod evaluate;

pub use self::cases::execute_cases;
pub use self::detect::{execute_detect, read_input};
pub use self::evaluate::execute_evaluate;
