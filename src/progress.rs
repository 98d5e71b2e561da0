pub mod clock;
pub mod year;
