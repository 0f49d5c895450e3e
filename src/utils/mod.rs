pub mod amount;
pub mod dates;
