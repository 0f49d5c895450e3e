pub mod advance;
pub mod expense;
pub mod income;
pub mod outstanding_customer;
pub mod salary;
