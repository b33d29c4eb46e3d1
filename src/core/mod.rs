pub mod calendar;
pub mod cases;
pub mod geometry;
pub mod operations;
pub mod orders;
pub mod registry;
pub mod runner;
pub mod strings;
pub mod suite;

pub use crate::domain::model::{CalendarDate, Money, Order, Student, Triangle};
pub use crate::domain::ports::{OrderRepository, PaymentGateway};
pub use crate::utils::error::Result;
