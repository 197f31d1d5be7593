pub mod add;
pub mod del;
pub mod form;
pub mod hours;
pub mod list;
pub mod locate;
pub mod log;
