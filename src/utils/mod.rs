pub mod colors;
pub mod formatting;
pub mod geo;
pub mod path;
pub mod table;
