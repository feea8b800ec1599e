pub mod json;

pub use json::{insert_some, tagged};
