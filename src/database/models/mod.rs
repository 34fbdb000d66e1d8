pub mod member;
pub mod reminder;

pub use member::*;
pub use reminder::*;
