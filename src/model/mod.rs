mod contributor;
mod link;
mod member;

pub use contributor::*;
pub use link::*;
pub use member::*;
