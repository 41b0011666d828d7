mod outcome;
mod question;

pub use outcome::*;
pub use question::*;
