mod advanced;
mod push;
mod report;

pub use advanced::*;
pub use push::*;
pub use report::*;
