pub mod derived;
pub mod error;
pub mod tree;
pub mod walk;

mod derivative;
mod eval;
mod fold;
mod interval;
mod io;
mod latex;
mod macros;
mod substitute;


pub use derived::*;
pub use error::Error;
pub use io::INTEGER_TOLERANCE;
pub use tree::*;
