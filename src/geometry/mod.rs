pub mod pline;

pub use pline::{Pline, PlineVertex};
