pub mod orientation;
pub mod pointer;

pub use orientation::wire_orientation;
pub use pointer::wire_pointer;
