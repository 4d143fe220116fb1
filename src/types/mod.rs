mod classification;
mod client_type;
mod detection;
mod unified;

pub use classification::*;
pub use client_type::*;
pub use detection::*;
pub use unified::*;
