// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]

mod color;
mod path;
mod quad;
mod square;
mod store;
mod ops {
    mod edit;
    mod json_format;
    mod locate;
    mod replace;

    pub use edit::*;
    pub use json_format::*;
}

pub use color::*;
pub use ops::*;
pub use path::*;
pub use quad::*;
pub use square::*;
pub use store::*;
