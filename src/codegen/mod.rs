//! Go source generation from extracted enum members.

pub mod emitter;
pub mod fs_utils;
pub mod preamble;
pub mod transcode;

pub use emitter::{Constant, Declaration};
pub use preamble::{Preamble, PACKAGE};
pub use transcode::{transcode, transcode_type_name};
