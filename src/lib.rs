//! `greymagick` is not a library.
//! This interface is unstable and subject to change at any time.
//! Please use this documentation only if you are developing `greymagick`.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
mod init;
pub mod operations;
pub mod plan;
mod utils;
