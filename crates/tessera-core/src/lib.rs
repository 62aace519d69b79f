#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;

pub mod crypto;

pub use error::{BoxedError, Error, ErrorKind, Result};
