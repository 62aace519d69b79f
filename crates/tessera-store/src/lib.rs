#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod collection;
mod error;
mod file_store;

pub mod model;

pub use collection::Collection;
pub use error::{Result, StoreError};
pub use file_store::FileStore;
