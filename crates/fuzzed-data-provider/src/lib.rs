//! Deterministic typed decoding of fuzzer-supplied byte buffers.
//!
//! A [`FuzzedDataProvider`] wraps the raw input handed to a fuzz target and
//! splits it into integers, booleans, characters, strings, byte slices,
//! enumeration choices, floating-point values and timestamps. Decoding is a
//! pure function of the input bytes and the call sequence, so a crashing
//! input replays exactly.
//!
//! Reads never fail for lack of data: bytes past the end of the input read
//! as zero, and the provider records that it ran out. Under
//! [`ExhaustionPolicy::Stop`] an installed hook runs the first time this
//! happens, and [`FuzzedDataProvider::should_stop`] tells the harness to end
//! the iteration.
//!
//! # Example
//!
//! ```
//! use fuzzed_data_provider::prelude::*;
//!
//! let mut fdp = FuzzedDataProvider::new(vec![0x00, 0x00, 0x00, 0x03, 0x41]);
//!
//! let port = fdp.consume_i32_in_range(888, 900);
//! assert!((888..=900).contains(&port));
//!
//! let flag = fdp.consume_bool();
//! assert!(flag);
//! assert!(!fdp.is_exhausted());
//!
//! // Past the end: zero-filled, and the provider is now exhausted.
//! assert_eq!(fdp.consume_u64(), 0);
//! assert!(fdp.is_exhausted());
//! ```
//!
//! Seed inputs can be written with [`InputBuilder`], which encodes values in
//! the layout the provider decodes them from.

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod config;
pub mod cursor;
pub mod error;
pub mod hook;
pub mod provider;
pub mod scalar;
pub mod temporal;
pub mod text;

pub mod prelude;

pub use builder::InputBuilder;
pub use config::{ExhaustionPolicy, MIN_REQUEST_LEN, ProviderConfig, ProviderConfigBuilder};
pub use cursor::{Cursor, DataState};
pub use error::{ProviderError, ProviderResult};
pub use hook::{ExhaustionEvent, ExhaustionHook, terminate_process};
pub use provider::{FuzzEnum, FuzzedDataProvider};
pub use scalar::{FuzzInteger, remap};
pub use text::CharBag;
