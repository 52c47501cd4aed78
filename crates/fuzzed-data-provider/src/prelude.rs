//! Prelude for fuzzed-data-provider.
//!
//! Re-exports the types a fuzz target usually needs.
//!
//! # Example
//!
//! ```rust
//! use fuzzed_data_provider::prelude::*;
//!
//! let config = ProviderConfig::builder().max_request_len(16).build()?;
//! let mut fdp = FuzzedDataProvider::with_config(vec![1, 2, 3], &config)?;
//!
//! let bag = CharBag::from("abc");
//! let name = fdp.consume_string(4, Some(&bag));
//! assert_eq!(name.chars().count(), 4);
//! # Ok::<(), ProviderError>(())
//! ```

pub use crate::builder::InputBuilder;
pub use crate::config::{ExhaustionPolicy, ProviderConfig, ProviderConfigBuilder};
pub use crate::cursor::DataState;
pub use crate::error::{ProviderError, ProviderResult};
pub use crate::hook::{ExhaustionEvent, ExhaustionHook};
pub use crate::provider::{FuzzEnum, FuzzedDataProvider};
pub use crate::text::CharBag;
