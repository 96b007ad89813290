//! Optional and nullable value containers.
//!
//! - [`Optional<T>`]: presence or absence for in-program logic.
//! - [`Nullable<T>`]: null semantics for external systems, with a
//!   loss-aware bridge to database drivers ([`DriverValue`]) and, with the
//!   `serde` feature, a null-aware JSON encoding.
//!
//! ```rust
//! use maybe::{DriverValue, Nullable};
//!
//! // Unsigned values are range-checked on the way into the driver...
//! assert!(Nullable::valid(u64::MAX).to_driver_value().is_err());
//!
//! // ...and textual numeric columns are parsed on the way out.
//! let id = Nullable::<u32>::from_driver_value(DriverValue::text("123"))?;
//! assert_eq!(id.extract(), (&123, true));
//! # Ok::<(), maybe::MaybeError>(())
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for both containers.
//! - `temporal` (default): `chrono::DateTime<Utc>` as a driver timestamp.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod driver;
pub mod error;
pub mod nullable;
pub mod optional;
pub mod primitives;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod wire;

pub use driver::element::{DriverType, ElementKind, Native};
pub use driver::{DriverKind, DriverValue};
pub use error::{MaybeError, MaybeResult};
pub use nullable::Nullable;
pub use optional::Optional;
pub use primitives::{Absent, first_non_zero, is_absent, is_zero};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{DriverType, DriverValue, MaybeError, MaybeResult, Nullable, Optional};
}
