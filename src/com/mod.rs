//! Provides the COM abstraction layer the facade engine forwards through.
//!
//! The facade core never talks to the platform directly; everything crosses
//! the [`Dispatch`] trait with [`Variant`] values and [`NativeFault`] errors.
//! Two implementations ship:
//!
//! - `broker::ComDispatch` (Windows only) — the real thing, over
//!   `IDispatch`.
//! - [`MockDispatch`] — an in-memory scriptable fake for tests and host-free
//!   development.
//!
//! # Examples
//! ```
//! use outlook_dispatch::com::{Dispatch, MockDispatch, Variant};
//!
//! let mock = MockDispatch::new("Folder").with_property("Name", "Inbox");
//! assert_eq!(mock.get_property("Name").unwrap(), Variant::from("Inbox"));
//! ```

pub mod dispatch;
pub mod mock;

#[cfg(windows)]
pub mod broker;

// Re-export commonly used items
pub use dispatch::{Dispatch, NativeFault, Variant};
pub use mock::{MockCall, MockDispatch, DISP_E_MEMBERNOTFOUND};

#[cfg(windows)]
pub use broker::ComDispatch;
