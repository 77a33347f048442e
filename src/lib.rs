//! Provides friendly, documented facades over the Outlook COM automation
//! object model.
//!
//! The object model is dynamically dispatched: native members are looked up
//! by name at call time and values are untyped variants. This crate puts a
//! thin, strongly-named surface on top. Each facade type carries a static
//! attribute map from documented friendly names (`smtp_address`) to native
//! member names (`SmtpAddress`); a generic engine translates, validates
//! lightly, and forwards each operation exactly once. Faults come back as a
//! small documented error taxonomy carrying the native error code.
//!
//! The platform broker sits behind the [`com::Dispatch`] trait: on Windows
//! the real `IDispatch`-backed implementation connects to Outlook itself,
//! and everywhere (including in this crate's own tests) the scriptable
//! [`com::MockDispatch`] stands in for it.
//!
//! # Quickstart (live Outlook, Windows)
//! ```no_run
//! use outlook_dispatch::objects::Application;
//!
//! # fn run() -> Result<(), outlook_dispatch::FacadeError> {
//! # #[cfg(windows)] {
//! let app = Application::connect()?;
//! let inbox = app.get_namespace("MAPI")?.inbox()?;
//! println!("{} unread", inbox.unread_item_count()?);
//! # }
//! # Ok(())
//! # }
//! ```
//!
//! # Quickstart (host-free)
//! ```
//! use std::rc::Rc;
//! use outlook_dispatch::com::MockDispatch;
//! use outlook_dispatch::objects::Account;
//!
//! let mock = Rc::new(MockDispatch::new("Account").with_property("SmtpAddress", "me@example.com"));
//! let account = Account::from_dispatch(mock);
//! assert_eq!(account.smtp_address().unwrap(), "me@example.com");
//! ```
//!
//! Architecture layers:
//! - `com` — the broker boundary (trait, variants, faults, backends)
//! - `facade` — attribute maps and the translate-and-forward engine
//! - `objects` — the typed facade surfaces
//! - `enums` — the model's integer constants

pub mod com;
pub mod enums;
pub mod error;
pub mod facade;
pub mod objects;

pub use crate::error::FacadeError;
pub use crate::facade::{Facade, FacadeDescriptor, MemberKind, MemberSpec, Value, DISPATCH};
pub use crate::objects::{
    Account, Application, Collection, Folder, MailItem, NameSpace, Snapshot,
};
