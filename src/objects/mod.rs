//! Provides the typed facades over the Outlook object model.
//!
//! Each submodule defines one facade type: its static attribute map (the
//! friendly-to-native translation table) and a typed wrapper struct whose
//! accessors convert [`Value`]s to documented Rust shapes. Everything
//! forwards through the generic [`Facade`] engine; nothing here talks to the
//! broker directly.
//!
//! # Examples
//! ```
//! use std::rc::Rc;
//! use outlook_dispatch::com::MockDispatch;
//! use outlook_dispatch::objects::Account;
//!
//! let mock = Rc::new(MockDispatch::new("Account").with_property("DisplayName", "Work"));
//! let account = Account::from_dispatch(mock);
//! assert_eq!(account.display_name().unwrap(), "Work");
//! ```

pub mod account;
pub mod application;
pub mod folder;
pub mod mail_item;
pub mod namespace;

pub use account::{Account, ACCOUNT};
pub use application::{Application, APPLICATION};
pub use folder::{Folder, FOLDER};
pub use mail_item::{MailItem, MAIL_ITEM};
pub use namespace::{NameSpace, NAMESPACE};

use std::fmt;

use crate::error::FacadeError;
use crate::facade::{Facade, FacadeDescriptor, MemberSpec, Value};

/// Generates the shared plumbing of a typed facade wrapper.
macro_rules! facade_wrapper {
    ($(#[$meta:meta])* $name:ident => $descriptor:path) => {
        $(#[$meta])*
        pub struct $name {
            facade: $crate::facade::Facade,
        }

        impl $name {
            /// Wraps a raw dispatch object as this facade type.
            pub fn from_dispatch(raw: std::rc::Rc<dyn $crate::com::Dispatch>) -> Self {
                Self {
                    facade: $crate::facade::Facade::new(&$descriptor, raw),
                }
            }

            /// Adopts a facade already carrying this type's attribute map.
            pub(crate) fn wrap(facade: $crate::facade::Facade) -> Self {
                Self { facade }
            }

            /// Returns the generic `get`/`set`/`call` surface.
            pub fn facade(&self) -> &$crate::facade::Facade {
                &self.facade
            }

            /// Releases the underlying handle. Idempotent; later operations
            /// fail with [`FacadeError::HandleReleased`](crate::FacadeError::HandleReleased).
            pub fn release(&self) {
                self.facade.release()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("released", &self.facade.is_released())
                    .finish()
            }
        }
    };
}
pub(crate) use facade_wrapper;

/// Reads an integer member and translates it into an enumeration constant.
pub(crate) fn enum_member<T>(facade: &Facade, member: &str) -> Result<T, FacadeError>
where
    T: TryFrom<i32, Error = i32>,
{
    let raw = facade.get_i32(member)?;
    T::try_from(raw).map_err(|code| FacadeError::UnexpectedType {
        facade: facade.type_name(),
        member: member.to_string(),
        expected: "a known enumeration constant",
        actual: format!("code {code}"),
    })
}

/// The attribute map shared by the model's `Count`/`Item` collections
/// (`Folders`, `Items`, `Accounts`, `Explorers`, ...).
pub static COLLECTION: FacadeDescriptor = FacadeDescriptor {
    name: "Collection",
    members: &[
        MemberSpec::property("count", "Count"),
        MemberSpec::method("item", "Item"),
    ],
};

facade_wrapper! {
    /// A COM `Count`/`Item` collection.
    ///
    /// Indexing is 1-based, as in the native object model. Items come back
    /// as generic facades; the typed wrappers re-wrap them where the element
    /// type is known (`NameSpace::accounts`, `Folder::subfolders`).
    ///
    /// # Examples
    /// ```
    /// use std::rc::Rc;
    /// use outlook_dispatch::com::MockDispatch;
    /// use outlook_dispatch::objects::Collection;
    ///
    /// let mock = Rc::new(MockDispatch::new("Folders").with_property("Count", 0));
    /// let collection = Collection::from_dispatch(mock);
    /// assert_eq!(collection.len().unwrap(), 0);
    /// ```
    Collection => COLLECTION
}

impl Collection {
    /// Returns the number of items in the collection.
    pub fn len(&self) -> Result<i32, FacadeError> {
        self.facade.get_i32("count")
    }

    /// Reports whether the collection has no items.
    pub fn is_empty(&self) -> Result<bool, FacadeError> {
        Ok(self.len()? == 0)
    }

    /// Fetches the item at the given 1-based index as a generic facade.
    pub fn get(&self, index: i32) -> Result<Facade, FacadeError> {
        let value = self.facade.call("item", vec![Value::Int(index)])?;
        self.facade.expect_object("item", value)
    }

    /// Materializes every item, in collection order.
    pub fn facades(&self) -> Result<Vec<Facade>, FacadeError> {
        let count = self.len()?;
        (1..=count).map(|index| self.get(index)).collect()
    }
}

/// A best-effort bulk read of an object's mapped properties.
///
/// Members whose read faulted natively are recorded as `None` instead of
/// aborting the whole capture; a released handle still aborts.
pub struct Snapshot {
    entries: Vec<(&'static str, Option<Value>)>,
}

impl Snapshot {
    /// Reads every property member of the facade's attribute map.
    pub fn capture(facade: &Facade) -> Result<Self, FacadeError> {
        let mut entries = Vec::new();
        for spec in facade.descriptor().members {
            if !matches!(spec.kind, crate::facade::MemberKind::Property { .. }) {
                continue;
            }
            let value = match facade.get(spec.friendly) {
                Ok(value) => Some(value),
                Err(FacadeError::NativeInvocation { .. }) => None,
                Err(err) => return Err(err),
            };
            entries.push((spec.friendly, value));
        }
        Ok(Self { entries })
    }

    /// Returns the captured value for a friendly name, if the member exists
    /// and its read did not fault.
    pub fn value(&self, friendly: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| *name == friendly)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Reports whether the named member was captured but faulted.
    pub fn faulted(&self, friendly: &str) -> bool {
        self.entries
            .iter()
            .any(|(name, value)| *name == friendly && value.is_none())
    }

    /// Returns the entries in attribute-map order.
    pub fn entries(&self) -> &[(&'static str, Option<Value>)] {
        &self.entries
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            match value {
                Some(value) => writeln!(f, "{name:<40}{value:?}")?,
                None => writeln!(f, "{name:<40}<unavailable>")?,
            }
        }
        Ok(())
    }
}
