//! Provides the `Application` facade — the root of the Outlook object model.
//!
//! # Examples
//! ```
//! use std::rc::Rc;
//! use outlook_dispatch::com::MockDispatch;
//! use outlook_dispatch::objects::Application;
//!
//! let mock = Rc::new(MockDispatch::new("Application").with_property("Name", "Outlook"));
//! let app = Application::from_dispatch(mock);
//! assert_eq!(app.name().unwrap(), "Outlook");
//! ```

use crate::error::FacadeError;
use crate::facade::{Facade, FacadeDescriptor, MemberSpec, Value};

use super::namespace::{NameSpace, NAMESPACE};
use super::{facade_wrapper, Collection};

/// The attribute map of the `Application` facade.
pub static APPLICATION: FacadeDescriptor = FacadeDescriptor {
    name: "Application",
    members: &[
        MemberSpec::property("name", "Name"),
        MemberSpec::property("version", "Version"),
        MemberSpec::property("default_profile_name", "DefaultProfileName"),
        MemberSpec::property("product_code", "ProductCode"),
        MemberSpec::property("is_trusted", "IsTrusted"),
        MemberSpec::property("session", "Session").wrapping(&NAMESPACE),
        MemberSpec::property("reminders", "Reminders").wrapping(&super::COLLECTION),
        MemberSpec::property("explorers", "Explorers").wrapping(&super::COLLECTION),
        MemberSpec::property("inspectors", "Inspectors").wrapping(&super::COLLECTION),
        // Parameterless getters the model exposes as methods.
        MemberSpec::method("active_explorer", "ActiveExplorer"),
        MemberSpec::method("active_window", "ActiveWindow"),
        MemberSpec::method("get_namespace", "GetNamespace").wrapping(&NAMESPACE),
        MemberSpec::method("create_item", "CreateItem"),
        MemberSpec::method("create_item_from_template", "CreateItemFromTemplate"),
        MemberSpec::method("create_object", "CreateObject"),
        MemberSpec::method("advanced_search", "AdvancedSearch"),
        MemberSpec::method("copy_file", "CopyFile"),
        MemberSpec::method("is_search_synchronous", "IsSearchSynchronous"),
        MemberSpec::method(
            "refresh_form_region_definition",
            "RefreshFormRegionDefinition",
        ),
        MemberSpec::method("quit", "Quit"),
    ],
};

facade_wrapper! {
    /// The entire Outlook application.
    ///
    /// Obtained from a running (or freshly launched) host via
    /// [`Application::connect`] on Windows, or wrapped over any dispatch
    /// object — including a mock — via `from_dispatch`.
    Application => APPLICATION
}

impl Application {
    /// Attaches to a running Outlook instance, launching one if necessary.
    #[cfg(windows)]
    pub fn connect() -> Result<Self, FacadeError> {
        let raw = crate::com::ComDispatch::attach_or_launch("Outlook.Application").map_err(
            |fault| FacadeError::NativeInvocation {
                facade: APPLICATION.name,
                member: "connect".to_string(),
                code: fault.code,
                message: fault.message,
            },
        )?;
        Ok(Self::from_dispatch(raw))
    }

    /// Returns the display name of the application. Read-only.
    pub fn name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("name")
    }

    /// Returns the version string of the application. Read-only.
    pub fn version(&self) -> Result<String, FacadeError> {
        self.facade.get_string("version")
    }

    /// Returns the name of the default profile. Read-only.
    pub fn default_profile_name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("default_profile_name")
    }

    /// Returns the product GUID of the installation. Read-only.
    pub fn product_code(&self) -> Result<String, FacadeError> {
        self.facade.get_string("product_code")
    }

    /// Reports whether the external caller is considered trusted. Read-only.
    pub fn is_trusted(&self) -> Result<bool, FacadeError> {
        self.facade.get_bool("is_trusted")
    }

    /// Returns the `NameSpace` of the current session. Read-only.
    pub fn session(&self) -> Result<NameSpace, FacadeError> {
        Ok(NameSpace::wrap(self.facade.get_object("session")?))
    }

    /// Returns a `NameSpace` of the given type (`"MAPI"` is the only type
    /// the model supports).
    pub fn get_namespace(&self, kind: &str) -> Result<NameSpace, FacadeError> {
        let value = self.facade.call("get_namespace", vec![kind.into()])?;
        Ok(NameSpace::wrap(
            self.facade.expect_object("get_namespace", value)?,
        ))
    }

    /// Returns the open explorer windows.
    pub fn explorers(&self) -> Result<Collection, FacadeError> {
        Ok(Collection::wrap(self.facade.get_object("explorers")?))
    }

    /// Returns the open inspector windows.
    pub fn inspectors(&self) -> Result<Collection, FacadeError> {
        Ok(Collection::wrap(self.facade.get_object("inspectors")?))
    }

    /// Returns the topmost explorer window, as a generic facade.
    pub fn active_explorer(&self) -> Result<Facade, FacadeError> {
        let value = self.facade.call("active_explorer", Vec::new())?;
        self.facade.expect_object("active_explorer", value)
    }

    /// Returns the topmost Outlook window, as a generic facade.
    pub fn active_window(&self) -> Result<Facade, FacadeError> {
        let value = self.facade.call("active_window", Vec::new())?;
        self.facade.expect_object("active_window", value)
    }

    /// Creates a new item of the given type, as a generic facade.
    pub fn create_item(
        &self,
        item_type: crate::enums::OlItemType,
    ) -> Result<Facade, FacadeError> {
        let value = self.facade.call("create_item", vec![item_type.into()])?;
        self.facade.expect_object("create_item", value)
    }

    /// Creates a new mail item.
    pub fn create_mail(&self) -> Result<super::MailItem, FacadeError> {
        let facade = self.create_item(crate::enums::OlItemType::MailItem)?;
        Ok(super::MailItem::from_dispatch(facade.into_raw()?))
    }

    /// Creates an automation object of the named class, as a generic facade.
    pub fn create_object(&self, object_name: &str) -> Result<Facade, FacadeError> {
        let value = self.facade.call("create_object", vec![object_name.into()])?;
        self.facade.expect_object("create_object", value)
    }

    /// Reports whether a search over the given folders would run
    /// synchronously.
    pub fn is_search_synchronous(&self, look_in_folders: &str) -> Result<bool, FacadeError> {
        let value = self
            .facade
            .call("is_search_synchronous", vec![look_in_folders.into()])?;
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(self.facade.type_error("is_search_synchronous", "bool", &other)),
        }
    }

    /// Closes all windows and exits the application.
    pub fn quit(&self) -> Result<(), FacadeError> {
        self.facade.call("quit", Vec::new())?;
        Ok(())
    }
}
