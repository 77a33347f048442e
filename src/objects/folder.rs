//! Provides the `Folder` facade and its best-effort property snapshot.
//!
//! # Examples
//! ```
//! use std::rc::Rc;
//! use outlook_dispatch::com::MockDispatch;
//! use outlook_dispatch::objects::Folder;
//!
//! let mock = Rc::new(
//!     MockDispatch::new("Folder")
//!         .with_property("Name", "Inbox")
//!         .with_property("UnReadItemCount", 12),
//! );
//! let folder = Folder::from_dispatch(mock);
//! assert_eq!(folder.name().unwrap(), "Inbox");
//! assert_eq!(folder.unread_item_count().unwrap(), 12);
//! ```

use crate::enums::{OlItemType, OlShowItemCount};
use crate::error::FacadeError;
use crate::facade::{FacadeDescriptor, MemberSpec};

use super::{enum_member, facade_wrapper, Collection, Snapshot, COLLECTION};

/// The attribute map of the `Folder` facade.
pub static FOLDER: FacadeDescriptor = FacadeDescriptor {
    name: "Folder",
    members: &[
        MemberSpec::property_rw("name", "Name"),
        MemberSpec::property_rw("description", "Description"),
        MemberSpec::property_rw("address_book_name", "AddressBookName"),
        MemberSpec::property("entry_id", "EntryID"),
        MemberSpec::property("folder_path", "FolderPath"),
        MemberSpec::property("default_item_type", "DefaultItemType"),
        MemberSpec::property("default_message_class", "DefaultMessageClass"),
        MemberSpec::property("store_id", "StoreID"),
        MemberSpec::property("store", "Store"),
        MemberSpec::property("unread_item_count", "UnReadItemCount"),
        MemberSpec::property_rw("show_item_count", "ShowItemCount"),
        MemberSpec::property_rw("custom_views_only", "CustomViewsOnly"),
        MemberSpec::property_rw("web_view_on", "WebViewOn"),
        MemberSpec::property_rw("web_view_url", "WebViewURL"),
        MemberSpec::property("folders", "Folders").wrapping(&COLLECTION),
        MemberSpec::property("items", "Items").wrapping(&COLLECTION),
        MemberSpec::method("copy_to", "CopyTo").wrapping(&FOLDER),
        MemberSpec::method("move_to", "MoveTo"),
        MemberSpec::method("delete", "Delete"),
        MemberSpec::method("display", "Display"),
        MemberSpec::method("get_table", "GetTable"),
    ],
};

facade_wrapper! {
    /// A folder that contains Outlook items or other folders.
    Folder => FOLDER
}

impl Folder {
    /// Returns the display name of the folder. Read/write.
    pub fn name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("name")
    }

    /// Renames the folder.
    pub fn set_name(&self, name: &str) -> Result<(), FacadeError> {
        self.facade.set("name", name)
    }

    /// Returns the description of the folder. Read/write.
    pub fn description(&self) -> Result<String, FacadeError> {
        self.facade.get_string("description")
    }

    /// Sets the description of the folder.
    pub fn set_description(&self, description: &str) -> Result<(), FacadeError> {
        self.facade.set("description", description)
    }

    /// Returns the unique entry ID of the folder. Read-only.
    pub fn entry_id(&self) -> Result<String, FacadeError> {
        self.facade.get_string("entry_id")
    }

    /// Returns the full path of the folder. Read-only.
    pub fn folder_path(&self) -> Result<String, FacadeError> {
        self.facade.get_string("folder_path")
    }

    /// Returns the default item type contained in the folder. Read-only.
    pub fn default_item_type(&self) -> Result<OlItemType, FacadeError> {
        enum_member(&self.facade, "default_item_type")
    }

    /// Returns the default message class of the folder's items. Read-only.
    pub fn default_message_class(&self) -> Result<String, FacadeError> {
        self.facade.get_string("default_message_class")
    }

    /// Returns the store ID of the folder. Read-only.
    pub fn store_id(&self) -> Result<String, FacadeError> {
        self.facade.get_string("store_id")
    }

    /// Returns the number of unread items in the folder. Read-only.
    pub fn unread_item_count(&self) -> Result<i32, FacadeError> {
        self.facade.get_i32("unread_item_count")
    }

    /// Returns which item count the navigation pane shows. Read/write.
    pub fn show_item_count(&self) -> Result<OlShowItemCount, FacadeError> {
        enum_member(&self.facade, "show_item_count")
    }

    /// Selects which item count the navigation pane shows.
    pub fn set_show_item_count(&self, mode: OlShowItemCount) -> Result<(), FacadeError> {
        self.facade.set("show_item_count", mode)
    }

    /// Returns the Web view state of the folder. Read/write.
    pub fn web_view_on(&self) -> Result<bool, FacadeError> {
        self.facade.get_bool("web_view_on")
    }

    /// Sets the Web view state of the folder.
    pub fn set_web_view_on(&self, on: bool) -> Result<(), FacadeError> {
        self.facade.set("web_view_on", on)
    }

    /// Returns the URL of the Web page assigned to the folder. Read/write.
    pub fn web_view_url(&self) -> Result<String, FacadeError> {
        self.facade.get_string("web_view_url")
    }

    /// Assigns a Web page URL to the folder.
    pub fn set_web_view_url(&self, url: &str) -> Result<(), FacadeError> {
        self.facade.set("web_view_url", url)
    }

    /// Returns the subfolder collection.
    pub fn folders(&self) -> Result<Collection, FacadeError> {
        Ok(Collection::wrap(self.facade.get_object("folders")?))
    }

    /// Materializes the subfolders as `Folder` facades.
    pub fn subfolders(&self) -> Result<Vec<Folder>, FacadeError> {
        let mut folders = Vec::new();
        for facade in self.folders()?.facades()? {
            folders.push(Folder::from_dispatch(facade.into_raw()?));
        }
        Ok(folders)
    }

    /// Returns the items contained in the folder.
    pub fn items(&self) -> Result<Collection, FacadeError> {
        Ok(Collection::wrap(self.facade.get_object("items")?))
    }

    /// Copies the folder into a destination folder, returning the copy.
    pub fn copy_to(&self, destination: &Folder) -> Result<Folder, FacadeError> {
        let arg = destination.facade.share()?;
        let value = self.facade.call("copy_to", vec![arg.into()])?;
        Ok(Folder::wrap(self.facade.expect_object("copy_to", value)?))
    }

    /// Moves the folder into a destination folder.
    pub fn move_to(&self, destination: &Folder) -> Result<(), FacadeError> {
        let arg = destination.facade.share()?;
        self.facade.call("move_to", vec![arg.into()])?;
        Ok(())
    }

    /// Deletes the folder.
    pub fn delete(&self) -> Result<(), FacadeError> {
        self.facade.call("delete", Vec::new())?;
        Ok(())
    }

    /// Displays the folder in a new explorer window.
    pub fn display(&self) -> Result<(), FacadeError> {
        self.facade.call("display", Vec::new())?;
        Ok(())
    }

    /// Captures every mapped property in one best-effort pass.
    ///
    /// Properties whose native read faults come back as unavailable rather
    /// than failing the capture; a released handle still fails.
    ///
    /// # Examples
    /// ```
    /// use std::rc::Rc;
    /// use outlook_dispatch::com::MockDispatch;
    /// use outlook_dispatch::objects::Folder;
    /// use outlook_dispatch::Value;
    ///
    /// let mock = Rc::new(MockDispatch::new("Folder").with_property("Name", "Inbox"));
    /// let snapshot = Folder::from_dispatch(mock).snapshot().unwrap();
    /// assert_eq!(snapshot.value("name"), Some(&Value::from("Inbox")));
    /// assert!(snapshot.faulted("entry_id")); // never seeded on the mock
    /// ```
    pub fn snapshot(&self) -> Result<Snapshot, FacadeError> {
        Snapshot::capture(&self.facade)
    }
}
