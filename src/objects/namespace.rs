//! Provides the `NameSpace` facade — the MAPI session root.

use crate::enums::{OlDefaultFolders, OlExchangeConnectionMode};
use crate::error::FacadeError;
use crate::facade::{Facade, FacadeDescriptor, MemberSpec, Value};

use super::folder::{Folder, FOLDER};
use super::{enum_member, facade_wrapper, Account, Collection, COLLECTION};

/// The attribute map of the `NameSpace` facade.
pub static NAMESPACE: FacadeDescriptor = FacadeDescriptor {
    name: "NameSpace",
    members: &[
        MemberSpec::property("accounts", "Accounts").wrapping(&COLLECTION),
        MemberSpec::property("address_lists", "AddressLists").wrapping(&COLLECTION),
        MemberSpec::property("categories", "Categories").wrapping(&COLLECTION),
        MemberSpec::property("current_profile_name", "CurrentProfileName"),
        MemberSpec::property("current_user", "CurrentUser"),
        MemberSpec::property("default_store", "DefaultStore"),
        MemberSpec::property("folders", "Folders").wrapping(&COLLECTION),
        MemberSpec::property("offline", "Offline"),
        MemberSpec::property("stores", "Stores").wrapping(&COLLECTION),
        MemberSpec::property("sync_objects", "SyncObjects").wrapping(&COLLECTION),
        MemberSpec::property("exchange_connection_mode", "ExchangeConnectionMode"),
        MemberSpec::property("exchange_mailbox_server_name", "ExchangeMailboxServerName"),
        MemberSpec::property(
            "exchange_mailbox_server_version",
            "ExchangeMailboxServerVersion",
        ),
        MemberSpec::property(
            "auto_discover_connection_mode",
            "AutoDiscoverConnectionMode",
        ),
        MemberSpec::property("auto_discover_xml", "AutoDiscoverXml"),
        MemberSpec::method("get_default_folder", "GetDefaultFolder").wrapping(&FOLDER),
        MemberSpec::method("get_folder_from_id", "GetFolderFromID").wrapping(&FOLDER),
        MemberSpec::method("get_item_from_id", "GetItemFromID"),
        MemberSpec::method("create_recipient", "CreateRecipient"),
        MemberSpec::method("get_address_entry_from_id", "GetAddressEntryFromID"),
        MemberSpec::method("get_recipient_from_id", "GetRecipientFromID"),
        MemberSpec::method("compare_entry_ids", "CompareEntryIDs"),
        MemberSpec::method("add_store", "AddStore"),
        MemberSpec::method("dial", "Dial"),
        MemberSpec::method("logon", "Logon"),
        MemberSpec::method("logoff", "Logoff"),
    ],
};

facade_wrapper! {
    /// An abstract root for a session's data sources.
    ///
    /// Obtained from [`Application::session`](super::Application::session) or
    /// [`Application::get_namespace`](super::Application::get_namespace).
    NameSpace => NAMESPACE
}

impl NameSpace {
    /// Returns the name of the current profile. Read-only.
    pub fn current_profile_name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("current_profile_name")
    }

    /// Reports whether Outlook is offline. Read-only.
    pub fn offline(&self) -> Result<bool, FacadeError> {
        self.facade.get_bool("offline")
    }

    /// Returns the Exchange connection mode of the primary account.
    /// Read-only.
    pub fn exchange_connection_mode(
        &self,
    ) -> Result<OlExchangeConnectionMode, FacadeError> {
        enum_member(&self.facade, "exchange_connection_mode")
    }

    /// Returns the Exchange server name of the primary account. Read-only.
    pub fn exchange_mailbox_server_name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("exchange_mailbox_server_name")
    }

    /// Returns the Exchange server version of the primary account.
    /// Read-only.
    pub fn exchange_mailbox_server_version(&self) -> Result<String, FacadeError> {
        self.facade.get_string("exchange_mailbox_server_version")
    }

    /// Returns the accounts defined for the current profile.
    pub fn accounts(&self) -> Result<Vec<Account>, FacadeError> {
        let collection = Collection::wrap(self.facade.get_object("accounts")?);
        let mut accounts = Vec::new();
        for facade in collection.facades()? {
            accounts.push(Account::from_dispatch(facade.into_raw()?));
        }
        Ok(accounts)
    }

    /// Returns the top-level folders of the session.
    pub fn folders(&self) -> Result<Collection, FacadeError> {
        Ok(Collection::wrap(self.facade.get_object("folders")?))
    }

    /// Returns the stores attached to the session.
    pub fn stores(&self) -> Result<Collection, FacadeError> {
        Ok(Collection::wrap(self.facade.get_object("stores")?))
    }

    /// Returns a default folder of the current profile.
    ///
    /// # Examples
    /// ```no_run
    /// use outlook_dispatch::enums::OlDefaultFolders;
    /// use outlook_dispatch::objects::Application;
    ///
    /// # fn run() -> Result<(), outlook_dispatch::FacadeError> {
    /// # #[cfg(windows)] {
    /// let app = Application::connect()?;
    /// let inbox = app.get_namespace("MAPI")?.get_default_folder(OlDefaultFolders::Inbox)?;
    /// println!("{}", inbox.name()?);
    /// # }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_default_folder(
        &self,
        folder_type: OlDefaultFolders,
    ) -> Result<Folder, FacadeError> {
        let value = self
            .facade
            .call("get_default_folder", vec![folder_type.into()])?;
        Ok(Folder::wrap(
            self.facade.expect_object("get_default_folder", value)?,
        ))
    }

    /// Returns the default Inbox folder.
    pub fn inbox(&self) -> Result<Folder, FacadeError> {
        self.get_default_folder(OlDefaultFolders::Inbox)
    }

    /// Returns the folder identified by an entry ID, optionally scoped to a
    /// store.
    pub fn get_folder_from_id(
        &self,
        entry_id: &str,
        store_id: Option<&str>,
    ) -> Result<Folder, FacadeError> {
        let mut args: Vec<Value> = vec![entry_id.into()];
        if let Some(store_id) = store_id {
            args.push(store_id.into());
        }
        let value = self.facade.call("get_folder_from_id", args)?;
        Ok(Folder::wrap(
            self.facade.expect_object("get_folder_from_id", value)?,
        ))
    }

    /// Creates a recipient for the given name or address, as a generic
    /// facade (resolution happens on the recipient itself).
    pub fn create_recipient(&self, recipient_name: &str) -> Result<Facade, FacadeError> {
        let value = self
            .facade
            .call("create_recipient", vec![recipient_name.into()])?;
        self.facade.expect_object("create_recipient", value)
    }

    /// Returns the address entry identified by the given ID, as a generic
    /// facade.
    pub fn get_address_entry_from_id(&self, id: &str) -> Result<Facade, FacadeError> {
        let value = self
            .facade
            .call("get_address_entry_from_id", vec![id.into()])?;
        self.facade.expect_object("get_address_entry_from_id", value)
    }

    /// Returns the recipient identified by the given entry ID, as a generic
    /// facade.
    pub fn get_recipient_from_id(&self, entry_id: &str) -> Result<Facade, FacadeError> {
        let value = self
            .facade
            .call("get_recipient_from_id", vec![entry_id.into()])?;
        self.facade.expect_object("get_recipient_from_id", value)
    }

    /// Logs on to the session, optionally selecting a profile.
    pub fn logon(&self, profile: Option<&str>) -> Result<(), FacadeError> {
        let args: Vec<Value> = profile.map(|p| vec![p.into()]).unwrap_or_default();
        self.facade.call("logon", args)?;
        Ok(())
    }

    /// Logs off the session.
    pub fn logoff(&self) -> Result<(), FacadeError> {
        self.facade.call("logoff", Vec::new())?;
        Ok(())
    }
}
