//! Provides the `Account` facade — one account of the current profile.
//!
//! # Examples
//! ```
//! use std::rc::Rc;
//! use outlook_dispatch::com::MockDispatch;
//! use outlook_dispatch::objects::Account;
//!
//! let mock = Rc::new(
//!     MockDispatch::new("Account")
//!         .with_property("SmtpAddress", "someone@example.com")
//!         .with_property("AccountType", 2),
//! );
//! let account = Account::from_dispatch(mock);
//! assert_eq!(account.smtp_address().unwrap(), "someone@example.com");
//! ```

use crate::enums::{OlAccountType, OlAutoDiscoverConnectionMode, OlExchangeConnectionMode};
use crate::error::FacadeError;
use crate::facade::{Facade, FacadeDescriptor, MemberSpec};

use super::{enum_member, facade_wrapper};

/// The attribute map of the `Account` facade.
pub static ACCOUNT: FacadeDescriptor = FacadeDescriptor {
    name: "Account",
    members: &[
        MemberSpec::property("account_type", "AccountType"),
        MemberSpec::property("display_name", "DisplayName"),
        MemberSpec::property("smtp_address", "SmtpAddress"),
        MemberSpec::property("user_name", "UserName"),
        MemberSpec::property(
            "auto_discover_connection_mode",
            "AutoDiscoverConnectionMode",
        ),
        MemberSpec::property("auto_discover_xml", "AutoDiscoverXml"),
        MemberSpec::property("exchange_connection_mode", "ExchangeConnectionMode"),
        MemberSpec::property("exchange_mailbox_server_name", "ExchangeMailboxServerName"),
        MemberSpec::property(
            "exchange_mailbox_server_version",
            "ExchangeMailboxServerVersion",
        ),
        MemberSpec::property("delivery_store", "DeliveryStore"),
        // The model exposes this one as a parameterless method.
        MemberSpec::method("current_user", "CurrentUser"),
        MemberSpec::method("get_address_entry_from_id", "GetAddressEntryFromID"),
        MemberSpec::method("get_recipient_from_id", "GetRecipientFromID"),
    ],
};

facade_wrapper! {
    /// An account defined for the current profile.
    Account => ACCOUNT
}

impl Account {
    /// Returns the account type. Read-only.
    pub fn account_type(&self) -> Result<OlAccountType, FacadeError> {
        enum_member(&self.facade, "account_type")
    }

    /// Returns the display name of the account. Read-only.
    pub fn display_name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("display_name")
    }

    /// Returns the SMTP address of the account, or an empty string if it has
    /// none. Read-only.
    pub fn smtp_address(&self) -> Result<String, FacadeError> {
        self.facade.get_string("smtp_address")
    }

    /// Returns the user name of the account, or an empty string if none is
    /// defined. Read-only.
    pub fn user_name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("user_name")
    }

    /// Returns the current user identity of the account, as a generic
    /// facade over the recipient object. Read-only.
    pub fn current_user(&self) -> Result<Facade, FacadeError> {
        let value = self.facade.call("current_user", Vec::new())?;
        self.facade.expect_object("current_user", value)
    }

    /// Returns the auto-discovery connection mode. Read-only.
    pub fn auto_discover_connection_mode(
        &self,
    ) -> Result<OlAutoDiscoverConnectionMode, FacadeError> {
        enum_member(&self.facade, "auto_discover_connection_mode")
    }

    /// Returns the auto-discovery service XML. Faults natively for accounts
    /// without a suitable Exchange server. Read-only.
    pub fn auto_discover_xml(&self) -> Result<String, FacadeError> {
        self.facade.get_string("auto_discover_xml")
    }

    /// Returns the connection mode of the hosting Exchange server.
    /// Read-only.
    pub fn exchange_connection_mode(
        &self,
    ) -> Result<OlExchangeConnectionMode, FacadeError> {
        enum_member(&self.facade, "exchange_connection_mode")
    }

    /// Returns the name of the Exchange server hosting the mailbox, or an
    /// empty string for non-Exchange accounts. Read-only.
    pub fn exchange_mailbox_server_name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("exchange_mailbox_server_name")
    }

    /// Returns the version of the Exchange server hosting the mailbox, or an
    /// empty string for non-Exchange accounts. Read-only.
    pub fn exchange_mailbox_server_version(&self) -> Result<String, FacadeError> {
        self.facade.get_string("exchange_mailbox_server_version")
    }

    /// Returns the default delivery store of the account, as a generic
    /// facade, or `None` if the account has no delivery store.
    pub fn delivery_store(&self) -> Result<Option<Facade>, FacadeError> {
        Ok(self.facade.get("delivery_store")?.into_object())
    }

    /// Returns the address entry identified by the given ID, looked up in
    /// this account's context, as a generic facade.
    pub fn get_address_entry_from_id(&self, id: &str) -> Result<Facade, FacadeError> {
        let value = self
            .facade
            .call("get_address_entry_from_id", vec![id.into()])?;
        self.facade.expect_object("get_address_entry_from_id", value)
    }

    /// Returns the recipient identified by the given entry ID, looked up in
    /// this account's context, as a generic facade.
    pub fn get_recipient_from_id(&self, entry_id: &str) -> Result<Facade, FacadeError> {
        let value = self
            .facade
            .call("get_recipient_from_id", vec![entry_id.into()])?;
        self.facade.expect_object("get_recipient_from_id", value)
    }
}
