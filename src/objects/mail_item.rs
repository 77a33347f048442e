//! Provides the `MailItem` facade — one mail message.
//!
//! # Examples
//! ```
//! use std::rc::Rc;
//! use outlook_dispatch::com::MockDispatch;
//! use outlook_dispatch::objects::MailItem;
//!
//! let mock = Rc::new(MockDispatch::new("MailItem"));
//! let mail = MailItem::from_dispatch(mock.clone());
//! mail.set_subject("hello").unwrap();
//! assert_eq!(mail.subject().unwrap(), "hello");
//! mail.send().unwrap();
//! assert_eq!(mock.invocations_of("Send"), 1);
//! ```

use crate::enums::OlBodyFormat;
use crate::error::FacadeError;
use crate::facade::{FacadeDescriptor, MemberSpec};

use super::{enum_member, facade_wrapper, Collection, COLLECTION};

/// The attribute map of the `MailItem` facade.
pub static MAIL_ITEM: FacadeDescriptor = FacadeDescriptor {
    name: "MailItem",
    members: &[
        MemberSpec::property_rw("subject", "Subject"),
        MemberSpec::property_rw("body", "Body"),
        MemberSpec::property_rw("html_body", "HTMLBody"),
        MemberSpec::property_rw("to", "To"),
        MemberSpec::property_rw("cc", "CC"),
        MemberSpec::property_rw("bcc", "BCC"),
        MemberSpec::property("sender_name", "SenderName"),
        MemberSpec::property("sender_email_address", "SenderEmailAddress"),
        MemberSpec::property("entry_id", "EntryID"),
        MemberSpec::property("received_time", "ReceivedTime"),
        MemberSpec::property_rw("unread", "UnRead"),
        MemberSpec::property_rw("categories", "Categories"),
        MemberSpec::property_rw("body_format", "BodyFormat"),
        MemberSpec::property_rw("alternate_recipient_allowed", "AlternateRecipientAllowed"),
        MemberSpec::property_rw("auto_forwarded", "AutoForwarded"),
        MemberSpec::property_rw("billing_information", "BillingInformation"),
        MemberSpec::property_rw("companies", "Companies"),
        MemberSpec::property("attachments", "Attachments").wrapping(&COLLECTION),
        MemberSpec::property("actions", "Actions").wrapping(&COLLECTION),
        MemberSpec::method("send", "Send"),
        MemberSpec::method("reply", "Reply").wrapping(&MAIL_ITEM),
        MemberSpec::method("reply_all", "ReplyAll").wrapping(&MAIL_ITEM),
        MemberSpec::method("forward", "Forward").wrapping(&MAIL_ITEM),
        MemberSpec::method("save", "Save"),
        MemberSpec::method("delete", "Delete"),
        MemberSpec::method("display", "Display"),
    ],
};

facade_wrapper! {
    /// A mail message.
    MailItem => MAIL_ITEM
}

impl MailItem {
    /// Returns the subject line. Read/write.
    pub fn subject(&self) -> Result<String, FacadeError> {
        self.facade.get_string("subject")
    }

    /// Sets the subject line.
    pub fn set_subject(&self, subject: &str) -> Result<(), FacadeError> {
        self.facade.set("subject", subject)
    }

    /// Returns the plain-text body. Read/write.
    pub fn body(&self) -> Result<String, FacadeError> {
        self.facade.get_string("body")
    }

    /// Sets the plain-text body.
    pub fn set_body(&self, body: &str) -> Result<(), FacadeError> {
        self.facade.set("body", body)
    }

    /// Returns the HTML body. Read/write.
    pub fn html_body(&self) -> Result<String, FacadeError> {
        self.facade.get_string("html_body")
    }

    /// Sets the HTML body.
    pub fn set_html_body(&self, body: &str) -> Result<(), FacadeError> {
        self.facade.set("html_body", body)
    }

    /// Returns the semicolon-delimited To recipients. Read/write.
    pub fn to(&self) -> Result<String, FacadeError> {
        self.facade.get_string("to")
    }

    /// Sets the To recipients.
    pub fn set_to(&self, to: &str) -> Result<(), FacadeError> {
        self.facade.set("to", to)
    }

    /// Returns the CC recipients. Read/write.
    pub fn cc(&self) -> Result<String, FacadeError> {
        self.facade.get_string("cc")
    }

    /// Sets the CC recipients.
    pub fn set_cc(&self, cc: &str) -> Result<(), FacadeError> {
        self.facade.set("cc", cc)
    }

    /// Returns the BCC recipients. Read/write.
    pub fn bcc(&self) -> Result<String, FacadeError> {
        self.facade.get_string("bcc")
    }

    /// Sets the BCC recipients.
    pub fn set_bcc(&self, bcc: &str) -> Result<(), FacadeError> {
        self.facade.set("bcc", bcc)
    }

    /// Returns the display name of the sender. Read-only.
    pub fn sender_name(&self) -> Result<String, FacadeError> {
        self.facade.get_string("sender_name")
    }

    /// Returns the e-mail address of the sender. Read-only.
    pub fn sender_email_address(&self) -> Result<String, FacadeError> {
        self.facade.get_string("sender_email_address")
    }

    /// Returns the unique entry ID of the item. Read-only.
    pub fn entry_id(&self) -> Result<String, FacadeError> {
        self.facade.get_string("entry_id")
    }

    /// Returns the time the item was received, as an automation date
    /// (days since the epoch of December 30, 1899). Read-only.
    pub fn received_time(&self) -> Result<f64, FacadeError> {
        self.facade.get_f64("received_time")
    }

    /// Reports whether the item is unread. Read/write.
    pub fn unread(&self) -> Result<bool, FacadeError> {
        self.facade.get_bool("unread")
    }

    /// Marks the item read or unread.
    pub fn set_unread(&self, unread: bool) -> Result<(), FacadeError> {
        self.facade.set("unread", unread)
    }

    /// Returns the comma-delimited categories. Read/write.
    pub fn categories(&self) -> Result<String, FacadeError> {
        self.facade.get_string("categories")
    }

    /// Sets the categories.
    pub fn set_categories(&self, categories: &str) -> Result<(), FacadeError> {
        self.facade.set("categories", categories)
    }

    /// Returns the body format. Read/write.
    pub fn body_format(&self) -> Result<OlBodyFormat, FacadeError> {
        enum_member(&self.facade, "body_format")
    }

    /// Sets the body format.
    pub fn set_body_format(&self, format: OlBodyFormat) -> Result<(), FacadeError> {
        self.facade.set("body_format", format)
    }

    /// Returns the attachments of the item.
    pub fn attachments(&self) -> Result<Collection, FacadeError> {
        Ok(Collection::wrap(self.facade.get_object("attachments")?))
    }

    /// Sends the item.
    pub fn send(&self) -> Result<(), FacadeError> {
        self.facade.call("send", Vec::new())?;
        Ok(())
    }

    /// Creates a reply to the sender, pre-addressed.
    pub fn reply(&self) -> Result<MailItem, FacadeError> {
        let value = self.facade.call("reply", Vec::new())?;
        Ok(MailItem::wrap(self.facade.expect_object("reply", value)?))
    }

    /// Creates a reply to all original recipients, pre-addressed.
    pub fn reply_all(&self) -> Result<MailItem, FacadeError> {
        let value = self.facade.call("reply_all", Vec::new())?;
        Ok(MailItem::wrap(self.facade.expect_object("reply_all", value)?))
    }

    /// Creates a forward of the item.
    pub fn forward(&self) -> Result<MailItem, FacadeError> {
        let value = self.facade.call("forward", Vec::new())?;
        Ok(MailItem::wrap(self.facade.expect_object("forward", value)?))
    }

    /// Saves the item to its current folder.
    pub fn save(&self) -> Result<(), FacadeError> {
        self.facade.call("save", Vec::new())?;
        Ok(())
    }

    /// Moves the item to the Deleted Items folder.
    pub fn delete(&self) -> Result<(), FacadeError> {
        self.facade.call("delete", Vec::new())?;
        Ok(())
    }

    /// Displays the item in a new inspector window.
    pub fn display(&self) -> Result<(), FacadeError> {
        self.facade.call("display", Vec::new())?;
        Ok(())
    }
}
