//! Provides the `Ol*` enumeration constants used by the typed facades.
//!
//! These mirror the automation model's integer constants. Each enum converts
//! to [`Value`](crate::Value) for use as an argument and back from `i32` via
//! `TryFrom` (the raw code is returned as the error when it is not a known
//! constant, so the typed layer can report it).
//!
//! # Examples
//! ```
//! use outlook_dispatch::enums::OlDefaultFolders;
//!
//! assert_eq!(OlDefaultFolders::Inbox as i32, 6);
//! assert_eq!(OlDefaultFolders::try_from(6), Ok(OlDefaultFolders::Inbox));
//! assert_eq!(OlDefaultFolders::try_from(99), Err(99));
//! ```

use crate::facade::Value;

macro_rules! ol_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code,)+
        }

        impl TryFrom<i32> for $name {
            type Error = i32;

            fn try_from(code: i32) -> Result<Self, i32> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    other => Err(other),
                }
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Value {
                Value::Int(value as i32)
            }
        }
    };
}

ol_enum! {
    /// Specifies the type of an account.
    OlAccountType {
        /// An Exchange account.
        Exchange = 0,
        /// An IMAP account.
        Imap = 1,
        /// A POP3 account.
        Pop3 = 2,
        /// An HTTP account.
        Http = 3,
        /// An account using Exchange ActiveSync.
        Eas = 4,
        /// Other or unknown account.
        OtherAccount = 5,
    }
}

ol_enum! {
    /// Specifies a default folder of the current profile.
    OlDefaultFolders {
        /// The Deleted Items folder.
        DeletedItems = 3,
        /// The Outbox folder.
        Outbox = 4,
        /// The Sent Mail folder.
        SentMail = 5,
        /// The Inbox folder.
        Inbox = 6,
        /// The Calendar folder.
        Calendar = 9,
        /// The Contacts folder.
        Contacts = 10,
        /// The Journal folder.
        Journal = 11,
        /// The Notes folder.
        Notes = 12,
        /// The Tasks folder.
        Tasks = 13,
        /// The Drafts folder.
        Drafts = 16,
        /// The All Public Folders folder. Exchange accounts only.
        AllPublicFolders = 18,
        /// The Conflicts folder. Exchange accounts only.
        Conflicts = 19,
        /// The Sync Issues folder. Exchange accounts only.
        SyncIssues = 20,
        /// The Local Failures folder. Exchange accounts only.
        LocalFailures = 21,
        /// The Server Failures folder. Exchange accounts only.
        ServerFailures = 22,
        /// The Junk E-Mail folder.
        Junk = 23,
        /// The RSS Feeds folder.
        RssFeeds = 25,
        /// The To Do folder.
        ToDo = 28,
        /// The top-level Managed Folders group. Exchange accounts only.
        ManagedEmail = 29,
        /// The Suggested Contacts folder.
        SuggestedContacts = 30,
    }
}

ol_enum! {
    /// Indicates the connection mode to the Exchange server hosting a
    /// mailbox.
    OlExchangeConnectionMode {
        /// The account is not an Exchange account.
        NoExchange = 0,
        /// Not connected; offline mode.
        Offline = 100,
        /// Cached Exchange Mode, offline.
        CachedOffline = 200,
        /// Disconnected from the server.
        Disconnected = 300,
        /// Cached Exchange Mode, disconnected.
        CachedDisconnected = 400,
        /// Cached Exchange Mode, downloading headers.
        CachedConnectedHeaders = 500,
        /// Cached Exchange Mode, drizzle download.
        CachedConnectedDrizzle = 600,
        /// Cached Exchange Mode, fully connected.
        CachedConnectedFull = 700,
        /// Online mode.
        Online = 800,
    }
}

ol_enum! {
    /// Specifies the connection type to the Exchange auto-discovery service.
    OlAutoDiscoverConnectionMode {
        /// Other, unknown, or no connection.
        Unknown = 0,
        /// Connection over the Internet.
        External = 1,
        /// Connection over the Intranet.
        Internal = 2,
    }
}

ol_enum! {
    /// Indicates the Outlook item type.
    OlItemType {
        /// A MailItem.
        MailItem = 0,
        /// An AppointmentItem.
        AppointmentItem = 1,
        /// A ContactItem.
        ContactItem = 2,
        /// A TaskItem.
        TaskItem = 3,
        /// A JournalItem.
        JournalItem = 4,
        /// A NoteItem.
        NoteItem = 5,
        /// A PostItem.
        PostItem = 6,
        /// A DistListItem.
        DistributionListItem = 7,
        /// A MobileItem for SMS.
        MobileItemSms = 11,
        /// A MobileItem for MMS.
        MobileItemMms = 12,
    }
}

ol_enum! {
    /// Indicates what item count a folder shows in the navigation pane.
    OlShowItemCount {
        /// No item count.
        NoItemCount = 0,
        /// Show the unread item count.
        ShowUnreadItemCount = 1,
        /// Show the total item count.
        ShowTotalItemCount = 2,
    }
}

ol_enum! {
    /// Indicates the format of a mail item's body.
    OlBodyFormat {
        /// Unspecified format.
        Unspecified = 0,
        /// Plain text.
        Plain = 1,
        /// HTML.
        Html = 2,
        /// Rich text.
        RichText = 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_codes() {
        assert_eq!(OlAccountType::try_from(2), Ok(OlAccountType::Pop3));
        assert_eq!(
            OlExchangeConnectionMode::try_from(800),
            Ok(OlExchangeConnectionMode::Online)
        );
        assert_eq!(OlBodyFormat::try_from(2), Ok(OlBodyFormat::Html));
    }

    #[test]
    fn unknown_codes_come_back_as_errors() {
        assert_eq!(OlAccountType::try_from(42), Err(42));
        assert_eq!(OlDefaultFolders::try_from(-1), Err(-1));
    }

    #[test]
    fn enums_lower_to_int_values() {
        assert_eq!(Value::from(OlDefaultFolders::Inbox), Value::Int(6));
        assert_eq!(Value::from(OlShowItemCount::ShowTotalItemCount), Value::Int(2));
    }
}
