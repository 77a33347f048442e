//! Typed-surface tests over nested mock broker objects.
//!
//! These walk the object model the way a caller would — application to
//! namespace to folder to item — with every hop backed by a scripted
//! [`MockDispatch`], and check that the typed wrappers translate names,
//! enums, and object results correctly.

use std::rc::Rc;

use outlook_dispatch::com::{Dispatch, MockDispatch, NativeFault, Variant, DISP_E_MEMBERNOTFOUND};
use outlook_dispatch::enums::{
    OlAccountType, OlBodyFormat, OlDefaultFolders, OlExchangeConnectionMode, OlShowItemCount,
};
use outlook_dispatch::objects::{Account, Application, Collection, Folder, MailItem, NameSpace};
use outlook_dispatch::{FacadeError, Value};

fn as_dispatch(mock: &Rc<MockDispatch>) -> Rc<dyn Dispatch> {
    mock.clone()
}

#[test]
fn session_comes_back_as_a_namespace_facade() {
    let ns_mock = Rc::new(MockDispatch::new("NameSpace").with_property("CurrentProfileName", "Work"));
    let app_mock = Rc::new(
        MockDispatch::new("Application")
            .with_property("Session", Variant::Dispatch(as_dispatch(&ns_mock))),
    );

    let app = Application::from_dispatch(app_mock);
    let session = app.session().unwrap();

    assert_eq!(session.current_profile_name().unwrap(), "Work");
}

#[test]
fn get_namespace_invokes_with_the_namespace_kind() {
    let ns_mock = Rc::new(MockDispatch::new("NameSpace"));
    let app_mock = Rc::new(
        MockDispatch::new("Application")
            .with_method_result("GetNamespace", Variant::Dispatch(as_dispatch(&ns_mock))),
    );

    let app = Application::from_dispatch(app_mock.clone());
    app.get_namespace("MAPI").unwrap();

    assert_eq!(
        app_mock.invocation_args("GetNamespace"),
        vec![vec![Variant::from("MAPI")]]
    );
}

#[test]
fn default_folder_lookup_sends_the_folder_code() {
    let folder_mock = Rc::new(MockDispatch::new("Folder").with_property("Name", "Inbox"));
    let ns_mock = Rc::new(
        MockDispatch::new("NameSpace")
            .with_method_result("GetDefaultFolder", Variant::Dispatch(as_dispatch(&folder_mock))),
    );

    let namespace = NameSpace::from_dispatch(ns_mock.clone());
    let inbox = namespace.get_default_folder(OlDefaultFolders::Inbox).unwrap();

    assert_eq!(inbox.name().unwrap(), "Inbox");
    assert_eq!(
        ns_mock.invocation_args("GetDefaultFolder"),
        vec![vec![Variant::Int(6)]]
    );
}

#[test]
fn inbox_is_default_folder_six() {
    let folder_mock = Rc::new(MockDispatch::new("Folder"));
    let ns_mock = Rc::new(
        MockDispatch::new("NameSpace")
            .with_method_result("GetDefaultFolder", Variant::Dispatch(as_dispatch(&folder_mock))),
    );

    NameSpace::from_dispatch(ns_mock.clone()).inbox().unwrap();

    assert_eq!(
        ns_mock.invocation_args("GetDefaultFolder"),
        vec![vec![Variant::Int(6)]]
    );
}

#[test]
fn account_enums_translate_from_native_codes() {
    let account_mock = Rc::new(
        MockDispatch::new("Account")
            .with_property("AccountType", 1)
            .with_property("ExchangeConnectionMode", 800),
    );

    let account = Account::from_dispatch(account_mock);

    assert_eq!(account.account_type().unwrap(), OlAccountType::Imap);
    assert_eq!(
        account.exchange_connection_mode().unwrap(),
        OlExchangeConnectionMode::Online
    );
}

#[test]
fn unknown_enum_codes_surface_as_unexpected_type() {
    let account_mock = Rc::new(MockDispatch::new("Account").with_property("AccountType", 42));

    let account = Account::from_dispatch(account_mock);

    match account.account_type() {
        Err(FacadeError::UnexpectedType { actual, .. }) => assert_eq!(actual, "code 42"),
        other => panic!("expected UnexpectedType, got {other:?}"),
    }
}

#[test]
fn delivery_store_is_optional() {
    let account = Account::from_dispatch(Rc::new(
        MockDispatch::new("Account").with_property("DeliveryStore", Variant::Empty),
    ));
    assert!(account.delivery_store().unwrap().is_none());

    let store = Rc::new(MockDispatch::new("Store"));
    let account = Account::from_dispatch(Rc::new(
        MockDispatch::new("Account")
            .with_property("DeliveryStore", Variant::Dispatch(as_dispatch(&store))),
    ));
    assert!(account.delivery_store().unwrap().is_some());
}

#[test]
fn folder_setters_write_through() {
    let folder_mock = Rc::new(MockDispatch::new("Folder"));
    let folder = Folder::from_dispatch(folder_mock);

    folder.set_name("Archive").unwrap();
    folder
        .set_show_item_count(OlShowItemCount::ShowTotalItemCount)
        .unwrap();

    assert_eq!(folder.name().unwrap(), "Archive");
    assert_eq!(
        folder.show_item_count().unwrap(),
        OlShowItemCount::ShowTotalItemCount
    );
}

#[test]
fn folder_snapshot_tolerates_faulting_members() {
    let folder_mock = Rc::new(
        MockDispatch::new("Folder")
            .with_property("Name", "Inbox")
            .with_property("UnReadItemCount", 3)
            .with_fault(
                "FolderPath",
                NativeFault::new(DISP_E_MEMBERNOTFOUND, "no folder path"),
            ),
    );

    let snapshot = Folder::from_dispatch(folder_mock).snapshot().unwrap();

    assert_eq!(snapshot.value("name"), Some(&Value::from("Inbox")));
    assert_eq!(snapshot.value("unread_item_count"), Some(&Value::Int(3)));
    assert!(snapshot.faulted("folder_path"));
    // Unseeded mock properties fault too; the capture still completes.
    assert!(snapshot.faulted("entry_id"));

    let rendered = snapshot.to_string();
    assert!(rendered.contains("name"));
    assert!(rendered.contains("<unavailable>"));
}

#[test]
fn folder_snapshot_fails_once_released() {
    let folder = Folder::from_dispatch(Rc::new(MockDispatch::new("Folder")));
    folder.release();
    assert!(matches!(
        folder.snapshot(),
        Err(FacadeError::HandleReleased { facade: "Folder" })
    ));
}

#[test]
fn collections_index_from_one() {
    let item = Rc::new(MockDispatch::new("Folder").with_property("Name", "Sub"));
    let folders_mock = Rc::new(
        MockDispatch::new("Folders")
            .with_property("Count", 1)
            .with_method_result("Item", Variant::Dispatch(as_dispatch(&item))),
    );

    let collection = Collection::from_dispatch(folders_mock.clone());

    assert_eq!(collection.len().unwrap(), 1);
    assert!(!collection.is_empty().unwrap());
    let all = collection.facades().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(folders_mock.invocation_args("Item"), vec![vec![Variant::Int(1)]]);
}

#[test]
fn subfolders_materialize_as_folder_facades() {
    let sub = Rc::new(MockDispatch::new("Folder").with_property("Name", "Sub"));
    let folders_mock = Rc::new(
        MockDispatch::new("Folders")
            .with_property("Count", 1)
            .with_method_result("Item", Variant::Dispatch(as_dispatch(&sub))),
    );
    let folder_mock = Rc::new(
        MockDispatch::new("Folder")
            .with_property("Folders", Variant::Dispatch(as_dispatch(&folders_mock))),
    );

    let subfolders = Folder::from_dispatch(folder_mock).subfolders().unwrap();

    assert_eq!(subfolders.len(), 1);
    assert_eq!(subfolders[0].name().unwrap(), "Sub");
}

#[test]
fn accounts_materialize_as_account_facades() {
    let account = Rc::new(MockDispatch::new("Account").with_property("DisplayName", "Work"));
    let accounts_mock = Rc::new(
        MockDispatch::new("Accounts")
            .with_property("Count", 1)
            .with_method_result("Item", Variant::Dispatch(as_dispatch(&account))),
    );
    let ns_mock = Rc::new(
        MockDispatch::new("NameSpace")
            .with_property("Accounts", Variant::Dispatch(as_dispatch(&accounts_mock))),
    );

    let accounts = NameSpace::from_dispatch(ns_mock).accounts().unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].display_name().unwrap(), "Work");
}

#[test]
fn create_mail_requests_a_mail_item() {
    let mail_mock = Rc::new(MockDispatch::new("MailItem"));
    let app_mock = Rc::new(
        MockDispatch::new("Application")
            .with_method_result("CreateItem", Variant::Dispatch(as_dispatch(&mail_mock))),
    );

    let app = Application::from_dispatch(app_mock.clone());
    let mail = app.create_mail().unwrap();

    assert_eq!(app_mock.invocation_args("CreateItem"), vec![vec![Variant::Int(0)]]);
    mail.set_subject("hi").unwrap();
    assert_eq!(mail.subject().unwrap(), "hi");
}

#[test]
fn mail_item_round_trips_fields_and_sends_once() {
    let mail_mock = Rc::new(MockDispatch::new("MailItem"));
    let mail = MailItem::from_dispatch(mail_mock.clone());

    mail.set_to("a@example.com; b@example.com").unwrap();
    mail.set_body_format(OlBodyFormat::Plain).unwrap();
    mail.set_unread(false).unwrap();
    mail.send().unwrap();

    assert_eq!(mail.to().unwrap(), "a@example.com; b@example.com");
    assert_eq!(mail.body_format().unwrap(), OlBodyFormat::Plain);
    assert!(!mail.unread().unwrap());
    assert_eq!(mail_mock.invocations_of("Send"), 1);
}

#[test]
fn reply_wraps_the_new_item_as_mail() {
    let reply_mock = Rc::new(MockDispatch::new("MailItem"));
    let mail_mock = Rc::new(
        MockDispatch::new("MailItem")
            .with_method_result("Reply", Variant::Dispatch(as_dispatch(&reply_mock))),
    );

    let reply = MailItem::from_dispatch(mail_mock).reply().unwrap();

    reply.set_body("thanks").unwrap();
    assert_eq!(reply.body().unwrap(), "thanks");
}

#[test]
fn copy_to_passes_the_destination_handle() {
    let copy_mock = Rc::new(MockDispatch::new("Folder"));
    let source_mock = Rc::new(
        MockDispatch::new("Folder")
            .with_method_result("CopyTo", Variant::Dispatch(as_dispatch(&copy_mock))),
    );
    let dest_mock = Rc::new(MockDispatch::new("Folder"));

    let source = Folder::from_dispatch(source_mock.clone());
    let dest = Folder::from_dispatch(dest_mock.clone());
    source.copy_to(&dest).unwrap();

    let expected: Rc<dyn Dispatch> = dest_mock;
    assert_eq!(
        source_mock.invocation_args("CopyTo"),
        vec![vec![Variant::Dispatch(expected)]]
    );
    // Passing the destination as an argument must not release it; the
    // unseeded read faults natively rather than as a released handle.
    assert!(matches!(
        dest.name(),
        Err(FacadeError::NativeInvocation { .. })
    ));
}

#[test]
fn released_wrappers_report_handle_released() {
    let account = Account::from_dispatch(Rc::new(MockDispatch::new("Account")));
    account.release();
    account.release();
    assert!(matches!(
        account.display_name(),
        Err(FacadeError::HandleReleased { facade: "Account" })
    ));
}
