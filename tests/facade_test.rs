//! Facade-engine tests over the scriptable mock broker object.
//!
//! These exercise the translation layer's contract directly: exact-once
//! forwarding, translation misses that never reach the handle, round-trips
//! through a passively-storing object, release semantics, and fault
//! wrapping. No live Outlook is required.

use std::rc::Rc;

use outlook_dispatch::com::{Dispatch, MockCall, MockDispatch, NativeFault, Variant};
use outlook_dispatch::objects::{ACCOUNT, APPLICATION, COLLECTION, FOLDER, MAIL_ITEM, NAMESPACE};
use outlook_dispatch::{Facade, FacadeDescriptor, FacadeError, MemberSpec, Value, DISPATCH};

// A minimal standalone map, independent of the shipped descriptors.
static EMAIL_ONLY: FacadeDescriptor = FacadeDescriptor {
    name: "Account",
    members: &[
        MemberSpec::property_rw("email", "SmtpAddress"),
        MemberSpec::property_rw("display_name", "DisplayName"),
        MemberSpec::method("send", "Send"),
    ],
};

fn mock() -> Rc<MockDispatch> {
    Rc::new(MockDispatch::new("Account").with_property("SmtpAddress", "someone@example.com"))
}

#[test]
fn get_forwards_to_mapped_native_name_exactly_once() {
    let mock = mock();
    let facade = Facade::new(&EMAIL_ONLY, mock.clone());

    let value = facade.get("email").unwrap();

    assert_eq!(value, Value::from("someone@example.com"));
    assert_eq!(mock.calls(), vec![MockCall::Get("SmtpAddress".to_string())]);
}

#[test]
fn set_forwards_to_mapped_native_name_exactly_once() {
    let mock = mock();
    let facade = Facade::new(&EMAIL_ONLY, mock.clone());

    facade.set("email", "other@example.com").unwrap();

    assert_eq!(
        mock.calls(),
        vec![MockCall::Put(
            "SmtpAddress".to_string(),
            Variant::from("other@example.com")
        )]
    );
}

#[test]
fn call_forwards_one_invocation_with_the_sole_argument() {
    let mock = mock();
    let message: Rc<dyn Dispatch> = Rc::new(MockDispatch::new("MailItem"));
    let facade = Facade::new(&EMAIL_ONLY, mock.clone());

    facade
        .call("send", vec![Value::Object(Facade::new(&DISPATCH, message.clone()))])
        .unwrap();

    assert_eq!(mock.invocations_of("Send"), 1);
    assert_eq!(
        mock.invocation_args("Send"),
        vec![vec![Variant::Dispatch(message)]]
    );
}

#[test]
fn unknown_member_fails_every_operation_without_reaching_the_handle() {
    let mock = mock();
    let facade = Facade::new(&EMAIL_ONLY, mock.clone());

    for result in [
        facade.get("shoe_size"),
        facade.set("shoe_size", 9).map(|()| Value::Empty),
        facade.call("shoe_size", Vec::new()),
    ] {
        match result {
            Err(FacadeError::UnknownMember { facade, member }) => {
                assert_eq!(facade, "Account");
                assert_eq!(member, "shoe_size");
            }
            other => panic!("expected UnknownMember, got {other:?}"),
        }
    }
    assert_eq!(mock.arrivals(), 0);
}

#[test]
fn set_then_get_round_trips_through_a_passively_storing_object() {
    let facade = Facade::new(&EMAIL_ONLY, Rc::new(MockDispatch::new("Account")));

    facade.set("display_name", "X").unwrap();

    assert_eq!(facade.get("display_name").unwrap(), Value::from("X"));
}

#[test]
fn double_release_is_idempotent_and_later_operations_fail() {
    let mock = mock();
    let facade = Facade::new(&EMAIL_ONLY, mock.clone());

    facade.release();
    facade.release(); // second release must not fault
    assert!(facade.is_released());

    for result in [
        facade.get("email"),
        facade.set("email", "x").map(|()| Value::Empty),
        facade.call("send", Vec::new()),
    ] {
        assert!(
            matches!(result, Err(FacadeError::HandleReleased { facade: "Account" })),
            "expected HandleReleased, got {result:?}"
        );
    }
    assert_eq!(mock.arrivals(), 0);
}

#[test]
fn native_faults_are_wrapped_with_the_original_code() {
    let fault = NativeFault::new(0x80004005u32 as i32, "E_FAIL from the host");
    let mock = Rc::new(MockDispatch::new("Account").with_fault("SmtpAddress", fault));
    let facade = Facade::new(&EMAIL_ONLY, mock);

    match facade.get("email") {
        Err(FacadeError::NativeInvocation {
            facade,
            member,
            code,
            message,
        }) => {
            assert_eq!(facade, "Account");
            assert_eq!(member, "email");
            assert_eq!(code, 0x80004005u32 as i32);
            assert_eq!(message, "E_FAIL from the host");
        }
        other => panic!("expected NativeInvocation, got {other:?}"),
    }
}

#[test]
fn writes_to_read_only_members_are_rejected_before_forwarding() {
    let mock = mock();
    let facade = Facade::new(&ACCOUNT, mock.clone());

    let result = facade.set("smtp_address", "nope@example.com");

    assert!(matches!(
        result,
        Err(FacadeError::ReadOnlyMember { facade: "Account", .. })
    ));
    assert_eq!(mock.arrivals(), 0);
}

#[test]
fn calling_a_property_is_rejected_before_forwarding() {
    let mock = mock();
    let facade = Facade::new(&ACCOUNT, mock.clone());

    let result = facade.call("smtp_address", Vec::new());

    assert!(matches!(
        result,
        Err(FacadeError::NotAMethod { facade: "Account", .. })
    ));
    assert_eq!(mock.arrivals(), 0);
}

#[test]
fn object_results_wrap_into_the_declared_facade_type() {
    let session: Rc<dyn Dispatch> = Rc::new(MockDispatch::new("NameSpace"));
    let mock = Rc::new(
        MockDispatch::new("Application").with_property("Session", Variant::Dispatch(session)),
    );
    let facade = Facade::new(&APPLICATION, mock);

    let wrapped = facade.get_object("session").unwrap();

    assert_eq!(wrapped.type_name(), "NameSpace");
}

#[test]
fn undeclared_object_results_wrap_into_the_generic_type() {
    let store: Rc<dyn Dispatch> = Rc::new(MockDispatch::new("Store"));
    let mock = Rc::new(
        MockDispatch::new("Account").with_property("DeliveryStore", Variant::Dispatch(store)),
    );
    let facade = Facade::new(&ACCOUNT, mock);

    let wrapped = facade.get_object("delivery_store").unwrap();

    assert_eq!(wrapped.type_name(), "Dispatch");
    // The generic map is empty, so any member access misses.
    assert!(matches!(
        wrapped.get("anything"),
        Err(FacadeError::UnknownMember { .. })
    ));
}

#[test]
fn typed_accessors_validate_value_shapes() {
    let mock = Rc::new(MockDispatch::new("Account").with_property("SmtpAddress", 17));
    let facade = Facade::new(&EMAIL_ONLY, mock);

    match facade.get_string("email") {
        Err(FacadeError::UnexpectedType {
            expected, actual, ..
        }) => {
            assert_eq!(expected, "string");
            assert_eq!(actual, "int");
        }
        other => panic!("expected UnexpectedType, got {other:?}"),
    }
}

#[test]
fn shared_facades_release_independently() {
    let mock = mock();
    let facade = Facade::new(&EMAIL_ONLY, mock.clone());
    let shared = facade.share().unwrap();

    facade.release();

    assert!(facade.is_released());
    assert_eq!(shared.get("email").unwrap(), Value::from("someone@example.com"));
}

#[test]
fn every_shipped_attribute_map_has_unique_friendly_names() {
    for descriptor in [
        &APPLICATION,
        &NAMESPACE,
        &ACCOUNT,
        &FOLDER,
        &MAIL_ITEM,
        &COLLECTION,
        &DISPATCH,
    ] {
        let mut seen = std::collections::HashSet::new();
        for member in descriptor.members {
            assert!(
                seen.insert(member.friendly),
                "{}: duplicate friendly name `{}`",
                descriptor.name,
                member.friendly
            );
            assert!(!member.native.is_empty());
        }
    }
}
