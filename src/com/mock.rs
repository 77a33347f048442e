//! Provides a scriptable in-memory stand-in for a live automation object.
//!
//! [`MockDispatch`] implements [`Dispatch`](crate::com::Dispatch) without any
//! host: properties are stored in a map (writes land there, reads come back
//! out), method results can be canned per native name, and any member can be
//! scripted to fault with a chosen native code. Every arrival at the object
//! is recorded, so tests can assert that a facade forwarded exactly once —
//! or never.
//!
//! # Examples
//! ```
//! use outlook_dispatch::com::{Dispatch, MockDispatch, Variant};
//!
//! let mock = MockDispatch::new("Account").with_property("SmtpAddress", "a@b.example");
//! let value = mock.get_property("SmtpAddress").unwrap();
//! assert_eq!(value, Variant::from("a@b.example"));
//! assert_eq!(mock.arrivals(), 1);
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

use super::dispatch::{Dispatch, NativeFault, Variant};

/// `DISP_E_MEMBERNOTFOUND`: the code a real broker reports for a member the
/// object does not implement. The mock reports it for unscripted reads.
pub const DISP_E_MEMBERNOTFOUND: i32 = 0x80020003u32 as i32;

/// Records one operation that reached the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    /// A property read, by native name.
    Get(String),
    /// A property write, by native name, with the written value.
    Put(String, Variant),
    /// A method invocation, by native name, with its arguments.
    Invoke(String, Vec<Variant>),
}

impl MockCall {
    /// Returns the native member name the operation targeted.
    pub fn native_name(&self) -> &str {
        match self {
            MockCall::Get(name) | MockCall::Put(name, _) | MockCall::Invoke(name, _) => name,
        }
    }
}

/// An in-memory automation object for tests and host-free development.
#[derive(Default)]
pub struct MockDispatch {
    name: String,
    properties: RefCell<HashMap<String, Variant>>,
    method_results: RefCell<HashMap<String, Variant>>,
    faults: RefCell<HashMap<String, NativeFault>>,
    log: RefCell<Vec<MockCall>>,
}

impl MockDispatch {
    /// Creates an empty mock; `name` only labels diagnostics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Seeds a stored property value, builder style.
    ///
    /// # Examples
    /// ```
    /// use outlook_dispatch::com::MockDispatch;
    ///
    /// let mock = MockDispatch::new("Folder")
    ///     .with_property("Name", "Inbox")
    ///     .with_property("UnReadItemCount", 3);
    /// ```
    pub fn with_property(self, native_name: &str, value: impl Into<Variant>) -> Self {
        self.properties
            .borrow_mut()
            .insert(native_name.to_string(), value.into());
        self
    }

    /// Cans the result of a method, builder style.
    pub fn with_method_result(self, native_name: &str, result: impl Into<Variant>) -> Self {
        self.method_results
            .borrow_mut()
            .insert(native_name.to_string(), result.into());
        self
    }

    /// Scripts a member to fault with the given native error, builder style.
    pub fn with_fault(self, native_name: &str, fault: NativeFault) -> Self {
        self.faults
            .borrow_mut()
            .insert(native_name.to_string(), fault);
        self
    }

    /// Stores a property value on an already-shared mock.
    pub fn insert_property(&self, native_name: &str, value: impl Into<Variant>) {
        self.properties
            .borrow_mut()
            .insert(native_name.to_string(), value.into());
    }

    /// Returns the mock's diagnostic label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns everything that reached this object, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.log.borrow().clone()
    }

    /// Returns how many operations of any kind reached this object.
    pub fn arrivals(&self) -> usize {
        self.log.borrow().len()
    }

    /// Returns how many times the named method was invoked.
    pub fn invocations_of(&self, native_name: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|call| matches!(call, MockCall::Invoke(name, _) if name == native_name))
            .count()
    }

    /// Returns the recorded argument lists for the named method.
    pub fn invocation_args(&self, native_name: &str) -> Vec<Vec<Variant>> {
        self.log
            .borrow()
            .iter()
            .filter_map(|call| match call {
                MockCall::Invoke(name, args) if name == native_name => Some(args.clone()),
                _ => None,
            })
            .collect()
    }

    fn scripted_fault(&self, native_name: &str) -> Option<NativeFault> {
        self.faults.borrow().get(native_name).cloned()
    }
}

impl Dispatch for MockDispatch {
    fn get_property(&self, native_name: &str) -> Result<Variant, NativeFault> {
        self.log
            .borrow_mut()
            .push(MockCall::Get(native_name.to_string()));
        if let Some(fault) = self.scripted_fault(native_name) {
            return Err(fault);
        }
        self.properties
            .borrow()
            .get(native_name)
            .cloned()
            .ok_or_else(|| {
                NativeFault::new(
                    DISP_E_MEMBERNOTFOUND,
                    format!("{}: no property `{native_name}`", self.name),
                )
            })
    }

    fn put_property(&self, native_name: &str, value: Variant) -> Result<(), NativeFault> {
        self.log
            .borrow_mut()
            .push(MockCall::Put(native_name.to_string(), value.clone()));
        if let Some(fault) = self.scripted_fault(native_name) {
            return Err(fault);
        }
        self.properties
            .borrow_mut()
            .insert(native_name.to_string(), value);
        Ok(())
    }

    fn invoke(&self, native_name: &str, args: Vec<Variant>) -> Result<Variant, NativeFault> {
        self.log
            .borrow_mut()
            .push(MockCall::Invoke(native_name.to_string(), args));
        if let Some(fault) = self.scripted_fault(native_name) {
            return Err(fault);
        }
        Ok(self
            .method_results
            .borrow()
            .get(native_name)
            .cloned()
            .unwrap_or(Variant::Empty))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_return_seeded_values_and_record_arrivals() {
        let mock = MockDispatch::new("Thing").with_property("Name", "x");
        assert_eq!(mock.get_property("Name").unwrap(), Variant::from("x"));
        assert_eq!(mock.calls(), vec![MockCall::Get("Name".to_string())]);
    }

    #[test]
    fn unseeded_reads_fault_with_member_not_found() {
        let mock = MockDispatch::new("Thing");
        let fault = mock.get_property("Missing").unwrap_err();
        assert_eq!(fault.code, DISP_E_MEMBERNOTFOUND);
    }

    #[test]
    fn writes_are_passively_stored() {
        let mock = MockDispatch::new("Thing");
        mock.put_property("Note", Variant::from("hello")).unwrap();
        assert_eq!(mock.get_property("Note").unwrap(), Variant::from("hello"));
    }

    #[test]
    fn scripted_faults_win_over_stored_state() {
        let fault = NativeFault::new(0x80004005u32 as i32, "boom");
        let mock = MockDispatch::new("Thing")
            .with_property("Name", "x")
            .with_fault("Name", fault.clone());
        assert_eq!(mock.get_property("Name").unwrap_err(), fault);
    }

    #[test]
    fn invocations_record_arguments() {
        let mock = MockDispatch::new("Thing").with_method_result("Add", 3);
        let result = mock
            .invoke("Add", vec![Variant::from(1), Variant::from(2)])
            .unwrap();
        assert_eq!(result, Variant::from(3));
        assert_eq!(mock.invocations_of("Add"), 1);
        assert_eq!(
            mock.invocation_args("Add"),
            vec![vec![Variant::from(1), Variant::from(2)]]
        );
    }
}
