//! Provides the generic facade core: attribute maps, dynamic values, and the
//! translate-and-forward engine.
//!
//! A [`Facade`] pairs one live dispatch handle with one static
//! [`FacadeDescriptor`] (the attribute map for its type) and exposes exactly
//! three operations — [`Facade::get`], [`Facade::set`], [`Facade::call`] —
//! each of which translates a friendly member name to its native name and
//! forwards exactly once. Unknown names, read-only writes, and calls on
//! properties are rejected before the handle is touched.
//!
//! Object results come back wrapped: a member whose descriptor entry names a
//! facade type produces that facade, everything else gets the generic
//! [`DISPATCH`] descriptor (an empty map).
//!
//! # Examples
//! ```
//! use std::rc::Rc;
//! use outlook_dispatch::com::MockDispatch;
//! use outlook_dispatch::{Facade, Value};
//! use outlook_dispatch::objects::ACCOUNT;
//!
//! let mock = Rc::new(MockDispatch::new("Account").with_property("SmtpAddress", "a@b.example"));
//! let facade = Facade::new(&ACCOUNT, mock);
//! assert_eq!(facade.get("smtp_address").unwrap(), Value::from("a@b.example"));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::com::{Dispatch, NativeFault, Variant};
use crate::error::FacadeError;

/// The catch-all descriptor for objects of no known facade type.
///
/// Its attribute map is empty, so every member access fails with
/// [`FacadeError::UnknownMember`]; callers can still pass such objects back
/// into methods as arguments or release them.
pub static DISPATCH: FacadeDescriptor = FacadeDescriptor {
    name: "Dispatch",
    members: &[],
};

/// Distinguishes how a member forwards to the native object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// A native property; `writable` mirrors the documented read/write flag.
    Property {
        /// Whether `set` is allowed on this member.
        writable: bool,
    },
    /// A native method. `get` on a method forwards a zero-argument invoke
    /// (the object model exposes parameterless getters this way).
    Method,
}

/// Represents one entry of a facade type's attribute map.
///
/// # Examples
/// ```
/// use outlook_dispatch::MemberSpec;
///
/// static EMAIL: MemberSpec = MemberSpec::property("email", "SmtpAddress");
/// assert_eq!(EMAIL.native, "SmtpAddress");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MemberSpec {
    /// The documented friendly name.
    pub friendly: &'static str,
    /// The native member name forwarded to the broker.
    pub native: &'static str,
    /// Property or method, and writability.
    pub kind: MemberKind,
    /// The facade type of object results, if this member yields a known one.
    pub wraps: Option<&'static FacadeDescriptor>,
}

impl MemberSpec {
    /// Declares a read-only property entry.
    pub const fn property(friendly: &'static str, native: &'static str) -> Self {
        Self {
            friendly,
            native,
            kind: MemberKind::Property { writable: false },
            wraps: None,
        }
    }

    /// Declares a read/write property entry.
    pub const fn property_rw(friendly: &'static str, native: &'static str) -> Self {
        Self {
            friendly,
            native,
            kind: MemberKind::Property { writable: true },
            wraps: None,
        }
    }

    /// Declares a method entry.
    pub const fn method(friendly: &'static str, native: &'static str) -> Self {
        Self {
            friendly,
            native,
            kind: MemberKind::Method,
            wraps: None,
        }
    }

    /// Declares the facade type object results of this member wrap into.
    pub const fn wrapping(mut self, descriptor: &'static FacadeDescriptor) -> Self {
        self.wraps = Some(descriptor);
        self
    }
}

/// Represents the static attribute map for one facade type.
///
/// Invariant: friendly names are unique within `members` (covered by the
/// integration tests over every shipped descriptor).
pub struct FacadeDescriptor {
    /// The facade type name used in diagnostics and errors.
    pub name: &'static str,
    /// The translation table, friendly name to native member.
    pub members: &'static [MemberSpec],
}

impl FacadeDescriptor {
    /// Looks up a member by friendly name.
    ///
    /// # Examples
    /// ```
    /// use outlook_dispatch::objects::ACCOUNT;
    ///
    /// assert!(ACCOUNT.member("smtp_address").is_some());
    /// assert!(ACCOUNT.member("SmtpAddress").is_none());
    /// ```
    pub fn member(&self, friendly: &str) -> Option<&'static MemberSpec> {
        // Tables are small; a linear scan beats a map build per lookup.
        self.members.iter().find(|m| m.friendly == friendly)
    }
}

impl fmt::Debug for FacadeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacadeDescriptor")
            .field("name", &self.name)
            .field("members", &self.members.len())
            .finish()
    }
}

/// Represents a dynamically-typed value on the facade surface.
///
/// Same scalar shapes as [`Variant`], but object results are already wrapped
/// into a [`Facade`] of the appropriate type.
#[derive(Debug, Default)]
pub enum Value {
    /// No value.
    #[default]
    Empty,
    /// A boolean.
    Bool(bool),
    /// A 32-bit integer.
    Int(i32),
    /// A double, also used for automation dates.
    Double(f64),
    /// A string.
    Str(String),
    /// A wrapped automation object.
    Object(Facade),
}

impl Value {
    /// Returns a short noun for the value shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
            Value::Object(_) => "object",
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the double payload, if this is a double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Consumes the value, yielding the wrapped facade if this is an object.
    pub fn into_object(self) -> Option<Facade> {
        match self {
            Value::Object(facade) => Some(facade),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Empty, Value::Empty) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.same_handle(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Facade> for Value {
    fn from(value: Facade) -> Self {
        Value::Object(value)
    }
}

/// Wraps exactly one dispatch handle behind one facade type's attribute map.
///
/// The handle is held until [`Facade::release`] (idempotent) or drop; after
/// release every operation fails with [`FacadeError::HandleReleased`]. The
/// facade is deliberately `!Send`: the underlying automation objects follow
/// single-threaded apartment rules.
///
/// # Examples
/// ```
/// use std::rc::Rc;
/// use outlook_dispatch::com::MockDispatch;
/// use outlook_dispatch::{Facade, FacadeError};
/// use outlook_dispatch::objects::ACCOUNT;
///
/// let facade = Facade::new(&ACCOUNT, Rc::new(MockDispatch::new("Account")));
/// facade.release();
/// facade.release(); // idempotent
/// assert!(matches!(
///     facade.get("smtp_address"),
///     Err(FacadeError::HandleReleased { .. })
/// ));
/// ```
pub struct Facade {
    descriptor: &'static FacadeDescriptor,
    handle: RefCell<Option<Rc<dyn Dispatch>>>,
}

impl Facade {
    /// Wraps a raw dispatch object under the given facade type.
    pub fn new(descriptor: &'static FacadeDescriptor, raw: Rc<dyn Dispatch>) -> Self {
        Self {
            descriptor,
            handle: RefCell::new(Some(raw)),
        }
    }

    /// Returns the attribute map this facade translates through.
    pub fn descriptor(&self) -> &'static FacadeDescriptor {
        self.descriptor
    }

    /// Returns the facade type name.
    pub fn type_name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Reads the member named `friendly`, forwarding exactly once.
    ///
    /// Method-kind members are forwarded as zero-argument invokes. Object
    /// results are wrapped per the member's declared facade type.
    pub fn get(&self, friendly: &str) -> Result<Value, FacadeError> {
        let spec = self.member(friendly)?;
        let raw = self.live()?;
        debug!(
            facade = self.descriptor.name,
            member = friendly,
            native = spec.native,
            "get"
        );
        let variant = match spec.kind {
            MemberKind::Property { .. } => raw.get_property(spec.native),
            MemberKind::Method => raw.invoke(spec.native, Vec::new()),
        }
        .map_err(|fault| self.native_error(friendly, fault))?;
        Ok(self.lift(spec, variant))
    }

    /// Writes the member named `friendly`, forwarding exactly once.
    ///
    /// Fails with [`FacadeError::ReadOnlyMember`] — without touching the
    /// handle — unless the member is a writable property.
    pub fn set(&self, friendly: &str, value: impl Into<Value>) -> Result<(), FacadeError> {
        let spec = self.member(friendly)?;
        if !matches!(spec.kind, MemberKind::Property { writable: true }) {
            return Err(FacadeError::ReadOnlyMember {
                facade: self.descriptor.name,
                member: friendly.to_string(),
            });
        }
        let variant = lower(value.into())?;
        let raw = self.live()?;
        debug!(
            facade = self.descriptor.name,
            member = friendly,
            native = spec.native,
            "set"
        );
        raw.put_property(spec.native, variant)
            .map_err(|fault| self.native_error(friendly, fault))
    }

    /// Invokes the method named `friendly` with positional arguments,
    /// forwarding exactly once.
    ///
    /// Fails with [`FacadeError::NotAMethod`] — without touching the handle —
    /// if the member is a property.
    pub fn call(&self, friendly: &str, args: Vec<Value>) -> Result<Value, FacadeError> {
        let spec = self.member(friendly)?;
        if spec.kind != MemberKind::Method {
            return Err(FacadeError::NotAMethod {
                facade: self.descriptor.name,
                member: friendly.to_string(),
            });
        }
        let args = args.into_iter().map(lower).collect::<Result<Vec<_>, _>>()?;
        let raw = self.live()?;
        debug!(
            facade = self.descriptor.name,
            member = friendly,
            native = spec.native,
            argc = args.len(),
            "call"
        );
        let variant = raw
            .invoke(spec.native, args)
            .map_err(|fault| self.native_error(friendly, fault))?;
        Ok(self.lift(spec, variant))
    }

    /// Releases the underlying handle. Idempotent: releasing twice is a
    /// no-op, but any later operation fails with
    /// [`FacadeError::HandleReleased`].
    pub fn release(&self) {
        self.handle.borrow_mut().take();
    }

    /// Reports whether the handle has been released.
    pub fn is_released(&self) -> bool {
        self.handle.borrow().is_none()
    }

    /// Consumes the facade, yielding the raw dispatch object.
    pub fn into_raw(self) -> Result<Rc<dyn Dispatch>, FacadeError> {
        let facade = self.descriptor.name;
        self.handle
            .into_inner()
            .ok_or(FacadeError::HandleReleased { facade })
    }

    /// Creates a second facade over the same underlying object (the moral
    /// equivalent of `AddRef`). Each facade releases independently.
    pub fn share(&self) -> Result<Facade, FacadeError> {
        Ok(Facade::new(self.descriptor, self.live()?))
    }

    /// Reports whether two facades wrap the same underlying object.
    pub fn same_handle(&self, other: &Facade) -> bool {
        match (&*self.handle.borrow(), &*other.handle.borrow()) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    // ---- typed accessors (light validation at the translation boundary) ----

    /// Reads a member documented as a string.
    pub fn get_string(&self, friendly: &str) -> Result<String, FacadeError> {
        match self.get(friendly)? {
            Value::Str(s) => Ok(s),
            other => Err(self.type_error(friendly, "string", &other)),
        }
    }

    /// Reads a member documented as a boolean.
    pub fn get_bool(&self, friendly: &str) -> Result<bool, FacadeError> {
        match self.get(friendly)? {
            Value::Bool(b) => Ok(b),
            other => Err(self.type_error(friendly, "bool", &other)),
        }
    }

    /// Reads a member documented as an integer.
    pub fn get_i32(&self, friendly: &str) -> Result<i32, FacadeError> {
        match self.get(friendly)? {
            Value::Int(i) => Ok(i),
            other => Err(self.type_error(friendly, "int", &other)),
        }
    }

    /// Reads a member documented as a double (or automation date).
    pub fn get_f64(&self, friendly: &str) -> Result<f64, FacadeError> {
        match self.get(friendly)? {
            Value::Double(d) => Ok(d),
            other => Err(self.type_error(friendly, "double", &other)),
        }
    }

    /// Reads a member documented as an object, yielding its wrapped facade.
    pub fn get_object(&self, friendly: &str) -> Result<Facade, FacadeError> {
        match self.get(friendly)? {
            Value::Object(facade) => Ok(facade),
            other => Err(self.type_error(friendly, "object", &other)),
        }
    }

    /// Converts a call result documented as an object, with diagnostics.
    pub fn expect_object(&self, friendly: &str, value: Value) -> Result<Facade, FacadeError> {
        match value {
            Value::Object(facade) => Ok(facade),
            other => Err(self.type_error(friendly, "object", &other)),
        }
    }

    /// Converts a call result documented as a string, with diagnostics.
    pub fn expect_string(&self, friendly: &str, value: Value) -> Result<String, FacadeError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(self.type_error(friendly, "string", &other)),
        }
    }

    /// Builds the type-mismatch error for a typed accessor.
    pub fn type_error(
        &self,
        friendly: &str,
        expected: &'static str,
        actual: &Value,
    ) -> FacadeError {
        FacadeError::UnexpectedType {
            facade: self.descriptor.name,
            member: friendly.to_string(),
            expected,
            actual: actual.kind().to_string(),
        }
    }

    // ---- internals ----

    fn member(&self, friendly: &str) -> Result<&'static MemberSpec, FacadeError> {
        self.descriptor
            .member(friendly)
            .ok_or_else(|| FacadeError::UnknownMember {
                facade: self.descriptor.name,
                member: friendly.to_string(),
            })
    }

    fn live(&self) -> Result<Rc<dyn Dispatch>, FacadeError> {
        self.handle
            .borrow()
            .as_ref()
            .cloned()
            .ok_or(FacadeError::HandleReleased {
                facade: self.descriptor.name,
            })
    }

    fn lift(&self, spec: &MemberSpec, variant: Variant) -> Value {
        match variant {
            Variant::Empty => Value::Empty,
            Variant::Bool(b) => Value::Bool(b),
            Variant::Int(i) => Value::Int(i),
            Variant::Double(d) => Value::Double(d),
            Variant::Str(s) => Value::Str(s),
            Variant::Dispatch(raw) => {
                Value::Object(Facade::new(spec.wraps.unwrap_or(&DISPATCH), raw))
            }
        }
    }

    fn native_error(&self, friendly: &str, fault: NativeFault) -> FacadeError {
        warn!(
            facade = self.descriptor.name,
            member = friendly,
            code = fault.code,
            "native invocation fault"
        );
        FacadeError::NativeInvocation {
            facade: self.descriptor.name,
            member: friendly.to_string(),
            code: fault.code,
            message: fault.message,
        }
    }
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade")
            .field("type", &self.descriptor.name)
            .field("released", &self.is_released())
            .finish()
    }
}

/// Lowers a surface value to the broker-boundary shape. Object arguments
/// give up their handle; a released facade cannot be passed along.
fn lower(value: Value) -> Result<Variant, FacadeError> {
    Ok(match value {
        Value::Empty => Variant::Empty,
        Value::Bool(b) => Variant::Bool(b),
        Value::Int(i) => Variant::Int(i),
        Value::Double(d) => Variant::Double(d),
        Value::Str(s) => Variant::Str(s),
        Value::Object(facade) => Variant::Dispatch(facade.into_raw()?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIXTURE: FacadeDescriptor = FacadeDescriptor {
        name: "Fixture",
        members: &[
            MemberSpec::property("label", "Label"),
            MemberSpec::property_rw("note", "Note"),
            MemberSpec::method("poke", "Poke"),
        ],
    };

    #[test]
    fn member_lookup_is_exact() {
        assert!(FIXTURE.member("label").is_some());
        assert!(FIXTURE.member("Label").is_none());
        assert!(FIXTURE.member("").is_none());
    }

    #[test]
    fn spec_builders_set_kinds() {
        assert_eq!(
            FIXTURE.member("label").unwrap().kind,
            MemberKind::Property { writable: false }
        );
        assert_eq!(
            FIXTURE.member("note").unwrap().kind,
            MemberKind::Property { writable: true }
        );
        assert_eq!(FIXTURE.member("poke").unwrap().kind, MemberKind::Method);
    }

    #[test]
    fn value_conversions_round_trip_scalars() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(7).as_i32(), Some(7));
        assert_eq!(Value::from(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Empty.kind(), "empty");
    }
}
