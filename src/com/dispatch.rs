//! Provides the broker-boundary abstraction: dynamic get/set/invoke by name.
//!
//! [`Dispatch`] is the narrow seam between the facade layer and the host
//! platform's object broker. The real Windows backend implements it over
//! `IDispatch` (`com::broker`); [`crate::com::MockDispatch`]
//! implements it in memory for host-free use. Values crossing this boundary
//! are [`Variant`]s, the dynamic shape the automation runtime traffics in.
//!
//! # Examples
//! ```
//! use outlook_dispatch::com::Variant;
//!
//! let v = Variant::from("hello");
//! assert_eq!(v.kind(), "string");
//! ```

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Represents one live automation object as seen by the facade layer.
///
/// Implementations own the native reference (and release it on drop); the
/// facade layer holds `Rc<dyn Dispatch>` and never touches reference
/// counting itself. Member names passed here are *native* names — attribute
/// translation has already happened one layer up.
///
/// All methods are synchronous and blocking, matching the single-threaded
/// apartment model of the underlying automation objects.
pub trait Dispatch {
    /// Reads the named native property.
    fn get_property(&self, native_name: &str) -> Result<Variant, NativeFault>;

    /// Writes the named native property.
    fn put_property(&self, native_name: &str, value: Variant) -> Result<(), NativeFault>;

    /// Invokes the named native method with positional arguments.
    fn invoke(&self, native_name: &str, args: Vec<Variant>) -> Result<Variant, NativeFault>;

    /// Exposes the concrete type for backend-side downcasting (the Windows
    /// backend must recover its own `IDispatch` when an object is passed
    /// back in as an argument).
    fn as_any(&self) -> &dyn Any;
}

/// Represents a dynamically-typed value crossing the broker boundary.
///
/// This mirrors the subset of the native `VARIANT` shapes the object model
/// actually traffics in. Object values share the underlying dispatch object
/// (cloning a `Variant` is the moral equivalent of `AddRef`).
///
/// # Examples
/// ```
/// use outlook_dispatch::com::Variant;
///
/// assert_eq!(Variant::from(42).kind(), "int");
/// assert_eq!(Variant::Empty.kind(), "empty");
/// ```
#[derive(Clone, Default)]
pub enum Variant {
    /// No value (`VT_EMPTY`).
    #[default]
    Empty,
    /// A boolean (`VT_BOOL`).
    Bool(bool),
    /// A 32-bit integer (`VT_I4`).
    Int(i32),
    /// A double, also used for automation dates (`VT_R8`, `VT_DATE`).
    Double(f64),
    /// A string (`VT_BSTR`).
    Str(String),
    /// Another automation object (`VT_DISPATCH`).
    Dispatch(Rc<dyn Dispatch>),
}

impl Variant {
    /// Returns a short noun for the value shape, used in diagnostics.
    ///
    /// # Examples
    /// ```
    /// use outlook_dispatch::com::Variant;
    ///
    /// assert_eq!(Variant::Bool(true).kind(), "bool");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            Variant::Empty => "empty",
            Variant::Bool(_) => "bool",
            Variant::Int(_) => "int",
            Variant::Double(_) => "double",
            Variant::Str(_) => "string",
            Variant::Dispatch(_) => "object",
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Empty => write!(f, "Empty"),
            Variant::Bool(b) => write!(f, "Bool({b})"),
            Variant::Int(i) => write!(f, "Int({i})"),
            Variant::Double(d) => write!(f, "Double({d})"),
            Variant::Str(s) => write!(f, "Str({s:?})"),
            Variant::Dispatch(obj) => {
                write!(f, "Dispatch({:p})", Rc::as_ptr(obj))
            }
        }
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Variant::Empty, Variant::Empty) => true,
            (Variant::Bool(a), Variant::Bool(b)) => a == b,
            (Variant::Int(a), Variant::Int(b)) => a == b,
            (Variant::Double(a), Variant::Double(b)) => a == b,
            (Variant::Str(a), Variant::Str(b)) => a == b,
            // Object identity, matching COM's notion of "same object".
            (Variant::Dispatch(a), Variant::Dispatch(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Bool(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Int(value)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Double(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Str(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::Str(value)
    }
}

impl From<Rc<dyn Dispatch>> for Variant {
    fn from(value: Rc<dyn Dispatch>) -> Self {
        Variant::Dispatch(value)
    }
}

/// Represents a fault raised by the underlying automation runtime.
///
/// Carries the native HRESULT-style code so callers can diagnose the
/// original failure; the facade layer wraps this into
/// [`crate::FacadeError::NativeInvocation`] together with the friendly
/// member name.
///
/// # Examples
/// ```
/// use outlook_dispatch::com::NativeFault;
///
/// let fault = NativeFault::new(0x80020003u32 as i32, "member not found");
/// assert_eq!(fault.code, 0x80020003u32 as i32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFault {
    /// The native error code (two's-complement HRESULT bits).
    pub code: i32,
    /// The broker's description of the fault.
    pub message: String,
}

impl NativeFault {
    /// Creates a fault from a native code and description.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for NativeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}: {}", self.code, self.message)
    }
}

impl std::error::Error for NativeFault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_equality_is_structural_for_scalars() {
        assert_eq!(Variant::from("x"), Variant::Str("x".to_string()));
        assert_eq!(Variant::from(1.5), Variant::Double(1.5));
        assert_ne!(Variant::from(1), Variant::from(true));
    }

    #[test]
    fn fault_display_includes_hex_code() {
        let fault = NativeFault::new(0x80004005u32 as i32, "unspecified error");
        assert_eq!(fault.to_string(), "0x80004005: unspecified error");
    }
}
