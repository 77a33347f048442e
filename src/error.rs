//! Provides the error taxonomy surfaced by facade operations.
//!
//! Every failure mode of the facade layer maps onto one variant of
//! [`FacadeError`]. Translation failures (`UnknownMember`, `ReadOnlyMember`,
//! `NotAMethod`) are caught before the underlying handle is touched; broker
//! faults are wrapped in `NativeInvocation` together with the native error
//! code. Nothing in this crate retries: none of these conditions are
//! transient.
//!
//! # Examples
//! ```
//! use outlook_dispatch::FacadeError;
//!
//! let err = FacadeError::UnknownMember {
//!     facade: "Account",
//!     member: "shoe_size".to_string(),
//! };
//! assert!(err.to_string().contains("shoe_size"));
//! ```

use thiserror::Error;

/// Represents every failure a facade operation can surface.
///
/// All variants carry the facade type name and, where one exists, the
/// friendly member name that was being accessed, so callers can diagnose
/// failures without consulting the native object model.
#[derive(Debug, Error)]
pub enum FacadeError {
    /// The friendly name is not present in the facade's attribute map.
    /// Always a programming error; the underlying handle is never reached.
    #[error("`{facade}` has no member named `{member}`")]
    UnknownMember {
        /// The facade type the lookup was performed on.
        facade: &'static str,
        /// The friendly name that missed.
        member: String,
    },

    /// The underlying automation call faulted. Carries the native
    /// HRESULT-style code reported by the broker.
    #[error("native call `{facade}.{member}` failed with code {code:#010x}: {message}")]
    NativeInvocation {
        /// The facade type the operation was performed on.
        facade: &'static str,
        /// The friendly member name that was being forwarded.
        member: String,
        /// The native error code (two's-complement HRESULT bits).
        code: i32,
        /// The broker's description of the fault.
        message: String,
    },

    /// An operation was attempted on a facade whose handle has already been
    /// released.
    #[error("`{facade}` handle has already been released")]
    HandleReleased {
        /// The facade type the operation was performed on.
        facade: &'static str,
    },

    /// A `set` was attempted on a member that is not a writable property.
    #[error("`{facade}.{member}` is not a writable property")]
    ReadOnlyMember {
        /// The facade type the write was performed on.
        facade: &'static str,
        /// The friendly name of the read-only member.
        member: String,
    },

    /// A `call` was attempted on a member that is a property, not a method.
    #[error("`{facade}.{member}` is a property, not a method")]
    NotAMethod {
        /// The facade type the call was performed on.
        facade: &'static str,
        /// The friendly name of the property.
        member: String,
    },

    /// A typed accessor received a value shape other than the documented one.
    #[error("`{facade}.{member}` yielded {actual}, expected {expected}")]
    UnexpectedType {
        /// The facade type the access was performed on.
        facade: &'static str,
        /// The friendly member name.
        member: String,
        /// The documented value shape.
        expected: &'static str,
        /// What actually came back.
        actual: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_code_renders_as_hresult_hex() {
        let err = FacadeError::NativeInvocation {
            facade: "Folder",
            member: "delete".to_string(),
            code: 0x80020003u32 as i32, // DISP_E_MEMBERNOTFOUND
            message: "member not found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("0x80020003"), "got: {text}");
        assert!(text.contains("Folder"));
    }

    #[test]
    fn released_message_names_the_facade_type() {
        let err = FacadeError::HandleReleased { facade: "NameSpace" };
        assert_eq!(
            err.to_string(),
            "`NameSpace` handle has already been released"
        );
    }
}
