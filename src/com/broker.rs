//! Provides the real Windows backend: `IDispatch` over the COM automation
//! runtime.
//!
//! [`ComDispatch`] implements [`Dispatch`](crate::com::Dispatch) by resolving
//! native member names with `GetIDsOfNames` and forwarding through `Invoke`.
//! Objects are created or attached by ProgID (`Outlook.Application`), trying
//! a running instance first and launching the automation server otherwise.
//!
//! Reference counting is owned by the `windows-rs` interface wrappers: the
//! held `IDispatch` calls `Release` when this object drops, so the facade
//! layer's scoped-release contract needs no unsafe code of its own.

use std::any::Any;
use std::rc::Rc;

use tracing::debug;
use windows::core::{IUnknown, Interface, BSTR, GUID, PCWSTR};
use windows::Win32::System::Com::{
    CLSIDFromProgID, CoCreateInstance, CoInitializeEx, IDispatch, CLSCTX_LOCAL_SERVER,
    COINIT_APARTMENTTHREADED, DISPATCH_FLAGS, DISPATCH_METHOD, DISPATCH_PROPERTYGET,
    DISPATCH_PROPERTYPUT, DISPPARAMS, EXCEPINFO,
};
use windows::Win32::System::Ole::GetActiveObject;
use windows_core::VARIANT;

use super::dispatch::{Dispatch, NativeFault, Variant};

const LOCALE_USER_DEFAULT: u32 = 0x0400;
const DISPID_PROPERTYPUT: i32 = -3;
const E_INVALIDARG: i32 = 0x80070057u32 as i32;
const RPC_E_CHANGED_MODE: i32 = 0x80010106u32 as i32;

/// A live automation object backed by a native `IDispatch` interface.
pub struct ComDispatch {
    inner: IDispatch,
}

impl ComDispatch {
    /// Wraps an already-obtained interface.
    pub fn from_interface(inner: IDispatch) -> Self {
        Self { inner }
    }

    /// Attaches to a running automation server by ProgID, launching it if no
    /// instance is registered in the running object table.
    ///
    /// Initializes COM for the calling thread as a single-threaded apartment,
    /// matching the threading rules of the Outlook object model.
    pub fn attach_or_launch(prog_id: &str) -> Result<Rc<dyn Dispatch>, NativeFault> {
        let wide = wide(prog_id);
        unsafe {
            let hr = CoInitializeEx(None, COINIT_APARTMENTTHREADED);
            if hr.is_err() && hr.0 != RPC_E_CHANGED_MODE {
                return Err(NativeFault::new(hr.0, "CoInitializeEx failed"));
            }

            let clsid = CLSIDFromProgID(PCWSTR(wide.as_ptr())).map_err(fault)?;

            let mut running: Option<IUnknown> = None;
            if GetActiveObject(&clsid, None, &mut running).is_ok() {
                if let Some(unknown) = running {
                    let inner: IDispatch = unknown.cast().map_err(fault)?;
                    debug!(prog_id, "attached to running automation server");
                    return Ok(Rc::new(Self { inner }));
                }
            }

            let inner: IDispatch =
                CoCreateInstance(&clsid, None, CLSCTX_LOCAL_SERVER).map_err(fault)?;
            debug!(prog_id, "launched automation server");
            Ok(Rc::new(Self { inner }))
        }
    }

    fn dispid(&self, native_name: &str) -> Result<i32, NativeFault> {
        let wide = wide(native_name);
        let names = [PCWSTR(wide.as_ptr())];
        let mut dispid = 0i32;
        unsafe {
            self.inner
                .GetIDsOfNames(
                    &GUID::zeroed(),
                    names.as_ptr(),
                    1,
                    LOCALE_USER_DEFAULT,
                    &mut dispid,
                )
                .map_err(fault)?;
        }
        Ok(dispid)
    }

    fn invoke_raw(
        &self,
        dispid: i32,
        flags: DISPATCH_FLAGS,
        mut args: Vec<VARIANT>,
        property_put: bool,
    ) -> Result<VARIANT, NativeFault> {
        // IDispatch takes positional arguments in reverse order.
        args.reverse();
        let named = [DISPID_PROPERTYPUT];
        let params = DISPPARAMS {
            rgvarg: if args.is_empty() {
                std::ptr::null_mut()
            } else {
                args.as_mut_ptr()
            },
            rgdispidNamedArgs: if property_put {
                named.as_ptr().cast_mut()
            } else {
                std::ptr::null_mut()
            },
            cArgs: args.len() as u32,
            cNamedArgs: if property_put { 1 } else { 0 },
        };

        let mut result = VARIANT::default();
        let mut excep = EXCEPINFO::default();
        let outcome = unsafe {
            self.inner.Invoke(
                dispid,
                &GUID::zeroed(),
                LOCALE_USER_DEFAULT,
                flags,
                &params,
                &mut result,
                &mut excep,
                std::ptr::null_mut(),
            )
        };

        match outcome {
            Ok(()) => Ok(result),
            Err(err) => {
                // DISP_E_EXCEPTION carries the real description out-of-band.
                let description = excep.bstrDescription.to_string();
                if description.is_empty() {
                    Err(fault(err))
                } else {
                    Err(NativeFault::new(err.code().0, description))
                }
            }
        }
    }
}

impl Dispatch for ComDispatch {
    fn get_property(&self, native_name: &str) -> Result<Variant, NativeFault> {
        let dispid = self.dispid(native_name)?;
        // Automation servers blur the line between parameterless methods and
        // property gets, so ask for either.
        let result = self.invoke_raw(
            dispid,
            DISPATCH_PROPERTYGET | DISPATCH_METHOD,
            Vec::new(),
            false,
        )?;
        Ok(from_native(&result))
    }

    fn put_property(&self, native_name: &str, value: Variant) -> Result<(), NativeFault> {
        let dispid = self.dispid(native_name)?;
        self.invoke_raw(
            dispid,
            DISPATCH_PROPERTYPUT,
            vec![to_native(value)?],
            true,
        )?;
        Ok(())
    }

    fn invoke(&self, native_name: &str, args: Vec<Variant>) -> Result<Variant, NativeFault> {
        let dispid = self.dispid(native_name)?;
        let args = args.into_iter().map(to_native).collect::<Result<_, _>>()?;
        let result = self.invoke_raw(dispid, DISPATCH_METHOD, args, false)?;
        Ok(from_native(&result))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn fault(err: windows::core::Error) -> NativeFault {
    NativeFault::new(err.code().0, err.message())
}

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

fn to_native(value: Variant) -> Result<VARIANT, NativeFault> {
    Ok(match value {
        Variant::Empty => VARIANT::default(),
        Variant::Bool(b) => VARIANT::from(b),
        Variant::Int(i) => VARIANT::from(i),
        Variant::Double(d) => VARIANT::from(d),
        Variant::Str(s) => VARIANT::from(BSTR::from(s)),
        Variant::Dispatch(obj) => {
            let com = obj
                .as_any()
                .downcast_ref::<ComDispatch>()
                .ok_or_else(|| {
                    NativeFault::new(
                        E_INVALIDARG,
                        "object argument is not backed by a native dispatch handle",
                    )
                })?;
            VARIANT::from(com.inner.clone())
        }
    })
}

fn from_native(value: &VARIANT) -> Variant {
    const VT_EMPTY: u16 = 0;
    const VT_NULL: u16 = 1;
    const VT_R4: u16 = 4;
    const VT_R8: u16 = 5;
    const VT_DATE: u16 = 7;
    const VT_BSTR: u16 = 8;
    const VT_DISPATCH: u16 = 9;
    const VT_UNKNOWN: u16 = 13;
    const VT_BOOL: u16 = 11;

    // The tag picks the shape; the conversions themselves stay on
    // windows-core's public TryFrom surface, which runs VariantChangeType
    // for representation details (VT_I2 vs VT_I4 and so on).
    let vt = unsafe { value.as_raw().Anonymous.Anonymous.vt };
    match vt {
        VT_EMPTY | VT_NULL => Variant::Empty,
        VT_BOOL => bool::try_from(value)
            .map(Variant::Bool)
            .unwrap_or(Variant::Empty),
        VT_R4 | VT_R8 | VT_DATE => f64::try_from(value)
            .map(Variant::Double)
            .unwrap_or(Variant::Empty),
        VT_BSTR => BSTR::try_from(value)
            .map(|s| Variant::Str(s.to_string()))
            .unwrap_or(Variant::Empty),
        VT_DISPATCH | VT_UNKNOWN => IDispatch::try_from(value)
            .map(|d| Variant::Dispatch(Rc::new(ComDispatch::from_interface(d)) as Rc<dyn Dispatch>))
            .unwrap_or(Variant::Empty),
        // Every integral vt (I1/UI1/I2/UI2/I4/UI4/INT/UINT) widens to i32.
        _ => i32::try_from(value)
            .map(Variant::Int)
            .or_else(|_| BSTR::try_from(value).map(|s| Variant::Str(s.to_string())))
            .unwrap_or(Variant::Empty),
    }
}
