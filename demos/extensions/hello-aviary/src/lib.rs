// SPDX-License-Identifier: MIT
//! hello-aviary — Example Aviary dylib extension.
//!
//! Demonstrates the minimal structure required for a native extension.
//! On activation it logs "Hello from hello-aviary!" to the shell log.
//!
//! Build:
//!   cargo build --release --manifest-path demos/extensions/hello-aviary/Cargo.toml
//!
//! Install the output `libhello_aviary.so` (Linux) / `libhello_aviary.dylib`
//! (macOS) next to an `aviary-extension.json` naming it as the entry.

use aviary_extension_abi::{
    AviaryContext, AviaryError, AviaryExtension, AVIARY_EXTENSION_ABI_VERSION,
};

// ─── Static vtable ───────────────────────────────────────────────────────────

/// Extension vtable — static, lives for the lifetime of the loaded library.
///
/// SAFETY: `static mut` is used here because the C ABI requires a stable
/// `*mut AviaryExtension`. The shell guarantees single-threaded access to
/// the vtable (one init call, then immutable use).
static mut EXTENSION_VTABLE: AviaryExtension = AviaryExtension {
    abi_version: AVIARY_EXTENSION_ABI_VERSION,
    name: c"hello-aviary".as_ptr(),
    version: c"0.1.0".as_ptr(),
    on_activate: Some(on_activate),
    on_deactivate: Some(on_deactivate),
    _reserved: [None; 8],
};

// ─── Required export ─────────────────────────────────────────────────────────

/// Entry point called by the shell after dlopen.
///
/// Returns a pointer to the extension vtable. The shell owns the pointer
/// for the extension's lifetime — do not free it.
#[no_mangle]
pub unsafe extern "C" fn aviary_extension_init() -> *mut AviaryExtension {
    &raw mut EXTENSION_VTABLE
}

// ─── Callbacks ───────────────────────────────────────────────────────────────

unsafe extern "C" fn on_activate(ctx: *mut AviaryContext) -> AviaryError {
    log_message(ctx, 2, "Hello from hello-aviary!");
    AviaryError::None
}

unsafe extern "C" fn on_deactivate(ctx: *mut AviaryContext) {
    log_message(ctx, 2, "hello-aviary deactivating. Goodbye!");
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Log through the shell context, tolerating a null context.
unsafe fn log_message(ctx: *mut AviaryContext, level: u8, msg: &str) {
    if ctx.is_null() {
        return;
    }
    let Ok(c_msg) = std::ffi::CString::new(msg) else {
        return;
    };
    let log = (*ctx).log;
    log(ctx, level, c_msg.as_ptr());
}
