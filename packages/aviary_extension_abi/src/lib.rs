// SPDX-License-Identifier: MIT
//! # `aviary_extension_abi` — Stable C ABI for Aviary Shell Extensions
//!
//! This crate defines the **stable** C ABI that native Aviary extensions
//! implement. The ABI is declared STABLE at v1.0.0 — no breaking changes will
//! be made without a major version bump.
//!
//! An extension pack is a directory under the shell's extension folder
//! containing an `aviary-extension.json` manifest and the `cdylib` binary the
//! manifest names. The shell opens the binary, resolves the
//! [`AVIARY_EXTENSION_INIT_SYMBOL`] export, and receives an
//! [`AviaryExtension`] vtable.
//!
//! ## ABI stability guarantee (v1.0.0)
//!
//! - All structs in this crate are `#[repr(C)]`.
//! - Function pointer signatures will not change in minor releases.
//! - New optional callbacks may be added via reserved fields.
//! - The `abi_version` field lets the shell reject incompatible extensions.

#[cfg(feature = "serde-support")]
pub mod manifest;

/// ABI version baked into this crate. Extensions built against a different
/// version are rejected at load time.
pub const AVIARY_EXTENSION_ABI_VERSION: u32 = 1;

/// Name of the C export every extension binary must provide:
/// `extern "C" fn aviary_extension_init() -> *mut AviaryExtension`.
pub const AVIARY_EXTENSION_INIT_SYMBOL: &[u8] = b"aviary_extension_init";

// ─── Error type ──────────────────────────────────────────────────────────────

/// Status codes an extension can return to the shell.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AviaryError {
    /// No error.
    None = 0,
    /// Extension activation failed; the shell treats the extension as
    /// unavailable.
    ActivateFailed = 1,
    /// A callback returned an unexpected error.
    CallbackError = 2,
}

// ─── Context handle ──────────────────────────────────────────────────────────

/// Opaque handle the shell passes to every extension callback.
///
/// Use the function pointers in this struct to call back into the shell.
/// Do NOT store this pointer — it is only valid during the callback.
#[repr(C)]
pub struct AviaryContext {
    /// Pointer to internal shell state. Treat as opaque.
    pub _inner: *mut core::ffi::c_void,

    /// Write a message to the shell's structured log.
    ///
    /// `level` — 0=trace 1=debug 2=info 3=warn 4=error
    /// `msg` — null-terminated UTF-8 string
    pub log: unsafe extern "C" fn(
        ctx: *mut AviaryContext,
        level: u8,
        msg: *const core::ffi::c_char,
    ),

    /// Reserved for future host functions. Must be set to null.
    pub _reserved: [*mut core::ffi::c_void; 8],
}

// ─── Extension vtable ────────────────────────────────────────────────────────

/// Extension vtable — the stable interface every extension implements.
///
/// The shell calls `aviary_extension_init()` once after opening the binary.
/// The extension fills in this struct and returns a pointer to it; the shell
/// owns the pointer for the extension's lifetime and never frees it.
///
/// All function pointers are nullable — set to null to opt out of a hook.
#[repr(C)]
pub struct AviaryExtension {
    /// Must be [`AVIARY_EXTENSION_ABI_VERSION`]. The shell rejects mismatches.
    pub abi_version: u32,

    /// Null-terminated UTF-8 extension name (e.g. `"hello-aviary\0"`).
    pub name: *const core::ffi::c_char,

    /// Null-terminated semver string (e.g. `"1.0.0\0"`).
    pub version: *const core::ffi::c_char,

    /// Called when the shell activates the extension. One-time setup goes
    /// here. Return [`AviaryError::None`] on success.
    pub on_activate: Option<unsafe extern "C" fn(ctx: *mut AviaryContext) -> AviaryError>,

    /// Called before the shell exits. Release resources here.
    pub on_deactivate: Option<unsafe extern "C" fn(ctx: *mut AviaryContext)>,

    /// Reserved for future callbacks. Must be set to `[None; 8]`.
    pub _reserved: [Option<unsafe extern "C" fn()>; 8],
}
