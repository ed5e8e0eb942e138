// SPDX-License-Identifier: MIT
//! Native dynamic library resolution strategy.
//!
//! Resolves an extension pack directory: reads `aviary-extension.json`,
//! opens the entry binary (`.so` / `.dylib` / `.dll`) via `libloading`,
//! resolves the `aviary_extension_init` export, and verifies the ABI version
//! before handing the descriptor to the caller.

use std::path::Path;

use libloading::{Library, Symbol};

use aviary_extension_abi::manifest::ExtensionManifest;
use aviary_extension_abi::{
    AviaryContext, AviaryError, AviaryExtension, AVIARY_EXTENSION_ABI_VERSION,
    AVIARY_EXTENSION_INIT_SYMBOL,
};

use super::{ResolveError, ResolveExtension};

/// Manifest file name at the root of every extension pack.
const MANIFEST_FILE: &str = "aviary-extension.json";

// ─── Descriptor ──────────────────────────────────────────────────────────────

/// A loaded native extension — the descriptor produced by [`DylibResolver`].
///
/// Owns the underlying library for the extension's lifetime; the vtable
/// pointer is only valid while `_lib` is alive.
pub struct DylibExtension {
    /// The loaded library. Must outlive the vtable pointer below.
    _lib: Library,
    /// Pointer to the vtable returned by `aviary_extension_init()`.
    extension: *mut AviaryExtension,
    /// Display name, read from the vtable at load time.
    name: String,
    /// Semver string, read from the vtable at load time.
    version: String,
}

// SAFETY: the shell drives extensions from a single logical flow; the raw
// pointer is valid for the lifetime of `_lib` and the vtable is immutable
// after init.
unsafe impl Send for DylibExtension {}
unsafe impl Sync for DylibExtension {}

impl DylibExtension {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Call `on_activate` if the extension provides it.
    #[allow(clippy::not_unsafe_ptr_arg_deref)]
    pub fn call_on_activate(&self, ctx: *mut AviaryContext) -> AviaryError {
        let extension = unsafe { &*self.extension };
        if let Some(on_activate) = extension.on_activate {
            unsafe { on_activate(ctx) }
        } else {
            AviaryError::None
        }
    }

    /// Call `on_deactivate` if the extension provides it.
    #[allow(clippy::not_unsafe_ptr_arg_deref)]
    pub fn call_on_deactivate(&self, ctx: *mut AviaryContext) {
        let extension = unsafe { &*self.extension };
        if let Some(on_deactivate) = extension.on_deactivate {
            unsafe { on_deactivate(ctx) }
        }
    }
}

impl std::fmt::Debug for DylibExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DylibExtension")
            .field("name", &self.name)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

// ─── Strategy ────────────────────────────────────────────────────────────────

/// Production resolution strategy: extension packs as native dynamic
/// libraries.
#[derive(Debug, Default)]
pub struct DylibResolver;

impl DylibResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ResolveExtension for DylibResolver {
    type Descriptor = DylibExtension;

    /// Resolve `specifier` as a pack directory.
    ///
    /// Steps:
    /// 1. Read `{specifier}/aviary-extension.json`.
    /// 2. `dlopen` the manifest's entry binary.
    /// 3. Resolve the `aviary_extension_init` symbol and call it.
    /// 4. Verify the ABI version.
    fn resolve(&self, specifier: &Path) -> Result<DylibExtension, ResolveError> {
        // 1. Manifest. A missing pack directory and a missing manifest file
        // are the same condition: there is no extension here.
        let manifest_path = specifier.join(MANIFEST_FILE);
        let manifest_json = std::fs::read_to_string(&manifest_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResolveError::NotFound {
                    specifier: specifier.to_path_buf(),
                }
            } else {
                ResolveError::Io {
                    specifier: specifier.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let manifest =
            ExtensionManifest::from_json(&manifest_json).map_err(|e| ResolveError::Manifest {
                specifier: specifier.to_path_buf(),
                source: e,
            })?;

        // 2. dlopen.
        // SAFETY: library loading is inherently unsafe — opening the binary
        // runs its initializers. Executing extension code is the documented
        // contract of resolution.
        let binary_path = specifier.join(&manifest.entry);
        let lib = unsafe {
            Library::new(&binary_path).map_err(|e| ResolveError::Open {
                path: binary_path.clone(),
                source: e,
            })?
        };

        // 3. Init symbol.
        let init_fn: Symbol<unsafe extern "C" fn() -> *mut AviaryExtension> = unsafe {
            lib.get(AVIARY_EXTENSION_INIT_SYMBOL)
                .map_err(|e| ResolveError::MissingEntrypoint { source: e })?
        };

        let extension = unsafe { init_fn() };
        if extension.is_null() {
            return Err(ResolveError::Init {
                reason: "aviary_extension_init() returned null".into(),
            });
        }

        // 4. ABI version gate.
        let extension_ref = unsafe { &*extension };
        if extension_ref.abi_version != AVIARY_EXTENSION_ABI_VERSION {
            return Err(ResolveError::AbiMismatch {
                expected: AVIARY_EXTENSION_ABI_VERSION,
                found: extension_ref.abi_version,
            });
        }

        // Identity strings from the vtable, falling back to the manifest.
        let name = if extension_ref.name.is_null() {
            manifest.name.clone()
        } else {
            unsafe {
                std::ffi::CStr::from_ptr(extension_ref.name)
                    .to_string_lossy()
                    .into_owned()
            }
        };
        let version = if extension_ref.version.is_null() {
            manifest.version.clone()
        } else {
            unsafe {
                std::ffi::CStr::from_ptr(extension_ref.version)
                    .to_string_lossy()
                    .into_owned()
            }
        };

        Ok(DylibExtension {
            _lib: lib,
            extension,
            name,
            version,
        })
    }
}
