// SPDX-License-Identifier: MIT
//! Extension loading.
//!
//! Extensions are optional packs living under the shell's extension
//! directory, one directory per extension name. Loading is best-effort by
//! policy: a missing or broken extension must never take the shell down, so
//! [`ExtensionLoader::try_load`] collapses every failure into `None` after
//! emitting one diagnostic. Callers that need the cause use
//! [`ExtensionLoader::load`] and match on [`ResolveError`].
//!
//! The actual "resolve and execute" step is behind the [`ResolveExtension`]
//! strategy trait so tests can substitute a deterministic resolver. The
//! production strategy is [`dylib::DylibResolver`].

use std::path::{Path, PathBuf};

use tracing::warn;

pub mod dylib;

pub use dylib::{DylibExtension, DylibResolver};

// ─── Resolution strategy ─────────────────────────────────────────────────────

/// Strategy that turns a resolved specifier into an executed extension's
/// descriptor.
///
/// The descriptor type is opaque to the loader: whatever the strategy
/// produces is handed to the caller unchanged, and the caller checks it
/// against the shell's capability contract. Resolving may run arbitrary
/// extension initialization code; that is inherent to the mechanism.
pub trait ResolveExtension {
    /// The exported value of a successfully resolved extension.
    type Descriptor;

    /// Resolve and execute the extension at `specifier`, exactly once.
    fn resolve(&self, specifier: &Path) -> Result<Self::Descriptor, ResolveError>;
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a resolution attempt failed.
///
/// `try_load` flattens all of these into `None`; the variant still reaches
/// the log so operators can tell an absent pack from a broken one.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No extension pack exists at the specifier.
    #[error("extension not found at {}", .specifier.display())]
    NotFound { specifier: PathBuf },

    /// The pack exists but reading it failed.
    #[error("failed to read extension pack at {}", .specifier.display())]
    Io {
        specifier: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pack manifest could not be parsed.
    #[error("invalid extension manifest at {}", .specifier.display())]
    Manifest {
        specifier: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The entry binary could not be opened.
    #[error("failed to open extension binary {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The binary does not export the required init symbol.
    #[error("extension binary is missing the `aviary_extension_init` export")]
    MissingEntrypoint {
        #[source]
        source: libloading::Error,
    },

    /// The extension was built against an incompatible ABI version.
    #[error("extension ABI version mismatch: expected {expected}, got {found}")]
    AbiMismatch { expected: u32, found: u32 },

    /// The extension's init export ran but produced an unusable result.
    #[error("extension initialization failed: {reason}")]
    Init { reason: String },
}

// ─── Loader ──────────────────────────────────────────────────────────────────

/// Maps a directory + extension name to an extension descriptor without ever
/// propagating a fault to the caller.
///
/// The loader holds no mutable state: every call re-resolves, and no call
/// influences any other.
pub struct ExtensionLoader<R> {
    resolver: R,
}

impl<R: ResolveExtension> ExtensionLoader<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Resolve and execute the extension `name` under `directory`, surfacing
    /// the typed cause on failure.
    ///
    /// The specifier handed to the strategy is `directory` joined with `name`
    /// via the platform path convention. The strategy is invoked exactly
    /// once per call — there is no caching.
    pub fn load(&self, directory: &Path, name: &str) -> Result<R::Descriptor, ResolveError> {
        self.resolver.resolve(&directory.join(name))
    }

    /// Best-effort variant of [`load`](Self::load): any failure is logged
    /// once and converted to `None`.
    ///
    /// `None` means "extension unavailable". A broken extension degrades to a
    /// missing feature, never to a shell crash.
    pub fn try_load(&self, directory: &Path, name: &str) -> Option<R::Descriptor> {
        match self.load(directory, name) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                warn!(
                    extension = %name,
                    directory = %directory.display(),
                    error = %e,
                    "failed to load extension — skipping"
                );
                None
            }
        }
    }
}
