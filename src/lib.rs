// SPDX-License-Identifier: MIT
//! Aviary Shell host utilities — extension loading and resource injection.
//!
//! Two independent components, aggregated by [`ShellUtils`]:
//!
//! - [`extensions::ExtensionLoader`] resolves optional extension packs by
//!   name from a directory, best-effort: a broken or absent pack yields
//!   `None`, never a crash.
//! - [`inject::ResourceInjector`] appends script/stylesheet reference nodes
//!   to the running document through a [`inject::DocumentPort`].
//!
//! No data flows between the two; they share only the facade that
//! instantiates them.

pub mod config;
pub mod extensions;
pub mod inject;
pub mod logging;

use extensions::{DylibResolver, ExtensionLoader, ResolveExtension};
use inject::{DocumentPort, ResourceInjector};

/// The shell's utility surface: one extension loader and one resource
/// injector.
///
/// Constructed once at process start and held for the process lifetime;
/// there is no teardown.
pub struct ShellUtils<R: ResolveExtension, D: DocumentPort> {
    pub extension_loader: ExtensionLoader<R>,
    pub injector: ResourceInjector<D>,
}

impl<R: ResolveExtension, D: DocumentPort> ShellUtils<R, D> {
    pub fn new(resolver: R, document: D) -> Self {
        Self {
            extension_loader: ExtensionLoader::new(resolver),
            injector: ResourceInjector::new(document),
        }
    }
}

impl<D: DocumentPort> ShellUtils<DylibResolver, D> {
    /// Wire the facade with the production dylib resolution strategy.
    pub fn with_dylib_resolver(document: D) -> Self {
        Self::new(DylibResolver::new(), document)
    }
}
