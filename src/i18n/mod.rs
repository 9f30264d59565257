// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localized strings come from embedded Fluent (`.ftl`) files. The locale is
//! resolved once at startup from the CLI, the config file, then the OS.

pub mod fluent;
