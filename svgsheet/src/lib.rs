//! Packs independent SVG icons into a single sprite sheet.
//!
//! Every icon's geometry is rewritten to absolute sheet coordinates (no `transform` attributes are introduced)
//! and a [`LayoutEntry`](entities::LayoutEntry) is recorded per icon, so downstream consumers can address
//! individual icons within the sheet.

/// Recoverable problems reported while importing and packing icons
pub mod diagnostics;

/// Entities modelling icons, their element trees and the resulting sheet
pub mod entities;

/// Offsets and the translation of element trees
pub mod geometry;

/// Importing icons from SVG text and exporting sheets and layouts
pub mod io;

/// The greedy row packer
pub mod packer;

/// Helper functions which do not belong to any specific module
pub mod util;
