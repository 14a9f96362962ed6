mod config;
mod cursor;

#[doc(inline)]
pub use config::PackConfig;
#[doc(inline)]
pub use cursor::PackingCursor;

use std::collections::HashSet;

use log::debug;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::entities::{IconDocument, IconSize, LayoutEntry, Sheet};
use crate::geometry::translate_nodes;
use crate::util::assertions;

/// Everything produced by a single packing run.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetBuild {
    pub sheet: Sheet,
    /// One entry per icon, in packing order
    pub layout: Vec<LayoutEntry>,
    /// Every diagnostic reported during the run, in order of detection
    pub diagnostics: Diagnostics,
}

/// Packs `icons` into a single sheet, in order, from left to right, wrapping to a new row
/// whenever an icon starts beyond [`PackConfig::sheet_max_width`].
///
/// Packing never fails: unsupported content is copied through and missing sizes are defaulted,
/// both are reported in [`SheetBuild::diagnostics`].
pub fn pack(icons: &[IconDocument], config: &PackConfig) -> SheetBuild {
    let mut diagnostics = Diagnostics::new();
    let mut identifiers = HashSet::new();
    let mut cursor = PackingCursor::new(config);
    let mut content = vec![];
    let mut layout = Vec::with_capacity(icons.len());

    for icon in icons {
        let size = resolve_size(icon, config, &mut diagnostics);
        let identifier = unique_identifier(icon, &mut identifiers, &mut diagnostics);

        let (next_cursor, placement) = cursor.step(size, config);

        let translated = translate_nodes(&icon.children, placement, &icon.source, &mut diagnostics);
        content.extend(icon.wrap_content(translated));

        debug!(
            "[PACK] placed {} ({}x{}) at {}",
            identifier, size.width, size.height, placement
        );
        layout.push(LayoutEntry {
            identifier,
            offset: -placement,
            size,
        });
        cursor = next_cursor;
    }

    let sheet = Sheet {
        width: cursor.sheet_width,
        height: cursor.sheet_height,
        content,
    };

    debug_assert!(assertions::sheet_contains_layout(&sheet, &layout, config.icon_padding));
    debug_assert!(assertions::identifiers_are_unique(&layout));

    SheetBuild {
        sheet,
        layout,
        diagnostics,
    }
}

fn resolve_size(icon: &IconDocument, config: &PackConfig, diagnostics: &mut Diagnostics) -> IconSize {
    let (size, defaulted) = icon.declared_size.resolve(config.default_icon_size());
    if defaulted {
        diagnostics.report(Diagnostic::MissingSize {
            source: icon.source.clone(),
            width: size.width,
            height: size.height,
        });
    }
    size
}

/// Returns the icon's identifier, suffixed with `-2`, `-3`, ... if it was already taken in this sheet.
fn unique_identifier(
    icon: &IconDocument,
    taken: &mut HashSet<String>,
    diagnostics: &mut Diagnostics,
) -> String {
    if taken.insert(icon.identifier.clone()) {
        return icon.identifier.clone();
    }
    let mut n = 2;
    let renamed = loop {
        let candidate = format!("{}-{}", icon.identifier, n);
        if taken.insert(candidate.clone()) {
            break candidate;
        }
        n += 1;
    };
    diagnostics.report(Diagnostic::DuplicateIdentifier {
        source: icon.source.clone(),
        identifier: icon.identifier.clone(),
        renamed_to: renamed.clone(),
    });
    renamed
}
