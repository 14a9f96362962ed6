use std::fmt::{Display, Formatter};

use log::warn;

/// A recoverable problem detected while importing or packing icons.
/// None of these abort a run, the affected icon or element is skipped, copied through or given a default instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// The source does not exist, the icon is dropped from the sheet
    MissingSource { source: String },
    /// The source could not be read as an SVG document, the icon is dropped from the sheet
    UnreadableSource { source: String, reason: String },
    /// The element kind has no translation rule, it is copied through unmodified
    UnsupportedElement { source: String, kind: String },
    /// The `d` attribute of a path could not be parsed, the path is copied through unmodified
    MalformedPath { source: String, reason: String },
    /// A coordinate attribute is present but not numeric, it is left untouched
    MalformedCoordinate {
        source: String,
        attribute: String,
        value: String,
    },
    /// Neither width/height nor a viewBox declare the size of the icon, the configured defaults are used
    MissingSize {
        source: String,
        width: f32,
        height: f32,
    },
    /// The identifier was already taken by an earlier icon of the same sheet
    DuplicateIdentifier {
        source: String,
        identifier: String,
        renamed_to: String,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingSource { source } => {
                write!(f, "source file \"{source}\" not found")
            }
            Diagnostic::UnreadableSource { source, reason } => {
                write!(f, "{source}: could not be read as SVG ({reason})")
            }
            Diagnostic::UnsupportedElement { source, kind } => {
                write!(f, "{source}: <{kind}> is not supported, copied without translation")
            }
            Diagnostic::MalformedPath { source, reason } => {
                write!(f, "{source}: path data could not be parsed ({reason}), copied without translation")
            }
            Diagnostic::MalformedCoordinate {
                source,
                attribute,
                value,
            } => write!(f, "{source}: {attribute}=\"{value}\" is not a number, left untouched"),
            Diagnostic::MissingSize {
                source,
                width,
                height,
            } => write!(f, "{source}: no width/height or viewBox found, using {width}x{height}"),
            Diagnostic::DuplicateIdentifier {
                source,
                identifier,
                renamed_to,
            } => write!(f, "{source}: identifier \"{identifier}\" already in use, renamed to \"{renamed_to}\""),
        }
    }
}

/// Ordered collection of [`Diagnostic`]s.
/// Every diagnostic is logged the moment it is reported, and kept for callers that want to inspect them afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Appends all diagnostics of `other`, without logging them a second time.
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
