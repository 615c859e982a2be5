//! Color-agnostic tree lines
//!
//! Walkers produce [`TreeLine`]s; formatters decide how to paint them. The
//! `Display` impl is the exact uncolored text of a line.

use std::fmt;

pub const PERMISSION_DENIED: &str = "[permission denied]";

/// Glyphs marking an entry's position among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Tee,
    Corner,
}

impl Connector {
    /// Corner for the last of `total` siblings, tee for the rest.
    pub fn for_position(index: usize, total: usize) -> Self {
        if index + 1 == total {
            Connector::Corner
        } else {
            Connector::Tee
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Connector::Tee => "|-- ",
            Connector::Corner => "`-- ",
        }
    }

    /// Prefix handed to the children of an entry drawn with this connector.
    pub fn child_prefix(self, prefix: &str) -> String {
        match self {
            Connector::Tee => format!("{}|   ", prefix),
            Connector::Corner => format!("{}    ", prefix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Root(String),
    Dir(String),
    File(String),
    PermissionDenied,
}

impl Label {
    /// The part of the line that gets colored.
    pub fn text(&self) -> &str {
        match self {
            Label::Root(name) | Label::Dir(name) | Label::File(name) => name,
            Label::PermissionDenied => PERMISSION_DENIED,
        }
    }

    /// Trailing marker written after the colored part.
    pub fn suffix(&self) -> &'static str {
        match self {
            Label::Root(_) | Label::Dir(_) => "/",
            Label::File(_) | Label::PermissionDenied => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    /// `None` only for the root line.
    pub connector: Option<Connector>,
    pub label: Label,
}

impl TreeLine {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            connector: None,
            label: Label::Root(name.into()),
        }
    }

    pub fn entry(prefix: &str, connector: Connector, label: Label) -> Self {
        Self {
            prefix: prefix.to_string(),
            connector: Some(connector),
            label,
        }
    }

    /// Stand-in for the contents of a directory that could not be listed.
    pub fn denied(prefix: &str) -> Self {
        Self::entry(prefix, Connector::Tee, Label::PermissionDenied)
    }

    pub fn connector_str(&self) -> &'static str {
        self.connector.map_or("", Connector::as_str)
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.prefix,
            self.connector_str(),
            self.label.text(),
            self.label.suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_for_position() {
        assert_eq!(Connector::for_position(0, 1), Connector::Corner);
        assert_eq!(Connector::for_position(0, 3), Connector::Tee);
        assert_eq!(Connector::for_position(1, 3), Connector::Tee);
        assert_eq!(Connector::for_position(2, 3), Connector::Corner);
    }

    #[test]
    fn test_child_prefix() {
        assert_eq!(Connector::Corner.child_prefix(""), "    ");
        assert_eq!(Connector::Tee.child_prefix(""), "|   ");
        assert_eq!(Connector::Corner.child_prefix("|   "), "|       ");
        assert_eq!(Connector::Tee.child_prefix("    "), "    |   ");
    }

    #[test]
    fn test_line_text() {
        assert_eq!(TreeLine::root("project").to_string(), "project/");
        assert_eq!(
            TreeLine::entry("|   ", Connector::Tee, Label::Dir("src".into())).to_string(),
            "|   |-- src/"
        );
        assert_eq!(
            TreeLine::entry("    ", Connector::Corner, Label::File("main.rs".into())).to_string(),
            "    `-- main.rs"
        );
        assert_eq!(TreeLine::denied("|   ").to_string(), "|   |-- [permission denied]");
    }
}
