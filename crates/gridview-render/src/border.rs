//! Border styles and the grid lines they draw.

use serde::{Deserialize, Serialize};

/// Border style for the rendered table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No borders; columns separated by two spaces.
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    /// Box-drawing characters for this style, `None` for no borders.
    pub(crate) fn chars(&self) -> Option<BorderChars> {
        let chars = match self {
            BorderStyle::None => return None,
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        };
        Some(chars)
    }

    /// Markers appended to the sorted header: (ascending, descending).
    pub fn sort_markers(&self) -> (char, char) {
        match self {
            BorderStyle::Ascii => ('^', 'v'),
            _ => ('▲', '▼'),
        }
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BorderChars {
    pub(crate) horizontal: char,
    pub(crate) vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

/// Position of a horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineType {
    Top,
    Middle,
    Bottom,
}

impl BorderChars {
    /// (left, joint, right) for a line at `line_type`.
    pub(crate) fn ends(&self, line_type: LineType) -> (char, char, char) {
        match line_type {
            LineType::Top => (self.top_left, self.top_t, self.top_right),
            LineType::Middle => (self.left_t, self.cross, self.right_t),
            LineType::Bottom => (self.bottom_left, self.bottom_t, self.bottom_right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_draws_nothing() {
        assert!(BorderStyle::None.chars().is_none());
        assert!(BorderStyle::Light.chars().is_some());
    }

    #[test]
    fn ascii_uses_ascii_markers() {
        assert_eq!(BorderStyle::Ascii.sort_markers(), ('^', 'v'));
        assert_eq!(BorderStyle::Rounded.sort_markers(), ('▲', '▼'));
    }

    #[test]
    fn corners_by_line() {
        let chars = BorderStyle::Rounded.chars().unwrap();
        assert_eq!(chars.ends(LineType::Top), ('╭', '┬', '╮'));
        assert_eq!(chars.ends(LineType::Bottom), ('╰', '┴', '╯'));
        assert_eq!(chars.ends(LineType::Middle).1, '┼');
    }

    #[test]
    fn serde_names() {
        let style: BorderStyle = serde_json::from_str("\"ascii\"").unwrap();
        assert_eq!(style, BorderStyle::Ascii);
        assert_eq!(serde_json::to_string(&BorderStyle::None).unwrap(), "\"none\"");
    }
}
