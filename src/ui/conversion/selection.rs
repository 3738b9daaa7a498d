// SPDX-License-Identifier: MPL-2.0
//! Which CSS-property family the conversion tables are showing.

use std::fmt;

/// Box side targeted by a padding or margin utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 7] = [
        Side::All,
        Side::X,
        Side::Y,
        Side::Top,
        Side::Right,
        Side::Bottom,
        Side::Left,
    ];

    fn suffix(self) -> &'static str {
        match self {
            Side::All => "",
            Side::X => "x",
            Side::Y => "y",
            Side::Top => "t",
            Side::Right => "r",
            Side::Bottom => "b",
            Side::Left => "l",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Side::ALL.into_iter().find(|side| side.suffix() == suffix)
    }
}

/// Selected utility family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    Gap,
    Padding(Side),
    Margin(Side),
}

pub const PADDING_OPTIONS: [Selection; 7] = [
    Selection::Padding(Side::All),
    Selection::Padding(Side::X),
    Selection::Padding(Side::Y),
    Selection::Padding(Side::Top),
    Selection::Padding(Side::Right),
    Selection::Padding(Side::Bottom),
    Selection::Padding(Side::Left),
];

pub const MARGIN_OPTIONS: [Selection; 7] = [
    Selection::Margin(Side::All),
    Selection::Margin(Side::X),
    Selection::Margin(Side::Y),
    Selection::Margin(Side::Top),
    Selection::Margin(Side::Right),
    Selection::Margin(Side::Bottom),
    Selection::Margin(Side::Left),
];

/// Every option offered by the select control, in display order.
pub const SELECT_OPTIONS: [Selection; 15] = [
    Selection::Gap,
    PADDING_OPTIONS[0],
    PADDING_OPTIONS[1],
    PADDING_OPTIONS[2],
    PADDING_OPTIONS[3],
    PADDING_OPTIONS[4],
    PADDING_OPTIONS[5],
    PADDING_OPTIONS[6],
    MARGIN_OPTIONS[0],
    MARGIN_OPTIONS[1],
    MARGIN_OPTIONS[2],
    MARGIN_OPTIONS[3],
    MARGIN_OPTIONS[4],
    MARGIN_OPTIONS[5],
    MARGIN_OPTIONS[6],
];

/// Utility family, ignoring the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Gap,
    Padding,
    Margin,
}

impl Selection {
    #[must_use]
    pub fn family(self) -> Family {
        match self {
            Selection::Gap => Family::Gap,
            Selection::Padding(_) => Family::Padding,
            Selection::Margin(_) => Family::Margin,
        }
    }

    /// Utility class prefix, e.g. `gap`, `px`, `mt`.
    #[must_use]
    pub fn tag(self) -> String {
        match self {
            Selection::Gap => "gap".to_string(),
            Selection::Padding(side) => format!("p{}", side.suffix()),
            Selection::Margin(side) => format!("m{}", side.suffix()),
        }
    }

    /// Parses a prefix produced by [`Selection::tag`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag == "gap" {
            return Some(Selection::Gap);
        }
        let (family, suffix) = tag.split_at_checked(1)?;
        let side = Side::from_suffix(suffix)?;
        match family {
            "p" => Some(Selection::Padding(side)),
            "m" => Some(Selection::Margin(side)),
            _ => None,
        }
    }

    /// Class name for a spacing token, e.g. `mx-4`.
    #[must_use]
    pub fn class_for(self, token: &str) -> String {
        format!("{}-{}", self.tag(), token)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_selection_is_gap() {
        assert_eq!(Selection::default(), Selection::Gap);
    }

    #[test]
    fn tags_match_tailwind_prefixes() {
        let tags: Vec<String> = SELECT_OPTIONS.iter().map(|s| s.tag()).collect();
        assert_eq!(
            tags,
            [
                "gap", "p", "px", "py", "pt", "pr", "pb", "pl", "m", "mx", "my", "mt", "mr", "mb",
                "ml"
            ]
        );
    }

    #[test]
    fn every_option_parses_back_from_its_tag() {
        for option in SELECT_OPTIONS {
            assert_eq!(Selection::from_tag(&option.tag()), Some(option));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        for tag in ["", "g", "pz", "mq", "gapx", "x", "padding"] {
            assert_eq!(Selection::from_tag(tag), None, "{tag}");
        }
    }

    #[test]
    fn options_are_unique() {
        let unique: HashSet<_> = SELECT_OPTIONS.iter().collect();
        assert_eq!(unique.len(), SELECT_OPTIONS.len());
    }

    #[test]
    fn class_for_joins_prefix_and_token() {
        assert_eq!(Selection::Margin(Side::X).class_for("4"), "mx-4");
        assert_eq!(Selection::Gap.class_for("px"), "gap-px");
        assert_eq!(Selection::Padding(Side::All).class_for("0.5"), "p-0.5");
    }

    #[test]
    fn family_ignores_side() {
        assert_eq!(Selection::Padding(Side::Left).family(), Family::Padding);
        assert_eq!(Selection::Margin(Side::All).family(), Family::Margin);
        assert_eq!(Selection::Gap.family(), Family::Gap);
    }
}
