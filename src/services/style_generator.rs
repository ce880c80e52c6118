//! Style Generator: derives a rule identifier and `::cue` CSS from a style selection.

use crate::types::style::{ActiveStyleRule, StyleSelection};

/// Prefix shared by every generated identifier.
pub const RULE_PREFIX: &str = "st";

/// Trait defining the style generator interface.
pub trait StyleGeneratorTrait {
    fn rule_id(&self, selection: &StyleSelection) -> String;
    fn rule_css(&self, selection: &StyleSelection) -> String;
    fn generate(&self, selection: &StyleSelection) -> ActiveStyleRule;
}

/// Stateless generator; output depends only on the selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleGenerator;

impl StyleGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl StyleGeneratorTrait for StyleGenerator {
    /// Builds `st-{family}-{size}-{color}-{background}`.
    ///
    /// Spaces in the family name become `-` so the identifier is a single
    /// class token, e.g. `st-Noto-Serif-1-yellow-cyan`.
    fn rule_id(&self, selection: &StyleSelection) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            RULE_PREFIX,
            selection.font_family.wire_value().replace(' ', "-"),
            selection.font_size.wire_value(),
            selection.font_color.wire_value(),
            selection.background_color.wire_value(),
        )
    }

    fn rule_css(&self, selection: &StyleSelection) -> String {
        format!(
            ".{} ::cue {{\n  font-family: {};\n  font-size: {};\n  color: {};\n  background-color: {};\n}}\n",
            self.rule_id(selection),
            selection.font_family.font_stack(),
            selection.font_size.percentage(),
            selection.font_color.wire_value(),
            selection.background_color.wire_value(),
        )
    }

    fn generate(&self, selection: &StyleSelection) -> ActiveStyleRule {
        ActiveStyleRule {
            id: self.rule_id(selection),
            css: self.rule_css(selection),
        }
    }
}
