//! Description levels and the models that produced each text.

use std::fmt;

/// One of the four description depths, from chart construction up to
/// real-world implication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    L1,
    L2,
    L3,
    L4,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::L1, Level::L2, Level::L3, Level::L4];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::L1 => "L1",
            Level::L2 => "L2",
            Level::L3 => "L3",
            Level::L4 => "L4",
        }
    }

    /// Name of the text field carrying this level inside a model block of the
    /// per-level documents.
    pub fn field_name(self) -> &'static str {
        match self {
            Level::L1 => "L1_construction",
            Level::L2 => "L2_key_relations",
            Level::L3 => "L3_trend_pattern",
            Level::L4 => "L4_real_world_implication",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Model {
    Gpt,
    Gemini,
}

impl Model {
    pub const ALL: [Model; 2] = [Model::Gpt, Model::Gemini];

    /// Key of the model block in the level documents.
    pub fn key(self) -> &'static str {
        match self {
            Model::Gpt => "gpt",
            Model::Gemini => "gemini",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Model::Gpt => "GPT",
            Model::Gemini => "Gemini",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_and_parse_back() {
        let mut shuffled = vec![Level::L3, Level::L1, Level::L4, Level::L2];
        shuffled.sort();
        assert_eq!(shuffled, Level::ALL.to_vec());

        for level in Level::ALL {
            assert_eq!(Level::parse(level.as_str()), Some(level));
        }
        assert_eq!(Level::parse("L5"), None);
        assert_eq!(Level::parse("l1"), None);
    }

    #[test]
    fn field_names_match_document_schema() {
        assert_eq!(Level::L1.field_name(), "L1_construction");
        assert_eq!(Level::L4.field_name(), "L4_real_world_implication");
    }
}
