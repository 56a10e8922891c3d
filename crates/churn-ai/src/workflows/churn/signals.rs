use super::domain::ReasonCategory;

/// Per-category "topic mentioned" flags extracted from free-text feedback.
///
/// Matching is plain substring containment on the lowercased text, so a keyword embedded in an
/// unrelated word still counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSignals {
    mentioned: [bool; ReasonCategory::ALL.len()],
}

impl TextSignals {
    pub fn scan(feedback: &str) -> Self {
        let folded = feedback.to_lowercase();
        let mut mentioned = [false; ReasonCategory::ALL.len()];

        for category in ReasonCategory::ALL {
            mentioned[category.index()] = category
                .keywords()
                .iter()
                .any(|keyword| folded.contains(keyword));
        }

        Self { mentioned }
    }

    pub fn mentions(&self, category: ReasonCategory) -> bool {
        self.mentioned[category.index()]
    }

    pub fn mentioned_categories(&self) -> impl Iterator<Item = ReasonCategory> + '_ {
        ReasonCategory::ALL
            .into_iter()
            .filter(|category| self.mentions(*category))
    }
}
