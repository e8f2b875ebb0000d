use crate::core::labels::{Aspect, Sentiment};

/// One keyword group: a label plus the substrings that trigger it.
#[derive(Debug, Clone)]
pub struct KeywordRule<L> {
    pub label: L,
    patterns: Vec<String>,
}

impl<L: Copy> KeywordRule<L> {
    /// Patterns are stored lowercase; matching lowercases the probe text, so
    /// the substring test is case-insensitive.
    pub fn new<S: AsRef<str>>(label: L, patterns: &[S]) -> KeywordRule<L> {
        KeywordRule {
            label,
            patterns: patterns
                .iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn matches(&self, lowercase_text: &str) -> bool {
        self.patterns.iter().any(|p| lowercase_text.contains(p))
    }
}

/// Ordered rule list; order is the priority order. The first rule whose
/// keyword group matches anywhere in the text wins, so a text matching both a
/// positive and a negative group gets the label of whichever group is listed
/// first. This decouples which labels exist (the closed enums) from how they
/// are currently detected (this table).
#[derive(Debug, Clone)]
pub struct RuleTable<L> {
    rules: Vec<KeywordRule<L>>,
}

impl<L: Copy> RuleTable<L> {
    pub fn new(rules: Vec<KeywordRule<L>>) -> RuleTable<L> {
        RuleTable { rules }
    }

    /// First-match-wins lookup; `None` means no group matched (Unlabeled).
    pub fn apply(&self, text: &str) -> Option<L> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|r| r.matches(&lowered))
            .map(|r| r.label)
    }
}

/// Coarse sentiment seed rules. Positive keywords are checked before negative
/// ones.
pub fn sentiment_rules() -> RuleTable<Sentiment> {
    RuleTable::new(vec![
        KeywordRule::new(
            Sentiment::Positive,
            &[
                "great", "good", "excellent", "amazing", "delicious", "awesome", "love",
                "fantastic", "tasty", "best", "friendly", "perfect",
            ],
        ),
        KeywordRule::new(
            Sentiment::Negative,
            &[
                "terrible", "bad", "awful", "horrible", "rude", "worst", "disappoint", "bland",
                "cold", "slow", "dirty", "overpriced",
            ],
        ),
    ])
}

/// Aspect seed rules for documents carrying the given coarse sentiment. Food
/// keywords are checked before service, service before price; anything else
/// falls through to `None` and is left for the classifier (or `Other`).
pub fn aspect_rules(sentiment: Sentiment) -> RuleTable<Aspect> {
    let food = [
        "food", "dish", "meal", "taste", "flavor", "menu", "pizza", "burger", "chicken",
        "delicious", "portion",
    ];
    let service = [
        "service", "staff", "waiter", "waitress", "server", "manager", "host",
    ];
    match sentiment {
        Sentiment::Positive => RuleTable::new(vec![
            KeywordRule::new(Aspect::GoodFood, &food),
            KeywordRule::new(Aspect::GoodService, &service),
            KeywordRule::new(
                Aspect::Affordable,
                &["cheap", "affordable", "value", "worth", "reasonable", "price"],
            ),
        ]),
        Sentiment::Negative => RuleTable::new(vec![
            KeywordRule::new(Aspect::BadFood, &food),
            KeywordRule::new(Aspect::BadService, &service),
            KeywordRule::new(
                Aspect::Overpriced,
                &["expensive", "overpriced", "pricey", "cost", "price"],
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_group_wins() {
        // Matches both groups; positive is listed first.
        let t = sentiment_rules();
        assert_eq!(
            t.apply("Great location but rude staff"),
            Some(Sentiment::Positive)
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let t = sentiment_rules();
        assert_eq!(t.apply("ABSOLUTELY TERRIBLE."), Some(Sentiment::Negative));
        // "disappoint" matches inside "disappointing".
        assert_eq!(t.apply("so disappointing"), Some(Sentiment::Negative));
    }

    #[test]
    fn no_match_means_unlabeled() {
        let t = sentiment_rules();
        assert_eq!(t.apply("It was okay I guess"), None);
    }

    #[test]
    fn aspect_tables_depend_on_sentiment() {
        let pos = aspect_rules(Sentiment::Positive);
        let neg = aspect_rules(Sentiment::Negative);
        assert_eq!(pos.apply("the food was memorable"), Some(Aspect::GoodFood));
        assert_eq!(neg.apply("the food was memorable"), Some(Aspect::BadFood));
        assert_eq!(neg.apply("way too expensive"), Some(Aspect::Overpriced));
        assert_eq!(pos.apply("lovely evening"), None);
    }

    #[test]
    fn aspect_priority_food_before_service() {
        let pos = aspect_rules(Sentiment::Positive);
        assert_eq!(
            pos.apply("food and staff were wonderful"),
            Some(Aspect::GoodFood)
        );
    }
}
