mod labeler;
mod rules;

pub use labeler::WeakLabeler;
pub use rules::{KeywordRule, RuleTable, aspect_rules, sentiment_rules};
