use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum_macros::{Display, EnumIter, EnumString};

/// Closed label set usable by the trainer, evaluator and propagator.
///
/// Implementations map every variant to a dense index in
/// `0..CLASS_COUNT`; the classifier and the confusion matrix work purely in
/// index space and stay generic over which pass (sentiment or aspect) is
/// running.
pub trait LabelKind: Copy + Eq + Debug + std::fmt::Display {
    const CLASS_COUNT: usize;

    fn index(self) -> usize;

    fn from_index(index: usize) -> Option<Self>;

    /// Display names for all variants, in index order. Used by evaluation
    /// reports so a class absent from the data still gets a row.
    fn class_names() -> Vec<String>;
}

/// Coarse review polarity. "Unlabeled" is `Option::None`, never a variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Sentiment {
    #[strum(serialize = "Positive Review")]
    Positive,
    #[strum(serialize = "Negative Review")]
    Negative,
}

impl LabelKind for Sentiment {
    const CLASS_COUNT: usize = 2;

    fn index(self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Negative => 1,
        }
    }

    fn from_index(index: usize) -> Option<Sentiment> {
        match index {
            0 => Some(Sentiment::Positive),
            1 => Some(Sentiment::Negative),
            _ => None,
        }
    }

    fn class_names() -> Vec<String> {
        use strum::IntoEnumIterator;
        Sentiment::iter().map(|s| s.to_string()).collect()
    }
}

/// Fine-grained aspect category refining a coarse sentiment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Aspect {
    #[strum(serialize = "Good Food")]
    GoodFood,
    #[strum(serialize = "Bad Food")]
    BadFood,
    #[strum(serialize = "Good Service")]
    GoodService,
    #[strum(serialize = "Bad Service")]
    BadService,
    Affordable,
    Overpriced,
    Other,
}

impl LabelKind for Aspect {
    const CLASS_COUNT: usize = 7;

    fn index(self) -> usize {
        match self {
            Aspect::GoodFood => 0,
            Aspect::BadFood => 1,
            Aspect::GoodService => 2,
            Aspect::BadService => 3,
            Aspect::Affordable => 4,
            Aspect::Overpriced => 5,
            Aspect::Other => 6,
        }
    }

    fn from_index(index: usize) -> Option<Aspect> {
        match index {
            0 => Some(Aspect::GoodFood),
            1 => Some(Aspect::BadFood),
            2 => Some(Aspect::GoodService),
            3 => Some(Aspect::BadService),
            4 => Some(Aspect::Affordable),
            5 => Some(Aspect::Overpriced),
            6 => Some(Aspect::Other),
            _ => None,
        }
    }

    fn class_names() -> Vec<String> {
        use strum::IntoEnumIterator;
        Aspect::iter().map(|a| a.to_string()).collect()
    }
}

/// How a label was assigned. Keyword labels take precedence and are never
/// overwritten by the classifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum LabelSource {
    Keyword,
    Model,
}

/// A label together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation<L> {
    pub label: L,
    pub source: LabelSource,
}

impl<L> Annotation<L> {
    pub fn keyword(label: L) -> Annotation<L> {
        Annotation {
            label,
            source: LabelSource::Keyword,
        }
    }

    pub fn model(label: L) -> Annotation<L> {
        Annotation {
            label,
            source: LabelSource::Model,
        }
    }
}
