use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use strum_macros::{Display, EnumIter, EnumString};

/// One ingested review record. Immutable once created; the pipeline annotates
/// documents through separate label columns, never by mutating them.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub restaurant: String,
    pub reviewer: String,
    pub text: String,
    pub rating: u8,
    pub posted_at: NaiveDateTime,
}

impl Document {
    pub fn new(
        restaurant: String,
        reviewer: String,
        text: String,
        rating: u8,
        posted_at: NaiveDateTime,
    ) -> Document {
        Document {
            restaurant,
            reviewer,
            text,
            rating,
            posted_at,
        }
    }

    pub fn hour(&self) -> u32 {
        self.posted_at.hour()
    }

    pub fn weekday(&self) -> Weekday {
        self.posted_at.weekday()
    }

    pub fn satisfaction(&self) -> Satisfaction {
        Satisfaction::from_rating(self.rating)
    }
}

/// Rating bucket derived from the 1-5 star score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Satisfaction {
    Bad,
    Moderate,
    Good,
    Excellent,
}

impl Satisfaction {
    /// Ratings at or below 2 are `Bad`, 3 is `Moderate`, 4 is `Good`,
    /// everything above is `Excellent`.
    pub fn from_rating(rating: u8) -> Satisfaction {
        match rating {
            0..=2 => Satisfaction::Bad,
            3 => Satisfaction::Moderate,
            4 => Satisfaction::Good,
            _ => Satisfaction::Excellent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn doc(rating: u8) -> Document {
        Document::new(
            "Diner".into(),
            "Ana".into(),
            "great food".into(),
            rating,
            NaiveDate::from_ymd_opt(2021, 7, 14)
                .unwrap()
                .and_hms_opt(19, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn satisfaction_buckets_match_rating() {
        assert_eq!(Satisfaction::from_rating(1), Satisfaction::Bad);
        assert_eq!(Satisfaction::from_rating(2), Satisfaction::Bad);
        assert_eq!(Satisfaction::from_rating(3), Satisfaction::Moderate);
        assert_eq!(Satisfaction::from_rating(4), Satisfaction::Good);
        assert_eq!(Satisfaction::from_rating(5), Satisfaction::Excellent);
    }

    #[test]
    fn derived_time_fields() {
        let d = doc(4);
        assert_eq!(d.hour(), 19);
        assert_eq!(d.weekday(), Weekday::Wed);
        assert_eq!(d.satisfaction(), Satisfaction::Good);
    }
}
