//! Helper Functions: Deterministic Data Generation (NO MOCKS)

use moodgate_engine::mapper::{BaselineRatings, RatingScale};
use moodgate_engine::{Classification, ClassifyRequest, Engine};

/// Every rating combination on the 7-point scale (7^6 entries).
pub fn rating_grid() -> impl Iterator<Item = BaselineRatings> {
    let steps = || RatingScale::MIN..=RatingScale::MAX;
    steps().flat_map(move |mood| {
        steps().flat_map(move |energy| {
            steps().flat_map(move |tension| {
                steps().flat_map(move |clarity| {
                    steps().flat_map(move |control| {
                        steps().map(move |social| {
                            BaselineRatings::new(mood, energy, tension, clarity, control, social)
                        })
                    })
                })
            })
        })
    })
}

/// Classify ratings with the default engine, panicking on any error.
pub fn classify(engine: &Engine, ratings: BaselineRatings) -> Classification {
    engine
        .classify(&ClassifyRequest::from_ratings(ratings))
        .unwrap_or_else(|e| panic!("classify failed for {:?}: {}", ratings, e))
}

/// Low mood and energy, high tension, low control.
pub fn low_mood_high_tension() -> BaselineRatings {
    BaselineRatings::new(2, 2, 6, 3, 2, 3)
}

/// Midpoint everywhere, clarity at its minimum.
pub fn min_clarity_midpoint() -> BaselineRatings {
    let mut ratings = BaselineRatings::midpoint();
    ratings.clarity = Some(RatingScale::MIN);
    ratings
}
