use super::super::domain::Recommendation;
use super::config::RecommendationThresholds;

/// Map the headline scores to a verdict. Rules are checked in order and the
/// first match wins.
pub(crate) fn decide_recommendation(
    overall: u8,
    psychometric: u8,
    technical: u8,
    thresholds: &RecommendationThresholds,
) -> Recommendation {
    if overall >= thresholds.yes_overall
        && psychometric >= thresholds.yes_psychometric
        && technical >= thresholds.yes_technical
    {
        return Recommendation::Yes;
    }

    if overall >= thresholds.maybe_overall
        && (psychometric >= thresholds.maybe_psychometric
            || technical >= thresholds.maybe_technical)
    {
        return Recommendation::Maybe;
    }

    Recommendation::No
}
