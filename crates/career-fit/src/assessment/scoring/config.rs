use super::super::domain::{Category, Subcategory, WiscarDimension};

/// Fixed weights and cut-offs of the scoring rubric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRubric {
    pub psychometric_weight: f64,
    pub technical_weight: f64,
    pub wiscar_weight: f64,
    /// Top of the Likert scale; every percentage is scaled against it.
    pub scale_max: f64,
    /// WISCAR points for a keyed objective answer.
    pub objective_full_credit: f64,
    /// WISCAR points for any other objective answer.
    pub objective_floor_credit: f64,
    pub thresholds: RecommendationThresholds,
}

/// Cut-offs applied in order: `yes` first, then `maybe`, otherwise `no`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationThresholds {
    pub yes_overall: u8,
    pub yes_psychometric: u8,
    pub yes_technical: u8,
    pub maybe_overall: u8,
    pub maybe_psychometric: u8,
    pub maybe_technical: u8,
}

pub const STANDARD_RUBRIC: ScoringRubric = ScoringRubric {
    psychometric_weight: 0.3,
    technical_weight: 0.4,
    wiscar_weight: 0.3,
    scale_max: 5.0,
    objective_full_credit: 5.0,
    objective_floor_credit: 1.0,
    thresholds: RecommendationThresholds {
        yes_overall: 75,
        yes_psychometric: 70,
        yes_technical: 60,
        maybe_overall: 60,
        maybe_psychometric: 60,
        maybe_technical: 70,
    },
};

impl Default for ScoringRubric {
    fn default() -> Self {
        STANDARD_RUBRIC
    }
}

/// Routing of (category, subcategory) pairs into WISCAR dimensions.
///
/// Only WISCAR-category items are routed; a WISCAR logical-reasoning item
/// shares the cognitive pool. Pairs missing from the table feed nothing.
pub const WISCAR_ROUTES: &[(Category, Subcategory, WiscarDimension)] = &[
    (Category::Wiscar, Subcategory::Will, WiscarDimension::Will),
    (Category::Wiscar, Subcategory::Interest, WiscarDimension::Interest),
    (Category::Wiscar, Subcategory::Skill, WiscarDimension::Skill),
    (Category::Wiscar, Subcategory::Cognitive, WiscarDimension::Cognitive),
    (
        Category::Wiscar,
        Subcategory::LogicalReasoning,
        WiscarDimension::Cognitive,
    ),
    (Category::Wiscar, Subcategory::Ability, WiscarDimension::Ability),
    (Category::Wiscar, Subcategory::RealWorld, WiscarDimension::RealWorld),
];

pub fn wiscar_dimension_for(
    category: Category,
    subcategory: &Subcategory,
) -> Option<WiscarDimension> {
    WISCAR_ROUTES
        .iter()
        .find(|(route_category, route_subcategory, _)| {
            *route_category == category && route_subcategory == subcategory
        })
        .map(|(_, _, dimension)| *dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dimension_has_a_route() {
        for dimension in WiscarDimension::ALL {
            assert!(
                WISCAR_ROUTES.iter().any(|(_, _, routed)| *routed == dimension),
                "{} has no source",
                dimension.label()
            );
        }
    }

    #[test]
    fn psychometric_interest_does_not_feed_wiscar() {
        assert_eq!(
            wiscar_dimension_for(Category::Psychometric, &Subcategory::Interest),
            None
        );
        assert_eq!(
            wiscar_dimension_for(Category::Wiscar, &Subcategory::Interest),
            Some(WiscarDimension::Interest)
        );
    }

    #[test]
    fn technical_items_never_feed_wiscar() {
        for subcategory in [
            Subcategory::LogicalReasoning,
            Subcategory::Numerical,
            Subcategory::DomainKnowledge,
        ] {
            assert_eq!(wiscar_dimension_for(Category::Technical, &subcategory), None);
        }
        assert_eq!(
            wiscar_dimension_for(Category::Wiscar, &Subcategory::LogicalReasoning),
            Some(WiscarDimension::Cognitive)
        );
    }

    #[test]
    fn unknown_subcategories_are_unrouted() {
        let typo = Subcategory::Other("cognitve".to_string());
        assert_eq!(wiscar_dimension_for(Category::Wiscar, &typo), None);
    }

    #[test]
    fn weights_sum_to_one() {
        let rubric = ScoringRubric::default();
        let total = rubric.psychometric_weight + rubric.technical_weight + rubric.wiscar_weight;
        assert!((total - 1.0).abs() < 1e-9);
    }
}
