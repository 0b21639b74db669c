use super::super::domain::Recommendation;

/// Templated prose attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Advice {
    pub feedback: String,
    pub next_steps: Vec<String>,
    pub career_paths: Vec<String>,
}

const YES_NEXT_STEPS: [&str; 5] = [
    "Enroll in Google Ads certification courses",
    "Practice with Google Ads demo accounts",
    "Study bid management and keyword research strategies",
    "Build a portfolio with sample campaigns",
    "Network with digital marketing professionals",
];

const YES_CAREER_PATHS: [&str; 5] = [
    "PPC Specialist",
    "SEM Analyst",
    "Digital Campaign Manager",
    "Paid Media Strategist",
    "Performance Marketing Specialist",
];

const MAYBE_NEXT_STEPS: [&str; 5] = [
    "Take foundational digital marketing courses",
    "Practice mathematical and analytical skills",
    "Start with Google Analytics certification",
    "Volunteer to manage small advertising campaigns",
    "Shadow experienced PPC professionals",
];

const MAYBE_CAREER_PATHS: [&str; 4] = [
    "Junior PPC Analyst",
    "Digital Marketing Assistant",
    "Marketing Data Coordinator",
    "Entry-level Campaign Specialist",
];

const NO_NEXT_STEPS: [&str; 5] = [
    "Explore SEO and content marketing opportunities",
    "Consider social media marketing roles",
    "Look into marketing analytics positions",
    "Develop general digital marketing knowledge",
    "Identify your core interests and strengths",
];

const NO_CAREER_PATHS: [&str; 5] = [
    "SEO Specialist",
    "Content Marketing Coordinator",
    "Social Media Manager",
    "Marketing Analytics Associate",
    "Digital Marketing Generalist",
];

/// Below this, the `maybe` feedback calls out the weaker area.
const DEVELOPMENT_CUTOFF: u8 = 60;

pub(crate) fn personalized_advice(
    recommendation: Recommendation,
    psychometric: u8,
    technical: u8,
) -> Advice {
    match recommendation {
        Recommendation::Yes => Advice {
            feedback: format!(
                "Excellent! Your assessment shows strong alignment with PPC/SEM specialist roles. \
                 Your analytical mindset ({psychometric}% psychometric fit) and technical aptitude \
                 ({technical}% technical score) indicate you have the right foundation for success \
                 in this field."
            ),
            next_steps: owned(&YES_NEXT_STEPS),
            career_paths: owned(&YES_CAREER_PATHS),
        },
        Recommendation::Maybe => {
            let mut feedback = String::from(
                "You show potential for PPC/SEM roles, but there are areas for development. ",
            );
            if psychometric < DEVELOPMENT_CUTOFF {
                feedback.push_str(
                    "Consider building stronger analytical habits and attention to detail. ",
                );
            }
            if technical < DEVELOPMENT_CUTOFF {
                feedback.push_str("Focus on strengthening your technical and numerical skills. ");
            }
            feedback.push_str("With dedicated learning, you could succeed in this field.");

            Advice {
                feedback,
                next_steps: owned(&MAYBE_NEXT_STEPS),
                career_paths: owned(&MAYBE_CAREER_PATHS),
            }
        }
        Recommendation::No => Advice {
            feedback: "Based on your assessment results, PPC/SEM might not be the ideal fit for \
                       your current skill set and interests. However, there are related marketing \
                       roles that might better align with your strengths."
                .to_string(),
            next_steps: owned(&NO_NEXT_STEPS),
            career_paths: owned(&NO_CAREER_PATHS),
        },
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
