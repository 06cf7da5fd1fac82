use crate::profiles::PreacherProfile;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Strength,
    Improvement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackItem {
    pub kind: FeedbackKind,
    pub title: String,
    pub description: String,
}

impl FeedbackItem {
    fn new(kind: FeedbackKind, title: &str, description: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub title: String,
    pub summary: String,
    pub href: String,
}

/// Mock narrative feedback framed against the benchmark profile.
pub fn feedback_for(profile: &PreacherProfile) -> Vec<FeedbackItem> {
    let name = &profile.name;
    vec![
        FeedbackItem::new(
            FeedbackKind::Strength,
            "Excellent Biblical Foundation",
            format!(
                "Your sermon demonstrates a strong foundation in scripture, with clear references and thoughtful exegesis similar to how {name} grounds their messages."
            ),
        ),
        FeedbackItem::new(
            FeedbackKind::Strength,
            "Clear Main Points",
            "The sermon has well-articulated main points that flow logically, making it easy for listeners to follow along.".to_string(),
        ),
        FeedbackItem::new(
            FeedbackKind::Improvement,
            "Consider More Illustrations",
            format!(
                "{name} typically uses 7-9 illustrations per sermon to make abstract concepts concrete. Your sermon used 6, consider adding more relatable examples."
            ),
        ),
        FeedbackItem::new(
            FeedbackKind::Improvement,
            "Enhance Transitional Phrases",
            "The transitions between your main points could be strengthened to help listeners follow your sermon's progression more easily.".to_string(),
        ),
        FeedbackItem::new(
            FeedbackKind::Improvement,
            "Increase Application Focus",
            format!(
                "While your theological exposition is strong, {name} typically dedicates 25-30% of sermon time to practical application, compared to your 15%."
            ),
        ),
    ]
}

pub fn recommended_resources(profile: &PreacherProfile) -> Vec<ResourceLink> {
    vec![
        ResourceLink {
            title: "Structure Improvement".to_string(),
            summary: format!(
                "Review \"{}'s Approach to Sermon Structure\" to improve your sermon flow.",
                profile.name
            ),
            href: "#".to_string(),
        },
        ResourceLink {
            title: "Illustration Masterclass".to_string(),
            summary: "Learn how to craft compelling illustrations that resonate with your congregation.".to_string(),
            href: "#".to_string(),
        },
        ResourceLink {
            title: "Application Techniques".to_string(),
            summary: "Practical strategies for increasing the application component in your sermons.".to_string(),
            href: "#".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{ProfileCatalog, ProfileId};

    #[test]
    fn feedback_names_the_benchmark() {
        let catalog = ProfileCatalog::standard();
        let profile = catalog.resolve(Some(&ProfileId::new("charles-spurgeon")));
        let feedback = feedback_for(profile);

        let strengths = feedback
            .iter()
            .filter(|item| item.kind == FeedbackKind::Strength)
            .count();
        assert_eq!(strengths, 2);
        assert_eq!(feedback.len() - strengths, 3);
        assert!(feedback
            .iter()
            .any(|item| item.description.contains("Charles Spurgeon")));
        assert!(recommended_resources(profile)[0]
            .summary
            .contains("Charles Spurgeon's Approach"));
    }
}
