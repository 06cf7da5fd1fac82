use super::domain::{PreacherProfile, PreachingCategory, PreachingEra, ProfileId};

struct SeedProfile {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    categories: &'static [PreachingCategory],
    strengths: &'static [&'static str],
    era: PreachingEra,
}

use PreachingCategory::*;

const SEED: &[SeedProfile] = &[
    SeedProfile {
        id: "john-piper",
        name: "John Piper",
        description: "Passionate expository preaching centered on the supremacy of God in all things, marked by careful exegesis and a call to delight in God.",
        categories: &[Expository, Theological],
        strengths: &["Exegetical depth", "Doctrinal clarity", "Passionate delivery"],
        era: PreachingEra::Contemporary,
    },
    SeedProfile {
        id: "billy-graham",
        name: "Billy Graham",
        description: "Clear and urgent evangelistic messages with a simple gospel presentation and a direct invitation to respond.",
        categories: &[Evangelistic, Topical],
        strengths: &["Gospel clarity", "Invitation", "Accessible language"],
        era: PreachingEra::TwentiethCentury,
    },
    SeedProfile {
        id: "charles-spurgeon",
        name: "Charles Spurgeon",
        description: "The Prince of Preachers, known for vivid illustrations, rich imagery and Christ-centered sermons delivered with warmth.",
        categories: &[Expository, Evangelistic, Narrative],
        strengths: &["Illustrations", "Imagery", "Christ-centered focus"],
        era: PreachingEra::NineteenthCentury,
    },
    SeedProfile {
        id: "tim-keller",
        name: "Tim Keller",
        description: "Thoughtful engagement with culture and doubt, connecting the gospel to the questions of skeptics in an urban context.",
        categories: &[Apologetic, Cultural, Expository],
        strengths: &["Cultural engagement", "Apologetics", "Gospel application"],
        era: PreachingEra::Contemporary,
    },
    SeedProfile {
        id: "martyn-lloyd-jones",
        name: "Martyn Lloyd-Jones",
        description: "Logic on fire: methodical verse-by-verse exposition with a physician's diagnostic precision and deep spiritual urgency.",
        categories: &[Expository, Theological],
        strengths: &["Logical structure", "Diagnostic application", "Spiritual urgency"],
        era: PreachingEra::TwentiethCentury,
    },
    SeedProfile {
        id: "tony-evans",
        name: "Tony Evans",
        description: "Memorable storytelling and practical kingdom application, using everyday analogies to make biblical truth concrete.",
        categories: &[Narrative, Practical, Topical],
        strengths: &["Storytelling", "Practical application", "Memorable phrasing"],
        era: PreachingEra::Contemporary,
    },
    SeedProfile {
        id: "jonathan-edwards",
        name: "Jonathan Edwards",
        description: "Careful theological argument joined to searching application, preaching that aims at both the mind and the affections.",
        categories: &[Theological, Evangelistic],
        strengths: &["Theological rigor", "Affectional appeal", "Sustained argument"],
        era: PreachingEra::Historical,
    },
    SeedProfile {
        id: "alistair-begg",
        name: "Alistair Begg",
        description: "Warm, conversational expository preaching that keeps the text central while applying it plainly to ordinary life.",
        categories: &[Expository, Practical],
        strengths: &["Conversational tone", "Textual focus", "Plain application"],
        era: PreachingEra::Contemporary,
    },
];

pub(crate) fn standard_profiles() -> Vec<PreacherProfile> {
    SEED.iter()
        .map(|seed| PreacherProfile {
            id: ProfileId::new(seed.id),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            categories: seed.categories.iter().copied().collect(),
            strengths: seed.strengths.iter().map(|s| s.to_string()).collect(),
            era: seed.era,
            image_url: format!("/images/profiles/{}.jpg", seed.id),
        })
        .collect()
}
