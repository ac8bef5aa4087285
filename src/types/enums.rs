use serde::{Deserialize, Serialize};

/// The ten fixed content verticals. The catalog carries genre-specific
/// hashtag sets and filler noun lists for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Fitness,
    Beauty,
    Food,
    Travel,
    Fashion,
    Business,
    Education,
    Technology,
    Parenting,
    Lifestyle,
}

impl Genre {
    pub const ALL: [Genre; 10] = [
        Genre::Fitness,
        Genre::Beauty,
        Genre::Food,
        Genre::Travel,
        Genre::Fashion,
        Genre::Business,
        Genre::Education,
        Genre::Technology,
        Genre::Parenting,
        Genre::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fitness => "fitness",
            Genre::Beauty => "beauty",
            Genre::Food => "food",
            Genre::Travel => "travel",
            Genre::Fashion => "fashion",
            Genre::Business => "business",
            Genre::Education => "education",
            Genre::Technology => "technology",
            Genre::Parenting => "parenting",
            Genre::Lifestyle => "lifestyle",
        }
    }
}

/// Opening-line strategy for a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookType {
    Curiosity,
    Controversy,
    Story,
    Number,
    Question,
    Shock,
}

impl HookType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookType::Curiosity => "curiosity",
            HookType::Controversy => "controversy",
            HookType::Story => "story",
            HookType::Number => "number",
            HookType::Question => "question",
            HookType::Shock => "shock",
        }
    }
}

/// The engagement action a post is optimized for. Drives CTA selection
/// and the supplementary hashtag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAction {
    Save,
    Share,
    Comment,
    Follow,
    Click,
}

impl TargetAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetAction::Save => "save",
            TargetAction::Share => "share",
            TargetAction::Comment => "comment",
            TargetAction::Follow => "follow",
            TargetAction::Click => "click",
        }
    }
}

/// Post format segment used for benchmark lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    Reel,
    Carousel,
    Image,
    Story,
}

impl PostFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostFormat::Reel => "reel",
            PostFormat::Carousel => "carousel",
            PostFormat::Image => "image",
            PostFormat::Story => "story",
        }
    }
}

/// Content-strategy category used to diversify a posting plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentPillar {
    Education,
    Inspiration,
    Connection,
}

/// Profile checklist grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    Name,
    Bio,
    Cta,
    Photo,
    Highlights,
    Pinned,
}

impl CheckCategory {
    pub const ALL: [CheckCategory; 6] = [
        CheckCategory::Name,
        CheckCategory::Bio,
        CheckCategory::Cta,
        CheckCategory::Photo,
        CheckCategory::Highlights,
        CheckCategory::Pinned,
    ];
}
