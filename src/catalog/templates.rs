//! The template repository: static fragment pools for every caption slot,
//! hashtag sets with popularity tiers, filler noun lists, bio templates,
//! and reel section pools.
//!
//! All data is `&'static` and read-only. The catalog is built once and
//! injected into the composer, so tests can substitute a smaller one.
//! Fragments may contain `{theme}` and `{keyword}` placeholders, filled
//! in at composition time.

use crate::types::{Genre, HookType, TargetAction};

/// Hard cap on hashtags per caption.
pub const HASHTAG_MAX: usize = 30;

/// One selectable template fragment.
///
/// `genres: None` means the fragment applies to every vertical.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub text: &'static str,
    /// Shown to the caller as the "why this works" explanation.
    pub reason: &'static str,
    pub genres: Option<&'static [Genre]>,
}

impl Fragment {
    const fn any(text: &'static str, reason: &'static str) -> Self {
        Fragment { text, reason, genres: None }
    }

    const fn only(text: &'static str, reason: &'static str, genres: &'static [Genre]) -> Self {
        Fragment { text, reason, genres: Some(genres) }
    }

    pub fn applies_to(&self, genre: Genre) -> bool {
        match self.genres {
            None => true,
            Some(list) => list.contains(&genre),
        }
    }
}

/// A hashtag with its static popularity tier: 1 = big, 2 = mid, 3 = niche.
#[derive(Debug, Clone, Copy)]
pub struct Tag {
    pub name: &'static str,
    pub tier: u8,
}

const fn tag(name: &'static str, tier: u8) -> Tag {
    Tag { name, tier }
}

/// Read-only fragment repository. Built once, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct TemplateCatalog {
    pub hooks: &'static [(HookType, Fragment)],
    pub stories: &'static [Fragment],
    pub values: &'static [Fragment],
    pub ctas: &'static [(TargetAction, Fragment)],

    pub genre_tags: &'static [(Genre, &'static [Tag])],
    pub hook_tags: &'static [(HookType, &'static [Tag])],
    pub action_tags: &'static [(TargetAction, &'static [Tag])],
    pub genre_nouns: &'static [(Genre, &'static [&'static str])],

    pub bios: &'static [Fragment],
    pub reel_hooks: &'static [Fragment],
    pub reel_brolls: &'static [Fragment],
    pub reel_on_screen: &'static [Fragment],
    pub reel_ctas: &'static [Fragment],
}

impl TemplateCatalog {
    /// The built-in production catalog.
    pub fn builtin() -> Self {
        TemplateCatalog {
            hooks: HOOKS,
            stories: STORIES,
            values: VALUES,
            ctas: CTAS,
            genre_tags: GENRE_TAGS,
            hook_tags: HOOK_TAGS,
            action_tags: ACTION_TAGS,
            genre_nouns: GENRE_NOUNS,
            bios: BIOS,
            reel_hooks: REEL_HOOKS,
            reel_brolls: REEL_BROLLS,
            reel_on_screen: REEL_ON_SCREEN,
            reel_ctas: REEL_CTAS,
        }
    }

    /// Hooks matching the requested hook type and genre, in catalog order.
    pub fn hooks_for(&self, hook_type: HookType, genre: Genre) -> Vec<&Fragment> {
        self.hooks
            .iter()
            .filter(|(t, f)| *t == hook_type && f.applies_to(genre))
            .map(|(_, f)| f)
            .collect()
    }

    pub fn stories_for(&self, genre: Genre) -> Vec<&Fragment> {
        self.stories.iter().filter(|f| f.applies_to(genre)).collect()
    }

    pub fn values_for(&self, genre: Genre) -> Vec<&Fragment> {
        self.values.iter().filter(|f| f.applies_to(genre)).collect()
    }

    pub fn ctas_for(&self, action: TargetAction, genre: Genre) -> Vec<&Fragment> {
        self.ctas
            .iter()
            .filter(|(a, f)| *a == action && f.applies_to(genre))
            .map(|(_, f)| f)
            .collect()
    }

    pub fn core_tags(&self, genre: Genre) -> &'static [Tag] {
        lookup(self.genre_tags, genre)
    }

    pub fn hook_supplement(&self, hook_type: HookType) -> &'static [Tag] {
        lookup(self.hook_tags, hook_type)
    }

    pub fn action_supplement(&self, action: TargetAction) -> &'static [Tag] {
        lookup(self.action_tags, action)
    }

    /// Default filler nouns when the caller supplied no keywords.
    pub fn nouns(&self, genre: Genre) -> &'static [&'static str] {
        let list = lookup(self.genre_nouns, genre);
        if list.is_empty() {
            GENERIC_NOUNS
        } else {
            list
        }
    }
}

fn lookup<K: PartialEq, V: Copy + Default>(table: &'static [(K, V)], key: K) -> V {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or_default()
}

const GENERIC_NOUNS: &[&str] = &["routine", "results", "habits", "progress"];

// ---------------------------------------------------------------------
// Hook fragments, keyed by hook type. Reasons feed `hook_reason`.
// ---------------------------------------------------------------------

const HOOKS: &[(HookType, Fragment)] = &[
    (HookType::Curiosity, Fragment::any(
        "Nobody talks about this side of {theme}...",
        "An information gap the reader can only close by reading on",
    )),
    (HookType::Curiosity, Fragment::any(
        "The {keyword} detail everyone misses about {theme}",
        "Implies insider knowledge the reader does not have yet",
    )),
    (HookType::Curiosity, Fragment::any(
        "I tested {theme} for 30 days. The result surprised me.",
        "Withholds the outcome of a concrete experiment",
    )),
    (HookType::Curiosity, Fragment::any(
        "\u{1F440} What they never tell you before you start {theme}",
        "Promises withheld insight with a visual stop cue",
    )),
    (HookType::Controversy, Fragment::any(
        "Unpopular opinion: most advice about {theme} is wrong.",
        "A stance the reader wants to argue with or cheer for",
    )),
    (HookType::Controversy, Fragment::any(
        "Stop doing {keyword} if you care about {theme}.",
        "Direct challenge to a common habit provokes a reaction",
    )),
    (HookType::Controversy, Fragment::any(
        "Hot take: {theme} is overrated without {keyword}.",
        "Polarizing framing drives comments from both sides",
    )),
    (HookType::Story, Fragment::any(
        "A year ago I almost gave up on {theme}.",
        "Personal stakes pull the reader into a narrative arc",
    )),
    (HookType::Story, Fragment::any(
        "My first attempt at {theme} was a disaster. Here is what changed.",
        "Failure openings are relatable and promise a turnaround",
    )),
    (HookType::Story, Fragment::any(
        "I still remember the day {keyword} changed how I approach {theme}.",
        "A specific memory cue reads as authentic, not templated",
    )),
    (HookType::Number, Fragment::any(
        "5 {keyword} mistakes that quietly ruin {theme}",
        "Numbered lists set concrete expectations and feel skimmable",
    )),
    (HookType::Number, Fragment::any(
        "3 things I wish I knew before starting {theme}",
        "Small numbers promise a fast, finishable payoff",
    )),
    (HookType::Number, Fragment::any(
        "7 days of {theme}: what actually moved the needle",
        "A bounded timeframe makes the claim feel testable",
    )),
    (HookType::Question, Fragment::any(
        "What is the one thing stopping your {theme} progress?",
        "A direct question triggers a mental answer and a comment",
    )),
    (HookType::Question, Fragment::any(
        "Would you try {theme} if {keyword} wasn't an obstacle?",
        "Hypotheticals lower the stakes of replying",
    )),
    (HookType::Question, Fragment::any(
        "Quick question: how long have you been putting off {theme}?",
        "Calls out procrastination the reader recognizes in themselves",
    )),
    (HookType::Shock, Fragment::any(
        "\u{1F6A8} 90% of people get {theme} completely wrong.",
        "A stark statistic plus alarm cue interrupts the scroll",
    )),
    (HookType::Shock, Fragment::any(
        "I wasted two years on {theme} so you don't have to.",
        "A costly confession earns attention and trust",
    )),
    (HookType::Shock, Fragment::any(
        "This {keyword} myth is costing you real {theme} results.",
        "Names a concrete loss the reader may be suffering right now",
    )),
];

// ---------------------------------------------------------------------
// Story and value fragments. Mostly genre-neutral; a few are tagged.
// ---------------------------------------------------------------------

const STORIES: &[Fragment] = &[
    Fragment::any(
        "When I started with {theme}, I copied everything the big accounts did. It didn't work, because their {keyword} was built for their audience, not mine.",
        "Contrast between imitation and ownership",
    ),
    Fragment::any(
        "For months my {theme} results were flat. The turning point wasn't effort, it was changing how I approached {keyword} every single day.",
        "Plateau-then-breakthrough arc",
    ),
    Fragment::any(
        "I used to think {theme} needed expensive tools and hours of free time. Then I stripped it down to one {keyword} habit I could keep.",
        "Removes the reader's biggest objection",
    ),
    Fragment::any(
        "Last month a follower messaged me that my {theme} post changed their week. That message is why I keep sharing the unpolished version.",
        "Social proof through a small, specific moment",
    ),
    Fragment::any(
        "Everyone sees the finished post. Nobody sees the 10 failed attempts at {theme} behind it, or the {keyword} experiments that went nowhere.",
        "Behind-the-scenes honesty",
    ),
    Fragment::only(
        "My kitchen experiments with {theme} started as a way to save money. Now the {keyword} recipes are the most requested thing I share.",
        "Origin story grounded in a practical need",
        &[Genre::Food],
    ),
    Fragment::only(
        "Three clients this quarter asked me the same {theme} question. If my paying clients are stuck on {keyword}, my audience probably is too.",
        "Borrowing authority from client work",
        &[Genre::Business, Genre::Education, Genre::Technology],
    ),
    Fragment::only(
        "My training log from last year is almost embarrassing to read. But that messy {theme} start is exactly why the {keyword} advice below works.",
        "Vulnerability that sets up credibility",
        &[Genre::Fitness],
    ),
];

const VALUES: &[Fragment] = &[
    Fragment::any(
        "Here's the practical part: pick one {keyword} block, put it in your calendar, and protect it for two weeks before you judge the results of {theme}.",
        "One concrete, schedulable action",
    ),
    Fragment::any(
        "The framework is simple. Start smaller than feels useful, track one number tied to {theme}, and only add complexity when {keyword} stops improving.",
        "A three-step framework the reader can restate",
    ),
    Fragment::any(
        "Save yourself the trial and error: the 80/20 of {theme} is consistency on {keyword}, not intensity. Everything else is decoration.",
        "Names the single highest-leverage lever",
    ),
    Fragment::any(
        "Try this tonight: write down the one {keyword} decision you keep re-making about {theme}, decide it once, and stop spending willpower on it.",
        "Immediate, zero-cost experiment",
    ),
    Fragment::any(
        "A checkpoint that keeps me honest: if I can't explain my current {theme} approach in one sentence, my {keyword} plan is too complicated to follow.",
        "A self-test the reader can apply instantly",
    ),
    Fragment::any(
        "Steal my checklist: define what done looks like for {theme}, set a weekly {keyword} review, and cut anything you haven't touched in a month.",
        "Checklist format signals completeness",
    ),
];

// ---------------------------------------------------------------------
// CTA fragments, keyed by target action. Reasons feed `cta_reason`.
// ---------------------------------------------------------------------

const CTAS: &[(TargetAction, Fragment)] = &[
    (TargetAction::Save, Fragment::any(
        "Save this for the next time {theme} feels overwhelming.",
        "Framing the post as a future reference drives saves",
    )),
    (TargetAction::Save, Fragment::any(
        "Bookmark this checklist. You'll want it when you start {keyword}. \u{1F516}",
        "Names the exact future moment the save pays off",
    )),
    (TargetAction::Save, Fragment::any(
        "Keep this handy. Small {theme} reminders beat big intentions.",
        "Low-pressure utility framing",
    )),
    (TargetAction::Share, Fragment::any(
        "Send this to the friend who keeps putting off {theme}.",
        "Naming a specific recipient makes sharing feel personal",
    )),
    (TargetAction::Share, Fragment::any(
        "If this reframed {theme} for you, it will for someone you know. Pass it on.",
        "Reciprocity: the reader shares the value they received",
    )),
    (TargetAction::Comment, Fragment::any(
        "What's your biggest {theme} blocker right now? Tell me below.",
        "An open question with a low-effort first reply",
    )),
    (TargetAction::Comment, Fragment::any(
        "Team {keyword} or not? Drop your take in the comments.",
        "A binary prompt lowers the barrier to commenting",
    )),
    (TargetAction::Follow, Fragment::any(
        "Follow for a new {theme} breakdown every week.",
        "A concrete cadence promise earns the follow",
    )),
    (TargetAction::Follow, Fragment::any(
        "I share what actually works in {theme}, minus the hype. Stick around.",
        "Positions the account as a signal-over-noise filter",
    )),
    (TargetAction::Click, Fragment::any(
        "Full {theme} guide is at the link in bio.",
        "Points to a single obvious next step",
    )),
    (TargetAction::Click, Fragment::any(
        "Want the complete {keyword} template? Link in bio has it.",
        "Offers a tangible artifact behind the click",
    )),
];

// ---------------------------------------------------------------------
// Hashtag sets. Tier 1 = big, 2 = mid, 3 = niche.
// ---------------------------------------------------------------------

const GENRE_TAGS: &[(Genre, &[Tag])] = &[
    (Genre::Fitness, &[
        tag("fitness", 1), tag("workout", 1), tag("gym", 1),
        tag("fitnessmotivation", 2), tag("trainingtips", 2),
        tag("homeworkouts", 3), tag("progressnotperfection", 3),
    ]),
    (Genre::Beauty, &[
        tag("beauty", 1), tag("skincare", 1), tag("makeup", 1),
        tag("skincareroutine", 2), tag("beautytips", 2),
        tag("skinbarrier", 3), tag("cleanbeautyfinds", 3),
    ]),
    (Genre::Food, &[
        tag("food", 1), tag("foodie", 1), tag("recipe", 1),
        tag("easyrecipes", 2), tag("mealprep", 2),
        tag("weeknightdinners", 3), tag("budgetcooking", 3),
    ]),
    (Genre::Travel, &[
        tag("travel", 1), tag("wanderlust", 1), tag("travelgram", 1),
        tag("traveltips", 2), tag("solotravel", 2),
        tag("hiddengems", 3), tag("slowtravel", 3),
    ]),
    (Genre::Fashion, &[
        tag("fashion", 1), tag("style", 1), tag("ootd", 1),
        tag("styletips", 2), tag("capsulewardrobe", 2),
        tag("secondhandstyle", 3), tag("outfitformulas", 3),
    ]),
    (Genre::Business, &[
        tag("business", 1), tag("entrepreneur", 1), tag("marketing", 1),
        tag("smallbusinesstips", 2), tag("solopreneur", 2),
        tag("founderjourney", 3), tag("bootstrapped", 3),
    ]),
    (Genre::Education, &[
        tag("education", 1), tag("learning", 1), tag("study", 1),
        tag("studytips", 2), tag("edutok", 2),
        tag("learninpublic", 3), tag("microlearning", 3),
    ]),
    (Genre::Technology, &[
        tag("tech", 1), tag("technology", 1), tag("coding", 1),
        tag("techtips", 2), tag("programming", 2),
        tag("buildinpublic", 3), tag("indiehackers", 3),
    ]),
    (Genre::Parenting, &[
        tag("parenting", 1), tag("momlife", 1), tag("dadlife", 1),
        tag("parentingtips", 2), tag("toddlerlife", 2),
        tag("gentleparenting", 3), tag("realmomlife", 3),
    ]),
    (Genre::Lifestyle, &[
        tag("lifestyle", 1), tag("selfcare", 1), tag("wellness", 1),
        tag("dailyroutine", 2), tag("intentionalliving", 2),
        tag("slowliving", 3), tag("habitstacking", 3),
    ]),
];

const HOOK_TAGS: &[(HookType, &[Tag])] = &[
    (HookType::Curiosity, &[tag("didyouknow", 2), tag("behindthescenes", 3)]),
    (HookType::Controversy, &[tag("unpopularopinion", 2), tag("hottake", 3)]),
    (HookType::Story, &[tag("storytime", 2), tag("myjourney", 3)]),
    (HookType::Number, &[tag("tipsandtricks", 2), tag("listpost", 3)]),
    (HookType::Question, &[tag("letstalk", 2), tag("communityfirst", 3)]),
    (HookType::Shock, &[tag("truthbomb", 2), tag("mythbusting", 3)]),
];

const ACTION_TAGS: &[(TargetAction, &[Tag])] = &[
    (TargetAction::Save, &[tag("savethis", 2), tag("referencepost", 3)]),
    (TargetAction::Share, &[tag("sharethis", 2), tag("tagafriend", 3)]),
    (TargetAction::Comment, &[tag("discussion", 2), tag("tellmebelow", 3)]),
    (TargetAction::Follow, &[tag("followformore", 2), tag("newhere", 3)]),
    (TargetAction::Click, &[tag("linkinbio", 2), tag("freeguide", 3)]),
];

const GENRE_NOUNS: &[(Genre, &[&str])] = &[
    (Genre::Fitness, &["training", "recovery", "strength", "consistency"]),
    (Genre::Beauty, &["routine", "glow", "ingredients", "texture"]),
    (Genre::Food, &["flavor", "prep", "ingredients", "leftovers"]),
    (Genre::Travel, &["itinerary", "packing", "budget", "offseason"]),
    (Genre::Fashion, &["fit", "layering", "basics", "proportions"]),
    (Genre::Business, &["offer", "audience", "pricing", "systems"]),
    (Genre::Education, &["practice", "recall", "notes", "focus"]),
    (Genre::Technology, &["workflow", "tooling", "automation", "shipping"]),
    (Genre::Parenting, &["routines", "boundaries", "play", "patience"]),
    (Genre::Lifestyle, &["mornings", "habits", "energy", "balance"]),
];

// ---------------------------------------------------------------------
// Bio templates and reel section pools.
// ---------------------------------------------------------------------

const BIOS: &[Fragment] = &[
    Fragment::any(
        "Helping you make {theme} simple | {keyword} without the overwhelm",
        "Outcome first, objection removed second",
    ),
    Fragment::any(
        "{theme} tips that fit real life \u{2193} start with the pinned post",
        "Directs the visitor to one next step",
    ),
    Fragment::any(
        "I document my {theme} journey so you can skip my mistakes",
        "Documentation framing builds trust faster than expertise claims",
    ),
    Fragment::any(
        "Weekly {keyword} breakdowns for people serious about {theme}",
        "A cadence promise qualifies the right followers",
    ),
    Fragment::any(
        "{theme}, explained like a friend would | new post every week",
        "Tone promise plus cadence promise",
    ),
];

const REEL_HOOKS: &[Fragment] = &[
    Fragment::any(
        "POV: you finally figured out {theme}",
        "First-person framing drops the viewer into the scene",
    ),
    Fragment::any(
        "Watch this before you spend another week on {theme}",
        "A time-cost warning earns the first three seconds",
    ),
    Fragment::any(
        "The {keyword} trick I use for {theme}, in 20 seconds",
        "A concrete duration promise keeps viewers to the end",
    ),
    Fragment::any(
        "Nobody shows the boring part of {theme}. I will.",
        "Anti-polish positioning stands out in a polished feed",
    ),
];

const REEL_BROLLS: &[Fragment] = &[
    Fragment::any(
        "Close-up of your hands doing the {keyword} step, natural light, no talking",
        "Process shots retain better than talking heads",
    ),
    Fragment::any(
        "Quick cuts: before state, the messy middle, the {theme} result",
        "A three-beat visual arc mirrors the caption story",
    ),
    Fragment::any(
        "Screen recording of the exact {keyword} setup, sped up 2x",
        "Showing the real tool builds credibility",
    ),
    Fragment::any(
        "Walking shot while the voiceover makes the main {theme} point",
        "Movement holds attention during explanation",
    ),
];

const REEL_ON_SCREEN: &[Fragment] = &[
    Fragment::any(
        "the {keyword} step everyone skips",
        "Text overlay restates the hook for sound-off viewers",
    ),
    Fragment::any(
        "day 1 vs day 30 of {theme}",
        "A comparison caption invites the viewer to judge",
    ),
    Fragment::any(
        "save this {theme} checklist",
        "On-screen instruction doubles the CTA",
    ),
    Fragment::any(
        "3 rules I never break for {theme}",
        "Numbered overlay sets skimmable expectations",
    ),
];

const REEL_CTAS: &[Fragment] = &[
    Fragment::any(
        "Comment '{keyword}' and I'll send you the full breakdown",
        "A keyword comment gate drives replies and reach",
    ),
    Fragment::any(
        "Follow for part two of this {theme} series",
        "Open loops convert viewers into followers",
    ),
    Fragment::any(
        "Save this so the algorithm shows you more {theme}",
        "Gives the viewer a selfish reason to save",
    ),
    Fragment::any(
        "Share this with someone starting {theme} this month",
        "Timely framing makes the share feel useful, not spammy",
    ),
];
