//! Static Cafe Facts
//!
//! Contact details, opening hours, and the our-story chapters rendered by the
//! page templates. All process-wide constants, same lifecycle as the menu
//! catalog: authored once, never mutated.

/// Contact and location details
#[derive(Debug, Clone, Copy)]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub locality: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub instagram_handle: &'static str,
    pub instagram_url: &'static str,
    pub hours_days: &'static str,
    pub hours_times: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Sukino Cafe & Kitchen",
    tagline: "Where calm meets connection",
    locality: "Banashankari Stage II",
    address: "Banashankari, Bengaluru, Karnataka 560070",
    phone: "+91 98804 98489",
    phone_href: "tel:+919880498489",
    instagram_handle: "sukino.blr",
    instagram_url: "https://www.instagram.com/sukino.blr/",
    hours_days: "Monday - Sunday",
    hours_times: "9 AM – 11 PM",
};

/// Layout hint for a story chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterPosition {
    Left,
    Right,
    Center,
}

impl ChapterPosition {
    /// CSS class suffix used by the story template
    pub fn css_class(&self) -> &'static str {
        match self {
            ChapterPosition::Left => "chapter-left",
            ChapterPosition::Right => "chapter-right",
            ChapterPosition::Center => "chapter-center",
        }
    }
}

/// One paragraph of the our-story page
#[derive(Debug, Clone, Copy)]
pub struct StoryChapter {
    pub content: &'static str,
    pub position: ChapterPosition,
    pub highlight: bool,
}

pub const STORY_CHAPTERS: &[StoryChapter] = &[
    StoryChapter {
        content: "Sukino is a minimalist cafe that is more than just a space for coffee; it's an intimate homage to a love story. Founded by a couple whose journey intertwines with the values of peace, unity, and warmth.",
        position: ChapterPosition::Left,
        highlight: false,
    },
    StoryChapter {
        content: "Sukino embraces the beauty of simplicity and balance, creating a haven for those seeking a moment of calm and connection.",
        position: ChapterPosition::Right,
        highlight: false,
    },
    StoryChapter {
        content: "In the heart of Banashankri 2nd Stage, where the streets hum with memories and old trees whisper stories, Sukino was born — not just as a café, but as a love letter.",
        position: ChapterPosition::Left,
        highlight: false,
    },
    StoryChapter {
        content: "It all began with a couple and a dream. Two souls who believed in simple joys — slow mornings, handwritten notes, rain on rooftops, and the magic of shared coffee. Amidst life's chaos, they found peace in brewing cups together, long before the café had walls or windows.",
        position: ChapterPosition::Right,
        highlight: false,
    },
    StoryChapter {
        content: "Sukino isn't just about coffee. It's about conversations that run deep, about strangers becoming regulars, about rainy days made better with cinnamon rolls and someone remembering your usual.",
        position: ChapterPosition::Left,
        highlight: false,
    },
    StoryChapter {
        content: "This café was built on love — and it waits to share a little bit of that love with every person who walks in.",
        position: ChapterPosition::Center,
        highlight: true,
    },
];
