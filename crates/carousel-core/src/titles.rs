#![forbid(unsafe_code)]

//! Mobile headline table.
//!
//! On tablet and narrow viewports the hero headline follows the active
//! slide. Index 0 and anything outside the table fall back to the brand
//! headline.

/// Subtitle shared by every slide.
pub const SUBTITLE: &str =
    "Место, где вы выбираете заботу о себе как стиль жизни. Эстетично, профессионально и легко";
pub const SUBTITLE_FONT_SIZE_PX: u32 = 14;
pub const SUBTITLE_MARGIN_TOP_PX: u32 = 24;

const TITLES: [(&str, u32); 7] = [
    (
        "Ангел Concept— центр премиального ухода и косметологии в Ставрополе",
        60,
    ),
    ("Косметология: уходы, инъекции, лифтинг", 180),
    ("Коррекция фигуры и силуэта", 220),
    ("SPA и европейские массажи", 220),
    ("Велнес-программы и флоатация", 220),
    ("Beauty-услуги: волосы, ногти, макияж", 180),
    ("Тайские и балийские массажи", 180),
];

/// Inline style written to a hero element. Hero styles always carry
/// `!important` so they win over the page stylesheet's pseudo-content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

fn decl(property: &'static str, value: impl Into<String>) -> Declaration {
    Declaration {
        property,
        value: value.into(),
    }
}

fn px(value: u32) -> String {
    format!("{value}px")
}

/// Content and layout written to the hero block for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Top margin of the progress bar, in CSS pixels.
    pub progress_offset_px: u32,
}

/// Number of entries in the headline table.
pub const TITLE_COUNT: usize = TITLES.len();

#[must_use]
pub fn title_for(index: usize) -> TitleCard {
    let (title, progress_offset_px) = TITLES.get(index).copied().unwrap_or(TITLES[0]);
    TitleCard {
        title,
        subtitle: SUBTITLE,
        progress_offset_px,
    }
}

impl TitleCard {
    /// Styles for the headline element.
    #[must_use]
    pub fn title_styles(&self) -> [Declaration; 1] {
        [decl("content", "none")]
    }

    /// Styles for the shared subtitle.
    #[must_use]
    pub fn subtitle_styles(&self) -> [Declaration; 3] {
        [
            decl("content", "none"),
            decl("font-size", px(SUBTITLE_FONT_SIZE_PX)),
            decl("margin-top", px(SUBTITLE_MARGIN_TOP_PX)),
        ]
    }

    /// Styles for the progress bar under the headline.
    #[must_use]
    pub fn progress_bar_styles(&self) -> [Declaration; 1] {
        [decl("margin-top", px(self.progress_offset_px))]
    }
}
