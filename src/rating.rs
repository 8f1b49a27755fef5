use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Unrated,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl RatingTier {
    pub fn for_rating(rating: Option<f64>) -> Self {
        match rating {
            Some(r) if r >= 2500.0 => RatingTier::Legendary,
            Some(r) if r >= 2000.0 => RatingTier::Epic,
            Some(r) if r >= 1500.0 => RatingTier::Rare,
            Some(r) if r >= 1.0 => RatingTier::Uncommon,
            _ => RatingTier::Unrated,
        }
    }

    pub fn color(self) -> Color {
        match self {
            RatingTier::Legendary => Color::Rgb(0xff, 0x80, 0x00),
            RatingTier::Epic => Color::Rgb(0xa3, 0x35, 0xee),
            RatingTier::Rare => Color::Rgb(0x00, 0x70, 0xdd),
            RatingTier::Uncommon => Color::Rgb(0x1e, 0xff, 0x00),
            RatingTier::Unrated => Color::Rgb(0xcc, 0xcc, 0xcc),
        }
    }
}

/// What the rating line shows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RatingDisplay {
    #[default]
    NoCharacter,
    Loading,
    Unavailable,
    Score(f64),
}

impl RatingDisplay {
    pub fn from_rating(rating: Option<f64>) -> Self {
        rating.map_or(RatingDisplay::Unavailable, RatingDisplay::Score)
    }

    pub fn text(self) -> String {
        let value = match self {
            RatingDisplay::NoCharacter => "-".to_string(),
            RatingDisplay::Loading => "...".to_string(),
            RatingDisplay::Unavailable => "No rating".to_string(),
            RatingDisplay::Score(score) => format!("{score:.1}"),
        };
        format!("Mythic+ Rating: {value}")
    }

    pub fn tier(self) -> RatingTier {
        match self {
            RatingDisplay::Score(score) => RatingTier::for_rating(Some(score)),
            _ => RatingTier::Unrated,
        }
    }
}
