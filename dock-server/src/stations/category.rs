//! Station health classification.

use serde::Serialize;

use super::MergedStation;

/// Health category assigned to every station for display.
///
/// Serialized in SCREAMING_SNAKE_CASE (`"OUT_OF_ORDER"` etc.), which is
/// what the map frontend keys its layer groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    ComingSoon,
    Empty,
    Low,
    Normal,
    OutOfOrder,
}

impl Category {
    /// All categories, in legend display order.
    pub const ALL: [Category; 5] = [
        Category::OutOfOrder,
        Category::ComingSoon,
        Category::Empty,
        Category::Low,
        Category::Normal,
    ];

    /// Bikes-available threshold below which a renting station is `Low`.
    pub const LOW_THRESHOLD: u32 = 5;

    /// Classify a merged station.
    ///
    /// This is a strict priority chain; the first matching rule wins,
    /// and the order resolves overlapping conditions. A station with
    /// zero bikes that is also not renting is `Empty`, not `OutOfOrder`,
    /// because the zero-bikes rule is checked first.
    pub fn classify(station: &MergedStation) -> Category {
        if !station.is_installed {
            Category::ComingSoon
        } else if station.num_bikes_available == 0 {
            Category::Empty
        } else if !station.is_renting {
            Category::OutOfOrder
        } else if station.num_bikes_available < Self::LOW_THRESHOLD {
            Category::Low
        } else {
            Category::Normal
        }
    }

    /// Stable wire name, matching the JSON serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ComingSoon => "COMING_SOON",
            Category::Empty => "EMPTY",
            Category::Low => "LOW",
            Category::Normal => "NORMAL",
            Category::OutOfOrder => "OUT_OF_ORDER",
        }
    }

    /// Legend line label.
    pub fn legend_label(&self) -> &'static str {
        match self {
            Category::ComingSoon => "Stations Coming Soon",
            Category::Empty => "Empty Stations",
            Category::Low => "Low Stations",
            Category::Normal => "Healthy Stations",
            Category::OutOfOrder => "Out of Order Stations",
        }
    }

    /// CSS class used by the legend markup.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::ComingSoon => "coming-soon",
            Category::Empty => "empty",
            Category::Low => "low",
            Category::Normal => "healthy",
            Category::OutOfOrder => "out-of-order",
        }
    }
}

/// Per-category station tallies for the legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    #[serde(rename = "COMING_SOON")]
    pub coming_soon: u32,

    #[serde(rename = "EMPTY")]
    pub empty: u32,

    #[serde(rename = "LOW")]
    pub low: u32,

    #[serde(rename = "NORMAL")]
    pub normal: u32,

    #[serde(rename = "OUT_OF_ORDER")]
    pub out_of_order: u32,
}

impl CategoryCounts {
    /// Bump the counter for one category.
    pub fn increment(&mut self, category: Category) {
        match category {
            Category::ComingSoon => self.coming_soon += 1,
            Category::Empty => self.empty += 1,
            Category::Low => self.low += 1,
            Category::Normal => self.normal += 1,
            Category::OutOfOrder => self.out_of_order += 1,
        }
    }

    /// Read the counter for one category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::ComingSoon => self.coming_soon,
            Category::Empty => self.empty,
            Category::Low => self.low,
            Category::Normal => self.normal,
            Category::OutOfOrder => self.out_of_order,
        }
    }

    /// Sum across all categories; equals the number of classified stations.
    pub fn total(&self) -> u32 {
        self.coming_soon + self.empty + self.low + self.normal + self.out_of_order
    }
}
