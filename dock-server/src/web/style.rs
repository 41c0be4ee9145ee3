//! Marker style configuration.
//!
//! One immutable style per category, shipped to the map frontend via
//! the stations API. The frontend feeds these straight into
//! Leaflet.ExtraMarkers, so the field values are ExtraMarkers icon
//! names, colors, and shapes.

use serde::Serialize;

use crate::stations::Category;

/// Visual descriptor for one category's map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    /// Icon name from the Ionicons set
    pub icon: &'static str,

    /// Icon foreground color
    pub icon_color: &'static str,

    /// Marker fill color
    pub marker_color: &'static str,

    /// Marker outline shape
    pub shape: &'static str,
}

/// The marker style for a category.
pub fn marker_style(category: Category) -> MarkerStyle {
    match category {
        Category::ComingSoon => MarkerStyle {
            icon: "ion-settings",
            icon_color: "white",
            marker_color: "yellow",
            shape: "star",
        },
        Category::Empty => MarkerStyle {
            icon: "ion-android-bicycle",
            icon_color: "white",
            marker_color: "red",
            shape: "circle",
        },
        Category::OutOfOrder => MarkerStyle {
            icon: "ion-minus-circled",
            icon_color: "white",
            marker_color: "blue-dark",
            shape: "penta",
        },
        Category::Low => MarkerStyle {
            icon: "ion-android-bicycle",
            icon_color: "white",
            marker_color: "orange",
            shape: "circle",
        },
        Category::Normal => MarkerStyle {
            icon: "ion-android-bicycle",
            icon_color: "white",
            marker_color: "green",
            shape: "circle",
        },
    }
}
