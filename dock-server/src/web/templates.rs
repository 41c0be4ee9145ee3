//! Askama templates for the map frontend.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::stations::{Category, Snapshot};

/// Map page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Legend fragment, fetched by the map page after the markers load.
#[derive(Template)]
#[template(path = "legend.html")]
pub struct LegendTemplate {
    pub updated_display: String,
    pub rows: Vec<LegendRow>,
}

/// One legend line.
#[derive(Debug, Clone)]
pub struct LegendRow {
    pub css_class: &'static str,
    pub label: &'static str,
    pub count: u32,
}

impl LegendTemplate {
    /// Build the legend from a snapshot, rows in display order.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let rows = Category::ALL
            .iter()
            .map(|&category| LegendRow {
                css_class: category.css_class(),
                label: category.legend_label(),
                count: snapshot.counts.get(category),
            })
            .collect();

        Self {
            updated_display: format_updated(snapshot.last_updated),
            rows,
        }
    }
}

/// Format the feed timestamp for the legend, e.g. `"3:07:42 PM UTC"`.
///
/// Always UTC; the server does not know the browser's timezone.
fn format_updated(at: DateTime<Utc>) -> String {
    at.format("%-I:%M:%S %p UTC").to_string()
}
