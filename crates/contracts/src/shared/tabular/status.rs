use super::columns::{cell_renderer, CellRenderer};
use super::record::{display_text, EMPTY_CELL};
use super::table_view::CellContent;

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Neutral,
}

impl StatusTone {
    /// Classifies free status text. Unknown wording is neutral.
    pub fn classify(status: &str) -> Self {
        let normalized = status.trim().to_lowercase();
        match normalized.as_str() {
            "non-functional" | "non functional" | "nonfunctional" | "out of order"
            | "out of stock" | "vacant" | "damaged" | "condemned" => StatusTone::Error,
            "under repair" | "partially functional" | "low stock" | "pending" => {
                StatusTone::Warning
            }
            "functional" | "available" | "filled" | "in stock" | "active" => StatusTone::Success,
            _ => StatusTone::Neutral,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "badge badge--success",
            StatusTone::Warning => "badge badge--warning",
            StatusTone::Error => "badge badge--error",
            StatusTone::Neutral => "badge badge--neutral",
        }
    }
}

/// Renderer showing the cell value as a status badge.
pub fn status_badge_renderer() -> CellRenderer {
    cell_renderer(|value, _record, _index| {
        let text = display_text(value);
        let tone = if text == EMPTY_CELL {
            StatusTone::Neutral
        } else {
            StatusTone::classify(&text)
        };
        CellContent::badge(text, tone.badge_class())
    })
}
