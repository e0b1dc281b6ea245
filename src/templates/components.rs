use maud::{html, Markup};

use crate::handlers::art_movements::MovementSummary;
use crate::timeline::NodePlacement;

/// A rendered influence edge, by title
pub struct InfluenceLinkData {
    pub source_title: String,
    pub target_title: String,
}

/// Pixels between stacked markers, so nodes sharing a region stay readable
const ROW_HEIGHT_PX: usize = 36;
const ROWS: usize = 5;

pub fn timeline_marker(placement: &NodePlacement, row: usize) -> Markup {
    let style = format!(
        "left: {:.3}%; bottom: {}px;",
        placement.percentage,
        (row % ROWS) * ROW_HEIGHT_PX
    );

    html! {
        div class="timeline-marker" style=(style) data-node-id=(placement.id.to_string()) {
            span class="dot" {}
            strong { (placement.title) }
            " "
            small { (placement.year) }
        }
    }
}

pub fn pan_controls(offset: f64) -> Markup {
    html! {
        div style="display: flex; gap: 1rem; align-items: center;" {
            a href=(format!("/?offset={}", offset + 10.0)) { "◀ Earlier" }
            a href="/" { "Reset" }
            a href=(format!("/?offset={}", offset - 10.0)) { "Later ▶" }
            @if offset != 0.0 {
                small style="color: #666;" { "offset " (format!("{:+.1}", offset)) "%" }
            }
        }
    }
}

pub fn tag_list(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            div {
                @for tag in tags {
                    span class="tag" { (tag) }
                }
            }
        }
    }
}

pub fn influence_list(links: &[InfluenceLinkData]) -> Markup {
    html! {
        @if links.is_empty() {
            p style="color: #666;" { "No influences recorded yet." }
        } @else {
            ul {
                @for link in links {
                    li { (link.source_title) " → " (link.target_title) }
                }
            }
        }
    }
}

pub fn movement_card(movement: &MovementSummary) -> Markup {
    html! {
        a href=(format!("/movements/{}", movement.id)) style="color: inherit; text-decoration: none;" {
            div class="movement-card" {
                h3 style="margin-top: 0;" { (movement.name) }
                p style="color: #555;" { (movement.description) }
                (tag_list(&movement.tags))
            }
        }
    }
}
