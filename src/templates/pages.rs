use maud::{html, Markup};

use super::components::{
    influence_list, movement_card, pan_controls, tag_list, timeline_marker, InfluenceLinkData,
};
use super::layout::base_layout;
use crate::handlers::art_movements::{MovementDetail, MovementSummary};
use crate::timeline::{NodePlacement, YearRange};

pub fn timeline_page(
    placements: &[NodePlacement],
    range: Option<YearRange>,
    offset: f64,
    influences: &[InfluenceLinkData],
) -> Markup {
    base_layout(
        "Timeline",
        html! {
            h1 { "Timeline" }

            @match range {
                Some(range) => {
                    p style="color: #555;" {
                        (range.min()) " – " (range.max())
                        " · " (placements.len()) " nodes"
                    }

                    (pan_controls(offset))

                    div class="timeline-track" {
                        @for (row, placement) in placements.iter().enumerate() {
                            (timeline_marker(placement, row))
                        }
                    }

                    h2 { "Influences" }
                    (influence_list(influences))
                }
                None => {
                    div style="text-align: center; padding: 3rem 0;" {
                        p style="font-size: 1.1rem;" { "The timeline is empty." }
                        p style="color: #666;" { "Add nodes through POST /api/timeline." }
                    }
                }
            }
        },
    )
}

pub fn movements_page(movements: &[MovementSummary]) -> Markup {
    base_layout(
        "Movements",
        html! {
            h1 { "Art Movements" }

            @if movements.is_empty() {
                p style="color: #666;" { "No art movements found." }
            } @else {
                div class="movement-grid" {
                    @for movement in movements {
                        (movement_card(movement))
                    }
                }
            }
        },
    )
}

pub fn movement_detail_page(movement: &MovementDetail) -> Markup {
    let years = match movement.end_year {
        Some(end) => format!("{} – {}", movement.start_year, end),
        None => format!("{} – present", movement.start_year),
    };

    base_layout(
        &movement.name,
        html! {
            a href="/movements" { "← All movements" }
            h1 { (movement.name) }
            p style="color: #555;" { (years) }
            (tag_list(&movement.tags))

            p { (movement.description) }

            @if let Some(foundation) = &movement.theoretical_foundation {
                h2 { "Theoretical foundation" }
                p { (foundation) }
            }

            @if let Some(context) = &movement.context {
                h2 { "Context" }
                p { (context) }
            }

            @if !movement.characteristics.is_empty() {
                h2 { "Characteristics" }
                ul {
                    @for characteristic in &movement.characteristics {
                        li { (characteristic) }
                    }
                }
            }

            @if !movement.forms.is_empty() {
                h2 { "Forms" }
                (tag_list(&movement.forms))
            }

            @if !movement.representative_artists.is_empty() {
                h2 { "Representative artists" }
                ul {
                    @for artist in &movement.representative_artists {
                        li {
                            strong { (artist.name) }
                            @if !artist.works.is_empty() {
                                ": " (artist.works.join(", "))
                            }
                        }
                    }
                }
            }
        },
    )
}
