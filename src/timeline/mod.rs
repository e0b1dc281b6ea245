//! Timeline layout: year/pixel arithmetic, influence edges and the
//! timeline state container used by the layout endpoint and HTML views.

pub mod coordinates;
pub mod influence;
pub mod store;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{entities::timeline_node, json::string_list};

pub use coordinates::{DragGesture, YearRange};
pub use influence::{derive_edges, InfluenceEdge};
pub use store::{Action, NodePlacement, TimelineStore};

/// Screen coordinate of a node, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The slice of a timeline node the layout needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub style_movement: Option<String>,
    pub influences: Vec<String>,
    pub influenced_by: Vec<String>,
    pub position: Position,
}

impl From<&timeline_node::Model> for TimelineEntry {
    fn from(node: &timeline_node::Model) -> Self {
        Self {
            id: node.id,
            title: node.title.clone(),
            year: node.year,
            style_movement: node.style_movement.clone(),
            influences: string_list(&node.influences),
            influenced_by: string_list(&node.influenced_by),
            position: Position::new(node.position_x, node.position_y),
        }
    }
}
