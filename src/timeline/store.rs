//! Explicit timeline state: loaded nodes, their derived influence edges and
//! the current pan offset. All changes go through [`TimelineStore::dispatch`].

use serde::Serialize;
use uuid::Uuid;

use super::{
    coordinates::YearRange,
    influence::{derive_edges, InfluenceEdge},
    Position, TimelineEntry,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace every node
    Loaded(Vec<TimelineEntry>),
    NodeAdded(TimelineEntry),
    NodeUpdated(TimelineEntry),
    NodeRemoved(Uuid),
    NodeMoved { id: Uuid, position: Position },
    Panned { delta_percent: f64 },
    PanReset,
}

/// Where one node sits on the axis under the current offset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePlacement {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub percentage: f64,
    pub position: Position,
}

#[derive(Debug, Clone, Default)]
pub struct TimelineStore {
    nodes: Vec<TimelineEntry>,
    edges: Vec<InfluenceEdge>,
    offset: f64,
}

impl TimelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes(nodes: Vec<TimelineEntry>) -> Self {
        let mut store = Self::new();
        store.dispatch(Action::Loaded(nodes));
        store
    }

    /// Applies an action. Returns `false` when it referenced a node that is not loaded.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Loaded(nodes) => {
                self.nodes = nodes;
                self.refresh();
                true
            }
            Action::NodeAdded(node) | Action::NodeUpdated(node) => {
                let known = self.nodes.iter().position(|n| n.id == node.id);
                match known {
                    Some(index) => self.nodes[index] = node,
                    None => self.nodes.push(node),
                }
                self.refresh();
                true
            }
            Action::NodeRemoved(id) => {
                let before = self.nodes.len();
                self.nodes.retain(|n| n.id != id);
                if self.nodes.len() == before {
                    return false;
                }
                self.refresh();
                true
            }
            Action::NodeMoved { id, position } => match self.nodes.iter_mut().find(|n| n.id == id) {
                Some(node) => {
                    node.position = position;
                    true
                }
                None => false,
            },
            Action::Panned { delta_percent } => {
                self.offset += delta_percent;
                true
            }
            Action::PanReset => {
                self.offset = 0.0;
                true
            }
        }
    }

    fn refresh(&mut self) {
        self.nodes
            .sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title)));
        self.edges = derive_edges(&self.nodes);
    }

    pub fn nodes(&self) -> &[TimelineEntry] {
        &self.nodes
    }

    pub fn node(&self, id: Uuid) -> Option<&TimelineEntry> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edges(&self) -> &[InfluenceEdge] {
        &self.edges
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn year_range(&self) -> Option<YearRange> {
        YearRange::from_years(self.nodes.iter().map(|n| n.year))
    }

    pub fn layout(&self) -> Vec<NodePlacement> {
        let Some(range) = self.year_range() else {
            return Vec::new();
        };

        self.nodes
            .iter()
            .map(|node| NodePlacement {
                id: node.id,
                title: node.title.clone(),
                year: node.year,
                percentage: range.percentage(node.year, self.offset),
                position: node.position,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(title: &str, year: i32, influenced_by: &[&str]) -> TimelineEntry {
        TimelineEntry {
            id: Uuid::new_v4(),
            title: title.to_string(),
            year,
            style_movement: None,
            influences: Vec::new(),
            influenced_by: influenced_by.iter().map(|s| s.to_string()).collect(),
            position: Position::default(),
        }
    }

    #[test]
    fn test_empty_store_has_no_layout() {
        let store = TimelineStore::new();
        assert!(store.layout().is_empty());
        assert!(store.year_range().is_none());
    }

    #[test]
    fn test_loaded_nodes_are_ordered_by_year() {
        let store = TimelineStore::with_nodes(vec![
            entry("Surrealism", 1924, &[]),
            entry("Impressionism", 1874, &[]),
            entry("Dada", 1916, &[]),
        ]);

        let titles: Vec<&str> = store.nodes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Impressionism", "Dada", "Surrealism"]);
    }

    #[test]
    fn test_layout_spans_zero_to_hundred_plus_offset() {
        let mut store = TimelineStore::with_nodes(vec![
            entry("Impressionism", 1874, &[]),
            entry("Cubism", 1907, &[]),
            entry("Pop Art", 1955, &[]),
        ]);
        store.dispatch(Action::Panned { delta_percent: 10.0 });
        store.dispatch(Action::Panned { delta_percent: -2.5 });

        let layout = store.layout();
        assert_eq!(layout.first().unwrap().percentage, 7.5);
        assert_eq!(layout.last().unwrap().percentage, 107.5);

        store.dispatch(Action::PanReset);
        assert_eq!(store.offset(), 0.0);
        assert_eq!(store.layout()[0].percentage, 0.0);
    }

    #[test]
    fn test_single_node_is_centered() {
        let store = TimelineStore::with_nodes(vec![entry("Dada", 1916, &[])]);
        assert_eq!(store.layout()[0].percentage, 50.0);
    }

    #[test]
    fn test_edges_follow_membership_changes() {
        let dada = entry("Dada", 1916, &[]);
        let surrealism = entry("Surrealism", 1924, &["Dada"]);
        let mut store = TimelineStore::with_nodes(vec![surrealism.clone()]);
        assert!(store.edges().is_empty());

        store.dispatch(Action::NodeAdded(dada.clone()));
        assert_eq!(store.edges().len(), 1);

        assert!(store.dispatch(Action::NodeRemoved(dada.id)));
        assert!(store.edges().is_empty());
        assert!(!store.dispatch(Action::NodeRemoved(dada.id)));
    }

    #[test]
    fn test_renaming_a_node_rederives_edges() {
        let cubism = entry("Cubism", 1907, &[]);
        let futurism = entry("Futurism", 1909, &["Cubist Painting"]);
        let mut store = TimelineStore::with_nodes(vec![cubism.clone(), futurism]);
        assert!(store.edges().is_empty());

        let renamed = TimelineEntry {
            title: "Cubist Painting".to_string(),
            ..cubism
        };
        store.dispatch(Action::NodeUpdated(renamed));
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn test_node_moved_only_touches_position() {
        let dada = entry("Dada", 1916, &[]);
        let mut store = TimelineStore::with_nodes(vec![dada.clone()]);

        let moved = store.dispatch(Action::NodeMoved {
            id: dada.id,
            position: Position::new(10.0, 20.0),
        });
        assert!(moved);

        let node = store.node(dada.id).unwrap();
        assert_eq!(node.position, Position::new(10.0, 20.0));
        assert_eq!(node.title, "Dada");
        assert_eq!(node.year, 1916);

        assert!(!store.dispatch(Action::NodeMoved {
            id: Uuid::new_v4(),
            position: Position::default(),
        }));
    }
}
