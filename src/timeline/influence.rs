//! Influence edges, derived by matching node titles against the
//! `influences` / `influenced_by` name lists.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use super::TimelineEntry;

/// `source` influenced `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InfluenceEdge {
    pub source: Uuid,
    pub target: Uuid,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Edges in node order, without duplicates or self-loops. Unknown names are ignored.
pub fn derive_edges(entries: &[TimelineEntry]) -> Vec<InfluenceEdge> {
    let mut by_title: HashMap<String, Vec<Uuid>> = HashMap::new();
    for entry in entries {
        by_title
            .entry(normalize(&entry.title))
            .or_default()
            .push(entry.id);
    }

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    let mut push = |source: Uuid, target: Uuid| {
        let edge = InfluenceEdge { source, target };
        if source != target && seen.insert(edge) {
            edges.push(edge);
        }
    };

    for entry in entries {
        for name in &entry.influenced_by {
            if let Some(sources) = by_title.get(&normalize(name)) {
                for source in sources {
                    push(*source, entry.id);
                }
            }
        }
        for name in &entry.influences {
            if let Some(targets) = by_title.get(&normalize(name)) {
                for target in targets {
                    push(entry.id, *target);
                }
            }
        }
    }

    edges
}
