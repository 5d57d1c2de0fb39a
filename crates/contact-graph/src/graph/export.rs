//! Generic node-link representation of the composed graph, for whatever
//! persistence layer serializes it.

use std::collections::BTreeMap;

use contact_core::models::VisitId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::composed::{ComposedGraph, GraphEdge, GraphNode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    pub id: VisitId,
    pub attributes: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    pub source: VisitId,
    pub target: VisitId,
    pub attributes: BTreeMap<String, Value>,
}

/// Node-link document. Nodes are sorted by id and links by endpoints so the
/// output is stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    pub directed: bool,
    pub multigraph: bool,
    pub nodes: Vec<NodeLinkNode>,
    pub links: Vec<NodeLinkEdge>,
}

impl NodeLinkGraph {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn node_attributes(node: &GraphNode) -> BTreeMap<String, Value> {
    BTreeMap::from([
        ("condition".to_string(), json!(node.condition)),
        ("latitude".to_string(), json!(node.location.latitude)),
        ("longitude".to_string(), json!(node.location.longitude)),
        ("observed_at".to_string(), json!(node.observed_at.to_string())),
        ("breached".to_string(), json!(node.breached)),
        ("infection_start".to_string(), json!(node.infection_start)),
    ])
}

fn edge_attributes(edge: &GraphEdge) -> BTreeMap<String, Value> {
    match edge {
        GraphEdge::Transition { arrival_time } => BTreeMap::from([
            ("kind".to_string(), json!("transition")),
            ("arrival_time".to_string(), json!(arrival_time.to_string())),
        ]),
        GraphEdge::Breach(b) => BTreeMap::from([
            ("kind".to_string(), json!("breach")),
            ("distance".to_string(), json!(b.distance)),
            ("breached".to_string(), json!(b.breached)),
            ("time_overlap".to_string(), json!(b.time_overlap)),
            ("risk".to_string(), json!(b.risk)),
        ]),
    }
}

impl ComposedGraph {
    pub fn to_node_link(&self) -> NodeLinkGraph {
        let mut nodes: Vec<NodeLinkNode> = self
            .nodes()
            .map(|n| NodeLinkNode {
                id: n.id.clone(),
                attributes: node_attributes(n),
            })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut links: Vec<NodeLinkEdge> = self
            .edges()
            .map(|(a, b, edge)| {
                let (source, target) = VisitId::pair_key(a, b);
                NodeLinkEdge {
                    source,
                    target,
                    attributes: edge_attributes(edge),
                }
            })
            .collect();
        links.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

        NodeLinkGraph {
            directed: false,
            multigraph: true,
            nodes,
            links,
        }
    }
}
