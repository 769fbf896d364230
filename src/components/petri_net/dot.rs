//! DOT description of a Petri net for the Graphviz layout engine.
//!
//! Ids and labels are quoted but not escaped, so a `"` inside either yields
//! an invalid description.

use std::fmt::Write;

use log::debug;

use super::types::{NodeKind, PetriNet};

struct NodeStyle {
	shape: &'static str,
	fill: &'static str,
}

const PLACE_STYLE: NodeStyle = NodeStyle {
	shape: "circle",
	fill: "lightblue",
};

const TRANSITION_STYLE: NodeStyle = NodeStyle {
	shape: "box",
	fill: "lightgray",
};

/// Places are declared before transitions; within each class and for links,
/// input order is kept.
pub fn to_dot(net: &PetriNet) -> String {
	let mut dot = String::from("digraph PetriNet {\n  rankdir=LR;\n");

	for (kind, style) in [
		(NodeKind::Place, &PLACE_STYLE),
		(NodeKind::Transition, &TRANSITION_STYLE),
	] {
		let _ = writeln!(
			dot,
			"  node [shape={}, style=filled, fillcolor={}];",
			style.shape, style.fill
		);
		for node in net.nodes_of(kind) {
			let _ = writeln!(dot, "  \"{}\" [label=\"{}\"];", node.id, node.label);
		}
	}

	for link in &net.links {
		let _ = writeln!(dot, "  \"{}\" -> \"{}\";", link.source, link.target);
	}
	dot.push('}');

	let skipped = net.nodes_of(NodeKind::Other).count();
	if skipped > 0 {
		debug!("Skipped {skipped} node(s) of unknown type");
	}
	dot
}
