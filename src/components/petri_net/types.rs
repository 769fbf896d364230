use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
	Place,
	Transition,
	#[serde(other)]
	Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PetriNode {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: NodeKind,
	#[serde(default)]
	pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PetriLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PetriNet {
	#[serde(default)]
	pub nodes: Vec<PetriNode>,
	#[serde(default)]
	pub links: Vec<PetriLink>,
}

impl PetriNet {
	/// Nodes of one kind, in input order.
	pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &PetriNode> {
		self.nodes.iter().filter(move |node| node.kind == kind)
	}
}
