#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug)]
pub struct GraphEdge {
	pub id: String,
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct TraversalGraph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

impl TraversalGraph {
	/// The fixed demo graph: two levels, A fanning out to B and C.
	pub fn sample() -> Self {
		let node = |id: &str, x: f64, y: f64| GraphNode {
			id: id.into(),
			label: id.into(),
			x,
			y,
		};
		let edge = |id: &str, source: &str, target: &str| GraphEdge {
			id: id.into(),
			source: source.into(),
			target: target.into(),
		};
		Self {
			nodes: vec![
				node("A", 60.0, 60.0),
				node("B", 260.0, 60.0),
				node("C", 460.0, 60.0),
				node("D", 160.0, 210.0),
				node("E", 360.0, 210.0),
			],
			edges: vec![
				edge("e1", "A", "B"),
				edge("e2", "A", "C"),
				edge("e3", "B", "D"),
				edge("e4", "C", "E"),
			],
		}
	}

	pub fn contains(&self, id: &str) -> bool {
		self.nodes.iter().any(|node| node.id == id)
	}

	/// Outgoing neighbor ids in edge declaration order.
	pub fn neighbors(&self, id: &str) -> Vec<String> {
		self.edges
			.iter()
			.filter(|edge| edge.source == id)
			.map(|edge| edge.target.clone())
			.collect()
	}
}
