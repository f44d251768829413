use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::types::TraversalGraph;

pub const NODE_RADIUS: f64 = 24.0;
const ARROW_SIZE: f64 = 9.0;

const BACKGROUND: &str = "#f8fafc";
const EDGE_COLOR: &str = "#64748b";
const NODE_BORDER: &str = "#94a3b8";
const UNVISITED_FILL: &str = "#e4e4e7";
const VISITED_FILL: &str = "#34d399";

pub fn render(
	graph: &TraversalGraph,
	visited: &[String],
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
	draw_edges(graph, ctx);
	draw_nodes(graph, visited, ctx);
}

fn draw_edges(graph: &TraversalGraph, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_fill_style_str(EDGE_COLOR);
	ctx.set_line_width(1.5);

	for edge in &graph.edges {
		let (Some(n1), Some(n2)) = (
			graph.nodes.iter().find(|n| n.id == edge.source),
			graph.nodes.iter().find(|n| n.id == edge.target),
		) else {
			continue;
		};

		let (dx, dy) = (n2.x - n1.x, n2.y - n1.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		// Line from circle edge to circle edge, leaving room for the arrowhead
		ctx.begin_path();
		ctx.move_to(n1.x + ux * NODE_RADIUS, n1.y + uy * NODE_RADIUS);
		ctx.line_to(
			n2.x - ux * (NODE_RADIUS + ARROW_SIZE),
			n2.y - uy * (NODE_RADIUS + ARROW_SIZE),
		);
		ctx.stroke();

		let (tip_x, tip_y) = (n2.x - ux * NODE_RADIUS, n2.y - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(graph: &TraversalGraph, visited: &[String], ctx: &CanvasRenderingContext2d) {
	for node in &graph.nodes {
		let is_visited = visited.iter().any(|id| *id == node.id);

		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if is_visited {
			VISITED_FILL
		} else {
			UNVISITED_FILL
		});
		ctx.fill();
		ctx.set_stroke_style_str(NODE_BORDER);
		ctx.set_line_width(1.5);
		ctx.stroke();

		ctx.set_fill_style_str("#18181b");
		ctx.set_font("bold 14px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.label, node.x, node.y);
	}
}
