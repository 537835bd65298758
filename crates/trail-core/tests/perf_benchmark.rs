use std::time::Instant;
use trail_core::{EdgeId, Location, NodeId, RouteNetwork, SimpleEdge, SimpleNode, TrailNetwork};

/// A `size × size` street grid.
fn street_grid(size: usize) -> TrailNetwork {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let id = |x: usize, y: usize| NodeId::intern(&format!("n{x}_{y}"));
    for y in 0..size {
        for x in 0..size {
            nodes.push(SimpleNode {
                id: id(x, y),
                location: Location::new(x as f64 * 10.0, y as f64 * 10.0),
            });
            if x + 1 < size {
                edges.push(SimpleEdge {
                    id: EdgeId::intern(&format!("h{x}_{y}")),
                    start_node_id: id(x, y),
                    end_node_id: id(x + 1, y),
                    inner_locations: Vec::new(),
                });
            }
            if y + 1 < size {
                edges.push(SimpleEdge {
                    id: EdgeId::intern(&format!("v{x}_{y}")),
                    start_node_id: id(x, y),
                    end_node_id: id(x, y + 1),
                    inner_locations: Vec::new(),
                });
            }
        }
    }
    TrailNetwork::create(nodes, edges).expect("grid network")
}

#[test]
#[ignore] // Run manually with `cargo test --test perf_benchmark -- --nocapture --ignored`
fn benchmark_closest_point_mesh() {
    let plain = street_grid(150);
    let meshed = street_grid(150).with_closest_point_mesh(25.0).expect("mesh");

    for (label, net) in [("brute force", &plain), ("mesh", &meshed)] {
        let start = Instant::now();
        for i in 0..2_000 {
            let q = Location::new((i * 37 % 1500) as f64 + 0.5, (i * 91 % 1500) as f64 + 0.5);
            net.closest_point(q).expect("closest point");
        }
        println!("{label}: 2,000 lookups in {:?}", start.elapsed());
    }
}
