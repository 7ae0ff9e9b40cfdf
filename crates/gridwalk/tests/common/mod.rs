use gridwalk::{GraphWriter, GridCoord, Indexed, Mapped};

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn coord(x: i64, y: i64) -> GridCoord {
    GridCoord::new(x, y)
}

#[allow(dead_code)]
pub fn mapped(order: u32, edges: &[(u32, u32)]) -> Mapped<u32> {
    let mut graph = Mapped::with_capacity(order as usize);
    graph.add_vertices(0..order).unwrap();
    graph.add_edges(edges.iter().copied()).unwrap();
    graph
}

#[allow(dead_code)]
pub fn indexed(order: u32, edges: &[(u32, u32)]) -> Indexed<u32> {
    let mut graph = Indexed::with_capacity(order as usize);
    for _ in 0..order {
        graph.push_vertex().unwrap();
    }
    graph.add_edges(edges.iter().copied()).unwrap();
    graph
}
