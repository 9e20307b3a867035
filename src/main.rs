use adjgraph::{
    topological_order, topological_sort_with, AdjacencyList, Bidirectional, CyclePolicy, Directed,
    TopoSortConfig, VertexDescriptor,
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("adjgraph v{}", adjgraph::version());
    println!("==========================================");
    println!();

    // Demo 1: Topological sort of the sample graphs
    demo_topological_sort()?;

    // Demo 2: Bidirectional graph with payloads
    demo_bidirectional_payloads()?;

    // Demo 3: Opt-in cycle rejection
    demo_cycle_rejection()?;

    Ok(())
}

/// Build a directed graph with `n` vertices and the given edges
fn sample_graph(n: usize, edges: &[(usize, usize)]) -> anyhow::Result<AdjacencyList<Directed>> {
    let mut g = AdjacencyList::with_vertices(n);
    for &(s, t) in edges {
        g.try_add_edge(VertexDescriptor(s), VertexDescriptor(t))?;
    }
    Ok(g)
}

fn demo_topological_sort() -> anyhow::Result<()> {
    println!("=== Demo 1: Topological Sort ===");

    let samples: [(&str, &[(usize, usize)]); 3] = [
        ("Graph1", &[(0, 3), (3, 5), (5, 7), (2, 4), (4, 6), (6, 7)]),
        ("Graph2", &[(0, 2), (1, 2), (1, 3), (1, 6), (2, 4), (2, 5), (3, 7), (4, 7)]),
        ("Graph3", &[(0, 3), (1, 2), (1, 6), (5, 6)]),
    ];

    for (name, edges) in samples {
        let g = sample_graph(8, edges)?;
        let order: Vec<String> = topological_order(&g)
            .iter()
            .map(|v| v.index().to_string())
            .collect();
        println!("{}: {}", name, order.join(", "));
    }

    Ok(())
}

fn demo_bidirectional_payloads() -> anyhow::Result<()> {
    println!("\n=== Demo 2: Bidirectional Graph with Payloads ===");

    let mut g: AdjacencyList<Bidirectional, i32, i32> = AdjacencyList::new();
    let v = g.add_vertex();
    let u = g.add_vertex_with(43);
    let u2 = g.add_vertex();
    g.add_vertex();
    g.add_vertex();

    let e1 = g.try_add_edge_with(v, u, 123)?;
    let e2 = g.try_add_edge_with(u, v, 321)?;
    g.try_add_edge(u2, v)?;

    println!("✓ Edge {} carries {}", e1, g.try_edge_prop(e1)?);
    println!("✓ Edge {} carries {}", e2, g.try_edge_prop(e2)?);
    println!("✓ Vertex {} carries {}", u, g.try_vertex_prop(u)?);

    println!("\nIn-edges of {}:", v);
    for e in g.try_in_edges(v)? {
        println!("  {} -> {}", e.source, e.target);
    }

    println!("Out-edges of {}:", v);
    for e in g.try_out_edges(v)? {
        println!("  {} -> {}", e.source, e.target);
    }

    Ok(())
}

fn demo_cycle_rejection() -> anyhow::Result<()> {
    println!("\n=== Demo 3: Cycle Rejection ===");

    let g = sample_graph(3, &[(0, 1), (1, 2), (2, 0)])?;
    let config = TopoSortConfig {
        cycle_policy: CyclePolicy::Reject,
        ..TopoSortConfig::default()
    };

    let mut finished: Vec<VertexDescriptor> = Vec::new();
    match topological_sort_with(&g, &mut finished, config) {
        Ok(()) => println!("  → Unexpected order: {:?}", finished),
        Err(e) => println!("  → Rejected: {}", e),
    }

    Ok(())
}
