use chordal_core::{
    AdjacencyGraph, McsStrategy, find_violation, maximum_cardinality_search_with,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Tier {
    name: &'static str,
    vertices: usize,
    avg_degree: usize,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "small",
        vertices: 1_000,
        avg_degree: 4,
    },
    Tier {
        name: "medium",
        vertices: 20_000,
        avg_degree: 8,
    },
    Tier {
        name: "large",
        vertices: 200_000,
        avg_degree: 8,
    },
];

/// Sparse random graph plus a random chordal graph of similar size.
fn random_graphs(tier: &Tier, seed: u64) -> (AdjacencyGraph, AdjacencyGraph) {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = tier.vertices;
    let m = n * tier.avg_degree / 2;

    let sparse = AdjacencyGraph::from_edges(
        n,
        (0..m).map(|_| (rng.gen_range(0..n), rng.gen_range(0..n))),
    )
    .unwrap_or_default();

    // k-tree style growth: attach each vertex to a prefix of a random earlier
    // clique so that the result stays chordal.
    let mut cliques: Vec<Vec<usize>> = vec![vec![0]];
    let mut edges = Vec::with_capacity(m);
    for v in 1..n {
        let base = &cliques[rng.gen_range(0..cliques.len())];
        let take = rng.gen_range(1..=base.len().min(tier.avg_degree));
        let mut clique: Vec<usize> = base[..take].to_vec();
        edges.extend(clique.iter().map(|&u| (u, v)));
        clique.push(v);
        cliques.push(clique);
    }
    let chordal = AdjacencyGraph::from_edges(n, edges).unwrap_or_default();

    (sparse, chordal)
}

fn bench_chordality(c: &mut Criterion) {
    let mut group = c.benchmark_group("chordality");

    for tier in &TIERS {
        let (sparse, chordal) = random_graphs(tier, 0xC40D_u64 + tier.vertices as u64);
        group.throughput(Throughput::Elements(
            (chordal.vertex_count() + chordal.edge_count()) as u64,
        ));

        for strategy in [McsStrategy::Bucketed, McsStrategy::Linear] {
            // the quadratic scan is only measured on the small tier
            if strategy == McsStrategy::Linear && tier.vertices > 1_000 {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(format!("mcs.{strategy}"), tier.name),
                &chordal,
                |b, g| b.iter(|| black_box(maximum_cardinality_search_with(g, strategy))),
            );
        }

        group.bench_with_input(
            BenchmarkId::new("mcs+peo.chordal", tier.name),
            &chordal,
            |b, g| {
                b.iter(|| {
                    let ranking = maximum_cardinality_search_with(g, McsStrategy::Bucketed);
                    black_box(find_violation(g, &ranking))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("mcs+peo.random", tier.name),
            &sparse,
            |b, g| {
                b.iter(|| {
                    let ranking = maximum_cardinality_search_with(g, McsStrategy::Bucketed);
                    black_box(find_violation(g, &ranking))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_chordality);
criterion_main!(benches);
