use collab_finder::algo::{adamic_adar, candidate_set, common_neighbors_count, degree, normalize};
use collab_finder::graph::{build_graph_from, CoauthorGraph};
use collab_finder::ingest::BatchReader;
use collab_finder::recommend::{recommend, RecommendParams};
use collab_finder::ColumnConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random bibliography over a small author pool, with noisy years and venues
fn random_graph(seed: u64, rows: usize) -> CoauthorGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let venues = ["J1", "J2", "J3", "nan", "", "N/A", "Conf A"];
    let mut body = String::from("authors,mdate,journal\n");

    for _ in 0..rows {
        let n = rng.gen_range(1..=4);
        let names: Vec<String> = (0..n).map(|_| format!("Author {}", rng.gen_range(0..30))).collect();
        let year = match rng.gen_range(0..4) {
            0 => format!("{}-01-15", rng.gen_range(2010..2024)),
            1 => format!("{}.0", rng.gen_range(2010..2024)),
            2 => String::new(),
            _ => rng.gen_range(2010..2024).to_string(),
        };
        let venue = venues[rng.gen_range(0..venues.len())];
        body.push_str(&format!("{},{},{}\n", names.join(";"), year, venue));
    }

    let reader = BatchReader::from_reader(body.as_bytes(), 50).unwrap();
    build_graph_from(reader, &ColumnConfig::default(), Some(2020), usize::MAX).unwrap()
}

#[test]
fn test_adjacency_is_symmetric_without_self_loops() {
    for seed in 0..5 {
        let graph = random_graph(seed, 400);
        assert!(!graph.is_empty());

        for (u, row) in graph.adjacency() {
            assert!(!row.contains_key(u), "self loop on {}", u);
            for (v, w) in row {
                assert!(*w > 0);
                assert_eq!(graph.adjacency()[v].get(u), Some(w), "asymmetric edge {} - {}", u, v);
            }
        }
    }
}

#[test]
fn test_venue_sets_have_no_blank_entries() {
    let graph = random_graph(7, 400);
    for set in graph.venues().values() {
        for venue in set {
            assert!(!collab_finder::ingest::is_blank_venue(venue), "blank venue {:?}", venue);
        }
    }
}

#[test]
fn test_default_candidates_are_disjoint_from_neighbors() {
    let graph = random_graph(11, 300);
    let adj = graph.adjacency();

    for target in adj.keys() {
        let candidates = candidate_set(adj, target, false);
        assert!(!candidates.contains(target));
        for neighbor in adj[target].keys() {
            assert!(!candidates.contains(neighbor));
        }
        for c in &candidates {
            // friends-of-friends always share at least one neighbor
            assert!(common_neighbors_count(adj, target, c) >= 1);
            assert!(adamic_adar(adj, target, c) >= 0.0);
        }
    }
}

#[test]
fn test_common_neighbors_have_degree_above_one() {
    let graph = random_graph(3, 300);
    let adj = graph.adjacency();

    for u in adj.keys().take(10) {
        for v in candidate_set(adj, u, true) {
            for z in adj[u].keys() {
                if adj[&v].contains_key(z) {
                    assert!(degree(adj, z) >= 2);
                }
            }
        }
    }
}

#[test]
fn test_recommendations_are_explainable_and_bounded() {
    let graph = random_graph(21, 500);
    let params = RecommendParams {
        include_far_neighbors: true,
        top_k: 1000,
        ..RecommendParams::default()
    };

    for target in graph.adjacency().keys().take(10) {
        let recs = recommend(graph.adjacency(), graph.venues(), target, &params);
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for rec in &recs {
            assert!(!rec.common_journals.is_empty());
            assert!(rec.common_journals.len() <= 5);
            assert!(rec.common_neighbors.len() <= 5);
            assert!((-1e-9..=1.0 + 1e-9).contains(&rec.score));
            assert!(rec.explanation.starts_with("Common journals: "));
        }
    }
}

#[test]
fn test_normalize_stays_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let values: Vec<f64> = (0..rng.gen_range(1..20)).map(|_| rng.gen_range(-100.0..100.0)).collect();
        let out = normalize(&values);
        assert_eq!(out.len(), values.len());
        assert!(out.iter().all(|x| (0.0..=1.0).contains(x)));
    }
}
