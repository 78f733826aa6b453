//! Shared helpers for unit tests.

#[cfg(test)]
pub(crate) use helpers::*;

#[cfg(test)]
mod helpers {
    use crate::{ops::*, *};
    use itertools::Itertools;
    use rand::Rng;

    /// Creates a sorted list of at most `m_ub` distinct normalized random edges
    /// without self-loops for nodes `0..n`
    pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
        let mut edges = (0..m_ub)
            .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
            .filter(|e| !e.is_loop())
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Creates a sorted edge list of a random connected graph on `0..n`:
    /// a random tree (every `v > 0` attaches to some `u < v`) plus at most `extra` random edges
    pub(crate) fn random_connected_edges<R: Rng>(
        rng: &mut R,
        n: NumNodes,
        extra: NumEdges,
    ) -> Vec<Edge> {
        let extra_edges = random_edges(rng, n, extra);
        let mut edges = (1..n)
            .map(|v| Edge(rng.random_range(0..v), v))
            .chain(extra_edges)
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Returns the set of nodes reachable from `start`
    pub(crate) fn reachable_from<G: AdjacencyList>(graph: &G, start: Node) -> NodeBitSet {
        let mut visited = graph.vertex_bitset_unset();
        let mut stack = vec![start];
        visited.set_bit(start);

        while let Some(u) = stack.pop() {
            for v in graph.neighbors_of(u) {
                if !visited.set_bit(v) {
                    stack.push(v);
                }
            }
        }

        visited
    }
}

/// Every graph representation should behave identically on `GraphNew`, `AdjacencyList` and
/// `GraphEdgeEditing`; this stamps out the corresponding tests against a reference adjacency
/// given as one `NodeBitSet` per node.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::*, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Reference adjacency of a list of edges
            fn reference(n: NumNodes, edges: &[Edge]) -> Vec<NodeBitSet> {
                let mut adj = vec![NodeBitSet::new(n); n as usize];
                for &Edge(u, v) in edges {
                    adj[u as usize].set_bit(v);
                    adj[v as usize].set_bit(u);
                }
                adj
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..2 {
                assert!(matches!(<$graph>::try_new(n), Err(GraphError::InvalidSize(_))));
            }

            for n in 2..50 {
                let graph = <$graph>::try_new(n).unwrap();

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [2 as NumNodes, 10, 20, 50] {
                for m_ub in [n, n * 2, n * 5] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub);
                        let adj = reference(n, &edges);
                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges() as usize, edges.len());
                        assert_eq!(graph.edges_vec(), edges);

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj[u as usize]);
                            assert_eq!(graph.degree_of(u), adj[u as usize].cardinality());
                            assert!(graph.neighbors_of(u).tuple_windows().all(|(a, b)| a < b));

                            let start = rng.random_range(0..=n);
                            assert_eq!(
                                graph.neighbors_of_from(u, start).collect_vec(),
                                graph.neighbors_of(u).filter(|&v| v >= start).collect_vec()
                            );

                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), u == v || adj[u as usize].get_bit(v));
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [2 as NumNodes, 10, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub);
                        let mut adj = reference(n, &edges);

                        let mut graph = <$graph>::try_new(n).unwrap();
                        for &Edge(u, v) in &edges {
                            assert!(!graph.try_add_edge(v, u));
                        }
                        for &Edge(u, v) in &edges {
                            assert!(graph.try_add_edge(u, v));
                        }

                        let mut m = graph.number_of_edges();
                        assert_eq!(m as usize, edges.len());

                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            if u == v {
                                continue;
                            }

                            if adj[u as usize].clear_bit(v) {
                                assert!(adj[v as usize].clear_bit(u));
                                assert!(graph.try_remove_edge(u, v));
                                m -= 1;
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        for u in 0..n {
                            graph.remove_edges_at_node(u);
                        }
                        assert!(graph.is_singleton());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
