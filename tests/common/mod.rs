use std::collections::BTreeSet;
use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use matrix_graph::{Adjacency, Distance, Graph, Weight};
use scopeguard::{OnUnwind, ScopeGuard};

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Logs the value if the test panics while it is alive.
#[allow(dead_code)]
pub fn guard<T: std::fmt::Debug>(t: T) -> ScopeGuard<T, impl FnOnce(T), OnUnwind> {
    scopeguard::guard_on_unwind(t, |t| log::error!("Crash with {t:?}"))
}

/// Graph on labels 'A'.. with the given edges given as labels.
#[allow(dead_code)]
pub fn lettered<S: Adjacency>(n: u8, edges: &[(char, char, Weight)]) -> Graph<char, S> {
    let mut g = Graph::new((0..n).map(|i| (b'A' + i) as char));
    for (a, b, w) in edges {
        assert!(g.connect(a, b, *w).unwrap());
    }
    g
}

/// Plain adjacency sets, the reference everything is checked against.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Dumb {
    pub adj: Vec<BTreeSet<usize>>,
    pub edges: Vec<(usize, usize, Weight)>,
}

#[allow(dead_code)]
impl Dumb {
    pub fn from_graph<L, S>(g: &Graph<L, S>) -> Self
    where
        L: PartialEq + Clone + std::fmt::Debug,
        S: Adjacency,
    {
        let mut adj = vec![BTreeSet::new(); g.vertex_count()];
        let mut edges = vec![];
        for u in 0..g.vertex_count() {
            for v in 0..g.vertex_count() {
                if let Some(w) = g.weight(u, v) {
                    adj[u].insert(v);
                    if u < v {
                        edges.push((u, v, w));
                    }
                }
            }
        }
        Self { adj, edges }
    }

    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Vertices reachable from u without going through `removed`.
    pub fn reachable(&self, u: usize, removed: Option<usize>) -> BTreeSet<usize> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![u];
        while let Some(u) = stack.pop() {
            if Some(u) != removed && seen.insert(u) {
                stack.extend(self.adj[u].iter().copied());
            }
        }
        seen
    }

    /// Number of connected components, ignoring `removed`.
    pub fn components(&self, removed: Option<usize>) -> usize {
        let mut seen = BTreeSet::new();
        let mut count = 0;
        for u in 0..self.n() {
            if Some(u) != removed && !seen.contains(&u) {
                count += 1;
                seen.extend(self.reachable(u, removed));
            }
        }
        count
    }

    /// Vertices whose removal increases the number of components.
    pub fn articulation_points(&self) -> Vec<usize> {
        let base = self.components(None);
        (0..self.n())
            .filter(|&u| self.components(Some(u)) > base)
            .collect()
    }

    /// Floyd–Warshall distances.
    pub fn distances(&self) -> Vec<Vec<Option<Distance>>> {
        let n = self.n();
        let mut d = vec![vec![None; n]; n];
        for u in 0..n {
            d[u][u] = Some(0);
        }
        for &(u, v, w) in &self.edges {
            d[u][v] = Some(Distance::from(w));
            d[v][u] = Some(Distance::from(w));
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                        if d[i][j].map_or(true, |c| a + b < c) {
                            d[i][j] = Some(a + b);
                        }
                    }
                }
            }
        }
        d
    }

    /// Weight of the minimum spanning tree of the component containing `start`, by trying every subset
    /// of edges with the right size. Only usable on small graphs.
    pub fn brute_mst_weight(&self, start: usize) -> Distance {
        let comp = self.reachable(start, None);
        let edges: Vec<_> = self
            .edges
            .iter()
            .copied()
            .filter(|(u, _, _)| comp.contains(u))
            .collect();
        let mut best: Option<Distance> = None;
        let mut chosen = vec![];
        let mut check = |tree: &[(usize, usize, Weight)]| {
            let mut t = Dumb {
                adj: vec![BTreeSet::new(); self.n()],
                edges: vec![],
            };
            for &(u, v, _) in tree {
                t.adj[u].insert(v);
                t.adj[v].insert(u);
            }
            if t.reachable(start, None) == comp {
                let w: Distance = tree.iter().map(|e| Distance::from(e.2)).sum();
                if best.map_or(true, |b| w < b) {
                    best = Some(w);
                }
            }
        };
        Self::choose(&edges, 0, comp.len() - 1, &mut chosen, &mut check);
        best.expect("component always has a spanning tree")
    }

    fn choose(
        edges: &[(usize, usize, Weight)],
        from: usize,
        k: usize,
        chosen: &mut Vec<(usize, usize, Weight)>,
        f: &mut impl FnMut(&[(usize, usize, Weight)]),
    ) {
        if chosen.len() == k {
            f(chosen);
            return;
        }
        for i in from..edges.len() {
            if edges.len() - i < k - chosen.len() {
                break;
            }
            chosen.push(edges[i]);
            Self::choose(edges, i + 1, k, chosen, f);
            chosen.pop();
        }
    }
}
