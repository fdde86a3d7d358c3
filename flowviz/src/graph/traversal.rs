//! Index-based adjacency and the iterative depth-first walk shared by the
//! analyzer (cycle check) and the layout (back-edge removal).

use std::collections::HashMap;

/// Adjacency over node indices; successors are kept in edge order, duplicates included.
pub(crate) struct Adjacency {
    /// `successors[u]` holds `(edge_index, v)` for every edge `u -> v`.
    successors: Vec<Vec<(usize, usize)>>,
}

impl Adjacency {
    /// Builds adjacency for `nodes`; edges whose endpoints are not in `nodes` are skipped.
    pub(crate) fn new<'a, I>(nodes: &[String], edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        let mut successors = vec![Vec::new(); nodes.len()];
        for (edge_index, (from, to)) in edges.into_iter().enumerate() {
            if let (Some(&u), Some(&v)) = (index.get(from), index.get(to)) {
                successors[u].push((edge_index, v));
            }
        }
        Self { successors }
    }

    pub(crate) fn len(&self) -> usize {
        self.successors.len()
    }

    pub(crate) fn successors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.successors[u].iter().map(|&(_, v)| v)
    }

    pub(crate) fn out_degree(&self, u: usize) -> usize {
        self.successors[u].len()
    }

    pub(crate) fn in_degrees(&self) -> Vec<usize> {
        let mut indegree = vec![0usize; self.len()];
        for succ in &self.successors {
            for &(_, v) in succ {
                indegree[v] += 1;
            }
        }
        indegree
    }

    /// Depth-first walk from every unvisited node in index order, reporting the
    /// indices of edges that point at a node currently on the DFS path.
    ///
    /// Uses an explicit stack of `(node, next successor position)` frames instead of
    /// recursion. When `stop_at_first` is set the walk returns after the first back edge.
    pub(crate) fn back_edges(&self, stop_at_first: bool) -> Vec<usize> {
        let n = self.len();
        let mut visited = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut found = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            on_stack[root] = true;
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

            while let Some(frame) = stack.last_mut() {
                let (u, pos) = *frame;
                match self.successors[u].get(pos) {
                    Some(&(edge_index, v)) => {
                        frame.1 += 1;
                        if !visited[v] {
                            visited[v] = true;
                            on_stack[v] = true;
                            stack.push((v, 0));
                        } else if on_stack[v] {
                            found.push(edge_index);
                            if stop_at_first {
                                return found;
                            }
                        }
                    }
                    None => {
                        on_stack[u] = false;
                        stack.pop();
                    }
                }
            }
        }
        found
    }
}
