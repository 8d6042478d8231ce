use bestiary_data::{Creature, CreatureId};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

/// A graph node: a handle into the creature table plus a per-graph tag
/// (stage for taxonomies, role for food webs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesNode<N> {
    pub id: CreatureId,
    pub tag: N,
}

/// Directed multigraph over an owned creature table.
///
/// Creatures live in `creatures`, indexed by `CreatureId`; the graph only
/// stores handles, so parallel edges and back-references never alias data.
#[derive(Debug, Clone)]
pub struct SpeciesGraph<N, E> {
    creatures: Vec<Creature>,
    graph: DiGraph<SpeciesNode<N>, E>,
    id_map: HashMap<CreatureId, NodeIndex>,
}

impl<N, E> Default for SpeciesGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> SpeciesGraph<N, E> {
    pub fn new() -> Self {
        Self {
            creatures: Vec::new(),
            graph: DiGraph::new(),
            id_map: HashMap::new(),
        }
    }

    /// Stores the creature and adds it as a node.
    pub fn add_creature(&mut self, creature: Creature, tag: N) -> CreatureId {
        let id = CreatureId(self.creatures.len());
        self.creatures.push(creature);
        let idx = self.graph.add_node(SpeciesNode { id, tag });
        self.id_map.insert(id, idx);
        id
    }

    /// Adds a directed edge. Unknown handles are ignored and reported as `false`.
    pub fn add_edge(&mut self, from: CreatureId, to: CreatureId, weight: E) -> bool {
        match (self.id_map.get(&from), self.id_map.get(&to)) {
            (Some(&a), Some(&b)) => {
                self.graph.add_edge(a, b, weight);
                true
            }
            _ => false,
        }
    }

    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(id.0)
    }

    pub(crate) fn creature_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        self.creatures.get_mut(id.0)
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn tag(&self, id: CreatureId) -> Option<&N> {
        self.id_map.get(&id).map(|&idx| &self.graph[idx].tag)
    }

    /// Node handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = CreatureId> + '_ {
        self.graph.node_indices().map(move |idx| self.graph[idx].id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn in_degree(&self, id: CreatureId) -> usize {
        self.degree(id, Direction::Incoming)
    }

    pub fn out_degree(&self, id: CreatureId) -> usize {
        self.degree(id, Direction::Outgoing)
    }

    fn degree(&self, id: CreatureId, dir: Direction) -> usize {
        self.id_map
            .get(&id)
            .map_or(0, |&idx| self.graph.neighbors_directed(idx, dir).count())
    }

    /// Handles of the nodes an edge leads to from `id`, one per edge.
    pub fn successors(&self, id: CreatureId) -> Vec<CreatureId> {
        self.neighbors(id, Direction::Outgoing)
    }

    pub fn predecessors(&self, id: CreatureId) -> Vec<CreatureId> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: CreatureId, dir: Direction) -> Vec<CreatureId> {
        let Some(&idx) = self.id_map.get(&id) else {
            return Vec::new();
        };
        let mut out: Vec<_> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|other| self.graph[other].id)
            .collect();
        // petgraph walks adjacency lists newest-first
        out.reverse();
        out
    }

    /// All edges as `(from, to, weight)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (CreatureId, CreatureId, &E)> + '_ {
        self.graph.edge_indices().filter_map(move |e| {
            let (a, b) = self.graph.edge_endpoints(e)?;
            Some((self.graph[a].id, self.graph[b].id, &self.graph[e]))
        })
    }

    /// Nodes together with their creature data, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (CreatureId, &N, &Creature)> + '_ {
        self.graph.node_indices().filter_map(move |idx| {
            let node = &self.graph[idx];
            Some((node.id, &node.tag, self.creatures.get(node.id.0)?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_data::{ProgressionPath, TraitPair};

    fn creature(name: &str) -> Creature {
        Creature::new(
            name,
            TraitPair::single("Fire"),
            TraitPair::single("Feline"),
            ProgressionPath::Natural,
        )
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut g: SpeciesGraph<(), &str> = SpeciesGraph::new();
        let a = g.add_creature(creature("a"), ());
        let b = g.add_creature(creature("b"), ());
        assert!(g.add_edge(a, b, "first"));
        assert!(g.add_edge(a, b, "second"));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.in_degree(b), 2);
        assert_eq!(g.out_degree(a), 2);
        let labels: Vec<_> = g.edges().map(|(_, _, w)| *w).collect();
        assert_eq!(labels, ["first", "second"]);
    }

    #[test]
    fn test_unknown_handle_is_rejected() {
        let mut g: SpeciesGraph<(), ()> = SpeciesGraph::new();
        let a = g.add_creature(creature("a"), ());
        assert!(!g.add_edge(a, CreatureId(42), ()));
        assert_eq!(g.in_degree(CreatureId(42)), 0);
        assert!(g.creature(CreatureId(42)).is_none());
    }

    #[test]
    fn test_successors_in_insertion_order() {
        let mut g: SpeciesGraph<u8, ()> = SpeciesGraph::new();
        let root = g.add_creature(creature("root"), 0);
        let kids: Vec<_> = (0..3)
            .map(|i| g.add_creature(creature(&format!("kid{i}")), 1))
            .collect();
        for &k in &kids {
            g.add_edge(root, k, ());
        }
        assert_eq!(g.successors(root), kids);
        assert_eq!(g.predecessors(kids[1]), vec![root]);
        assert_eq!(g.tag(kids[0]), Some(&1));
    }
}
