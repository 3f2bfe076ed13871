//! 边集后端
//!
//! 以扁平的边集合存储所有边，同一有序点对上允许存在代价不同的平行边

use super::edge::Edge;
use super::graph::{check_endpoints, Graph};
use super::vertex::{Cost, Vertex, VertexSet};
use crate::error::Result;
use std::collections::HashSet;
use tracing::debug;

/// 边集图（多重图语义）
///
/// 邻接查询都是对边集合的线性扫描。
#[derive(Debug, Clone)]
pub struct EdgeSetGraph<V, C> {
    /// 顶点集合
    vertices: VertexSet<V>,
    /// 边集合
    edges: HashSet<Edge<V, C>>,
}

impl<V: Vertex, C: Cost> EdgeSetGraph<V, C> {
    pub fn new() -> Self {
        Self {
            vertices: VertexSet::new(),
            edges: HashSet::new(),
        }
    }

    /// 按预计规模预分配
    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: VertexSet::with_capacity(vertex_count),
            edges: HashSet::with_capacity(edge_count),
        }
    }

    /// `v1 -> v2` 上所有平行边的代价，升序
    pub fn get_edge_costs(&self, v1: &V, v2: &V) -> Vec<C> {
        let mut costs: Vec<C> = self
            .edges_between(v1, v2)
            .map(|e| e.cost().clone())
            .collect();
        costs.sort();
        costs
    }

    fn edges_between<'a>(&'a self, v1: &'a V, v2: &'a V) -> impl Iterator<Item = &'a Edge<V, C>> {
        self.edges
            .iter()
            .filter(move |e| e.source() == v1 && e.destination() == v2)
    }
}

impl<V: Vertex, C: Cost> Default for EdgeSetGraph<V, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, C: Cost> Graph<V, C> for EdgeSetGraph<V, C> {
    fn name(&self) -> &'static str {
        "edge-set"
    }

    fn vertex_set(&self) -> &VertexSet<V> {
        &self.vertices
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    fn add_vertex(&mut self, v: V) -> bool {
        self.vertices.insert(v)
    }

    fn add_edge(&mut self, v1: V, v2: V, cost: C) -> Result<bool> {
        check_endpoints(&self.vertices, &v1, &v2)?;
        let added = self.edges.insert(Edge::new(v1, v2, cost));
        Ok(added)
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        if !self.vertices.contains(v) {
            return false;
        }

        // 先算出关联边，删除顶点后再逐条移除
        let incident: Vec<Edge<V, C>> = self
            .edges
            .iter()
            .filter(|e| e.source() == v || e.destination() == v)
            .cloned()
            .collect();

        self.vertices.remove(v);
        for edge in &incident {
            self.edges.remove(edge);
        }

        debug!(vertex = ?v, removed_edges = incident.len(), "vertex removed");
        true
    }

    fn remove_edge(&mut self, v1: &V, v2: &V, cost: &C) -> bool {
        let edge = Edge::new(v1.clone(), v2.clone(), cost.clone());
        self.edges.remove(&edge)
    }

    /// 存在平行边时取最小代价
    fn get_edge_cost(&self, v1: &V, v2: &V) -> Option<C> {
        self.edges_between(v1, v2).map(|e| e.cost()).min().cloned()
    }

    fn are_adjacent(&self, v1: &V, v2: &V) -> bool {
        if !self.vertices.contains_both(v1, v2) {
            return false;
        }
        self.edges_between(v1, v2).next().is_some()
    }

    fn get_adjacent(&self, v: &V) -> HashSet<V> {
        self.edges
            .iter()
            .filter(|e| e.source() == v)
            .map(|e| e.destination().clone())
            .collect()
    }

    fn get_edges(&self, v: &V) -> HashSet<Edge<V, C>> {
        self.edges
            .iter()
            .filter(|e| e.source() == v)
            .cloned()
            .collect()
    }

    fn get_all_edges(&self) -> HashSet<Edge<V, C>> {
        self.edges.clone()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EdgeSetGraph<u32, i64> {
        let mut g = EdgeSetGraph::new();
        for v in 1..=3 {
            g.add_vertex(v);
        }
        g.add_edge(1, 2, 10).unwrap();
        g.add_edge(2, 3, 5).unwrap();
        g
    }

    #[test]
    fn test_parallel_edges() {
        let mut g = sample();

        assert!(g.add_edge(1, 2, 7).unwrap());
        assert!(!g.add_edge(1, 2, 7).unwrap());

        let edges = g.get_edges(&1);
        assert_eq!(edges.len(), 2);
        assert!(edges.contains(&Edge::new(1, 2, 10)));
        assert!(edges.contains(&Edge::new(1, 2, 7)));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.get_edge_costs(&1, &2), vec![7, 10]);
    }

    #[test]
    fn test_edge_cost_takes_minimum() {
        let mut g = sample();
        g.add_edge(1, 2, 3).unwrap();
        g.add_edge(1, 2, 42).unwrap();

        assert_eq!(g.get_edge_cost(&1, &2), Some(3));
        assert_eq!(g.get_edge_cost(&2, &1), None);
    }

    #[test]
    fn test_remove_edge_reports_removal() {
        let mut g = sample();
        g.add_edge(1, 2, 7).unwrap();

        assert!(g.remove_edge(&1, &2, &10));
        assert!(!g.remove_edge(&1, &2, &10));
        assert!(g.are_adjacent(&1, &2));
        assert_eq!(g.get_edge_cost(&1, &2), Some(7));

        assert!(g.remove_edge(&1, &2, &7));
        assert!(!g.are_adjacent(&1, &2));
    }

    #[test]
    fn test_remove_vertex_drops_parallel_and_incoming_edges() {
        let mut g = sample();
        g.add_edge(1, 2, 7).unwrap();
        g.add_edge(3, 2, 1).unwrap();
        g.add_edge(2, 2, 0).unwrap();

        assert!(g.remove_vertex(&2));
        assert!(!g.remove_vertex(&2));
        assert_eq!(g.edge_count(), 0);
        assert!(g.get_adjacent(&1).is_empty());
        assert!(g.get_adjacent(&3).is_empty());
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut g: EdgeSetGraph<u32, i64> = EdgeSetGraph::with_capacity(8, 32);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);

        g.add_vertex(1);
        assert!(g.add_edge(1, 1, -1).unwrap());
        assert_eq!(g.get_edge_costs(&1, &1), vec![-1]);
    }

    #[test]
    fn test_adjacency_requires_both_vertices() {
        let g = sample();
        assert!(!g.are_adjacent(&1, &99));
        assert!(!g.are_adjacent(&99, &1));
        assert!(g.get_edges(&99).is_empty());
    }
}
