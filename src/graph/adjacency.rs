//! 邻接映射后端
//!
//! 源顶点 -> (目标顶点 -> 代价) 的两级映射，每个有序点对最多一条边

use super::edge::Edge;
use super::graph::{check_endpoints, Graph};
use super::vertex::{Cost, Vertex, VertexSet};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// 邻接映射图（简单图语义）
///
/// 不变量：顶点集合中的每个顶点在 `adjacency` 中都有一个（可能为空的）内层映射，
/// 在顶点插入时建立，随顶点删除一并移除。
#[derive(Debug, Clone)]
pub struct AdjacencyMapGraph<V, C> {
    /// 顶点集合
    vertices: VertexSet<V>,
    /// 出边映射
    adjacency: HashMap<V, HashMap<V, C>>,
}

impl<V: Vertex, C: Cost> AdjacencyMapGraph<V, C> {
    pub fn new() -> Self {
        Self {
            vertices: VertexSet::new(),
            adjacency: HashMap::new(),
        }
    }

    /// 按预计顶点数预分配
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: VertexSet::with_capacity(vertex_count),
            adjacency: HashMap::with_capacity(vertex_count),
        }
    }

    /// 顶点的出边映射
    pub fn successors(&self, v: &V) -> Option<&HashMap<V, C>> {
        self.adjacency.get(v)
    }

    /// 顶点出度
    pub fn out_degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, HashMap::len)
    }
}

impl<V: Vertex, C: Cost> Default for AdjacencyMapGraph<V, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, C: Cost> Graph<V, C> for AdjacencyMapGraph<V, C> {
    fn name(&self) -> &'static str {
        "adjacency-map"
    }

    fn vertex_set(&self) -> &VertexSet<V> {
        &self.vertices
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }

    fn add_vertex(&mut self, v: V) -> bool {
        if !self.vertices.insert(v.clone()) {
            return false;
        }
        self.adjacency.insert(v, HashMap::new());
        true
    }

    /// 点对上已有相同代价时返回 false；代价不同则覆盖并返回 true
    fn add_edge(&mut self, v1: V, v2: V, cost: C) -> Result<bool> {
        check_endpoints(&self.vertices, &v1, &v2)?;

        let Some(successors) = self.adjacency.get_mut(&v1) else {
            return Err(Error::InternalError(format!(
                "vertex {:?} has no successor map",
                v1
            )));
        };
        match successors.get(&v2) {
            Some(existing) if *existing == cost => return Ok(false),
            Some(existing) => {
                trace!(destination = ?v2, old = ?existing, new = ?cost, "edge cost overwritten");
            }
            None => {}
        }
        successors.insert(v2, cost);
        Ok(true)
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        if !self.vertices.remove(v) {
            return false;
        }

        let outgoing = self.adjacency.remove(v).map_or(0, |m| m.len());
        let mut incoming = 0;
        for successors in self.adjacency.values_mut() {
            if successors.remove(v).is_some() {
                incoming += 1;
            }
        }

        debug!(vertex = ?v, outgoing, incoming, "vertex removed");
        true
    }

    /// 仅当存储的代价与 `cost` 相等时才删除
    fn remove_edge(&mut self, v1: &V, v2: &V, cost: &C) -> bool {
        let Some(successors) = self.adjacency.get_mut(v1) else {
            return false;
        };
        if successors.get(v2) != Some(cost) {
            return false;
        }
        successors.remove(v2);
        true
    }

    fn get_edge_cost(&self, v1: &V, v2: &V) -> Option<C> {
        self.adjacency.get(v1)?.get(v2).cloned()
    }

    fn are_adjacent(&self, v1: &V, v2: &V) -> bool {
        if !self.vertices.contains(v2) {
            return false;
        }
        self.adjacency
            .get(v1)
            .is_some_and(|successors| successors.contains_key(v2))
    }

    fn get_adjacent(&self, v: &V) -> HashSet<V> {
        self.adjacency
            .get(v)
            .map(|successors| successors.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn get_edges(&self, v: &V) -> HashSet<Edge<V, C>> {
        self.adjacency
            .get(v)
            .map(|successors| {
                successors
                    .iter()
                    .map(|(dst, cost)| Edge::new(v.clone(), dst.clone(), cost.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_all_edges(&self) -> HashSet<Edge<V, C>> {
        self.adjacency
            .iter()
            .flat_map(|(src, successors)| {
                successors
                    .iter()
                    .map(move |(dst, cost)| Edge::new(src.clone(), dst.clone(), cost.clone()))
            })
            .collect()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }
}
