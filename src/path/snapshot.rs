//! 寻路快照
//!
//! 从图中一次性读取顶点和边，构建寻路使用的节点/邻接结构

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph, Vertex};
use std::collections::hash_map::Keys;
use std::collections::HashMap;

/// 寻路节点
#[derive(Debug, Clone)]
pub struct PathNode<V, C> {
    vertex: V,
    /// 出边 (目标, 代价)，平行边各占一项，按目标和代价排序
    edges: Vec<(V, C)>,
}

impl<V: Vertex, C: Cost> PathNode<V, C> {
    fn new(vertex: V) -> Self {
        Self {
            vertex,
            edges: Vec::new(),
        }
    }

    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    /// 出边 (目标, 代价)
    pub fn edges(&self) -> &[(V, C)] {
        &self.edges
    }

    /// 邻居顶点，平行边只出现一次
    pub fn neighbors(&self) -> impl Iterator<Item = &V> {
        let mut last: Option<&V> = None;
        self.edges.iter().filter_map(move |(dst, _)| {
            if last == Some(dst) {
                return None;
            }
            last = Some(dst);
            Some(dst)
        })
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

/// 图拓扑的只读快照
///
/// 构建后不再感知原图的变化，调用方需在图稳定后再构建。
#[derive(Debug, Clone)]
pub struct PathSnapshot<V, C> {
    nodes: HashMap<V, PathNode<V, C>>,
}

impl<V: Vertex + Ord, C: Cost> PathSnapshot<V, C> {
    /// 从图构建快照，空图返回 `InvalidArgument`
    pub fn build<G>(graph: &G) -> Result<Self>
    where
        G: Graph<V, C> + ?Sized,
    {
        if graph.is_empty() {
            return Err(Error::invalid_argument(
                "cannot build a path snapshot for an empty graph",
            ));
        }

        let mut nodes: HashMap<V, PathNode<V, C>> = graph
            .get_vertices()
            .iter()
            .map(|v| (v.clone(), PathNode::new(v.clone())))
            .collect();

        for edge in graph.get_all_edges() {
            let (source, destination, cost) = edge.into_parts();
            if let Some(node) = nodes.get_mut(&source) {
                node.edges.push((destination, cost));
            }
        }
        for node in nodes.values_mut() {
            node.edges.sort();
        }

        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.nodes.contains_key(v)
    }

    pub fn node(&self, v: &V) -> Option<&PathNode<V, C>> {
        self.nodes.get(v)
    }

    pub fn vertices(&self) -> Keys<'_, V, PathNode<V, C>> {
        self.nodes.keys()
    }

    /// `v` 的邻居，`v` 不在快照中时为空
    pub fn neighbors(&self, v: &V) -> Vec<&V> {
        self.nodes
            .get(v)
            .map(|node| node.neighbors().collect())
            .unwrap_or_default()
    }

    /// `v1 -> v2` 的最小代价
    pub fn cost(&self, v1: &V, v2: &V) -> Option<C> {
        self.nodes
            .get(v1)?
            .edges
            .iter()
            .filter(|(dst, _)| dst == v2)
            .map(|(_, cost)| cost)
            .min()
            .cloned()
    }
}
