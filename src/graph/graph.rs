//! 图抽象
//!
//! 所有存储后端共同实现的操作集合：顶点/边的增删、邻接查询与批量查询

use super::edge::Edge;
use super::vertex::{Cost, Vertex, VertexSet};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// 带权有向图
///
/// 顶点集合的只读查询由共享的 [`VertexSet`] 提供默认实现，其余操作由各后端
/// 直接实现。两个后端对同一有序点对上的多条边语义不同：
///
/// - [`EdgeSetGraph`](super::EdgeSetGraph) 允许代价不同的平行边（多重图）
/// - [`AdjacencyMapGraph`](super::AdjacencyMapGraph) 每个有序点对最多一条边，新代价覆盖旧代价
///
/// 需要多重图语义的调用方必须清楚自己持有的是哪一个后端。
pub trait Graph<V: Vertex, C: Cost> {
    /// 后端名称
    fn name(&self) -> &'static str;

    /// 共享顶点集合
    fn vertex_set(&self) -> &VertexSet<V>;

    /// 清空所有顶点和边
    fn clear(&mut self);

    /// 图中是否包含顶点 `v`
    fn contains(&self, v: &V) -> bool {
        self.vertex_set().contains(v)
    }

    /// 同 [`Graph::contains`]
    fn contains_vertex(&self, v: &V) -> bool {
        self.contains(v)
    }

    /// 图中没有任何顶点
    fn is_empty(&self) -> bool {
        self.vertex_set().is_empty()
    }

    /// 顶点数量
    fn size(&self) -> usize {
        self.vertex_set().len()
    }

    /// 添加顶点，已存在时返回 false
    fn add_vertex(&mut self, v: V) -> bool;

    /// 添加一条 `v1 -> v2` 的边
    ///
    /// 任一端点不在图中时返回 `InvalidArgument`。返回值表示是否新增了一条逻辑边。
    fn add_edge(&mut self, v1: V, v2: V, cost: C) -> Result<bool>;

    /// 删除顶点及所有与其相连的边（出边和入边）
    fn remove_vertex(&mut self, v: &V) -> bool;

    /// 删除边 `(v1, v2, cost)`，仅当确实删除了一条边时返回 true
    fn remove_edge(&mut self, v1: &V, v2: &V, cost: &C) -> bool;

    /// 获取 `v1 -> v2` 的代价，不存在时返回 `None`
    fn get_edge_cost(&self, v1: &V, v2: &V) -> Option<C>;

    /// 是否至少存在一条 `v1 -> v2` 的边
    fn are_adjacent(&self, v1: &V, v2: &V) -> bool;

    /// 经一条边可从 `v` 到达的顶点
    fn get_adjacent(&self, v: &V) -> HashSet<V>;

    /// 所有顶点的只读视图
    fn get_vertices(&self) -> &HashSet<V> {
        self.vertex_set().as_set()
    }

    /// 以 `v` 为源的所有边，`v` 不在图中时返回空集合
    fn get_edges(&self, v: &V) -> HashSet<Edge<V, C>>;

    /// 图中所有边
    fn get_all_edges(&self) -> HashSet<Edge<V, C>>;

    /// 逻辑边数量
    fn edge_count(&self) -> usize;
}

/// 校验边的两个端点都已在图中
pub(crate) fn check_endpoints<V: Vertex>(vertices: &VertexSet<V>, v1: &V, v2: &V) -> Result<()> {
    if !vertices.contains_both(v1, v2) {
        return Err(Error::InvalidArgument(format!(
            "both vertices must be in the graph to add an edge: {:?} -> {:?}",
            v1, v2
        )));
    }
    Ok(())
}
