//! 顶点存储
//!
//! 各后端共用的顶点集合簿记：数量、成员判断、插入与删除

use std::collections::hash_set::{HashSet, Iter};
use std::fmt::Debug;
use std::hash::Hash;

/// 顶点约束：按值比较且哈希稳定
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// 代价约束：全序用于平行边的确定性取值
pub trait Cost: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Cost for T {}

/// 顶点集合
#[derive(Debug, Clone)]
pub struct VertexSet<V> {
    vertices: HashSet<V>,
}

impl<V: Vertex> VertexSet<V> {
    /// 创建空集合
    pub fn new() -> Self {
        Self {
            vertices: HashSet::new(),
        }
    }

    /// 按预计顶点数预分配
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: HashSet::with_capacity(capacity),
        }
    }

    /// 插入顶点，已存在时返回 false
    pub fn insert(&mut self, v: V) -> bool {
        self.vertices.insert(v)
    }

    /// 删除顶点
    pub fn remove(&mut self, v: &V) -> bool {
        self.vertices.remove(v)
    }

    pub fn contains(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// 两个端点是否都在集合中
    pub fn contains_both(&self, v1: &V, v2: &V) -> bool {
        self.vertices.contains(v1) && self.vertices.contains(v2)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn iter(&self) -> Iter<'_, V> {
        self.vertices.iter()
    }

    /// 只读视图
    pub fn as_set(&self) -> &HashSet<V> {
        &self.vertices
    }
}

impl<V: Vertex> Default for VertexSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V: Vertex> IntoIterator for &'a VertexSet<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_set_basic() {
        let mut set = VertexSet::new();
        assert!(set.is_empty());

        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.insert(2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(set.contains_both(&1, &2));
        assert!(!set.contains_both(&1, &3));

        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert_eq!(set.len(), 1);

        let mut seen = Vec::new();
        for v in &set {
            seen.push(*v);
        }
        assert_eq!(seen, vec![2]);

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
