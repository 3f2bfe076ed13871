//! 寻路模块
//!
//! 寻路组件与图之间的约定。本库只提供快照结构，不包含具体的搜索算法。

mod snapshot;

use crate::error::Result;

pub use snapshot::{PathNode, PathSnapshot};

/// 寻路器
///
/// 实现者应在构造时从图构建 [`PathSnapshot`]，之后不得修改原图。
pub trait Pathfinder<V, C> {
    /// 尝试查找 `start` 到 `end` 的路径，找到时返回 true
    ///
    /// 起点或终点不在快照中时返回 `InvalidArgument`
    fn find_path(&mut self, start: &V, end: &V) -> Result<bool>;

    /// 最近一次找到的 `start` 到 `end` 的顶点序列，没有路径时为空
    fn get_path_from(&self, start: &V, end: &V) -> Vec<V>;

    /// 路径总代价，没有路径时返回 `None`
    fn get_path_cost(&self, start: &V, end: &V) -> Option<C>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::{EdgeSetGraph, Graph};
    use std::collections::HashMap;

    /// 只识别单跳路径的寻路器，用于验证约定
    struct DirectHop {
        snapshot: PathSnapshot<u32, u32>,
        found: HashMap<(u32, u32), u32>,
    }

    impl Pathfinder<u32, u32> for DirectHop {
        fn find_path(&mut self, start: &u32, end: &u32) -> Result<bool> {
            for v in [start, end] {
                if !self.snapshot.contains(v) {
                    return Err(Error::InvalidArgument(format!(
                        "vertex {} is not in the graph",
                        v
                    )));
                }
            }
            match self.snapshot.cost(start, end) {
                Some(cost) => {
                    self.found.insert((*start, *end), cost);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        fn get_path_from(&self, start: &u32, end: &u32) -> Vec<u32> {
            if self.found.contains_key(&(*start, *end)) {
                vec![*start, *end]
            } else {
                Vec::new()
            }
        }

        fn get_path_cost(&self, start: &u32, end: &u32) -> Option<u32> {
            self.found.get(&(*start, *end)).copied()
        }
    }

    fn direct_hop(g: &EdgeSetGraph<u32, u32>) -> DirectHop {
        DirectHop {
            snapshot: PathSnapshot::build(g).unwrap(),
            found: HashMap::new(),
        }
    }

    #[test]
    fn test_pathfinder_contract() {
        let mut g: EdgeSetGraph<u32, u32> = EdgeSetGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2, 6).unwrap();

        let mut finder = direct_hop(&g);

        assert!(finder.get_path_from(&1, &2).is_empty());
        assert!(finder.find_path(&1, &2).unwrap());
        assert_eq!(finder.get_path_from(&1, &2), vec![1, 2]);
        assert_eq!(finder.get_path_cost(&1, &2), Some(6));

        assert!(!finder.find_path(&2, &1).unwrap());
        assert_eq!(finder.get_path_cost(&2, &1), None);
    }

    #[test]
    fn test_find_path_rejects_unknown_endpoints() {
        let mut g: EdgeSetGraph<u32, u32> = EdgeSetGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2, 6).unwrap();

        let mut finder = direct_hop(&g);
        assert!(finder.find_path(&9, &2).unwrap_err().is_invalid_argument());
        assert!(finder.find_path(&1, &9).unwrap_err().is_invalid_argument());
        assert!(finder.get_path_from(&9, &2).is_empty());
    }
}
