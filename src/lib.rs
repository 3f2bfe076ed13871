//! CostGraph - 带权有向图
//!
//! 统一的图抽象与两种可互换的存储后端：
//! - 边集后端：允许同一点对上代价不同的平行边（多重图）
//! - 邻接映射后端：每个有序点对最多一条边（简单图）
//!
//! 以及只读的周边组件：JSON 导入导出、文本打印、寻路快照和随机负载剖析。

pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod path;
pub mod profile;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{AdjacencyMapGraph, Cost, Edge, EdgeSetGraph, Graph, Vertex, VertexSet};
pub use path::{PathSnapshot, Pathfinder};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
