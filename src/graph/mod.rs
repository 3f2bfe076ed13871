//! 图核心模块
//!
//! 定义边、顶点存储、图抽象以及两种存储后端

mod adjacency;
mod edge;
mod edge_set;
mod graph;
mod vertex;

pub use adjacency::AdjacencyMapGraph;
pub use edge::Edge;
pub use edge_set::EdgeSetGraph;
pub use graph::Graph;
pub use vertex::{Cost, Vertex, VertexSet};
