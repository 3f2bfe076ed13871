//! 数据导入模块
//!
//! 从 JSON 文档批量导入顶点和边，以及把图导出为同样的文档格式

use crate::error::{Error, Result};
use crate::graph::{Cost, Edge, Graph, Vertex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    /// 已存在而未新增的顶点/边
    pub duplicates: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 边记录（JSON 格式），字段可能为 null
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord<V, C> {
    pub source: Option<V>,
    pub destination: Option<V>,
    pub cost: Option<C>,
}

impl<V, C> From<Edge<V, C>> for EdgeRecord<V, C> {
    fn from(edge: Edge<V, C>) -> Self {
        let (source, destination, cost) = edge.into_parts();
        Self {
            source: Some(source),
            destination: Some(destination),
            cost: Some(cost),
        }
    }
}

/// 图文档：先顶点，后边
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>, C: Deserialize<'de>"))]
pub struct GraphDocument<V, C> {
    #[serde(default)]
    pub vertices: Vec<Option<V>>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord<V, C>>,
}

#[derive(Clone, Copy)]
enum RecordKind {
    Vertex,
    Edge,
}

/// 批量导入器
pub struct GraphImporter<'g, G> {
    graph: &'g mut G,
    strict: bool,
}

impl<'g, G> GraphImporter<'g, G> {
    /// 创建导入器，默认严格模式
    pub fn new(graph: &'g mut G) -> Self {
        Self {
            graph,
            strict: true,
        }
    }

    /// 严格模式下遇到第一条无效记录即返回错误，否则计入统计后跳过
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 导入文档
    pub fn import<V, C>(&mut self, doc: GraphDocument<V, C>) -> Result<ImportStats>
    where
        V: Vertex,
        C: Cost,
        G: Graph<V, C>,
    {
        let start = Instant::now();
        let mut stats = ImportStats::default();

        for (index, vertex) in doc.vertices.into_iter().enumerate() {
            let outcome = vertex
                .ok_or_else(|| {
                    Error::InvalidArgument(format!("vertex #{} cannot be null", index))
                })
                .map(|v| self.graph.add_vertex(v));
            self.record(outcome, RecordKind::Vertex, &mut stats)?;
        }

        for (index, record) in doc.edges.into_iter().enumerate() {
            let outcome = self.import_edge(record).map_err(|e| match e {
                Error::InvalidArgument(msg) => {
                    Error::InvalidArgument(format!("edge #{}: {}", index, msg))
                }
                other => other,
            });
            self.record(outcome, RecordKind::Edge, &mut stats)?;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(
            backend = self.graph.name(),
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            errors = stats.errors,
            "import finished"
        );
        Ok(stats)
    }

    /// 从 JSON 字符串导入
    pub fn import_json<V, C>(&mut self, json: &str) -> Result<ImportStats>
    where
        V: Vertex + DeserializeOwned,
        C: Cost + DeserializeOwned,
        G: Graph<V, C>,
    {
        let doc: GraphDocument<V, C> = serde_json::from_str(json)?;
        self.import(doc)
    }

    /// 从 JSON 文件导入
    pub fn import_file<V, C, P>(&mut self, path: P) -> Result<ImportStats>
    where
        V: Vertex + DeserializeOwned,
        C: Cost + DeserializeOwned,
        G: Graph<V, C>,
        P: AsRef<Path>,
    {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Serialization(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;
        self.import_json::<V, C>(&content)
    }

    fn import_edge<V, C>(&mut self, record: EdgeRecord<V, C>) -> Result<bool>
    where
        V: Vertex,
        C: Cost,
        G: Graph<V, C>,
    {
        let cost = record
            .cost
            .ok_or_else(|| Error::invalid_argument("cost cannot be null"))?;
        let edge = Edge::build(record.source, record.destination, cost)?;
        let (source, destination, cost) = edge.into_parts();
        self.graph.add_edge(source, destination, cost)
    }

    fn record(
        &self,
        outcome: Result<bool>,
        kind: RecordKind,
        stats: &mut ImportStats,
    ) -> Result<()> {
        match outcome {
            Ok(true) => match kind {
                RecordKind::Vertex => stats.vertices_imported += 1,
                RecordKind::Edge => stats.edges_imported += 1,
            },
            Ok(false) => stats.duplicates += 1,
            Err(e) if !self.strict => {
                warn!(error = %e, "skipping invalid record");
                stats.errors += 1;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

/// 把图导出为文档，顶点和边按值排序
pub fn export<V, C, G>(graph: &G) -> GraphDocument<V, C>
where
    V: Vertex + Ord,
    C: Cost,
    G: Graph<V, C> + ?Sized,
{
    let mut vertices: Vec<V> = graph.get_vertices().iter().cloned().collect();
    vertices.sort();

    let mut edges: Vec<Edge<V, C>> = graph.get_all_edges().into_iter().collect();
    edges.sort_by(|a, b| {
        (a.source(), a.destination(), a.cost()).cmp(&(b.source(), b.destination(), b.cost()))
    });

    GraphDocument {
        vertices: vertices.into_iter().map(Some).collect(),
        edges: edges.into_iter().map(EdgeRecord::from).collect(),
    }
}
