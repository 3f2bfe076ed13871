//! 图打印器
//!
//! 提供表格、垂直和 JSON 格式的图文本输出。只读取图，不做任何修改。

use crate::error::Result;
use crate::graph::{Cost, Graph, Vertex};
use crate::import::export;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
    /// JSON 文档
    Json,
}

/// 图打印器
pub struct GraphPrinter {
    mode: PrintMode,
}

impl Default for GraphPrinter {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl GraphPrinter {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 格式化整张图
    pub fn format_graph<V, C, G>(&self, graph: &G) -> Result<String>
    where
        V: Vertex + Ord + Display + Serialize,
        C: Cost + Display + Serialize,
        G: Graph<V, C> + ?Sized,
    {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(&export(graph))?);
        }

        let rows = adjacency_rows(graph);
        if rows.is_empty() {
            return Ok("Empty graph\n".to_string());
        }

        let output = match self.mode {
            PrintMode::Vertical => format_vertical(&rows),
            _ => format_table(&rows),
        };
        Ok(format!(
            "{}\n{} vertex(es), {} edge(s)\n",
            output,
            graph.size(),
            graph.edge_count()
        ))
    }

    /// 打印统计信息
    pub fn format_stats<V, C, G>(&self, graph: &G) -> String
    where
        V: Vertex,
        C: Cost,
        G: Graph<V, C> + ?Sized,
    {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Backend", graph.name()]);
        table.add_row(row!["Vertex Count", graph.size().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.to_string()
    }
}

/// 每个顶点一行：(顶点, "目标(代价), ...")，按顶点和目标排序
fn adjacency_rows<V, C, G>(graph: &G) -> Vec<(String, String)>
where
    V: Vertex + Ord + Display,
    C: Cost + Display,
    G: Graph<V, C> + ?Sized,
{
    let mut vertices: Vec<&V> = graph.get_vertices().iter().collect();
    vertices.sort();

    vertices
        .into_iter()
        .map(|v| {
            let mut adjacent: Vec<V> = graph.get_adjacent(v).into_iter().collect();
            adjacent.sort();
            let cells: Vec<String> = adjacent
                .iter()
                .map(|adj| match graph.get_edge_cost(v, adj) {
                    Some(cost) => format!("{}({})", adj, cost),
                    None => adj.to_string(),
                })
                .collect();
            (v.to_string(), cells.join(", "))
        })
        .collect()
}

/// 表格格式
fn format_table(rows: &[(String, String)]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["(V)", "(E)"]);

    for (vertex, edges) in rows {
        table.add_row(Row::new(vec![Cell::new(vertex), Cell::new(edges)]));
    }

    table.to_string()
}

/// 垂直格式
fn format_vertical(rows: &[(String, String)]) -> String {
    let mut output = String::new();

    for (i, (vertex, edges)) in rows.iter().enumerate() {
        output.push_str(&format!(
            "*************************** {}. vertex ***************************\n",
            i + 1
        ));
        output.push_str(&format!("(V): {}\n(E): {}\n", vertex, edges));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyMapGraph, EdgeSetGraph};

    fn sample() -> EdgeSetGraph<u32, u32> {
        let mut g = EdgeSetGraph::new();
        for v in 1..=3 {
            g.add_vertex(v);
        }
        g.add_edge(1, 3, 2).unwrap();
        g.add_edge(1, 2, 10).unwrap();
        g.add_edge(2, 3, 5).unwrap();
        g
    }

    #[test]
    fn test_adjacency_rows_sorted() {
        let rows = adjacency_rows(&sample());
        assert_eq!(
            rows,
            vec![
                ("1".to_string(), "2(10), 3(2)".to_string()),
                ("2".to_string(), "3(5)".to_string()),
                ("3".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_format_table() {
        let output = GraphPrinter::default().format_graph(&sample()).unwrap();
        assert!(output.contains("(V)"));
        assert!(output.contains("2(10), 3(2)"));
        assert!(output.contains("3 vertex(es), 3 edge(s)"));
    }

    #[test]
    fn test_format_vertical() {
        let printer = GraphPrinter::new(PrintMode::Vertical);
        let output = printer.format_graph(&sample()).unwrap();
        assert!(output.contains("1. vertex"));
        assert!(output.contains("(E): 3(5)"));
    }

    #[test]
    fn test_format_json() {
        let mut printer = GraphPrinter::default();
        assert_eq!(printer.mode(), PrintMode::Table);
        printer.set_mode(PrintMode::Json);
        assert_eq!(printer.mode(), PrintMode::Json);
        let output = printer.format_graph(&sample()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["vertices"].as_array().unwrap().len(), 3);
        assert_eq!(value["edges"][0]["destination"], 2);
        assert_eq!(value["edges"][0]["cost"], 10);
    }

    #[test]
    fn test_format_empty_and_stats() {
        let g: AdjacencyMapGraph<u32, u32> = AdjacencyMapGraph::new();
        let printer = GraphPrinter::default();
        assert_eq!(printer.format_graph(&g).unwrap(), "Empty graph\n");

        let stats = printer.format_stats(&sample());
        assert!(stats.contains("edge-set"));
        assert!(stats.contains("Edge Count"));
    }
}
