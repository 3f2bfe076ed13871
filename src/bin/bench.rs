//! CostGraph 基准测试入口
//!
//! 对各存储后端运行随机负载并输出耗时

use anyhow::Context;
use clap::{Parser, ValueEnum};
use costgraph::cli::{GraphPrinter, PrintMode};
use costgraph::graph::{AdjacencyMapGraph, EdgeSetGraph, Graph};
use costgraph::profile::{naive_profile, ProfileConfig, ProfileReport};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// 边集后端（允许平行边）
    EdgeSet,
    /// 邻接映射后端（每个点对一条边）
    AdjacencyMap,
    /// 依次运行全部后端
    All,
}

#[derive(Parser, Debug)]
#[command(name = "costgraph-bench")]
#[command(about = "CostGraph 后端基准测试")]
struct Args {
    /// 存储后端
    #[arg(short, long, value_enum, default_value = "all")]
    backend: Backend,

    /// 重复轮数
    #[arg(short, long, default_value = "1000")]
    cycles: usize,

    /// 每轮顶点数
    #[arg(short, long, default_value = "200")]
    vertices: u32,

    /// 每轮随机边数
    #[arg(short, long, default_value = "46")]
    edges: usize,

    /// 代价上界（不含）
    #[arg(long, default_value = "500")]
    max_cost: u32,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,

    /// 结束后打印最后一轮生成的图
    #[arg(short, long)]
    print: bool,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,
}

impl Args {
    fn profile_config(&self) -> ProfileConfig {
        ProfileConfig {
            cycles: self.cycles,
            vertices: self.vertices,
            edges: self.edges,
            max_cost: self.max_cost,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.profile_config();

    let vertex_count = config.vertices as usize;
    let edge_set = || -> Box<dyn Graph<u32, u32>> {
        Box::new(EdgeSetGraph::with_capacity(vertex_count, config.edges))
    };
    let adjacency_map = || -> Box<dyn Graph<u32, u32>> {
        Box::new(AdjacencyMapGraph::with_capacity(vertex_count))
    };
    let mut graphs: Vec<Box<dyn Graph<u32, u32>>> = match args.backend {
        Backend::EdgeSet => vec![edge_set()],
        Backend::AdjacencyMap => vec![adjacency_map()],
        Backend::All => vec![edge_set(), adjacency_map()],
    };

    let mut reports = Vec::with_capacity(graphs.len());
    for graph in graphs.iter_mut() {
        let report = naive_profile(graph.as_mut(), &config)
            .with_context(|| format!("profiling {} backend", graph.name()))?;
        if !args.json {
            print_report(&report);
        }
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if args.print {
        let printer = GraphPrinter::new(if args.json {
            PrintMode::Json
        } else {
            PrintMode::Table
        });
        for graph in &graphs {
            println!("{}", printer.format_stats(graph.as_ref()));
            println!("{}", printer.format_graph(graph.as_ref())?);
        }
    }

    Ok(())
}

fn print_report(report: &ProfileReport) {
    println!("--- {} ---", report.backend);
    println!("Cycles: {}", report.cycles);
    println!(
        "Last cycle: {} vertices, {} edges ({} redundant)",
        report.vertex_count, report.edge_count, report.redundant_edges
    );
    println!(
        "Total time taken: {:.3}ms ({:.1}us per cycle)",
        report.total_ms, report.mean_cycle_us
    );
    println!();
}
