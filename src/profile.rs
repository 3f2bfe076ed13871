//! 简易性能剖析
//!
//! 反复清空图并生成随机负载（顶点 + 随机边），统计各后端的耗时

use crate::error::{Error, Result};
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::info;

/// 剖析配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// 重复轮数
    pub cycles: usize,
    /// 每轮顶点数
    pub vertices: u32,
    /// 每轮随机边数
    pub edges: usize,
    /// 代价取值上界（不含）
    pub max_cost: u32,
    /// 随机种子，未设置时使用系统熵
    pub seed: Option<u64>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            cycles: 1000,
            vertices: 200,
            edges: 46,
            max_cost: 500,
            seed: None,
        }
    }
}

impl ProfileConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.cycles == 0 {
            return Err(Error::invalid_argument("cycle count must be positive"));
        }
        if self.vertices == 0 {
            return Err(Error::invalid_argument(
                "vertex count must be positive to generate edges",
            ));
        }
        if self.max_cost == 0 {
            return Err(Error::invalid_argument("max cost must be positive"));
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// 剖析结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    pub backend: String,
    pub cycles: usize,
    /// 最后一轮结束时的顶点数
    pub vertex_count: usize,
    /// 最后一轮结束时的边数
    pub edge_count: usize,
    /// 最后一轮中因重复而未新增的边
    pub redundant_edges: usize,
    pub total_ms: f64,
    pub mean_cycle_us: f64,
}

/// 运行剖析：每轮 `clear` → 添加 `0..vertices` → 添加 `edges` 条随机边
pub fn naive_profile<G>(graph: &mut G, config: &ProfileConfig) -> Result<ProfileReport>
where
    G: Graph<u32, u32> + ?Sized,
{
    config.validate()?;
    let mut rng = config.rng();
    let mut redundant_edges = 0;

    let start = Instant::now();
    for _ in 0..config.cycles {
        graph.clear();
        for v in 0..config.vertices {
            graph.add_vertex(v);
        }
        redundant_edges = 0;
        for _ in 0..config.edges {
            let v1 = rng.gen_range(0..config.vertices);
            let v2 = rng.gen_range(0..config.vertices);
            let cost = rng.gen_range(0..config.max_cost);
            if !graph.add_edge(v1, v2, cost)? {
                redundant_edges += 1;
            }
        }
    }
    let elapsed = start.elapsed();

    let report = ProfileReport {
        backend: graph.name().to_string(),
        cycles: config.cycles,
        vertex_count: graph.size(),
        edge_count: graph.edge_count(),
        redundant_edges,
        total_ms: elapsed.as_secs_f64() * 1000.0,
        mean_cycle_us: mean_micros(elapsed, config.cycles),
    };

    info!(
        backend = %report.backend,
        cycles = report.cycles,
        total_ms = report.total_ms,
        "profile finished"
    );
    Ok(report)
}

fn mean_micros(elapsed: Duration, cycles: usize) -> f64 {
    elapsed.as_secs_f64() * 1_000_000.0 / cycles as f64
}
