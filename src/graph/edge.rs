//! 边定义
//!
//! 带权有向边：(源顶点, 目标顶点, 代价) 三元组，构造后不可变

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
///
/// 相等与哈希同时覆盖三个字段，边集后端依赖它去重。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V, C> {
    /// 源顶点
    source: V,
    /// 目标顶点
    destination: V,
    /// 通过该边的代价
    cost: C,
}

impl<V, C> Edge<V, C> {
    /// 创建新边
    pub fn new(source: V, destination: V, cost: C) -> Self {
        Self {
            source,
            destination,
            cost,
        }
    }

    /// 从可能缺失的端点构造边
    ///
    /// 端点缺失时返回 `InvalidArgument`，用于反序列化等端点可能为空的场景。
    pub fn build(source: Option<V>, destination: Option<V>, cost: C) -> Result<Self> {
        let source =
            source.ok_or_else(|| Error::invalid_argument("source vertex cannot be null"))?;
        let destination = destination
            .ok_or_else(|| Error::invalid_argument("destination vertex cannot be null"))?;
        Ok(Self::new(source, destination, cost))
    }

    /// 获取源顶点
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 获取目标顶点
    pub fn destination(&self) -> &V {
        &self.destination
    }

    /// 获取代价
    pub fn cost(&self) -> &C {
        &self.cost
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source == self.destination
    }

    /// 拆分为 (源, 目标, 代价)
    pub fn into_parts(self) -> (V, V, C) {
        (self.source, self.destination, self.cost)
    }
}

impl<V: fmt::Display, C: fmt::Display> fmt::Display for Edge<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -({})-> {}", self.source, self.cost, self.destination)
    }
}
