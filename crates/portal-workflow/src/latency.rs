//! 模拟延迟边界
//!
//! 原型阶段用固定延迟模拟网络耗时。延迟调用彼此独立、不可取消、
//! 不做去重：等待期间的第二次提交会安排第二次独立完成（已知问题，保留）。

use async_trait::async_trait;
use std::time::Duration;

/// 延迟模拟接口，测试注入零延迟实现
#[async_trait]
pub trait LatencySimulator: Send + Sync {
    async fn simulate(&self);
}

/// 固定时长延迟
#[derive(Debug, Clone)]
pub struct FixedLatency {
    delay: Duration,
}

impl FixedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl LatencySimulator for FixedLatency {
    async fn simulate(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// 零延迟实现
#[derive(Debug, Clone, Default)]
pub struct NoLatency;

#[async_trait]
impl LatencySimulator for NoLatency {
    async fn simulate(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_latency_waits() {
        let latency = FixedLatency::from_millis(10);
        let start = std::time::Instant::now();
        latency.simulate().await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_no_latency_is_immediate() {
        NoLatency.simulate().await;
    }
}
