//! 异步请求守卫
//!
//! 组件发起请求时领取一张 `Ticket`。组件卸载 (`on_cleanup`) 或发起更新的请求时，
//! 旧票据失效；响应返回后只有票据仍然有效才允许写入状态。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Arc<AtomicU64>,
    id: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一次新请求，之前领取的票据全部失效
    pub fn begin(&self) -> Ticket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation: Arc::clone(&self.generation),
            id,
        }
    }

    /// 使所有已领取的票据失效 (组件卸载时调用)
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ticket_is_current() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn test_invalidate_discards_in_flight_ticket() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_cloned_guard_shares_generation() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        let cleanup_handle = guard.clone();
        cleanup_handle.invalidate();
        assert!(!ticket.is_current());
    }
}
