//! Shell 状态
//!
//! 跨页面共享的搜索请求、在售房源与选中的对比对象。
//! 页面之间只通过这里和路由服务交互。

use crate::web::route::AppRoute;
use crate::web::router::RouterService;
use leptos::prelude::*;
use propertymatch_shared::{MatchResult, SaleListing, SearchRequest};
use tracing::info;

#[derive(Clone, Copy)]
pub struct ShellState {
    /// 当前搜索请求，结果页据此拉取数据
    pub search: RwSignal<Option<SearchRequest>>,
    /// 最近一次搜索返回的在售房源
    pub sale_listing: RwSignal<Option<SaleListing>>,
    /// 对比视图中选中的匹配项
    pub selected: RwSignal<Option<MatchResult>>,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            search: RwSignal::new(None),
            sale_listing: RwSignal::new(None),
            selected: RwSignal::new(None),
        }
    }

    /// 发起搜索并跳转到结果页
    ///
    /// 每次提交都生成新的请求（时间戳不同），即使 URL 相同也会重新拉取。
    pub fn start_search(&self, router: RouterService, url: String) {
        let url = url.trim().to_string();
        if url.is_empty() {
            return;
        }
        info!(%url, "search submitted");
        self.sale_listing.set(None);
        self.selected.set(None);
        self.search.set(Some(SearchRequest::new(url)));
        router.navigate(AppRoute::Results);
    }

    /// 选中匹配项并跳转到对比页
    pub fn compare(&self, router: RouterService, result: MatchResult) {
        self.selected.set(Some(result));
        router.navigate(AppRoute::Comparison);
    }
}

pub fn use_shell() -> ShellState {
    use_context::<ShellState>().expect("ShellState should be provided")
}
