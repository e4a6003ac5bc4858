//! Kos 管理后台前端
//!
//! 采用 Context-Driven 的架构：
//! - `web::router`: 路由服务（守卫规则在核心库 `route` 模块）
//! - `auth`: 会话信号管理
//! - `components`: UI 组件层
//!
//! 所有业务状态机都在 `kos-admin` 核心库中，这里只负责把它们绑定到信号和 DOM。

#[macro_use]
extern crate kos_admin;

mod auth;
mod components {
    pub mod frame;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod notice;
    pub mod profile;
    pub mod resource_page;
}
pub(crate) mod web;

use crate::auth::AuthContext;
use crate::components::frame::Frame;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::notice::provide_notice;
use crate::components::profile::ProfilePage;
use crate::components::resource_page::ResourcePage;
use kos_admin::config::{API_URL_VAR, IMAGE_URL_VAR, RuntimeConfig};
use kos_admin::route::AppRoute;
use leptos::prelude::*;
use web::router::{Router, RouterOutlet, use_router};

/// 构建期注入的后端地址
///
/// `KOS_API_URL` / `KOS_API_URL_IMAGE` 在编译时读取，未设置时使用本地默认值。
fn runtime_config() -> RuntimeConfig {
    RuntimeConfig::from_lookup(|key| {
        let value = match key {
            API_URL_VAR => option_env!("KOS_API_URL"),
            IMAGE_URL_VAR => option_env!("KOS_API_URL_IMAGE"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// 从 Context 获取运行时配置
pub(crate) fn use_config() -> RuntimeConfig {
    use_context::<RuntimeConfig>().unwrap_or_else(runtime_config)
}

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Entry => view! { <LoginPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Kos | AppRoute::Products | AppRoute::Warehouse => match route.resource() {
            // 以路由为 key 重新挂载，切换资源时旧页面的请求随之取消
            Some(resource) => view! { <ResourcePage resource=resource /> }.into_any(),
            None => not_found(),
        },
        AppRoute::NotFound => not_found(),
    }
}

/// 页面外壳
///
/// 需要认证的路由共用同一个导航框架，只在跨越认证边界时重建，
/// 侧边栏和个人菜单状态在页面间切换时保留；登录页和 404 不带框架。
#[component]
fn Shell() -> impl IntoView {
    let router = use_router();
    let framed = Memo::new(move |_| router.current_route().get().requires_auth());

    move || {
        if framed.get() {
            view! {
                <Frame>
                    <RouterOutlet matcher=route_matcher />
                </Frame>
            }
            .into_any()
        } else {
            view! { <RouterOutlet matcher=route_matcher /> }.into_any()
        }
    }
}

fn not_found() -> AnyView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 运行时配置
    let config = runtime_config();
    log_info!("[App] API base {}", config.api_url());
    provide_context(config);

    // 2. 认证上下文（从 LocalStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 3. 全局通知
    provide_notice();

    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Shell />
        </Router>
    }
}
