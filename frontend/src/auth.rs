//! 认证模块
//!
//! 管理会话信号，与路由系统解耦：
//! 路由服务只通过注入的 `is_authenticated` 信号感知登录状态。

use crate::web::router::RouterService;
use crate::web::{BrowserHttpClient, session_store};
use kos_admin::api::AdminApi;
use kos_admin::auth::{LoginForm, resolve_login};
use kos_admin::config::RuntimeConfig;
use kos_admin::session::Session;
use kos_admin_shared::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// 从 LocalStorage 恢复会话
    pub fn new() -> Self {
        let session = session_store().load();
        if let Some(s) = &session {
            log_info!("[Auth] Restored session {:?}", s);
        }
        Self {
            session: RwSignal::new(session),
        }
    }

    /// 当前会话（不追踪）
    pub fn session(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    pub fn user(&self) -> Signal<Option<UserProfile>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.as_ref().and_then(|s| s.user.clone())))
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Option::is_some))
    }

    fn set_session(&self, session: Option<Session>) {
        self.session.set(session);
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 提交登录表单
///
/// 校验失败时错误已写入表单，不发请求；会话先写入上下文再导航。
pub fn submit_login(
    ctx: AuthContext,
    form: RwSignal<LoginForm>,
    router: RouterService,
    config: RuntimeConfig,
) {
    let credentials = match form.try_update(LoginForm::begin) {
        Some(Ok(credentials)) => credentials,
        Some(Err(e)) => {
            log_warn!("[Auth] Login not submitted: {}", e);
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let client = BrowserHttpClient;
        let api = AdminApi::new(&client, &config);
        let store = session_store();

        let outcome = resolve_login(api.login(&credentials).await, &store);
        form.update(|f| f.finish(&outcome));
        ctx.set_session(outcome.session().cloned());

        if let Some(route) = outcome.redirect() {
            router.navigate(route);
        }
    });
}

/// 注销并清除状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: AuthContext) {
    kos_admin::auth::logout(&session_store());
    ctx.set_session(None);
}
