//! 全局成功提示
//!
//! 错误通过各页面的横幅展示；这里只负责短暂的成功提示，3 秒后自动消失。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const NOTICE_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy)]
pub struct NoticeContext {
    message: RwSignal<Option<String>>,
    /// 替换时旧定时器被 drop，即自动取消
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl NoticeContext {
    pub fn success(&self, message: impl Into<String>) {
        self.message.set(Some(message.into()));

        let signal = self.message;
        let timeout = Timeout::new(NOTICE_DISMISS_MS, move || signal.set(None));
        self.timer.set_value(Some(timeout));
    }

    pub fn dismiss(&self) {
        self.message.set(None);
        self.timer.set_value(None);
    }
}

pub fn provide_notice() {
    provide_context(NoticeContext {
        message: RwSignal::new(None),
        timer: StoredValue::new_local(None),
    });
}

pub fn use_notice() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notice = use_notice();

    view! {
        <Show when=move || notice.message.with(Option::is_some)>
            <div class="toast toast-top toast-end z-50">
                <div class="alert alert-success shadow-lg" on:click=move |_| notice.dismiss()>
                    <span>{move || notice.message.get().unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
