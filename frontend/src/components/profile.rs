use crate::auth::use_auth;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    view! {
        <div class="max-w-xl mx-auto card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Profile"</h2>
                {move || match user.get() {
                    Some(profile) => {
                        // 后端返回的其他字段原样展示
                        let extra = profile
                            .extra
                            .iter()
                            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                            .collect::<Vec<_>>();
                        view! {
                            <dl class="grid grid-cols-3 gap-2 text-sm">
                                <dt class="font-semibold">"Name"</dt>
                                <dd class="col-span-2">{profile.display_name().to_string()}</dd>
                                <dt class="font-semibold">"Username"</dt>
                                <dd class="col-span-2">{profile.username.clone().unwrap_or_default()}</dd>
                                <dt class="font-semibold">"Email"</dt>
                                <dd class="col-span-2">{profile.email.clone().unwrap_or_default()}</dd>
                                {extra
                                    .into_iter()
                                    .map(|(k, v)| view! {
                                        <dt class="font-semibold">{k}</dt>
                                        <dd class="col-span-2">{v}</dd>
                                    })
                                    .collect_view()}
                            </dl>
                        }
                        .into_any()
                    }
                    None => view! {
                        <p class="text-base-content/70">"No profile information was returned at login."</p>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
