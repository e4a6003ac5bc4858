use crate::auth::{submit_login, use_auth};
use crate::components::icons::ShieldCheck;
use crate::use_config;
use crate::web::router::use_router;
use kos_admin::auth::LoginForm;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let config = StoredValue::new(use_config());

    let form = RwSignal::new(LoginForm::new());
    let is_loading = move || form.with(|f| f.is_loading);
    let error = move || form.with(|f| f.error.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_login(auth, form, router, config.get_value());
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Kos Admin"</h1>
                        <p class="text-base-content/70">"Sign in with an administrator account"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                                prop:value=move || form.with(|f| f.username.clone())
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                                prop:value=move || form.with(|f| f.password.clone())
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_loading>
                                <Show when=is_loading>
                                    <span class="loading loading-spinner"></span>
                                </Show>
                                {move || form.with(|f| f.submit_label())}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
