use crate::auth::use_auth;
use crate::components::icons::*;
use crate::web::router::Link;
use kos_admin::route::AppRoute;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.user()
            .get()
            .map(|u| format!("Welcome back, {}", u.display_name()))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <div class="max-w-5xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{greeting}</h1>
                <p class="text-base-content/70 mt-1">"Manage properties, products and warehouse stock."</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <Link to=AppRoute::Kos class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow".to_string()>
                    <div class="card-body items-center text-center">
                        <Building attr:class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Kos"</h2>
                    </div>
                </Link>
                <Link to=AppRoute::Products class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow".to_string()>
                    <div class="card-body items-center text-center">
                        <Package attr:class="h-10 w-10 text-secondary" />
                        <h2 class="card-title">"Products"</h2>
                    </div>
                </Link>
                <Link to=AppRoute::Warehouse class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow".to_string()>
                    <div class="card-body items-center text-center">
                        <Warehouse attr:class="h-10 w-10 text-accent" />
                        <h2 class="card-title">"Warehouse"</h2>
                    </div>
                </Link>
            </div>
        </div>
    }
}
