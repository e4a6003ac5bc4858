//! 导航框架：顶部栏、可收起的侧边栏、个人菜单

use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::components::notice::NoticeToast;
use crate::web::router::{Link, use_router};
use kos_admin::frame::{NavFrame, NavItem, is_active, nav_items};
use kos_admin::route::AppRoute;
use leptos::prelude::*;

fn nav_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Kos => view! { <Building attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Products => view! { <Package attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Warehouse => view! { <Warehouse attr:class="h-5 w-5" /> }.into_any(),
        _ => view! { <House attr:class="h-5 w-5" /> }.into_any(),
    }
}

#[component]
pub fn Frame(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let frame = RwSignal::new(NavFrame::new());

    let drawer_open = move || frame.with(|f| f.drawer_open);
    let menu_open = move || frame.with(|f| f.profile_menu_open);
    let display_name = move || {
        auth.user()
            .get()
            .map(|u| u.display_name().to_string())
            .unwrap_or_else(|| "Admin".to_string())
    };

    let on_profile = move |_| {
        frame.update(NavFrame::close_profile_menu);
        router.navigate(AppRoute::Profile);
    };
    let on_logout = move |_| {
        frame.update(NavFrame::close_profile_menu);
        logout(auth);
    };

    let nav_link = move |item: &'static NavItem| {
        let class = Signal::derive(move || {
            let current = router.current_route().get();
            if is_active(item, current) {
                "flex items-center gap-3 active".to_string()
            } else {
                "flex items-center gap-3".to_string()
            }
        });
        view! {
            <li>
                <Link to=item.route class=class>
                    {nav_icon(item.route)}
                    <span>{item.label}</span>
                </Link>
            </li>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 flex">
            <NoticeToast />

            <aside class=move || {
                if drawer_open() {
                    "w-64 shrink-0 bg-base-100 shadow-xl flex flex-col"
                } else {
                    "hidden"
                }
            }>
                <div class="flex items-center justify-between p-4 border-b border-base-200">
                    <span class="text-xl font-bold">"Kos Admin"</span>
                    <button class="btn btn-ghost btn-sm btn-circle" on:click=move |_| frame.update(NavFrame::close_drawer)>
                        <X attr:class="h-5 w-5" />
                    </button>
                </div>
                <ul class="menu p-4 gap-1">
                    {nav_items().iter().map(nav_link).collect_view()}
                </ul>
            </aside>

            <div class="flex-1 flex flex-col min-w-0">
                <div class="navbar bg-base-100 shadow px-4">
                    <div class="flex-1 gap-2">
                        <Show when=move || !drawer_open()>
                            <button class="btn btn-ghost btn-square" on:click=move |_| frame.update(NavFrame::open_drawer)>
                                <Menu attr:class="h-6 w-6" />
                            </button>
                        </Show>
                    </div>
                    <div class="flex-none relative">
                        <button class="btn btn-ghost gap-2" on:click=move |_| frame.update(NavFrame::toggle_profile_menu)>
                            <User attr:class="h-5 w-5" />
                            <span class="hidden md:inline">{display_name}</span>
                        </button>
                        <Show when=menu_open>
                            <ul class="menu bg-base-100 rounded-box shadow-lg absolute right-0 mt-2 w-48 z-40">
                                <li>
                                    <a on:click=on_profile>
                                        <User attr:class="h-4 w-4" /> "Profile"
                                    </a>
                                </li>
                                <li>
                                    <a class="text-error" on:click=on_logout>
                                        <LogOut attr:class="h-4 w-4" /> "Logout"
                                    </a>
                                </li>
                            </ul>
                        </Show>
                    </div>
                </div>

                <main class="p-4 md:p-8">{children()}</main>
            </div>
        </div>
    }
}
