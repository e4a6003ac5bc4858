//! 通用资源页面（Kos / Products / Warehouse）
//!
//! 页面状态全部保存在核心库的 [`ResourceController`] 中，这里只负责：
//! 1. 把控制器放进本地信号（其中的 `web_sys::File` 不是 Send）；
//! 2. 在 `spawn_local` 中执行 begin_* / finish_* 之间的网络调用；
//! 3. 卸载时中止所有在途请求，并让控制器作废旧票据。

use crate::auth::use_auth;
use crate::components::icons::*;
use crate::components::notice::use_notice;
use crate::use_config;
use crate::web::{BrowserFile, BrowserHttpClient};
use futures::future::{AbortHandle, Abortable};
use kos_admin::api::AdminApi;
use kos_admin::controller::{DeleteTicket, ResourceController, SubmitTarget, SubmitTicket};
use kos_admin::draft::{ALLOWED_IMAGE_TYPES, IMAGE_ERROR_KEY};
use kos_admin_shared::{FieldSpec, RecordId, ResourceDescriptor, ResourceRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

type Controller = ResourceController<BrowserFile>;

/// 可中止的 spawn_local，句柄登记在 `handles` 中供卸载时统一中止
fn spawn_abortable<Fut>(handles: StoredValue<Vec<AbortHandle>>, fut: Fut)
where
    Fut: Future<Output = ()> + 'static,
{
    let (handle, registration) = AbortHandle::new_pair();
    handles.update_value(|h| {
        h.retain(|h| !h.is_aborted());
        h.push(handle);
    });
    spawn_local(async move {
        let _ = Abortable::new(fut, registration).await;
    });
}

#[component]
pub fn ResourcePage(resource: ResourceDescriptor) -> impl IntoView {
    let auth = use_auth();
    let notice = use_notice();
    let config = StoredValue::new(use_config());

    let ctrl: RwSignal<Controller, LocalStorage> = RwSignal::new_local(ResourceController::new(resource));
    let handles = StoredValue::new(Vec::<AbortHandle>::new());

    on_cleanup(move || {
        handles.update_value(|h| h.drain(..).for_each(|h| h.abort()));
        ctrl.try_update(Controller::cancel_in_flight);
    });

    // --- 获取 ---
    let fetch = move || {
        let Some(session) = auth.session() else {
            return;
        };
        let Some(guard) = ctrl.try_update(Controller::begin_fetch) else {
            return;
        };
        let config = config.get_value();
        spawn_abortable(handles, async move {
            let client = BrowserHttpClient;
            let api = AdminApi::new(&client, &config);
            let result = api.list(&resource, &session).await;
            ctrl.try_update(|c| c.finish_fetch(guard, result));
        });
    };

    // 挂载时获取一次
    fetch();

    // --- 提交 ---
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = auth.session() else {
            return;
        };
        let ticket = match ctrl.try_update(Controller::begin_submit) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log_warn!("[{}] Submit blocked: {}", resource.path, e);
                return;
            }
            None => return,
        };

        let config = config.get_value();
        spawn_abortable(handles, async move {
            let SubmitTicket { guard, target, form } = ticket;
            let client = BrowserHttpClient;
            let api = AdminApi::new(&client, &config);

            let (result, verb) = match &target {
                SubmitTarget::Create => (api.create(&resource, &session, form).await, "created"),
                SubmitTarget::Update(id) => {
                    (api.update(&resource, id, &session, form).await, "updated")
                }
            };

            if let Some(Ok(true)) = ctrl.try_update(|c| c.finish_submit(guard, result)) {
                notice.success(format!("{} {} successfully", resource.singular, verb));
                fetch();
            }
        });
    };

    // --- 删除 ---
    let on_confirm_delete = move |_| {
        let Some(session) = auth.session() else {
            return;
        };
        let DeleteTicket { guard, id } = match ctrl.try_update(Controller::begin_delete) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log_warn!("[{}] Delete blocked: {}", resource.path, e);
                return;
            }
            None => return,
        };

        let config = config.get_value();
        spawn_abortable(handles, async move {
            let client = BrowserHttpClient;
            let api = AdminApi::new(&client, &config);
            let result = api.delete(&resource, &id, &session).await;

            if let Some(Ok(true)) = ctrl.try_update(|c| c.finish_delete(guard, result)) {
                notice.success(format!("{} deleted", resource.singular));
                fetch();
            }
        });
    };

    let is_editing = move || ctrl.with(Controller::is_editing);
    let is_loading = move || ctrl.with(Controller::is_loading);
    let banner = move || ctrl.with(|c| c.banner().map(str::to_string));
    let delete_open = move || ctrl.with(|c| c.pending_delete().is_some());

    view! {
        <div class="max-w-7xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{move || ctrl.with(Controller::title)}</h1>
                <Show when=move || !is_editing()>
                    <button class="btn btn-primary gap-2" on:click=move |_| ctrl.update(Controller::start_add)>
                        <Plus attr:class="h-4 w-4" />
                        {resource.add_label()}
                    </button>
                </Show>
            </div>

            <Show when=move || banner().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || banner().unwrap_or_default()}</span>
                    <button class="btn btn-ghost btn-sm btn-circle" on:click=move |_| ctrl.update(Controller::dismiss_banner)>
                        <X attr:class="h-4 w-4" />
                    </button>
                </div>
            </Show>

            <Show
                when=is_editing
                fallback=move || view! { <RecordGrid ctrl=ctrl /> }
            >
                <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                    <div class="card-body gap-4">
                        {resource
                            .fields
                            .iter()
                            .map(|field| view! { <FieldInput ctrl=ctrl field=*field /> })
                            .collect_view()}
                        <ImagePicker ctrl=ctrl />
                        <div class="flex gap-2">
                            <button type="submit" class="btn btn-primary" disabled=is_loading>
                                <Show when=is_loading>
                                    <span class="loading loading-spinner loading-sm"></span>
                                </Show>
                                {move || ctrl.with(Controller::submit_label)}
                            </button>
                            <button type="button" class="btn" on:click=move |_| ctrl.update(Controller::cancel)>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </form>
            </Show>

            <div class=move || if delete_open() { "modal modal-open" } else { "modal" }>
                <div class="modal-box max-w-sm">
                    <h3 class="font-bold text-lg">"Confirm Delete"</h3>
                    <p class="py-4">"Are you sure you want to delete this item?"</p>
                    <div class="modal-action">
                        <button class="btn" on:click=move |_| ctrl.update(Controller::dismiss_delete)>
                            "Cancel"
                        </button>
                        <button class="btn btn-error" disabled=is_loading on:click=on_confirm_delete>
                            {move || ctrl.with(Controller::delete_label)}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// 列表
// ============================================================================

#[component]
fn RecordGrid(ctrl: RwSignal<Controller, LocalStorage>) -> impl IntoView {
    let records = move || ctrl.with(|c| c.records().to_vec());
    let resource = ctrl.with_untracked(|c| *c.resource());

    view! {
        <Show when=move || ctrl.with(|c| c.is_loading() && c.records().is_empty())>
            <div class="flex justify-center py-12">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        </Show>
        <Show when=move || ctrl.with(|c| !c.is_loading() && c.records().is_empty())>
            <div class="text-center py-12 text-base-content/50">"No entries yet."</div>
        </Show>
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            {move || {
                records()
                    .into_iter()
                    .map(|record| view! { <RecordCard ctrl=ctrl resource=resource record=record /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn RecordCard(
    ctrl: RwSignal<Controller, LocalStorage>,
    resource: ResourceDescriptor,
    record: ResourceRecord,
) -> impl IntoView {
    let config = use_config();
    let image = record.first_image().map(|r| config.image(r));
    let title = record.field(resource.title_field).to_string();
    let details = resource
        .fields
        .iter()
        .filter(|f| f.name != resource.title_field)
        .map(|f| (f.label, record.field(f.name).to_string()))
        .collect::<Vec<_>>();

    let edit_id = record.id.clone();
    let delete_id: RecordId = record.id.clone();

    view! {
        <div class="card bg-base-100 shadow-xl">
            {image.map(|src| view! {
                <figure>
                    <img src=src alt=title.clone() class="w-full h-48 object-cover" />
                </figure>
            })}
            <div class="card-body">
                <h2 class="card-title">{title.clone()}</h2>
                <div class="text-sm space-y-1">
                    {details
                        .into_iter()
                        .map(|(label, value)| view! {
                            <p><span class="font-semibold">{label}": "</span>{value}</p>
                        })
                        .collect_view()}
                </div>
                <div class="card-actions mt-2">
                    <button
                        class="btn btn-outline btn-primary btn-sm gap-1"
                        on:click=move |_| {
                            ctrl.update(|c| {
                                c.start_edit(&edit_id);
                            })
                        }
                    >
                        <Pencil attr:class="h-4 w-4" /> "Edit"
                    </button>
                    <button
                        class="btn btn-outline btn-error btn-sm gap-1"
                        on:click=move |_| ctrl.update(|c| c.request_delete(delete_id.clone()))
                    >
                        <Trash attr:class="h-4 w-4" /> "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// 表单
// ============================================================================

#[component]
fn FieldInput(ctrl: RwSignal<Controller, LocalStorage>, field: FieldSpec) -> impl IntoView {
    let name = field.name;
    let value = move || ctrl.with(|c| c.draft().value(name).to_string());
    let error = move || ctrl.with(|c| c.draft().error(name).map(str::to_string));
    let class = move |base: &'static str| {
        if error().is_some() {
            format!("{} {}-error w-full", base, base)
        } else {
            format!("{} w-full", base)
        }
    };
    let on_input = move |ev: web_sys::Event| {
        let v = event_target_value(&ev);
        ctrl.update(|c| c.set_field(name, v));
    };

    view! {
        <div class="form-control">
            <label class="label" for=name>
                <span class="label-text">{field.label}</span>
            </label>
            {if field.multiline {
                view! {
                    <textarea
                        id=name
                        rows="3"
                        class=move || class("textarea")
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        id=name
                        type="text"
                        class=move || class("input")
                        prop:value=value
                        on:input=on_input
                    />
                }
                .into_any()
            }}
            <Show when=move || error().is_some()>
                <span class="text-error text-sm mt-1">{move || error().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

#[component]
fn ImagePicker(ctrl: RwSignal<Controller, LocalStorage>) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // 远程预览经图片基址解析，本地 blob: 地址原样使用
    let previews = move || {
        ctrl.with(|c| {
            c.previews()
                .iter()
                .map(|p| {
                    if p.is_local() {
                        p.source().to_string()
                    } else {
                        config.with_value(|cfg| cfg.image(p.source()))
                    }
                })
                .collect::<Vec<_>>()
        })
    };
    let error = move || ctrl.with(|c| c.draft().error(IMAGE_ERROR_KEY).map(str::to_string));

    let on_change = move |ev: web_sys::Event| {
        let files = BrowserFile::from_event(&ev);
        ctrl.update(|c| {
            c.select_images(files);
        });
    };
    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="form-control">
            <span class="label-text mb-2">"Images"</span>
            <div class="flex items-center gap-3 flex-wrap">
                <button type="button" class="btn btn-outline" on:click=open_picker>
                    {move || ctrl.with(Controller::image_button_label)}
                </button>
                {move || {
                    previews()
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| view! {
                            <img src=src alt=format!("Preview {}", i + 1) class="h-20 w-20 object-cover rounded" />
                        })
                        .collect_view()
                }}
            </div>
            <input
                node_ref=input_ref
                type="file"
                accept=ALLOWED_IMAGE_TYPES.join(",")
                multiple
                class="hidden"
                on:change=on_change
            />
            <Show when=move || error().is_some()>
                <span class="text-error text-sm mt-1">{move || error().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
