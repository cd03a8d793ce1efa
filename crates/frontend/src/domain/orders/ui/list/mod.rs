pub mod state;

use contracts::domain::orders::OrderStatus;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::shared::list_utils::sort_indicator;
use crate::system::auth::LocalStorageCredentials;
use self::state::create_state;

/// Order lifecycle management view: fetches the order collection, derives
/// the sorted/filtered rows and drives status transitions. A fetch error
/// shows the banner and leaves the previous rows in place.
#[component]
pub fn OrdersList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Resync requests from the transition dispatcher; the fetch effect
    // below observes the counter.
    let (resync, set_resync) = signal(0u32);

    let load_data = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match api::fetch_orders(&LocalStorageCredentials).await {
                Ok(orders) => {
                    state.update(|s| s.replace_orders(orders));
                }
                Err(e) => {
                    log::error!("Failed to load orders: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }

            // Cleared on every exit path.
            set_loading.set(false);
        });
    };

    // Initial load, plus one re-fetch per successful transition.
    Effect::new(move |_| {
        resync.get();
        load_data();
    });

    let transition = move |order_id: i64, target_code: &'static str| {
        spawn_local(async move {
            set_error.set(None);

            match api::update_order_status(&LocalStorageCredentials, order_id, target_code).await {
                Ok(()) => {
                    // The backend's re-fetched value is authoritative.
                    set_resync.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Status change failed for order {}: {}", order_id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let visible_orders = Memo::new(move |_| state.get().visible_orders());

    view! {
        <div style="padding: 0 16px;">
            <h1>"Order management"</h1>

            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 8px;">
                <input
                    type="text"
                    placeholder="Search orders..."
                    style="width: 280px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px;"
                    value=move || state.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.search = value);
                    }
                />
                <button
                    style="padding: 6px 14px; background: #4caf50; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    on:click=move |_| load_data()
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div style="margin-bottom: 8px; padding: 8px 12px; background: #fdecea; color: #b71c1c; border-radius: 4px;">
                                {err}
                            </div>
                        }
                    })
            }}
            {move || {
                loading
                    .get()
                    .then(|| view! { <div style="margin-bottom: 8px;">"Loading orders..."</div> })
            }}

            <div style="overflow-x: auto;">
                <table style="width: 100%; border-collapse: collapse;">
                    <thead>
                        <tr style="background: #f5f5f5;">
                            <th style="border: 1px solid #ddd; padding: 8px;">"#"</th>
                            <th style="border: 1px solid #ddd; padding: 8px;">"ID"</th>
                            <th style="border: 1px solid #ddd; padding: 8px;">"Order code"</th>
                            <th style="border: 1px solid #ddd; padding: 8px;">"Description"</th>
                            <th style="border: 1px solid #ddd; padding: 8px;">"VIN"</th>
                            <th
                                style="border: 1px solid #ddd; padding: 8px; cursor: pointer; user-select: none;"
                                on:click=move |_| state.update(|s| s.toggle_sort())
                                title="Sort by status"
                            >
                                {move || format!("Status{}", sort_indicator(state.get().direction))}
                            </th>
                            <th style="border: 1px solid #ddd; padding: 8px;">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible_orders
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, order)| {
                                    let order_id = order.id;
                                    let status_label = order.display_status();

                                    view! {
                                        <tr>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{index + 1}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{order_id}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{order.order_code}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{order.description}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{order.vin}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">{status_label}</td>
                                            <td style="border: 1px solid #ddd; padding: 8px;">
                                                <div style="display: flex; gap: 4px; flex-wrap: wrap;">
                                                    {OrderStatus::all()
                                                        .into_iter()
                                                        .map(|target| {
                                                            view! {
                                                                <button
                                                                    style="padding: 4px 8px; background: #eeeeee; border: 1px solid #ddd; border-radius: 4px; cursor: pointer;"
                                                                    on:click=move |_| transition(order_id, target.code())
                                                                >
                                                                    {target.display_name()}
                                                                </button>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
