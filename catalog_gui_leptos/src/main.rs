use catalog_core::{
    fixture, join, prepare_rows,
    view::{self as catalog_view, PanelEntry, TableRow, TableView},
    Catalog, FilterAction, FilterState, Row,
};
use leptos::*;

fn main() {
    let loaded = fixture::builtin_catalog().and_then(|catalog| {
        let rows = join(&catalog)?;
        Ok((catalog, rows))
    });

    match loaded {
        Ok((catalog, rows)) => mount_to_body(move || view! { <App catalog rows/> }),
        Err(err) => {
            logging::error!("failed to load catalog: {err}");
            let message = err.to_string();
            mount_to_body(move || view! { <p class="notification is-danger">{message}</p> })
        }
    }
}

#[component]
fn App(catalog: Catalog, rows: Vec<Row>) -> impl IntoView {
    let catalog = store_value(catalog);
    let rows = store_value(rows);
    let state = create_rw_signal(FilterState::default());
    let dispatch =
        Callback::new(move |action: FilterAction| state.update(|state| *state = state.apply(action)));

    let visible = move || {
        logging::log!("Recomputing visible products");
        rows.with_value(|rows| {
            state.with(|state| catalog_view::table_view(&prepare_rows(rows, state)))
        })
    };
    let owner_tabs = move || {
        catalog.with_value(|catalog| state.with(|state| catalog_view::owner_tabs(catalog, state)))
    };
    let category_buttons = move || {
        catalog
            .with_value(|catalog| state.with(|state| catalog_view::category_buttons(catalog, state)))
    };

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">"Product Categories"</h1>

                <div class="block">
                    <nav class="panel">
                        <p class="panel-heading">"Filters"</p>

                        <p class="panel-tabs has-text-weight-bold">
                            <For
                                each=owner_tabs
                                key=|entry| (entry.key, entry.active)
                                let:entry
                            >
                                <OwnerTab entry on_select=dispatch/>
                            </For>
                        </p>

                        <div class="panel-block">
                            <p class="control has-icons-left has-icons-right">
                                <input
                                    type="text"
                                    class="input"
                                    placeholder="Search"
                                    prop:value=move || state.with(|state| state.query.clone())
                                    on:input=move |ev| dispatch.call(FilterAction::SetQuery(event_target_value(&ev)))
                                />
                                <span class="icon is-left">
                                    <i class="fas fa-search" aria-hidden="true"></i>
                                </span>
                                <span class="icon is-right">
                                    <Show when=move || state.with(|state| !state.query.is_empty())>
                                        <button
                                            type="button"
                                            class="delete"
                                            on:click=move |_| dispatch.call(FilterAction::ClearQuery)
                                        ></button>
                                    </Show>
                                </span>
                            </p>
                        </div>

                        <div class="panel-block is-flex-wrap-wrap">
                            <For
                                each=category_buttons
                                key=|entry| (entry.key, entry.active)
                                let:entry
                            >
                                <CategoryButton entry on_select=dispatch/>
                            </For>
                        </div>

                        <div class="panel-block">
                            <a
                                href="#/"
                                class="button is-link is-outlined is-fullwidth"
                                on:click=move |_| dispatch.call(FilterAction::Reset)
                            >
                                "Reset all filters"
                            </a>
                        </div>
                    </nav>
                </div>

                <div class="box table-container">
                    {move || match visible() {
                        TableView::NoMatches => {
                            view! { <p>{catalog_view::NO_MATCHES_MESSAGE}</p> }.into_view()
                        }
                        TableView::Rows(table_rows) => view! {
                            <table class="table is-striped is-narrow is-fullwidth">
                                <thead>
                                    <tr>
                                        {catalog_view::COLUMNS
                                            .iter()
                                            .map(|column| view! { <th>{*column}</th> })
                                            .collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {table_rows
                                        .into_iter()
                                        .map(|row| view! { <ProductRow row/> })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn OwnerTab(entry: PanelEntry, on_select: Callback<FilterAction>) -> impl IntoView {
    let PanelEntry { label, active, action, .. } = entry;
    view! {
        <a
            href="#/"
            class:is-active=active
            on:click=move |_| on_select.call(action.clone())
        >
            {label}
        </a>
    }
}

#[component]
fn CategoryButton(entry: PanelEntry, on_select: Callback<FilterAction>) -> impl IntoView {
    let PanelEntry { label, active, action, .. } = entry;
    let is_all = action == FilterAction::SelectAllCategories;
    let class = if is_all { "button is-success mr-6" } else { "button mr-2 my-1" };
    view! {
        <a
            href="#/"
            class=class
            class:is-outlined={is_all && !active}
            class:is-info={!is_all && active}
            on:click=move |_| on_select.call(action.clone())
        >
            {label}
        </a>
    }
}

#[component]
fn ProductRow(row: TableRow) -> impl IntoView {
    view! {
        <tr>
            <td class="has-text-weight-bold">{row.id.0}</td>
            <td>{row.product}</td>
            <td>{row.category}</td>
            <td class=row.user_style.css_class()>{row.user}</td>
        </tr>
    }
}
