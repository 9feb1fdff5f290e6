use crate::i18n::t;
use balkan_moto_core::SortKey;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// One toggle in the category/kind strip.
#[derive(Clone, PartialEq)]
pub struct Chip {
    pub label: AttrValue,
    pub active: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct FilterBarProps {
    /// Prefix for element ids so two bars can share a page.
    pub id_prefix: AttrValue,
    pub chips: Vec<Chip>,
    pub chips_label: AttrValue,
    pub on_chip: Callback<usize>,
    pub query: AttrValue,
    pub search_placeholder: AttrValue,
    pub on_query: Callback<String>,
    /// Price sort control; hidden when `None`.
    #[prop_or_default]
    pub sort: Option<SortKey>,
    #[prop_or_default]
    pub on_sort: Callback<SortKey>,
    #[prop_or_default]
    pub show_reset: bool,
    #[prop_or_default]
    pub on_reset: Callback<()>,
    /// Result count line, announced politely.
    pub summary: AttrValue,
}

const SORT_OPTIONS: [(SortKey, &str); 3] = [
    (SortKey::None, "shop.sort.none"),
    (SortKey::PriceAsc, "shop.sort.low_high"),
    (SortKey::PriceDesc, "shop.sort.high_low"),
];

#[function_component(FilterBar)]
pub fn filter_bar(p: &FilterBarProps) -> Html {
    let search_id = format!("{}-search", p.id_prefix);
    let sort_id = format!("{}-sort", p.id_prefix);

    let on_input = {
        let cb = p.on_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.value());
            }
        })
    };
    let on_sort = {
        let cb = p.on_sort.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(SortKey::from_value(&sel.value()));
            }
        })
    };
    let reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="filter-bar">
            <div class="chip-row" role="group" aria-label={p.chips_label.clone()}>
                { for p.chips.iter().enumerate().map(|(idx, chip)| {
                    let cb = p.on_chip.clone();
                    let pick = Callback::from(move |_: MouseEvent| cb.emit(idx));
                    html! {
                        <button
                            type="button"
                            class={classes!("chip", chip.active.then_some("chip--active"))}
                            aria-pressed={chip.active.to_string()}
                            onclick={pick}
                        >
                            { chip.label.clone() }
                        </button>
                    }
                }) }
            </div>
            <div class="filter-bar__controls">
                <label for={search_id.clone()} class="sr-only">{ p.search_placeholder.clone() }</label>
                <input
                    id={search_id}
                    type="search"
                    class="search-input"
                    placeholder={p.search_placeholder.clone()}
                    value={p.query.clone()}
                    oninput={on_input}
                />
                if let Some(current) = p.sort {
                    <label for={sort_id.clone()} class="sr-only">{ t("shop.sort.label") }</label>
                    <select id={sort_id} class="sort-select" onchange={on_sort}>
                        { for SORT_OPTIONS.iter().map(|(key, label)| html! {
                            <option value={key.as_str()} selected={*key == current}>{ t(label) }</option>
                        }) }
                    </select>
                }
                if p.show_reset {
                    <button type="button" class="btn btn--ghost reset-filters" onclick={reset}>
                        { t("shop.reset") }
                    </button>
                }
            </div>
            <p class="result-count" aria-live="polite">{ p.summary.clone() }</p>
        </div>
    }
}
