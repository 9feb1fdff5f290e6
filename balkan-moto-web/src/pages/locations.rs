use crate::components::ui::filter_bar::{Chip, FilterBar};
use crate::components::ui::location_card::LocationCard;
use crate::components::ui::location_detail::LocationDetail;
use crate::components::ui::map_panel::MapPanel;
use crate::i18n::{fmt_count, t};
use balkan_moto_core::{
    CategoryFilter, Directory, Location, LocationCriteria, LocationKind, Selection, SiteConfig,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub directory: Rc<Directory>,
    pub config: Rc<SiteConfig>,
}

/// Kind toggle for a chip position: `0` is "All", then shops, then services.
#[must_use]
pub fn kind_for_chip(index: usize) -> CategoryFilter<LocationKind> {
    index
        .checked_sub(1)
        .and_then(|i| LocationKind::ALL.get(i).copied())
        .map_or(CategoryFilter::All, CategoryFilter::Only)
}

fn kind_chips(directory: &Directory, criteria: &LocationCriteria) -> Vec<Chip> {
    let all = Chip {
        label: format!("{} ({})", t("locations.kind.all"), directory.len()).into(),
        active: criteria.category == CategoryFilter::All,
    };
    std::iter::once(all)
        .chain(LocationKind::ALL.iter().map(|kind| Chip {
            label: format!(
                "{} ({})",
                t(&format!("locations.kind.{}s", kind.key())),
                directory.count_of(*kind)
            )
            .into(),
            active: criteria.category == CategoryFilter::Only(*kind),
        }))
        .collect()
}

#[function_component(LocationsPage)]
pub fn locations_page(p: &Props) -> Html {
    let criteria = use_state(LocationCriteria::default);
    let selection = use_state(Selection::new);
    let map_config = use_memo(p.config.clone(), |config| config.map.clone());

    let visible: Rc<Vec<Location>> = {
        let directory = p.directory.clone();
        use_memo((*criteria).clone(), move |c| {
            directory.visible(c).into_iter().cloned().collect::<Vec<_>>()
        })
    };
    let selected = selection
        .active()
        .and_then(|id| p.directory.find(id))
        .cloned()
        .map(Rc::new);

    let on_chip = {
        let criteria = criteria.clone();
        Callback::from(move |idx: usize| {
            criteria.set((*criteria).clone().with_category(kind_for_chip(idx)));
        })
    };
    let on_query = {
        let criteria = criteria.clone();
        Callback::from(move |q: String| criteria.set((*criteria).clone().with_query(q)))
    };
    let on_reset = {
        let criteria = criteria.clone();
        Callback::from(move |()| {
            let mut next = (*criteria).clone();
            next.reset();
            criteria.set(next);
        })
    };
    let on_select = {
        let selection = selection.clone();
        Callback::from(move |id: String| {
            let mut next = (*selection).clone();
            if next.select(id) {
                selection.set(next);
            }
        })
    };
    let on_clear = {
        let selection = selection.clone();
        Callback::from(move |()| {
            let mut next = (*selection).clone();
            if next.clear() {
                selection.set(next);
            }
        })
    };

    html! {
        <section class="locations-page" aria-labelledby="locations-title">
            <header class="page-header">
                <h1 id="locations-title">{ t("locations.title") }</h1>
                <p class="lead">{ t("locations.intro") }</p>
            </header>
            <FilterBar
                id_prefix="locations"
                chips={kind_chips(&p.directory, &criteria)}
                chips_label={t("locations.kind.label")}
                on_chip={on_chip}
                query={criteria.query.clone()}
                search_placeholder={t("locations.search")}
                on_query={on_query}
                show_reset={!criteria.is_default()}
                on_reset={on_reset}
                summary={fmt_count("locations.count", visible.len())}
            />
            <div class="locations-layout">
                <div class="locations-list">
                    if visible.is_empty() {
                        <p class="empty-state">{ t("locations.empty") }</p>
                    } else {
                        <ul class="location-cards">
                            { for visible.iter().map(|loc| html! {
                                <LocationCard
                                    key={loc.id.clone()}
                                    location={Rc::new(loc.clone())}
                                    selected={selection.is_selected(&loc.id)}
                                    on_select={on_select.clone()}
                                />
                            }) }
                        </ul>
                    }
                </div>
                <div class="locations-map">
                    <MapPanel
                        visible={visible.clone()}
                        selected={selected.clone()}
                        on_select={on_select.clone()}
                        config={map_config}
                    />
                    if let Some(location) = selected {
                        <LocationDetail {location} on_close={on_clear} />
                    }
                </div>
            </div>
        </section>
    }
}
