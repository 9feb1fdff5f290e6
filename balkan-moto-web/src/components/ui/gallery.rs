use crate::i18n::{t, tr};
use crate::paths::sized_image_url;
use balkan_moto_core::Gallery;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageGalleryProps {
    pub images: Vec<String>,
    pub alt: AttrValue,
}

/// Main image with previous/next controls and a thumbnail strip.
#[function_component(ImageGallery)]
pub fn image_gallery(p: &ImageGalleryProps) -> Html {
    let gallery = use_state(|| Gallery::new(p.images.len()));
    {
        let gallery = gallery.clone();
        use_effect_with(p.images.clone(), move |images| {
            gallery.set(Gallery::new(images.len()));
            || {}
        });
    }

    // State still describes the previous record until the effect runs.
    let view = gallery.fit(p.images.len());
    let Some(current) = p.images.get(view.index()) else {
        return Html::default();
    };

    let step = |forward: bool| {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| {
            gallery.set(if forward { view.next() } else { view.prev() });
        })
    };
    let position = (view.index() + 1).to_string();
    let total = view.len().to_string();
    let mut args = BTreeMap::new();
    args.insert("index", position.as_str());
    args.insert("total", total.as_str());

    html! {
        <div class="gallery">
            <figure class="gallery__main">
                <img src={sized_image_url(current, 960)} alt={p.alt.clone()} />
                <figcaption class="sr-only">{ tr("gallery.position", Some(&args)) }</figcaption>
            </figure>
            if view.has_navigation() {
                <div class="gallery__controls">
                    <button type="button" class="gallery__prev" aria-label={t("gallery.prev")} onclick={step(false)}>{"‹"}</button>
                    <span class="gallery__counter" aria-hidden="true">{ format!("{position} / {total}") }</span>
                    <button type="button" class="gallery__next" aria-label={t("gallery.next")} onclick={step(true)}>{"›"}</button>
                </div>
                <ul class="gallery__thumbs">
                    { for p.images.iter().enumerate().map(|(i, url)| {
                        let gallery = gallery.clone();
                        let active = i == view.index();
                        let jump = Callback::from(move |_: MouseEvent| gallery.set(view.jump(i)));
                        html! {
                            <li>
                                <button type="button" class={classes!("thumb", active.then_some("thumb--active"))} aria-current={active.then_some("true")} onclick={jump}>
                                    <img src={sized_image_url(url, 120)} alt="" />
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
