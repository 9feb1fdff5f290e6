use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub visible: bool,
    pub message: AttrValue,
}

#[function_component(Toast)]
pub fn toast(p: &ToastProps) -> Html {
    if !p.visible {
        return Html::default();
    }
    html! {
        <div class="toast" role="status" aria-live="polite">{ p.message.clone() }</div>
    }
}
