use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_else(|| AttrValue::from("button"))]
    pub class: AttrValue,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    html! {
        <button type="button" class={p.class.clone()} disabled={p.disabled} {onclick}>
            { p.label.clone() }
        </button>
    }
}
