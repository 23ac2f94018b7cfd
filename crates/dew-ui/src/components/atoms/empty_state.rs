//! Empty state panel for the contact table.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class={classes!("empty-state", props.class.clone())}>
            <h4>{props.title.clone()}</h4>
            {props.description.clone().map(|text| html! {
                <p class="muted">{text}</p>
            }).unwrap_or_default()}
        </div>
    }
}
