//! Floating bulk action bar shown while rows are selected.
//!
//! # Design
//! - Keep the counter label and actions fully prop-driven.
//! - Render action buttons through child content.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionBarProps {
    pub selected_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_clear: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BulkActionBar)]
pub(crate) fn bulk_action_bar(props: &BulkActionBarProps) -> Html {
    html! {
        <div class={classes!("bulk-actions", props.class.clone())} role="toolbar">
            <span class="muted">{props.selected_label.clone()}</span>
            <div class="bulk-buttons">
                { for props.children.iter() }
                <button class="ghost" onclick={props.on_clear.clone()}>{"Clear"}</button>
            </div>
        </div>
    }
}
