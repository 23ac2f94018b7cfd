//! Search and add controls above the contact table.

use crate::components::atoms::SearchInput;
use crate::core::logic::SEARCH_PLACEHOLDER;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToolbarProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub input_ref: NodeRef,
    pub on_search: Callback<String>,
    pub on_add: Callback<MouseEvent>,
}

#[function_component(Toolbar)]
pub(crate) fn toolbar(props: &ToolbarProps) -> Html {
    html! {
        <div class="toolbar">
            <SearchInput
                value={props.value.clone()}
                placeholder={AttrValue::from(SEARCH_PLACEHOLDER)}
                aria_label={AttrValue::from("Search people")}
                disabled={props.disabled}
                input_ref={props.input_ref.clone()}
                on_search={props.on_search.clone()}
            />
            <button class="primary" disabled={props.disabled} onclick={props.on_add.clone()}>
                {"+ Add"}
            </button>
        </div>
    }
}
