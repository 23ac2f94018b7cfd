//! Contact table with per-row and header checkboxes.
//!
//! # Design
//! - Rows arrive already filtered; the table never derives state itself.
//! - The header checkbox mirrors [`SelectAllState`], including the
//!   indeterminate flag, which has no HTML attribute and is set on the node.

use crate::components::atoms::EmptyState;
use crate::core::logic::empty_state_copy;
use dew_core::model::{Person, PersonId};
use dew_core::selection::{SelectAllState, SelectionSet};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PeopleTableProps {
    pub rows: Rc<Vec<Person>>,
    pub total: usize,
    #[prop_or_default]
    pub filter: AttrValue,
    pub selected: SelectionSet,
    pub select_state: SelectAllState,
    pub on_toggle: Callback<PersonId>,
    pub on_select_all: Callback<bool>,
}

#[function_component(PeopleTable)]
pub(crate) fn people_table(props: &PeopleTableProps) -> Html {
    let header_ref = use_node_ref();
    {
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |state: &SelectAllState| {
                if let Some(input) = header_ref.cast::<HtmlInputElement>() {
                    input.set_indeterminate(state.is_indeterminate());
                }
                || ()
            },
            props.select_state,
        );
    }

    if props.rows.is_empty() {
        let (title, description) = empty_state_copy(&props.filter, props.total);
        return html! {
            <EmptyState title={title} description={description.map(AttrValue::from)} />
        };
    }

    let select_state = props.select_state;
    let on_header = props
        .on_select_all
        .reform(move |_: Event| !select_state.is_checked());

    html! {
        <table class="people">
            <thead>
                <tr>
                    <th class="select">
                        <input
                            type="checkbox"
                            aria-label="Select all visible people"
                            ref={header_ref}
                            checked={select_state.is_checked()}
                            onchange={on_header}
                        />
                    </th>
                    <th>{"Name"}</th>
                    <th>{"Email"}</th>
                    <th>{"Phone"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.rows.iter().map(|person| render_row(person, &props.selected, &props.on_toggle))}
            </tbody>
        </table>
    }
}

fn render_row(person: &Person, selected: &SelectionSet, on_toggle: &Callback<PersonId>) -> Html {
    let id = person.id;
    let checked = selected.contains(&id);
    html! {
        <tr key={id.to_string()} class={classes!(checked.then_some("selected"))}>
            <td class="select">
                <input
                    type="checkbox"
                    aria-label={format!("Select {}", person.name)}
                    checked={checked}
                    onchange={on_toggle.reform(move |_: Event| id)}
                />
            </td>
            <td>{person.name.clone()}</td>
            <td>{person.email.clone()}</td>
            <td>{person.phone.clone()}</td>
        </tr>
    }
}
