use crate::components::atoms::BulkActionBar;
use crate::components::people_table::PeopleTable;
use crate::components::toast::ToastHost;
use crate::components::toolbar::Toolbar;
use crate::core::logic::{LOADING_MESSAGE, deleted_message, millis_to_id, selection_label};
use crate::core::store::{AppStore, apply, begin_session};
use crate::models::{Toast, push_toast};
use api::AppServices;
use dew_core::filter::filter_people;
use dew_core::load::{LoadOrigin, initialize};
use dew_core::model::PersonId;
use dew_core::shortcuts::{Shortcut, interpret_shortcut, is_text_entry};
use dew_core::state::{
    DeleteResult, add_people, clear_selection, delete_selected, dismiss_load_error,
    finish_loading, select_all, set_filter, toggle_person,
};
use gloo::console;
use gloo::events::EventListener;
use preferences::load_config;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;

#[function_component(ContactsApp)]
pub(crate) fn contacts_app() -> Html {
    let services = use_memo(|_| AppServices::new(load_config()), ());
    let dispatch = Dispatch::<AppStore>::new();
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_mut_ref(|| 0u64);
    let search_ref = use_node_ref();

    let loading = use_selector(|store: &AppStore| store.contacts.is_loading());
    let load_error = use_selector(|store: &AppStore| store.contacts.load_error.clone());
    let people = use_selector(|store: &AppStore| store.contacts.people.clone());
    let filter = use_selector(|store: &AppStore| store.contacts.filter.clone());
    let selected = use_selector(|store: &AppStore| store.contacts.selected.clone());
    let select_state = use_selector(|store: &AppStore| store.contacts.select_all_state());
    let rows = use_memo(
        |(people, filter)| filter_people(people, filter),
        ((*people).clone(), (*filter).clone()),
    );

    {
        let services = services.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let mut started = false;
                dispatch.reduce_mut(|store| {
                    started = begin_session(store, &services.storage);
                });
                if started {
                    yew::platform::spawn_local(async move {
                        let outcome = initialize(
                            &services.storage,
                            services.source.as_ref(),
                            &services.config.placeholder,
                        )
                        .await;
                        if let LoadOrigin::Failed(err) = &outcome.origin {
                            console::error!("initial load failed", err.to_string());
                        }
                        dispatch.reduce_mut(|store| {
                            apply(store, &services.storage, |state| {
                                finish_loading(state, outcome)
                            });
                        });
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_search = {
        let services = services.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| {
            dispatch.reduce_mut(|store| {
                apply(store, &services.storage, |state| set_filter(state, value));
            });
        })
    };

    let on_add = {
        let services = services.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let now = millis_to_id(js_sys::Date::now());
            dispatch.reduce_mut(|store| {
                apply(store, &services.storage, |state| add_people(state, now));
            });
        })
    };

    let on_toggle = {
        let services = services.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |id: PersonId| {
            dispatch.reduce_mut(|store| {
                apply(store, &services.storage, |state| toggle_person(state, id));
            });
        })
    };

    let on_select_all = {
        let services = services.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |checked: bool| {
            dispatch.reduce_mut(|store| {
                apply(store, &services.storage, |state| select_all(state, checked));
            });
        })
    };

    let on_clear = {
        let services = services.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| {
                apply(store, &services.storage, clear_selection);
            });
        })
    };

    let on_toast = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |message: String| {
            let mut list = (*toasts).clone();
            push_toast(&mut list, &mut toast_id.borrow_mut(), message);
            toasts.set(list);
        })
    };

    let on_delete = {
        let services = services.clone();
        let dispatch = dispatch.clone();
        let on_toast = on_toast.clone();
        Callback::from(move |()| {
            let mut result = DeleteResult::NothingSelected;
            dispatch.reduce_mut(|store| {
                apply(store, &services.storage, |state| {
                    result = delete_selected(state, gloo::dialogs::confirm);
                    result.changes()
                });
            });
            if let DeleteResult::Removed(count) = result {
                on_toast.emit(deleted_message(count));
            }
        })
    };

    let on_dismiss_error = {
        let services = services.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| {
                apply(store, &services.storage, dismiss_load_error);
            });
        })
    };

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            let list: Vec<Toast> = toasts.iter().filter(|toast| toast.id != id).cloned().collect();
            toasts.set(list);
        })
    };

    let shortcut_handlers = use_mut_ref(|| (on_delete.clone(), on_clear.clone()));
    *shortcut_handlers.borrow_mut() = (on_delete.clone(), on_clear.clone());
    {
        let search_ref = search_ref.clone();
        let shortcut_handlers = shortcut_handlers.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if typing_in_field(event) {
                        return;
                    }
                    let (on_delete, on_clear) = shortcut_handlers.borrow().clone();
                    match interpret_shortcut(&event.key()) {
                        Some(Shortcut::DeleteSelected) => {
                            event.prevent_default();
                            on_delete.emit(());
                        }
                        Some(Shortcut::ClearSelection) => on_clear.emit(()),
                        Some(Shortcut::FocusSearch) => {
                            if let Some(input) = search_ref.cast::<HtmlElement>() {
                                event.prevent_default();
                                if let Err(err) = input.focus() {
                                    console::warn!("search focus failed", err);
                                }
                            }
                        }
                        None => {}
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let body = if *loading {
        html! { <p class="loading muted" role="status">{LOADING_MESSAGE}</p> }
    } else {
        html! {
            <PeopleTable
                rows={rows.clone()}
                total={people.len()}
                filter={AttrValue::from((*filter).clone())}
                selected={(*selected).clone()}
                select_state={*select_state}
                on_toggle={on_toggle}
                on_select_all={on_select_all}
            />
        }
    };

    let error_alert = (*load_error).clone().map(|message| {
        html! {
            <div class="alert error" role="alert">
                <span>{message}</span>
                <button class="ghost" aria-label="Dismiss" onclick={on_dismiss_error.reform(|_| ())}>{"✕"}</button>
            </div>
        }
    });

    html! {
        <main class="contacts">
            <h1>{"Contacts"}</h1>
            {error_alert.unwrap_or_default()}
            <Toolbar
                value={AttrValue::from((*filter).clone())}
                disabled={*loading}
                input_ref={search_ref}
                on_search={on_search}
                on_add={on_add}
            />
            {body}
            {if selected.is_empty() {
                html! {}
            } else {
                html! {
                    <BulkActionBar
                        class={classes!("floating")}
                        selected_label={AttrValue::from(selection_label(selected.len()))}
                        on_clear={on_clear.reform(|_| ())}
                    >
                        <button class="danger" onclick={on_delete.reform(|_| ())}>{"Delete"}</button>
                    </BulkActionBar>
                }
            }}
            <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
        </main>
    }
}

fn typing_in_field(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|element| {
            is_text_entry(&element.tag_name(), element.get_attribute("type").as_deref())
        })
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ContactsApp>::with_root(root).render();
    } else {
        yew::Renderer::<ContactsApp>::new().render();
    }
}
