use std::{cell::RefCell, rc::Rc};

use form_router::{ActiveForm, RouteEvent, RouterHandle, RouterOptions};
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let handle = use_mut_ref(RouterHandle::default);
    let active = use_state(|| ActiveForm::None);

    {
        let handle = handle.clone();
        let active = active.clone();

        yew_hooks::use_mount(move || {
            let on_route = Rc::new(RefCell::new(move |form: ActiveForm| {
                debug!("Active form is now {form}");
                active.set(form);
            })) as RouteEvent;

            *handle.borrow_mut() = form_router::register(RouterOptions {
                on_route: Some(on_route),
                ..RouterOptions::default()
            })
            .unwrap_throw();
        });
    }

    html! {
        <>
            <nav>
                <button data-form-action="create">{ "Create" }</button>
                <button data-form-action="read">{ "Read" }</button>
                <button data-form-action="update">{ "Update" }</button>
                <button data-form-action="delete">{ "Delete" }</button>
                <button data-form-action="none">{ "Close" }</button>
            </nav>

            <p>{ format!("Showing: {}", *active) }</p>

            <form id="create" class="create-form">
                <h2>{ "Create Player" }</h2>
                <input name="name" placeholder="Name" />
            </form>
            <form id="delete" class="delete-form">
                <h2>{ "Delete Player" }</h2>
                <input name="id" placeholder="Id" />
            </form>
            <form id="update" class="update-form">
                <h2>{ "Update Player" }</h2>
                <input name="id" placeholder="Id" />
                <input name="name" placeholder="Name" />
            </form>
            <form id="read" class="read-form">
                <h2>{ "Find Player" }</h2>
                <input name="id" placeholder="Id" />
            </form>
        </>
    }
}
