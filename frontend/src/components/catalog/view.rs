//! View rendering for the catalog component.
//!
//! The page has three surfaces: the inline create panel, the record grid,
//! and the edit modal. All three render from component state only; the one
//! network call tied to the view is the mount-time refresh issued from the
//! component's `rendered` hook in `mod.rs`.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::record::Record;

use super::editor::{Editor, EditorMode, Field};
use super::helpers::{cover_url, format_created_at, format_price};
use super::messages::Msg;
use super::state::CatalogComponent;
use super::styles::STYLESHEET;

/// Main view function: create panel, grid, and (when a record is selected)
/// the edit modal.
pub fn view(component: &CatalogComponent, ctx: &Context<CatalogComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="catalog-root">
            <style>{ STYLESHEET }</style>
            { build_create_panel(component, link) }
            { build_grid(component, link) }
            { build_modal(component, link) }
        </div>
    }
}

/// Intro copy, the transient success notice, and either the create form or
/// the button that opens it.
fn build_create_panel(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    html! {
        <div class="outer-container">
            {
                if component.notice {
                    html! { <div class="tooltip">{"Record added to the catalog!"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="text-container">
                <p>{"Add your favorite books by filling in their details; \
                     each one lands on your virtual shelf below."}</p>
                {"Once added, click any of them to make changes or remove them from the shelf."}
            </div>
            {
                if component.editor.mode == EditorMode::Creating {
                    build_create_form(component, link)
                } else {
                    html! {
                        <button class="submit-button" onclick={link.callback(|_| Msg::StartCreate)}>
                            {"Add a record"}
                        </button>
                    }
                }
            }
        </div>
    }
}

fn build_create_form(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    let draft = &component.editor.draft;

    html! {
        <form
            class="form-container"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::SubmitCreate
            })}
        >
            <div class="inner-container">
                <div class="column">
                    { field_input(link, "Name:", "text", Field::Name, draft.name.clone(), None, true) }
                    { field_input(link, "Price:", "number", Field::Price, draft.price.clone(), None, true) }
                    { field_input(link, "Image:", "url", Field::ImageUrl, draft.image_url.clone(), None, false) }
                </div>
                <div class="column">
                    { description_input(link, draft.description.clone(), None) }
                    <button type="submit" class="submit-button">{"Add record"}</button>
                    { error_message(&component.editor) }
                </div>
            </div>
        </form>
    }
}

/// The shelf itself: one card per record, in backend order.
fn build_grid(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    html! {
        <div class="record-list-container">
            <h2>{"Shelf"}</h2>
            <div class="record-grid">
                { for component.records.iter().map(|record| build_card(record, link)) }
            </div>
        </div>
    }
}

fn build_card(record: &Record, link: &Scope<CatalogComponent>) -> Html {
    let onclick = {
        let record = record.clone();
        link.callback(move |_| Msg::StartEdit(record.clone()))
    };

    html! {
        <div class="record-item" key={record.id} onclick={onclick}>
            <div class="image-container">
                <img src={cover_url(&record.image_url)} alt={record.name.clone()} />
            </div>
            <h3>{ &record.name }</h3>
            <p>{ format_price(record.price) }</p>
            <p class="date">{ format_created_at(&record.created_at) }</p>
        </div>
    }
}

/// Edit modal for the selected record. Clicking the overlay closes it;
/// clicks inside the content stop there.
fn build_modal(component: &CatalogComponent, link: &Scope<CatalogComponent>) -> Html {
    let record = match (&component.editor.mode, &component.selected) {
        (EditorMode::Editing(_), Some(record)) => record,
        _ => return html! {},
    };
    let draft = &component.editor.draft;

    html! {
        <div class="modal-overlay" onclick={link.callback(|_| Msg::Close)}>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="close-button" onclick={link.callback(|_| Msg::Close)}>{"\u{00d7}"}</button>
                <h2>{ &record.name }</h2>
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::SubmitUpdate
                })}>
                    <div class="inner-container">
                        <div class="column">
                            { field_input(link, "Name:", "text", Field::Name, draft.name.clone(),
                                Some(record.name.clone()), true) }
                            { field_input(link, "Price:", "number", Field::Price, draft.price.clone(),
                                Some(record.price.to_string()), true) }
                            { field_input(link, "Image:", "url", Field::ImageUrl, draft.image_url.clone(),
                                record.image_url.clone().or_else(|| Some("Image URL".to_string())), false) }
                        </div>
                        <div class="column">
                            { description_input(link, draft.description.clone(), Some(record.description.clone())) }
                            <button type="submit" class="submit-button">{"Update record"}</button>
                            { error_message(&component.editor) }
                        </div>
                    </div>
                </form>
                <button class="delete-button" onclick={link.callback(|_| Msg::Delete)}>
                    {"Delete record"}
                </button>
                <img src={cover_url(&record.image_url)} alt={record.name.clone()} />
            </div>
        </div>
    }
}

/// Renders one labelled input wired to `Msg::Stage`. Required/typed
/// constraints live here so an invalid draft never reaches the network.
fn field_input(
    link: &Scope<CatalogComponent>,
    label: &str,
    input_type: &'static str,
    field: Field,
    value: String,
    placeholder: Option<String>,
    required: bool,
) -> Html {
    html! {
        <div class="form-item small-input">
            <label>{ label }</label>
            <input
                type={input_type}
                step={ if input_type == "number" { Some("any") } else { None } }
                value={value}
                placeholder={placeholder.unwrap_or_default()}
                required={required}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::Stage(field, value)
                })}
            />
        </div>
    }
}

fn description_input(
    link: &Scope<CatalogComponent>,
    value: String,
    placeholder: Option<String>,
) -> Html {
    html! {
        <div class="form-item large-input">
            <label>{"Description:"}</label>
            <textarea
                class="large-text"
                value={value}
                placeholder={placeholder.unwrap_or_default()}
                oninput={link.callback(|e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    Msg::Stage(Field::Description, value)
                })}
            />
        </div>
    }
}

fn error_message(editor: &Editor) -> Html {
    match &editor.error {
        Some(description) => html! {
            <p class="error-message">{ format!("Error: {}", description) }</p>
        },
        None => html! {},
    }
}
