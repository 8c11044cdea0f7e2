//! HTML rendering for the gallery page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is rendered server-side with Leptos components from one session's
//! `GalleryView` and `UploadDialog`. Dialog transitions are plain form posts
//! back to the session routes. Text and attribute values go through Leptos'
//! own escaping; stored image sources are only linked when URL-shaped.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use uuid::Uuid;

use crate::gallery::dialog::UploadDialog;
use crate::gallery::form::{Field, is_url_shaped};
use crate::gallery::view::{GalleryView, Tile};

pub const NOT_FOUND_MESSAGE: &str = "No images found.";

/// Link target used for stored sources that are not URL-shaped.
const INERT_HREF: &str = "#";

const URL_PATTERN: &str = r#"(https?|ftp)://[^\s"]+"#;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;padding:2rem;background:#f6f7f4;color:#1c2a1c}\
header{display:flex;justify-content:space-between;align-items:center;margin-bottom:1.5rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1.5rem}\
.tile{display:block;text-decoration:none;color:inherit}\
.tile .frame{aspect-ratio:1;overflow:hidden;border-radius:.5rem;background:#e3e6df}\
.tile img{width:100%;height:100%;object-fit:cover;transition:filter .7s ease,transform .7s ease}\
.tile img.loading{filter:blur(24px) grayscale(1);transform:scale(1.1)}\
.tile .name{margin:.5rem 0 0;font-weight:600}\
.tile .username{margin:0;color:#5b6b5b;font-size:.875rem}\
.overlay{position:fixed;inset:0;background:rgba(0,0,0,.45);display:flex;align-items:center;justify-content:center}\
.dialog{background:#fff;border-radius:.75rem;padding:1.5rem;min-width:320px}\
.dialog label{display:block;margin-top:.75rem;font-size:.875rem}\
.dialog input{width:100%;box-sizing:border-box;padding:.4rem}\
.errors{color:#b42318;padding-left:1.2rem}\
.actions{display:flex;gap:.5rem;justify-content:flex-end;margin-top:1rem}";

// Clears the loading class once an image arrives and reports it back.
const TILE_SCRIPT: &str = "\
document.querySelectorAll('img[data-loaded-url]').forEach(function (img) {\
  function done() { img.classList.remove('loading'); navigator.sendBeacon(img.dataset.loadedUrl); }\
  if (img.complete) { done(); } else { img.addEventListener('load', done, { once: true }); }\
});";

/// Render the full page for one session.
#[must_use]
pub fn render_page(session_id: Uuid, gallery: &GalleryView, dialog: &UploadDialog) -> String {
    let gallery = gallery.clone();
    let dialog = dialog.clone();
    Owner::new().with(move || view! { <GalleryPage session_id gallery dialog/> }.to_html())
}

/// Tile grid, or the "not found" message when the view has no list.
#[must_use]
pub fn render_gallery(session_id: Uuid, gallery: &GalleryView) -> String {
    let gallery = gallery.clone();
    Owner::new().with(move || view! { <Gallery session_id gallery/> }.to_html())
}

/// `src` and `href` for a stored image source.
fn safe_image_url(image_src: &str) -> &str {
    if is_url_shaped(image_src) { image_src } else { INERT_HREF }
}

#[component]
fn GalleryPage(session_id: Uuid, gallery: GalleryView, dialog: UploadDialog) -> impl IntoView {
    let open_action = format!("/s/{session_id}/dialog/open");

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Plant Gallery"</title>
                <style inner_html=STYLE></style>
            </head>
            <body>
                <header>
                    <h1>"Plant Gallery"</h1>
                    <form method="post" action=open_action>
                        <button type="submit">"Add image"</button>
                    </form>
                </header>
                <Gallery session_id gallery/>
                {dialog.is_open().then(|| view! { <UploadModal session_id dialog/> })}
                <script inner_html=TILE_SCRIPT></script>
            </body>
        </html>
    }
}

#[component]
fn Gallery(session_id: Uuid, gallery: GalleryView) -> impl IntoView {
    if gallery.is_not_found() {
        return view! { <p class="not-found">{NOT_FOUND_MESSAGE}</p> }.into_any();
    }

    let tiles = gallery.tiles().to_vec();
    view! {
        <main class="grid">
            {tiles
                .into_iter()
                .enumerate()
                .map(|(index, tile)| view! { <GalleryTile session_id index tile/> })
                .collect_view()}
        </main>
    }
    .into_any()
}

#[component]
fn GalleryTile(session_id: Uuid, index: usize, tile: Tile) -> impl IntoView {
    let record = tile.record().clone();
    let src = safe_image_url(&record.image_src).to_owned();
    let username = format!("@{}", record.username);

    let image = if tile.is_loading() {
        let loaded_url = format!("/s/{session_id}/tiles/{index}/loaded");
        view! { <img class="loading" src=src.clone() alt=record.name.clone() data-loaded-url=loaded_url/> }
            .into_any()
    } else {
        view! { <img src=src.clone() alt=record.name.clone()/> }.into_any()
    };

    view! {
        <a class="tile" data-id=record.id.to_string() href=src target="_blank" rel="noopener noreferrer">
            <div class="frame">{image}</div>
            <h3 class="name">{record.name}</h3>
            <p class="username">{username}</p>
        </a>
    }
}

#[component]
fn UploadModal(session_id: Uuid, dialog: UploadDialog) -> impl IntoView {
    let submit_action = format!("/s/{session_id}/images");
    let close_action = format!("/s/{session_id}/dialog/close");
    let errors = dialog.errors().to_vec();
    let form = dialog.form().clone();

    view! {
        <div class="overlay">
            <div class="dialog" role="dialog" aria-modal="true">
                <h2>"Add an image"</h2>
                {(!errors.is_empty())
                    .then(|| {
                        view! {
                            <ul class="errors">
                                {errors
                                    .into_iter()
                                    .map(|error| {
                                        view! { <li data-field=error.field().as_str()>{error.to_string()}</li> }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })}
                <form id="upload" method="post" action=submit_action>
                    <FormField field=form.image_src label="Image URL" input_type="url" pattern=URL_PATTERN/>
                    <FormField field=form.name label="Name" input_type="text"/>
                    <FormField field=form.username label="Username" input_type="text"/>
                    <FormField field=form.key label="Key" input_type="password"/>
                </form>
                <div class="actions">
                    <form method="post" action=close_action>
                        <button type="submit">"Close"</button>
                    </form>
                    <button type="submit" form="upload">"Submit"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    field: Field,
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] pattern: Option<&'static str>,
) -> impl IntoView {
    let name = field.name.as_str();
    let input = match pattern {
        Some(pattern) => view! {
            <input id=name name=name type=input_type value=field.value required=field.required pattern=pattern/>
        }
        .into_any(),
        None => view! { <input id=name name=name type=input_type value=field.value required=field.required/> }
            .into_any(),
    };

    view! {
        <label for=name>{label}</label>
        {input}
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
