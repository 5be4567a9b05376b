//! "Learn More" dialog showing every known field of a species record.
//!
//! The open flag is local to each dialog. Nothing is cached between openings:
//! the view is rebuilt from the `species` prop on every render, so reopening
//! after the caller refreshed the record shows the new snapshot.

use dioxus::prelude::*;
use species_core::{EditRequest, SpeciesDetailView, SpeciesRecord};

const BACKDROP_STYLE: &str = "position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.5);";
const PANEL_STYLE: &str = "position: relative; width: 100%; max-width: 600px; max-height: 100vh; overflow-y: auto; padding: 24px; background: #fff; border-radius: 8px; box-shadow: 0 10px 25px rgba(0,0,0,0.2);";
const BUTTON_STYLE: &str = "padding: 6px 14px; border: 1px solid #d1d5db; border-radius: 6px; background: #f3f4f6; font-size: 14px; cursor: pointer;";

/// Keys that dismiss an open dialog.
fn closes_dialog(key: &Key) -> bool {
    *key == Key::Escape
}

/// Trigger button plus the modal it opens.
///
/// The edit button only exists for the record's author. Pressing it emits an
/// [`EditRequest`] to `on_edit`; the edit form itself belongs to the caller.
#[component]
pub fn SpeciesDetailsDialog(
    species: SpeciesRecord,
    viewer_id: String,
    on_edit: EventHandler<EditRequest>,
) -> Element {
    let mut open = use_signal(|| false);
    let view = SpeciesDetailView::render(&species, &viewer_id);

    let on_edit_click = move |_| {
        if let Some(request) = EditRequest::new(&species, &viewer_id) {
            log::info!(
                "[Species Debug] dialog: edit requested for {}",
                request.record.scientific_name
            );
            open.set(false);
            on_edit.call(request);
        }
    };

    rsx! {
        button {
            style: "{BUTTON_STYLE}",
            onclick: move |_| open.set(true),
            "Learn More"
        }
        if open() {
            div {
                style: "{BACKDROP_STYLE}",
                onclick: move |_| open.set(false),
                div {
                    role: "dialog",
                    aria_modal: "true",
                    tabindex: "-1",
                    style: "{PANEL_STYLE}",
                    // Focus the panel so key presses reach it
                    onmounted: move |evt: MountedEvent| async move {
                        let _ = evt.set_focus(true).await;
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if closes_dialog(&evt.key()) {
                            open.set(false);
                        }
                    },
                    onclick: move |evt| evt.stop_propagation(),
                    button {
                        aria_label: "Close",
                        style: "position: absolute; top: 12px; right: 12px; border: none; background: none; font-size: 18px; cursor: pointer;",
                        onclick: move |_| open.set(false),
                        "×"
                    }
                    h2 { style: "margin: 0 0 8px 0; font-size: 20px;", "{view.title}" }
                    div {
                        style: "color: #4b5563;",
                        if let Some(common_name) = &view.common_name {
                            span { style: "display: block; margin-bottom: 8px; font-style: italic;", "{common_name}" }
                        }
                        if let Some(image) = &view.image {
                            div {
                                style: "position: relative; width: 100%; height: 384px; margin-bottom: 16px; overflow: hidden; border-radius: 8px;",
                                img {
                                    src: "{image.src}",
                                    alt: "{image.alt}",
                                    style: "width: 100%; height: 100%; object-fit: cover;",
                                }
                            }
                        }
                        if let Some(population) = &view.population {
                            span { style: "display: block; margin-bottom: 4px; font-size: 14px;", "{population}" }
                        }
                        if let Some(kingdom) = &view.kingdom {
                            span { style: "display: block; margin-bottom: 8px; font-size: 14px; font-weight: 600;", "{kingdom}" }
                        }
                        if let Some(author) = &view.author {
                            span {
                                style: "display: block; margin-bottom: 8px; font-size: 14px;",
                                "Author: {author.display_name} "
                                if author.is_viewer {
                                    span { style: "color: #2563eb;", "(You)" }
                                }
                            }
                        }
                        if let Some(description) = &view.description {
                            span { style: "display: block; margin-top: 12px; font-size: 14px; line-height: 1.6;", "{description}" }
                        }
                    }
                    if view.can_edit {
                        div {
                            style: "margin-top: 16px; display: flex; justify-content: flex-end;",
                            button {
                                style: "{BUTTON_STYLE}",
                                onclick: on_edit_click,
                                "Edit Species"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_the_dialog() {
        assert!(closes_dialog(&Key::Escape));
    }

    #[test]
    fn other_keys_keep_it_open() {
        assert!(!closes_dialog(&Key::Enter));
        assert!(!closes_dialog(&Key::Tab));
        assert!(!closes_dialog(&Key::Character("q".to_string())));
    }
}
