//! Per-element content rules (E012-E018).

use std::collections::HashSet;

use crate::document::{DocumentTree, Element};

use super::Violation;

const VISUALLY_HIDDEN_CLASSES: [&str; 2] = ["visually-hidden", "sr-only"];
const DECORATIVE_ROLES: [&str; 2] = ["presentation", "none"];
const UNLABELLED_INPUT_TYPES: [&str; 3] = ["hidden", "submit", "button"];
const CAPTION_TRACK_KINDS: [&str; 2] = ["captions", "subtitles"];
const VIDEO_HOSTS: [&str; 4] = ["youtube.com", "youtube-nocookie.com", "youtu.be", "vimeo.com"];

fn has_name_attr(el: &Element<'_>) -> bool {
    el.non_empty_attr("aria-label").is_some() || el.non_empty_attr("aria-labelledby").is_some()
}

fn has_decorative_role(el: &Element<'_>) -> bool {
    el.attr("role")
        .is_some_and(|role| DECORATIVE_ROLES.contains(&role))
}

pub(super) fn duplicate_ids(doc: &dyn DocumentTree) -> Vec<Violation> {
    let mut seen = HashSet::new();
    doc.select(|el| el.has_attr("id"))
        .filter_map(|el| {
            let id = el.attr("id")?;
            (!seen.insert(id)).then(|| Violation::at(el.line()).with("id", id))
        })
        .collect()
}

pub(super) fn empty_link_text(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.by_tag("a")
        .filter(|link| {
            link.text().is_empty()
                && !has_name_attr(link)
                && !link
                    .descendants()
                    .any(|d| (d.is("img") && d.has_attr("alt")) || is_visually_hidden(&d))
        })
        .map(|link| Violation::at(link.line()))
        .collect()
}

fn is_visually_hidden(el: &Element<'_>) -> bool {
    VISUALLY_HIDDEN_CLASSES.iter().any(|class| el.has_class(class))
}

/// `alt=""` is a valid text alternative; only a missing attribute fails.
pub(super) fn images_missing_alt(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.by_tag("img")
        .filter(|img| {
            !img.has_attr("alt") && !has_decorative_role(img) && !img.attr_is("aria-hidden", "true")
        })
        .map(|img| Violation::at(img.line()))
        .collect()
}

pub(super) fn tables_missing_headers(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.by_tag("table")
        .filter(|table| !has_decorative_role(table) && !table.descendants().any(|d| d.is("th")))
        .map(|table| Violation::at(table.line()))
        .collect()
}

fn has_transcript_reference(el: &Element<'_>) -> bool {
    el.non_empty_attr("data-transcript").is_some()
        || el.non_empty_attr("aria-describedby").is_some()
}

fn has_caption_track(el: &Element<'_>) -> bool {
    el.descendants().any(|d| {
        d.is("track")
            && d.attr("kind").is_some_and(|kind| {
                CAPTION_TRACK_KINDS
                    .iter()
                    .any(|k| kind.trim().eq_ignore_ascii_case(k))
            })
    })
}

fn is_video_embed(el: &Element<'_>) -> bool {
    el.is("iframe")
        && el
            .attr("src")
            .is_some_and(|src| VIDEO_HOSTS.iter().any(|host| src.contains(host)))
}

pub(super) fn media_missing_captions(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.select(|el| el.is_any(&["video", "audio"]) || is_video_embed(el))
        .filter(|media| {
            let captioned = !media.is("iframe") && has_caption_track(media);
            !captioned && !has_transcript_reference(media)
        })
        .map(|media| Violation::at(media.line()))
        .collect()
}

fn is_labelled(doc: &dyn DocumentTree, control: &Element<'_>) -> bool {
    let by_for = control
        .non_empty_attr("id")
        .is_some_and(|id| doc.any(|el| el.is("label") && el.attr_is("for", id)));

    by_for || has_name_attr(control) || control.ancestors().any(|a| a.is("label"))
}

pub(super) fn unlabelled_controls(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.select(|el| el.is_any(&["input", "select", "textarea"]))
        .filter(|control| {
            let exempt = control.attr("type").is_some_and(|ty| {
                UNLABELLED_INPUT_TYPES
                    .iter()
                    .any(|t| ty.trim().eq_ignore_ascii_case(t))
            });
            !exempt && !is_labelled(doc, control)
        })
        .map(|control| Violation::at(control.line()))
        .collect()
}

/// `<button>` elements and other elements exposing `role="button"`.
/// Inputs are named by their `value` and are left to E017.
pub(super) fn unnamed_buttons(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.select(|el| el.is("button") || (el.attr_is("role", "button") && !el.is("input")))
        .filter(|button| button.text().is_empty() && !has_name_attr(button))
        .map(|button| Violation::at(button.line()))
        .collect()
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
