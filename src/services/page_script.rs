//! Page Script: builds the player page and every script sent to it.
//!
//! The page exposes a handful of `window.__cp_*` hooks (see
//! `resources/ui/player.js`); everything here produces calls to them.
//! String arguments are JSON-encoded, which makes them valid JS literals.

use crate::screen::{ScreenView, StyleEffect};
use crate::types::settings::MediaSettings;
use crate::types::style::{BackgroundColor, FontColor, FontFamily, FontSize, StyleSelection};

const PLAYER_CSS: &str = include_str!("../../resources/ui/player.css");
const PLAYER_JS: &str = include_str!("../../resources/ui/player.js");

/// Scheme the page and its media are served from.
pub const SCHEME: &str = "cueplayer";
pub const PAGE_URL: &str = "cueplayer://localhost/";
pub const VIDEO_PATH: &str = "/media/video";
pub const SUBTITLES_PATH: &str = "/media/subtitles";

/// Receives scripts to evaluate in the page.
pub trait ScriptSink {
    fn eval(&self, script: String);
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn insert_rule_script(id: &str, css: &str) -> String {
    format!(
        "if(window.__cp_insertRule)__cp_insertRule({},{})",
        js_string(id),
        js_string(css)
    )
}

pub fn apply_class_script(id: &str) -> String {
    format!("if(window.__cp_applyClass)__cp_applyClass({})", js_string(id))
}

pub fn clear_rules_script() -> String {
    "if(window.__cp_clearRules)__cp_clearRules()".to_string()
}

pub fn track_visibility_script(visible: bool) -> String {
    format!(
        "if(window.__cp_setPrimaryTrackVisible)__cp_setPrimaryTrackVisible({})",
        visible
    )
}

pub fn render_script(view: &ScreenView) -> String {
    let json = serde_json::to_string(view).unwrap_or_else(|_| "null".to_string());
    format!("if(window.__cp_render)__cp_render({})", json)
}

/// Translates style effects into page scripts, in order.
pub fn effect_scripts(effects: &[StyleEffect]) -> Vec<String> {
    effects
        .iter()
        .map(|effect| match effect {
            StyleEffect::Insert(rule) => insert_rule_script(&rule.id, &rule.css),
            StyleEffect::Apply(id) => apply_class_script(id),
            StyleEffect::Clear => clear_rules_script(),
        })
        .collect()
}

/// One `<select>` control with its options, the current value preselected.
fn select_control<T: Copy + PartialEq>(
    field: &str,
    label: &str,
    options: &[T],
    current: T,
    wire: fn(T) -> &'static str,
    text: fn(T) -> &'static str,
) -> String {
    let mut html = format!(
        "<div class=\"subtitle-form-control\"><label for=\"cp-{f}\">{l}</label><select id=\"cp-{f}\" data-field=\"{f}\">",
        f = field,
        l = label
    );
    for &option in options {
        let selected = if option == current { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(wire(option)),
            selected,
            escape_html(text(option))
        ));
    }
    html.push_str("</select></div>");
    html
}

fn options_panel(selection: &StyleSelection) -> String {
    let mut html = String::from("<div id=\"cp-options\" class=\"subtitle-options\" hidden>");
    html.push_str(&select_control(
        "font_family",
        "Font Family",
        &FontFamily::ALL,
        selection.font_family,
        FontFamily::wire_value,
        FontFamily::label,
    ));
    html.push_str(&select_control(
        "font_size",
        "Font Size",
        &FontSize::ALL,
        selection.font_size,
        FontSize::wire_value,
        FontSize::label,
    ));
    html.push_str(&select_control(
        "font_color",
        "Font Color",
        &FontColor::ALL,
        selection.font_color,
        FontColor::wire_value,
        FontColor::label,
    ));
    html.push_str(&select_control(
        "background_color",
        "Background Color",
        &BackgroundColor::ALL,
        selection.background_color,
        BackgroundColor::wire_value,
        BackgroundColor::label,
    ));
    html.push_str("</div>");
    html
}

/// Builds the player page: video with one default subtitle track, two
/// toggles and the (initially hidden) styling controls.
pub fn player_page(media: &MediaSettings, selection: &StyleSelection) -> String {
    let mut html = String::with_capacity(PLAYER_CSS.len() + PLAYER_JS.len() + 4000);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(PLAYER_CSS);
    html.push_str("</style></head><body>");
    html.push_str("<div id=\"cp-subtitles\" class=\"player\">");
    html.push_str(&format!(
        "<video id=\"cp-video\" controls crossorigin=\"anonymous\" src=\"{}\">",
        VIDEO_PATH
    ));
    html.push_str(&format!(
        "<track kind=\"subtitles\" src=\"{}\" srclang=\"{}\" label=\"{}\" default>",
        SUBTITLES_PATH,
        escape_html(&media.subtitle_language),
        escape_html(&media.subtitle_label)
    ));
    html.push_str("</video></div>");
    html.push_str("<div class=\"controls\">");
    html.push_str("<button id=\"cp-toggle-subtitles\" class=\"toggle\">Hide Subtitles</button>");
    html.push_str("<button id=\"cp-toggle-options\" class=\"toggle\">View Subtitle Options</button>");
    html.push_str(&options_panel(selection));
    html.push_str("</div><script>");
    html.push_str(PLAYER_JS);
    html.push_str("</script></body></html>");
    html
}
