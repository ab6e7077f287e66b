use crate::config::TranslatorConfig;
use crate::translate::UNSELECTED_LANGUAGE_PLACEHOLDER;
use crate::utils::html::escape_html;

const DEMO_TEMPLATE: &str = include_str!("../static/demo.html");

/// Idioms offered as one-click samples on the demo page
pub const SAMPLE_PHRASES: [&str; 5] = [
    "Break a leg!",
    "Kick the bucket",
    "Under the weather",
    "Costs an arm and a leg",
    "Let the cat out of the bag",
];

fn render_options(languages: &[&str], selected: Option<&str>) -> String {
    let mut html = format!(
        "<option value=\"{0}\">{0}</option>\n",
        escape_html(UNSELECTED_LANGUAGE_PLACEHOLDER)
    );
    for lang in languages {
        let escaped = escape_html(lang);
        let attr = if Some(*lang) == selected { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{0}\"{1}>{0}</option>\n", escaped, attr));
    }
    html
}

fn render_samples() -> String {
    SAMPLE_PHRASES
        .iter()
        .map(|phrase| format!("<li class=\"sample\">{}</li>\n", escape_html(phrase)))
        .collect()
}

/// Render the manual testing page for the configured language list
pub fn render_demo_page(config: &TranslatorConfig) -> String {
    let default_source = config.default_source_language.as_str();
    let targets: Vec<&str> = config.languages.iter().map(String::as_str).collect();

    let mut sources = vec![default_source];
    sources.extend(targets.iter().copied().filter(|lang| *lang != default_source));

    DEMO_TEMPLATE
        .replace("{{ source_options }}", &render_options(&sources, Some(default_source)))
        .replace("{{ target_options }}", &render_options(&targets, targets.first().copied()))
        .replace("{{ sample_phrases }}", &render_samples())
        .replace("{{ placeholder }}", &escape_html(UNSELECTED_LANGUAGE_PLACEHOLDER))
}
