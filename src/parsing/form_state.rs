use crate::domain::model::FormState;
use regex::Regex;

pub const VIEW_STATE: &str = "__VIEWSTATE";
pub const EVENT_VALIDATION: &str = "__EVENTVALIDATION";
pub const EVENT_TARGET: &str = "__EVENTTARGET";
pub const EVENT_ARGUMENT: &str = "__EVENTARGUMENT";
pub const LAST_FOCUS: &str = "__LASTFOCUS";

/// Tam sayfa (`<input type="hidden" ...>`) ya da UpdatePanel delta
/// (`|hiddenField|__VIEWSTATE|...|`) yanıtından gizli alan değerini okur.
fn hidden_field(html: &str, name: &str) -> Option<String> {
    let escaped = regex::escape(name);

    let input_re = Regex::new(&format!(r#"<input[^>]*\bname="{escaped}"[^>]*>"#)).ok()?;
    if let Some(tag) = input_re.find(html) {
        let value_re = Regex::new(r#"\bvalue="([^"]*)""#).ok()?;
        return Some(
            value_re
                .captures(tag.as_str())
                .map(|caps| caps[1].to_string())
                .unwrap_or_default(),
        );
    }

    let delta_re = Regex::new(&format!(r"\|hiddenField\|{escaped}\|([^|]*)\|")).ok()?;
    delta_re.captures(html).map(|caps| caps[1].to_string())
}

/// İki token'dan biri eksikse `None` döner; çağıran taraf bir sonraki POST'u
/// yapamaz ve o dalı bırakmalıdır.
pub fn extract_form_state(html: &str) -> Option<FormState> {
    let view_state = hidden_field(html, VIEW_STATE)?;
    let event_validation = hidden_field(html, EVENT_VALIDATION)?;
    Some(FormState {
        view_state,
        event_validation,
    })
}

/// Postback alanlarını kurar: event target, gizli token'lar ve seçili
/// dropdown değerleri.
pub fn build_postback(
    state: &FormState,
    event_target: &str,
    selections: &[(&str, &str)],
) -> Vec<(String, String)> {
    let mut fields = vec![
        (EVENT_TARGET.to_string(), event_target.to_string()),
        (EVENT_ARGUMENT.to_string(), String::new()),
        (LAST_FOCUS.to_string(), String::new()),
        (VIEW_STATE.to_string(), state.view_state.clone()),
        (EVENT_VALIDATION.to_string(), state.event_validation.clone()),
    ];

    for &(name, value) in selections {
        if let Some(existing) = fields.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            fields.push((name.to_string(), value.to_string()));
        }
    }

    fields
}
