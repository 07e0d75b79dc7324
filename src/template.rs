//! Template interpolation for YAML configs
//!
//! Handles `{{ env.NAME }}` interpolation so secrets like the API key can
//! stay out of the config file.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching environment references: {{ env.NAME }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap()
});

/// Check if a string contains template variables
pub fn has_templates(input: &str) -> bool {
    TEMPLATE_REGEX.is_match(input)
}

/// Render a template using the process environment
pub fn render(input: &str) -> Result<String> {
    render_with(input, |name| std::env::var(name).ok())
}

/// Render a template using a custom variable lookup
///
/// Every reference must resolve; the first unknown name fails the render.
pub fn render_with<F>(input: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut output = String::with_capacity(input.len());
    let mut last = 0;

    for caps in TEMPLATE_REGEX.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        let name = &caps[1];
        let value = lookup(name).ok_or_else(|| Error::undefined_var(format!("env.{name}")))?;

        output.push_str(&input[last..whole.start()]);
        output.push_str(&value);
        last = whole.end();
    }

    output.push_str(&input[last..]);
    Ok(output)
}
