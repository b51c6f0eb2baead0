//! Placeholder substitution for user-supplied command templates.

use std::collections::HashMap;

/// Binding set for command templates.
///
/// Substitutes `{placeholder}` tokens with bound values. Placeholders without
/// a bound value are left as literal text so a misconfigured template stays
/// visible in the resulting command. No shell escaping is applied: the
/// template is caller-trusted text, not untrusted input.
///
/// # Example
///
/// ```
/// use clipforge_av::CommandBindings;
///
/// let bindings = CommandBindings::new()
///     .bind("input1", "a.mp4")
///     .bind("output", "o.mp4");
///
/// assert_eq!(
///     bindings.resolve("{input1} {input2} {output}"),
///     "a.mp4 {input2} o.mp4",
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandBindings {
    vars: HashMap<String, String>,
}

impl CommandBindings {
    /// Create an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, builder style.
    pub fn bind(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Set a binding.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.vars.insert(key.to_string(), value.into());
    }

    /// Get a bound value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    /// Substitute every bound `{placeholder}` occurrence in the template.
    pub fn resolve(&self, template: &str) -> String {
        let mut resolved = template.to_string();
        for (key, value) in &self.vars {
            resolved = resolved.replace(&format!("{{{}}}", key), value);
        }
        resolved
    }
}
