//! Error-message template substitution.

use verdict_core::profile::ErrorArgument;

/// Render an error template against evaluated arguments.
///
/// `%NAME%` and `%N` tokens (N is the argument's 1-based position) are
/// replaced with the argument's value, or the literal `"null"` when the
/// value is absent. Arguments apply from last to first so a `%1` token is
/// not consumed as a prefix of `%10` and friends.
pub fn render_error_message(template: &str, arguments: &[ErrorArgument]) -> String {
    let mut message = template.to_string();
    for index in (1..=arguments.len()).rev() {
        let argument = &arguments[index - 1];
        let value = argument.value.as_deref().unwrap_or("null");
        message = message.replace(&format!("%{}%", argument.name), value);
        message = message.replace(&format!("%{index}"), value);
    }
    message
}
