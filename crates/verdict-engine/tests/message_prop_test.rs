//! Property tests for the error-message substitution grammar.

use proptest::prelude::*;

use verdict_core::profile::ErrorArgument;
use verdict_engine::validator::message::render_error_message;

fn argument(name: &str, value: Option<String>) -> ErrorArgument {
    ErrorArgument {
        name: name.to_string(),
        expression: String::new(),
        value,
    }
}

proptest! {
    #[test]
    fn token_free_templates_are_unchanged(
        template in "[a-zA-Z0-9 _.,;:()=-]*",
        name in "[a-z]{1,8}",
        value in "[a-zA-Z0-9]{0,8}",
    ) {
        let arguments = vec![argument(&name, Some(value))];
        prop_assert_eq!(render_error_message(&template, &arguments), template);
    }

    #[test]
    fn named_tokens_always_substitute(
        name in "[a-z]{1,8}",
        value in "[a-zA-Z0-9]{1,8}",
    ) {
        let template = format!("start %{name}% end");
        let arguments = vec![argument(&name, Some(value.clone()))];
        prop_assert_eq!(
            render_error_message(&template, &arguments),
            format!("start {value} end")
        );
    }

    #[test]
    fn positional_tokens_substitute_in_argument_order(
        values in proptest::collection::vec("[a-z]{1,6}", 1..9),
    ) {
        let arguments: Vec<ErrorArgument> = values
            .iter()
            .enumerate()
            .map(|(i, v)| argument(&format!("arg{i}"), Some(v.clone())))
            .collect();
        for (i, value) in values.iter().enumerate() {
            let template = format!("%{}", i + 1);
            prop_assert_eq!(&render_error_message(&template, &arguments), value);
        }
    }
}
