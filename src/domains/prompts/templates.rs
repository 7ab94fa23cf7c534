//! Prompt templates module.
//!
//! A `PromptTemplate` pairs prompt metadata with a template string using
//! `{{variable}}` placeholders. Rendering substitutes the provided
//! arguments; placeholders for omitted optional arguments are stripped.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    ///
    /// Placeholders with no matching argument (optional arguments the
    /// caller omitted) are removed from the output.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        strip_unfilled_placeholders(&result)
    }
}

/// Remove any `{{name}}` tokens left after substitution.
fn strip_unfilled_placeholders(template: &str) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        match rest[start..].find("}}") {
            Some(end) => {
                result.push_str(&rest[..start]);
                rest = &rest[start + end + 2..];
            }
            None => break,
        }
    }
    result.push_str(rest);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(text: &str) -> PromptTemplate {
        PromptTemplate {
            name: "test".to_string(),
            description: None,
            arguments: vec![],
            template: text.to_string(),
        }
    }

    #[test]
    fn test_simple_substitution() {
        let mut args = HashMap::new();
        args.insert("start".to_string(), "铜陵站".to_string());

        let result = template("From {{start}}.").render(&args);
        assert_eq!(result, "From 铜陵站.");
    }

    #[test]
    fn test_unfilled_placeholder_stripped() {
        let args = HashMap::new();

        let result = template("Direction: {{direction}}!").render(&args);
        assert_eq!(result, "Direction: !");
    }

    #[test]
    fn test_multiple_occurrences_replaced() {
        let mut args = HashMap::new();
        args.insert("line".to_string(), "39".to_string());

        let result = template("Line {{line}} is line {{line}}.").render(&args);
        assert_eq!(result, "Line 39 is line 39.");
    }

    #[test]
    fn test_unterminated_placeholder_left_alone() {
        let args = HashMap::new();

        let result = template("broken {{tail").render(&args);
        assert_eq!(result, "broken {{tail");
    }
}
