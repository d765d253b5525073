//! 模板渲染器

use crate::error::{GenError, Result};
use crate::template::{PLACEHOLDER, Template};
use regex::Captures;
use std::collections::HashMap;

/// 渲染模板
///
/// 先按解析出的变量表检查缺失，再单遍替换：填进去的值不会再被当作模板扫描，
/// 值里出现 `{{x}}` 也原样保留。
pub fn render(template: &Template, variables: &HashMap<&str, &str>) -> Result<String> {
    if let Some(name) = template
        .variables
        .iter()
        .find(|name| !variables.contains_key(name.as_str()))
    {
        return Err(GenError::MissingVariable {
            template: template.name.clone(),
            name: name.clone(),
        });
    }

    let rendered = PLACEHOLDER.replace_all(&template.content, |caps: &Captures| {
        variables
            .get(caps[1].trim())
            .copied()
            .unwrap_or_default()
            .to_string()
    });

    Ok(rendered.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parser;

    #[test]
    fn test_render_with_all_vars() {
        let template = parser::parse_template("test", "{{name}} = \"{{value}}\"").unwrap();

        let vars = HashMap::from([("name", "port"), ("value", "8080")]);
        let result = render(&template, &vars).unwrap();

        assert_eq!(result, "port = \"8080\"");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let template = parser::parse_template("test", "{{name}} : String\n{{name}} =").unwrap();
        let vars = HashMap::from([("name", "debug")]);

        assert_eq!(render(&template, &vars).unwrap(), "debug : String\ndebug =");
    }

    #[test]
    fn test_render_missing_variable() {
        let template = parser::parse_template("binding", "{{name}} = {{value}}").unwrap();
        let vars = HashMap::from([("name", "port")]);

        let result = render(&template, &vars);

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("binding"));
        assert!(message.contains("value"));
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = parser::parse_template("test", "{{a}}|{{b}}").unwrap();
        let vars = HashMap::from([("a", "{{b}}"), ("b", "x")]);

        assert_eq!(render(&template, &vars).unwrap(), "{{b}}|x");
    }

    #[test]
    fn test_missing_variable_reported_in_template_order() {
        let template = parser::parse_template("binding", "{{a}} {{b}} {{c}}").unwrap();
        let vars = HashMap::from([("a", "1")]);

        match render(&template, &vars) {
            Err(GenError::MissingVariable { template, name }) => {
                assert_eq!(template, "binding");
                assert_eq!(name, "b");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_extra_variables_are_ignored() {
        let template = parser::parse_template("test", "{{a}}").unwrap();
        let vars = HashMap::from([("a", "1"), ("unused", "2")]);

        assert_eq!(render(&template, &vars).unwrap(), "1");
    }
}
