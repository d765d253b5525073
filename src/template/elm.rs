//! Elm 模块渲染
//!
//! 两个内置模板在启动时解析一次，之后只读

use crate::core::module::GeneratedModule;
use crate::error::Result;
use crate::template::{Template, parser, renderer};
use std::collections::HashMap;
use std::fmt::Write;

/// 整个模块：固定的警告头 + 模块声明 + 所有绑定块
pub const MODULE_TEMPLATE: &str = "{-
-----------
-- WARNING:
-- This is a generated file and any manual edits may be lost without warning.
-----------
-}
module {{name}} exposing ({{expose_list}})
{{bindings}}";

/// 单个常量：前置两个空行 + 类型注解 + 定义
pub const BINDING_TEMPLATE: &str = "

{{name}} : String
{{name}} =
    \"{{value}}\"
";

/// Elm 模块渲染器
#[derive(Debug, Clone)]
pub struct ModuleRenderer {
    module: Template,
    binding: Template,
}

impl ModuleRenderer {
    /// 解析内置模板
    pub fn new() -> Result<Self> {
        Ok(Self {
            module: parser::parse_template("module", MODULE_TEMPLATE)?,
            binding: parser::parse_template("binding", BINDING_TEMPLATE)?,
        })
    }

    /// 渲染完整的模块文本
    ///
    /// 输出只取决于模块内容，同样的输入每次得到完全相同的字节。
    pub fn render(&self, module: &GeneratedModule) -> Result<String> {
        let mut blocks = String::new();

        for binding in module.bindings() {
            let value = escape_string(&binding.value);
            let vars = HashMap::from([
                ("name", binding.identifier.as_str()),
                ("value", value.as_str()),
            ]);
            blocks.push_str(&renderer::render(&self.binding, &vars)?);
        }

        let expose_list = module.identifiers().collect::<Vec<_>>().join(", ");
        let vars = HashMap::from([
            ("name", module.name()),
            ("expose_list", expose_list.as_str()),
            ("bindings", blocks.as_str()),
        ]);

        renderer::render(&self.module, &vars)
    }
}

/// 转义为 Elm 双引号字符串字面量的内容 (不含两侧引号)
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                // 写入 String 不会失败
                let _ = write!(escaped, "\\u{{{:04X}}}", c as u32);
            }
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnvEntries;

    fn module(pairs: &[(&str, &str)]) -> GeneratedModule {
        let entries: EnvEntries = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GeneratedModule::from_entries("ConstGen", &entries)
    }

    const HEADER: &str = "{-
-----------
-- WARNING:
-- This is a generated file and any manual edits may be lost without warning.
-----------
-}
";

    #[test]
    fn test_render_two_bindings() {
        let renderer = ModuleRenderer::new().unwrap();
        let output = renderer
            .render(&module(&[("PORT", "8080"), ("API_BASE_URL", "http://x")]))
            .unwrap();

        let expected = format!(
            "{HEADER}module ConstGen exposing (apiBaseUrl, port)


apiBaseUrl : String
apiBaseUrl =
    \"http://x\"


port : String
port =
    \"8080\"
"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = ModuleRenderer::new().unwrap();
        let pairs = [("Z_LAST", "z"), ("A_FIRST", "a"), ("M_MID", "m"), ("B", "b")];

        let first = renderer.render(&module(&pairs)).unwrap();
        let second = renderer.render(&module(&pairs)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_expose_list_matches_blocks() {
        let renderer = ModuleRenderer::new().unwrap();
        let output = renderer
            .render(&module(&[("ONE", "1"), ("TWO_THREE", "23"), ("FOUR", "4")]))
            .unwrap();

        let expose_line = output
            .lines()
            .find(|l| l.starts_with("module "))
            .unwrap();
        let exposed: Vec<&str> = expose_line
            .split_once('(')
            .and_then(|(_, rest)| rest.strip_suffix(')'))
            .unwrap()
            .split(", ")
            .collect();

        let declared: Vec<&str> = output
            .lines()
            .filter_map(|l| l.strip_suffix(" : String"))
            .collect();

        assert_eq!(exposed, vec!["four", "one", "twoThree"]);
        assert_eq!(exposed, declared);
    }

    #[test]
    fn test_value_is_escaped() {
        let renderer = ModuleRenderer::new().unwrap();
        let output = renderer
            .render(&module(&[("GREETING", "say \"hi\"\\now")]))
            .unwrap();

        assert!(output.contains("    \"say \\\"hi\\\"\\\\now\"\n"));
    }

    #[test]
    fn test_value_with_placeholder_syntax_is_verbatim() {
        let renderer = ModuleRenderer::new().unwrap();
        let output = renderer.render(&module(&[("TPL", "{{name}}")])).unwrap();

        assert!(output.contains("tpl =\n    \"{{name}}\"\n"));
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "plain");
        assert_eq!(escape_string("a\"b"), "a\\\"b");
        assert_eq!(escape_string("a\\b"), "a\\\\b");
        assert_eq!(escape_string("line1\nline2\r\tx"), "line1\\nline2\\r\\tx");
        assert_eq!(escape_string("bell\u{7}"), "bell\\u{0007}");
        assert_eq!(escape_string("héllo ✓"), "héllo ✓");
    }
}
