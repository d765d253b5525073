//! 模板解析器
//!
//! 解析模板语法：{{VAR}}

use crate::error::{GenError, Result};
use crate::template::{PLACEHOLDER, Template};

/// 解析模板内容
pub fn parse_template(name: &str, content: &str) -> Result<Template> {
    let mut variables: Vec<String> = Vec::new();

    for caps in PLACEHOLDER.captures_iter(content) {
        let var_name = caps[1].trim();

        // 检查变量名是否有效
        if var_name.is_empty() {
            return Err(GenError::Template {
                name: name.to_string(),
                reason: format!("empty placeholder '{}'", &caps[0]),
            });
        }

        if !variables.iter().any(|v| v == var_name) {
            variables.push(var_name.to_string());
        }
    }

    Ok(Template {
        name: name.to_string(),
        content: content.to_string(),
        variables,
    })
}
