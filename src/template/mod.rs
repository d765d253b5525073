//! 模板引擎
//!
//! 只支持最简单的占位符语法 `{{name}}`，没有条件和循环。
//!
//! # 模板语法
//!
//! ```text
//! {{name}} : String
//! {{name}} =
//!     "{{value}}"
//! ```

pub mod elm;
pub mod parser;
pub mod renderer;

use regex::Regex;
use std::sync::LazyLock;

/// 占位符：`{{name}}`，名称两侧允许空白
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]*)\}\}").unwrap());

/// 解析后的模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub content: String,
    /// 占位符名称，按首次出现顺序去重
    pub variables: Vec<String>,
}
