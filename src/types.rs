//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// .env 文件解析结果：键唯一
pub type EnvEntries = HashMap<String, String>;

/// 规范化后的常量绑定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// camelCase 标识符
    pub identifier: String,
    /// 原始值，未转义
    pub value: String,
}

impl Binding {
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}", self.identifier, self.value)
    }
}

/// 一次生成的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 输入文件没有任何变量，未写出文件
    Empty { source: PathBuf },
    /// 模块已写出
    Written {
        count: usize,
        source: PathBuf,
        output: PathBuf,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Empty { source } => {
                write!(f, "no envs to parse from file: {} - exiting", source.display())
            }
            Outcome::Written {
                count,
                source,
                output,
            } => write!(
                f,
                "{} vars from {} were exported to {}",
                count,
                source.display(),
                output.display()
            ),
        }
    }
}
