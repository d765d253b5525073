//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("cannot open env file: {} - {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse env file: {} - {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// 内置模板本身无效
    #[error("invalid template '{name}': {reason}")]
    Template { name: String, reason: String },

    /// 渲染时缺少模板变量
    #[error("template '{template}' is missing variable: {name}")]
    MissingVariable { template: String, name: String },

    #[error("unrecoverable error processing env vars: {} - {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Box<GenError>,
    },

    #[error("cannot open and create output file {} - {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output to file {} - {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 错误报告 (透明原则)
impl GenError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 额外打印错误链
    /// verbose = false: 只打印一行
    pub fn report(&self, verbose: bool) {
        println!("{}", self);

        if verbose {
            // 顶层信息已包含直接原因，从下一层开始打印
            let mut current = self.source().and_then(|s| s.source());
            while let Some(next) = current {
                println!("  └─ {}", next);
                current = next.source();
            }
        }
    }

    /// 包装为带输入路径的渲染错误
    pub(crate) fn render(path: impl Into<PathBuf>, source: GenError) -> Self {
        GenError::Render {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, GenError>;
