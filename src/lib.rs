//! elm-constgen - 从 .env 文件生成 Elm 常量模块
//!
//! 流程：解析 -> 键名转换 -> 模板渲染 -> 写文件

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod template;
pub mod types;
pub mod utils;

// 重新导出常用类型
pub use config::GenConfig;
pub use crate::core::{GeneratedModule, Generator, to_camel_case};
pub use error::{GenError, Result};
pub use types::{Binding, EnvEntries, Outcome};
