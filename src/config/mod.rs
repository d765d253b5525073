//! 运行配置
//!
//! 三个值来自命令行：输入文件、输出目录、模块名

pub mod format;

use std::path::PathBuf;

/// 默认输入文件
pub const DEFAULT_ENV_FILE: &str = ".env";
/// 默认输出目录
pub const DEFAULT_SRC_DIR: &str = "./src";
/// 默认模块名
pub const DEFAULT_MODULE_NAME: &str = "ConstGen";
/// 生成文件扩展名
pub const MODULE_EXTENSION: &str = "elm";

/// 生成配置 (支持详细/安静模式切换)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    pub env_file: PathBuf,
    pub src_dir: PathBuf,
    pub module_name: String,
    pub verbose: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            src_dir: PathBuf::from(DEFAULT_SRC_DIR),
            module_name: DEFAULT_MODULE_NAME.to_string(),
            verbose: false,
        }
    }
}

impl GenConfig {
    /// 输出文件路径：`<src_dir>/<module_name>.elm`
    pub fn output_path(&self) -> PathBuf {
        self.src_dir
            .join(format!("{}.{}", self.module_name, MODULE_EXTENSION))
    }
}
