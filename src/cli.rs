//! CLI 参数定义

use crate::config::{DEFAULT_ENV_FILE, DEFAULT_MODULE_NAME, DEFAULT_SRC_DIR, GenConfig};
use clap::Parser;
use std::path::PathBuf;

/// elm-constgen - 把 .env 文件生成为 Elm 常量模块
#[derive(Parser, Debug)]
#[command(
    name = "elm-constgen",
    version,
    about = "Generate an Elm module of String constants from a .env file",
    long_about = "Reads KEY=value pairs from an env file and writes an Elm module that \
                  exposes each key as a camelCase String constant, sorted by name."
)]
pub struct Cli {
    /// env file to parse
    #[arg(short = 'e', long = "env-file", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// directory to write constants
    #[arg(short = 's', long = "src-dir", default_value = DEFAULT_SRC_DIR)]
    pub src_dir: PathBuf,

    /// name of the module to write
    #[arg(short = 'n', long = "name", default_value = DEFAULT_MODULE_NAME)]
    pub module_name: String,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 转换为生成配置
    pub fn into_config(self) -> GenConfig {
        GenConfig {
            env_file: self.env_file,
            src_dir: self.src_dir,
            module_name: self.module_name,
            verbose: self.verbose,
        }
    }
}
