//! 文件读写工具 (传统原则：常识性接口设计)
//!
//! 每个函数只做一次系统调用，把 IO 错误包装成带路径的错误类型

use crate::error::{GenError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 打开输入文件
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| GenError::InputOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// 创建 (或截断) 输出文件
///
/// 不会创建缺失的父目录
pub fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| GenError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// 写入全部内容
///
/// 写入失败时已写出的部分不会被清理
pub fn write_output<W: Write>(mut out: W, path: &Path, content: &str) -> Result<()> {
    out.write_all(content.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| GenError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
}
