//! .env 格式解析器
//!
//! 语法规则 (注释、引号、转义、`export` 前缀) 交给 dotenvy。
//! 值按原样保留：`$NAME` / `${NAME}` 不做替换，也不读取进程环境变量。

use crate::error::{GenError, Result};
use crate::types::EnvEntries;
use std::io::Read;
use std::path::Path;

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 内容为键值映射
    ///
    /// 同一个键出现多次时，后出现的覆盖先出现的。
    /// `path` 只用于错误信息。
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Parse`] for any line dotenvy rejects.
    pub fn parse<R: Read>(mut reader: R, path: &Path) -> Result<EnvEntries> {
        let parse_error = |source| GenError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| parse_error(dotenvy::Error::Io(e)))?;

        let literal = escape_substitutions(&content);

        let mut entries = EnvEntries::new();
        for item in dotenvy::from_read_iter(literal.as_bytes()) {
            let (key, value) = item.map_err(parse_error)?;
            entries.insert(key, value);
        }

        Ok(entries)
    }
}

/// 扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Unquoted,
    /// `'...'`，dotenvy 本身就不替换
    SingleQuoted,
    /// `"..."`
    DoubleQuoted,
    /// `#` 到行尾
    Comment,
}

/// 把会触发替换的 `$` 改写成 `\$`
///
/// 只处理未加引号和双引号中的 `$`；单引号、注释和已转义的字符原样复制。
fn escape_substitutions(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut state = Scan::Unquoted;
    // 当前行到目前为止只有空白，或上一个字符是空白
    let mut after_blank = true;
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        match (state, c) {
            (Scan::Comment, '\n') => {
                state = Scan::Unquoted;
                after_blank = true;
                out.push(c);
            }
            (Scan::Comment, _) => out.push(c),
            (Scan::SingleQuoted, '\'') => {
                state = Scan::Unquoted;
                after_blank = false;
                out.push(c);
            }
            (Scan::SingleQuoted, _) => out.push(c),
            (Scan::Unquoted | Scan::DoubleQuoted, '\\') => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
                after_blank = false;
            }
            (Scan::Unquoted | Scan::DoubleQuoted, '$') => {
                out.push_str("\\$");
                after_blank = false;
            }
            (Scan::DoubleQuoted, '"') => {
                state = Scan::Unquoted;
                after_blank = false;
                out.push(c);
            }
            (Scan::DoubleQuoted, _) => out.push(c),
            (Scan::Unquoted, '#') if after_blank => {
                state = Scan::Comment;
                out.push(c);
            }
            (Scan::Unquoted, '\'') => {
                state = Scan::SingleQuoted;
                out.push(c);
            }
            (Scan::Unquoted, '"') => {
                state = Scan::DoubleQuoted;
                out.push(c);
            }
            (Scan::Unquoted, _) => {
                after_blank = c.is_whitespace();
                out.push(c);
            }
        }
    }

    out
}
