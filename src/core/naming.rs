//! 键名转换：`API_BASE_URL` -> `apiBaseUrl`

/// 将大写下划线风格的键名转换为 camelCase 标识符
///
/// 整体转小写后按 `_` 切分，第一段保持原样，其余各段首字母大写 (仅 ASCII)。
/// 空段不产生任何字符，所以连续下划线和首尾下划线都会被吞掉。
pub fn to_camel_case(key: &str) -> String {
    let lowered = key.to_lowercase();
    let mut segments = lowered.split('_');

    let mut identifier = String::with_capacity(lowered.len());
    if let Some(first) = segments.next() {
        identifier.push_str(first);
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            identifier.push(head.to_ascii_uppercase());
            identifier.push_str(chars.as_str());
        }
    }

    identifier
}
