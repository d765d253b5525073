//! 生成模块的数据模型

use crate::core::naming::to_camel_case;
use crate::types::{Binding, EnvEntries};
use std::collections::BTreeMap;

/// 待渲染的模块：名称 + 按标识符排序的绑定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    name: String,
    bindings: Vec<Binding>,
}

impl GeneratedModule {
    /// 从原始键值构建模块
    ///
    /// 规则：
    /// - 每个键经 [`to_camel_case`] 转换为标识符
    /// - 原始键按字典序处理，两个键转换后相同时，字典序靠后的键胜出
    /// - 绑定按标识符字典序排列
    pub fn from_entries(name: impl Into<String>, entries: &EnvEntries) -> Self {
        let mut raw_keys: Vec<&String> = entries.keys().collect();
        raw_keys.sort();

        // 标识符 -> (原始键, 值)
        let mut resolved: BTreeMap<String, (&str, &str)> = BTreeMap::new();

        for key in raw_keys {
            let identifier = to_camel_case(key);
            let value = entries[key].as_str();

            if let Some((previous, _)) = resolved.insert(identifier.clone(), (key.as_str(), value)) {
                tracing::warn!(
                    identifier = %identifier,
                    overridden = previous,
                    winner = %key,
                    "env keys collide after conversion, keeping the last one"
                );
            }
        }

        let bindings = resolved
            .into_iter()
            .map(|(identifier, (_, value))| Binding::new(identifier, value))
            .collect();

        Self {
            name: name.into(),
            bindings,
        }
    }

    /// 模块名
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// 导出的标识符，顺序与绑定一致
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
