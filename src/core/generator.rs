//! 生成器 (单遍流水线)
//!
//! 打开输入 -> 解析 -> 构建模块 -> 渲染 -> 创建输出 -> 写入，
//! 任一步失败立即返回，不做重试也不清理半成品文件。

use crate::config::GenConfig;
use crate::config::format::dotenv::DotenvParser;
use crate::core::module::GeneratedModule;
use crate::error::{GenError, Result};
use crate::template::elm::ModuleRenderer;
use crate::types::Outcome;
use crate::utils::paths;

/// 生成器
pub struct Generator {
    config: GenConfig,
    renderer: ModuleRenderer,
}

impl Generator {
    /// 创建生成器，内置模板在这里解析
    pub fn new(config: GenConfig) -> Result<Self> {
        let renderer = ModuleRenderer::new()?;
        Ok(Self { config, renderer })
    }

    /// 执行一次生成
    pub fn run(&self) -> Result<Outcome> {
        let source = &self.config.env_file;

        let input = paths::open_input(source)?;
        let entries = DotenvParser::parse(input, source)?;
        tracing::debug!(path = %source.display(), count = entries.len(), "parsed env file");

        if entries.is_empty() {
            return Ok(Outcome::Empty {
                source: source.clone(),
            });
        }

        let module = GeneratedModule::from_entries(&self.config.module_name, &entries);
        for binding in module.bindings() {
            tracing::debug!(%binding, "binding");
        }

        let content = self.render(&module)?;

        let output = self.config.output_path();
        let file = paths::create_output(&output)?;
        paths::write_output(file, &output, &content)?;
        tracing::debug!(path = %output.display(), bytes = content.len(), "module written");

        Ok(Outcome::Written {
            count: module.len(),
            source: source.clone(),
            output,
        })
    }

    /// 渲染模块文本，失败时附带输入文件路径
    pub fn render(&self, module: &GeneratedModule) -> Result<String> {
        self.renderer
            .render(module)
            .map_err(|e| GenError::render(&self.config.env_file, e))
    }
}
