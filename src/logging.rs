//! 日志初始化
//!
//! 日志走 stderr，stdout 留给结果信息

use tracing_subscriber::EnvFilter;

/// 安装全局 subscriber
///
/// 默认只输出 warn 及以上，`verbose` 时为 debug；设置了 `RUST_LOG` 则以它为准。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化 (比如测试里) 时忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
