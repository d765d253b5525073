//! elm-constgen 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给 Generator
//! - 错误处理：打印一行错误后以 1 退出，--verbose 时附带错误链

use clap::Parser;
use elm_constgen::cli::Cli;
use elm_constgen::{GenConfig, Generator, Result, logging};

fn main() {
    // 解析 CLI 参数
    let config = Cli::parse().into_config();
    logging::init(config.verbose);

    let verbose = config.verbose;
    match run(config) {
        Ok(()) => {}
        Err(e) => {
            e.report(verbose);
            std::process::exit(1);
        }
    }
}

/// 执行一次生成并打印结果
fn run(config: GenConfig) -> Result<()> {
    let generator = Generator::new(config)?;
    let outcome = generator.run()?;
    println!("{}", outcome);
    Ok(())
}
