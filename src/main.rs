//! mayatest 主程序入口
//!
//! 设计原则：
//! - 安静模式：默认只输出警告，--verbose 查看解析过程
//! - 退出码透传：mayapy 的退出码即本程序的退出码

use clap::Parser;
use mayatest::cli::Cli;
use mayatest::config::{FileConfig, Settings};
use mayatest::maya::{self, Locator};
use mayatest::error::Result;
use mayatest::utils::logger;

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match run_cli(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            e.report(cli.verbose);
            std::process::exit(1);
        }
    }
}

/// 执行并返回退出码
fn run_cli(cli: &Cli) -> Result<i32> {
    let file_config = FileConfig::discover(cli.config.as_deref())?;
    let locator = Locator::from_host(&file_config);

    // 只定位 mayapy
    if cli.locate {
        let version = cli
            .maya
            .or(file_config.default_version)
            .ok_or(mayatest::MayaTestError::MissingVersion)?;
        let mayapy = locator.mayapy(version);
        println!("{}", mayapy.display());
        return Ok(if mayapy.is_file() { 0 } else { 1 });
    }

    let settings = Settings::resolve(cli, &file_config)?;

    if settings.dry_run {
        let invocation = maya::construct_command(&settings, &locator)?;
        println!("{}", maya::render(&invocation, settings.format)?);
        return Ok(0);
    }

    maya::run(&settings, &locator)
}
