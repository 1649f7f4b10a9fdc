//! 日志基础设施

use anyhow::Result;
use std::io;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时同时写入按日期分割的文件，
    /// 返回的 guard 必须持有到进程退出，否则文件日志会丢失。
    pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))?;

        match &config.log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let file_appender = rolling::daily(dir, &config.file_prefix);
                let (writer, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(
                        fmt::layer()
                            .with_writer(writer)
                            .with_ansi(false) // 文件中不使用颜色
                            .with_target(false)
                            .with_thread_names(true),
                    )
                    .with(fmt::layer().with_writer(io::stdout).with_ansi(true))
                    .try_init()?;

                Ok(Some(guard))
            }
            None => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().with_writer(io::stdout).with_ansi(true))
                    .try_init()?;

                Ok(None)
            }
        }
    }
}
