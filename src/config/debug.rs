//! 调试开关
//!
//! `DEBUG` 为 1 时各模块输出详细的诊断日志

use log::LevelFilter;

pub const DEBUG: u8 = 1;

/// 是否启用调试输出
pub const fn enabled() -> bool {
    DEBUG != 0
}

/// 根据 `DEBUG` 选择日志级别
pub const fn log_level() -> LevelFilter {
    if enabled() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
