//! 引脚与常量配置模块
//!
//! 提供引脚分配、按键定义、调试开关和引脚管理器

pub mod button;
pub mod debug;
pub mod manager;
pub mod pins;

// 重新导出常用类型
pub use button::{Button, ButtonLadder};
pub use debug::DEBUG;
pub use manager::{PinManager, PinSource};
pub use pins::{Load, PinConfig, PinError, PIN_CONFIG};
