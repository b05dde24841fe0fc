//! 配置宏
//!
//! 提供简化引脚配置使用的宏

/// 配置引脚的宏
///
/// 这个宏简化了从引脚管理器获取配置的过程，失败时记录日志并
/// 以 `anyhow::Error` 从当前函数返回。
///
/// # 示例
/// ```ignore
/// let pins = configure_pins!(board);
/// let backlight = pins.lcd.led;
/// ```
#[macro_export]
macro_rules! configure_pins {
    ($source:expr) => {{
        use $crate::config::pins::PIN_CONFIG;

        $crate::configure_pins!($source, &PIN_CONFIG)
    }};

    ($source:expr, $config:expr) => {{
        use $crate::config::PinManager;

        match PinManager::new($source).configure($config) {
            Ok(pins) => pins,
            Err(e) => {
                log::error!("引脚配置失败: {}", e);
                return Err(anyhow::anyhow!("引脚配置失败: {}", e));
            }
        }
    }};
}

/// 快速获取单个引脚的宏
///
/// # 示例
/// ```ignore
/// let load1 = take_pin!(manager, LOAD1_PIN);
/// ```
#[macro_export]
macro_rules! take_pin {
    ($manager:expr, $pin_num:expr) => {{
        match $manager.take_pin($pin_num) {
            Ok(pin) => pin,
            Err(e) => {
                log::error!("获取引脚失败: {}", e);
                return Err(anyhow::anyhow!("获取引脚失败: {}", e));
            }
        }
    }};
}
