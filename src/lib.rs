//! LCD 键盘扩展板与四路负载的引脚和常量定义
//!
//! 所有引脚编号、按键序号和调试开关集中在 `config` 模块，
//! 驱动 LCD、读取按键和控制负载的模块只通过这里的名字访问硬件。

pub mod config;
mod macros;

pub use config::button::{
    Button, ButtonLadder, BTN_DOWN, BTN_LEFT, BTN_NONE, BTN_RIGHT, BTN_SELECT, BTN_UP,
    BUTTON_ADC_CHANNEL,
};
pub use config::debug::DEBUG;
pub use config::pins::{
    Load, PinConfig, PinError, LCD_DATA1, LCD_DATA2, LCD_DATA3, LCD_DATA4, LCD_E, LCD_LED,
    LCD_RS, LOAD1_PIN, LOAD2_PIN, LOAD3_PIN, LOAD4_PIN, PIN_CONFIG,
};
