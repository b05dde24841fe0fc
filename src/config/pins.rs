//! 引脚配置定义
//!
//! 定义 LCD 键盘扩展板和四路负载使用的数字引脚
//!
//!  引脚 |   功能      | 说明
//! ------+-------------+------------------------------
//!   2   | LOAD1       | 负载 1 (继电器 / 开关输出)
//!   3   | LOAD2       | 负载 2
//!   4   | LCD D4      | 4 位模式数据线
//!   5   | LCD D5      |
//!   6   | LCD D6      |
//!   7   | LCD D7      |
//!   8   | LCD RS      | 寄存器选择
//!   9   | LCD E       | 使能 / 选通
//!  10   | LCD LED     | 背光控制
//!  11   | LOAD3       | 负载 3
//!  12   | LOAD4       | 负载 4
//!  14   | A0          | 按键电阻分压 (见 `button` 模块)

use thiserror::Error;

use crate::config::button::BUTTON_ADC_PIN;

// ----- LCD (HD44780, 4 位并口) -----
pub const LCD_DATA1: u8 = 4;
pub const LCD_DATA2: u8 = 5;
pub const LCD_DATA3: u8 = 6;
pub const LCD_DATA4: u8 = 7;
pub const LCD_RS: u8 = 8;
pub const LCD_E: u8 = 9;
pub const LCD_LED: u8 = 10;

// ----- 负载 -----
pub const LOAD1_PIN: u8 = 2;
pub const LOAD2_PIN: u8 = 3;
pub const LOAD3_PIN: u8 = 11;
pub const LOAD4_PIN: u8 = 12;

/// 最大的数字引脚编号 (A5)
pub const MAX_PIN: u8 = 19;

/// 板上可用作数字 I/O 的引脚 (D0-D13, A0-A5 即 14-19)
pub const VALID_PINS: core::ops::RangeInclusive<u8> = 0..=MAX_PIN;

/// LCD 引脚分配
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdPins {
    /// 数据线 D4..D7
    pub data: [u8; 4],

    /// 寄存器选择引脚
    pub rs: u8,

    /// 使能引脚
    pub e: u8,

    /// 背光引脚
    pub led: u8,
}

impl LcdPins {
    pub const fn as_array(&self) -> [u8; 7] {
        [
            self.data[0],
            self.data[1],
            self.data[2],
            self.data[3],
            self.rs,
            self.e,
            self.led,
        ]
    }
}

/// 负载引脚分配，按 LOAD1..LOAD4 顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadPins(pub [u8; 4]);

/// 引脚配置结构体
///
/// 包含扩展板和负载使用的全部引脚编号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub lcd: LcdPins,
    pub loads: LoadPins,
}

impl PinConfig {
    /// 所有引脚，LCD 在前，负载在后
    pub const fn all_pins(&self) -> [u8; 11] {
        let lcd = self.lcd.as_array();
        let loads = self.loads.0;
        [
            lcd[0], lcd[1], lcd[2], lcd[3], lcd[4], lcd[5], lcd[6], loads[0], loads[1], loads[2],
            loads[3],
        ]
    }
}

/// 默认引脚配置
pub const PIN_CONFIG: PinConfig = PinConfig {
    lcd: LcdPins {
        data: [LCD_DATA1, LCD_DATA2, LCD_DATA3, LCD_DATA4],
        rs: LCD_RS,
        e: LCD_E,
        led: LCD_LED,
    },
    loads: LoadPins([LOAD1_PIN, LOAD2_PIN, LOAD3_PIN, LOAD4_PIN]),
};

// 修改默认配置时，冲突在编译期就会暴露
const _: () = assert!(is_consistent(&PIN_CONFIG));

/// 四路负载
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Load {
    Load1,
    Load2,
    Load3,
    Load4,
}

impl Load {
    pub const ALL: [Load; 4] = [Load::Load1, Load::Load2, Load::Load3, Load::Load4];

    /// 从 0 开始的序号
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 负载对应的数字引脚
    pub const fn pin(self) -> u8 {
        PIN_CONFIG.loads.0[self.index()]
    }
}

impl core::fmt::Display for Load {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LOAD{}", self.index() + 1)
    }
}

/// 引脚配置错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("引脚 {0} 已被使用")]
    PinAlreadyUsed(u8),

    #[error("无效的引脚编号: {0}")]
    InvalidPin(u8),

    #[error("引脚 {0} 保留给按键模拟输入")]
    Reserved(u8),
}

/// 验证引脚配置的有效性
///
/// # 参数
/// * `config` - 要验证的引脚配置
///
/// # 返回
/// * `Ok(())` - 配置有效
/// * `Err(PinError)` - 第一个发现的问题
pub fn validate_config(config: &PinConfig) -> Result<(), PinError> {
    let pins = config.all_pins();

    for &pin in &pins {
        if !VALID_PINS.contains(&pin) {
            log::error!("引脚 {pin} 不是有效的数字引脚。有效范围: {VALID_PINS:?}");
            return Err(PinError::InvalidPin(pin));
        }
        if pin == BUTTON_ADC_PIN {
            log::error!("引脚 {pin} 与按键模拟输入冲突");
            return Err(PinError::Reserved(pin));
        }
    }

    // 检查是否有重复的引脚
    for i in 0..pins.len() {
        for j in (i + 1)..pins.len() {
            if pins[i] == pins[j] {
                log::error!("引脚 {} 被重复使用", pins[i]);
                return Err(PinError::PinAlreadyUsed(pins[i]));
            }
        }
    }

    Ok(())
}

/// `validate_config` 的编译期版本，只返回是否通过
pub const fn is_consistent(config: &PinConfig) -> bool {
    let pins = config.all_pins();
    let mut i = 0;
    while i < pins.len() {
        let pin = pins[i];
        if pin > MAX_PIN || pin == BUTTON_ADC_PIN {
            return false;
        }
        let mut j = i + 1;
        while j < pins.len() {
            if pins[j] == pin {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
