//! 引脚管理器
//!
//! 安全地管理引脚的所有权，防止同一引脚被两个模块同时使用

use std::collections::HashSet;

use crate::config::pins::{validate_config, Load, PinConfig, PinError, VALID_PINS};

/// 引脚来源
///
/// 将引脚编号转换为具体 HAL 的引脚对象。编号不存在时返回 `None`。
pub trait PinSource {
    type Pin;

    fn pin(&mut self, number: u8) -> Option<Self::Pin>;
}

/// LCD 的全部引脚对象
#[derive(Debug)]
pub struct LcdLines<P> {
    /// 数据线 D4..D7
    pub data: [P; 4],
    pub rs: P,
    pub e: P,
    pub led: P,
}

/// 已配置的引脚集合
///
/// 所有权已从管理器转移
#[derive(Debug)]
pub struct ConfiguredPins<S: PinSource> {
    /// 引脚来源，可继续用于获取其他引脚
    pub source: S,

    /// LCD 引脚
    pub lcd: LcdLines<S::Pin>,

    /// 负载引脚，按 `Load::index()` 排列
    pub loads: [S::Pin; 4],
}

impl<S: PinSource> ConfiguredPins<S> {
    pub fn load(&self, load: Load) -> &S::Pin {
        &self.loads[load.index()]
    }

    pub fn load_mut(&mut self, load: Load) -> &mut S::Pin {
        &mut self.loads[load.index()]
    }
}

/// 引脚管理器
///
/// 跟踪已使用的引脚编号，每个编号只能取出一次。
pub struct PinManager<S: PinSource> {
    source: S,
    used_pins: HashSet<u8>,
}

impl<S: PinSource> PinManager<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            used_pins: HashSet::new(),
        }
    }

    /// 引脚是否已被取出
    pub fn is_used(&self, pin_num: u8) -> bool {
        self.used_pins.contains(&pin_num)
    }

    /// 根据引脚配置获取所有引脚
    ///
    /// # 参数
    /// * `config` - 引脚配置
    ///
    /// # 返回
    /// * `Ok(ConfiguredPins)` - 引脚集合和剩余的引脚来源
    /// * `Err(PinError)` - 配置失败
    pub fn configure(mut self, config: &PinConfig) -> Result<ConfiguredPins<S>, PinError> {
        // 验证配置
        validate_config(config)?;

        let lcd = LcdLines {
            data: [
                self.take_pin(config.lcd.data[0])?,
                self.take_pin(config.lcd.data[1])?,
                self.take_pin(config.lcd.data[2])?,
                self.take_pin(config.lcd.data[3])?,
            ],
            rs: self.take_pin(config.lcd.rs)?,
            e: self.take_pin(config.lcd.e)?,
            led: self.take_pin(config.lcd.led)?,
        };

        let [l1, l2, l3, l4] = config.loads.0;
        let loads = [
            self.take_pin(l1)?,
            self.take_pin(l2)?,
            self.take_pin(l3)?,
            self.take_pin(l4)?,
        ];

        log::info!("已配置 {} 个引脚", self.used_pins.len());

        Ok(ConfiguredPins {
            source: self.source,
            lcd,
            loads,
        })
    }

    /// 获取单个引脚
    ///
    /// # 返回
    /// * `Ok(S::Pin)` - 引脚获取成功
    /// * `Err(PinError)` - 引脚已被使用或无效
    pub fn take_pin(&mut self, pin_num: u8) -> Result<S::Pin, PinError> {
        if self.used_pins.contains(&pin_num) {
            return Err(PinError::PinAlreadyUsed(pin_num));
        }
        if !VALID_PINS.contains(&pin_num) {
            return Err(PinError::InvalidPin(pin_num));
        }

        let pin = self
            .source
            .pin(pin_num)
            .ok_or(PinError::InvalidPin(pin_num))?;

        // 标记引脚为已使用
        self.used_pins.insert(pin_num);
        log::debug!("取出引脚 {pin_num}");
        Ok(pin)
    }

    /// 归还引脚来源
    pub fn release(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::pins::{LCD_E, LCD_RS, LOAD1_PIN, LOAD4_PIN, PIN_CONFIG};

    /// 只记录编号的假引脚
    #[derive(Debug, Default)]
    struct FakeBoard {
        handed_out: Vec<u8>,
    }

    impl PinSource for FakeBoard {
        type Pin = u8;

        fn pin(&mut self, number: u8) -> Option<u8> {
            // 模拟没有引出 D13 的板子
            if number == 13 {
                return None;
            }
            self.handed_out.push(number);
            Some(number)
        }
    }

    #[test]
    fn test_configure_default() {
        let pins = PinManager::new(FakeBoard::default())
            .configure(&PIN_CONFIG)
            .unwrap();

        assert_eq!(pins.lcd.data, [4, 5, 6, 7]);
        assert_eq!(pins.lcd.rs, LCD_RS);
        assert_eq!(pins.lcd.e, LCD_E);
        assert_eq!(*pins.load(Load::Load1), LOAD1_PIN);
        assert_eq!(*pins.load(Load::Load4), LOAD4_PIN);
        assert_eq!(pins.source.handed_out.len(), 11);
    }

    #[test]
    fn test_take_pin_twice() {
        let mut manager = PinManager::new(FakeBoard::default());

        assert_eq!(manager.take_pin(3), Ok(3));
        assert!(manager.is_used(3));
        assert_eq!(manager.take_pin(3), Err(PinError::PinAlreadyUsed(3)));
    }

    #[test]
    fn test_take_invalid_pin() {
        let mut manager = PinManager::new(FakeBoard::default());

        assert_eq!(manager.take_pin(42), Err(PinError::InvalidPin(42)));
        assert_eq!(manager.take_pin(13), Err(PinError::InvalidPin(13)));
        assert!(!manager.is_used(13));
        assert!(manager.release().handed_out.is_empty());
    }

    #[test]
    fn test_configure_after_manual_take() {
        let mut manager = PinManager::new(FakeBoard::default());
        manager.take_pin(LCD_E).unwrap();

        let err = manager.configure(&PIN_CONFIG).unwrap_err();
        assert_eq!(err, PinError::PinAlreadyUsed(LCD_E));
    }

    #[test]
    fn test_configure_rejects_invalid_config() {
        let mut config = PIN_CONFIG;
        config.loads.0[0] = config.loads.0[1];

        let result = PinManager::new(FakeBoard::default()).configure(&config);
        assert!(matches!(result, Err(PinError::PinAlreadyUsed(3))));
    }

    #[test]
    fn test_load_mut() {
        let mut pins = PinManager::new(FakeBoard::default())
            .configure(&PIN_CONFIG)
            .unwrap();

        *pins.load_mut(Load::Load2) = 99;
        assert_eq!(pins.loads[1], 99);
    }
}
