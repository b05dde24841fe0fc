//! 按键定义
//!
//! LCD 键盘扩展板的五个按键通过电阻分压接在模拟通道 0 上，
//! 一次模拟读数只能对应一个按键状态。枚举值的顺序即分压电压从低到高的顺序，
//! `Button::None` 为未按下时的默认值。
//!
//! 具体阈值由读取按键的模块决定，这里只提供按顺序匹配的 `ButtonLadder`。

use thiserror::Error;

/// 按键所在的模拟通道
pub const BUTTON_ADC_CHANNEL: u8 = 0;

/// 模拟通道 0 (A0) 作为数字引脚时的编号
pub const BUTTON_ADC_PIN: u8 = 14;

pub const BTN_RIGHT: u8 = Button::Right.ordinal();
pub const BTN_UP: u8 = Button::Up.ordinal();
pub const BTN_DOWN: u8 = Button::Down.ordinal();
pub const BTN_LEFT: u8 = Button::Left.ordinal();
pub const BTN_SELECT: u8 = Button::Select.ordinal();
pub const BTN_NONE: u8 = Button::None.ordinal();

/// 按键状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Button {
    Right = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Select = 4,
    #[default]
    None = 5,
}

impl Button {
    /// 按序号升序排列的全部状态
    pub const ALL: [Button; 6] = [
        Button::Right,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Select,
        Button::None,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Button::Right => "RIGHT",
            Button::Up => "UP",
            Button::Down => "DOWN",
            Button::Left => "LEFT",
            Button::Select => "SELECT",
            Button::None => "NONE",
        }
    }

    /// 是否有按键按下
    pub const fn is_pressed(self) -> bool {
        !matches!(self, Button::None)
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// 按键错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ButtonError {
    #[error("无效的按键序号: {0}")]
    InvalidOrdinal(u8),
}

impl TryFrom<u8> for Button {
    type Error = ButtonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Button::ALL
            .get(value as usize)
            .copied()
            .ok_or(ButtonError::InvalidOrdinal(value))
    }
}

impl From<Button> for u8 {
    fn from(button: Button) -> Self {
        button.ordinal()
    }
}

/// 阈值表错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("阈值 {index} 不大于前一个阈值")]
    NotAscending { index: usize },
}

/// 电阻分压阈值表
///
/// 保存 RIGHT、UP、DOWN、LEFT、SELECT 各自的读数上限 (含)，
/// 必须严格递增。超过 SELECT 上限的读数视为未按下。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLadder {
    upper_bounds: [u16; 5],
}

impl ButtonLadder {
    /// 创建阈值表
    ///
    /// # 参数
    /// * `upper_bounds` - 按键序号顺序的读数上限
    ///
    /// # 返回
    /// * `Ok(Self)` - 阈值严格递增
    /// * `Err(LadderError)` - 第一个不递增的位置
    pub fn new(upper_bounds: [u16; 5]) -> Result<Self, LadderError> {
        if let Some(index) =
            (1..upper_bounds.len()).find(|&i| upper_bounds[i] <= upper_bounds[i - 1])
        {
            return Err(LadderError::NotAscending { index });
        }
        Ok(Self { upper_bounds })
    }

    pub fn upper_bounds(&self) -> &[u16; 5] {
        &self.upper_bounds
    }

    /// 将一次模拟读数转换为按键状态
    pub fn decode(&self, sample: u16) -> Button {
        self.upper_bounds
            .iter()
            .zip(Button::ALL)
            .find(|&(&bound, _)| sample <= bound)
            .map_or(Button::None, |(_, button)| button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 仅用于测试的阈值
    const BOUNDS: [u16; 5] = [50, 200, 400, 600, 800];

    #[test]
    fn test_ordinals() {
        let ordinals: Vec<u8> = Button::ALL.iter().map(|b| b.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(BTN_RIGHT, 0);
        assert_eq!(BTN_NONE, 5);
        assert_eq!([BTN_UP, BTN_DOWN, BTN_LEFT, BTN_SELECT], [1, 2, 3, 4]);
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Button::default(), Button::None);
        assert!(!Button::None.is_pressed());
        assert!(Button::ALL[..5].iter().all(|b| b.is_pressed()));
    }

    #[test]
    fn test_try_from() {
        for button in Button::ALL {
            assert_eq!(Button::try_from(button.ordinal()), Ok(button));
            assert_eq!(u8::from(button), button.ordinal());
        }
        assert_eq!(Button::try_from(6), Err(ButtonError::InvalidOrdinal(6)));
    }

    #[test]
    fn test_ordering_follows_ordinal() {
        let mut sorted = Button::ALL;
        sorted.sort();
        assert_eq!(sorted, Button::ALL);
        assert!(Button::Right < Button::None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Button::Select.to_string(), "SELECT");
        assert_eq!(format!("{}", Button::None), "NONE");
    }

    #[test]
    fn test_ladder_decode() {
        let ladder = ButtonLadder::new(BOUNDS).unwrap();

        assert_eq!(ladder.decode(0), Button::Right);
        assert_eq!(ladder.decode(50), Button::Right);
        assert_eq!(ladder.decode(51), Button::Up);
        assert_eq!(ladder.decode(300), Button::Down);
        assert_eq!(ladder.decode(600), Button::Left);
        assert_eq!(ladder.decode(700), Button::Select);
        assert_eq!(ladder.decode(801), Button::None);
        assert_eq!(ladder.decode(u16::MAX), Button::None);
    }

    #[test]
    fn test_ladder_decode_is_monotonic() {
        let ladder = ButtonLadder::new(BOUNDS).unwrap();
        let mut last = Button::Right;
        for sample in 0..=1023 {
            let button = ladder.decode(sample);
            assert!(button >= last);
            last = button;
        }
        assert_eq!(last, Button::None);
    }

    #[test]
    fn test_ladder_rejects_unordered_bounds() {
        assert_eq!(
            ButtonLadder::new([50, 200, 200, 600, 800]),
            Err(LadderError::NotAscending { index: 2 })
        );
        assert_eq!(
            ButtonLadder::new([900, 200, 400, 600, 800]),
            Err(LadderError::NotAscending { index: 1 })
        );
    }
}
