use load_panel::config::{button, debug, pins};
use load_panel::{Button, Load, PIN_CONFIG};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter(None, debug::log_level())
        .init();

    log::info!("引脚分配 (DEBUG = {})", debug::DEBUG);

    let lcd = PIN_CONFIG.lcd;
    for (i, pin) in lcd.data.iter().enumerate() {
        println!("LCD_DATA{:<2}  D{pin}", i + 1);
    }
    println!("LCD_RS      D{}", lcd.rs);
    println!("LCD_E       D{}", lcd.e);
    println!("LCD_LED     D{}", lcd.led);

    for load in Load::ALL {
        println!("{load}_PIN   D{}", load.pin());
    }

    println!("按键: 模拟通道 A{}", button::BUTTON_ADC_CHANNEL);
    for b in Button::ALL {
        log::debug!("btn{b} = {}", b.ordinal());
    }

    pins::validate_config(&PIN_CONFIG)?;
    log::info!("引脚配置有效");

    Ok(())
}
