use serde::{Deserialize, Serialize};

use self::capture::CaptureConfig;
use self::ocr::OcrConfig;
use self::ui::UiConfig;

pub mod capture;
pub mod ocr;
pub mod ui;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub capture: CaptureConfig,
    pub ocr: OcrConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            capture: CaptureConfig::new(),
            ocr: OcrConfig::new(),
            ui: UiConfig::new(),
        }
    }
}
