//! マイクの閾値・サウンドイベント変換

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::error::{ConversionResult, InvalidValue};
use crate::hal::{self, HalCode};

/// マイクの閾値種別 (set_threshold 用)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundThreshold {
    Low,
    High,
}

impl SoundThreshold {
    pub const ALL: [SoundThreshold; 2] = [SoundThreshold::Low, SoundThreshold::High];

    pub const fn code(self) -> HalCode {
        match self {
            SoundThreshold::Low => hal::MICROPHONE_SET_THRESHOLD_LOW,
            SoundThreshold::High => hal::MICROPHONE_SET_THRESHOLD_HIGH,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SoundThreshold::Low => "low",
            SoundThreshold::High => "high",
        }
    }

    pub fn from_code(code: HalCode) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }
}

impl fmt::Display for SoundThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SoundThreshold {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundThreshold::from_label(s).ok_or_else(|| {
            warn!("Unknown sound threshold label: '{}'", s);
            InvalidValue::Label(s.to_string())
        })
    }
}

impl TryFrom<HalCode> for SoundThreshold {
    type Error = InvalidValue;

    fn try_from(code: HalCode) -> Result<Self, Self::Error> {
        SoundThreshold::from_code(code).ok_or_else(|| {
            warn!("Unknown sound threshold code: {}", code);
            InvalidValue::Code(code)
        })
    }
}

/// レベル検出イベント
///
/// HALは閾値を下回ると `EVT_THRESHOLD_LOW` (quiet)、
/// 上回ると `EVT_THRESHOLD_HIGH` (loud) を通知します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    Quiet,
    Loud,
}

impl SoundEvent {
    pub const ALL: [SoundEvent; 2] = [SoundEvent::Quiet, SoundEvent::Loud];

    pub const fn code(self) -> HalCode {
        match self {
            SoundEvent::Quiet => hal::MICROPHONE_EVT_THRESHOLD_LOW,
            SoundEvent::Loud => hal::MICROPHONE_EVT_THRESHOLD_HIGH,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SoundEvent::Quiet => "quiet",
            SoundEvent::Loud => "loud",
        }
    }

    pub fn from_code(code: HalCode) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.label() == label)
    }
}

impl fmt::Display for SoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SoundEvent {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundEvent::from_label(s).ok_or_else(|| {
            warn!("Unknown sound event label: '{}'", s);
            InvalidValue::Label(s.to_string())
        })
    }
}

impl TryFrom<HalCode> for SoundEvent {
    type Error = InvalidValue;

    fn try_from(code: HalCode) -> Result<Self, Self::Error> {
        SoundEvent::from_code(code).ok_or_else(|| {
            warn!("Unknown sound event code: {}", code);
            InvalidValue::Code(code)
        })
    }
}

/// 閾値コードを `"low"` / `"high"` に変換します
///
/// # 引数
/// * `value` - `MICROPHONE_SET_THRESHOLD_LOW` または `MICROPHONE_SET_THRESHOLD_HIGH`
///
/// # 戻り値
/// * `ConversionResult<&'static str>` - ラベル、それ以外のコードは `InvalidValue::Code`
pub fn convert_sound_threshold_number_to_string(value: HalCode) -> ConversionResult<&'static str> {
    SoundThreshold::try_from(value).map(SoundThreshold::label)
}

/// `"low"` / `"high"` を閾値コードに変換します
pub fn convert_sound_threshold_string_to_number(value: &str) -> ConversionResult<HalCode> {
    value.parse::<SoundThreshold>().map(SoundThreshold::code)
}

/// レベル検出イベントのコードを `"quiet"` / `"loud"` に変換します
pub fn convert_sound_event_number_to_string(value: HalCode) -> ConversionResult<&'static str> {
    SoundEvent::try_from(value).map(SoundEvent::label)
}

/// `"quiet"` / `"loud"` をレベル検出イベントのコードに変換します
pub fn convert_sound_event_string_to_number(value: &str) -> ConversionResult<HalCode> {
    value.parse::<SoundEvent>().map(SoundEvent::code)
}
