//! 加速度センサーのジェスチャー変換
//!
//! HALのジェスチャーコードとアプリケーションAPIのラベル文字列を相互変換します。

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::error::{ConversionResult, InvalidValue};
use crate::hal::{self, HalCode};

/// 加速度センサーのジェスチャー/レンジイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    None,
    Up,
    Down,
    Left,
    Right,
    FaceUp,
    FaceDown,
    Freefall,
    TwoG,
    ThreeG,
    SixG,
    EightG,
    Shake,
}

impl Gesture {
    /// 全ジェスチャー。コード⇔ラベルの両方向の検索はこの一覧を走査する
    pub const ALL: [Gesture; 13] = [
        Gesture::None,
        Gesture::Up,
        Gesture::Down,
        Gesture::Left,
        Gesture::Right,
        Gesture::FaceUp,
        Gesture::FaceDown,
        Gesture::Freefall,
        Gesture::TwoG,
        Gesture::ThreeG,
        Gesture::SixG,
        Gesture::EightG,
        Gesture::Shake,
    ];

    /// HALのイベントコード
    pub const fn code(self) -> HalCode {
        match self {
            Gesture::None => hal::ACCELEROMETER_EVT_NONE,
            Gesture::Up => hal::ACCELEROMETER_EVT_TILT_UP,
            Gesture::Down => hal::ACCELEROMETER_EVT_TILT_DOWN,
            Gesture::Left => hal::ACCELEROMETER_EVT_TILT_LEFT,
            Gesture::Right => hal::ACCELEROMETER_EVT_TILT_RIGHT,
            Gesture::FaceUp => hal::ACCELEROMETER_EVT_FACE_UP,
            Gesture::FaceDown => hal::ACCELEROMETER_EVT_FACE_DOWN,
            Gesture::Freefall => hal::ACCELEROMETER_EVT_FREEFALL,
            Gesture::TwoG => hal::ACCELEROMETER_EVT_2G,
            Gesture::ThreeG => hal::ACCELEROMETER_EVT_3G,
            Gesture::SixG => hal::ACCELEROMETER_EVT_6G,
            Gesture::EightG => hal::ACCELEROMETER_EVT_8G,
            Gesture::Shake => hal::ACCELEROMETER_EVT_SHAKE,
        }
    }

    /// APIで使うラベル
    pub const fn label(self) -> &'static str {
        match self {
            Gesture::None => "none",
            Gesture::Up => "up",
            Gesture::Down => "down",
            Gesture::Left => "left",
            Gesture::Right => "right",
            Gesture::FaceUp => "face up",
            Gesture::FaceDown => "face down",
            Gesture::Freefall => "freefall",
            Gesture::TwoG => "2g",
            Gesture::ThreeG => "3g",
            Gesture::SixG => "6g",
            Gesture::EightG => "8g",
            Gesture::Shake => "shake",
        }
    }

    pub fn from_code(code: HalCode) -> Option<Self> {
        Self::ALL.iter().copied().find(|gesture| gesture.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|gesture| gesture.label() == label)
    }

    /// HALのジェスチャーコールバックで通知されうるイベントかどうか
    ///
    /// `none` 以外、すなわち `(EVT_NONE, EVT_2G]` の範囲のコードが対象です。
    pub fn is_event(self) -> bool {
        let code = self.code();
        code > hal::ACCELEROMETER_EVT_NONE && code <= hal::ACCELEROMETER_EVT_2G
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gesture {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gesture::from_label(s).ok_or_else(|| {
            warn!("Unknown accelerometer label: '{}'", s);
            InvalidValue::Label(s.to_string())
        })
    }
}

impl TryFrom<HalCode> for Gesture {
    type Error = InvalidValue;

    fn try_from(code: HalCode) -> Result<Self, Self::Error> {
        Gesture::from_code(code).ok_or_else(|| {
            warn!("Unknown accelerometer event code: {}", code);
            InvalidValue::Code(code)
        })
    }
}

/// ラベル文字列をHALのイベントコードに変換します
///
/// # 引数
/// * `value` - `"none"`, `"up"`, `"face down"`, `"2g"` などのラベル
///
/// # 戻り値
/// * `ConversionResult<HalCode>` - 対応するコード、未定義ラベルの場合は `InvalidValue::Label`
pub fn convert_accelerometer_string_to_number(value: &str) -> ConversionResult<HalCode> {
    value.parse::<Gesture>().map(Gesture::code)
}

/// HALのイベントコードをラベル文字列に変換します
///
/// # 引数
/// * `value` - HALのイベントコード
///
/// # 戻り値
/// * `ConversionResult<&'static str>` - 対応するラベル、未定義コードの場合は `InvalidValue::Code`
pub fn convert_accelerometer_number_to_string(value: HalCode) -> ConversionResult<&'static str> {
    Gesture::try_from(value).map(Gesture::label)
}
