//! bitsflow HAL 定数
//!
//! HAL側で定義されている数値コード。値はHALヘッダと一致させること。

/// HALが扱う数値コードの型
pub type HalCode = i32;

// 加速度センサーのジェスチャー/レンジイベント
pub const ACCELEROMETER_EVT_NONE: HalCode = 0;
pub const ACCELEROMETER_EVT_TILT_UP: HalCode = 1;
pub const ACCELEROMETER_EVT_TILT_DOWN: HalCode = 2;
pub const ACCELEROMETER_EVT_TILT_LEFT: HalCode = 3;
pub const ACCELEROMETER_EVT_TILT_RIGHT: HalCode = 4;
pub const ACCELEROMETER_EVT_FACE_UP: HalCode = 5;
pub const ACCELEROMETER_EVT_FACE_DOWN: HalCode = 6;
pub const ACCELEROMETER_EVT_FREEFALL: HalCode = 7;
pub const ACCELEROMETER_EVT_3G: HalCode = 8;
pub const ACCELEROMETER_EVT_6G: HalCode = 9;
pub const ACCELEROMETER_EVT_8G: HalCode = 10;
pub const ACCELEROMETER_EVT_SHAKE: HalCode = 11;
pub const ACCELEROMETER_EVT_2G: HalCode = 12;

/// マイクのレベル検出イベント (level detector callback に渡される値)
pub const MICROPHONE_EVT_THRESHOLD_LOW: HalCode = 1;
pub const MICROPHONE_EVT_THRESHOLD_HIGH: HalCode = 2;

/// マイクの閾値種別 (set_threshold に渡す値)
pub const MICROPHONE_SET_THRESHOLD_LOW: HalCode = 0;
pub const MICROPHONE_SET_THRESHOLD_HIGH: HalCode = 1;
