// bitsflow HAL の値とアプリケーションAPIの値を相互変換するモジュール群
pub mod config;
pub mod conversions;
pub mod error;
pub mod hal;

pub use conversions::{
    convert_accelerometer_number_to_string, convert_accelerometer_string_to_number,
    convert_audio_buffer, convert_sound_event_number_to_string,
    convert_sound_event_string_to_number, convert_sound_threshold_number_to_string,
    convert_sound_threshold_string_to_number, AudioBuffer, Gesture, SoundEvent, SoundThreshold,
};
pub use error::{ConversionResult, InvalidValue};
pub use hal::HalCode;
