pub mod accelerometer;
pub mod audio;
pub mod microphone;

pub use accelerometer::{
    convert_accelerometer_number_to_string, convert_accelerometer_string_to_number, Gesture,
};
pub use audio::{convert_audio_buffer, u8_sample_to_f32, AudioBuffer};
pub use microphone::{
    convert_sound_event_number_to_string, convert_sound_event_string_to_number,
    convert_sound_threshold_number_to_string, convert_sound_threshold_string_to_number,
    SoundEvent, SoundThreshold,
};
