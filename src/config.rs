use log::debug;

use crate::conversions::audio::{AUDIO_CHUNK_SIZE, DEFAULT_SAMPLE_RATE};

/// オーディオ変換設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を保持します。
#[toml_cfg::toml_config]
pub struct Config {
    #[default(7812)]
    audio_sample_rate: u32,

    #[default(32)] // bitsflow のオーディオフレーム1つ分
    audio_chunk_size: u32,

    #[default(1)]
    audio_channels: u32,
}

const MAX_SAMPLE_RATE: u32 = 192_000;
const MAX_CHUNK_SIZE: u32 = 4096;
const MAX_CHANNELS: u32 = 32;

/// 設定エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("audio_sample_rate の値が無効です (1-192000): {0}")]
    InvalidSampleRate(u32),
    #[error("audio_chunk_size の値が無効です (1-4096): {0}")]
    InvalidChunkSize(u32),
    #[error("audio_channels の値が無効です (1-32): {0}")]
    InvalidChannels(u32),
}

pub fn validate_sample_rate(value: u32) -> Result<u32, ConfigError> {
    if (1..=MAX_SAMPLE_RATE).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidSampleRate(value))
    }
}

pub fn validate_chunk_size(value: u32) -> Result<usize, ConfigError> {
    if (1..=MAX_CHUNK_SIZE).contains(&value) {
        Ok(value as usize)
    } else {
        Err(ConfigError::InvalidChunkSize(value))
    }
}

pub fn validate_channels(value: u32) -> Result<usize, ConfigError> {
    if (1..=MAX_CHANNELS).contains(&value) {
        Ok(value as usize)
    } else {
        Err(ConfigError::InvalidChannels(value))
    }
}

/// 検証済みのオーディオ設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioConfig {
    /// サンプリングレート (Hz)
    pub sample_rate: u32,
    /// 1チャンクあたりのサンプル数
    pub chunk_size: usize,
    /// 出力チャンネル数
    pub channels: usize,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            chunk_size: AUDIO_CHUNK_SIZE,
            channels: 1,
        }
    }
}

impl AudioConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        let config = CONFIG;
        Self::from_raw(config.audio_sample_rate, config.audio_chunk_size, config.audio_channels)
    }

    /// 生の設定値を検証して `AudioConfig` を作成します
    pub fn from_raw(sample_rate: u32, chunk_size: u32, channels: u32) -> Result<Self, ConfigError> {
        let config = Self {
            sample_rate: validate_sample_rate(sample_rate)?,
            chunk_size: validate_chunk_size(chunk_size)?,
            channels: validate_channels(channels)?,
        };
        debug!(
            "Audio config: {} Hz, {} samples/chunk, {} channel(s)",
            config.sample_rate, config.chunk_size, config.channels
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_uses_cfg_toml_values() {
        let config = AudioConfig::load().unwrap();
        assert_eq!(config, AudioConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            AudioConfig::from_raw(0, 32, 1),
            Err(ConfigError::InvalidSampleRate(0))
        );
        assert_eq!(
            AudioConfig::from_raw(7812, 5000, 1),
            Err(ConfigError::InvalidChunkSize(5000))
        );
        assert_eq!(
            AudioConfig::from_raw(7812, 32, 0),
            Err(ConfigError::InvalidChannels(0))
        );
    }

    #[test]
    fn test_error_message_includes_range() {
        let message = ConfigError::InvalidChannels(64).to_string();
        assert!(message.contains("1-32"));
        assert!(message.contains("64"));
    }
}
