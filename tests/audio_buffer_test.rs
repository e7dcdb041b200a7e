// Audio Buffer Conversion Tests
// これらのテストはホストマシンで実行されます

use bitsflow_conversions::config::AudioConfig;
use bitsflow_conversions::{convert_audio_buffer, AudioBuffer};

const SAMPLE_RATE: u32 = 7812;

#[test]
fn test_convert_endpoints_and_midpoint() {
    let heap = [0u8, 128, 255];
    let mut buffer = AudioBuffer::new(1, 3, SAMPLE_RATE);

    convert_audio_buffer(&heap, 0, &mut buffer);

    let channel = buffer.channel_data(0).unwrap();
    assert_eq!(channel[0], -1.0);
    assert_eq!(channel[1], ((128.0_f64 / 255.0) * 2.0 - 1.0) as f32);
    assert!((channel[1] - 0.00392).abs() < 1e-5);
    assert_eq!(channel[2], 1.0);
}

#[test]
fn test_convert_with_source_offset() {
    // オフセット 2 から 2 サンプル
    let heap = [9u8, 9, 255, 0, 9];
    let mut buffer = AudioBuffer::new(1, 2, SAMPLE_RATE);

    convert_audio_buffer(&heap, 2, &mut buffer);

    assert_eq!(buffer.channel_data(0).unwrap(), &[1.0, -1.0]);
}

#[test]
fn test_convert_only_touches_channel_zero() {
    let heap = [255u8; 4];
    let mut buffer = AudioBuffer::new(2, 4, SAMPLE_RATE);
    buffer.channel_data_mut(1).unwrap().copy_from_slice(&[0.25, 0.5, 0.75, 1.0]);

    convert_audio_buffer(&heap, 0, &mut buffer);

    assert_eq!(buffer.channel_data(0).unwrap(), &[1.0; 4]);
    assert_eq!(buffer.channel_data(1).unwrap(), &[0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_convert_overwrites_previous_samples() {
    let mut buffer = AudioBuffer::new(1, 2, SAMPLE_RATE);
    buffer.channel_data_mut(0).unwrap().copy_from_slice(&[0.5, 0.5]);

    convert_audio_buffer(&[0, 0], 0, &mut buffer);

    assert_eq!(buffer.channel_data(0).unwrap(), &[-1.0, -1.0]);
}

#[test]
fn test_zero_length_buffer_is_unchanged() {
    let mut buffer = AudioBuffer::new(1, 0, SAMPLE_RATE);
    let before = buffer.clone();

    // 空のヒープでも範囲外アクセスにならない
    let result = convert_audio_buffer(&[], 10, &mut buffer);

    assert_eq!(*result, before);
}

#[test]
fn test_returns_same_buffer() {
    let heap = [0u8, 255];
    let mut buffer = AudioBuffer::new(1, 2, SAMPLE_RATE);

    let returned = convert_audio_buffer(&heap, 0, &mut buffer);
    returned.channel_data_mut(0).unwrap()[0] = 0.0;

    assert_eq!(buffer.channel_data(0).unwrap(), &[0.0, 1.0]);
}

#[test]
fn test_chunk_buffer_from_config() -> anyhow::Result<()> {
    let config = AudioConfig::from_raw(SAMPLE_RATE, 32, 2)?;
    let mut buffer = AudioBuffer::from_config(&config);
    assert_eq!(buffer.number_of_channels(), 2);
    assert_eq!(buffer.length(), 32);
    assert_eq!(buffer.sample_rate(), SAMPLE_RATE);

    let heap: Vec<u8> = (0..=255).collect();
    convert_audio_buffer(&heap, 100, &mut buffer);

    let channel = buffer.channel_data(0).unwrap();
    assert_eq!(channel.len(), 32);
    assert!(channel.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}
