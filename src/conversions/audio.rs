//! オーディオサンプル変換
//!
//! HALのヒープ上にある u8 サンプル列を -1.0..=1.0 の f32 に変換し、
//! 出力用 `AudioBuffer` のチャンネル0へ書き込みます。

use log::debug;

use crate::config::AudioConfig;

/// bitsflow のオーディオフレーム1つ分のサンプル数
pub const AUDIO_CHUNK_SIZE: usize = 32;

/// デフォルトのサンプリングレート (Hz)
pub const DEFAULT_SAMPLE_RATE: u32 = 7812;

/// マルチチャンネルの f32 サンプルバッファ
///
/// 全チャンネルが同じ長さを持ち、長さは生成後に変わりません。
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// 無音 (0.0) で埋めたバッファを作成します
    ///
    /// チャンネル数 0 は 1 として扱います。
    pub fn new(number_of_channels: usize, length: usize, sample_rate: u32) -> Self {
        let number_of_channels = number_of_channels.max(1);
        Self {
            channels: vec![vec![0.0; length]; number_of_channels],
            sample_rate,
        }
    }

    /// 設定値からチャンク1つ分のバッファを作成します
    pub fn from_config(config: &AudioConfig) -> Self {
        Self::new(config.channels, config.chunk_size, config.sample_rate)
    }

    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    /// 1チャンネルあたりのサンプル数
    pub fn length(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// 再生時間（秒）
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.length() as f64 / f64::from(self.sample_rate)
    }

    pub fn channel_data(&self, channel: usize) -> Option<&[f32]> {
        self.channels.get(channel).map(Vec::as_slice)
    }

    pub fn channel_data_mut(&mut self, channel: usize) -> Option<&mut [f32]> {
        self.channels.get_mut(channel).map(Vec::as_mut_slice)
    }
}

/// u8 サンプルを -1.0..=1.0 に変換します
///
/// `(b / 255) * 2 - 1` を f64 で計算してから f32 に丸めます。
/// 128 は 0.0 ではなく約 0.00392 になります（式どおりの値を維持すること）。
pub fn u8_sample_to_f32(sample: u8) -> f32 {
    ((f64::from(sample) / 255.0) * 2.0 - 1.0) as f32
}

/// `heap[source..]` のサンプルを `target` のチャンネル0に書き込みます
///
/// 変換するサンプル数はチャンネル0の長さで決まります。
/// チャンネル1以降は変更しません。
///
/// # 引数
/// * `heap` - HALのオーディオヒープ
/// * `source` - 読み取り開始オフセット
/// * `target` - 書き込み先バッファ
///
/// # 戻り値
/// * `&mut AudioBuffer` - 書き込み後の `target`
///
/// # Panics
/// `source + target.length()` が `heap.len()` を超える場合（呼び出し側の契約違反）。
pub fn convert_audio_buffer<'a>(
    heap: &[u8],
    source: usize,
    target: &'a mut AudioBuffer,
) -> &'a mut AudioBuffer {
    let length = target.length();
    debug!("Converting {} audio samples from heap offset {}", length, source);

    if length == 0 {
        return target;
    }

    let samples = &heap[source..source + length];
    if let Some(channel) = target.channel_data_mut(0) {
        for (out, &sample) in channel.iter_mut().zip(samples) {
            *out = u8_sample_to_f32(sample);
        }
    }
    target
}
