use crate::hal::HalCode;

/// 変換エラー
///
/// 定義域外のコードまたはラベルが渡された場合に返されます。
/// 上位層の統合ミス（未対応のHALイベント追加など）を示すため、
/// 呼び出し側でデフォルト値に置き換えず、そのまま伝播させてください。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidValue {
    /// 未定義の数値コード
    #[error("Invalid value {0}")]
    Code(HalCode),
    /// 未定義のラベル
    #[error("Invalid value {0}")]
    Label(String),
}

/// 変換結果の型
pub type ConversionResult<T> = Result<T, InvalidValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_offending_value() {
        assert_eq!(InvalidValue::Code(-999).to_string(), "Invalid value -999");
        assert_eq!(
            InvalidValue::Label("bogus".to_string()).to_string(),
            "Invalid value bogus"
        );
    }
}
