// 生成パターン共通のエラー型定義

use thiserror::Error;

/// ファクトリー・シングルトン共通のエラー型
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("未サポートの図形: '{key}'. 利用可能: {}", .available.join(", "))]
    UnknownShape { key: String, available: Vec<String> },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("初期化エラー: {component} - {source}")]
    InitializationError {
        component: String,
        #[source]
        source: anyhow::Error,
    },
}

impl PatternError {
    /// 未知の図形キーエラーの作成
    pub fn unknown_shape(key: impl Into<String>, available: Vec<String>) -> Self {
        Self::UnknownShape {
            key: key.into(),
            available,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 初期化エラーの作成
    pub fn initialization(component: impl Into<String>, source: anyhow::Error) -> Self {
        Self::InitializationError {
            component: component.into(),
            source,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 初期化エラーは次回アクセス時に再試行されるため回復可能扱い
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::UnknownShape { .. } => true,
            Self::ConfigurationError { .. } => false,
            Self::InitializationError { .. } => true,
        }
    }
}

/// 結果型のエイリアス
pub type PatternResult<T> = Result<T, PatternError>;
