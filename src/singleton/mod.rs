//! シングルトンモジュール - 一度だけ生成されるプロセス共有インスタンス
//!
//! 初期化戦略ごとに型を分けている:
//! - Eager: `static` 定数初期化（遅延なし）
//! - Guarded: `SingletonHolder`（`OnceLock`）による遅延初期化
//! - LazyHolder: `LazyLock` による遅延初期化
//!
//! いずれの型もコンストラクタは非公開で、`instance()` からのみ取得できる。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod eager;
pub mod holder;
pub mod lazy_holder;
pub mod single_object;

pub use eager::EagerObject;
pub use holder::SingletonHolder;
pub use lazy_holder::HolderObject;
pub use single_object::SingleObject;

/// シングルトンとして公開される型の共通インターフェース
pub trait SingletonObject: Sync + 'static {
    /// この型が使う初期化戦略
    const STRATEGY: InitStrategy;

    /// 共有インスタンスを取得
    fn instance() -> &'static Self;

    /// 実行時に走った生成処理の回数（定数初期化なら0）
    fn constructions() -> usize;

    /// 実行時に生成された時刻（定数初期化の場合はNone）
    fn created_at(&self) -> Option<DateTime<Utc>>;

    fn message(&self) -> &'static str {
        "hello world"
    }

    fn print(&self) {
        println!("{}", self.message());
    }

    /// インスタンスの状態レポート
    fn report() -> InstanceReport
    where
        Self: Sized,
    {
        let instance = Self::instance();
        InstanceReport {
            strategy: Self::STRATEGY,
            constructions: Self::constructions(),
            created_at: instance.created_at(),
            address: instance as *const Self as usize,
        }
    }
}

/// シングルトンの初期化戦略
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum InitStrategy {
    /// 静的初期化（読み込み時に確定）
    Eager,
    /// ワンタイム初期化プリミティブによる遅延初期化
    #[default]
    Guarded,
    /// 遅延ホルダー（LazyLock）
    LazyHolder,
}

impl InitStrategy {
    pub fn is_lazy(self) -> bool {
        !matches!(self, Self::Eager)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Eager => "静的初期化: 遅延なし・スレッド安全・実装は最も簡単",
            Self::Guarded => "OnceLockによる遅延初期化: 初回アクセスで1回だけ生成・失敗時は再試行",
            Self::LazyHolder => "LazyLockによる遅延ホルダー: 初回参照時に生成・スレッド安全",
        }
    }

    /// この戦略のインスタンスを取得し、そのアドレスを返す
    pub fn instance_address(self) -> usize {
        match self {
            Self::Eager => EagerObject::instance() as *const EagerObject as usize,
            Self::Guarded => SingleObject::instance() as *const SingleObject as usize,
            Self::LazyHolder => HolderObject::instance() as *const HolderObject as usize,
        }
    }

    pub fn report(self) -> InstanceReport {
        match self {
            Self::Eager => EagerObject::report(),
            Self::Guarded => SingleObject::report(),
            Self::LazyHolder => HolderObject::report(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Eager => EagerObject::instance().message(),
            Self::Guarded => SingleObject::instance().message(),
            Self::LazyHolder => HolderObject::instance().message(),
        }
    }

    /// この戦略のインスタンスで print() を呼ぶ
    pub fn print(self) {
        match self {
            Self::Eager => EagerObject::instance().print(),
            Self::Guarded => SingleObject::instance().print(),
            Self::LazyHolder => HolderObject::instance().print(),
        }
    }
}

/// シングルトンの状態レポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceReport {
    pub strategy: InitStrategy,
    pub constructions: usize,
    pub created_at: Option<DateTime<Utc>>,
    pub address: usize,
}
