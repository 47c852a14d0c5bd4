//! SingletonHolder - 一度だけ初期化されるプロセス共有スロット
//!
//! 初期化は `OnceLock` で公開し、初期化後の読み取りはロックを取らない。
//! 生成関数の実行は `init_lock` で直列化するため、並行した初回アクセスでも
//! 生成関数が呼ばれるのは成功するまでの1回のみ。
//!
//! 失敗時の方針: 生成関数がエラーを返す、またはパニックした場合は未初期化のまま残り、
//! 次回の呼び出しで再試行される。壊れた値がキャッシュされることはない。

use std::convert::Infallible;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

pub struct SingletonHolder<T> {
    cell: OnceLock<T>,
    init_lock: Mutex<()>,
}

impl<T> SingletonHolder<T> {
    /// 未初期化のホルダーを作成（`static` で使用可能）
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// 初期化済みなら値を返す
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// 値を取得、未初期化なら `init` で生成する
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// 失敗しうる生成関数で値を取得
    ///
    /// エラーは呼び出し元へそのまま返され、ホルダーは未初期化のまま残る。
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        // 生成関数がパニックしてもセルは空のままなので、ポイズンは無視してよい
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        match init() {
            Ok(value) => Ok(self.cell.get_or_init(|| value)),
            Err(error) => {
                log::warn!(
                    "{} の初期化に失敗しました。次回アクセスで再試行します",
                    std::any::type_name::<T>()
                );
                Err(error)
            }
        }
    }
}

impl<T> Default for SingletonHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SingletonHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonHolder")
            .field("value", &self.cell.get())
            .finish()
    }
}
