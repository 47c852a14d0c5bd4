use crate::core::{DemoConfig, PatternError};
use crate::singleton::{InitStrategy, InstanceReport};
use anyhow::{anyhow, ensure, Result};
use std::io::Write;
use std::sync::{Condvar, Mutex, PoisonError};
use std::thread;

/// singletonコマンドの実行結果
#[derive(Debug)]
pub struct SingletonReport {
    pub instance: InstanceReport,
    pub threads: usize,
    pub identical: bool,
}

/// 複数スレッドで初回アクセスを競わせ、全員が同じインスタンスを得たか確認する
pub fn run_singleton(config: &DemoConfig, out: &mut impl Write) -> Result<SingletonReport> {
    config.validate()?;

    let strategy = config.strategy();
    let addresses = race_first_access(strategy, config.threads())?;
    let instance = strategy.report();
    let identical = addresses.iter().all(|&address| address == instance.address);

    ensure!(
        identical,
        "{strategy} のインスタンスがスレッド間で一致しません"
    );

    writeln!(out, "戦略: {strategy} ({})", strategy.description())?;
    writeln!(out, "スレッド数: {}", config.threads())?;
    writeln!(out, "生成回数: {}", instance.constructions)?;
    if let Some(created_at) = instance.created_at {
        writeln!(out, "生成時刻: {}", created_at.to_rfc3339())?;
    }
    writeln!(out, "同一インスタンス: {identical}")?;
    writeln!(out, "{}", strategy.message())?;

    Ok(SingletonReport {
        instance,
        threads: config.threads(),
        identical,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum GateState {
    #[default]
    Closed,
    Open,
    Cancelled,
}

/// 全スレッドの起動がそろうまで待たせるゲート
///
/// 途中でスレッドを起動できなかった場合は取り消し、待機中のスレッドを解放する。
#[derive(Debug, Default)]
struct StartGate {
    state: Mutex<GateState>,
    signal: Condvar,
}

impl StartGate {
    /// ゲートが開くか取り消されるまで待つ（開いたらtrue）
    fn wait(&self) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state = self
            .signal
            .wait_while(state, |state| *state == GateState::Closed)
            .unwrap_or_else(PoisonError::into_inner);
        *state == GateState::Open
    }

    fn release(&self, next: GateState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
        self.signal.notify_all();
    }
}

fn race_first_access(strategy: InitStrategy, threads: usize) -> Result<Vec<usize>> {
    race_with_builder(strategy, threads, |index| {
        thread::Builder::new().name(format!("singleton-race-{index}"))
    })
}

fn race_with_builder<B>(strategy: InitStrategy, threads: usize, builder: B) -> Result<Vec<usize>>
where
    B: Fn(usize) -> thread::Builder,
{
    let gate = StartGate::default();

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);

        for index in 0..threads {
            let spawned = builder(index).spawn_scoped(scope, || {
                gate.wait().then(|| strategy.instance_address())
            });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(error) => {
                    // 起動済みのスレッドを解放してからスコープを抜ける
                    gate.release(GateState::Cancelled);
                    return Err(anyhow::Error::from(PatternError::initialization(
                        strategy.to_string(),
                        anyhow::Error::new(error)
                            .context(format!("{index}番目のスレッドを起動できません")),
                    )));
                }
            }
        }

        gate.release(GateState::Open);

        handles
            .into_iter()
            .map(|handle| {
                handle.join().ok().flatten().ok_or_else(|| {
                    anyhow::Error::from(PatternError::initialization(
                        strategy.to_string(),
                        anyhow!("取得スレッドがパニックしました"),
                    ))
                })
            })
            .collect()
    })
}
