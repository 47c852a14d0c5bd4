use crate::core::DemoConfig;
use crate::factories::{get_shape_factory, ComponentFactory};
use crate::shapes::draw_all;
use anyhow::{Context, Result};
use std::io::Write;

/// factoryコマンドの実行結果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FactoryReport {
    pub drawn: usize,
    pub unknown: Vec<String>,
}

impl FactoryReport {
    pub fn is_complete(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// 設定された図形キーを順に生成して描画する
///
/// 未知のキーは描画をスキップしてレポートに記録する。
pub fn run_factory(config: &DemoConfig, out: &mut impl Write) -> Result<FactoryReport> {
    config.validate()?;

    let factory = get_shape_factory();
    let mut shapes = Vec::with_capacity(config.shapes().len());
    let mut unknown = Vec::new();

    for key in config.shapes() {
        match factory.try_create(key) {
            Ok(shape) => shapes.push(shape),
            Err(error) => {
                log::debug!("{error}");
                unknown.push(key.clone());
            }
        }
    }

    draw_all(&shapes, out).context("図形の描画に失敗しました")?;

    Ok(FactoryReport {
        drawn: shapes.len(),
        unknown,
    })
}
