use crate::factories::{get_shape_factory, ComponentFactory};
use crate::shapes::ShapeKind;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// 一覧出力用の図形情報
#[derive(Debug, Serialize)]
pub struct ShapeInfo {
    pub key: ShapeKind,
    pub type_name: &'static str,
    pub description: String,
}

pub fn shape_infos() -> Vec<ShapeInfo> {
    let factory = get_shape_factory();
    ShapeKind::all()
        .map(|kind| ShapeInfo {
            key: kind,
            type_name: kind.type_name(),
            description: factory
                .get_description(kind.as_ref())
                .unwrap_or_default(),
        })
        .collect()
}

/// 生成可能な図形を一覧表示
pub fn run_list(json: bool, out: &mut impl Write) -> Result<()> {
    let infos = shape_infos();

    if json {
        serde_json::to_writer_pretty(&mut *out, &infos).context("JSON出力に失敗しました")?;
        writeln!(out)?;
    } else {
        for info in &infos {
            writeln!(out, "{:<10} {}", info.key.as_ref(), info.description)?;
        }
    }
    Ok(())
}
