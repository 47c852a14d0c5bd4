use anyhow::Result;
use clap::Parser;
use creator_patterns::{
    cli::{run_factory, run_list, run_singleton, Cli, Commands},
    DemoConfig, PatternError, ShapeFactory, SingleObject, SingletonObject,
};
use log::LevelFilter;
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            // 2つのデモを続けて実行
            run_factory(&DemoConfig::default(), &mut out)?;
            out.flush()?;
            SingleObject::instance().print();
        }
        Some(Commands::Factory { shapes }) => {
            let config = DemoConfig::new().with_shapes(shapes);
            let report = run_factory(&config, &mut out)?;
            log::info!("{}個の図形を描画しました", report.drawn);

            if !report.is_complete() {
                let available = ShapeFactory::new().available_shapes();
                return Err(PatternError::unknown_shape(report.unknown.join(", "), available).into());
            }
        }
        Some(Commands::Singleton { strategy, threads }) => {
            let mut config = DemoConfig::new().with_strategy(strategy);
            if let Some(threads) = threads {
                config = config.with_threads(threads);
            }
            run_singleton(&config, &mut out)?;
        }
        Some(Commands::List { json }) => {
            run_list(json, &mut out)?;
        }
    }

    Ok(())
}

/// ログ出力の初期化（stderrへ出力、RUST_LOG で上書き可能）
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
