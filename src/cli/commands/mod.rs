// CLIコマンドの実装
// 出力先は呼び出し側から渡され、テストではバッファに書き込む

pub mod factory;
pub mod list;
pub mod singleton;

pub use factory::{run_factory, FactoryReport};
pub use list::{run_list, shape_infos, ShapeInfo};
pub use singleton::{run_singleton, SingletonReport};
