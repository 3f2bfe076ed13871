//! 命令行输出

mod printer;

pub use printer::{GraphPrinter, PrintMode};
