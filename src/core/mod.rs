//! 核心流程：解析 -> 键名转换 -> 渲染 -> 写出

pub mod generator;
pub mod module;
pub mod naming;

pub use generator::Generator;
pub use module::GeneratedModule;
pub use naming::to_camel_case;
