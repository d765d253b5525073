//! 输入文件格式

pub mod dotenv;
