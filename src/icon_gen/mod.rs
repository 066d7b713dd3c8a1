//! # 图标生成模块（icon_gen）
//!
//! ## 设计思路
//!
//! 该模块将“读取解码 → 去除透明 → 多尺寸缩放 → PNG 编码落盘”按职责拆分为多个子模块。
//!
//! - `generator`：编排整条处理流水线
//! - `codec`：解码 / 缩放 / 编码能力（`ImageCodec` trait 与默认实现）
//! - `flatten`：alpha 合成到白底
//! - `size_spec`：iOS AppIcon 固定尺寸表
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! app::run（存在性预检 + 控制台输出）
//!    ↓
//! generator.rs（统一编排 + 阶段耗时日志）
//!    ├─ codec.rs（decode）
//!    ├─ flatten.rs（白底合成）
//!    └─ codec.rs（resize + encode_png）× 19
//!    ↓
//! 返回 IconGenError / GenerationReport
//! ```

mod codec;
mod config;
mod error;
mod flatten;
mod generator;
mod size_spec;
mod source;

pub use codec::{FastImageCodec, ImageCodec};
pub use config::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, INPUT_PATH_ENV, IconGenConfig, OUTPUT_DIR_ENV,
};
pub use error::IconGenError;
pub use flatten::{composite_over_white, flatten_onto_white};
pub use generator::IconGenerator;
pub use size_spec::{APP_ICON_COUNT, APP_ICON_SPECS, IconSpec};
pub use source::{FlattenedImage, GenerationReport, SourceImage, WrittenIcon};
