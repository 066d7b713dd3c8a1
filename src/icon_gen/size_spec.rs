//! # 图标尺寸表
//!
//! iOS `AppIcon.appiconset` 需要的固定文件集合。顺序即生成顺序，文件名即 Xcode 识别的名称，
//! 两者都不可随输入变化。

/// 单个输出图标的目标尺寸与文件名。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub width: u32,
    pub height: u32,
    pub filename: &'static str,
}

impl IconSpec {
    const fn new(width: u32, height: u32, filename: &'static str) -> Self {
        Self {
            width,
            height,
            filename,
        }
    }
}

/// 输出图标数量。
pub const APP_ICON_COUNT: usize = 19;

/// 完整尺寸表（宽、高、文件名）。
pub const APP_ICON_SPECS: [IconSpec; APP_ICON_COUNT] = [
    IconSpec::new(20, 20, "Icon-App-20x20@1x.png"),
    IconSpec::new(40, 40, "Icon-App-20x20@2x.png"),
    IconSpec::new(60, 60, "Icon-App-20x20@3x.png"),
    IconSpec::new(29, 29, "Icon-App-29x29@1x.png"),
    IconSpec::new(58, 58, "Icon-App-29x29@2x.png"),
    IconSpec::new(87, 87, "Icon-App-29x29@3x.png"),
    IconSpec::new(40, 40, "Icon-App-40x40@1x.png"),
    IconSpec::new(80, 80, "Icon-App-40x40@2x.png"),
    IconSpec::new(120, 120, "Icon-App-40x40@3x.png"),
    IconSpec::new(50, 50, "Icon-App-50x50@1x.png"),
    IconSpec::new(57, 57, "Icon-App-57x57@1x.png"),
    IconSpec::new(114, 114, "Icon-App-57x57@2x.png"),
    IconSpec::new(60, 60, "Icon-App-60x60@2x.png"),
    IconSpec::new(180, 180, "Icon-App-60x60@3x.png"),
    IconSpec::new(72, 72, "Icon-App-72x72@1x.png"),
    IconSpec::new(76, 76, "Icon-App-76x76@1x.png"),
    IconSpec::new(152, 152, "Icon-App-76x76@2x.png"),
    IconSpec::new(167, 167, "Icon-App-83.5x83.5@2x.png"),
    IconSpec::new(1024, 1024, "Icon-App-1024x1024@1x.png"),
];
