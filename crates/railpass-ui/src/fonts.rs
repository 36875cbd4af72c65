//! CJK font loading.
//!
//! egui's bundled fonts carry no CJK glyphs and the login screen's strings
//! are Chinese. No font asset is shipped; the first readable font from a
//! list of well-known system locations is appended to both font families.
//! Without one the window still runs, minus those glyphs.

use eframe::egui::{Context, FontData, FontDefinitions, FontFamily};

/// Well-known CJK font locations, tried in order.
const FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    // Windows
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simhei.ttf",
];

const FONT_NAME: &str = "cjk-fallback";

/// Installs the first available system CJK font into `ctx`.
pub(crate) fn install(ctx: &Context) {
    let Some((path, bytes)) = FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        tracing::warn!("no system CJK font found; Chinese labels will render as boxes");
        return;
    };

    tracing::debug!("loaded CJK font from {path}");

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
}
