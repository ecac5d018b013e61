use egui::{Context, FontData, FontDefinitions, FontFamily};

/// Environment variable pointing at a font with Japanese glyphs
pub const FONT_ENV: &str = "KIMONO_CJK_FONT";

const FONT_NAME: &str = "cjk";

#[cfg(not(target_arch = "wasm32"))]
const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// The default egui fonts have no kanji; append a system CJK font as fallback
/// so item names render.
pub fn install_cjk_fallback(ctx: &Context) {
    match find_cjk_font() {
        Some(bytes) => {
            let mut fonts = FontDefinitions::default();
            fonts
                .font_data
                .insert(FONT_NAME.to_owned(), FontData::from_owned(bytes).into());
            for family in [FontFamily::Proportional, FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push(FONT_NAME.to_owned());
            }
            ctx.set_fonts(fonts);
        }
        None => log::warn!("No CJK font found; set {FONT_ENV} to render Japanese names"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn find_cjk_font() -> Option<Vec<u8>> {
    let from_env = std::env::var(FONT_ENV).ok();
    from_env
        .iter()
        .map(String::as_str)
        .chain(CANDIDATES.iter().copied())
        .find_map(|path| match std::fs::read(path) {
            Ok(bytes) => {
                log::info!("Using CJK font {path}");
                Some(bytes)
            }
            Err(err) => {
                log::trace!("Skipping font {path}: {err}");
                None
            }
        })
}

#[cfg(target_arch = "wasm32")]
fn find_cjk_font() -> Option<Vec<u8>> {
    None
}
