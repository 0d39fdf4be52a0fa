use anyhow::Result;

use blitkit_core::App;
use blitkit_invaders::InvadersApp;
use blitkit_sdl2::{SdlContext, SdlInitInfo};

/// Launch the invaders demo in an SDL2 window at the given integer scale.
pub fn run_invaders(scale: u32) -> Result<()> {
    let app = InvadersApp::new();
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(scale)
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)
}
