fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scale = match args.next() {
        Some(raw) => match raw.parse::<u32>() {
            Ok(scale) if scale > 0 => scale,
            _ => {
                eprintln!("Invalid scale '{}'. Usage: blitkit [scale]", raw);
                std::process::exit(1);
            }
        },
        None => blitkit_invaders::SCREEN_SCALE,
    };

    log::info!("starting invaders at scale {}", scale);
    if let Err(err) = blitkit::run_invaders(scale) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
