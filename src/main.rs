use env_logger::Env;

const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let filepath = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let presenter = mandelbrot_explorer::PpmFilePresenter::new();
    let config = mandelbrot_explorer::ExplorerConfig::default();
    let mut controller = mandelbrot_explorer::CliRenderController::new(presenter, config);

    controller.generate()?;
    controller.write(&filepath)?;

    log::info!("wrote {}", filepath);

    Ok(())
}
