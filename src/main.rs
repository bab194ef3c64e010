use clap::Parser;
use farm_advisory_toolbox::{
    agronomy::{crop_calendar, fertilizer},
    app::{self, AppError},
    cli::{Cli, Commands},
    config, i18n, logging, ui_cli,
};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        tracing::error!(%err, "cli terminated with error");
        eprintln!("{}: {err}", i18n::fallback_bundle().get(i18n::keys::ERROR_PREFIX).unwrap_or("Error"));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_from(&cli.config)?;
    logging::init(&cfg.log_level);
    let config_lang = (cfg.language != "auto").then_some(cfg.language.as_str());
    let language = i18n::resolve_language(&cli.lang, config_lang);
    tracing::debug!(%language, config = %cli.config.display(), "cli starting");
    let tr = app::translator_for(&cfg, &language);
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => app::run(&mut cfg, &cli.config, &language)?,
        Commands::Calc {
            crop,
            area,
            soil,
            strict,
        } => {
            let outcome = if strict {
                fertilizer::Calculation::Computed(fertilizer::try_calculate_from_text(&crop, &area, &soil)?)
            } else {
                fertilizer::calculate_from_text(&crop, &area, &soil)
            };
            print!("{}", ui_cli::render_calculation(&tr, &outcome));
        }
        Commands::Strings => print!("{}", ui_cli::render_bundle(tr.bundle())),
        Commands::Calendar { crop } => {
            print!("{}", ui_cli::render_calendar(&tr, crop_calendar::calendar_for(&crop)));
        }
    }
    Ok(())
}
