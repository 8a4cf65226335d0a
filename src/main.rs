use calculator::utils::{logger, validation::Validate};
use calculator::{sum, CalcError, CliConfig, Operand};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 先讀設定檔，日誌等級可能來自檔案
    let file = config.load_file();
    let level = file.as_ref().ok().and_then(|f| f.log_level());
    logger::init_cli_logger(config.verbose, level.as_deref());

    tracing::debug!("CLI config: {:?}", config);

    let file = match file {
        Ok(file) => file,
        Err(e) => exit_with(e),
    };

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let settings = config.settings(&file);
    tracing::debug!("Output settings: {:?}", settings);

    let (a, b, result) = match evaluate(&config.a, &config.b) {
        Ok(values) => values,
        Err(e) => exit_with(e),
    };
    tracing::info!("✅ {} + {} = {}", a, b, result);

    match settings.render(a, b, result) {
        Ok(output) => println!("{}", output),
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn evaluate(a: &str, b: &str) -> calculator::Result<(Operand, Operand, Operand)> {
    let a = a.parse::<Operand>().map_err(|e| e.for_operand("a"))?;
    let b = b.parse::<Operand>().map_err(|e| e.for_operand("b"))?;
    Ok((a, b, sum(a, b)?))
}

fn exit_with(e: CalcError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
