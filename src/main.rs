use clap::Parser;
use tasacion::{cli, config, error, input, logging, report, selector};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tasacion_common::{parse_markdown_table, Session, TargetHours};
use tracing::warn;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { input, hours, tolerance, all, deselect, output, show_raw } => {
            println!("🚜 tasacion - barrido de mercado\n");

            let mut options = config.session_options();
            if let Some(tolerance) = tolerance {
                options.filter.tolerance_hours = tolerance;
            }
            let target = match hours {
                Some(h) => TargetHours::new(h)?,
                None => TargetHours::from(config.default_target_hours),
            };

            // 1. 読み込み
            let text = input::read_scan_text(&input)?;
            if show_raw {
                println!("## Resultado del barrido\n{}\n", text);
            }

            // 2. パース・絞込み
            let mut session = Session::default().scan(text, target, &options);

            if !session.table.has_table() {
                println!("⚠ No se pudo extraer una tabla estructurada.");
                if let Some(path) = &output {
                    report::save_scan_report(&session, &options, path)?;
                }
                return Ok(());
            }

            println!(
                "✔ {} anuncios extraídos, {} tras el filtro{}",
                session.table.len(),
                session.listings.len(),
                if target.is_active() {
                    format!(" ({} h ± {} h)", target.value(), options.filter.tolerance_hours)
                } else {
                    String::new()
                }
            );
            if !session.table.rejected.is_empty() {
                println!("⚠ {} filas descartadas por formato", session.table.rejected.len());
            }

            if session.listings.is_empty() {
                println!("⚠ Ningún anuncio supera el filtro.");
                if let Some(path) = &output {
                    report::save_scan_report(&session, &options, path)?;
                }
                return Ok(());
            }

            // 3. 選択
            if !deselect.is_empty() {
                for id in selector::deselect_ids(&mut session, &deselect) {
                    warn!(%id, "unknown listing id ignored");
                    println!("⚠ ID desconocido: {}", id);
                }
            } else if !all {
                selector::select_interactive(&mut session)?;
            }

            println!("\n## Anuncios");
            report::print_listings(&session);

            // 4. 評価額
            println!();
            let valuation = session.valuation(&options);
            report::print_valuation(valuation.as_ref(), options.min_sample, &config.currency_symbol);

            if let Some(path) = &output {
                println!();
                report::save_scan_report(&session, &options, path)?;
            }
        }

        Commands::Parse { input } => {
            let text = input::read_scan_text(&input)?;
            let table = parse_markdown_table(&text);
            report::print_parse_report(&table);
        }

        Commands::Config { set_tolerance, reset, show } => {
            let mut config = config;

            if reset {
                config = Config::default();
                config.save()?;
                println!("✔ Configuración restablecida");
            }

            if let Some(hours) = set_tolerance {
                config.set_tolerance(hours)?;
                println!("✔ Margen de horas: ±{} h", hours);
            }

            if show || (!reset && set_tolerance.is_none()) {
                println!("Configuración:");
                println!("  Margen de horas: ±{} h", config.tolerance_hours);
                println!("  Mínimo de anuncios: {}", config.min_sample);
                println!("  Reinicio de selección: {}", config.reset_policy);
                println!("  Moneda: {}", config.currency_symbol);
                println!("  Horas objetivo por defecto: {}", config.default_target_hours);
            }
        }
    }

    Ok(())
}
