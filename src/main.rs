// SPDX-License-Identifier: MPL-2.0
use lingua::{config, global, Translator};

fn main() -> lingua::error::Result<()> {
    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
    let coverage = args.contains("--coverage");
    let keys: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    let cfg = config::load().unwrap_or_default();
    global::install(Translator::new(lang, &cfg));
    let translator = global::get();

    if coverage {
        let report = translator.coverage_report();
        println!("{} keys across the catalog", report.total_keys);
        for entry in &report.locales {
            println!(
                "{}: {}/{} ({:.1}%)",
                entry.locale, entry.present, report.total_keys, entry.coverage_percent
            );
            for key in &entry.missing {
                println!("  missing {}", key);
            }
        }
        return Ok(());
    }

    if keys.is_empty() {
        println!("active locale: {}", translator.current_locale());
        println!("fallback locale: {}", translator.fallback_locale());
        let tags: Vec<String> = translator
            .available_locales
            .iter()
            .map(|l| l.to_string())
            .collect();
        println!("available locales: {}", tags.join(", "));
        return Ok(());
    }

    for key in keys {
        println!("{}", translator.tr(&key));
    }
    Ok(())
}
