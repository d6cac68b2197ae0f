// ==========================================
// 电气服务后台 - 命令行入口
// ==========================================
// 用法:
// 全局选项: --config <path>, --perf (输出 perf 计时日志)
//   elektrik-backend [--config <path>] calc <request.json>
//   elektrik-backend [--config <path>] quote <service_id> <district> [urgency]
//   elektrik-backend [--config <path>] services [category]
//   elektrik-backend [--config <path>] testimonials
//   elektrik-backend [--config <path>] contact <form.json>
//   elektrik-backend [--config <path>] engine-info
// 输出: JSON (stdout), 日志 (stderr)
// ==========================================

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Local;

use elektrik_backend::api::{parse_urgency, CalculationApi, CatalogApi};
use elektrik_backend::config::ConfigManager;
use elektrik_backend::domain::{ContactRequest, QuoteRequest};
use elektrik_backend::{logging, APP_NAME, VERSION};

const USAGE: &str = "\
usage: elektrik-backend [--config <path>] [--perf] <command>

commands:
  calc <request.json>                        compute electrical load
  quote <service_id> <district> [urgency]    price a service (urgency: normal|urgent|emergency)
  services [category]                        list the service catalog
  testimonials                               list customer testimonials
  contact <form.json>                        submit a contact form
  engine-info                                show the selected load engine";

fn main() -> anyhow::Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let config_path = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            if i + 1 >= args.len() {
                bail!("--config requires a path\n\n{}", USAGE);
            }
            let path = PathBuf::from(args.remove(i + 1));
            args.remove(i);
            Some(path)
        }
        None => None,
    };

    let perf = match args.iter().position(|a| a == "--perf") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };

    let manager = ConfigManager::load_with(config_path.as_deref(), |key| std::env::var(key).ok())
        .context("failed to load configuration")?;
    let config = manager.config();

    logging::init_with_level(&config.log_level);
    if perf {
        elektrik_backend::perf::set_enabled(true);
    }
    tracing::debug!(app = APP_NAME, version = VERSION, config = ?manager.source(), "starting");

    let mut args = args.into_iter();
    let command = match args.next() {
        Some(c) => c,
        None => bail!("{}", USAGE),
    };

    let output = match command.as_str() {
        "calc" => {
            let path = args.next().context("calc requires a request file")?;
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path))?;
            CalculationApi::from_config(config).calculate_json(&raw)?
        }
        "quote" => {
            let service_id = args.next().context("quote requires a service id")?;
            let district = args.next().context("quote requires a district")?;
            let urgency = match args.next() {
                Some(u) => parse_urgency(&u)?,
                None => Default::default(),
            };
            let request = QuoteRequest {
                service_id,
                district,
                urgency,
            };
            let response = CatalogApi::from_config(config).quote(&request, Local::now().date_naive())?;
            serde_json::to_string_pretty(&response)?
        }
        "services" => {
            let api = CatalogApi::from_config(config);
            let services = match args.next() {
                Some(category) => api.services_by_category(&category),
                None => api.list_services(),
            };
            serde_json::to_string_pretty(&services)?
        }
        "testimonials" => {
            let testimonials = CatalogApi::from_config(config).list_testimonials();
            serde_json::to_string_pretty(&testimonials)?
        }
        "contact" => {
            let path = args.next().context("contact requires a form file")?;
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path))?;
            let request: ContactRequest = serde_json::from_str(&raw)?;
            let response = CatalogApi::from_config(config).submit_contact(&request)?;
            serde_json::to_string_pretty(&response)?
        }
        "engine-info" => {
            let info = CalculationApi::from_config(config).engine_info();
            serde_json::to_string_pretty(&info)?
        }
        "-h" | "--help" | "help" => USAGE.to_string(),
        other => bail!("unknown command: {}\n\n{}", other, USAGE),
    };

    println!("{}", output);
    Ok(())
}
